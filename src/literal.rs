// src/literal.rs
//
// Literal-union machinery. The vendor documents most enumerated fields as a
// fixed set of strings; `literal_enum!` turns such a set into a Rust enum that
// reads and writes exactly those strings. Sets the vendor only lists as
// "examples" use `open_literal_enum!`, which keeps unknown values verbatim.

/// Declares a closed literal union.
///
/// ```
/// mws_datatypes::literal_enum! {
///     /// Where a package is in its life.
///     pub enum Stage {
///         Unscheduled => "Unscheduled",
///         Scheduled => "Scheduled",
///     }
/// }
///
/// assert_eq!(Stage::Scheduled.as_str(), "Scheduled");
/// assert!("scheduled".parse::<Stage>().is_err());
/// ```
#[macro_export]
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every documented wire value, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact wire string for this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::LiteralError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    other => Err($crate::error::LiteralError::new(stringify!($name), other)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let text = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                match text.as_str() {
                    $( $lit => Ok($name::$variant), )+
                    other => Err(<D::Error as ::serde::de::Error>::unknown_variant(
                        other,
                        Self::LITERALS,
                    )),
                }
            }
        }
    };
}

/// Declares a literal union whose documented values are examples rather
/// than a closed set. Undocumented values land in `Other` and are written
/// back unchanged.
#[macro_export]
macro_rules! open_literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value the vendor documentation does not list. Compares equal
            /// to the documented variant with the same text.
            Other(::std::string::String),
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl $name {
            /// Every documented wire value, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            /// The wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $lit, )+
                    $name::Other(value) => value.as_str(),
                }
            }

            /// Maps any text onto the union, falling back to `Other`.
            pub fn from_literal(s: &str) -> Self {
                match s {
                    $( $lit => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }

            pub fn is_documented(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_literal(s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let text = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_literal(&text))
            }
        }
    };
}

/// Serde helpers for boolean fields the vendor documents ambiguously: some
/// pages show native booleans, others the strings `"true"` and `"false"`.
/// Both are accepted on input; a native boolean is always written.
pub mod flag {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Native(bool),
        Text(String),
    }

    impl Wire {
        fn into_bool<E: de::Error>(self) -> Result<bool, E> {
            match self {
                Wire::Native(value) => Ok(value),
                Wire::Text(text) => match text.as_str() {
                    "true" => Ok(true),
                    "false" => Ok(false),
                    other => Err(E::invalid_value(
                        Unexpected::Str(other),
                        &"a boolean or the string \"true\" or \"false\"",
                    )),
                },
            }
        }
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Wire::deserialize(deserializer)?.into_bool()
    }

    /// The same rules for optional fields. Pair with `#[serde(default)]`.
    pub mod option {
        use super::Wire;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_some(value),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<Wire>::deserialize(deserializer)?
                .map(Wire::into_bool)
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    literal_enum! {
        enum Speed {
            Standard => "Standard",
            Expedited => "Expedited",
            MarketplaceFacilitatorTaxShipping => "MarketplaceFacilitatorTax-Shipping",
        }
    }

    open_literal_enum! {
        enum Reason {
            InventoryUnavailable => "InventoryUnavailable",
            NoDeliveryOption => "NoDeliveryOption",
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Flags {
        #[serde(with = "super::flag")]
        required: bool,
        #[serde(
            default,
            with = "super::flag::option",
            skip_serializing_if = "Option::is_none"
        )]
        optional: Option<bool>,
    }

    #[test]
    fn test_closed_literal_round_trips_exact_text() {
        let speed: Speed = serde_json::from_value(json!("MarketplaceFacilitatorTax-Shipping")).unwrap();
        assert_eq!(speed, Speed::MarketplaceFacilitatorTaxShipping);
        assert_eq!(
            serde_json::to_value(speed).unwrap(),
            json!("MarketplaceFacilitatorTax-Shipping")
        );
        assert_eq!(Speed::ALL.len(), Speed::LITERALS.len());
    }

    #[test]
    fn test_closed_literal_rejects_case_variants() {
        let err = serde_json::from_value::<Speed>(json!("standard")).unwrap_err();
        assert!(err.to_string().contains("unknown variant `standard`"));

        let err = "EXPEDITED".parse::<Speed>().unwrap_err();
        assert_eq!(err.kind, "Speed");
        assert_eq!(err.value, "EXPEDITED");
    }

    #[test]
    fn test_open_literal_keeps_unknown_value() {
        let reason: Reason = serde_json::from_value(json!("WarehouseClosed")).unwrap();
        assert_eq!(reason, Reason::Other("WarehouseClosed".to_string()));
        assert!(!reason.is_documented());
        assert_eq!(serde_json::to_value(&reason).unwrap(), json!("WarehouseClosed"));

        let known: Reason = "NoDeliveryOption".parse().unwrap();
        assert!(known.is_documented());
    }

    #[test]
    fn test_open_literal_compares_by_wire_text() {
        use std::collections::HashSet;

        let spelled_out = Reason::Other("NoDeliveryOption".to_string());
        assert_eq!(spelled_out, Reason::NoDeliveryOption);
        assert_ne!(spelled_out, Reason::InventoryUnavailable);
        assert_ne!(Reason::Other("nodeliveryoption".to_string()), Reason::NoDeliveryOption);

        let seen: HashSet<Reason> = [spelled_out, Reason::NoDeliveryOption].into_iter().collect();
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_flag_accepts_native_and_text_booleans() {
        let native: Flags = serde_json::from_value(json!({"required": true})).unwrap();
        assert!(native.required);
        assert_eq!(native.optional, None);

        let text: Flags =
            serde_json::from_value(json!({"required": "false", "optional": "true"})).unwrap();
        assert!(!text.required);
        assert_eq!(text.optional, Some(true));

        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"required": false, "optional": true})
        );
    }

    #[test]
    fn test_flag_rejects_other_text() {
        assert!(serde_json::from_value::<Flags>(json!({"required": "yes"})).is_err());
        assert!(serde_json::from_value::<Flags>(json!({})).is_err());
    }
}
