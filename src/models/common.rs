// src/models/common.rs
//
// Shapes shared across several API sections: timestamps, dimensions, weights.

use crate::error::{Error, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Timestamps
// =============================================================================

/// An ISO 8601 timestamp exactly as it appeared on the wire.
///
/// The text is kept verbatim so a payload re-serializes byte for byte;
/// `to_utc` parses it on demand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime(pub String);

impl DateTime {
    pub fn new(text: impl Into<String>) -> Self {
        DateTime(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the wire text as RFC 3339 and converts to UTC.
    pub fn to_utc(&self) -> Result<chrono::DateTime<Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.0)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|source| Error::Timestamp {
                value: self.0.clone(),
                source,
            })
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        DateTime(dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar date written as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(pub String);

impl CalendarDate {
    pub fn new(text: impl Into<String>) -> Self {
        CalendarDate(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_naive(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").map_err(|source| Error::Timestamp {
            value: self.0.clone(),
            source,
        })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date.format("%Y-%m-%d").to_string())
    }
}

// =============================================================================
// Dimensions and Weight
// =============================================================================

literal_enum! {
    /// `cm` is used by EasyShip, `inches` and `centimeters` by FBA Inbound.
    pub enum DimensionUnit {
        Cm => "cm",
        Inches => "inches",
        Centimeters => "centimeters",
    }
}

/// Package dimensions, shared by EasyShip, FBA Inbound and Merchant Fulfillment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

literal_enum! {
    /// Each API section spells its weight units differently:
    /// `g` in EasyShip, `pounds`/`kilograms` in FBA Inbound, `KG`/`LB` in FBA
    /// Outbound and `grams`/`ounces` in Merchant Fulfillment.
    pub enum WeightUnit {
        G => "g",
        Pounds => "pounds",
        Kilograms => "kilograms",
        Kg => "KG",
        Lb => "LB",
        Grams => "grams",
        Ounces => "ounces",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}
