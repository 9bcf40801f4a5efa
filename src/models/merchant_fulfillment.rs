// src/models/merchant_fulfillment.rs
//
// Merchant Fulfillment datatypes: shipping service quotes, labels and the
// additional seller inputs some carriers require.
// https://docs.developer.amazonservices.com/en_UK/merch_fulfill/MerchFulfill_Datatypes.html

use super::common::{DateTime, DimensionUnit, Dimensions, Weight};
use super::finances::CurrencyAmount;
use super::outbound::Currency;
use crate::literal::flag;
use serde::{Deserialize, Serialize};

// =============================================================================
// Addresses and Items
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub name: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_or_county: Option<String>,
    pub email: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,
    pub postal_code: String,
    pub country_code: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransparencyCodeList {
    pub transparency_code: String,
}

/// An order item to ship. EasyShip's `Item` is a different record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency_code_list: Option<TransparencyCodeList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_level_seller_inputs_list: Option<ItemLevelSellerInputsList>,
}

// =============================================================================
// Additional Seller Inputs
// =============================================================================

literal_enum! {
    pub enum SellerInputDataType {
        String => "String",
        Boolean => "Boolean",
        Integer => "Integer",
        Timestamp => "Timestamp",
        Address => "Address",
        Weight => "Weight",
        Dimension => "Dimension",
        Currency => "Currency",
    }
}

/// A typed seller input. Exactly one `ValueAs*` field is expected, matching
/// `DataType`. Used for stored values and shipment-level inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerInputValue {
    pub data_type: SellerInputDataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_string: Option<String>,
    #[serde(
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_as_boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_integer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_dimension: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_currency: Option<CurrencyAmount>,
}

/// The item-level flavour of `SellerInputValue`. The documentation spells
/// two of its fields `DateType` and `ValueAsDimeison`, and types the
/// currency as the outbound `Currency`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemLevelSellerInputValue {
    #[serde(rename = "DateType")]
    pub data_type: SellerInputDataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_string: Option<String>,
    #[serde(
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_as_boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_integer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_weight: Option<Weight>,
    #[serde(rename = "ValueAsDimeison", skip_serializing_if = "Option::is_none")]
    pub value_as_dimension: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_as_currency: Option<Currency>,
}

/// `AdditionalInputFieldName` values come from the GetAdditionalSellerInputs call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemLevelAdditionalSellerInputs {
    pub additional_input_field_name: String,
    pub additional_seller_input: ItemLevelSellerInputValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemLevelSellerInputsList {
    pub additional_seller_inputs: ItemLevelAdditionalSellerInputs,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalSellerInputs {
    pub additional_input_field_name: String,
    pub additional_seller_input: SellerInputValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentLevelSellerInputsList {
    pub additional_seller_inputs: AdditionalSellerInputs,
}

literal_enum! {
    pub enum InputConstraint {
        ValidationRegEx => "ValidationRegEx",
        ValidationString => "ValidationString",
    }
}

literal_enum! {
    pub enum InputTarget {
        ItemLevel => "ITEM_LEVEL",
        ShipmentLevel => "SHIPMENT_LEVEL",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerInputDefinition {
    #[serde(with = "flag")]
    pub is_required: bool,
    pub data_type: SellerInputDataType,
    pub constraints: InputConstraint,
    pub input_display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_target: Option<InputTarget>,
    pub stored_value: SellerInputValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_set_values: Option<String>,
}

/// `AdditionalInputFieldName` examples: `NON_DELIVERABLE_INSTRUCTIONS`,
/// `SENDER_ADDRESS_TRANSLATED`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalInputs {
    pub additional_input_field_name: String,
    pub seller_input_definition: SellerInputDefinition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemLevelFieldsList {
    pub asin: String,
    pub additional_inputs: AdditionalInputs,
}

open_literal_enum! {
    pub enum ShipmentLevelFieldName {
        NonDeliverableInstructions => "NON_DELIVERABLE_INSTRUCTIONS",
        SenderAddressTranslated => "SENDER_ADDRESS_TRANSLATED",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentLevelFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_input_field_name: Option<ShipmentLevelFieldName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_input_definition: Option<SellerInputDefinition>,
}

// =============================================================================
// Labels and Packages
// =============================================================================

literal_enum! {
    pub enum FileType {
        Pdf => "application/pdf",
        Zpl => "application/zpl",
        Png => "image/png",
    }
}

/// `Contents` is the base64 label document; `Checksum` its MD5.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileContents {
    pub contents: String,
    pub file_type: FileType,
    pub checksum: String,
}

literal_enum! {
    pub enum HazmatType {
        None => "None",
        LQHazmat => "LQHazmat",
    }
}

literal_enum! {
    pub enum LabelUnit {
        Inches => "inches",
        Centimeters => "centimeters",
    }
}

impl From<LabelUnit> for DimensionUnit {
    fn from(unit: LabelUnit) -> Self {
        match unit {
            LabelUnit::Inches => DimensionUnit::Inches,
            LabelUnit::Centimeters => DimensionUnit::Centimeters,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelDimensions {
    pub length: f64,
    pub width: f64,
    pub unit: LabelUnit,
}

/// The label record spells the identifier field `StandardIForLabel`, unlike
/// `LabelCustomization`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text_for_label: Option<String>,
    pub dimensions: LabelDimensions,
    pub file_contents: FileContents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<String>,
    #[serde(rename = "StandardIForLabel", skip_serializing_if = "Option::is_none")]
    pub standard_id_for_label: Option<String>,
}

literal_enum! {
    pub enum StandardIdForLabel {
        AmazonOrderId => "AmazonOrderId",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelCustomization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_text_for_label: Option<String>,
    pub standard_id_for_label: StandardIdForLabel,
}

/// Either explicit measurements or one of the vendor's predefined package
/// names in `PredefinedPackageDimensions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<LabelUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_package_dimensions: Option<String>,
}

// =============================================================================
// Shipping Services
// =============================================================================

open_literal_enum! {
    pub enum RejectionReasonCode {
        Ineligible => "INELIGIBLE",
        ShipDateOutOfRange => "SHIP_DATE_OUT_OF_RANGE",
        CarrierCannotShipToPobox => "CARRIER_CANNOT_SHIP_TO_POBOX",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RejectedShippingService {
    pub carrier_name: String,
    pub shipping_service_id: String,
    pub rejection_reason_code: RejectionReasonCode,
    pub rejection_reason_message: String,
    pub shipping_service_name: String,
}

literal_enum! {
    pub enum DeliveryExperience {
        DeliveryConfirmationWithAdultSignature => "DeliveryConfirmationWithAdultSignature",
        DeliveryConfirmationWithSignature => "DeliveryConfirmationWithSignature",
        DeliveryConfirmationWithoutSignature => "DeliveryConfirmationWithoutSignature",
        NoTracking => "NoTracking",
    }
}

/// `LabelFormat` takes one of the service's `AvailableLabelFormats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingServiceOptions {
    pub delivery_experience: DeliveryExperience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<CurrencyAmount>,
    #[serde(with = "flag")]
    pub carrier_will_pickup: bool,
    pub label_format: String,
}

literal_enum! {
    pub enum LabelFormat {
        Png => "PNG",
        Pdf => "PDF",
        Zpl203 => "ZPL203",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingService {
    pub shipping_service_name: String,
    pub carrier_name: String,
    pub shipping_service_id: String,
    pub shipping_service_offer_id: String,
    pub ship_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_estimated_delivery_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_estimated_delivery_date: Option<DateTime>,
    pub rate: CurrencyAmount,
    pub shipping_service_options: ShippingServiceOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_label_formats: Option<LabelFormat>,
    #[serde(with = "flag")]
    pub requires_additional_seller_inputs: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingOfferingFilter {
    #[serde(
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_complex_shipping_options: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemporarilyUnavailableCarrier {
    pub carrier_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TermsAndConditionsNotAcceptedCarrier {
    pub carrier_name: String,
}

// =============================================================================
// Shipments
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentRequestDetails {
    pub amazon_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    pub item_list: Vec<Item>,
    pub ship_from_address: Address,
    pub package_dimensions: PackageDimensions,
    pub weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_arrive_by_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime>,
    pub shipping_service_options: ShippingServiceOptions,
    pub label_customization: LabelCustomization,
}

literal_enum! {
    pub enum ShipmentStatus {
        Purchased => "Purchased",
        RefundPending => "RefundPending",
        RefundRejected => "RefundRejected",
        RefundApplied => "RefundApplied",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    pub shipment_id: String,
    pub amazon_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    pub item_list: Vec<Item>,
    pub ship_from_address: Address,
    pub ship_to_address: Address,
    pub package_dimensions: PackageDimensions,
    pub weight: Weight,
    pub insurance: CurrencyAmount,
    pub shipping_service: ShippingService,
    pub label: Label,
    pub status: ShipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    pub created_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime>,
}
