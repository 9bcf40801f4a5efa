// src/models/inbound.rs
//
// Fulfillment Inbound Shipment datatypes: shipment plans, prep instructions
// and the partnered / non-partnered transport records.
// https://docs.developer.amazonservices.com/en_UK/fba_inbound/FBAInbound_Datatypes.html

use super::common::{CalendarDate, DateTime, Dimensions, Weight};
use crate::literal::flag;
use serde::{Deserialize, Serialize};

// =============================================================================
// Addresses, Contacts and Amounts
// =============================================================================

/// Ship-from address. Field limits: `Name` 50, `AddressLine1` 180,
/// `AddressLine2` 60, `City` 30, `DistrictOrCounty` 25,
/// `StateOrProvinceCode` 2, `CountryCode` 2 (ISO 3166-1 alpha-2),
/// `PostalCode` 30.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub name: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_or_county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub fax: String,
}

literal_enum! {
    pub enum AmountCurrency {
        USD => "USD",
        GBP => "GBP",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Amount {
    pub currency_code: AmountCurrency,
    pub value: String,
}

// =============================================================================
// Prep Instructions and Guidance
// =============================================================================

literal_enum! {
    pub enum PrepInstruction {
        Polybagging => "Polybagging",
        BubbleWrapping => "BubbleWrapping",
        Taping => "Taping",
        BlackShrinkWrapping => "BlackShrinkWrapping",
        Labeling => "Labeling",
        HangGarment => "HangGarment",
    }
}

literal_enum! {
    pub enum PrepOwner {
        Amazon => "AMAZON",
        Seller => "SELLER",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrepDetails {
    pub prep_instruction: PrepInstruction,
    pub prep_owner: PrepOwner,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AmazonPrepFeesDetails {
    pub prep_instruction: PrepInstruction,
    pub fee_per_unit: Amount,
}

literal_enum! {
    pub enum InboundGuidance {
        InboundNotRecommended => "InboundNotRecommended",
        InboundOK => "InboundOK",
    }
}

literal_enum! {
    pub enum GuidanceReason {
        SlowMovingASIN => "SlowMovingASIN",
        NoApplicableGuidance => "NoApplicableGuidance",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ASINInboundGuidance {
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub inbound_guidance: InboundGuidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_reason_list: Option<Vec<GuidanceReason>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SKUInboundGuidance {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub inbound_guidance: InboundGuidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_reason_list: Option<Vec<GuidanceReason>>,
}

literal_enum! {
    pub enum PrepGuidance {
        ConsultHelpDocuments => "ConsultHelpDocuments",
        NoAdditionalPrepRequired => "NoAdditionalPrepRequired",
        SeePrepInstructionsList => "SeePrepInstructionsList",
    }
}

literal_enum! {
    /// Barcode instruction for an ASIN.
    pub enum AsinBarcodeInstruction {
        RequiresFNSKULabel => "RequiresFNSKULabel",
        MustProvideSellerSKU => "MustProvideSellerSKU",
    }
}

literal_enum! {
    /// Barcode instruction for a seller SKU. Shares only `RequiresFNSKULabel`
    /// with the ASIN variant.
    pub enum SkuBarcodeInstruction {
        RequiresFNSKULabel => "RequiresFNSKULabel",
        CanUseOriginalBarcode => "CanUseOriginalBarcode",
    }
}

/// The documentation has no "Required" column for this record; the
/// optionality below follows the field descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ASINPrepInstructions {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_instruction: Option<AsinBarcodeInstruction>,
    pub prep_guidance: PrepGuidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_instruction_list: Option<Vec<PrepInstruction>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SKUPrepInstructions {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub barcode_instruction: SkuBarcodeInstruction,
    pub prep_guidance: PrepGuidance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_instruction_list: Option<Vec<PrepInstruction>>,
    pub amazon_prep_fees_details: Vec<AmazonPrepFeesDetails>,
}

// =============================================================================
// Shipments and Plans
// =============================================================================

literal_enum! {
    pub enum BoxContentsSource {
        None => "NONE",
        Feed => "FEED",
        TwoDBarcode => "2D_BARCODE",
        Interactive => "INTERACTIVE",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoxContentsFeeDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_units: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_per_unit: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fee: Option<Amount>,
}

literal_enum! {
    pub enum LabelPrepPreference {
        SellerLabel => "SELLER_LABEL",
        AmazonLabelOnly => "AMAZON_LABEL_ONLY",
        AmazonLabelPreferred => "AMAZON_LABEL_PREFERRED",
    }
}

literal_enum! {
    pub enum LabelPrepType {
        NoLabel => "NO_LABEL",
        SellerLabel => "SELLER_LABEL",
        AmazonLabel => "AMAZON_LABEL",
    }
}

literal_enum! {
    /// The statuses a seller may set when creating or updating a shipment.
    pub enum HeaderShipmentStatus {
        Working => "WORKING",
        Shipped => "SHIPPED",
        Cancelled => "CANCELLED",
    }
}

literal_enum! {
    pub enum ShipmentStatus {
        Working => "WORKING",
        Shipped => "SHIPPED",
        InTransit => "IN_TRANSIT",
        Delivered => "DELIVERED",
        CheckedIn => "CHECKED_IN",
        Receiving => "RECEIVING",
        Closed => "CLOSED",
        Cancelled => "CANCELLED",
        Deleted => "DELETED",
        Error => "ERROR",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentHeader {
    pub shipment_name: String,
    pub ship_from_address: Address,
    pub destination_fulfillment_center_id: String,
    pub label_prep_preference: LabelPrepPreference,
    #[serde(
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub are_cases_required: Option<bool>,
    pub shipment_status: HeaderShipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_box_contents_source: Option<BoxContentsSource>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_name: Option<String>,
    pub ship_from_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_fulfillment_center_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_prep_type: Option<LabelPrepType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<ShipmentStatus>,
    #[serde(with = "flag")]
    pub are_cases_required: bool,
    /// Only returned in India and Japan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_need_by_date: Option<CalendarDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_contents_source: Option<BoxContentsSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_box_contents_fee: Option<BoxContentsFeeDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    #[serde(rename = "FulfillmentNetworkSKU", skip_serializing_if = "Option::is_none")]
    pub fulfillment_network_sku: Option<String>,
    pub quantity_shipped: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_received: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_in_case: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_details_list: Option<Vec<PrepDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<CalendarDate>,
}

/// `Items` is declared as a single record, not a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentPlan {
    pub shipment_id: String,
    pub destination_fulfillment_center_id: String,
    pub ship_to_address: Address,
    pub label_prep_type: LabelPrepType,
    pub items: InboundShipmentPlanItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_box_contents_fee: Option<BoxContentsFeeDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentPlanItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    #[serde(rename = "FulfillmentNetworkSKU")]
    pub fulfillment_network_sku: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_details_list: Option<Vec<PrepDetails>>,
}

literal_enum! {
    /// Item condition, shared with FBA Inventory.
    pub enum ItemCondition {
        NewItem => "NewItem",
        NewWithWarranty => "NewWithWarranty",
        NewOEM => "NewOEM",
        NewOpenBox => "NewOpenBox",
        UsedLikeNew => "UsedLikeNew",
        UsedVeryGood => "UsedVeryGood",
        UsedGood => "UsedGood",
        UsedAcceptable => "UsedAcceptable",
        UsedPoor => "UsedPoor",
        UsedRefurbished => "UsedRefurbished",
        CollectibleLikeNew => "CollectibleLikeNew",
        CollectibleVeryGood => "CollectibleVeryGood",
        CollectibleGood => "CollectibleGood",
        CollectibleAcceptable => "CollectibleAcceptable",
        CollectiblePoor => "CollectiblePoor",
        RefurbishedWithWarranty => "RefurbishedWithWarranty",
        Refurbished => "Refurbished",
        Club => "Club",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundShipmentPlanRequestItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_in_case: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_details_list: Option<Vec<PrepDetails>>,
}

literal_enum! {
    /// The vendor spells this one `DoestNotExist`.
    pub enum InvalidAsinReason {
        DoestNotExist => "DoestNotExist",
    }
}

literal_enum! {
    pub enum InvalidSkuReason {
        DoesNotExist => "DoesNotExist",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidASIN {
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub error_reason: InvalidAsinReason,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidSKU {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    pub error_reason: InvalidSkuReason,
}

// =============================================================================
// Transport: Non-partnered Carriers
// =============================================================================

literal_enum! {
    /// Carriers a seller may name for a non-partnered shipment.
    pub enum NonPartneredCarrier {
        // UK
        BusinessPost => "BUSINESS_POST",
        DhlAirwaysInc => "DHL_AIRWAYS_INC",
        DhlUk => "DHL_UK",
        Parcelforce => "PARCELFORCE",
        Dpd => "DPD",
        TntLogisticsCorporation => "TNT_LOGISTICS_CORPORATION",
        Tnt => "TNT",
        Yodel => "YODEL",
        // UK and US
        UnitedParcelServiceInc => "UNITED_PARCEL_SERVICE_INC",
        Other => "OTHER",
        // US
        DhlExpressUsaInc => "DHL_EXPRESS_USA_INC",
        FederalExpressCorp => "FEDERAL_EXPRESS_CORP",
        UnitedStatesPostalService => "UNITED_STATES_POSTAL_SERVICE",
    }
}

literal_enum! {
    pub enum PackageStatus {
        Shipped => "SHIPPED",
        InTransit => "IN_TRANSIT",
        Delivered => "DELIVERED",
        CheckedIn => "CHECKED_IN",
        Receiving => "RECEIVING",
        Closed => "CLOSED",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonPartneredLtlDataInput {
    pub carrier_name: NonPartneredCarrier,
}

pub type NonPartneredLtlDataOutput = NonPartneredLtlDataInput;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonPartneredSmallParcelDataInput {
    pub carrier_name: NonPartneredCarrier,
    pub package_list: Vec<NonPartneredSmallParcelPackageInput>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonPartneredSmallParcelDataOutput {
    pub package_list: Vec<NonPartneredSmallParcelPackageOutput>,
}

/// `TrackingId` is at most 30 characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonPartneredSmallParcelPackageInput {
    pub tracking_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NonPartneredSmallParcelPackageOutput {
    pub carrier_name: NonPartneredCarrier,
    pub tracking_id: String,
    pub package_status: PackageStatus,
}

// =============================================================================
// Transport: Partnered Carriers
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pallet {
    pub dimensions: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(with = "flag")]
    pub is_stacked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredEstimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_deadline: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_deadline: Option<DateTime>,
}

literal_enum! {
    pub enum FreightClass {
        Class50 => "50",
        Class55 => "55",
        Class60 => "60",
        Class65 => "65",
        Class70 => "70",
        Class77Point5 => "77.5",
        Class85 => "85",
        Class92Point5 => "92.5",
        Class100 => "100",
        Class110 => "110",
        Class125 => "125",
        Class150 => "150",
        Class175 => "175",
        Class200 => "200",
        Class250 => "250",
        Class300 => "300",
        Class400 => "400",
        Class500 => "500",
    }
}

/// `FreightReadyDate` is a `YYYY-MM-DD` date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredLtlDataInput {
    pub contact: Contact,
    pub box_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_freight_class: Option<FreightClass>,
    pub freight_ready_date: CalendarDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_list: Option<Vec<Pallet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_declared_value: Option<Amount>,
}

literal_enum! {
    /// Carriers Amazon may assign to a partnered LTL shipment (US only).
    pub enum PartneredLtlCarrier {
        DhlExpressUsaInc => "DHL_EXPRESS_USA_INC",
        FederalExpressCorp => "FEDERAL_EXPRESS_CORP",
        UnitedStatesPostalService => "UNITED_STATES_POSTAL_SERVICE",
        UnitedParcelServiceInc => "UNITED_PARCEL_SERVICE_INC",
        Other => "OTHER",
    }
}

/// Everything the seller sent in `PartneredLtlDataInput`, plus Amazon's quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredLtlDataOutput {
    #[serde(flatten)]
    pub input: PartneredLtlDataInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_calculated_value: Option<Amount>,
    pub preview_pickup_date: DateTime,
    pub preview_delivery_date: DateTime,
    pub preview_freight_class: FreightClass,
    pub amazon_reference_id: String,
    #[serde(with = "flag")]
    pub is_bill_of_lading_available: bool,
    pub partnered_estimate: PartneredEstimate,
    pub carrier_name: PartneredLtlCarrier,
}

literal_enum! {
    pub enum PartneredSmallParcelCarrier {
        /// FR, IT, ES, UK, US and DE.
        UnitedParcelServiceInc => "UNITED_PARCEL_SERVICE_INC",
        /// DE only.
        DhlStandard => "DHL_STANDARD",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredSmallParcelDataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<PartneredSmallParcelCarrier>,
    pub package_list: Vec<PartneredSmallParcelPackageInput>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredSmallParcelDataOutput {
    pub package_list: Vec<PartneredSmallParcelPackageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnered_estimate: Option<PartneredEstimate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredSmallParcelPackageInput {
    pub dimensions: Dimensions,
    pub weight: Weight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartneredSmallParcelPackageOutput {
    pub dimensions: Dimensions,
    pub weight: Weight,
    pub tracking_id: String,
    pub package_status: PackageStatus,
    pub carrier_name: String,
}

// =============================================================================
// Transport Content
// =============================================================================

literal_enum! {
    /// Small parcel (`SP`) or less than truckload (`LTL`).
    pub enum ShipmentType {
        SP => "SP",
        LTL => "LTL",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportHeader {
    pub seller_id: String,
    pub shipment_id: String,
    #[serde(with = "flag")]
    pub is_partnered: bool,
    pub shipment_type: ShipmentType,
}

literal_enum! {
    pub enum TransportStatus {
        Working => "WORKING",
        ErrorOnEstimating => "ERROR_ON_ESTIMATING",
        Estimating => "ESTIMATING",
        Estimated => "ESTIMATED",
        ErrorOnConfirming => "ERROR_ON_CONFIRMING",
        Confirming => "CONFIRMING",
        Confirmed => "CONFIRMED",
        Voiding => "VOIDING",
        Voided => "VOIDED",
        ErrorInVoiding => "ERROR_IN_VOIDING",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportResult {
    pub transport_status: TransportStatus,
}

/// At most one of the four transport records is expected to be present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportDetailInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnered_small_parcel_data: Option<PartneredSmallParcelDataInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_partnered_small_parcel_data: Option<NonPartneredSmallParcelDataInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnered_ltl_data: Option<PartneredLtlDataInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_partnered_ltl_data: Option<NonPartneredLtlDataInput>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportDetailOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnered_small_parcel_data: Option<PartneredSmallParcelDataOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_partnered_small_parcel_data: Option<NonPartneredSmallParcelDataOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnered_ltl_data: Option<PartneredLtlDataOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_partnered_ltl_data: Option<NonPartneredLtlDataOutput>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportContent {
    pub transport_header: TransportHeader,
    pub transport_details: TransportDetailOutput,
    pub transport_result: TransportResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransportDocument {
    pub pdf_document: String,
    pub checksum: String,
}
