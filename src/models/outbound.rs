// src/models/outbound.rs
//
// Fulfillment Outbound Shipment datatypes: fulfillment orders, previews,
// shipments and returns.
// https://docs.developer.amazonservices.com/en_UK/fba_outbound/FBAOutbound_Datatypes.html

use super::common::{DateTime, Weight};
use crate::literal::flag;
use serde::{Deserialize, Serialize};

/// Destination address. Uses `Line1`..`Line3` where the inbound address
/// uses `AddressLine1`. `City` is required everywhere except Japan, where it
/// must not be sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub name: String,
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_or_county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub state_or_province_code: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// `CurrencyCode` is a three-letter ISO 4217 code; `Value` is decimal text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency_code: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CODSettings {
    #[serde(
        rename = "IsCODRequired",
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_cod_required: Option<bool>,
    #[serde(rename = "CODCharge", skip_serializing_if = "Option::is_none")]
    pub cod_charge: Option<Currency>,
    #[serde(rename = "CODChargeTax", skip_serializing_if = "Option::is_none")]
    pub cod_charge_tax: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_charge: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_charge_tax: Option<Currency>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryWindow {
    pub start_date_time: DateTime,
    pub end_date_time: DateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledDeliveryInfo {
    pub delivery_time_zone: String,
    pub delivery_windows: Vec<DeliveryWindow>,
}

literal_enum! {
    pub enum FeeName {
        FBAPerUnitFulfillmentFee => "FBAPerUnitFulfillmentFee",
        FBAPerOrderFulfillmentFee => "FBAPerOrderFulfillmentFee",
        FBATransportationFee => "FBATransportationFee",
        FBAFulfillmentCODFee => "FBAFulfillmentCODFee",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fee {
    pub name: FeeName,
    pub amount: Currency,
}

literal_enum! {
    pub enum ShippingSpeedCategory {
        Standard => "Standard",
        Expedited => "Expedited",
        Priority => "Priority",
        ScheduledDelivery => "ScheduledDelivery",
    }
}

// =============================================================================
// Fulfillment Orders
// =============================================================================

/// Field limits: `SellerSKU` and `SellerFulfillmentOrderItemId` 50,
/// `GiftMessage` 512, `DisplayableComment` 250.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFulfillmentOrderItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayable_comment: Option<String>,
    #[serde(rename = "FulfillmentNetworkSKU", skip_serializing_if = "Option::is_none")]
    pub fulfillment_network_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_declared_value: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_price: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_tax: Option<Currency>,
}

/// A `CreateFulfillmentOrderItem` without `SellerSKU` and
/// `FulfillmentNetworkSKU`, which cannot change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFulfillmentOrderItem {
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayable_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_declared_value: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_price: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_tax: Option<Currency>,
}

impl From<CreateFulfillmentOrderItem> for UpdateFulfillmentOrderItem {
    fn from(item: CreateFulfillmentOrderItem) -> Self {
        Self {
            seller_fulfillment_order_item_id: item.seller_fulfillment_order_item_id,
            quantity: item.quantity,
            gift_message: item.gift_message,
            displayable_comment: item.displayable_comment,
            per_unit_declared_value: item.per_unit_declared_value,
            per_unit_price: item.per_unit_price,
            per_unit_tax: item.per_unit_tax,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentOrderItem {
    #[serde(flatten)]
    pub item: CreateFulfillmentOrderItem,
    pub cancelled_quantity: u32,
    pub unfulfillable_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_ship_date_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival_date_time: Option<DateTime>,
}

literal_enum! {
    pub enum FulfillmentAction {
        Ship => "Ship",
        Hold => "Hold",
    }
}

literal_enum! {
    pub enum FulfillmentPolicy {
        FillOrKill => "FillOrKill",
        FillAll => "FillAll",
        FillAllAvailable => "FillAllAvailable",
    }
}

literal_enum! {
    pub enum FulfillmentOrderStatus {
        Received => "RECEIVED",
        Invalid => "INVALID",
        Planning => "PLANNING",
        Processing => "PROCESSING",
        Cancelled => "CANCELLED",
        Complete => "COMPLETE",
        CompletePartialled => "COMPLETE_PARTIALLED",
        Unfulfillable => "UNFULFILLABLE",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentOrder {
    pub seller_fulfillment_order_id: String,
    pub marketplace_id: String,
    pub displayable_order_id: String,
    pub displayable_order_date_time: DateTime,
    pub displayable_order_comment: String,
    pub shipping_speed_category: ShippingSpeedCategory,
    pub delivery_window: DeliveryWindow,
    pub destination_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_action: Option<FulfillmentAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_policy: Option<FulfillmentPolicy>,
    pub received_date_time: DateTime,
    pub fulfillment_order_status: FulfillmentOrderStatus,
    pub status_updated_date_time: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_email_list: Option<String>,
    #[serde(rename = "CODSettings", skip_serializing_if = "Option::is_none")]
    pub cod_settings: Option<CODSettings>,
}

// =============================================================================
// Fulfillment Previews
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFulfillmentPreviewItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
}

literal_enum! {
    pub enum ShippingWeightCalculationMethod {
        Package => "Package",
        Dimensional => "Dimensional",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentPreviewItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_shipping_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_weight_calculation_method: Option<ShippingWeightCalculationMethod>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentPreviewShipment {
    pub earliest_ship_date: DateTime,
    pub latest_ship_date: DateTime,
    pub earliest_arrival_date: DateTime,
    pub latest_arrival_date: DateTime,
    pub fulfillment_preview_items: Vec<FulfillmentPreviewItem>,
}

open_literal_enum! {
    /// The documentation lists these as examples, not as a closed set.
    pub enum OrderUnfulfillableReason {
        DeliverySLAUnavailable => "DeliverySLAUnavailable",
        InvalidDestinationAddress => "InvalidDestinationAddress",
    }
}

open_literal_enum! {
    /// The documentation lists these as examples, not as a closed set.
    pub enum ItemUnfulfillableReason {
        InventoryUnavailable => "InventoryUnavailable",
        NoDeliveryOption => "NoDeliveryOption",
    }
}

/// `ItemUnfulfillableReasons` is declared as a single value despite its name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnfulfillablePreviewItem {
    #[serde(rename = "SellerSKU")]
    pub seller_sku: String,
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_unfulfillable_reasons: Option<ItemUnfulfillableReason>,
}

/// `IsCODCapable` is documented as JP-only yet marked required; it is kept
/// required here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentPreview {
    pub shipping_speed_category: ShippingSpeedCategory,
    #[serde(with = "flag")]
    pub is_fulfillable: bool,
    #[serde(rename = "IsCODCapable", with = "flag")]
    pub is_cod_capable: bool,
    pub marketplace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_shipping_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_fees: Option<Vec<Fee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_preview_shipments: Option<Vec<FulfillmentPreviewShipment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfulfillable_preview_items: Option<Vec<UnfulfillablePreviewItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_unfulfillable_reasons: Option<Vec<OrderUnfulfillableReason>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_delivery_info: Option<ScheduledDeliveryInfo>,
}

// =============================================================================
// Fulfillment Shipments and Tracking
// =============================================================================

literal_enum! {
    pub enum FulfillmentShipmentStatus {
        Pending => "PENDING",
        Shipped => "SHIPPED",
        CancelledByFulfiller => "CANCELLED_BY_FULFILLER",
        CancelledBySeller => "CANCELLED_BY_SELLER",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentShipment {
    pub amazon_shipment_id: String,
    pub fulfillment_center_id: String,
    pub fulfillment_shipment_status: FulfillmentShipmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_date_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival_date_time: Option<DateTime>,
    pub fulfillment_shipment_item: Vec<FulfillmentShipmentItem>,
    pub fulfillment_shipment_package: Vec<FulfillmentShipmentPackage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentShipmentItem {
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    pub seller_fulfillment_order_item_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_number: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentShipmentPackage {
    pub package_number: u32,
    pub carrier_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_arrival_date_time: Option<DateTime>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingAddress {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// `EventCode` is one of the documented `EVENT_101`..`EVENT_419` codes, kept
/// as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingEvent {
    pub event_date: String,
    pub event_address: TrackingAddress,
    pub event_code: String,
}

// =============================================================================
// Returns
// =============================================================================

/// `SellerReturnItemId` is at most 80 characters, `ReturnComment` 1000.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReturnItem {
    pub seller_return_item_id: String,
    pub seller_fulfillment_order_item_id: String,
    pub amazon_shipment_id: String,
    pub return_reason_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_comment: Option<String>,
}

literal_enum! {
    pub enum InvalidItemReasonCode {
        InvalidValues => "InvalidValues",
        DuplicateRequest => "DuplicateRequest",
        NoCompletedShipItems => "NoCompletedShipItems",
        NoReturnableQuantity => "NoReturnableQuantity",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidItemReason {
    pub invalid_item_reason_code: InvalidItemReasonCode,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidReturnItem {
    pub seller_return_item_id: String,
    pub seller_fulfillment_order_item_id: String,
    pub invalid_item_reason: InvalidItemReason,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReasonCodeDetails {
    pub return_reason_code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReturnAuthorization {
    pub return_authorization_id: String,
    pub fulfillment_center_id: String,
    pub return_to_address: Address,
    pub amazon_rma_id: String,
    #[serde(rename = "RmaPageURL")]
    pub rma_page_url: String,
}

literal_enum! {
    pub enum Status {
        New => "New",
        Processed => "Processed",
    }
}

literal_enum! {
    pub enum ReturnReceivedCondition {
        CarrierDamaged => "CarrierDamaged",
        CustomerDamaged => "CustomerDamaged",
        Defective => "Defective",
        FulfillerDamaged => "FulfillerDamaged",
        Sellable => "Sellable",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReturnItem {
    pub seller_return_item_id: String,
    pub seller_fulfillment_order_item_id: String,
    pub amazon_shipment_id: String,
    pub seller_return_reason_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_return_reason_code: Option<String>,
    pub status: Status,
    pub status_changed_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_authorization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_received_condition: Option<ReturnReceivedCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_center_id: Option<String>,
}
