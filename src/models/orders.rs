// src/models/orders.rs
//
// Orders datatypes (2013-09-01 API version).
// https://docs.developer.amazonservices.com/en_UK/orders-2013-09-01/Orders_Datatypes.html

use super::common::DateTime;
use super::finances::FulfillmentChannel;
use crate::literal::flag;
use serde::{Deserialize, Serialize};

literal_enum! {
    pub enum AddressType {
        Commercial => "Commercial",
        Residential => "Residential",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

/// Yet another money record: both fields optional and `Amount` is text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuyerCustomizedInfo {
    #[serde(rename = "CustomizedURL")]
    pub customized_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxClassification {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuyerTaxInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxing_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_classifications: Option<Vec<TaxClassification>>,
}

literal_enum! {
    pub enum ExecutionPaymentMethod {
        COD => "COD",
        GC => "GC",
        PointsAccount => "PointsAccount",
    }
}

/// Only returned in Japan, though both fields are documented as required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentExecutionDetailItem {
    pub payment: Money,
    pub payment_method: ExecutionPaymentMethod,
}

/// Known values include `GiftCertificate` and `CreditCard`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethodDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_detail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_items: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointsGranted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_monetary_value: Option<Money>,
}

open_literal_enum! {
    pub enum TaxCollectionModel {
        MarketplaceFacilitator => "MarketplaceFacilitator",
    }
}

open_literal_enum! {
    pub enum ResponsibleParty {
        AmazonServicesInc => "Amazon Services, Inc.",
    }
}

/// Each field documents a single value; whether others occur is unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxCollection {
    pub model: TaxCollectionModel,
    pub responsible_party: ResponsibleParty,
}

// =============================================================================
// Orders
// =============================================================================

literal_enum! {
    pub enum PaymentMethod {
        COD => "COD",
        CVS => "CVS",
        Other => "Other",
    }
}

literal_enum! {
    pub enum ShipmentServiceLevelCategory {
        Expedited => "Expedited",
        FreeEconomy => "FreeEconomy",
        NextDay => "NextDay",
        SameDay => "SameDay",
        SecondDay => "SecondDay",
        Scheduled => "Scheduled",
        Standard => "Standard",
    }
}

literal_enum! {
    pub enum EasyShipShipmentStatus {
        PendingPickUp => "PendingPickUp",
        LabelCanceled => "LabelCanceled",
        PickedUp => "PickedUp",
        OutForDelivery => "OutForDelivery",
        Damaged => "Damaged",
        Delivered => "Delivered",
        RejectedByBuyer => "RejectedByBuyer",
        Undeliverable => "Undeliverable",
        ReturnedToSeller => "ReturnedToSeller",
        ReturningToSeller => "ReturningToSeller",
    }
}

literal_enum! {
    pub enum OrderType {
        StandardOrder => "StandardOrder",
        Preorder => "Preorder",
        SourcingOnDemandOrder => "SourcingOnDemandOrder",
    }
}

/// `OrderStatus` is free text: the datatype page lists no values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub amazon_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    pub purchase_date: DateTime,
    pub last_update_date: DateTime,
    pub order_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_channel: Option<FulfillmentChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_service_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_total: Option<Money>,
    pub number_of_items_shipped: u32,
    pub number_of_items_unshipped: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_execution_detail: Option<Vec<PaymentExecutionDetailItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_details: Option<PaymentMethodDetails>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_replacement_order: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tax_info: Option<BuyerTaxInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_service_level_category: Option<ShipmentServiceLevelCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_ship_shipment_status: Option<EasyShipShipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_ship_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_ship_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_delivery_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_delivery_date: Option<DateTime>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_business_order: Option<bool>,
    #[serde(
        rename = "IsSoldByAB",
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_sold_by_ab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_prime: Option<bool>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_premium_order: Option<bool>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_global_express_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promise_response_due_date: Option<DateTime>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_estimated_ship_date_set: Option<bool>,
}

// =============================================================================
// Order Items
// =============================================================================

literal_enum! {
    pub enum ConditionId {
        New => "New",
        Used => "Used",
        Collectible => "Collectible",
        Refurbished => "Refurbished",
        Preorder => "Preorder",
        Club => "Club",
    }
}

literal_enum! {
    /// Several subtypes contain spaces on the wire.
    pub enum ConditionSubtypeId {
        New => "New",
        Mint => "Mint",
        VeryGood => "Very Good",
        Good => "Good",
        Acceptable => "Acceptable",
        Poor => "Poor",
        Club => "Club",
        OEM => "OEM",
        Warranty => "Warranty",
        RefurbishedWarranty => "Refurbished Warranty",
        Refurbished => "Refurbished",
        OpenBox => "Open Box",
        Any => "Any",
        Other => "Other",
    }
}

literal_enum! {
    pub enum PriceDesignation {
        BusinessPrice => "BusinessPrice",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    #[serde(rename = "ASIN")]
    pub asin: String,
    pub order_item_id: String,
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_customized_info: Option<BuyerCustomizedInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub quantity_ordered: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_shipped: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_granted: Option<PointsGranted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrap_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_collection: Option<TaxCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrap_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_discount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_discount_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_discount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_discount_tax: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_ids: Option<Vec<String>>,
    #[serde(rename = "CODFee", skip_serializing_if = "Option::is_none")]
    pub cod_fee: Option<Money>,
    #[serde(rename = "CODFeeDiscount", skip_serializing_if = "Option::is_none")]
    pub cod_fee_discount: Option<Money>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_gift: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrap_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_id: Option<ConditionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_subtype_id: Option<ConditionSubtypeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_delivery_start_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_delivery_end_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_designation: Option<PriceDesignation>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub is_transparency: Option<bool>,
    #[serde(default, with = "flag::option", skip_serializing_if = "Option::is_none")]
    pub serial_number_required: Option<bool>,
}
