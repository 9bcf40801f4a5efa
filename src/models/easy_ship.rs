// src/models/easy_ship.rs
//
// EasyShip datatypes.
// https://docs.developer.amazonservices.com/en_UK/easy_ship/EasyShip_Datatypes.html

use super::common::{DateTime, Dimensions, Weight};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceData {
    pub invoice_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<DateTime>,
}

/// An order item inside an EasyShip package. Merchant Fulfillment has an
/// unrelated `Item` of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub order_item_id: String,
    pub order_item_serial_number_list: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledPackageId {
    pub amazon_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PickupSlot {
    pub slot_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time_end: Option<String>,
}

literal_enum! {
    pub enum PackageStatus {
        Unscheduled => "Unscheduled",
        Scheduled => "Scheduled",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub scheduled_package_id: ScheduledPackageId,
    pub package_dimensions: Dimensions,
    pub package_weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_items_list: Option<Vec<Item>>,
    pub package_pickup_slot: PickupSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_status: Option<PackageStatus>,
}

/// Note the request spells the item list `PackageItemList`, while a
/// `Package` spells it `PackageItemsList`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRequestDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_item_list: Option<Vec<Item>>,
    pub package_pickup_slot: PickupSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_identifier: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledPackageUpdateDetails {
    pub scheduled_package_id: ScheduledPackageId,
    pub package_pickup_slot: PickupSlot,
}
