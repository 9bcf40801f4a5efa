// src/models/inventory.rs
//
// Fulfillment Inventory datatypes.
// https://docs.developer.amazonservices.com/en_UK/fba_inventory/FBAInventory_Datatypes.html

use super::common::DateTime;
use super::inbound::ItemCondition;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventorySupply {
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(rename = "FNSKU")]
    pub fnsku: String,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    pub total_supply_quantity: u32,
    pub in_stock_supply_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_availability: Option<Timepoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply_detail: Option<Vec<InventorySupplyDetail>>,
}

literal_enum! {
    pub enum SupplyType {
        InStock => "InStock",
        Inbound => "Inbound",
        Transfer => "Transfer",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventorySupplyDetail {
    pub quantity: u32,
    pub supply_type: SupplyType,
    pub earliest_available_to_pick: Timepoint,
    pub latest_available_to_pick: Timepoint,
}

literal_enum! {
    pub enum TimepointType {
        Immediately => "Immediately",
        DateTime => "DateTime",
        Unknown => "Unknown",
    }
}

/// `DateTime` is only meaningful when `TimepointType` is `DateTime`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timepoint {
    pub timepoint_type: TimepointType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,
}
