// src/models/recommendations.rs
//
// Recommendations datatypes.
// https://docs.developer.amazonservices.com/en_UK/recommendations/Recommendations_Datatypes.html

use super::common::DateTime;
use super::finances::FulfillmentChannel;
use crate::literal::flag;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    pub currency_code: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DimensionMeasure {
    pub value: f64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeightMeasure {
    pub value: f64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDimensions {
    pub height: DimensionMeasure,
    pub width: DimensionMeasure,
    pub length: DimensionMeasure,
    pub weight: WeightMeasure,
}

// =============================================================================
// Category Query
// =============================================================================

literal_enum! {
    pub enum RecommendationCategory {
        Selection => "Selection",
        Fulfillment => "Fulfillment",
        ListingQuality => "ListingQuality",
        GlobalSelling => "GlobalSelling",
        Advertising => "Advertising",
    }
}

literal_enum! {
    pub enum QualitySet {
        Defect => "Defect",
        Quarantine => "Quarantine",
    }
}

literal_enum! {
    pub enum ListingStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

/// Which filters apply depends on the category: `QualitySet` and
/// `ListingStatus` for ListingQuality, `IncludeCommonRecommendations` for
/// Selection, brand and product category for the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_set: Option<QualitySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_status: Option<ListingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(
        default,
        with = "flag::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_common_recommendations: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryQuery {
    pub recommendation_category: RecommendationCategory,
    pub filter_options: FilterOptions,
}

// =============================================================================
// Recommendations
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvertisingRecommendation {
    pub recommendation_id: String,
    pub recommendation_reason: String,
    pub last_updated: DateTime,
    pub item_identifier: ProductIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rank: Option<u64>,
    pub your_price_plus_shipping: Price,
    pub lowest_price_plus_shipping: Price,
    pub available_quantity: u32,
    pub sales_for_the_last30_days: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FulfillmentRecommendation {
    pub recommendation_id: String,
    pub recommendation_reason: String,
    pub last_updated: DateTime,
    pub item_identifier: ProductIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rank: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buybox_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_offers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_offers_fulfilled_by_amazon: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_customer_review: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_customer_reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_dimensions: Option<ItemDimensions>,
}

pub type GlobalSellingRecommendation = FulfillmentRecommendation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryRecommendation {
    pub recommendation_id: String,
    pub recommendation_reason: String,
    pub last_updated: DateTime,
    pub item_identifier: ProductIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_channel: Option<FulfillmentChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_stock_runs_out: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_out_of_stock_last30_days: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PricingRecommendation {
    pub recommendation_id: String,
    pub recommendation_reason: String,
    pub last_updated: DateTime,
    pub item_identifier: ProductIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_channel: Option<FulfillmentChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_price_plus_shipping: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_price_plus_shipping: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_difference_to_low_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_price_plus_shipping: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_merchant_fulfilled_offer_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_amazon_fulfilled_offer_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_offers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_merchant_fulfilled_offers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_amazon_fulfilled_offers: Option<u32>,
}
