// src/models/products.rs
//
// Products datatypes: pricing, offers and fee estimates.
// https://docs.developer.amazonservices.com/en_UK/products/Products_Datatypes.html
//
// Several records here use lower-case wire names (`condition`,
// `fulfillmentChannel`, `minimumHours`...). They are reproduced as documented.

use super::common::DateTime;
use crate::literal::flag;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money and Points
// =============================================================================

literal_enum! {
    pub enum CurrencyCode {
        USD => "USD",
        EUR => "EUR",
        GBP => "GBP",
        RMB => "RMB",
        INR => "INR",
        JPY => "JPY",
        CAD => "CAD",
        MXN => "MXN",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoneyType {
    pub amount: f64,
    pub currency_code: CurrencyCode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Points {
    pub points_number: u32,
    pub points_monetary_value: MoneyType,
}

/// A marketplace identifier such as `ATVPDKIKX0DER`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketplaceType(pub String);

impl MarketplaceType {
    pub fn new(id: impl Into<String>) -> Self {
        MarketplaceType(id.into())
    }

    /// True when the id matches the documented pattern `[A-Z0-9]+`.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for MarketplaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Offers
// =============================================================================

literal_enum! {
    pub enum ProductCondition {
        New => "New",
        Used => "Used",
        Collectible => "Collectible",
        Refurbished => "Refurbished",
        Club => "Club",
    }
}

literal_enum! {
    pub enum FulfillmentChannelType {
        Amazon => "Amazon",
        Merchant => "Merchant",
    }
}

literal_enum! {
    pub enum AvailabilityType {
        Now => "NOW",
        FutureWithoutDate => "FUTURE_WITHOUT_DATE",
        FutureWithDate => "FUTURE_WITH_DATE",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuyBoxPrice {
    #[serde(rename = "condition")]
    pub condition: ProductCondition,
    pub landed_price: MoneyType,
    pub listing_price: MoneyType,
    pub shipping: MoneyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
}

/// A `BuyBoxPrice` with a fulfillment channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LowestPrice {
    #[serde(rename = "condition")]
    pub condition: ProductCondition,
    #[serde(rename = "fulfillmentChannel")]
    pub fulfillment_channel: FulfillmentChannelType,
    pub landed_price: MoneyType,
    pub listing_price: MoneyType,
    pub shipping: MoneyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCount {
    pub condition: ProductCondition,
    pub fulfillment_channel: FulfillmentChannelType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferCountType {
    pub offer_count: OfferCount,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedShippingTimeType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_type: Option<AvailabilityType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerFeedbackRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_positive_feedback_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_count: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipsFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// =============================================================================
// Fee Estimates
// =============================================================================

literal_enum! {
    pub enum FeeType {
        ReferralFee => "ReferralFee",
        VariableClosingFee => "VariableClosingFee",
        PerItemFee => "PerItemFee",
        FBAFees => "FBAFees",
        FBAPickAndPack => "FBAPickAndPack",
        FBAWeightHandling => "FBAWeightHandling",
        FBAOrderHandling => "FBAOrderHandling",
        FBADeliveryServicesFee => "FBADeliveryServicesFee",
    }
}

/// `IncludedFeeDetailList` nests further fee details, e.g. the parts of `FBAFees`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeeDetail {
    pub fee_type: FeeType,
    pub fee_amount: MoneyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_promotion: Option<MoneyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<MoneyType>,
    pub final_fee: MoneyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_fee_detail_list: Option<Vec<FeeDetail>>,
}

impl FeeDetail {
    /// Depth of the deepest nested fee detail; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .included_fee_detail_list
            .iter()
            .flatten()
            .map(FeeDetail::depth)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimate {
    pub time_of_fees_estimation: DateTime,
    pub total_fees_estimate: MoneyType,
    pub fee_detail_list: Vec<FeeDetail>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceToEstimateFees {
    pub listing_price: MoneyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<MoneyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
}

literal_enum! {
    pub enum IdType {
        ASIN => "ASIN",
        SellerSKU => "SellerSKU",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateIdentifier {
    pub marketplace_id: String,
    pub id_type: IdType,
    pub id_value: String,
    pub price_to_estimate_fees: PriceToEstimateFees,
    #[serde(with = "flag")]
    pub is_amazon_fulfilled: bool,
    pub seller_input_identifier: String,
}

/// A `FeesEstimateIdentifier` plus the caller's `Identifier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateRequest {
    #[serde(flatten)]
    pub estimate: FeesEstimateIdentifier,
    pub identifier: String,
}

literal_enum! {
    pub enum FeesEstimateStatus {
        Success => "Success",
        ClientError => "ClientError",
        ServiceError => "ServiceError",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateError {
    #[serde(rename = "Type")]
    pub kind: String,
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesEstimateResult {
    pub fees_estimate_identifier: FeesEstimateIdentifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_estimate: Option<FeesEstimate>,
    pub status: FeesEstimateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FeesEstimateError>,
}
