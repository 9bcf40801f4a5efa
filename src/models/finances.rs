// src/models/finances.rs
//
// Finances datatypes: financial event groups and every event list they carry.
// https://docs.developer.amazonservices.com/en_UK/finances/Finances_Datatypes.html

use super::common::DateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Amounts and Components
// =============================================================================

/// Both fields are optional on this section's amount type, unlike the
/// outbound `Currency`, the orders `Money` or the products `MoneyType`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrencyAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_amount: Option<f64>,
}

literal_enum! {
    pub enum ChargeType {
        Principal => "Principal",
        Tax => "Tax",
        MarketplaceFacilitatorTaxPrincipal => "MarketplaceFacilitatorTax-Principal",
        MarketplaceFacilitatorTaxShipping => "MarketplaceFacilitatorTax-Shipping",
        MarketplaceFacilitatorTaxGiftwrap => "MarketplaceFacilitatorTax-Giftwrap",
        MarketplaceFacilitatorTaxOther => "MarketplaceFacilitatorTax-Other",
        Discount => "Discount",
        TaxDiscount => "TaxDiscount",
        CODItemCharge => "CODItemCharge",
        CODItemTaxCharge => "CODItemTaxCharge",
        CODOrderCharge => "CODOrderCharge",
        CODOrderTaxCharge => "CODOrderTaxCharge",
        CODShippingCharge => "CODShippingCharge",
        CODShippingTaxCharge => "CODShippingTaxCharge",
        ShippingCharge => "ShippingCharge",
        ShippingTax => "ShippingTax",
        Goodwill => "Goodwill",
        Giftwrap => "Giftwrap",
        GiftwrapTax => "GiftwrapTax",
        RestockingFee => "RestockingFee",
        ReturnShipping => "ReturnShipping",
        PointsFee => "PointsFee",
        GenericDeduction => "GenericDeduction",
        FreeReplacementReturnShipping => "FreeReplacementReturnShipping",
        PaymentMethodFee => "PaymentMethodFee",
        ExportCharge => "ExportCharge",
        SAFETReimbursement => "SAFE-TReimbursement",
        TcsCgst => "TCS-CGST",
        TcsSgst => "TCS-SGST",
        TcsIgst => "TCS-IGST",
        TcsUtgst => "TCS-UTGST",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChargeComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<ChargeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_amount: Option<CurrencyAmount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChargeInstrument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<CurrencyAmount>,
}

/// `FeeType` stays free text: the fee types page lists far more values than
/// the datatype reference and the two disagree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeeComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<CurrencyAmount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Promotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_amount: Option<CurrencyAmount>,
}

literal_enum! {
    pub enum TaxCollectionModel {
        MarketplaceFacilitator => "MarketplaceFacilitator",
        Standard => "Standard",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxWithheldComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_collection_model: Option<TaxCollectionModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_withheld: Option<Vec<ChargeComponent>>,
}

// =============================================================================
// Event Groups
// =============================================================================

literal_enum! {
    pub enum ProcessingStatus {
        Open => "Open",
        Closed => "Closed",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialEventGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_event_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<ProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_transfer_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_total: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_total: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_transfer_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_balance: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_event_group_start: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_event_group_end: Option<DateTime>,
}

/// Every event list a financial events response can carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_event_list: Option<Vec<ShipmentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_event_list: Option<Vec<ShipmentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantee_claim_event_list: Option<Vec<ShipmentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chargeback_event_list: Option<Vec<ShipmentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_with_amazon_event_list: Option<Vec<PayWithAmazonEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_credit_event_list: Option<Vec<SolutionProviderCreditEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrocharge_event_list: Option<Vec<RetrochargeEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_transaction_event_list: Option<Vec<RentalTransactionEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_bond_refund_event_list: Option<Vec<PerformanceBondRefundEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ads_payment_event_list: Option<Vec<ProductAdsPaymentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee_event_list: Option<Vec<ServiceFeeEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_recovery_event_list: Option<Vec<DebtRecoveryEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_servicing_event_list: Option<Vec<LoanServicingEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_event_list: Option<Vec<AdjustmentEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_payment_event_list: Option<Vec<CouponPaymentEvent>>,
    #[serde(
        rename = "SAFETReimbursementEventList",
        skip_serializing_if = "Option::is_none"
    )]
    pub safet_reimbursement_event_list: Option<Vec<SAFETReimbursementEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_review_enrollment_payment_event_list: Option<Vec<SellerReviewEnrollmentPaymentEvent>>,
    #[serde(rename = "FBALiquidationEventList", skip_serializing_if = "Option::is_none")]
    pub fba_liquidation_event_list: Option<Vec<FBALiquidationEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imaging_services_fee_event_list: Option<Vec<ImagingServicesFeeEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affordability_expense_event_list: Option<Vec<AffordabilityExpenseEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affordability_expense_reversal_event_list: Option<Vec<AffordabilityExpenseReversalEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_commingling_transaction_event_list: Option<Vec<NetworkComminglingTransactionEvent>>,
    #[serde(rename = "TDSReimbursementEventList", skip_serializing_if = "Option::is_none")]
    pub tds_reimbursement_event_list: Option<Vec<TDSReimbursementEvent>>,
}

// =============================================================================
// Events
// =============================================================================

literal_enum! {
    pub enum AdjustmentType {
        FBAInventoryReimbursement => "FBAInventoryReimbursement",
        ReserveEvent => "ReserveEvent",
        PostageBilling => "PostageBilling",
        PostageRefund => "PostageRefund",
        LostOrDamagedReimbursement => "LostOrDamagedReimbursement",
        CanceledButPickedUpReimbursement => "CanceledButPickedUpReimbursement",
        ReimbursementClawback => "ReimbursementClawback",
        SellerRewards => "SellerRewards",
    }
}

/// `Quantity` is documented as a string here, unlike everywhere else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustmentItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<CurrencyAmount>,
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(rename = "FnSKU", skip_serializing_if = "Option::is_none")]
    pub fn_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustmentEvent {
    pub adjustment_type: AdjustmentType,
    pub adjustment_amount: CurrencyAmount,
    pub adjustment_item_list: Vec<AdjustmentItem>,
    pub posted_date: DateTime,
}

literal_enum! {
    pub enum AffordabilityTransactionType {
        Charge => "Charge",
        Refund => "Refund",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AffordabilityExpenseEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<AffordabilityTransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_expense: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_expense: Option<CurrencyAmount>,
    #[serde(rename = "TaxTypeIGST", skip_serializing_if = "Option::is_none")]
    pub tax_type_igst: Option<CurrencyAmount>,
    #[serde(rename = "TaxTypeCGST", skip_serializing_if = "Option::is_none")]
    pub tax_type_cgst: Option<CurrencyAmount>,
    #[serde(rename = "TaxTypeSGST", skip_serializing_if = "Option::is_none")]
    pub tax_type_sgst: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
}

pub type AffordabilityExpenseReversalEvent = AffordabilityExpenseEvent;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CouponPaymentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_coupon_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_or_redemption_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_component: Option<FeeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_component: Option<ChargeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<CurrencyAmount>,
}

literal_enum! {
    pub enum DebtRecoveryType {
        DebtPayment => "DebtPayment",
        DebtPaymentFailure => "DebtPaymentFailure",
        DebtAdjustment => "DebtAdjustment",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebtRecoveryEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_recovery_type: Option<DebtRecoveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_payment_credit: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_recovery_item_list: Option<Vec<DebtRecoveryItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_instrument_list: Option<Vec<ChargeInstrument>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DebtRecoveryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_begin_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_end_date: Option<DateTime>,
}

literal_enum! {
    pub enum DirectPaymentType {
        StoredValueCardRevenue => "StoredValueCardRevenue",
        StoredValueCardRefund => "StoredValueCardRefund",
        PrivateLabelCreditCardRevenue => "PrivateLabelCreditCardRevenue",
        PrivateLabelCreditCardRefund => "PrivateLabelCreditCardRefund",
        CollectOnDeliveryRevenue => "CollectOnDeliveryRevenue",
        CollectOnDeliveryRefund => "CollectOnDeliveryRefund",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_payment_type: Option<DirectPaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_payment_amount: Option<CurrencyAmount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FBALiquidationEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_removal_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidation_proceeds_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidation_fee_amount: Option<CurrencyAmount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImagingServicesFeeEvent {
    #[serde(rename = "ImagingRequestBillingItemID", skip_serializing_if = "Option::is_none")]
    pub imaging_request_billing_item_id: Option<String>,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_list: Option<Vec<FeeComponent>>,
}

literal_enum! {
    pub enum SourceBusinessEventType {
        LoanAdvance => "LoanAdvance",
        LoanPayment => "LoanPayment",
        LoanRefund => "LoanRefund",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoanServicingEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_business_event_type: Option<SourceBusinessEventType>,
}

literal_enum! {
    pub enum NetCoTransactionType {
        NetCo => "NetCo",
        ComminglingVAT => "ComminglingVAT",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkComminglingTransactionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(rename = "NetCoTransactionID", skip_serializing_if = "Option::is_none")]
    pub net_co_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<NetCoTransactionType>,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exclusive_amount: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<CurrencyAmount>,
}

literal_enum! {
    pub enum BusinessObjectType {
        PaymentContract => "PaymentContract",
    }
}

literal_enum! {
    pub enum PaymentAmountType {
        Sales => "Sales",
    }
}

literal_enum! {
    /// Amazon-fulfilled (`AFN`) or merchant-fulfilled (`MFN`).
    pub enum FulfillmentChannel {
        AFN => "AFN",
        MFN => "MFN",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayWithAmazonEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_object_type: Option<BusinessObjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<ChargeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount_type: Option<PaymentAmountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_channel: Option<FulfillmentChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
}

literal_enum! {
    pub enum ProductAdsTransactionType {
        Charge => "charge",
        Refund => "refund",
    }
}

/// The only event documented with camelCase field names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdsPaymentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<ProductAdsTransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_value: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_value: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_value: Option<CurrencyAmount>,
}

literal_enum! {
    pub enum RentalEventType {
        CustomerPaymentBuyout => "RentalCustomerPayment-Buyout",
        CustomerPaymentExtension => "RentalCustomerPayment-Extension",
        CustomerRefundBuyout => "RentalCustomerRefund-Buyout",
        CustomerRefundExtension => "RentalCustomerRefund-Extension",
        HandlingFee => "RentalHandlingFee",
        ChargeFailureReimbursement => "RentalChargeFailureReimbursement",
        LostItemReimbursement => "RentalLostItemReimbursement",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RentalTransactionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_event_type: Option<RentalEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_charge_list: Option<Vec<ChargeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_fee_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_initial_value: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_reimbursement: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_tax_withheld_list: Option<Vec<TaxWithheldComponent>>,
}

literal_enum! {
    pub enum RetrochargeEventType {
        Retrocharge => "Retrocharge",
        RetrochargeReversal => "RetrochargeReversal",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetrochargeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrocharge_event_type: Option<RetrochargeEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_tax: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrocharge_tax_withheld_component_list: Option<Vec<TaxWithheldComponent>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SAFETReimbursementEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(rename = "SAFETClaimId", skip_serializing_if = "Option::is_none")]
    pub safet_claim_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursed_amount: Option<CurrencyAmount>,
    #[serde(rename = "SAFETReimbursementItemList", skip_serializing_if = "Option::is_none")]
    pub safet_reimbursement_item_list: Option<Vec<SAFETReimbursementItem>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SAFETReimbursementItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_charge_list: Option<Vec<ChargeComponent>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerReviewEnrollmentPaymentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[serde(rename = "ParentASIN", skip_serializing_if = "Option::is_none")]
    pub parent_asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_component: Option<FeeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_component: Option<ChargeComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<CurrencyAmount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceFeeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_list: Option<Vec<FeeComponent>>,
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(rename = "FnSKU", skip_serializing_if = "Option::is_none")]
    pub fn_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_description: Option<String>,
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

/// Also used for refund, guarantee claim and chargeback events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_charge_list: Option<Vec<ChargeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_charge_adjustment_list: Option<Vec<ChargeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_fee_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_fee_adjustment_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_fee_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_fee_adjustment_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_payment_list: Option<Vec<DirectPayment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_item_list: Option<Vec<ShipmentItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_item_adjustment_list: Option<Vec<ShipmentItem>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentItem {
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_adjustment_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_shipped: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_charge_list: Option<Vec<ChargeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_tax_withheld_list: Option<Vec<TaxWithheldComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_charge_adjustment_list: Option<Vec<ChargeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_fee_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_fee_adjustment_list: Option<Vec<FeeComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_list: Option<Vec<Promotion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_adjustment_list: Option<Vec<Promotion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_points_generated: Option<CurrencyAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_of_points_returned: Option<CurrencyAmount>,
}

literal_enum! {
    pub enum ProviderTransactionType {
        ProviderCredit => "ProviderCredit",
        ProviderCreditReversal => "ProviderCreditReversal",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SolutionProviderCreditEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_transaction_type: Option<ProviderTransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_store_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TDSReimbursementEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursed_amount: Option<CurrencyAmount>,
}

/// The documentation lists no fields for this event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceBondRefundEvent {}
