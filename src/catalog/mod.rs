// src/catalog/mod.rs
//
// Shape discovery and conformance checking. The catalog maps each documented
// payload shape to its qualified name and API domain, and can check a raw
// JSON payload against any registered shape.

pub mod conformance;

use crate::error::{Error, Result};
use crate::models::*;
use log::{debug, warn};
use regex::RegexBuilder;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// Re-export for convenience
pub use conformance::{summarize_fields, undocumented_fields, CheckPolicy, Conformance};

// =============================================================================
// Domains
// =============================================================================

literal_enum! {
    /// An API section of the Marketplace Web Service.
    pub enum Domain {
        EasyShip => "EasyShip",
        Feeds => "Feeds",
        Finances => "Finances",
        Inbound => "Inbound",
        Inventory => "Inventory",
        Outbound => "Outbound",
        MerchantFulfillment => "MerchantFulfillment",
        Orders => "Orders",
        Products => "Products",
        Recommendations => "Recommendations",
        Reports => "Reports",
        Sellers => "Sellers",
        ShipmentInvoicing => "ShipmentInvoicing",
        Subscriptions => "Subscriptions",
    }
}

impl Domain {
    /// The vendor's datatype reference page for this domain.
    pub fn doc_url(&self) -> &'static str {
        match self {
            Domain::EasyShip => "https://docs.developer.amazonservices.com/en_UK/easy_ship/EasyShip_Datatypes.html",
            Domain::Feeds => "https://docs.developer.amazonservices.com/en_UK/feeds/Feeds_Datatypes.html",
            Domain::Finances => "https://docs.developer.amazonservices.com/en_UK/finances/Finances_Datatypes.html",
            Domain::Inbound => "https://docs.developer.amazonservices.com/en_UK/fba_inbound/FBAInbound_Datatypes.html",
            Domain::Inventory => "https://docs.developer.amazonservices.com/en_UK/fba_inventory/FBAInventory_Datatypes.html",
            Domain::Outbound => "https://docs.developer.amazonservices.com/en_UK/fba_outbound/FBAOutbound_Datatypes.html",
            Domain::MerchantFulfillment => "https://docs.developer.amazonservices.com/en_UK/merch_fulfill/MerchFulfill_Datatypes.html",
            Domain::Orders => "https://docs.developer.amazonservices.com/en_UK/orders-2013-09-01/Orders_Datatypes.html",
            Domain::Products => "https://docs.developer.amazonservices.com/en_UK/products/Products_Datatypes.html",
            Domain::Recommendations => "https://docs.developer.amazonservices.com/en_UK/recommendations/Recommendations_Datatypes.html",
            Domain::Reports => "https://docs.developer.amazonservices.com/en_UK/reports/Reports_Datatypes.html",
            Domain::Sellers => "https://docs.developer.amazonservices.com/en_UK/sellers/Sellers_Datatypes.html",
            Domain::ShipmentInvoicing => "https://docs.developer.amazonservices.com/en_UK/shipment_invoicing/ShipmentInvoicing_Datatypes.html",
            Domain::Subscriptions => "https://docs.developer.amazonservices.com/en_UK/subscriptions/Subscriptions_Datatypes.html",
        }
    }

    /// Case-insensitive lookup, for user input.
    pub fn find(name: &str) -> Option<Domain> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

// =============================================================================
// Shape Entries
// =============================================================================

type RoundTrip = fn(&Value) -> serde_json::Result<Value>;

fn round_trip<T>(value: &Value) -> serde_json::Result<Value>
where
    T: DeserializeOwned + Serialize,
{
    let typed = T::deserialize(value)?;
    serde_json::to_value(&typed)
}

/// A registered payload shape.
#[derive(Clone, Copy)]
pub struct ShapeEntry {
    /// Qualified name, e.g. `Order` or `Inbound.Address`.
    pub name: &'static str,
    pub domain: Domain,
    round_trip: RoundTrip,
}

impl fmt::Debug for ShapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeEntry")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish()
    }
}

impl ShapeEntry {
    /// Checks `payload` against this shape.
    ///
    /// Fails with `Error::Nonconforming` when the payload does not deserialize,
    /// and with `Error::UndocumentedFields` under `CheckPolicy::Strict` when it
    /// carries fields the shape does not document.
    pub fn check(&self, payload: &Value, policy: CheckPolicy) -> Result<Conformance> {
        let documented = (self.round_trip)(payload).map_err(|source| Error::Nonconforming {
            shape: self.name.to_string(),
            source,
        })?;

        let fields = undocumented_fields(payload, &documented);
        if !fields.is_empty() {
            warn!(
                "{}: {} undocumented field(s): {}",
                self.name,
                fields.len(),
                fields.join(", ")
            );
            if policy == CheckPolicy::Strict {
                return Err(Error::UndocumentedFields {
                    shape: self.name.to_string(),
                    fields,
                });
            }
        }

        Ok(Conformance {
            shape: self.name.to_string(),
            undocumented_fields: fields,
        })
    }
}

// =============================================================================
// Shape Catalog
// =============================================================================

/// Registry of payload shapes, in registration order.
#[derive(Debug, Default)]
pub struct ShapeCatalog {
    entries: Vec<ShapeEntry>,
    index: HashMap<&'static str, usize>,
}

macro_rules! register {
    ($catalog:ident, $domain:expr, { $($name:literal => $ty:ty),+ $(,)? }) => {
        $( $catalog.register::<$ty>($name, $domain); )+
    };
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under `name`. A later registration under the same name
    /// replaces the earlier one.
    pub fn register<T>(&mut self, name: &'static str, domain: Domain)
    where
        T: DeserializeOwned + Serialize,
    {
        let entry = ShapeEntry {
            name,
            domain,
            round_trip: round_trip::<T>,
        };
        match self.index.get(name) {
            Some(&i) => {
                warn!("Shape {} registered twice, keeping the later one", name);
                self.entries[i] = entry;
            }
            None => {
                self.index.insert(name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Every documented shape across all domains.
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        register!(catalog, Domain::EasyShip, {
            "InvoiceData" => easy_ship::InvoiceData,
            "EasyShip.Item" => easy_ship::Item,
            "ScheduledPackageId" => easy_ship::ScheduledPackageId,
            "PickupSlot" => easy_ship::PickupSlot,
            "Package" => easy_ship::Package,
            "PackageRequestDetails" => easy_ship::PackageRequestDetails,
            "ScheduledPackageUpdateDetails" => easy_ship::ScheduledPackageUpdateDetails,
            "Dimensions" => common::Dimensions,
            "Weight" => common::Weight,
        });

        register!(catalog, Domain::Feeds, {
            "FeedSubmissionInfo" => feeds::FeedSubmissionInfo,
        });

        register!(catalog, Domain::Finances, {
            "CurrencyAmount" => finances::CurrencyAmount,
            "AdjustmentItem" => finances::AdjustmentItem,
            "AdjustmentEvent" => finances::AdjustmentEvent,
            "AffordabilityExpenseEvent" => finances::AffordabilityExpenseEvent,
            "AffordabilityExpenseReversalEvent" => finances::AffordabilityExpenseReversalEvent,
            "ChargeComponent" => finances::ChargeComponent,
            "ChargeInstrument" => finances::ChargeInstrument,
            "CouponPaymentEvent" => finances::CouponPaymentEvent,
            "DebtRecoveryEvent" => finances::DebtRecoveryEvent,
            "DebtRecoveryItem" => finances::DebtRecoveryItem,
            "DirectPayment" => finances::DirectPayment,
            "FBALiquidationEvent" => finances::FBALiquidationEvent,
            "FeeComponent" => finances::FeeComponent,
            "FinancialEventGroup" => finances::FinancialEventGroup,
            "PerformanceBondRefundEvent" => finances::PerformanceBondRefundEvent,
            "FinancialEvents" => finances::FinancialEvents,
            "ImagingServicesFeeEvent" => finances::ImagingServicesFeeEvent,
            "LoanServicingEvent" => finances::LoanServicingEvent,
            "NetworkComminglingTransactionEvent" => finances::NetworkComminglingTransactionEvent,
            "PayWithAmazonEvent" => finances::PayWithAmazonEvent,
            "ProductAdsPaymentEvent" => finances::ProductAdsPaymentEvent,
            "Promotion" => finances::Promotion,
            "RentalTransactionEvent" => finances::RentalTransactionEvent,
            "RetrochargeEvent" => finances::RetrochargeEvent,
            "SAFETReimbursementEvent" => finances::SAFETReimbursementEvent,
            "SAFETReimbursementItem" => finances::SAFETReimbursementItem,
            "SellerReviewEnrollmentPaymentEvent" => finances::SellerReviewEnrollmentPaymentEvent,
            "ServiceFeeEvent" => finances::ServiceFeeEvent,
            "ShipmentEvent" => finances::ShipmentEvent,
            "ShipmentItem" => finances::ShipmentItem,
            "SolutionProviderCreditEvent" => finances::SolutionProviderCreditEvent,
            "TDSReimbursementEvent" => finances::TDSReimbursementEvent,
            "TaxWithheldComponent" => finances::TaxWithheldComponent,
        });

        register!(catalog, Domain::Inbound, {
            "Inbound.Address" => inbound::Address,
            "PrepInstruction" => inbound::PrepInstruction,
            "Amount" => inbound::Amount,
            "AmazonPrepFeesDetails" => inbound::AmazonPrepFeesDetails,
            "InboundGuidance" => inbound::InboundGuidance,
            "GuidanceReason" => inbound::GuidanceReason,
            "ASINInboundGuidance" => inbound::ASINInboundGuidance,
            "ASINPrepInstructions" => inbound::ASINPrepInstructions,
            "BoxContentsFeeDetails" => inbound::BoxContentsFeeDetails,
            "BoxContentsSource" => inbound::BoxContentsSource,
            "Contact" => inbound::Contact,
            "InboundShipmentHeader" => inbound::InboundShipmentHeader,
            "InboundShipmentInfo" => inbound::InboundShipmentInfo,
            "InboundShipmentItem" => inbound::InboundShipmentItem,
            "InboundShipmentPlan" => inbound::InboundShipmentPlan,
            "InboundShipmentPlanItem" => inbound::InboundShipmentPlanItem,
            "ItemCondition" => inbound::ItemCondition,
            "InboundShipmentPlanRequestItem" => inbound::InboundShipmentPlanRequestItem,
            "InvalidASIN" => inbound::InvalidASIN,
            "InvalidSKU" => inbound::InvalidSKU,
            "NonPartneredCarrier" => inbound::NonPartneredCarrier,
            "NonPartneredLtlDataInput" => inbound::NonPartneredLtlDataInput,
            "NonPartneredLtlDataOutput" => inbound::NonPartneredLtlDataOutput,
            "NonPartneredSmallParcelDataInput" => inbound::NonPartneredSmallParcelDataInput,
            "NonPartneredSmallParcelDataOutput" => inbound::NonPartneredSmallParcelDataOutput,
            "NonPartneredSmallParcelPackageInput" => inbound::NonPartneredSmallParcelPackageInput,
            "NonPartneredSmallParcelPackageOutput" => inbound::NonPartneredSmallParcelPackageOutput,
            "Pallet" => inbound::Pallet,
            "PartneredEstimate" => inbound::PartneredEstimate,
            "FreightClass" => inbound::FreightClass,
            "PartneredLtlDataInput" => inbound::PartneredLtlDataInput,
            "PartneredLtlDataOutput" => inbound::PartneredLtlDataOutput,
            "PartneredSmallParcelDataInput" => inbound::PartneredSmallParcelDataInput,
            "PartneredSmallParcelDataOutput" => inbound::PartneredSmallParcelDataOutput,
            "PartneredSmallParcelPackageInput" => inbound::PartneredSmallParcelPackageInput,
            "PartneredSmallParcelPackageOutput" => inbound::PartneredSmallParcelPackageOutput,
            "PrepDetails" => inbound::PrepDetails,
            "SKUInboundGuidance" => inbound::SKUInboundGuidance,
            "SKUPrepInstructions" => inbound::SKUPrepInstructions,
            "TransportContent" => inbound::TransportContent,
            "TransportDetailInput" => inbound::TransportDetailInput,
            "TransportDetailOutput" => inbound::TransportDetailOutput,
            "TransportDocument" => inbound::TransportDocument,
            "TransportHeader" => inbound::TransportHeader,
            "TransportResult" => inbound::TransportResult,
        });

        register!(catalog, Domain::Inventory, {
            "InventorySupply" => inventory::InventorySupply,
            "InventorySupplyDetail" => inventory::InventorySupplyDetail,
            "Timepoint" => inventory::Timepoint,
        });

        register!(catalog, Domain::Outbound, {
            "Outbound.Address" => outbound::Address,
            "CODSettings" => outbound::CODSettings,
            "CreateFulfillmentOrderItem" => outbound::CreateFulfillmentOrderItem,
            "CreateReturnItem" => outbound::CreateReturnItem,
            "Currency" => outbound::Currency,
            "DeliveryWindow" => outbound::DeliveryWindow,
            "Fee" => outbound::Fee,
            "ShippingSpeedCategory" => outbound::ShippingSpeedCategory,
            "FulfillmentOrder" => outbound::FulfillmentOrder,
            "FulfillmentOrderItem" => outbound::FulfillmentOrderItem,
            "FulfillmentPreview" => outbound::FulfillmentPreview,
            "FulfillmentPreviewItem" => outbound::FulfillmentPreviewItem,
            "FulfillmentPreviewShipment" => outbound::FulfillmentPreviewShipment,
            "FulfillmentShipment" => outbound::FulfillmentShipment,
            "FulfillmentShipmentItem" => outbound::FulfillmentShipmentItem,
            "FulfillmentShipmentPackage" => outbound::FulfillmentShipmentPackage,
            "GetFulfillmentPreviewItem" => outbound::GetFulfillmentPreviewItem,
            "InvalidItemReasonCode" => outbound::InvalidItemReasonCode,
            "InvalidItemReason" => outbound::InvalidItemReason,
            "InvalidReturnItem" => outbound::InvalidReturnItem,
            "ReasonCodeDetails" => outbound::ReasonCodeDetails,
            "ReturnAuthorization" => outbound::ReturnAuthorization,
            "ReturnItem" => outbound::ReturnItem,
            "ReturnReceivedCondition" => outbound::ReturnReceivedCondition,
            "ScheduledDeliveryInfo" => outbound::ScheduledDeliveryInfo,
            "Status" => outbound::Status,
            "TrackingAddress" => outbound::TrackingAddress,
            "TrackingEvent" => outbound::TrackingEvent,
            "UnfulfillablePreviewItem" => outbound::UnfulfillablePreviewItem,
            "UpdateFulfillmentOrderItem" => outbound::UpdateFulfillmentOrderItem,
        });

        register!(catalog, Domain::MerchantFulfillment, {
            "AdditionalInputs" => merchant_fulfillment::AdditionalInputs,
            "AdditionalSellerInputs" => merchant_fulfillment::AdditionalSellerInputs,
            "MerchantFulfillment.Address" => merchant_fulfillment::Address,
            "MerchantFulfillment.Item" => merchant_fulfillment::Item,
            "FileContents" => merchant_fulfillment::FileContents,
            "HazmatType" => merchant_fulfillment::HazmatType,
            "ItemLevelFieldsList" => merchant_fulfillment::ItemLevelFieldsList,
            "ItemLevelSellerInputsList" => merchant_fulfillment::ItemLevelSellerInputsList,
            "Label" => merchant_fulfillment::Label,
            "LabelCustomization" => merchant_fulfillment::LabelCustomization,
            "LabelDimensions" => merchant_fulfillment::LabelDimensions,
            "PackageDimensions" => merchant_fulfillment::PackageDimensions,
            "RejectedShippingService" => merchant_fulfillment::RejectedShippingService,
            "SellerInputDefinition" => merchant_fulfillment::SellerInputDefinition,
            "SellerInputValue" => merchant_fulfillment::SellerInputValue,
            "Shipment" => merchant_fulfillment::Shipment,
            "ShipmentLevelFields" => merchant_fulfillment::ShipmentLevelFields,
            "ShipmentLevelSellerInputsList" => merchant_fulfillment::ShipmentLevelSellerInputsList,
            "ShipmentRequestDetails" => merchant_fulfillment::ShipmentRequestDetails,
            "ShippingOfferingFilter" => merchant_fulfillment::ShippingOfferingFilter,
            "ShippingService" => merchant_fulfillment::ShippingService,
            "ShippingServiceOptions" => merchant_fulfillment::ShippingServiceOptions,
            "TemporarilyUnavailableCarrier" => merchant_fulfillment::TemporarilyUnavailableCarrier,
            "TermsAndConditionsNotAcceptedCarrier" => merchant_fulfillment::TermsAndConditionsNotAcceptedCarrier,
            "TransparencyCodeList" => merchant_fulfillment::TransparencyCodeList,
        });

        register!(catalog, Domain::Orders, {
            "Orders.Address" => orders::Address,
            "BuyerCustomizedInfo" => orders::BuyerCustomizedInfo,
            "BuyerTaxInfo" => orders::BuyerTaxInfo,
            "Money" => orders::Money,
            "Order" => orders::Order,
            "OrderItem" => orders::OrderItem,
            "PaymentExecutionDetailItem" => orders::PaymentExecutionDetailItem,
            "PaymentMethodDetails" => orders::PaymentMethodDetails,
            "ProductInfo" => orders::ProductInfo,
            "PointsGranted" => orders::PointsGranted,
            "TaxClassification" => orders::TaxClassification,
            "TaxCollection" => orders::TaxCollection,
        });

        register!(catalog, Domain::Products, {
            "AvailabilityType" => products::AvailabilityType,
            "BuyBoxPrice" => products::BuyBoxPrice,
            "DetailedShippingTimeType" => products::DetailedShippingTimeType,
            "FeeDetail" => products::FeeDetail,
            "FeesEstimate" => products::FeesEstimate,
            "FeesEstimateIdentifier" => products::FeesEstimateIdentifier,
            "FeesEstimateRequest" => products::FeesEstimateRequest,
            "FeesEstimateResult" => products::FeesEstimateResult,
            "FeeType" => products::FeeType,
            "FulfillmentChannelType" => products::FulfillmentChannelType,
            "LowestPrice" => products::LowestPrice,
            "MarketplaceType" => products::MarketplaceType,
            "MoneyType" => products::MoneyType,
            "OfferCount" => products::OfferCount,
            "OfferCountType" => products::OfferCountType,
            "Points" => products::Points,
            "PriceToEstimateFees" => products::PriceToEstimateFees,
            "SellerFeedbackRating" => products::SellerFeedbackRating,
            "ShipsFrom" => products::ShipsFrom,
        });

        register!(catalog, Domain::Recommendations, {
            "AdvertisingRecommendation" => recommendations::AdvertisingRecommendation,
            "CategoryQuery" => recommendations::CategoryQuery,
            "DimensionMeasure" => recommendations::DimensionMeasure,
            "FulfillmentRecommendation" => recommendations::FulfillmentRecommendation,
            "GlobalSellingRecommendation" => recommendations::GlobalSellingRecommendation,
            "InventoryRecommendation" => recommendations::InventoryRecommendation,
            "ItemDimensions" => recommendations::ItemDimensions,
            "Price" => recommendations::Price,
            "PricingRecommendation" => recommendations::PricingRecommendation,
            "ProductIdentifier" => recommendations::ProductIdentifier,
            "WeightMeasure" => recommendations::WeightMeasure,
        });

        register!(catalog, Domain::Reports, {
            "ReportInfo" => reports::ReportInfo,
            "ReportRequestInfo" => reports::ReportRequestInfo,
            "ReportSchedule" => reports::ReportSchedule,
        });

        register!(catalog, Domain::Sellers, {
            "Marketplace" => sellers::Marketplace,
            "Participation" => sellers::Participation,
        });

        register!(catalog, Domain::ShipmentInvoicing, {
            "ShipmentInvoicing.Address" => shipment_invoicing::Address,
            "ShipmentInvoicing.Shipment" => shipment_invoicing::Shipment,
            "ShipmentInvoicing.ShipmentItem" => shipment_invoicing::ShipmentItem,
            "SerialNumbers" => shipment_invoicing::SerialNumbers,
            "ShipmentDetail" => shipment_invoicing::ShipmentDetail,
        });

        register!(catalog, Domain::Subscriptions, {
            "AttributeKeyValue" => subscriptions::AttributeKeyValue,
            "Destination" => subscriptions::Destination,
            "Subscription" => subscriptions::Subscription,
        });

        debug!("Shape catalog built with {} shapes", catalog.len());
        catalog
    }

    /// Exact, case-sensitive lookup by qualified name.
    pub fn get(&self, name: &str) -> Option<&ShapeEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn by_domain(&self, domain: Domain) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter().filter(move |e| e.domain == domain)
    }

    /// Shapes whose qualified name matches `pattern` (case-insensitive regex).
    pub fn search(&self, pattern: &str) -> Result<Vec<&ShapeEntry>> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(self.entries.iter().filter(|e| regex.is_match(e.name)).collect())
    }

    /// Checks `payload` against the shape registered under `name`.
    pub fn check(&self, name: &str, payload: &Value, policy: CheckPolicy) -> Result<Conformance> {
        let entry = self
            .get(name)
            .ok_or_else(|| Error::UnknownShape(name.to_string()))?;
        entry.check(payload, policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
