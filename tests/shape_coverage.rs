// tests/shape_coverage.rs
//
// Every catalog shape paired with its smallest documented payload: required
// fields only, closed literals at their first value. The table pins which
// fields each shape requires and which values it refuses.

use mws_datatypes::{CheckPolicy, Error, ShapeCatalog};
use serde_json::Value;
use std::collections::BTreeSet;

/// (shape, minimal payload, JSON pointers of closed-literal values)
const MINIMAL_PAYLOADS: &[(&str, &str, &[&str])] = &[
    ("InvoiceData", r#"{"InvoiceNumber":"x"}"#, &[]),
    ("EasyShip.Item", r#"{"OrderItemId":"x","OrderItemSerialNumberList":"x"}"#, &[]),
    ("ScheduledPackageId", r#"{"AmazonOrderId":"x"}"#, &[]),
    ("PickupSlot", r#"{"SlotId":"x"}"#, &[]),
    ("Package", r#"{"ScheduledPackageId":{"AmazonOrderId":"x"},"PackageDimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"PackageWeight":{"Value":1,"Unit":"g"},"PackagePickupSlot":{"SlotId":"x"}}"#, &["/PackageDimensions/Unit", "/PackageWeight/Unit"]),
    ("PackageRequestDetails", r#"{"PackagePickupSlot":{"SlotId":"x"}}"#, &[]),
    ("ScheduledPackageUpdateDetails", r#"{"ScheduledPackageId":{"AmazonOrderId":"x"},"PackagePickupSlot":{"SlotId":"x"}}"#, &[]),
    ("Dimensions", r#"{"Length":1,"Width":1,"Height":1,"Unit":"cm"}"#, &["/Unit"]),
    ("Weight", r#"{"Value":1,"Unit":"g"}"#, &["/Unit"]),
    ("FeedSubmissionInfo", r#"{"FeedSubmissionId":"x","FeedType":"x","SubmittedDate":"2020-01-01T00:00:00Z","FeedProcessingStatus":"x","StartedProcessingDate":"2020-01-01T00:00:00Z","CompletedProcessingDate":"2020-01-01T00:00:00Z"}"#, &[]),
    ("CurrencyAmount", r#"{}"#, &[]),
    ("AdjustmentItem", r#"{}"#, &[]),
    ("AdjustmentEvent", r#"{"AdjustmentType":"FBAInventoryReimbursement","AdjustmentAmount":{},"AdjustmentItemList":[{}],"PostedDate":"2020-01-01T00:00:00Z"}"#, &["/AdjustmentType"]),
    ("AffordabilityExpenseEvent", r#"{}"#, &[]),
    ("AffordabilityExpenseReversalEvent", r#"{}"#, &[]),
    ("ChargeComponent", r#"{}"#, &[]),
    ("ChargeInstrument", r#"{}"#, &[]),
    ("CouponPaymentEvent", r#"{}"#, &[]),
    ("DebtRecoveryEvent", r#"{}"#, &[]),
    ("DebtRecoveryItem", r#"{}"#, &[]),
    ("DirectPayment", r#"{}"#, &[]),
    ("FBALiquidationEvent", r#"{}"#, &[]),
    ("FeeComponent", r#"{}"#, &[]),
    ("FinancialEventGroup", r#"{}"#, &[]),
    ("PerformanceBondRefundEvent", r#"{}"#, &[]),
    ("FinancialEvents", r#"{}"#, &[]),
    ("ImagingServicesFeeEvent", r#"{}"#, &[]),
    ("LoanServicingEvent", r#"{}"#, &[]),
    ("NetworkComminglingTransactionEvent", r#"{}"#, &[]),
    ("PayWithAmazonEvent", r#"{}"#, &[]),
    ("ProductAdsPaymentEvent", r#"{}"#, &[]),
    ("Promotion", r#"{}"#, &[]),
    ("RentalTransactionEvent", r#"{}"#, &[]),
    ("RetrochargeEvent", r#"{}"#, &[]),
    ("SAFETReimbursementEvent", r#"{}"#, &[]),
    ("SAFETReimbursementItem", r#"{}"#, &[]),
    ("SellerReviewEnrollmentPaymentEvent", r#"{}"#, &[]),
    ("ServiceFeeEvent", r#"{}"#, &[]),
    ("ShipmentEvent", r#"{}"#, &[]),
    ("ShipmentItem", r#"{}"#, &[]),
    ("SolutionProviderCreditEvent", r#"{}"#, &[]),
    ("TDSReimbursementEvent", r#"{}"#, &[]),
    ("TaxWithheldComponent", r#"{}"#, &[]),
    ("Inbound.Address", r#"{"Name":"x","AddressLine1":"x","City":"x","CountryCode":"x"}"#, &[]),
    ("PrepInstruction", r#""Polybagging""#, &[""]),
    ("Amount", r#"{"CurrencyCode":"USD","Value":"x"}"#, &["/CurrencyCode"]),
    ("AmazonPrepFeesDetails", r#"{"PrepInstruction":"Polybagging","FeePerUnit":{"CurrencyCode":"USD","Value":"x"}}"#, &["/PrepInstruction", "/FeePerUnit/CurrencyCode"]),
    ("InboundGuidance", r#""InboundNotRecommended""#, &[""]),
    ("GuidanceReason", r#""SlowMovingASIN""#, &[""]),
    ("ASINInboundGuidance", r#"{"ASIN":"x","InboundGuidance":"InboundNotRecommended"}"#, &["/InboundGuidance"]),
    ("ASINPrepInstructions", r#"{"ASIN":"x","PrepGuidance":"ConsultHelpDocuments"}"#, &["/PrepGuidance"]),
    ("BoxContentsFeeDetails", r#"{}"#, &[]),
    ("BoxContentsSource", r#""NONE""#, &[""]),
    ("Contact", r#"{"Name":"x","Phone":"x","Email":"x","Fax":"x"}"#, &[]),
    ("InboundShipmentHeader", r#"{"ShipmentName":"x","ShipFromAddress":{"Name":"x","AddressLine1":"x","City":"x","CountryCode":"x"},"DestinationFulfillmentCenterId":"x","LabelPrepPreference":"SELLER_LABEL","ShipmentStatus":"WORKING"}"#, &["/LabelPrepPreference", "/ShipmentStatus"]),
    ("InboundShipmentInfo", r#"{"ShipFromAddress":{"Name":"x","AddressLine1":"x","City":"x","CountryCode":"x"},"AreCasesRequired":true}"#, &[]),
    ("InboundShipmentItem", r#"{"SellerSKU":"x","QuantityShipped":1}"#, &[]),
    ("InboundShipmentPlan", r#"{"ShipmentId":"x","DestinationFulfillmentCenterId":"x","ShipToAddress":{"Name":"x","AddressLine1":"x","City":"x","CountryCode":"x"},"LabelPrepType":"NO_LABEL","Items":{"SellerSKU":"x","FulfillmentNetworkSKU":"x","Quantity":1}}"#, &["/LabelPrepType"]),
    ("InboundShipmentPlanItem", r#"{"SellerSKU":"x","FulfillmentNetworkSKU":"x","Quantity":1}"#, &[]),
    ("ItemCondition", r#""NewItem""#, &[""]),
    ("InboundShipmentPlanRequestItem", r#"{"SellerSKU":"x","Quantity":1}"#, &[]),
    ("InvalidASIN", r#"{"ASIN":"x","ErrorReason":"DoestNotExist"}"#, &["/ErrorReason"]),
    ("InvalidSKU", r#"{"SellerSKU":"x","ErrorReason":"DoesNotExist"}"#, &["/ErrorReason"]),
    ("NonPartneredCarrier", r#""BUSINESS_POST""#, &[""]),
    ("NonPartneredLtlDataInput", r#"{"CarrierName":"BUSINESS_POST"}"#, &["/CarrierName"]),
    ("NonPartneredLtlDataOutput", r#"{"CarrierName":"BUSINESS_POST"}"#, &["/CarrierName"]),
    ("NonPartneredSmallParcelDataInput", r#"{"CarrierName":"BUSINESS_POST","PackageList":[{"TrackingId":"x"}]}"#, &["/CarrierName"]),
    ("NonPartneredSmallParcelDataOutput", r#"{"PackageList":[{"CarrierName":"BUSINESS_POST","TrackingId":"x","PackageStatus":"SHIPPED"}]}"#, &["/PackageList/0/CarrierName", "/PackageList/0/PackageStatus"]),
    ("NonPartneredSmallParcelPackageInput", r#"{"TrackingId":"x"}"#, &[]),
    ("NonPartneredSmallParcelPackageOutput", r#"{"CarrierName":"BUSINESS_POST","TrackingId":"x","PackageStatus":"SHIPPED"}"#, &["/CarrierName", "/PackageStatus"]),
    ("Pallet", r#"{"Dimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"IsStacked":true}"#, &["/Dimensions/Unit"]),
    ("PartneredEstimate", r#"{}"#, &[]),
    ("FreightClass", r#""50""#, &[""]),
    ("PartneredLtlDataInput", r#"{"Contact":{"Name":"x","Phone":"x","Email":"x","Fax":"x"},"BoxCount":1,"FreightReadyDate":"2020-01-01"}"#, &[]),
    ("PartneredLtlDataOutput", r#"{"Contact":{"Name":"x","Phone":"x","Email":"x","Fax":"x"},"BoxCount":1,"FreightReadyDate":"2020-01-01","PreviewPickupDate":"2020-01-01T00:00:00Z","PreviewDeliveryDate":"2020-01-01T00:00:00Z","PreviewFreightClass":"50","AmazonReferenceId":"x","IsBillOfLadingAvailable":true,"PartneredEstimate":{},"CarrierName":"DHL_EXPRESS_USA_INC"}"#, &["/PreviewFreightClass", "/CarrierName"]),
    ("PartneredSmallParcelDataInput", r#"{"PackageList":[{"Dimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"Weight":{"Value":1,"Unit":"g"}}]}"#, &["/PackageList/0/Dimensions/Unit", "/PackageList/0/Weight/Unit"]),
    ("PartneredSmallParcelDataOutput", r#"{"PackageList":[{"Dimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"Weight":{"Value":1,"Unit":"g"},"TrackingId":"x","PackageStatus":"SHIPPED","CarrierName":"x"}]}"#, &["/PackageList/0/Dimensions/Unit", "/PackageList/0/Weight/Unit", "/PackageList/0/PackageStatus"]),
    ("PartneredSmallParcelPackageInput", r#"{"Dimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"Weight":{"Value":1,"Unit":"g"}}"#, &["/Dimensions/Unit", "/Weight/Unit"]),
    ("PartneredSmallParcelPackageOutput", r#"{"Dimensions":{"Length":1,"Width":1,"Height":1,"Unit":"cm"},"Weight":{"Value":1,"Unit":"g"},"TrackingId":"x","PackageStatus":"SHIPPED","CarrierName":"x"}"#, &["/Dimensions/Unit", "/Weight/Unit", "/PackageStatus"]),
    ("PrepDetails", r#"{"PrepInstruction":"Polybagging","PrepOwner":"AMAZON"}"#, &["/PrepInstruction", "/PrepOwner"]),
    ("SKUInboundGuidance", r#"{"SellerSKU":"x","ASIN":"x","InboundGuidance":"InboundNotRecommended"}"#, &["/InboundGuidance"]),
    ("SKUPrepInstructions", r#"{"SellerSKU":"x","ASIN":"x","BarcodeInstruction":"RequiresFNSKULabel","PrepGuidance":"ConsultHelpDocuments","AmazonPrepFeesDetails":[{"PrepInstruction":"Polybagging","FeePerUnit":{"CurrencyCode":"USD","Value":"x"}}]}"#, &["/BarcodeInstruction", "/PrepGuidance", "/AmazonPrepFeesDetails/0/PrepInstruction", "/AmazonPrepFeesDetails/0/FeePerUnit/CurrencyCode"]),
    ("TransportContent", r#"{"TransportHeader":{"SellerId":"x","ShipmentId":"x","IsPartnered":true,"ShipmentType":"SP"},"TransportDetails":{},"TransportResult":{"TransportStatus":"WORKING"}}"#, &["/TransportHeader/ShipmentType", "/TransportResult/TransportStatus"]),
    ("TransportDetailInput", r#"{}"#, &[]),
    ("TransportDetailOutput", r#"{}"#, &[]),
    ("TransportDocument", r#"{"PdfDocument":"x","Checksum":"x"}"#, &[]),
    ("TransportHeader", r#"{"SellerId":"x","ShipmentId":"x","IsPartnered":true,"ShipmentType":"SP"}"#, &["/ShipmentType"]),
    ("TransportResult", r#"{"TransportStatus":"WORKING"}"#, &["/TransportStatus"]),
    ("InventorySupply", r#"{"FNSKU":"x","TotalSupplyQuantity":1,"InStockSupplyQuantity":1}"#, &[]),
    ("InventorySupplyDetail", r#"{"Quantity":1,"SupplyType":"InStock","EarliestAvailableToPick":{"TimepointType":"Immediately"},"LatestAvailableToPick":{"TimepointType":"Immediately"}}"#, &["/SupplyType", "/EarliestAvailableToPick/TimepointType", "/LatestAvailableToPick/TimepointType"]),
    ("Timepoint", r#"{"TimepointType":"Immediately"}"#, &["/TimepointType"]),
    ("Outbound.Address", r#"{"Name":"x","Line1":"x","StateOrProvinceCode":"x","CountryCode":"x"}"#, &[]),
    ("CODSettings", r#"{}"#, &[]),
    ("CreateFulfillmentOrderItem", r#"{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("CreateReturnItem", r#"{"SellerReturnItemId":"x","SellerFulfillmentOrderItemId":"x","AmazonShipmentId":"x","ReturnReasonCode":"x"}"#, &[]),
    ("Currency", r#"{"CurrencyCode":"x","Value":"x"}"#, &[]),
    ("DeliveryWindow", r#"{"StartDateTime":"2020-01-01T00:00:00Z","EndDateTime":"2020-01-01T00:00:00Z"}"#, &[]),
    ("Fee", r#"{"Name":"FBAPerUnitFulfillmentFee","Amount":{"CurrencyCode":"x","Value":"x"}}"#, &["/Name"]),
    ("ShippingSpeedCategory", r#""Standard""#, &[""]),
    ("FulfillmentOrder", r#"{"SellerFulfillmentOrderId":"x","MarketplaceId":"x","DisplayableOrderId":"x","DisplayableOrderDateTime":"2020-01-01T00:00:00Z","DisplayableOrderComment":"x","ShippingSpeedCategory":"Standard","DeliveryWindow":{"StartDateTime":"2020-01-01T00:00:00Z","EndDateTime":"2020-01-01T00:00:00Z"},"DestinationAddress":{"Name":"x","Line1":"x","StateOrProvinceCode":"x","CountryCode":"x"},"ReceivedDateTime":"2020-01-01T00:00:00Z","FulfillmentOrderStatus":"RECEIVED","StatusUpdatedDateTime":"2020-01-01T00:00:00Z"}"#, &["/ShippingSpeedCategory", "/FulfillmentOrderStatus"]),
    ("FulfillmentOrderItem", r#"{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1,"CancelledQuantity":1,"UnfulfillableQuantity":1}"#, &[]),
    ("FulfillmentPreview", r#"{"ShippingSpeedCategory":"Standard","IsFulfillable":true,"IsCODCapable":true,"MarketplaceId":"x"}"#, &["/ShippingSpeedCategory"]),
    ("FulfillmentPreviewItem", r#"{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("FulfillmentPreviewShipment", r#"{"EarliestShipDate":"2020-01-01T00:00:00Z","LatestShipDate":"2020-01-01T00:00:00Z","EarliestArrivalDate":"2020-01-01T00:00:00Z","LatestArrivalDate":"2020-01-01T00:00:00Z","FulfillmentPreviewItems":[{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1}]}"#, &[]),
    ("FulfillmentShipment", r#"{"AmazonShipmentId":"x","FulfillmentCenterId":"x","FulfillmentShipmentStatus":"PENDING","FulfillmentShipmentItem":[{"SellerFulfillmentOrderItemId":"x","Quantity":1}],"FulfillmentShipmentPackage":[{"PackageNumber":1,"CarrierCode":"x"}]}"#, &["/FulfillmentShipmentStatus"]),
    ("FulfillmentShipmentItem", r#"{"SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("FulfillmentShipmentPackage", r#"{"PackageNumber":1,"CarrierCode":"x"}"#, &[]),
    ("GetFulfillmentPreviewItem", r#"{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("InvalidItemReasonCode", r#""InvalidValues""#, &[""]),
    ("InvalidItemReason", r#"{"InvalidItemReasonCode":"InvalidValues","Description":"x"}"#, &["/InvalidItemReasonCode"]),
    ("InvalidReturnItem", r#"{"SellerReturnItemId":"x","SellerFulfillmentOrderItemId":"x","InvalidItemReason":{"InvalidItemReasonCode":"InvalidValues","Description":"x"}}"#, &["/InvalidItemReason/InvalidItemReasonCode"]),
    ("ReasonCodeDetails", r#"{"ReturnReasonCode":"x","Description":"x"}"#, &[]),
    ("ReturnAuthorization", r#"{"ReturnAuthorizationId":"x","FulfillmentCenterId":"x","ReturnToAddress":{"Name":"x","Line1":"x","StateOrProvinceCode":"x","CountryCode":"x"},"AmazonRmaId":"x","RmaPageURL":"x"}"#, &[]),
    ("ReturnItem", r#"{"SellerReturnItemId":"x","SellerFulfillmentOrderItemId":"x","AmazonShipmentId":"x","SellerReturnReasonCode":"x","Status":"New","StatusChangedDate":"2020-01-01T00:00:00Z"}"#, &["/Status"]),
    ("ReturnReceivedCondition", r#""CarrierDamaged""#, &[""]),
    ("ScheduledDeliveryInfo", r#"{"DeliveryTimeZone":"x","DeliveryWindows":[{"StartDateTime":"2020-01-01T00:00:00Z","EndDateTime":"2020-01-01T00:00:00Z"}]}"#, &[]),
    ("Status", r#""New""#, &[""]),
    ("TrackingAddress", r#"{"City":"x","State":"x","Country":"x"}"#, &[]),
    ("TrackingEvent", r#"{"EventDate":"x","EventAddress":{"City":"x","State":"x","Country":"x"},"EventCode":"x"}"#, &[]),
    ("UnfulfillablePreviewItem", r#"{"SellerSKU":"x","SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("UpdateFulfillmentOrderItem", r#"{"SellerFulfillmentOrderItemId":"x","Quantity":1}"#, &[]),
    ("AdditionalInputs", r#"{"AdditionalInputFieldName":"x","SellerInputDefinition":{"IsRequired":true,"DataType":"String","Constraints":"ValidationRegEx","InputDisplayText":"x","StoredValue":{"DataType":"String"}}}"#, &["/SellerInputDefinition/DataType", "/SellerInputDefinition/Constraints", "/SellerInputDefinition/StoredValue/DataType"]),
    ("AdditionalSellerInputs", r#"{"AdditionalInputFieldName":"x","AdditionalSellerInput":{"DataType":"String"}}"#, &["/AdditionalSellerInput/DataType"]),
    ("MerchantFulfillment.Address", r#"{"Name":"x","AddressLine1":"x","Email":"x","City":"x","PostalCode":"x","CountryCode":"x","Phone":"x"}"#, &[]),
    ("MerchantFulfillment.Item", r#"{"OrderItemId":"x","Quantity":1}"#, &[]),
    ("FileContents", r#"{"Contents":"x","FileType":"application/pdf","Checksum":"x"}"#, &["/FileType"]),
    ("HazmatType", r#""None""#, &[""]),
    ("ItemLevelFieldsList", r#"{"Asin":"x","AdditionalInputs":{"AdditionalInputFieldName":"x","SellerInputDefinition":{"IsRequired":true,"DataType":"String","Constraints":"ValidationRegEx","InputDisplayText":"x","StoredValue":{"DataType":"String"}}}}"#, &["/AdditionalInputs/SellerInputDefinition/DataType", "/AdditionalInputs/SellerInputDefinition/Constraints", "/AdditionalInputs/SellerInputDefinition/StoredValue/DataType"]),
    ("ItemLevelSellerInputsList", r#"{"AdditionalSellerInputs":{"AdditionalInputFieldName":"x","AdditionalSellerInput":{"DateType":"String"}}}"#, &["/AdditionalSellerInputs/AdditionalSellerInput/DateType"]),
    ("Label", r#"{"Dimensions":{"Length":1,"Width":1,"Unit":"inches"},"FileContents":{"Contents":"x","FileType":"application/pdf","Checksum":"x"}}"#, &["/Dimensions/Unit", "/FileContents/FileType"]),
    ("LabelCustomization", r#"{"StandardIdForLabel":"AmazonOrderId"}"#, &["/StandardIdForLabel"]),
    ("LabelDimensions", r#"{"Length":1,"Width":1,"Unit":"inches"}"#, &["/Unit"]),
    ("PackageDimensions", r#"{}"#, &[]),
    ("RejectedShippingService", r#"{"CarrierName":"x","ShippingServiceId":"x","RejectionReasonCode":"INELIGIBLE","RejectionReasonMessage":"x","ShippingServiceName":"x"}"#, &[]),
    ("SellerInputDefinition", r#"{"IsRequired":true,"DataType":"String","Constraints":"ValidationRegEx","InputDisplayText":"x","StoredValue":{"DataType":"String"}}"#, &["/DataType", "/Constraints", "/StoredValue/DataType"]),
    ("SellerInputValue", r#"{"DataType":"String"}"#, &["/DataType"]),
    ("Shipment", r#"{"ShipmentId":"x","AmazonOrderId":"x","ItemList":[{"OrderItemId":"x","Quantity":1}],"ShipFromAddress":{"Name":"x","AddressLine1":"x","Email":"x","City":"x","PostalCode":"x","CountryCode":"x","Phone":"x"},"ShipToAddress":{"Name":"x","AddressLine1":"x","Email":"x","City":"x","PostalCode":"x","CountryCode":"x","Phone":"x"},"PackageDimensions":{},"Weight":{"Value":1,"Unit":"g"},"Insurance":{},"ShippingService":{"ShippingServiceName":"x","CarrierName":"x","ShippingServiceId":"x","ShippingServiceOfferId":"x","ShipDate":"2020-01-01T00:00:00Z","Rate":{},"ShippingServiceOptions":{"DeliveryExperience":"DeliveryConfirmationWithAdultSignature","CarrierWillPickup":true,"LabelFormat":"x"},"RequiresAdditionalSellerInputs":true},"Label":{"Dimensions":{"Length":1,"Width":1,"Unit":"inches"},"FileContents":{"Contents":"x","FileType":"application/pdf","Checksum":"x"}},"Status":"Purchased","CreatedDate":"2020-01-01T00:00:00Z"}"#, &["/Weight/Unit", "/ShippingService/ShippingServiceOptions/DeliveryExperience", "/Label/Dimensions/Unit", "/Label/FileContents/FileType", "/Status"]),
    ("ShipmentLevelFields", r#"{}"#, &[]),
    ("ShipmentLevelSellerInputsList", r#"{"AdditionalSellerInputs":{"AdditionalInputFieldName":"x","AdditionalSellerInput":{"DataType":"String"}}}"#, &["/AdditionalSellerInputs/AdditionalSellerInput/DataType"]),
    ("ShipmentRequestDetails", r#"{"AmazonOrderId":"x","ItemList":[{"OrderItemId":"x","Quantity":1}],"ShipFromAddress":{"Name":"x","AddressLine1":"x","Email":"x","City":"x","PostalCode":"x","CountryCode":"x","Phone":"x"},"PackageDimensions":{},"Weight":{"Value":1,"Unit":"g"},"ShippingServiceOptions":{"DeliveryExperience":"DeliveryConfirmationWithAdultSignature","CarrierWillPickup":true,"LabelFormat":"x"},"LabelCustomization":{"StandardIdForLabel":"AmazonOrderId"}}"#, &["/Weight/Unit", "/ShippingServiceOptions/DeliveryExperience", "/LabelCustomization/StandardIdForLabel"]),
    ("ShippingOfferingFilter", r#"{}"#, &[]),
    ("ShippingService", r#"{"ShippingServiceName":"x","CarrierName":"x","ShippingServiceId":"x","ShippingServiceOfferId":"x","ShipDate":"2020-01-01T00:00:00Z","Rate":{},"ShippingServiceOptions":{"DeliveryExperience":"DeliveryConfirmationWithAdultSignature","CarrierWillPickup":true,"LabelFormat":"x"},"RequiresAdditionalSellerInputs":true}"#, &["/ShippingServiceOptions/DeliveryExperience"]),
    ("ShippingServiceOptions", r#"{"DeliveryExperience":"DeliveryConfirmationWithAdultSignature","CarrierWillPickup":true,"LabelFormat":"x"}"#, &["/DeliveryExperience"]),
    ("TemporarilyUnavailableCarrier", r#"{"CarrierName":"x"}"#, &[]),
    ("TermsAndConditionsNotAcceptedCarrier", r#"{"CarrierName":"x"}"#, &[]),
    ("TransparencyCodeList", r#"{"TransparencyCode":"x"}"#, &[]),
    ("Orders.Address", r#"{"Name":"x"}"#, &[]),
    ("BuyerCustomizedInfo", r#"{"CustomizedURL":"x"}"#, &[]),
    ("BuyerTaxInfo", r#"{}"#, &[]),
    ("Money", r#"{}"#, &[]),
    ("Order", r#"{"AmazonOrderId":"x","PurchaseDate":"2020-01-01T00:00:00Z","LastUpdateDate":"2020-01-01T00:00:00Z","OrderStatus":"x","NumberOfItemsShipped":1,"NumberOfItemsUnshipped":1}"#, &[]),
    ("OrderItem", r#"{"ASIN":"x","OrderItemId":"x","QuantityOrdered":1}"#, &[]),
    ("PaymentExecutionDetailItem", r#"{"Payment":{},"PaymentMethod":"COD"}"#, &["/PaymentMethod"]),
    ("PaymentMethodDetails", r#"{}"#, &[]),
    ("ProductInfo", r#"{}"#, &[]),
    ("PointsGranted", r#"{}"#, &[]),
    ("TaxClassification", r#"{"Name":"x","Value":"x"}"#, &[]),
    ("TaxCollection", r#"{"Model":"MarketplaceFacilitator","ResponsibleParty":"Amazon Services, Inc."}"#, &[]),
    ("AvailabilityType", r#""NOW""#, &[""]),
    ("BuyBoxPrice", r#"{"condition":"New","LandedPrice":{"Amount":1,"CurrencyCode":"USD"},"ListingPrice":{"Amount":1,"CurrencyCode":"USD"},"Shipping":{"Amount":1,"CurrencyCode":"USD"}}"#, &["/condition", "/LandedPrice/CurrencyCode", "/ListingPrice/CurrencyCode", "/Shipping/CurrencyCode"]),
    ("DetailedShippingTimeType", r#"{}"#, &[]),
    ("FeeDetail", r#"{"FeeType":"ReferralFee","FeeAmount":{"Amount":1,"CurrencyCode":"USD"},"FinalFee":{"Amount":1,"CurrencyCode":"USD"}}"#, &["/FeeType", "/FeeAmount/CurrencyCode", "/FinalFee/CurrencyCode"]),
    ("FeesEstimate", r#"{"TimeOfFeesEstimation":"2020-01-01T00:00:00Z","TotalFeesEstimate":{"Amount":1,"CurrencyCode":"USD"},"FeeDetailList":[{"FeeType":"ReferralFee","FeeAmount":{"Amount":1,"CurrencyCode":"USD"},"FinalFee":{"Amount":1,"CurrencyCode":"USD"}}]}"#, &["/TotalFeesEstimate/CurrencyCode", "/FeeDetailList/0/FeeType", "/FeeDetailList/0/FeeAmount/CurrencyCode", "/FeeDetailList/0/FinalFee/CurrencyCode"]),
    ("FeesEstimateIdentifier", r#"{"MarketplaceId":"x","IdType":"ASIN","IdValue":"x","PriceToEstimateFees":{"ListingPrice":{"Amount":1,"CurrencyCode":"USD"}},"IsAmazonFulfilled":true,"SellerInputIdentifier":"x"}"#, &["/IdType", "/PriceToEstimateFees/ListingPrice/CurrencyCode"]),
    ("FeesEstimateRequest", r#"{"MarketplaceId":"x","IdType":"ASIN","IdValue":"x","PriceToEstimateFees":{"ListingPrice":{"Amount":1,"CurrencyCode":"USD"}},"IsAmazonFulfilled":true,"SellerInputIdentifier":"x","Identifier":"x"}"#, &["/IdType", "/PriceToEstimateFees/ListingPrice/CurrencyCode"]),
    ("FeesEstimateResult", r#"{"FeesEstimateIdentifier":{"MarketplaceId":"x","IdType":"ASIN","IdValue":"x","PriceToEstimateFees":{"ListingPrice":{"Amount":1,"CurrencyCode":"USD"}},"IsAmazonFulfilled":true,"SellerInputIdentifier":"x"},"Status":"Success"}"#, &["/FeesEstimateIdentifier/IdType", "/FeesEstimateIdentifier/PriceToEstimateFees/ListingPrice/CurrencyCode", "/Status"]),
    ("FeeType", r#""ReferralFee""#, &[""]),
    ("FulfillmentChannelType", r#""Amazon""#, &[""]),
    ("LowestPrice", r#"{"condition":"New","fulfillmentChannel":"Amazon","LandedPrice":{"Amount":1,"CurrencyCode":"USD"},"ListingPrice":{"Amount":1,"CurrencyCode":"USD"},"Shipping":{"Amount":1,"CurrencyCode":"USD"}}"#, &["/condition", "/fulfillmentChannel", "/LandedPrice/CurrencyCode", "/ListingPrice/CurrencyCode", "/Shipping/CurrencyCode"]),
    ("MarketplaceType", r#""ATVPDKIKX0DER""#, &[]),
    ("MoneyType", r#"{"Amount":1,"CurrencyCode":"USD"}"#, &["/CurrencyCode"]),
    ("OfferCount", r#"{"condition":"New","fulfillmentChannel":"Amazon"}"#, &["/condition", "/fulfillmentChannel"]),
    ("OfferCountType", r#"{"OfferCount":{"condition":"New","fulfillmentChannel":"Amazon"}}"#, &["/OfferCount/condition", "/OfferCount/fulfillmentChannel"]),
    ("Points", r#"{"PointsNumber":1,"PointsMonetaryValue":{"Amount":1,"CurrencyCode":"USD"}}"#, &["/PointsMonetaryValue/CurrencyCode"]),
    ("PriceToEstimateFees", r#"{"ListingPrice":{"Amount":1,"CurrencyCode":"USD"}}"#, &["/ListingPrice/CurrencyCode"]),
    ("SellerFeedbackRating", r#"{}"#, &[]),
    ("ShipsFrom", r#"{}"#, &[]),
    ("AdvertisingRecommendation", r#"{"RecommendationId":"x","RecommendationReason":"x","LastUpdated":"2020-01-01T00:00:00Z","ItemIdentifier":{},"YourPricePlusShipping":{"CurrencyCode":"x","Amount":1},"LowestPricePlusShipping":{"CurrencyCode":"x","Amount":1},"AvailableQuantity":1,"SalesForTheLast30Days":1}"#, &[]),
    ("CategoryQuery", r#"{"RecommendationCategory":"Selection","FilterOptions":{}}"#, &["/RecommendationCategory"]),
    ("DimensionMeasure", r#"{"Value":1,"Unit":"x"}"#, &[]),
    ("FulfillmentRecommendation", r#"{"RecommendationId":"x","RecommendationReason":"x","LastUpdated":"2020-01-01T00:00:00Z","ItemIdentifier":{}}"#, &[]),
    ("GlobalSellingRecommendation", r#"{"RecommendationId":"x","RecommendationReason":"x","LastUpdated":"2020-01-01T00:00:00Z","ItemIdentifier":{}}"#, &[]),
    ("InventoryRecommendation", r#"{"RecommendationId":"x","RecommendationReason":"x","LastUpdated":"2020-01-01T00:00:00Z","ItemIdentifier":{}}"#, &[]),
    ("ItemDimensions", r#"{"Height":{"Value":1,"Unit":"x"},"Width":{"Value":1,"Unit":"x"},"Length":{"Value":1,"Unit":"x"},"Weight":{"Value":1,"Unit":"x"}}"#, &[]),
    ("Price", r#"{"CurrencyCode":"x","Amount":1}"#, &[]),
    ("PricingRecommendation", r#"{"RecommendationId":"x","RecommendationReason":"x","LastUpdated":"2020-01-01T00:00:00Z","ItemIdentifier":{}}"#, &[]),
    ("ProductIdentifier", r#"{}"#, &[]),
    ("WeightMeasure", r#"{"Value":1,"Unit":"x"}"#, &[]),
    ("ReportInfo", r#"{"ReportId":"x","ReportType":"x","ReportRequestId":"x","AvailableDate":"2020-01-01T00:00:00Z","Acknowledged":true,"AcknowledgedDate":"2020-01-01T00:00:00Z"}"#, &[]),
    ("ReportRequestInfo", r#"{"ReportRequestId":"x","ReportType":"x","StartDate":"2020-01-01T00:00:00Z","EndDate":"2020-01-01T00:00:00Z","Scheduled":true,"SubmittedDate":"2020-01-01T00:00:00Z","ReportProcessingStatus":"x","GeneratedReportId":"x","StartedProcessingDate":"2020-01-01T00:00:00Z","CompletedDate":"2020-01-01T00:00:00Z"}"#, &[]),
    ("ReportSchedule", r#"{"ReportType":"x","Schedule":"x","ScheduledDate":"2020-01-01T00:00:00Z"}"#, &[]),
    ("Marketplace", r#"{"MarketplaceId":"x","Name":"x","DefaultCountryCode":"x","DefaultCurrencyCode":"x","DefaultLanguageCode":"x","DomainName":"x"}"#, &[]),
    ("Participation", r#"{"MarketplaceId":"x","SellerId":"x","HasSellerSuspendedListings":"Yes"}"#, &["/HasSellerSuspendedListings"]),
    ("ShipmentInvoicing.Address", r#"{"Name":"x"}"#, &[]),
    ("ShipmentInvoicing.Shipment", r#"{"AmazonShipmentId":"x","InvoiceStatus":"Processing"}"#, &["/InvoiceStatus"]),
    ("ShipmentInvoicing.ShipmentItem", r#"{"ASIN":"x","OrderItemId":"x","QuantityOrdered":1,"SerialNumber":{}}"#, &[]),
    ("SerialNumbers", r#"{}"#, &[]),
    ("ShipmentDetail", r#"{"AmazonOrderId":"x","AmazonShipmentId":"x","PurchaseDate":"2020-01-01T00:00:00Z","ShipmentItems":{"ASIN":"x","OrderItemId":"x","QuantityOrdered":1,"SerialNumber":{}}}"#, &[]),
    ("AttributeKeyValue", r#"{"Key":"sqsQueueUrl","Value":"x"}"#, &["/Key"]),
    ("Destination", r#"{"DeliveryChannel":"SQS"}"#, &["/DeliveryChannel"]),
    ("Subscription", r#"{"NotificationType":"x","Destination":{"DeliveryChannel":"SQS"},"IsEnabled":true}"#, &["/Destination/DeliveryChannel"]),
];

fn minimal_payloads() -> Vec<(&'static str, Value, &'static [&'static str])> {
    MINIMAL_PAYLOADS
        .iter()
        .map(|&(shape, raw, closed)| {
            let value: Value = serde_json::from_str(raw)
                .unwrap_or_else(|e| panic!("{}: bad fixture: {}", shape, e));
            (shape, value, closed)
        })
        .collect()
}

/// JSON pointers of every object key in `value`, depth first.
fn key_pointers(value: &Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let pointer = format!("{}/{}", prefix, key);
                out.push(pointer.clone());
                key_pointers(child, &pointer, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                key_pointers(child, &format!("{}/{}", prefix, i), out);
            }
        }
        _ => {}
    }
}

fn without_key(value: &Value, pointer: &str) -> Value {
    let mut value = value.clone();
    let (parent, key) = pointer.rsplit_once('/').unwrap();
    value
        .pointer_mut(parent)
        .and_then(Value::as_object_mut)
        .unwrap()
        .remove(key);
    value
}

fn expect_nonconforming(catalog: &ShapeCatalog, shape: &str, payload: &Value, what: &str) {
    match catalog.check(shape, payload, CheckPolicy::Lenient) {
        Err(Error::Nonconforming { shape: reported, .. }) => assert_eq!(reported, shape),
        other => panic!("{}: {} should be rejected, got {:?}", shape, what, other),
    }
}

#[test]
fn test_every_shape_has_a_minimal_payload() {
    let catalog = ShapeCatalog::standard();
    let registered: BTreeSet<&str> = catalog.iter().map(|entry| entry.name).collect();
    let covered: BTreeSet<&str> = MINIMAL_PAYLOADS.iter().map(|&(shape, _, _)| shape).collect();

    assert_eq!(covered.len(), MINIMAL_PAYLOADS.len(), "duplicate table rows");
    assert_eq!(
        registered.difference(&covered).collect::<Vec<_>>(),
        Vec::<&&str>::new(),
        "shapes without a minimal payload"
    );
    assert_eq!(
        covered.difference(&registered).collect::<Vec<_>>(),
        Vec::<&&str>::new(),
        "table rows naming no shape"
    );
}

#[test]
fn test_minimal_payloads_pass_strict_check() {
    let catalog = ShapeCatalog::standard();
    for (shape, payload, _) in minimal_payloads() {
        match catalog.check(shape, &payload, CheckPolicy::Strict) {
            Ok(conformance) => assert!(conformance.is_exact(), "{}", shape),
            Err(e) => panic!("{}: {}", shape, e),
        }
    }
}

#[test]
fn test_every_required_field_is_enforced() {
    let catalog = ShapeCatalog::standard();
    for (shape, payload, _) in minimal_payloads() {
        let mut pointers = Vec::new();
        key_pointers(&payload, "", &mut pointers);
        for pointer in pointers {
            let stripped = without_key(&payload, &pointer);
            expect_nonconforming(&catalog, shape, &stripped, &format!("missing {}", pointer));
        }
    }
}

#[test]
fn test_empty_object_only_fits_all_optional_shapes() {
    let catalog = ShapeCatalog::standard();
    let empty = Value::Object(Default::default());
    let mut all_optional = 0;

    for (shape, payload, _) in minimal_payloads() {
        let accepted = catalog.check(shape, &empty, CheckPolicy::Strict).is_ok();
        assert_eq!(accepted, payload == empty, "{} on {{}}", shape);
        all_optional += usize::from(accepted);
    }
    assert_eq!(all_optional, 50);
}

#[test]
fn test_closed_literals_reject_undocumented_values() {
    let catalog = ShapeCatalog::standard();
    for (shape, payload, closed) in minimal_payloads() {
        for &pointer in closed {
            let mut altered = payload.clone();
            let slot = altered
                .pointer_mut(pointer)
                .unwrap_or_else(|| panic!("{}: no value at {:?}", shape, pointer));
            assert!(slot.is_string(), "{}: {:?} is not a literal", shape, pointer);
            *slot = Value::String("__undocumented__".to_string());
            expect_nonconforming(&catalog, shape, &altered, &format!("literal at {:?}", pointer));
        }
    }
}

#[test]
fn test_free_text_positions_accept_any_string() {
    let catalog = ShapeCatalog::standard();
    let mut rewritten = 0;

    for (shape, payload, closed) in minimal_payloads() {
        let mut pointers = Vec::new();
        key_pointers(&payload, "", &mut pointers);
        let mut altered = payload.clone();
        for pointer in pointers.iter().filter(|p| !closed.contains(&p.as_str())) {
            if let Some(slot) = altered.pointer_mut(pointer).filter(|v| v.as_str() == Some("x")) {
                *slot = Value::String("anything at all".to_string());
                rewritten += 1;
            }
        }
        catalog
            .check(shape, &altered, CheckPolicy::Strict)
            .unwrap_or_else(|e| panic!("{}: {}", shape, e));
    }
    assert!(rewritten > 0);
}
