// src/models/shipment_invoicing.rs
//
// Shipment Invoicing datatypes.
// https://docs.developer.amazonservices.com/en_UK/shipment_invoicing/ShipmentInvoicing_Datatypes.html
//
// `Address`, `Shipment` and `ShipmentItem` clash with names in other domains
// and only exist here under this module.

use super::common::DateTime;
use super::orders::{AddressType, Money, PaymentMethodDetails};
use serde::{Deserialize, Serialize};

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

literal_enum! {
    pub enum InvoiceStatus {
        Processing => "Processing",
        Accepted => "Accepted",
        NotFound => "NotFound",
        Errored => "Errored",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    pub amazon_shipment_id: String,
    pub invoice_status: InvoiceStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SerialNumbers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentItem {
    #[serde(rename = "ASIN")]
    pub asin: String,
    #[serde(rename = "SellerSKU", skip_serializing_if = "Option::is_none")]
    pub seller_sku: Option<String>,
    pub order_item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub quantity_ordered: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrap_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_discount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_discount: Option<Money>,
    pub serial_number: SerialNumbers,
}

/// `ShipmentItems` holds a single record and `BuyerCounty` keeps the vendor's
/// spelling; both are reproduced as documented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentDetail {
    pub amazon_order_id: String,
    pub amazon_shipment_id: String,
    pub purchase_date: DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_details: Option<PaymentMethodDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tax_info: Option<String>,
    pub shipment_items: ShipmentItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail() -> serde_json::Value {
        json!({
            "AmazonOrderId": "902-3159896-1390916",
            "AmazonShipmentId": "DKMKLXJmN",
            "PurchaseDate": "2018-11-07T09:33:30Z",
            "ShippingAddress": {
                "Name": "Joao Silva",
                "AddressLine1": "Rua Joao Pedro 10",
                "City": "Sao Paulo",
                "CountryCode": "BR",
                "AddressType": "Residential"
            },
            "PaymentMethodDetails": {"PaymentMethodDetail": "CreditCard"},
            "BuyerCounty": "Centro",
            "BuyerTaxInfo": "CPF 000.000.000-00",
            "ShipmentItems": {
                "ASIN": "B00006JBZY",
                "OrderItemId": "68828574383266",
                "QuantityOrdered": 1,
                "ItemPrice": {"CurrencyCode": "BRL", "Amount": "100.00"},
                "SerialNumber": {"SerialNumber": "SN-1"}
            }
        })
    }

    #[test]
    fn test_shipment_detail_single_item_record() {
        let detail: ShipmentDetail = serde_json::from_value(detail()).unwrap();
        assert_eq!(detail.buyer_county.as_deref(), Some("Centro"));
        assert_eq!(detail.shipment_items.asin, "B00006JBZY");
        assert_eq!(
            detail.shipment_items.serial_number.serial_number.as_deref(),
            Some("SN-1")
        );
        assert_eq!(
            detail.shipping_address.as_ref().unwrap().address_type,
            Some(AddressType::Residential)
        );

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("BuyerCounty").is_some());
        assert!(value["ShipmentItems"].is_object());
        assert!(value.get("WarehouseId").is_none());
    }

    #[test]
    fn test_shipment_invoice_status() {
        let shipment: Shipment = serde_json::from_value(json!({
            "AmazonShipmentId": "DKMKLXJmN",
            "InvoiceStatus": "NotFound"
        }))
        .unwrap();
        assert_eq!(shipment.invoice_status, InvoiceStatus::NotFound);
    }

    #[test]
    fn test_shipment_item_requires_serial_number() {
        let mut value = detail();
        value["ShipmentItems"].as_object_mut().unwrap().remove("SerialNumber");
        let err = serde_json::from_value::<ShipmentDetail>(value).unwrap_err();
        assert!(err.to_string().contains("SerialNumber"));
    }
}
