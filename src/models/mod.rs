// src/models/mod.rs
//
// Payload shapes, one module per API domain. Names the vendor reuses across
// domains (`Address`, `Item`, `Shipment`, `ShipmentItem`) stay in their own
// module, so `inbound::Address` and `outbound::Address` are distinct types.

pub mod common;

pub mod easy_ship;
pub mod feeds;
pub mod finances;
pub mod inbound;
pub mod inventory;
pub mod merchant_fulfillment;
pub mod orders;
pub mod outbound;
pub mod products;
pub mod recommendations;
pub mod reports;
pub mod sellers;
pub mod shipment_invoicing;
pub mod subscriptions;

// Re-export for convenience
pub use common::{CalendarDate, DateTime, Dimensions, Weight};
