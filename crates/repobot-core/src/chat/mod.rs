//! Outbound side of the pipeline.
//!
//! - `transport`: the `ChatTransport` port implemented by infra adapters
//! - `delivery`: the `DeliveryCoordinator` with continue-on-error batch sends

pub mod delivery;
pub mod transport;
