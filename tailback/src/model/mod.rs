pub mod action;
pub mod analysis;
pub mod config;
mod congestion_range_group;
pub mod handler;
pub mod processor;
pub mod sample;
pub mod store;
mod traffic_override_error;

#[cfg(test)]
pub(crate) mod test_ops;

pub use congestion_range_group::{CongestionLevel, CongestionRangeGroup};
pub use traffic_override_error::TrafficOverrideError;
