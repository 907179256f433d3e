mod congestion_override_store;
mod route_congestion;
mod store_update;

pub use congestion_override_store::CongestionOverrideStore;
pub use route_congestion::RouteCongestion;
pub use store_update::StoreUpdate;
