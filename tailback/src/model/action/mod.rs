pub mod scanner;
mod traffic_update_action;

pub use traffic_update_action::TrafficUpdateAction;
