mod traffic_override_handler;
mod traffic_override_tick;
mod traffic_refresh_observer;

pub use traffic_override_handler::TrafficOverrideHandler;
pub use traffic_override_tick::TrafficOverrideTick;
pub use traffic_refresh_observer::TrafficRefreshObserver;
