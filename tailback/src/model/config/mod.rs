pub mod duration_codec;
mod speed_threshold;
mod traffic_override_config;

pub use speed_threshold::SpeedThreshold;
pub use traffic_override_config::TrafficOverrideConfig;
