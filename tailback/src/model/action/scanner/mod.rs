mod fallback_policy;
mod high_speed_scanner;
mod low_speed_scanner;
mod no_action_scanner;
mod scanner_chain;
mod traffic_update_action_scanner;
mod wrong_false_positive_scanner;

pub use fallback_policy::FallbackPolicy;
pub use high_speed_scanner::HighSpeedScanner;
pub use low_speed_scanner::LowSpeedScanner;
pub use no_action_scanner::NoActionScanner;
pub use scanner_chain::TrafficUpdateActionScannerChain;
pub use traffic_update_action_scanner::TrafficUpdateActionScanner;
pub use wrong_false_positive_scanner::WrongFalsePositiveScanner;
