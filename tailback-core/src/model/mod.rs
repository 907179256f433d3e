mod congestion_numeric_override;
mod map_matched_location;
pub mod progress;
pub mod route;

pub use congestion_numeric_override::CongestionNumericOverride;
pub use map_matched_location::MapMatchedLocation;
