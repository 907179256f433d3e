mod decrease_traffic_ops;
mod increase_traffic_ops;
mod segment_range_ops;
mod traffic_update_processor;

pub use decrease_traffic_ops::decrease_traffic;
pub use increase_traffic_ops::increase_traffic;
pub use segment_range_ops::find_segment_range;
pub use traffic_update_processor::{OverrideCommand, TrafficUpdateProcessor};
