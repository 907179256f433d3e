mod replay_ops;
mod tick_row;
mod trace_row;

pub use replay_ops::{read_trace, replay_trace, run_replay, write_ticks};
pub use tick_row::TickRow;
pub use trace_row::TraceRow;
