use super::TraceRow;
use crate::model::handler::TrafficOverrideTick;
use serde::{Deserialize, Serialize};

/// a row of replay output, one per trace row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TickRow {
    pub elapsed_millis: u64,
    pub leg_index: Option<usize>,
    pub geometry_index: Option<usize>,
    pub analysis: String,
    pub action: String,
    pub store_update: String,
    /// congestion numeric in effect at the traveled segment after the tick
    pub effective_congestion: Option<u8>,
}

impl TickRow {
    pub fn new(
        trace_row: &TraceRow,
        tick: Option<&TrafficOverrideTick>,
        effective_congestion: Option<u8>,
    ) -> TickRow {
        let (analysis, action, store_update) = match tick {
            Some(t) => (t.analysis.name(), t.action.name(), t.update.name()),
            None => ("none", "none", "none"),
        };
        TickRow {
            elapsed_millis: trace_row.elapsed_millis,
            leg_index: trace_row.leg_index,
            geometry_index: trace_row.geometry_index,
            analysis: String::from(analysis),
            action: String::from(action),
            store_update: String::from(store_update),
            effective_congestion,
        }
    }
}
