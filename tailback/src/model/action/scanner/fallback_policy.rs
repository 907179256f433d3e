use crate::model::action::TrafficUpdateAction;
use serde::{Deserialize, Serialize};

/// action produced by the scanner chain when no scanner claims a result.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// clear the accumulator, discarding any partial low speed evidence
    #[default]
    NoAction,
    /// keep the previous action as the accumulator
    RetainPrevious,
}

impl FallbackPolicy {
    pub fn fallback(&self, previous: &TrafficUpdateAction) -> TrafficUpdateAction {
        match self {
            FallbackPolicy::NoAction => TrafficUpdateAction::NoAction,
            FallbackPolicy::RetainPrevious => previous.clone(),
        }
    }
}
