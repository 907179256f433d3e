use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RouteStepProgress {
    pub step_index: usize,
    /// index of the intersection most recently passed within the step
    pub intersection_index: usize,
}

/// position of the vehicle within a leg of the active route.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RouteLegProgress {
    pub leg_index: usize,
    /// leg-relative geometry index, which is also the index of the
    /// annotation segment being traveled.
    pub geometry_index: usize,
    pub step_progress: RouteStepProgress,
}

impl RouteLegProgress {
    pub fn new(
        leg_index: usize,
        geometry_index: usize,
        step_index: usize,
        intersection_index: usize,
    ) -> RouteLegProgress {
        RouteLegProgress {
            leg_index,
            geometry_index,
            step_progress: RouteStepProgress {
                step_index,
                intersection_index,
            },
        }
    }

    pub fn step_index(&self) -> usize {
        self.step_progress.step_index
    }

    pub fn upcoming_step_index(&self) -> usize {
        self.step_progress.step_index + 1
    }
}
