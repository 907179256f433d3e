use tailback_core::model::{route::Route, CongestionNumericOverride};

/// congestion state of one registered route: the annotation each leg was
/// delivered with, and the overrides currently active on top of it.
#[derive(Clone, Debug, Default)]
pub struct RouteCongestion {
    original_by_leg: Vec<Vec<Option<u8>>>,
    overrides: Vec<CongestionNumericOverride>,
}

impl RouteCongestion {
    pub fn new(route: &Route) -> RouteCongestion {
        RouteCongestion {
            original_by_leg: route.congestion_numeric_by_leg(),
            overrides: vec![],
        }
    }

    pub fn original_congestion_numeric(&self, leg_index: usize) -> Option<&[Option<u8>]> {
        self.original_by_leg.get(leg_index).map(|v| v.as_slice())
    }

    pub fn overrides(&self) -> &[CongestionNumericOverride] {
        &self.overrides
    }

    pub fn overrides_on_leg(&self, leg_index: usize) -> Vec<CongestionNumericOverride> {
        self.overrides
            .iter()
            .filter(|o| o.leg_index == leg_index)
            .cloned()
            .collect()
    }

    pub fn override_at(
        &self,
        leg_index: usize,
        geometry_index: usize,
    ) -> Option<&CongestionNumericOverride> {
        self.overrides
            .iter()
            .find(|o| o.contains(leg_index, geometry_index))
    }

    pub fn effective_at(&self, leg_index: usize, geometry_index: usize) -> Option<u8> {
        match self.override_at(leg_index, geometry_index) {
            Some(o) => o.overridden_value_at(geometry_index),
            None => self
                .original_congestion_numeric(leg_index)?
                .get(geometry_index)
                .copied()
                .flatten(),
        }
    }

    pub fn effective_congestion_numeric(&self, leg_index: usize) -> Option<Vec<Option<u8>>> {
        let mut congestion = self.original_congestion_numeric(leg_index)?.to_vec();
        for o in self.overrides.iter().filter(|o| o.leg_index == leg_index) {
            let values = o.overridden_congestion_numeric.iter();
            for (geometry_index, value) in o.segment_range().zip(values) {
                if let Some(slot) = congestion.get_mut(geometry_index) {
                    *slot = *value;
                }
            }
        }
        Some(congestion)
    }

    /// adds the override, removing and returning every override it overlaps.
    pub fn upsert(
        &mut self,
        congestion_override: CongestionNumericOverride,
    ) -> Vec<CongestionNumericOverride> {
        let (replaced, kept): (Vec<_>, Vec<_>) = self
            .overrides
            .drain(..)
            .partition(|o| o.overlaps(&congestion_override));
        self.overrides = kept;
        self.overrides.push(congestion_override);
        replaced
    }

    /// removes the override equal to `congestion_override`, if present.
    pub fn remove(&mut self, congestion_override: &CongestionNumericOverride) -> bool {
        let before = self.overrides.len();
        self.overrides.retain(|o| o != congestion_override);
        self.overrides.len() != before
    }
}
