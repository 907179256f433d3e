use super::{decrease_traffic, increase_traffic};
use crate::model::{
    action::TrafficUpdateAction, config::TrafficOverrideConfig, CongestionRangeGroup,
};
use tailback_core::model::CongestionNumericOverride;
use uom::si::f64::{Length, Time};

/// change to the override set of one route leg, computed from an action.
#[derive(Clone, Debug, PartialEq)]
pub enum OverrideCommand {
    /// add the override, replacing every override it overlaps
    Upsert(CongestionNumericOverride),
    /// remove this exact override
    Remove(CongestionNumericOverride),
}

/// turns confirmed traffic update actions into override commands.
#[derive(Clone, Debug)]
pub struct TrafficUpdateProcessor {
    range_group: CongestionRangeGroup,
    decrease_time_horizon: Time,
    increase_distance: Length,
}

impl TrafficUpdateProcessor {
    pub fn new(
        range_group: CongestionRangeGroup,
        decrease_time_horizon: Time,
        increase_distance: Length,
    ) -> TrafficUpdateProcessor {
        TrafficUpdateProcessor {
            range_group,
            decrease_time_horizon,
            increase_distance,
        }
    }

    /// computes the command for `action` on the leg the action refers to.
    ///
    /// `originals` is the leg's congestion numeric as delivered with the route
    /// and `existing` the overrides currently active on that leg.
    pub fn process(
        &self,
        action: &TrafficUpdateAction,
        originals: &[Option<u8>],
        existing: &[CongestionNumericOverride],
    ) -> Option<OverrideCommand> {
        match action {
            TrafficUpdateAction::DecreaseTraffic {
                measured_speed,
                leg_progress,
                route,
                detected_at_millis,
            } => {
                let horizon: Length = *measured_speed * self.decrease_time_horizon;
                decrease_traffic(
                    &self.range_group,
                    route,
                    leg_progress,
                    horizon,
                    originals,
                    existing,
                    *detected_at_millis,
                )
                .map(OverrideCommand::Upsert)
            }
            TrafficUpdateAction::IncreaseTraffic {
                route,
                leg_progress,
                expected_congestion,
                detected_at_millis,
            } => increase_traffic(
                route,
                leg_progress,
                *expected_congestion,
                self.increase_distance,
                originals,
                existing,
                *detected_at_millis,
            )
            .map(OverrideCommand::Upsert),
            TrafficUpdateAction::RestoreTraffic {
                congestion_override,
                ..
            } => existing
                .iter()
                .find(|o| *o == congestion_override)
                .cloned()
                .map(OverrideCommand::Remove),
            TrafficUpdateAction::NoAction | TrafficUpdateAction::AccumulatingLowSpeed { .. } => {
                None
            }
        }
    }
}

impl From<&TrafficOverrideConfig> for TrafficUpdateProcessor {
    fn from(config: &TrafficOverrideConfig) -> Self {
        TrafficUpdateProcessor::new(
            config.congestion_range_group.clone(),
            config.decrease_time_horizon(),
            config.increase_distance(),
        )
    }
}

impl Default for TrafficUpdateProcessor {
    fn default() -> Self {
        TrafficUpdateProcessor::from(&TrafficOverrideConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{OverrideCommand, TrafficUpdateProcessor};
    use crate::model::action::TrafficUpdateAction;
    use crate::model::analysis::SpeedAnalysisResult;
    use crate::model::test_ops::{
        mock_decrease, mock_increase, mock_low_speed, mock_override, MockRoute,
    };
    use std::time::Duration;

    #[test]
    fn test_decrease_produces_upsert() {
        let route = MockRoute::default().build();
        let originals = vec![Some(70); 10];
        let command = TrafficUpdateProcessor::default()
            .process(&mock_decrease(&route, 0, 80.0), &originals, &[])
            .expect("test invariant failed: decrease should produce a command");
        match command {
            OverrideCommand::Upsert(o) => assert_eq!((o.start_index, o.length), (0, 8)),
            other => panic!("expected Upsert, found {other:?}"),
        }
    }

    #[test]
    fn test_increase_uses_configured_distance() {
        let route = MockRoute::with_congestion(&[20; 10]).build();
        let originals = vec![Some(20); 10];
        let command = TrafficUpdateProcessor::default()
            .process(&mock_increase(&route, 2, 60), &originals, &[])
            .expect("test invariant failed: increase should produce a command");
        match command {
            OverrideCommand::Upsert(o) => assert_eq!((o.start_index, o.length), (2, 3)),
            other => panic!("expected Upsert, found {other:?}"),
        }
    }

    #[test]
    fn test_restore_removes_matching_override_only() {
        let route = MockRoute::with_congestion(&[20; 10]).build();
        let active = mock_override(&route, 0, vec![60; 3]);
        let unknown = mock_override(&route, 5, vec![60; 3]);
        let processor = TrafficUpdateProcessor::default();
        let originals = vec![Some(20); 10];

        let restore = TrafficUpdateAction::RestoreTraffic {
            route: route.clone(),
            congestion_override: active.clone(),
        };
        assert_eq!(
            processor.process(&restore, &originals, std::slice::from_ref(&active)),
            Some(OverrideCommand::Remove(active.clone()))
        );

        let stale = TrafficUpdateAction::RestoreTraffic {
            route: route.clone(),
            congestion_override: unknown,
        };
        assert_eq!(processor.process(&stale, &originals, &[active]), None);
    }

    #[test]
    fn test_non_mutating_actions_produce_nothing() {
        let route = MockRoute::default().build();
        let processor = TrafficUpdateProcessor::default();
        let originals = vec![Some(70); 10];
        assert_eq!(
            processor.process(&TrafficUpdateAction::NoAction, &originals, &[]),
            None
        );
        let accumulating = TrafficUpdateAction::AccumulatingLowSpeed {
            accumulation_start: Duration::ZERO,
            time_until_update: Duration::from_secs(20),
            latest_low_speed_result: match mock_low_speed(&route, 0) {
                SpeedAnalysisResult::LowSpeedDetected(l) => l,
                other => panic!("expected LowSpeedDetected, found {other:?}"),
            },
        };
        assert_eq!(processor.process(&accumulating, &originals, &[]), None);
    }
}
