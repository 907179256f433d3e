use super::{RouteCongestion, StoreUpdate};
use crate::model::{
    action::TrafficUpdateAction,
    config::TrafficOverrideConfig,
    processor::{OverrideCommand, TrafficUpdateProcessor},
};
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tailback_core::model::{
    route::{Route, RouteId},
    CongestionNumericOverride,
};

/// the effective congestion annotations of the registered routes.
///
/// writes come from the tick driver; readers (ETA, route line rendering) may
/// live on other threads and observe each write on their next read.
#[derive(Default)]
pub struct CongestionOverrideStore {
    processor: TrafficUpdateProcessor,
    routes: RwLock<HashMap<RouteId, RouteCongestion>>,
}

impl CongestionOverrideStore {
    pub fn new(processor: TrafficUpdateProcessor) -> CongestionOverrideStore {
        CongestionOverrideStore {
            processor,
            routes: RwLock::new(HashMap::new()),
        }
    }

    /// starts tracking a route. a route already registered keeps its overrides.
    pub fn register_route(&self, route: &Route) {
        self.write()
            .entry(route.id.clone())
            .or_insert_with(|| RouteCongestion::new(route));
    }

    /// drops every route and override, then registers `route` if given.
    pub fn reset(&self, route: Option<&Route>) {
        let mut routes = self.write();
        let dropped = routes.values().map(|r| r.overrides().len()).sum::<usize>();
        routes.clear();
        if let Some(route) = route {
            routes.insert(route.id.clone(), RouteCongestion::new(route));
        }
        log::info!(
            "congestion overrides reset, {dropped} dropped, active route {}",
            route.map(|r| r.id.to_string()).unwrap_or_else(|| String::from("none"))
        );
    }

    pub fn remove_route(&self, route_id: &RouteId) -> bool {
        self.write().remove(route_id).is_some()
    }

    /// applies a traffic update action. non-mutating actions, actions for
    /// routes or legs that are not registered, and actions that would not
    /// change the congestion all leave the store untouched.
    pub fn apply(&self, action: &TrafficUpdateAction) -> StoreUpdate {
        let (route_id, leg_index) = match action {
            TrafficUpdateAction::DecreaseTraffic {
                route,
                leg_progress,
                ..
            }
            | TrafficUpdateAction::IncreaseTraffic {
                route,
                leg_progress,
                ..
            } => (&route.id, leg_progress.leg_index),
            TrafficUpdateAction::RestoreTraffic {
                congestion_override,
                ..
            } => (&congestion_override.route_id, congestion_override.leg_index),
            TrafficUpdateAction::NoAction | TrafficUpdateAction::AccumulatingLowSpeed { .. } => {
                return StoreUpdate::Unchanged
            }
        };

        let mut routes = self.write();
        let congestion = match routes.get_mut(route_id) {
            Some(congestion) => congestion,
            None => {
                log::debug!("ignoring {} for unknown route {route_id}", action.name());
                return StoreUpdate::Unchanged;
            }
        };
        let originals = match congestion.original_congestion_numeric(leg_index) {
            Some(originals) => originals.to_vec(),
            None => {
                log::debug!(
                    "ignoring {} for unknown leg {leg_index} of route {route_id}",
                    action.name()
                );
                return StoreUpdate::Unchanged;
            }
        };
        let existing = congestion.overrides_on_leg(leg_index);

        match self.processor.process(action, &originals, &existing) {
            Some(OverrideCommand::Upsert(created)) => {
                let replaced = congestion.upsert(created.clone());
                log::info!(
                    "{}: override {} created, {} replaced",
                    action.name(),
                    created.describe(),
                    replaced.len()
                );
                StoreUpdate::Upserted { created, replaced }
            }
            Some(OverrideCommand::Remove(restored)) => {
                congestion.remove(&restored);
                log::info!("override {} restored", restored.describe());
                StoreUpdate::Restored(restored)
            }
            None => {
                log::debug!("{} left congestion unchanged", action.name());
                StoreUpdate::Unchanged
            }
        }
    }

    /// congestion numeric in effect for a segment: the override value where
    /// one is active, the route's annotation otherwise.
    pub fn effective_congestion(
        &self,
        route_id: &RouteId,
        leg_index: usize,
        geometry_index: usize,
    ) -> Option<u8> {
        self.read()
            .get(route_id)?
            .effective_at(leg_index, geometry_index)
    }

    /// the whole leg's congestion numeric annotation with overrides applied.
    pub fn effective_congestion_numeric(
        &self,
        route_id: &RouteId,
        leg_index: usize,
    ) -> Option<Vec<Option<u8>>> {
        self.read()
            .get(route_id)?
            .effective_congestion_numeric(leg_index)
    }

    pub fn override_at(
        &self,
        route_id: &RouteId,
        leg_index: usize,
        geometry_index: usize,
    ) -> Option<CongestionNumericOverride> {
        self.read()
            .get(route_id)?
            .override_at(leg_index, geometry_index)
            .cloned()
    }

    pub fn overrides(&self, route_id: &RouteId) -> Vec<CongestionNumericOverride> {
        self.read()
            .get(route_id)
            .map(|r| r.overrides().to_vec())
            .unwrap_or_default()
    }

    // every write is a single map or vector operation, so a poisoned map is
    // still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<RouteId, RouteCongestion>> {
        self.routes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<RouteId, RouteCongestion>> {
        self.routes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<&TrafficOverrideConfig> for CongestionOverrideStore {
    fn from(config: &TrafficOverrideConfig) -> Self {
        CongestionOverrideStore::new(TrafficUpdateProcessor::from(config))
    }
}

#[cfg(test)]
mod tests {
    use super::CongestionOverrideStore;
    use crate::model::action::TrafficUpdateAction;
    use crate::model::store::StoreUpdate;
    use crate::model::test_ops::{mock_decrease, mock_increase, MockRoute};
    use std::sync::Arc;
    use std::thread;
    use tailback_core::model::route::RouteId;

    #[test]
    fn test_increase_then_restore_round_trip() {
        let route = MockRoute::with_congestion(&[20; 10]).build();
        let store = CongestionOverrideStore::default();
        store.register_route(&route);

        let created = match store.apply(&mock_increase(&route, 0, 60)) {
            StoreUpdate::Upserted { created, replaced } => {
                assert!(replaced.is_empty());
                created
            }
            other => panic!("expected Upserted, found {other:?}"),
        };
        assert_eq!(store.effective_congestion(&route.id, 0, 1), Some(60));
        assert_eq!(store.effective_congestion(&route.id, 0, 5), Some(20));

        let restore = TrafficUpdateAction::RestoreTraffic {
            route: route.clone(),
            congestion_override: created.clone(),
        };
        assert_eq!(store.apply(&restore), StoreUpdate::Restored(created));
        assert_eq!(
            store.effective_congestion_numeric(&route.id, 0),
            Some(vec![Some(20); 10])
        );
        assert!(store.overrides(&route.id).is_empty());

        // the override is gone, restoring it again changes nothing
        assert_eq!(store.apply(&restore), StoreUpdate::Unchanged);
    }

    #[test]
    fn test_repeated_increase_is_not_double_counted() {
        let route = MockRoute::with_congestion(&[20; 10]).build();
        let store = CongestionOverrideStore::default();
        store.register_route(&route);
        assert!(store.apply(&mock_increase(&route, 0, 60)).is_changed());
        assert_eq!(store.apply(&mock_increase(&route, 0, 60)), StoreUpdate::Unchanged);
        assert_eq!(store.overrides(&route.id).len(), 1);

        // a stronger increase replaces the previous override
        match store.apply(&mock_increase(&route, 1, 80)) {
            StoreUpdate::Upserted { replaced, .. } => assert_eq!(replaced.len(), 1),
            other => panic!("expected Upserted, found {other:?}"),
        }
        assert_eq!(store.overrides(&route.id).len(), 1);
        assert_eq!(store.effective_congestion(&route.id, 0, 0), Some(20));
        assert_eq!(store.effective_congestion(&route.id, 0, 1), Some(80));
    }

    #[test]
    fn test_no_action_is_idempotent() {
        let route = MockRoute::default().build();
        let store = CongestionOverrideStore::default();
        store.register_route(&route);
        assert!(store.apply(&mock_decrease(&route, 0, 100.0)).is_changed());
        let before = store.effective_congestion_numeric(&route.id, 0);
        for _ in 0..5 {
            assert_eq!(store.apply(&TrafficUpdateAction::NoAction), StoreUpdate::Unchanged);
        }
        assert_eq!(store.effective_congestion_numeric(&route.id, 0), before);
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        let route = MockRoute::default().build();
        let store = CongestionOverrideStore::default();
        assert_eq!(store.apply(&mock_decrease(&route, 0, 100.0)), StoreUpdate::Unchanged);
        assert_eq!(store.effective_congestion(&route.id, 0, 0), None);
    }

    #[test]
    fn test_reset_drops_overrides_and_routes() {
        let route = MockRoute::default().build();
        let other = MockRoute {
            id: "other-route",
            ..Default::default()
        }
        .build();
        let store = CongestionOverrideStore::default();
        store.register_route(&route);
        assert!(store.apply(&mock_decrease(&route, 0, 100.0)).is_changed());

        store.reset(Some(&other));
        assert!(store.overrides(&route.id).is_empty());
        assert_eq!(store.effective_congestion(&route.id, 0, 0), None);
        assert_eq!(store.effective_congestion(&other.id, 0, 0), Some(70));

        assert!(store.remove_route(&RouteId::from("other-route")));
        assert_eq!(store.effective_congestion(&other.id, 0, 0), None);
    }

    #[test]
    fn test_readers_on_other_threads_see_writes() {
        let route = MockRoute::default().build();
        let store = Arc::new(CongestionOverrideStore::default());
        store.register_route(&route);
        assert!(store.apply(&mock_decrease(&route, 0, 100.0)).is_changed());

        let reader = store.clone();
        let route_id = route.id.clone();
        let observed = thread::spawn(move || reader.effective_congestion(&route_id, 0, 0))
            .join()
            .expect("test invariant failed: reader thread panicked");
        assert_eq!(observed, Some(0));
    }
}
