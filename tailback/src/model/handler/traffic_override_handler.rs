use super::{TrafficOverrideTick, TrafficRefreshObserver};
use crate::model::{
    action::{scanner::TrafficUpdateActionScannerChain, TrafficUpdateAction},
    analysis::SpeedAnalyzer,
    config::TrafficOverrideConfig,
    sample::extract_speed_sample,
    store::CongestionOverrideStore,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tailback_core::model::{progress::RouteProgress, route::Route, MapMatchedLocation};

#[derive(Default)]
struct HandlerState {
    route: Option<Arc<Route>>,
    progress: Option<RouteProgress>,
    action: TrafficUpdateAction,
}

/// drives the traffic override pipeline for one navigation session.
///
/// every location update runs one tick: extract a sample, analyze it, reduce
/// the result into the next action and apply that action to the store. ticks
/// and route changes are serialized, so a route change happens-before every
/// tick of the new route.
pub struct TrafficOverrideHandler {
    analyzer: SpeedAnalyzer,
    scanners: TrafficUpdateActionScannerChain,
    store: Arc<CongestionOverrideStore>,
    observers: RwLock<Vec<Box<dyn TrafficRefreshObserver>>>,
    state: Mutex<HandlerState>,
}

impl TrafficOverrideHandler {
    pub fn new(config: &TrafficOverrideConfig) -> TrafficOverrideHandler {
        TrafficOverrideHandler {
            analyzer: SpeedAnalyzer::from(config),
            scanners: TrafficUpdateActionScannerChain::from(config),
            store: Arc::new(CongestionOverrideStore::from(config)),
            observers: RwLock::new(vec![]),
            state: Mutex::new(HandlerState::default()),
        }
    }

    /// the store holding the effective congestion, shared with readers.
    pub fn store(&self) -> Arc<CongestionOverrideStore> {
        self.store.clone()
    }

    pub fn register_observer<O>(&self, observer: O)
    where
        O: TrafficRefreshObserver + 'static,
    {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(observer));
    }

    /// switches the active route. a different route, or no route at all,
    /// discards the accumulator, the latest progress and every override.
    /// the same route again changes nothing.
    pub fn on_route_changed(&self, route: Option<Arc<Route>>) {
        let mut state = self.lock_state();
        let current_id = state.route.as_ref().map(|r| &r.id);
        if current_id.is_some() && current_id == route.as_ref().map(|r| &r.id) {
            log::debug!("route {} is already active", route_label(&route));
            return;
        }
        log::info!(
            "active route changed from {} to {}",
            route_label(&state.route),
            route_label(&route)
        );
        self.store.reset(route.as_deref());
        state.route = route;
        state.progress = None;
        state.action = TrafficUpdateAction::NoAction;
    }

    pub fn on_route_progress(&self, progress: RouteProgress) {
        self.lock_state().progress = Some(progress);
    }

    /// runs one tick. returns `None` when there is no active route, no
    /// progress yet, or the progress belongs to another route.
    pub fn on_location(&self, location: &MapMatchedLocation) -> Option<TrafficOverrideTick> {
        let tick = {
            let mut state = self.lock_state();
            let route = state.route.clone()?;
            let progress = state.progress.as_ref()?;
            let sample = extract_speed_sample(&route, progress, location, &self.store)?;
            let analysis = self.analyzer.analyze(&sample);
            let action = self.scanners.scan(&state.action, &analysis);
            let update = self.store.apply(&action);
            log::debug!(
                "tick at {}ms: {} -> {} -> {}",
                location.elapsed_millis,
                analysis.name(),
                action.name(),
                update.name()
            );
            state.action = action.clone();
            TrafficOverrideTick {
                analysis,
                action,
                update,
            }
        };

        if tick.update.is_changed() {
            if let Some(route) = tick.action.route() {
                let observers = self.observers.read().unwrap_or_else(PoisonError::into_inner);
                for observer in observers.iter() {
                    observer.on_traffic_refreshed(&route.id, &tick.update);
                }
            }
        }
        Some(tick)
    }

    /// the accumulator carried into the next tick.
    pub fn current_action(&self) -> TrafficUpdateAction {
        self.lock_state().action.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, HandlerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TrafficOverrideHandler {
    fn default() -> Self {
        TrafficOverrideHandler::new(&TrafficOverrideConfig::default())
    }
}

fn route_label(route: &Option<Arc<Route>>) -> String {
    route
        .as_ref()
        .map(|r| r.id.to_string())
        .unwrap_or_else(|| String::from("none"))
}

#[cfg(test)]
mod tests {
    use super::TrafficOverrideHandler;
    use crate::model::action::TrafficUpdateAction;
    use crate::model::analysis::SpeedAnalysisResult;
    use crate::model::store::StoreUpdate;
    use crate::model::test_ops::{mock_location, tracking_progress, MockRoute};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tailback_core::model::progress::{RouteProgress, RouteProgressState};
    use tailback_core::model::route::{Route, RouteId};

    fn mock_handler(route: &MockRoute) -> (TrafficOverrideHandler, Arc<Route>) {
        let route = route.build();
        let handler = TrafficOverrideHandler::default();
        handler.on_route_changed(Some(route.clone()));
        handler.on_route_progress(tracking_progress(&route, 0));
        (handler, route)
    }

    #[test]
    fn test_sustained_low_speed_raises_congestion() {
        let (handler, route) = mock_handler(&MockRoute::with_congestion(&[20; 10]));
        for elapsed in [0, 5_000, 10_000, 15_000] {
            let tick = handler
                .on_location(&mock_location(40.0, elapsed))
                .expect("test invariant failed: tick should run");
            assert!(matches!(
                tick.action,
                TrafficUpdateAction::AccumulatingLowSpeed { .. }
            ));
            assert_eq!(tick.update, StoreUpdate::Unchanged);
        }
        let tick = handler
            .on_location(&mock_location(40.0, 20_000))
            .expect("test invariant failed: tick should run");
        assert!(matches!(
            tick.action,
            TrafficUpdateAction::IncreaseTraffic { .. }
        ));
        assert!(tick.update.is_changed());

        let store = handler.store();
        assert_eq!(store.effective_congestion(&route.id, 0, 0), Some(60));
        assert_eq!(store.effective_congestion(&route.id, 0, 2), Some(60));
        assert_eq!(store.effective_congestion(&route.id, 0, 3), Some(20));
    }

    #[test]
    fn test_false_positive_override_round_trip() {
        let (handler, route) = mock_handler(&MockRoute::with_congestion(&[20; 10]));
        for elapsed in [0, 5_000, 10_000, 15_000, 20_000] {
            handler.on_location(&mock_location(40.0, elapsed));
        }
        assert_eq!(
            handler.store().effective_congestion(&route.id, 0, 1),
            Some(60)
        );

        handler.on_route_progress(tracking_progress(&route, 1));
        let tick = handler
            .on_location(&mock_location(95.0, 25_000))
            .expect("test invariant failed: tick should run");
        assert!(matches!(
            tick.analysis,
            SpeedAnalysisResult::WrongFalsePositiveOverrideDetected { .. }
        ));
        assert!(matches!(tick.update, StoreUpdate::Restored(_)));
        assert_eq!(
            handler.store().effective_congestion_numeric(&route.id, 0),
            Some(vec![Some(20); 10])
        );
    }

    #[test]
    fn test_observers_are_notified_of_changes_only() {
        let (handler, route) = mock_handler(&MockRoute::default());
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        let expected_id = route.id.clone();
        handler.register_observer(move |route_id: &RouteId, update: &StoreUpdate| {
            assert_eq!(route_id, &expected_id);
            assert!(update.is_changed());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // high speed lowers the heavy congestion ahead once
        handler.on_location(&mock_location(100.0, 0));
        handler.on_location(&mock_location(100.0, 1_000));
        assert_eq!(notified.load(Ordering::SeqCst), 1);
        assert_eq!(
            handler.store().effective_congestion(&route.id, 0, 0),
            Some(0)
        );
    }

    #[test]
    fn test_route_change_resets_accumulator_and_store() {
        let (handler, route) = mock_handler(&MockRoute::default());
        handler.on_location(&mock_location(100.0, 0));
        handler.on_location(&mock_location(40.0, 1_000));
        assert!(matches!(
            handler.current_action(),
            TrafficUpdateAction::AccumulatingLowSpeed { .. }
        ));

        // the same route again keeps everything
        handler.on_route_changed(Some(route.clone()));
        assert!(matches!(
            handler.current_action(),
            TrafficUpdateAction::AccumulatingLowSpeed { .. }
        ));
        assert!(!handler.store().overrides(&route.id).is_empty());

        let next = MockRoute {
            id: "next-route",
            ..Default::default()
        }
        .build();
        handler.on_route_changed(Some(next.clone()));
        assert_eq!(handler.current_action(), TrafficUpdateAction::NoAction);
        assert!(handler.store().overrides(&route.id).is_empty());
        // progress of the previous route is discarded with it
        assert!(handler.on_location(&mock_location(40.0, 2_000)).is_none());

        handler.on_route_changed(None);
        assert_eq!(handler.store().effective_congestion(&next.id, 0, 0), None);
    }

    #[test]
    fn test_stale_progress_produces_no_tick() {
        let (handler, _route) = mock_handler(&MockRoute::default());
        handler.on_route_progress(RouteProgress::new(
            RouteId::from("previous-route"),
            RouteProgressState::Tracking,
            None,
        ));
        assert!(handler.on_location(&mock_location(40.0, 0)).is_none());
    }

    #[test]
    fn test_off_route_discards_accumulation() {
        let (handler, route) = mock_handler(&MockRoute::default());
        handler.on_location(&mock_location(40.0, 0));
        let mut off_route = tracking_progress(&route, 0);
        off_route.state = RouteProgressState::OffRoute;
        handler.on_route_progress(off_route);
        let tick = handler
            .on_location(&mock_location(40.0, 5_000))
            .expect("test invariant failed: tick should run");
        assert!(matches!(
            tick.analysis,
            SpeedAnalysisResult::SkippedAnalysis { .. }
        ));
        assert_eq!(tick.action, TrafficUpdateAction::NoAction);
    }

    #[test]
    fn test_no_tick_without_route() {
        let handler = TrafficOverrideHandler::default();
        assert!(handler.on_location(&mock_location(40.0, 0)).is_none());
    }
}
