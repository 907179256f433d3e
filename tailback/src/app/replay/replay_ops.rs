use super::{TickRow, TraceRow};
use crate::model::{
    config::TrafficOverrideConfig, handler::TrafficOverrideHandler, TrafficOverrideError,
};
use kdam::{Bar, BarExt};
use std::{io, path::Path, sync::Arc};
use tailback_core::model::route::Route;

/// replays a recorded trace against a route and writes one CSV row per tick.
///
/// # Arguments
/// * `route_file` - JSON route, with congestion and free-flow annotations
/// * `trace_file` - CSV trace of route progress and speed updates
/// * `configuration_file` - optional TOML or JSON traffic override configuration
/// * `output_file` - output CSV file, stdout when omitted
pub fn run_replay(
    route_file: &Path,
    trace_file: &Path,
    configuration_file: Option<&String>,
    output_file: Option<&Path>,
) -> Result<(), TrafficOverrideError> {
    let config = match configuration_file {
        Some(f) => TrafficOverrideConfig::try_from(f)?,
        None => TrafficOverrideConfig::default(),
    };
    let route_str = std::fs::read_to_string(route_file)?;
    let route: Route = serde_json::from_str(&route_str)?;
    let trace = read_trace(csv::Reader::from_path(trace_file)?)?;
    log::info!(
        "replaying {} rows of {} against route {}",
        trace.len(),
        trace_file.to_string_lossy(),
        route.id
    );

    let handler = TrafficOverrideHandler::new(&config);
    let ticks = replay_trace(&handler, Arc::new(route), &trace)?;

    match output_file {
        Some(path) => write_ticks(csv::Writer::from_path(path)?, &ticks),
        None => write_ticks(csv::Writer::from_writer(io::stdout()), &ticks),
    }
}

/// reads every trace row, skipping rows that cannot be decoded.
pub fn read_trace<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<TraceRow>, TrafficOverrideError> {
    let mut rows = vec![];
    for (idx, row) in reader.deserialize::<TraceRow>().enumerate() {
        match row {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("skipping trace row {idx}: {e}"),
        }
    }
    if rows.is_empty() {
        return Err(TrafficOverrideError::TraceError(String::from(
            "trace contains no valid rows",
        )));
    }
    Ok(rows)
}

/// runs one tick per trace row on a handler with `route` as its active route.
pub fn replay_trace(
    handler: &TrafficOverrideHandler,
    route: Arc<Route>,
    trace: &[TraceRow],
) -> Result<Vec<TickRow>, TrafficOverrideError> {
    let route_id = route.id.clone();
    handler.on_route_changed(Some(route));
    let store = handler.store();

    let mut bar = Bar::builder()
        .desc("replaying trace")
        .total(trace.len())
        .build()
        .map_err(|e| TrafficOverrideError::OtherError(e.to_string()))?;
    let mut ticks = Vec::with_capacity(trace.len());
    for row in trace.iter() {
        handler.on_route_progress(row.progress(&route_id));
        let tick = handler.on_location(&row.location());
        let effective_congestion = match (row.leg_index, row.geometry_index) {
            (Some(leg_index), Some(geometry_index)) => {
                store.effective_congestion(&route_id, leg_index, geometry_index)
            }
            _ => None,
        };
        ticks.push(TickRow::new(row, tick.as_ref(), effective_congestion));
        let _ = bar.update(1);
    }
    eprintln!();
    Ok(ticks)
}

pub fn write_ticks<W: io::Write>(
    mut writer: csv::Writer<W>,
    ticks: &[TickRow],
) -> Result<(), TrafficOverrideError> {
    for tick in ticks.iter() {
        writer.serialize(tick)?;
    }
    writer.flush()?;
    Ok(())
}
