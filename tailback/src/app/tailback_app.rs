use crate::model::TrafficOverrideError;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// command line tool for replaying recorded drives through the traffic
/// override pipeline
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TailbackApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: TailbackOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TailbackOperation {
    /// replays a recorded trace of route progress and speed updates against a
    /// route, writing one row per tick with the analysis, the action and the
    /// effective congestion of the traveled segment.
    Replay {
        /// JSON file containing the route
        #[arg(short, long)]
        route_file: String,
        /// CSV file with columns elapsed_millis, state, leg_index,
        /// geometry_index, step_index, intersection_index, speed_kph
        #[arg(short, long)]
        trace_file: String,
        /// TOML or JSON traffic override configuration. defaults are used when omitted.
        #[arg(short, long)]
        configuration_file: Option<String>,
        /// output CSV file. rows are written to stdout when omitted.
        #[arg(short, long)]
        output_file: Option<String>,
    },
}

impl TailbackOperation {
    pub fn run(&self) -> Result<(), TrafficOverrideError> {
        match self {
            TailbackOperation::Replay {
                route_file,
                trace_file,
                configuration_file,
                output_file,
            } => crate::app::replay::run_replay(
                Path::new(route_file),
                Path::new(trace_file),
                configuration_file.as_ref(),
                output_file.as_ref().map(Path::new),
            ),
        }
    }
}
