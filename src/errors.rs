// Error types for paceline

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PacelineError {
    // Errors locating platform directories
    #[snafu(display("Could not find application data directory for race history"))]
    NoDataDir,
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,

    // Errors for the race history store
    #[snafu(display("Error reading race history file"))]
    HistoryReadError { source: io::Error },
    #[snafu(display("Error writing race history file"))]
    HistoryWriteError { source: io::Error },
    #[snafu(display("Error serializing race history"))]
    HistorySerializeError { source: serde_json::Error },
    #[snafu(display("A race with id {id} is already in the history"))]
    DuplicateRaceId { id: String },

    // Errors for the history exporter
    #[snafu(display("Error writing history export file"))]
    ExportError { source: io::Error },

    // Config management errors
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
