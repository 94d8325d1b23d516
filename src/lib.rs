// Library interface for paceline
// This allows integration tests to access internal modules

pub mod errors;
pub mod export;
pub mod history;
pub mod timing;
pub mod ui;

// Re-export commonly used types
pub use errors::PacelineError;
pub use history::{HistoryPersistence, JsonFileHistory, Race, RaceStore};
pub use timing::{Clock, Stopwatch, SystemClock, format_elapsed};
