// Persisted race history: the committed race record and its store

pub(crate) mod store;
pub(crate) mod types;

pub use store::{HistoryPersistence, JsonFileHistory, RaceStore};
pub use types::Race;
