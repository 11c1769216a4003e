pub mod history;
pub use history::{HistoryError, HistoryPage, HistoryService};

pub mod ingest;
pub use ingest::{IngestError, IngestService};
