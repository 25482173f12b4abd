// SLA Report - Purchase order fulfillment reporting pipeline
// Exposes all modules for use in the CLI and tests

pub mod config;
pub mod dates;
pub mod export;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod filter;
pub mod ingest;
pub mod logging;
pub mod metrics;
pub mod records;
pub mod sort;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use config::EndpointConfig;
pub use dates::{parse_date, parse_date_opt};
pub use export::to_delimited_text;
pub use filter::FilterSpec;
pub use ingest::parse_payload;
pub use metrics::{coerce_numeric, enrich, enrich_all};
pub use records::{EnrichedRecord, Record};
pub use sort::{SortColumn, SortDirection, SortSpec};
pub use stats::{summarize, Summary};
pub use store::RecordStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
