// Library exports for the predcheck CI reporter
pub mod cli;
pub mod config;
pub mod loader;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use config::ReporterConfig;
pub use loader::{load_predictions, LoadOutcome};
pub use types::{PredictionTable, RiskSummary, SchemaColumn};
