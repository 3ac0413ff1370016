// src/analysis/mod.rs
pub mod config;
pub mod error;
pub mod reconcile;
pub mod resistance;
pub mod series;
pub mod source;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use reconcile::{reconcile, ReconciliationReport};
pub use resistance::bridge_reference_resistance;
pub use series::{MeasurementSeries, ResistanceSeries};
pub use source::{BoltzmannData, ColumnSummary, Delimiter, LeslieData};
