//! Export module for the cash-flow projector
//!
//! Provides projection export in multiple formats:
//! - CSV: spreadsheet-compatible table, one row per period
//! - JSON: machine-readable document with the scenario and metadata
//! - YAML: human-readable version of the JSON document

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_projection_csv;
pub use json::{export_projection_json, import_from_json, ProjectionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_projection_yaml, import_from_yaml};
