//! YAML Export functionality
//!
//! Human-readable version of the JSON export document.

use crate::error::{CashflowError, CashflowResult};
use crate::export::json::ProjectionExport;
use crate::models::{ProjectionTable, ScenarioConfig};
use std::io::Write;

/// Export a projection to YAML format
pub fn export_projection_yaml<W: Write>(
    scenario: &ScenarioConfig,
    table: &ProjectionTable,
    writer: &mut W,
) -> CashflowResult<()> {
    let export = ProjectionExport::new(scenario, table);

    writeln!(writer, "# Cash-flow projection export")
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.")
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> CashflowResult<ProjectionExport> {
    let export: ProjectionExport =
        serde_yaml::from_str(yaml_str).map_err(|e| CashflowError::Export(e.to_string()))?;

    export.validate().map_err(CashflowError::Export)?;

    Ok(export)
}
