//! JSON Export functionality
//!
//! Exports a projection together with the scenario that produced it.

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, ProjectionRow, ProjectionTable, ScenarioConfig, Viability, PERIOD_COUNT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Projection export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Inputs used for the projection
    pub scenario: ScenarioConfig,

    /// One row per period
    pub rows: Vec<ProjectionRow>,

    /// Closing balance of the last period
    pub final_balance: Money,

    /// Classification of the final balance
    pub viability: Viability,
}

impl ProjectionExport {
    /// Build an export document from a computed projection
    pub fn new(scenario: &ScenarioConfig, table: &ProjectionTable) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            scenario: *scenario,
            rows: table.rows().to_vec(),
            final_balance: table.final_balance(),
            viability: table.viability(),
        }
    }

    /// Check that a document read back from disk is internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Unsupported schema version {} (expected {})",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }

        self.scenario.validate().map_err(|e| e.to_string())?;

        if self.rows.len() != PERIOD_COUNT {
            return Err(format!(
                "Expected {} rows, found {}",
                PERIOD_COUNT,
                self.rows.len()
            ));
        }

        for row in &self.rows {
            if row.closing_balance != row.opening_balance + row.total_inflows - row.total_outflows {
                return Err(format!("{} does not balance", row.period));
            }
        }

        for pair in self.rows.windows(2) {
            if pair[1].opening_balance != pair[0].closing_balance {
                return Err(format!(
                    "{} opening balance does not match {} closing balance",
                    pair[1].period, pair[0].period
                ));
            }
        }

        let last = self.rows[PERIOD_COUNT - 1].closing_balance;
        if self.final_balance != last || self.viability != Viability::classify(last) {
            return Err("Summary does not match the final period".to_string());
        }

        Ok(())
    }
}

/// Export a projection to JSON format
pub fn export_projection_json<W: Write>(
    scenario: &ScenarioConfig,
    table: &ProjectionTable,
    writer: &mut W,
    pretty: bool,
) -> CashflowResult<()> {
    let export = ProjectionExport::new(scenario, table);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> CashflowResult<ProjectionExport> {
    let export: ProjectionExport = serde_json::from_str(json_str)?;
    export.validate().map_err(CashflowError::Export)?;
    Ok(export)
}
