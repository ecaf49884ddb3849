//! CLI command for exporting a projection
//!
//! Writes the projection as a spreadsheet (CSV) or as a JSON/YAML document.

use crate::error::{CashflowError, CashflowResult};
use crate::export::{export_projection_csv, export_projection_json, export_projection_yaml};
use crate::models::{BaseData, ProjectionTable, ScenarioConfig};
use crate::services::compute;
use crate::config::Settings;
use clap::{Args, ValueEnum};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::scenario::ScenarioArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV spreadsheet, one row per month
    Csv,
    /// JSON document with scenario and metadata
    Json,
    /// YAML document, human-readable
    Yaml,
}

impl ExportFormat {
    /// Infer a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path ("-" for stdout)
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then CSV)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> CashflowResult<()> {
    let scenario = args.scenario.resolve(settings.default_scenario)?;
    let table = compute(&scenario, &BaseData::standard())?;

    let format = args
        .format
        .or_else(|| ExportFormat::from_path(&args.output))
        .unwrap_or(ExportFormat::Csv);

    if args.output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_export(&scenario, &table, format, args.pretty, &mut writer)?;
        return Ok(());
    }

    write_to_path(&args.output, |writer| {
        write_export(&scenario, &table, format, args.pretty, writer)
    })?;

    info!(path = %args.output.display(), ?format, "projection exported");
    println!(
        "Projection exported to: {} ({:?}, final balance {}, {})",
        args.output.display(),
        format,
        table.final_balance().format_grouped(&settings.currency_symbol),
        table.viability()
    );

    Ok(())
}

/// Create `path` and fill it through `write`
///
/// A file left incomplete by a failed write is removed.
fn write_to_path<F>(path: &Path, write: F) -> CashflowResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CashflowResult<()>,
{
    let file = File::create(path).map_err(|e| {
        CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| CashflowError::Export(e.to_string()))
    });
    drop(writer);

    if let Err(err) = written {
        warn!(path = %path.display(), error = %err, "export failed, removing partial file");
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "could not remove partial file");
        }
        return Err(err);
    }
    Ok(())
}

/// Write a projection in the requested format
pub fn write_export<W: Write>(
    scenario: &ScenarioConfig,
    table: &ProjectionTable,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> CashflowResult<()> {
    match format {
        ExportFormat::Csv => export_projection_csv(table, writer),
        ExportFormat::Json => export_projection_json(scenario, table, writer, pretty),
        ExportFormat::Yaml => export_projection_yaml(scenario, table, writer),
    }
}
