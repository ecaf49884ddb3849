//! CSV Export functionality
//!
//! Writes a projection as a spreadsheet: one row per period, one column per
//! figure, money with two decimal places.

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Column, ProjectionTable};
use std::io::Write;

/// Header of the leading period column
pub const PERIOD_HEADER: &str = "Period";

/// Header of the trailing viability column
pub const VIABILITY_HEADER: &str = "Viability";

/// Export a projection to CSV
///
/// The viability column is filled on the final period only.
pub fn export_projection_csv<W: Write>(table: &ProjectionTable, writer: W) -> CashflowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![PERIOD_HEADER];
    header.extend(Column::ALL.iter().map(|c| c.label()));
    header.push(VIABILITY_HEADER);
    csv_writer.write_record(&header).map_err(export_error)?;

    let last = table.rows().len().saturating_sub(1);
    for (i, row) in table.rows().iter().enumerate() {
        let mut record = vec![row.period.label().to_string()];
        record.extend(
            Column::ALL
                .iter()
                .map(|column| row.get(*column).to_decimal_string()),
        );
        record.push(if i == last {
            table.viability().label().to_string()
        } else {
            String::new()
        });
        csv_writer.write_record(&record).map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    Ok(())
}

fn export_error(err: csv::Error) -> CashflowError {
    CashflowError::Export(err.to_string())
}
