//! Projection table formatting
//!
//! Renders a projection with one line per figure and one column per period,
//! which keeps sixteen money columns readable in a terminal.

use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{Column, ProjectionTable};

/// Format a projection as a bordered table
pub fn format_projection_table(table: &ProjectionTable, currency_symbol: &str) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(table.rows().iter().map(|row| row.period.to_string()));
    builder.push_record(header);

    for column in Column::ALL {
        let mut record = vec![column.label().to_string()];
        record.extend(
            table
                .rows()
                .iter()
                .map(|row| row.get(column).format_grouped(currency_symbol)),
        );
        builder.push_record(record);
    }

    let mut rendered = builder.build();
    rendered
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    rendered.to_string()
}

/// Format a projection as plain aligned text, one period per line
///
/// Only totals and balances are shown.
pub fn format_compact(table: &ProjectionTable, currency_symbol: &str) -> String {
    let totals: Vec<Column> = Column::ALL.into_iter().filter(|c| c.is_total()).collect();

    let mut output = format!("{:<10}", "Period");
    for column in &totals {
        output.push_str(&format!(" {:>16}", column.label()));
    }
    output.push('\n');
    output.push_str(&"-".repeat(10 + totals.len() * 17));
    output.push('\n');

    for row in table.rows() {
        output.push_str(&format!("{:<10}", row.period.label()));
        for column in &totals {
            output.push_str(&format!(
                " {:>16}",
                row.get(*column).format_grouped(currency_symbol)
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseData, ScenarioConfig};
    use crate::services::compute;

    fn reference_table() -> ProjectionTable {
        compute(&ScenarioConfig::default(), &BaseData::standard()).unwrap()
    }

    #[test]
    fn test_table_contains_every_label_and_period() {
        let output = format_projection_table(&reference_table(), "$");

        for column in Column::ALL {
            assert!(output.contains(column.label()), "missing {}", column.label());
        }
        assert!(output.contains("Month 1"));
        assert!(output.contains("Month 3"));
        assert!(output.contains("$25,500.00"));
        assert!(output.contains("-$26,750.00"));
    }

    #[test]
    fn test_currency_symbol_is_applied() {
        let output = format_projection_table(&reference_table(), "R$ ");
        assert!(output.contains("R$ 40,000.00"));
    }

    #[test]
    fn test_compact_lists_totals_only() {
        let output = format_compact(&reference_table(), "$");
        assert!(output.contains("Closing Balance"));
        assert!(!output.contains("Commissions"));
        assert_eq!(output.lines().count(), 5);
    }
}
