//! Text line chart of the projection
//!
//! Plots closing balance, inflows and outflows across the periods on a
//! character grid, interpolating between period points.

use crate::models::{Column, Money, ProjectionTable};

/// Horizontal distance between two period points
const STEP: usize = 18;

/// Width reserved for y-axis labels
const AXIS_WIDTH: usize = 14;

/// One plotted line
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: &'static str,
    pub glyph: char,
    pub values: Vec<Money>,
}

impl ChartSeries {
    /// Build a series from a projection column
    pub fn from_column(table: &ProjectionTable, column: Column, glyph: char) -> Self {
        Self {
            name: column.label(),
            glyph,
            values: table.column(column),
        }
    }
}

/// The default series shown for a projection
pub fn projection_series(table: &ProjectionTable) -> Vec<ChartSeries> {
    vec![
        ChartSeries::from_column(table, Column::ClosingBalance, '●'),
        ChartSeries::from_column(table, Column::TotalInflows, '▲'),
        ChartSeries::from_column(table, Column::TotalOutflows, '▼'),
    ]
}

/// Render the projection as a line chart `height` rows tall
pub fn format_line_chart(table: &ProjectionTable, height: usize, currency_symbol: &str) -> String {
    let labels: Vec<&str> = table.rows().iter().map(|row| row.period.label()).collect();
    render_line_chart(&projection_series(table), &labels, height, currency_symbol)
}

/// Render arbitrary series sharing the same x labels
pub fn render_line_chart(
    series: &[ChartSeries],
    x_labels: &[&str],
    height: usize,
    currency_symbol: &str,
) -> String {
    let points = x_labels.len();
    if points == 0 || series.iter().all(|s| s.values.is_empty()) {
        return "No data to chart.".to_string();
    }

    let height = height.max(3);
    let width = (points - 1) * STEP + 1;

    // Scale always spans zero
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for value in series.iter().flat_map(|s| s.values.iter()) {
        min = min.min(value.to_f64());
        max = max.max(value.to_f64());
    }
    if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }

    let to_row = |value: f64| -> usize {
        let ratio = (max - value) / (max - min);
        ((ratio * (height - 1) as f64).round() as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; width]; height];

    if min < 0.0 {
        let zero_row = to_row(0.0);
        for cell in grid[zero_row].iter_mut() {
            *cell = '─';
        }
    }

    // Markers are drawn last and overwrite dots
    for s in series {
        for x in 0..width {
            if x % STEP == 0 {
                continue;
            }
            if let Some(value) = interpolate(&s.values, x) {
                grid[to_row(value)][x] = '·';
            }
        }
    }
    for s in series {
        for (i, value) in s.values.iter().take(points).enumerate() {
            grid[to_row(value.to_f64())][i * STEP] = s.glyph;
        }
    }

    let mut output = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        let label = if row_index == 0 {
            axis_label(max, currency_symbol)
        } else if row_index == height - 1 {
            axis_label(min, currency_symbol)
        } else {
            String::new()
        };
        output.push_str(&format!("{:>width$} │", label, width = AXIS_WIDTH));
        output.push_str(row.iter().collect::<String>().trim_end());
        output.push('\n');
    }

    output.push_str(&format!("{:>width$} └", "", width = AXIS_WIDTH));
    output.push_str(&"─".repeat(width));
    output.push('\n');

    let mut axis = " ".repeat(AXIS_WIDTH + 2);
    for (i, label) in x_labels.iter().enumerate() {
        let target = AXIS_WIDTH + 2 + i * STEP;
        let current = axis.chars().count();
        if target > current {
            axis.push_str(&" ".repeat(target - current));
        }
        axis.push_str(label);
    }
    output.push_str(axis.trim_end());
    output.push('\n');
    output.push('\n');

    let legend: Vec<String> = series
        .iter()
        .map(|s| format!("{} {}", s.glyph, s.name))
        .collect();
    output.push_str(&legend.join("   "));
    output.push('\n');

    output
}

/// Linearly interpolated value at grid column `x`
fn interpolate(values: &[Money], x: usize) -> Option<f64> {
    let i = x / STEP;
    let start = values.get(i)?.to_f64();
    let end = match values.get(i + 1) {
        Some(v) => v.to_f64(),
        None => return Some(start),
    };
    let frac = (x % STEP) as f64 / STEP as f64;
    Some(start + (end - start) * frac)
}

fn axis_label(value: f64, currency_symbol: &str) -> String {
    Money::try_from_f64(value)
        .map(|m| Money::from_units(m.units()).format_grouped(currency_symbol))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseData, ScenarioConfig};
    use crate::services::compute;

    #[test]
    fn test_chart_has_markers_axis_and_legend() {
        let table = compute(&ScenarioConfig::default(), &BaseData::standard()).unwrap();
        let chart = format_line_chart(&table, 12, "$");

        // One marker per period for each series
        assert_eq!(chart.matches('●').count(), 3 + 1);
        assert!(chart.contains("Month 1"));
        assert!(chart.contains("Month 3"));
        assert!(chart.contains("● Closing Balance"));
        assert!(chart.contains("▲ Total Inflows"));
        assert!(chart.contains("$87,000.00"));
        assert!(chart.contains("-$26,750.00"));
    }

    #[test]
    fn test_zero_line_when_negative() {
        let table = compute(&ScenarioConfig::default(), &BaseData::standard()).unwrap();
        let chart = format_line_chart(&table, 10, "$");
        assert!(chart.lines().any(|line| line.contains("──────")
            && !line.trim_start().starts_with('└')));
    }

    #[test]
    fn test_empty_series() {
        let chart = render_line_chart(&[], &[], 10, "$");
        assert_eq!(chart, "No data to chart.");
    }

    #[test]
    fn test_flat_series_does_not_divide_by_zero() {
        let series = vec![ChartSeries {
            name: "Flat",
            glyph: '*',
            values: vec![Money::zero(); 3],
        }];
        let chart = render_line_chart(&series, &["A", "B", "C"], 5, "$");
        assert_eq!(chart.matches('*').count(), 3 + 1);
    }
}
