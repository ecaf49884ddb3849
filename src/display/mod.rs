//! Display formatting for terminal output
//!
//! Provides utilities for rendering a projection in the terminal: the full
//! table, a line chart and the viability summary.

pub mod chart;
pub mod report;
pub mod table;

pub use chart::{format_line_chart, render_line_chart, ChartSeries};
pub use report::format_summary;
pub use table::{format_compact, format_projection_table};
