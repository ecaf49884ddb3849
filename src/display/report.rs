//! Report formatting utilities for terminal output
//!
//! Provides the projection summary: viability banner, per-period net flow
//! bars and small layout helpers.

use crate::models::{Money, ProjectionTable, Viability};

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, currency_symbol: &str) -> String {
    let text = amount.format_grouped(currency_symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Color a viability label: red, yellow or green
pub fn format_viability_colored(viability: Viability) -> String {
    let code = match viability {
        Viability::Critical => 31,
        Viability::Tight => 33,
        Viability::Viable => 32,
    };
    format!("\x1b[{}m{}\x1b[0m", code, viability.label().to_uppercase())
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the closing summary of a projection
pub fn format_summary(table: &ProjectionTable, currency_symbol: &str, color: bool) -> String {
    let mut output = String::new();
    let viability = table.viability();

    let balance = if color {
        format_money_colored(table.final_balance(), currency_symbol)
    } else {
        table.final_balance().format_grouped(currency_symbol)
    };
    let label = if color {
        format_viability_colored(viability)
    } else {
        viability.label().to_uppercase()
    };

    output.push_str(&format!("Final balance:  {}\n", balance));
    output.push_str(&format!(
        "Lowest balance: {}\n",
        table.lowest_balance().format_grouped(currency_symbol)
    ));
    output.push_str(&format!("Status:         [{}] {}\n", label, viability.message()));

    output.push('\n');
    output.push_str("Net cash flow by month\n");
    output.push_str(&separator(48));
    output.push('\n');

    let max_abs = table
        .rows()
        .iter()
        .map(|row| row.net_flow().abs().to_f64())
        .fold(0.0_f64, f64::max);

    for row in table.rows() {
        let net = row.net_flow();
        let marker = if net.is_negative() { '-' } else { '+' };
        output.push_str(&format!(
            "{:<8} {} {} {:>14}\n",
            row.period.label(),
            marker,
            format_bar(net.abs().to_f64(), max_abs, 20),
            net.format_grouped(currency_symbol)
        ));
    }

    output
}
