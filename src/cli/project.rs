//! CLI command for running a projection
//!
//! Computes the projection and prints the table, chart and summary.

use clap::Args;
use tracing::info;

use super::scenario::ScenarioArgs;
use crate::config::Settings;
use crate::display::report::{format_header, separator};
use crate::display::{format_compact, format_line_chart, format_projection_table, format_summary};
use crate::error::CashflowResult;
use crate::models::{BaseData, ProjectionTable, ScenarioConfig};
use crate::services::compute;

/// Arguments for `project`
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Also draw a line chart of balances and flows
    #[arg(short, long)]
    pub chart: bool,

    /// Show totals only
    #[arg(long)]
    pub compact: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

/// Handle the project command
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> CashflowResult<()> {
    let scenario = args.scenario.resolve(settings.default_scenario)?;
    let table = compute(&scenario, &BaseData::standard())?;
    info!(viability = %table.viability(), "projection ready");

    let color = settings.color && !args.no_color;
    print!(
        "{}",
        render_projection(&scenario, &table, settings, args.chart, args.compact, color)
    );
    Ok(())
}

/// Build the full terminal output for a projection
pub fn render_projection(
    scenario: &ScenarioConfig,
    table: &ProjectionTable,
    settings: &Settings,
    chart: bool,
    compact: bool,
    color: bool,
) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format_header("Cash-Flow Projection", 60));
    output.push('\n');
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format_scenario(scenario, symbol));
    output.push('\n');

    if compact {
        output.push_str(&format_compact(table, symbol));
    } else {
        output.push_str(&format_projection_table(table, symbol));
        output.push('\n');
    }
    output.push('\n');

    if chart {
        output.push_str(&format_line_chart(table, settings.chart_height, symbol));
        output.push('\n');
    }

    output.push_str(&format_summary(table, symbol, color));
    output
}

fn format_scenario(scenario: &ScenarioConfig, symbol: &str) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    format!(
        "Opening balance included: {}\n\
         Asset bought in month 2:  {}\n\
         Loan repaid in month 3:   {}\n\
         Receivables (month 1):    {}\n\
         Payables (month 1):       {}\n",
        yes_no(scenario.include_opening_balance),
        yes_no(scenario.buy_asset_month2),
        yes_no(scenario.pay_loan_month3),
        scenario.receivables_month1.format_grouped(symbol),
        scenario.payables_month1.format_grouped(symbol),
    )
}
