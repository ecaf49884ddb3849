use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use cashflow::cli::{handle_export_command, handle_project_command, ExportArgs, ProjectArgs};
use cashflow::config::{paths::CashflowPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    author = "Kaylee Beyene",
    version,
    about = "Three-month cash-flow projection for small businesses",
    long_about = "Projects opening balance, collections, payments and closing balance \
                  for the next three months, classifies the result as critical, tight \
                  or viable, and exports the table as a spreadsheet."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display the projection
    #[command(alias = "run")]
    Project(ProjectArgs),

    /// Export the projection to CSV, JSON or YAML
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cashflow::logging::init(cli.verbose);

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&settings, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Edit 'default_scenario' there to change what 'cashflow project' uses");
            println!("when no scenario flags are given.");
        }
        Some(Commands::Config) => {
            println!("Cash-Flow Projector Configuration");
            println!("=================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {:?}", settings.currency_symbol);
            println!("  Chart height:    {}", settings.chart_height);
            println!("  Colors:          {}", settings.color);
            println!("  Default scenario:");
            println!("{}", serde_json::to_string_pretty(&settings.default_scenario)?);
        }
        None => handle_project_command(&settings, ProjectArgs::default())?,
    }

    Ok(())
}
