//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod project;
pub mod scenario;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use project::{handle_project_command, ProjectArgs};
pub use scenario::ScenarioArgs;
