//! Cash-flow projector - three-month cash-flow projection for small businesses
//!
//! This library computes a month-by-month cash projection from a handful of
//! scenario toggles and first-month overrides, classifies the final balance,
//! and renders or exports the resulting table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, scenario, projection table)
//! - `services`: The projection computation
//! - `display`: Terminal table, line chart and summary
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command-line handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use cashflow::models::{BaseData, Money, ScenarioConfig, Viability};
//! use cashflow::services::compute;
//!
//! let scenario = ScenarioConfig {
//!     pay_loan_month3: false,
//!     ..ScenarioConfig::default()
//! };
//! let table = compute(&scenario, &BaseData::standard())?;
//! assert_eq!(table.final_balance(), Money::from_units(2_250));
//! assert_eq!(table.viability(), Viability::Tight);
//! # Ok::<(), cashflow::CashflowError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{CashflowError, CashflowResult};
