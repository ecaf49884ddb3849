//! Core data models for the cash-flow projector
//!
//! This module contains the data structures of the projection domain:
//! money amounts, periods, scenario inputs, base figures and the computed
//! projection table.

pub mod base_data;
pub mod money;
pub mod period;
pub mod projection;
pub mod scenario;
pub mod viability;

pub use base_data::BaseData;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PERIOD_COUNT};
pub use projection::{Column, ProjectionRow, ProjectionTable};
pub use scenario::{ScenarioConfig, MAX_OVERRIDE};
pub use viability::{Viability, CRITICAL_THRESHOLD, TIGHT_THRESHOLD};
