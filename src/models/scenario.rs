//! Scenario configuration
//!
//! The user-controlled toggles and overrides that drive one projection run.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{CashflowError, CashflowResult};

/// Largest accepted override (one trillion currency units)
///
/// Keeps every period total comfortably inside the `i64` cent range.
pub const MAX_OVERRIDE: Money = Money::from_units(1_000_000_000_000);

/// Toggles and first-month overrides for a projection
///
/// Built once from user input and never mutated during a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Start month 1 with the fixed opening balance instead of zero
    #[serde(default = "default_true")]
    pub include_opening_balance: bool,

    /// Buy the fixed-price asset in month 2
    #[serde(default = "default_true")]
    pub buy_asset_month2: bool,

    /// Repay the loan in month 3
    #[serde(default = "default_true")]
    pub pay_loan_month3: bool,

    /// Outstanding receivables collected in month 1
    #[serde(default = "default_receivables")]
    pub receivables_month1: Money,

    /// Outstanding payables settled in month 1
    #[serde(default = "default_payables")]
    pub payables_month1: Money,
}

fn default_true() -> bool {
    true
}

fn default_receivables() -> Money {
    Money::from_units(10_000)
}

fn default_payables() -> Money {
    Money::from_units(8_000)
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            include_opening_balance: true,
            buy_asset_month2: true,
            pay_loan_month3: true,
            receivables_month1: default_receivables(),
            payables_month1: default_payables(),
        }
    }
}

impl ScenarioConfig {
    /// Ensure both overrides are non-negative and at most `MAX_OVERRIDE`
    pub fn validate(&self) -> CashflowResult<()> {
        check_override("receivables_month1", self.receivables_month1)?;
        check_override("payables_month1", self.payables_month1)?;
        Ok(())
    }

    /// Parse a raw override value entered by the user
    ///
    /// Non-numeric, negative and out-of-range text is rejected with `InvalidInput`.
    pub fn parse_override(field: &str, raw: &str) -> CashflowResult<Money> {
        let amount =
            Money::parse(raw).map_err(|e| CashflowError::invalid_input(field, e))?;
        check_override(field, amount)?;
        Ok(amount)
    }
}

fn check_override(field: &str, amount: Money) -> CashflowResult<()> {
    if amount.is_negative() {
        return Err(CashflowError::invalid_input(
            field,
            format!("{} must not be negative", amount),
        ));
    }
    if amount > MAX_OVERRIDE {
        return Err(CashflowError::invalid_input(
            field,
            format!("{} exceeds the maximum of {}", amount, MAX_OVERRIDE),
        ));
    }
    Ok(())
}
