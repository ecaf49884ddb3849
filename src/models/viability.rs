//! Viability classification of a projection's final balance

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Final balances below this are critical
pub const CRITICAL_THRESHOLD: Money = Money::from_units(2_000);

/// Final balances up to and including this are tight
pub const TIGHT_THRESHOLD: Money = Money::from_units(10_000);

/// Three-tier label for the cash position at the end of the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viability {
    /// Risk of running out of cash
    Critical,
    /// Positive but thin margin
    Tight,
    /// Comfortable balance
    Viable,
}

impl Viability {
    /// Classify a closing balance
    ///
    /// Both thresholds belong to the `Tight` band.
    pub fn classify(final_balance: Money) -> Self {
        if final_balance < CRITICAL_THRESHOLD {
            Self::Critical
        } else if final_balance <= TIGHT_THRESHOLD {
            Self::Tight
        } else {
            Self::Viable
        }
    }

    /// Short lowercase label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Tight => "tight",
            Self::Viable => "viable",
        }
    }

    /// Advice shown next to the projection
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Critical => "Risk of a negative balance: review the plan before committing.",
            Self::Tight => "Balance stays positive but the margin is thin.",
            Self::Viable => "The plan is viable with a comfortable cash cushion.",
        }
    }
}

impl fmt::Display for Viability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
