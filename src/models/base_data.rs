//! Fixed monthly base figures
//!
//! Sales and cost series feeding the projection. Each series must hold exactly
//! one value per projection period.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::{Period, PERIOD_COUNT};
use crate::error::{CashflowError, CashflowResult};

/// Per-period sales and cost series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseData {
    /// Gross sales per month
    pub sales: Vec<Money>,
    /// Inventory purchases per month
    pub purchases: Vec<Money>,
    /// Direct labor cost per month
    pub direct_labor: Vec<Money>,
    /// Manufacturing overhead per month
    pub overhead: Vec<Money>,
    /// Administrative expenses per month
    pub admin_expense: Vec<Money>,
}

impl BaseData {
    /// The built-in figures used by every projection
    pub fn standard() -> Self {
        Self {
            sales: units(&[50_000, 55_000, 60_000]),
            purchases: units(&[20_000, 25_000, 30_000]),
            direct_labor: units(&[10_000, 12_000, 13_000]),
            overhead: units(&[5_000, 5_000, 5_000]),
            admin_expense: units(&[4_000, 4_000, 4_000]),
        }
    }

    /// Named view of every series, in declaration order
    pub fn series(&self) -> [(&'static str, &[Money]); 5] {
        [
            ("sales", self.sales.as_slice()),
            ("purchases", self.purchases.as_slice()),
            ("direct_labor", self.direct_labor.as_slice()),
            ("overhead", self.overhead.as_slice()),
            ("admin_expense", self.admin_expense.as_slice()),
        ]
    }

    /// Check that every series covers exactly the projection periods
    pub fn validate(&self) -> CashflowResult<()> {
        for (name, values) in self.series() {
            if values.len() != PERIOD_COUNT {
                return Err(CashflowError::MalformedBaseData {
                    series: name,
                    expected: PERIOD_COUNT,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Sales for a period; zero if the series is short
    pub fn sales_in(&self, period: Period) -> Money {
        value_at(&self.sales, period)
    }

    /// Purchases for a period; zero if the series is short
    pub fn purchases_in(&self, period: Period) -> Money {
        value_at(&self.purchases, period)
    }

    /// Direct labor for a period; zero if the series is short
    pub fn direct_labor_in(&self, period: Period) -> Money {
        value_at(&self.direct_labor, period)
    }

    /// Overhead for a period; zero if the series is short
    pub fn overhead_in(&self, period: Period) -> Money {
        value_at(&self.overhead, period)
    }

    /// Administrative expense for a period; zero if the series is short
    pub fn admin_expense_in(&self, period: Period) -> Money {
        value_at(&self.admin_expense, period)
    }
}

impl Default for BaseData {
    fn default() -> Self {
        Self::standard()
    }
}

fn units(values: &[i64]) -> Vec<Money> {
    values.iter().copied().map(Money::from_units).collect()
}

fn value_at(series: &[Money], period: Period) -> Money {
    series.get(period.index()).copied().unwrap_or_default()
}
