//! Projection output: one row per period plus the final viability

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;
use super::viability::Viability;

/// Every computed figure for a single period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub period: Period,
    pub opening_balance: Money,

    // Inflows
    pub collection_current: Money,
    pub collection_prior: Money,
    pub receivables_override: Money,
    pub total_inflows: Money,

    // Outflows
    pub cash_purchases: Money,
    pub prior_purchases: Money,
    pub direct_labor: Money,
    pub overhead: Money,
    pub admin_expense: Money,
    pub commission: Money,
    pub tax: Money,
    pub asset_purchase: Money,
    pub loan_repayment: Money,
    pub total_outflows: Money,

    pub closing_balance: Money,
}

impl ProjectionRow {
    /// Inflows minus outflows for the period
    pub fn net_flow(&self) -> Money {
        self.total_inflows - self.total_outflows
    }

    /// Value of a single column
    pub fn get(&self, column: Column) -> Money {
        match column {
            Column::OpeningBalance => self.opening_balance,
            Column::CollectionCurrent => self.collection_current,
            Column::CollectionPrior => self.collection_prior,
            Column::ReceivablesOverride => self.receivables_override,
            Column::TotalInflows => self.total_inflows,
            Column::CashPurchases => self.cash_purchases,
            Column::PriorPurchases => self.prior_purchases,
            Column::DirectLabor => self.direct_labor,
            Column::Overhead => self.overhead,
            Column::AdminExpense => self.admin_expense,
            Column::Commission => self.commission,
            Column::Tax => self.tax,
            Column::AssetPurchase => self.asset_purchase,
            Column::LoanRepayment => self.loan_repayment,
            Column::TotalOutflows => self.total_outflows,
            Column::ClosingBalance => self.closing_balance,
        }
    }
}

/// Money columns of a projection, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    OpeningBalance,
    CollectionCurrent,
    CollectionPrior,
    ReceivablesOverride,
    TotalInflows,
    CashPurchases,
    PriorPurchases,
    DirectLabor,
    Overhead,
    AdminExpense,
    Commission,
    Tax,
    AssetPurchase,
    LoanRepayment,
    TotalOutflows,
    ClosingBalance,
}

impl Column {
    pub const ALL: [Column; 16] = [
        Column::OpeningBalance,
        Column::CollectionCurrent,
        Column::CollectionPrior,
        Column::ReceivablesOverride,
        Column::TotalInflows,
        Column::CashPurchases,
        Column::PriorPurchases,
        Column::DirectLabor,
        Column::Overhead,
        Column::AdminExpense,
        Column::Commission,
        Column::Tax,
        Column::AssetPurchase,
        Column::LoanRepayment,
        Column::TotalOutflows,
        Column::ClosingBalance,
    ];

    /// Human-readable header used by tables and spreadsheets
    pub const fn label(&self) -> &'static str {
        match self {
            Column::OpeningBalance => "Opening Balance",
            Column::CollectionCurrent => "Collections 60% (Current Month)",
            Column::CollectionPrior => "Collections 40% (Prior Month)",
            Column::ReceivablesOverride => "Receivables",
            Column::TotalInflows => "Total Inflows",
            Column::CashPurchases => "Cash Purchases 50%",
            Column::PriorPurchases => "Purchases 50% (Prior Month)",
            Column::DirectLabor => "Direct Labor",
            Column::Overhead => "Overhead",
            Column::AdminExpense => "Administrative Expenses",
            Column::Commission => "Commissions",
            Column::Tax => "Taxes",
            Column::AssetPurchase => "Asset Purchase",
            Column::LoanRepayment => "Loan Repayment",
            Column::TotalOutflows => "Total Outflows",
            Column::ClosingBalance => "Closing Balance",
        }
    }

    /// Whether the column is a subtotal or balance rather than a component
    pub const fn is_total(&self) -> bool {
        matches!(
            self,
            Column::OpeningBalance
                | Column::TotalInflows
                | Column::TotalOutflows
                | Column::ClosingBalance
        )
    }
}

/// The complete three-period projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionTable {
    rows: Vec<ProjectionRow>,
    viability: Viability,
}

impl ProjectionTable {
    /// Assemble a table from rows in period order
    ///
    /// Viability is derived from the last row's closing balance.
    pub(crate) fn from_rows(rows: Vec<ProjectionRow>) -> Self {
        let final_balance = rows
            .last()
            .map(|row| row.closing_balance)
            .unwrap_or_default();
        Self {
            viability: Viability::classify(final_balance),
            rows,
        }
    }

    /// Rows in period order
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    /// Row for a given period
    pub fn row(&self, period: Period) -> Option<&ProjectionRow> {
        self.rows.get(period.index())
    }

    /// Row for the last period
    pub fn final_row(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }

    /// Closing balance of the last period
    pub fn final_balance(&self) -> Money {
        self.final_row()
            .map(|row| row.closing_balance)
            .unwrap_or_default()
    }

    /// Classification of the final balance
    pub fn viability(&self) -> Viability {
        self.viability
    }

    /// Values of one column across all periods
    pub fn column(&self, column: Column) -> Vec<Money> {
        self.rows.iter().map(|row| row.get(column)).collect()
    }

    /// Lowest closing balance reached during the projection
    pub fn lowest_balance(&self) -> Money {
        self.rows
            .iter()
            .map(|row| row.closing_balance)
            .min()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: Period, opening: i64, inflows: i64, outflows: i64) -> ProjectionRow {
        ProjectionRow {
            period,
            opening_balance: Money::from_units(opening),
            collection_current: Money::from_units(inflows),
            collection_prior: Money::zero(),
            receivables_override: Money::zero(),
            total_inflows: Money::from_units(inflows),
            cash_purchases: Money::from_units(outflows),
            prior_purchases: Money::zero(),
            direct_labor: Money::zero(),
            overhead: Money::zero(),
            admin_expense: Money::zero(),
            commission: Money::zero(),
            tax: Money::zero(),
            asset_purchase: Money::zero(),
            loan_repayment: Money::zero(),
            total_outflows: Money::from_units(outflows),
            closing_balance: Money::from_units(opening + inflows - outflows),
        }
    }

    #[test]
    fn test_table_accessors() {
        let table = ProjectionTable::from_rows(vec![
            row(Period::Month1, 0, 100, 50),
            row(Period::Month2, 50, 10, 40),
            row(Period::Month3, 20, 30_000, 10),
        ]);

        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.final_balance(), Money::from_units(30_010));
        assert_eq!(table.viability(), Viability::Viable);
        assert_eq!(table.lowest_balance(), Money::from_units(20));
        assert_eq!(
            table.row(Period::Month2).map(|r| r.net_flow()),
            Some(Money::from_units(-30))
        );
        assert_eq!(
            table.column(Column::OpeningBalance),
            vec![Money::zero(), Money::from_units(50), Money::from_units(20)]
        );
    }

    #[test]
    fn test_column_labels_are_unique() {
        let mut labels: Vec<_> = Column::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Column::ALL.len());
    }
}
