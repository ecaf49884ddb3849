//! Cash-flow projection
//!
//! Turns a scenario and the base figures into a three-period projection.
//! Each period's opening balance is the previous period's closing balance, so
//! periods are evaluated strictly in order.

use tracing::{debug, warn};

use crate::error::CashflowResult;
use crate::models::{BaseData, Money, Period, ProjectionRow, ProjectionTable, ScenarioConfig};

/// Opening balance of month 1 when the scenario includes it
pub const OPENING_BALANCE: Money = Money::from_units(25_000);

/// Price of the asset bought in month 2
pub const ASSET_PURCHASE: Money = Money::from_units(25_000);

/// Loan repaid in month 3
pub const LOAN_REPAYMENT: Money = Money::from_units(29_000);

/// Share of a month's sales collected in the same month
pub const CURRENT_COLLECTION_PCT: i64 = 60;

/// Share of a month's sales collected in the following month
pub const PRIOR_COLLECTION_PCT: i64 = 40;

/// Share of a month's purchases paid in cash
pub const CASH_PURCHASE_PCT: i64 = 50;

/// Sales commission rate
pub const COMMISSION_PCT: i64 = 5;

/// Tax rate, applied to the previous month's sales
pub const TAX_PCT: i64 = 10;

/// Compute the projection for a scenario
///
/// Inputs are validated before anything is computed; no partial table is
/// ever returned.
pub fn compute(config: &ScenarioConfig, base: &BaseData) -> CashflowResult<ProjectionTable> {
    if let Err(err) = config.validate().and_then(|()| base.validate()) {
        warn!(error = %err, "rejecting projection input");
        return Err(err);
    }

    let opening = if config.include_opening_balance {
        OPENING_BALANCE
    } else {
        Money::zero()
    };

    let (rows, _) = Period::ALL.iter().fold(
        (Vec::with_capacity(Period::ALL.len()), opening),
        |(mut rows, opening), &period| {
            let row = project_period(period, opening, config, base);
            debug!(
                period = %period,
                opening = %row.opening_balance,
                inflows = %row.total_inflows,
                outflows = %row.total_outflows,
                closing = %row.closing_balance,
                "projected period"
            );
            let closing = row.closing_balance;
            rows.push(row);
            (rows, closing)
        },
    );

    let table = ProjectionTable::from_rows(rows);
    debug!(
        final_balance = %table.final_balance(),
        viability = %table.viability(),
        "projection complete"
    );
    Ok(table)
}

/// Compute a single period given its opening balance
fn project_period(
    period: Period,
    opening_balance: Money,
    config: &ScenarioConfig,
    base: &BaseData,
) -> ProjectionRow {
    let sales = base.sales_in(period);
    let purchases = base.purchases_in(period);
    let prior = period.previous();
    let prior_sales = prior.map(|p| base.sales_in(p)).unwrap_or_default();

    let collection_current = sales.percent(CURRENT_COLLECTION_PCT);
    let collection_prior = prior_sales.percent(PRIOR_COLLECTION_PCT);
    let receivables_override = if period.is_first() {
        config.receivables_month1
    } else {
        Money::zero()
    };
    let total_inflows = collection_current + collection_prior + receivables_override;

    let cash_purchases = purchases.percent(CASH_PURCHASE_PCT);
    let prior_purchases = match prior {
        None => config.payables_month1,
        Some(p) => base.purchases_in(p).percent(CASH_PURCHASE_PCT),
    };
    let direct_labor = base.direct_labor_in(period);
    let overhead = base.overhead_in(period);
    let admin_expense = base.admin_expense_in(period);
    let commission = sales.percent(COMMISSION_PCT);
    let tax = prior_sales.percent(TAX_PCT);
    let asset_purchase = if period == Period::Month2 && config.buy_asset_month2 {
        ASSET_PURCHASE
    } else {
        Money::zero()
    };
    let loan_repayment = if period == Period::Month3 && config.pay_loan_month3 {
        LOAN_REPAYMENT
    } else {
        Money::zero()
    };

    let total_outflows = [
        cash_purchases,
        prior_purchases,
        direct_labor,
        overhead,
        admin_expense,
        commission,
        tax,
        asset_purchase,
        loan_repayment,
    ]
    .into_iter()
    .sum();

    ProjectionRow {
        period,
        opening_balance,
        collection_current,
        collection_prior,
        receivables_override,
        total_inflows,
        cash_purchases,
        prior_purchases,
        direct_labor,
        overhead,
        admin_expense,
        commission,
        tax,
        asset_purchase,
        loan_repayment,
        total_outflows,
        closing_balance: opening_balance + total_inflows - total_outflows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Viability, MAX_OVERRIDE};

    fn all_on() -> ScenarioConfig {
        ScenarioConfig {
            include_opening_balance: true,
            buy_asset_month2: true,
            pay_loan_month3: true,
            receivables_month1: Money::from_units(10_000),
            payables_month1: Money::from_units(8_000),
        }
    }

    fn every_toggle_combination() -> Vec<ScenarioConfig> {
        let mut configs = Vec::new();
        for bits in 0..8u8 {
            configs.push(ScenarioConfig {
                include_opening_balance: bits & 1 != 0,
                buy_asset_month2: bits & 2 != 0,
                pay_loan_month3: bits & 4 != 0,
                ..all_on()
            });
        }
        configs
    }

    #[test]
    fn test_reference_scenario_first_month() {
        let table = compute(&all_on(), &BaseData::standard()).unwrap();
        let first = table.row(Period::Month1).unwrap();

        assert_eq!(first.total_inflows, Money::from_units(40_000));
        assert_eq!(first.total_outflows, Money::from_units(39_500));
        assert_eq!(first.closing_balance, Money::from_units(25_500));
    }

    #[test]
    fn test_reference_scenario_full_table() {
        let table = compute(&all_on(), &BaseData::standard()).unwrap();
        let [m1, m2, m3] = [
            table.row(Period::Month1).unwrap(),
            table.row(Period::Month2).unwrap(),
            table.row(Period::Month3).unwrap(),
        ];

        assert_eq!(m1.commission, Money::from_units(2_500));
        assert_eq!(m1.tax, Money::zero());

        // 33000 + 20000 in; 12500 + 10000 + 12000 + 5000 + 4000 + 2750 + 5000 + 25000 out
        assert_eq!(m2.total_inflows, Money::from_units(53_000));
        assert_eq!(m2.total_outflows, Money::from_units(76_250));
        assert_eq!(m2.closing_balance, Money::from_units(2_250));

        // 36000 + 22000 in; 15000 + 12500 + 13000 + 5000 + 4000 + 3000 + 5500 + 29000 out
        assert_eq!(m3.total_inflows, Money::from_units(58_000));
        assert_eq!(m3.total_outflows, Money::from_units(87_000));
        assert_eq!(m3.closing_balance, Money::from_units(-26_750));

        assert_eq!(table.viability(), Viability::Critical);
    }

    #[test]
    fn test_closing_balance_identity() {
        for config in every_toggle_combination() {
            let table = compute(&config, &BaseData::standard()).unwrap();
            for row in table.rows() {
                assert_eq!(
                    row.closing_balance,
                    row.opening_balance + row.total_inflows - row.total_outflows
                );
            }
        }
    }

    #[test]
    fn test_carry_forward() {
        for config in every_toggle_combination() {
            let table = compute(&config, &BaseData::standard()).unwrap();
            for pair in table.rows().windows(2) {
                assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
            }
        }
    }

    #[test]
    fn test_opening_balance_toggle() {
        let base = BaseData::standard();
        let with = compute(&all_on(), &base).unwrap();
        let without = compute(
            &ScenarioConfig {
                include_opening_balance: false,
                ..all_on()
            },
            &base,
        )
        .unwrap();

        assert_eq!(with.rows()[0].opening_balance, Money::from_units(25_000));
        assert_eq!(without.rows()[0].opening_balance, Money::zero());
    }

    #[test]
    fn test_asset_toggle() {
        let base = BaseData::standard();
        let with = compute(&all_on(), &base).unwrap();
        let without = compute(
            &ScenarioConfig {
                buy_asset_month2: false,
                ..all_on()
            },
            &base,
        )
        .unwrap();

        assert_eq!(with.rows()[1].asset_purchase, Money::from_units(25_000));
        assert_eq!(without.rows()[1].asset_purchase, Money::zero());
        assert!(with.rows()[0].asset_purchase.is_zero());
        assert!(with.rows()[2].asset_purchase.is_zero());
    }

    #[test]
    fn test_loan_toggle() {
        let base = BaseData::standard();
        let with = compute(&all_on(), &base).unwrap();
        let without = compute(
            &ScenarioConfig {
                pay_loan_month3: false,
                ..all_on()
            },
            &base,
        )
        .unwrap();

        assert_eq!(with.rows()[2].loan_repayment, Money::from_units(29_000));
        assert_eq!(without.rows()[2].loan_repayment, Money::zero());
        assert!(with.rows()[0].loan_repayment.is_zero());
        assert!(with.rows()[1].loan_repayment.is_zero());
    }

    #[test]
    fn test_overrides_only_touch_first_month() {
        let table = compute(&all_on(), &BaseData::standard()).unwrap();
        assert_eq!(table.rows()[0].receivables_override, Money::from_units(10_000));
        assert_eq!(table.rows()[0].prior_purchases, Money::from_units(8_000));
        assert!(table.rows()[1].receivables_override.is_zero());
        assert_eq!(table.rows()[1].prior_purchases, Money::from_units(10_000));
    }

    #[test]
    fn test_tax_lags_one_month() {
        let table = compute(&all_on(), &BaseData::standard()).unwrap();
        assert_eq!(table.column(crate::models::Column::Tax), vec![
            Money::zero(),
            Money::from_units(5_000),
            Money::from_units(5_500),
        ]);
    }

    #[test]
    fn test_no_commitments_is_viable() {
        let config = ScenarioConfig {
            buy_asset_month2: false,
            pay_loan_month3: false,
            ..all_on()
        };
        let table = compute(&config, &BaseData::standard()).unwrap();
        // -26750 + 25000 + 29000
        assert_eq!(table.final_balance(), Money::from_units(27_250));
        assert_eq!(table.viability(), Viability::Viable);
    }

    #[test]
    fn test_idempotent() {
        let base = BaseData::standard();
        let first = compute(&all_on(), &base).unwrap();
        let second = compute(&all_on(), &base).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_negative_override() {
        let config = ScenarioConfig {
            payables_month1: Money::from_units(-1),
            ..all_on()
        };
        let err = compute(&config, &BaseData::standard()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_rejects_override_beyond_ceiling() {
        let huge = ScenarioConfig::parse_override("receivables", "92233720368547757");
        assert!(huge.unwrap_err().is_invalid_input());

        let config = ScenarioConfig {
            receivables_month1: Money::from_cents(92_233_720_368_547_757_00),
            ..all_on()
        };
        let err = compute(&config, &BaseData::standard()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_largest_overrides_still_compute() {
        let config = ScenarioConfig {
            receivables_month1: MAX_OVERRIDE,
            payables_month1: MAX_OVERRIDE,
            ..all_on()
        };
        let table = compute(&config, &BaseData::standard()).unwrap();
        assert_eq!(
            table.rows()[0].total_inflows,
            MAX_OVERRIDE + Money::from_units(30_000)
        );
        // Receivables and payables cancel out from month 1 onwards
        assert_eq!(table.final_balance(), Money::from_units(-26_750 - 2_000));
    }

    #[test]
    fn test_rejects_malformed_base_data() {
        let mut base = BaseData::standard();
        base.direct_labor.truncate(1);
        let err = compute(&all_on(), &base).unwrap_err();
        assert!(err.is_malformed_base_data());
    }

    #[test]
    fn test_fractional_overrides_keep_cents() {
        let config = ScenarioConfig {
            receivables_month1: Money::from_cents(1_000_050),
            ..all_on()
        };
        let table = compute(&config, &BaseData::standard()).unwrap();
        assert_eq!(table.rows()[0].total_inflows, Money::from_cents(4_000_050));
    }
}
