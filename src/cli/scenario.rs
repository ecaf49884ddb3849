//! Scenario flags shared by the projection commands

use clap::Args;

use crate::error::CashflowResult;
use crate::models::ScenarioConfig;

/// Command-line overrides for the scenario
///
/// Anything left unset falls back to the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Start month 1 with the 25,000 opening balance
    #[arg(long, overrides_with = "no_opening_balance")]
    pub opening_balance: bool,

    /// Start month 1 from zero
    #[arg(long, overrides_with = "opening_balance")]
    pub no_opening_balance: bool,

    /// Buy the 25,000 asset in month 2
    #[arg(long, overrides_with = "no_buy_asset")]
    pub buy_asset: bool,

    /// Skip the month 2 asset purchase
    #[arg(long, overrides_with = "buy_asset")]
    pub no_buy_asset: bool,

    /// Repay the 29,000 loan in month 3
    #[arg(long, overrides_with = "no_pay_loan")]
    pub pay_loan: bool,

    /// Skip the month 3 loan repayment
    #[arg(long, overrides_with = "pay_loan")]
    pub no_pay_loan: bool,

    /// Receivables collected in month 1 (e.g. 10000 or 10,000.50)
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub receivables: Option<String>,

    /// Payables settled in month 1
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub payables: Option<String>,
}

impl ScenarioArgs {
    /// Apply these overrides on top of a base scenario
    pub fn resolve(&self, base: ScenarioConfig) -> CashflowResult<ScenarioConfig> {
        let mut config = base;

        if let Some(value) = toggle(self.opening_balance, self.no_opening_balance) {
            config.include_opening_balance = value;
        }
        if let Some(value) = toggle(self.buy_asset, self.no_buy_asset) {
            config.buy_asset_month2 = value;
        }
        if let Some(value) = toggle(self.pay_loan, self.no_pay_loan) {
            config.pay_loan_month3 = value;
        }
        if let Some(raw) = &self.receivables {
            config.receivables_month1 = ScenarioConfig::parse_override("receivables", raw)?;
        }
        if let Some(raw) = &self.payables {
            config.payables_month1 = ScenarioConfig::parse_override("payables", raw)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        scenario: ScenarioArgs,
    }

    fn parse(args: &[&str]) -> ScenarioArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).scenario
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let base = ScenarioConfig {
            buy_asset_month2: false,
            ..ScenarioConfig::default()
        };
        assert_eq!(parse(&[]).resolve(base).unwrap(), base);
    }

    #[test]
    fn test_toggles_and_amounts() {
        let config = parse(&[
            "--no-opening-balance",
            "--no-pay-loan",
            "--receivables",
            "12,000",
            "--payables",
            "0",
        ])
        .resolve(ScenarioConfig::default())
        .unwrap();

        assert!(!config.include_opening_balance);
        assert!(config.buy_asset_month2);
        assert!(!config.pay_loan_month3);
        assert_eq!(config.receivables_month1, Money::from_units(12_000));
        assert_eq!(config.payables_month1, Money::zero());
    }

    #[test]
    fn test_last_toggle_wins() {
        let config = parse(&["--no-buy-asset", "--buy-asset"])
            .resolve(ScenarioConfig::default())
            .unwrap();
        assert!(config.buy_asset_month2);
    }

    #[test]
    fn test_invalid_amounts() {
        let err = parse(&["--receivables", "-5"])
            .resolve(ScenarioConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_input());

        let err = parse(&["--payables", "eight thousand"])
            .resolve(ScenarioConfig::default())
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
