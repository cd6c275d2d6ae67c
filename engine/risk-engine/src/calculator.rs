//! One recomputation over an input snapshot.
//!
//! Data flows one way: market inputs → quote → PnL → funds reconciliation →
//! zero-equity solve. Breakeven depends only on the positions and the spread.

use crate::breakeven::breakeven_levels;
use crate::config::EngineCfg;
use crate::funds::{reconcile_balance, FundsInput};
use crate::numeric::RawNumber;
use crate::pnl::{evaluate_pnl, PnlReport};
use crate::position::{selected, Position};
use crate::quote::{CloseLevels, Quote};
use crate::side::Side;
use crate::zero_equity::zero_equity_levels;
use crate::{DEFAULT_SPREAD, DEFAULT_UNIT};
use serde::{Deserialize, Serialize};

/// Market snapshot shared by the whole book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInput {
    pub side: Side,
    pub mid: RawNumber,
    pub spread: RawNumber,
    pub unit: RawNumber,
}

impl Default for MarketInput {
    fn default() -> Self {
        Self {
            side: Side::Buy,
            mid: RawNumber::Missing,
            spread: RawNumber::Number(DEFAULT_SPREAD),
            unit: RawNumber::Number(DEFAULT_UNIT),
        }
    }
}

/// Everything a caller displays after a recomputation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub side: Side,
    pub quote: Option<Quote>,
    pub breakeven: Option<CloseLevels>,
    pub pnl: PnlReport,
    /// Balance fed to the zero-equity solve
    pub balance: Option<f64>,
    pub zero_equity: Option<CloseLevels>,
}

impl RiskMetrics {
    /// Total PnL as displayed: needs a quote, a complete aggregate and a breakeven,
    /// so an empty active set shows no total.
    pub fn display_total(&self) -> Option<f64> {
        self.quote?;
        self.breakeven?;
        self.pnl.total.value()
    }
}

/// Recompute every metric from the current inputs.
pub fn evaluate(
    cfg: &EngineCfg,
    positions: &[Position],
    market: &MarketInput,
    funds: &FundsInput,
) -> RiskMetrics {
    let side = market.side;
    let mid = market.mid.parse();
    let spread = market.spread.parse().unwrap_or(cfg.default_spread);
    let unit = market.unit.parse().unwrap_or(cfg.default_unit);

    let quote = Quote::derive(mid, spread, cfg.tick);
    let breakeven = breakeven_levels(side, selected(positions), spread, cfg.tick);
    let pnl = evaluate_pnl(side, quote.as_ref(), unit, positions);
    let balance = reconcile_balance(funds.mode, funds.funds.parse(), &pnl.total);
    let zero_equity = zero_equity_levels(side, selected(positions), unit, balance, spread, cfg.tick);

    tracing::debug!(
        "Recomputed {} positions ({} selected): side={} quote={:?} breakeven={:?} total={:?} balance={:?} zero_equity={:?}",
        positions.len(),
        selected(positions).count(),
        side,
        quote,
        breakeven,
        pnl.total,
        balance,
        zero_equity
    );

    RiskMetrics { side, quote, breakeven, pnl, balance, zero_equity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::FundsMode;

    fn market(side: Side, mid: impl Into<RawNumber>) -> MarketInput {
        MarketInput { side, mid: mid.into(), ..Default::default() }
    }

    #[test]
    fn test_unparsable_spread_and_unit_fall_back() {
        let positions = vec![Position::with_fields(0.1, 145.0)];
        let market = MarketInput {
            side: Side::Buy,
            mid: RawNumber::from("150"),
            spread: RawNumber::from("wide"),
            unit: RawNumber::from(""),
        };
        let metrics = evaluate(&EngineCfg::default(), &positions, &market, &FundsInput::default());

        let quote = metrics.quote.unwrap();
        assert!((quote.bid - 149.995).abs() < 1e-9);
        assert!((metrics.pnl.total.value().unwrap() - 49_950.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_total_needs_breakeven() {
        let mut positions = vec![Position::with_fields(0.1, 145.0)];
        positions[0].selected = false;
        let metrics =
            evaluate(&EngineCfg::default(), &positions, &market(Side::Buy, 150.0), &FundsInput::default());

        assert!(metrics.pnl.total.complete);
        assert_eq!(metrics.breakeven, None);
        assert_eq!(metrics.display_total(), None);
    }

    #[test]
    fn test_missing_mid_leaves_breakeven_available() {
        let positions = vec![Position::with_fields(0.1, 145.0)];
        let metrics =
            evaluate(&EngineCfg::default(), &positions, &market(Side::Sell, ""), &FundsInput::default());

        assert_eq!(metrics.quote, None);
        assert!(metrics.breakeven.is_some());
        assert_eq!(metrics.display_total(), None);
        assert_eq!(metrics.zero_equity, None);
    }

    #[test]
    fn test_balance_mode_zero_equity_without_quote() {
        let positions = vec![Position::with_fields(1.0, 150.0)];
        let funds = FundsInput { mode: FundsMode::Balance, funds: RawNumber::from(1_000_000.0) };
        let metrics = evaluate(&EngineCfg::default(), &positions, &market(Side::Buy, ""), &funds);

        assert_eq!(metrics.balance, Some(1_000_000.0));
        let zero = metrics.zero_equity.unwrap();
        assert!((zero.close - 140.0).abs() < 1e-9);
        assert!((zero.mid - 140.005).abs() < 1e-9);
    }
}
