//! Mark-to-market PnL per position and over the active set.

use crate::position::{Position, PositionId};
use crate::quote::Quote;
use crate::side::Side;
use serde::Serialize;

/// PnL in account currency for closing `position` at the unfavorable side of `quote`.
///
/// `None` when lots or entry do not parse or lots is not positive. No transaction
/// cost or financing is applied.
pub fn position_pnl(side: Side, quote: &Quote, unit: f64, position: &Position) -> Option<f64> {
    let leg = position.leg()?;
    let qty = leg.quantity(unit);
    let pnl = side.unit_pnl(leg.entry, side.close_price(quote)) * qty;
    pnl.is_finite().then_some(pnl)
}

/// Sum of PnL over the selected positions and whether that sum is whole.
///
/// `complete` is false when there was no quote or any selected position had no
/// PnL; in that case `sum` covers only part of the set and must not be shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregatePnl {
    pub sum: f64,
    pub complete: bool,
}

impl AggregatePnl {
    /// The total, only when every selected position was valued
    pub fn value(&self) -> Option<f64> {
        self.complete.then_some(self.sum)
    }
}

/// PnL of one row, in the caller's order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionPnl {
    pub id: PositionId,
    pub selected: bool,
    pub pnl: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlReport {
    pub rows: Vec<PositionPnl>,
    pub total: AggregatePnl,
}

/// Value every position and total the selected ones.
///
/// Unselected rows are valued for display but never affect the total or its
/// completeness.
pub fn evaluate_pnl(side: Side, quote: Option<&Quote>, unit: f64, positions: &[Position]) -> PnlReport {
    let mut rows = Vec::with_capacity(positions.len());
    let mut sum = 0.0;
    let mut complete = quote.is_some();

    for position in positions {
        let pnl = quote.and_then(|q| position_pnl(side, q, unit, position));
        if position.selected {
            match pnl {
                Some(value) => sum += value,
                None => complete = false,
            }
        }
        rows.push(PositionPnl { id: position.id, selected: position.selected, pnl });
    }

    PnlReport { rows, total: AggregatePnl { sum, complete } }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: f64 = 100_000.0;

    fn quote() -> Quote {
        Quote { bid: 149.995, ask: 150.005 }
    }

    #[test]
    fn test_buy_closes_at_bid() {
        let p = Position::with_fields(0.1, 145.0);
        let pnl = position_pnl(Side::Buy, &quote(), UNIT, &p).unwrap();
        assert!((pnl - 49_950.0).abs() < 1e-6);
    }

    #[test]
    fn test_sell_closes_at_ask() {
        let p = Position::with_fields(0.1, 145.0);
        let pnl = position_pnl(Side::Sell, &quote(), UNIT, &p).unwrap();
        assert!((pnl + 50_050.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_position_has_no_pnl() {
        assert_eq!(position_pnl(Side::Buy, &quote(), UNIT, &Position::with_fields(0.0, 145.0)), None);
        assert_eq!(position_pnl(Side::Buy, &quote(), UNIT, &Position::with_fields(0.1, "x")), None);
    }

    #[test]
    fn test_total_over_selected_only() {
        let mut positions = vec![Position::with_fields(0.1, 145.0), Position::with_fields(0.1, 149.0)];
        positions[1].selected = false;

        let report = evaluate_pnl(Side::Buy, Some(&quote()), UNIT, &positions);
        assert_eq!(report.rows.len(), 2);
        assert!(report.rows[1].pnl.is_some());
        assert!((report.total.value().unwrap() - 49_950.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_selected_row_makes_total_unavailable() {
        let positions = vec![Position::with_fields(0.1, 145.0), Position::with_fields("", 149.0)];
        let report = evaluate_pnl(Side::Buy, Some(&quote()), UNIT, &positions);
        assert!(!report.total.complete);
        assert_eq!(report.total.value(), None);
        assert_eq!(report.rows[1].pnl, None);
    }

    #[test]
    fn test_invalid_unselected_row_is_ignored() {
        let mut positions = vec![Position::with_fields(0.1, 145.0), Position::with_fields("", 149.0)];
        positions[1].selected = false;
        let report = evaluate_pnl(Side::Buy, Some(&quote()), UNIT, &positions);
        assert!(report.total.complete);
    }

    #[test]
    fn test_no_quote_no_total() {
        let positions = vec![Position::with_fields(0.1, 145.0)];
        let report = evaluate_pnl(Side::Buy, None, UNIT, &positions);
        assert_eq!(report.rows[0].pnl, None);
        assert_eq!(report.total.value(), None);

        let report = evaluate_pnl(Side::Buy, None, UNIT, &[]);
        assert_eq!(report.total.value(), None);
    }
}
