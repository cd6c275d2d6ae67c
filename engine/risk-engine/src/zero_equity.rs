//! Close-side price at which account equity reaches zero.

use crate::position::Position;
use crate::quote::CloseLevels;
use crate::side::Side;

/// Solve `balance + sum(unit_pnl(entry, close) * qty) = 0` for the common close price.
///
/// With `d` the side direction (`+1` long, `-1` short) every leg contributes
/// `d * (close - entry) * qty`, so `close = (sum(entry * qty) - d * balance) / sum(qty)`:
/// the bid for longs, the ask for shorts.
///
/// Returns `None` without a balance or when no valid quantity remains. `balance`
/// is held fixed while the price moves.
pub fn zero_equity_price<'a, I>(side: Side, positions: I, unit: f64, balance: Option<f64>) -> Option<f64>
where
    I: IntoIterator<Item = &'a Position>,
{
    let balance = balance?;

    let (sum_qty, sum_entry_qty) = positions.into_iter().filter_map(Position::leg).fold(
        (0.0, 0.0),
        |(qty_total, weighted), leg| {
            let qty = leg.quantity(unit);
            (qty_total + qty, weighted + leg.entry * qty)
        },
    );

    if sum_qty == 0.0 {
        return None;
    }
    let close = (sum_entry_qty - side.direction() * balance) / sum_qty;
    close.is_finite().then_some(close)
}

/// Zero-equity close price and equivalent mid, tick-rounded
pub fn zero_equity_levels<'a, I>(
    side: Side,
    positions: I,
    unit: f64,
    balance: Option<f64>,
    spread: f64,
    tick: f64,
) -> Option<CloseLevels>
where
    I: IntoIterator<Item = &'a Position>,
{
    zero_equity_price(side, positions, unit, balance).map(|close| side.close_levels(close, spread, tick))
}
