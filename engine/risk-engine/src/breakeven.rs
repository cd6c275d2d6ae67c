//! Lot-weighted breakeven over the active position set.

use crate::position::Position;
use crate::quote::CloseLevels;
use crate::side::Side;

/// Lot-weighted average entry price, `sum(lots * entry) / sum(lots)`.
///
/// Positions whose lots or entry do not parse, or whose lots are not positive,
/// are skipped. Returns `None` when no lots remain.
pub fn calc_breakeven<'a, I>(positions: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Position>,
{
    let (sum_lots, sum_lots_entry) = positions
        .into_iter()
        .filter_map(Position::leg)
        .fold((0.0, 0.0), |(lots, weighted), leg| (lots + leg.lots, weighted + leg.lots * leg.entry));

    if sum_lots == 0.0 {
        return None;
    }
    let breakeven = sum_lots_entry / sum_lots;
    breakeven.is_finite().then_some(breakeven)
}

/// Breakeven as a close-side price plus the equivalent mid.
///
/// The breakeven is quote independent; it is the bid for longs and the ask for shorts.
pub fn breakeven_levels<'a, I>(side: Side, positions: I, spread: f64, tick: f64) -> Option<CloseLevels>
where
    I: IntoIterator<Item = &'a Position>,
{
    calc_breakeven(positions).map(|breakeven| side.close_levels(breakeven, spread, tick))
}
