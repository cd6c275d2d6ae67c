//! Quote derivation from mid and spread.

use crate::price::round_to_tick;
use serde::{Deserialize, Serialize};

/// A tick-rounded two-sided quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: f64,
    pub ask: f64,
}

impl Quote {
    /// Derive the bid/ask pair around `mid`. No mid, no quote.
    pub fn derive(mid: Option<f64>, spread: f64, tick: f64) -> Option<Self> {
        let mid = mid?;
        let half = spread / 2.0;
        let bid = round_to_tick(mid - half, tick);
        let ask = round_to_tick(mid + half, tick);
        (bid.is_finite() && ask.is_finite()).then_some(Self { bid, ask })
    }
}

/// A close-side price and its equivalent mid, both tick-rounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloseLevels {
    pub close: f64,
    pub mid: f64,
}
