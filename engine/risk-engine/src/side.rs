//! Direction of the aggregate and the close-side conventions that follow from it.

use crate::error::EngineError;
use crate::price::round_to_tick;
use crate::quote::{CloseLevels, Quote};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction shared by every position in the book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Get the opposite side
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// `+1` for longs, `-1` for shorts
    #[inline]
    pub fn direction(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }

    /// Name of the quote side a position is closed at
    pub fn close_quote_name(&self) -> &'static str {
        match self {
            Side::Buy => "bid",
            Side::Sell => "ask",
        }
    }

    /// Longs close by selling at the bid, shorts by buying back at the ask.
    #[inline]
    pub fn close_price(&self, quote: &Quote) -> f64 {
        match self {
            Side::Buy => quote.bid,
            Side::Sell => quote.ask,
        }
    }

    /// Mid implied by a close-side price: the close sits half a spread below
    /// mid for longs and half a spread above it for shorts.
    #[inline]
    pub fn mid_from_close(&self, close: f64, spread: f64) -> f64 {
        match self {
            Side::Buy => close + spread / 2.0,
            Side::Sell => close - spread / 2.0,
        }
    }

    /// Tick-rounded close price and equivalent mid. The mid is derived from the
    /// unrounded close so only one rounding step applies to each value.
    pub fn close_levels(&self, close: f64, spread: f64, tick: f64) -> CloseLevels {
        CloseLevels {
            close: round_to_tick(close, tick),
            mid: round_to_tick(self.mid_from_close(close, spread), tick),
        }
    }

    /// PnL per unit of quantity when a position entered at `entry` closes at `close`.
    #[inline]
    pub fn unit_pnl(&self, entry: f64, close: f64) -> f64 {
        match self {
            Side::Buy => close - entry,
            Side::Sell => entry - close,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" | "LONG" => Ok(Side::Buy),
            "SELL" | "SHORT" => Ok(Side::Sell),
            _ => Err(EngineError::UnknownSide(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_str() {
        assert_eq!("BUY".parse::<Side>(), Ok(Side::Buy));
        assert_eq!("sell".parse::<Side>(), Ok(Side::Sell));
        assert_eq!(" Long ".parse::<Side>(), Ok(Side::Buy));
        assert_eq!("hold".parse::<Side>(), Err(EngineError::UnknownSide("hold".to_string())));
    }

    #[test]
    fn test_close_price_picks_unfavorable_side() {
        let quote = Quote { bid: 149.995, ask: 150.005 };
        assert_eq!(Side::Buy.close_price(&quote), 149.995);
        assert_eq!(Side::Sell.close_price(&quote), 150.005);
    }

    #[test]
    fn test_mid_from_close() {
        assert!((Side::Buy.mid_from_close(140.0, 0.01) - 140.005).abs() < 1e-9);
        assert!((Side::Sell.mid_from_close(140.0, 0.01) - 139.995).abs() < 1e-9);
    }

    #[test]
    fn test_unit_pnl_signs() {
        assert_eq!(Side::Buy.unit_pnl(145.0, 146.0), 1.0);
        assert_eq!(Side::Sell.unit_pnl(145.0, 146.0), -1.0);
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.direction(), -1.0);
    }

    #[test]
    fn test_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::from_str::<Side>("\"BUY\"").unwrap(), Side::Buy);
    }
}
