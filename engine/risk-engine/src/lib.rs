//! # RiskEngine
//!
//! Calculation engine for a basket of same-instrument leveraged FX positions:
//! bid/ask derivation, lot-weighted breakeven, mark-to-market PnL, and the quote
//! at which account equity reaches zero.
//!
//! Every entry point is a synchronous function over inputs owned by the caller.
//! A value that cannot be computed comes back as `None`, never as an error or a
//! sentinel number.

pub mod breakeven;
pub mod calculator;
pub mod config;
pub mod error;
pub mod funds;
pub mod numeric;
pub mod pnl;
pub mod position;
pub mod price;
pub mod quote;
pub mod side;
pub mod zero_equity;


pub use breakeven::{breakeven_levels, calc_breakeven};
pub use calculator::{evaluate, MarketInput, RiskMetrics};
pub use config::{CfgError, EngineCfg};
pub use error::{EngineError, Result};
pub use funds::{reconcile_balance, FundsInput, FundsMode};
pub use numeric::{parse_num, RawNumber};
pub use pnl::{evaluate_pnl, position_pnl, AggregatePnl, PnlReport, PositionPnl};
pub use position::{selected, Leg, Position, PositionId};
pub use price::{round_half_up, round_to_tick};
pub use quote::{CloseLevels, Quote};
pub use side::Side;
pub use zero_equity::{zero_equity_levels, zero_equity_price};

/// Minimum price increment of the quoted pair (1 point)
pub const DEFAULT_TICK: f64 = 0.001;

/// Spread used when the entered spread does not parse
pub const DEFAULT_SPREAD: f64 = 0.01;

/// Currency units per lot used when the entered unit does not parse
pub const DEFAULT_UNIT: f64 = 100_000.0;

/// Lot size of a freshly added position
pub const DEFAULT_LOTS: f64 = 0.1;
