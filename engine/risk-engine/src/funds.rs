//! Reconciliation of the entered funds figure into an account balance.

use crate::error::EngineError;
use crate::numeric::RawNumber;
use crate::pnl::AggregatePnl;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the entered funds figure represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundsMode {
    /// Settled account balance, excluding open positions
    #[default]
    Balance,
    /// Current equity, balance plus unrealized PnL of the selected positions
    Equity,
}

impl FundsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundsMode::Balance => "BALANCE",
            FundsMode::Equity => "EQUITY",
        }
    }
}

impl fmt::Display for FundsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundsMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BALANCE" => Ok(FundsMode::Balance),
            "EQUITY" => Ok(FundsMode::Equity),
            _ => Err(EngineError::UnknownFundsMode(s.to_string())),
        }
    }
}

/// Funds as entered by the trader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundsInput {
    pub mode: FundsMode,
    pub funds: RawNumber,
}

/// Balance to hold fixed while solving for the zero-equity price.
///
/// In equity mode the current unrealized PnL is backed out of the entered figure,
/// which needs the whole selected set valued at a live quote. A partial total
/// yields `None` instead of an approximate balance.
pub fn reconcile_balance(mode: FundsMode, funds: Option<f64>, total: &AggregatePnl) -> Option<f64> {
    let funds = funds?;
    match mode {
        FundsMode::Balance => Some(funds),
        FundsMode::Equity => total.value().map(|pnl| funds - pnl),
    }
}
