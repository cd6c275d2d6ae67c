//! Error types for RiskEngine
//!
//! Calculations never fail; unavailable values are `None`. These errors cover
//! configuration and the parsing of named inputs.

use crate::config::CfgError;
use thiserror::Error;

/// Result type for RiskEngine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] CfgError),

    #[error("Unknown side: {0} (expected BUY or SELL)")]
    UnknownSide(String),

    #[error("Unknown funds mode: {0} (expected BALANCE or EQUITY)")]
    UnknownFundsMode(String),
}
