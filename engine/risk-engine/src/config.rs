//! Configuration for RiskEngine

use crate::{DEFAULT_SPREAD, DEFAULT_TICK, DEFAULT_UNIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine constants that the input snapshot does not carry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineCfg {
    /// Minimum price increment; every displayed price is a multiple of it
    pub tick: f64,

    /// Spread used when the entered spread does not parse
    pub default_spread: f64,

    /// Currency units per lot used when the entered unit does not parse
    pub default_unit: f64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfgError {
    #[error("tick must be a positive finite number")]
    InvalidTick,

    #[error("default spread must be a non-negative finite number")]
    InvalidDefaultSpread,

    #[error("default unit must be a positive finite number")]
    InvalidDefaultUnit,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self { tick: DEFAULT_TICK, default_spread: DEFAULT_SPREAD, default_unit: DEFAULT_UNIT }
    }
}

impl EngineCfg {
    pub fn validate(&self) -> Result<(), CfgError> {
        if !self.tick.is_finite() || self.tick <= 0.0 {
            return Err(CfgError::InvalidTick);
        }
        if !self.default_spread.is_finite() || self.default_spread < 0.0 {
            return Err(CfgError::InvalidDefaultSpread);
        }
        if !self.default_unit.is_finite() || self.default_unit <= 0.0 {
            return Err(CfgError::InvalidDefaultUnit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cfg_is_valid() {
        let cfg = EngineCfg::default();
        assert_eq!(cfg.tick, 0.001);
        assert_eq!(cfg.default_spread, 0.01);
        assert_eq!(cfg.default_unit, 100_000.0);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = EngineCfg { tick: 0.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(CfgError::InvalidTick));

        let cfg = EngineCfg { tick: f64::NAN, ..Default::default() };
        assert_eq!(cfg.validate(), Err(CfgError::InvalidTick));

        let cfg = EngineCfg { default_spread: -0.01, ..Default::default() };
        assert_eq!(cfg.validate(), Err(CfgError::InvalidDefaultSpread));

        let cfg = EngineCfg { default_unit: 0.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(CfgError::InvalidDefaultUnit));
    }
}
