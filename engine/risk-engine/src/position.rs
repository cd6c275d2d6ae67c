//! Position legs as entered by the trader

use crate::numeric::RawNumber;
use crate::DEFAULT_LOTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier assigned when a position is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(pub Uuid);

impl PositionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PositionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PositionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(PositionId)
    }
}

/// One leveraged trade leg. `lots` and `entry` keep the raw entered value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub selected: bool,
    pub lots: RawNumber,
    pub entry: RawNumber,
}

/// The numeric view of a position that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub lots: f64,
    pub entry: f64,
}

impl Leg {
    /// Currency quantity of the leg
    #[inline]
    pub fn quantity(&self, unit: f64) -> f64 {
        self.lots * unit
    }
}

impl Position {
    /// A new selected position with the default lot size and a zero entry
    pub fn new() -> Self {
        Self::with_fields(DEFAULT_LOTS, 0.0)
    }

    pub fn with_fields(lots: impl Into<RawNumber>, entry: impl Into<RawNumber>) -> Self {
        Self { id: PositionId::new(), selected: true, lots: lots.into(), entry: entry.into() }
    }

    /// Parsed lots and entry, or `None` when either does not parse or lots is not positive.
    pub fn leg(&self) -> Option<Leg> {
        let lots = self.lots.parse()?;
        let entry = self.entry.parse()?;
        if lots <= 0.0 {
            return None;
        }
        Some(Leg { lots, entry })
    }

    /// Whether the position counts toward breakeven, PnL and zero-equity aggregates
    pub fn contributes(&self) -> bool {
        self.selected && self.leg().is_some()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions that are part of the active calculation set, in input order
pub fn selected(positions: &[Position]) -> impl Iterator<Item = &Position> {
    positions.iter().filter(|p| p.selected)
}
