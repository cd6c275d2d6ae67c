//! The trader's working state and the edits the front end applies to it

use crate::error::{BookError, Result};
use crate::SEED_ENTRY;
use risk_engine::{
    evaluate, EngineCfg, FundsInput, MarketInput, Position, PositionId, RawNumber, RiskMetrics,
    DEFAULT_LOTS,
};

/// Positions in display order plus the market and funds inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub positions: Vec<Position>,
    pub market: MarketInput,
    pub funds: FundsInput,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selected position with the default lot size and a zero entry
    pub fn add_position(&mut self) -> PositionId {
        self.push(Position::new())
    }

    pub fn push(&mut self, position: Position) -> PositionId {
        let id = position.id;
        self.positions.push(position);
        tracing::debug!("Added position {} ({} total)", id, self.positions.len());
        id
    }

    pub fn get(&self, id: PositionId) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: PositionId) -> Result<&mut Position> {
        self.positions.iter_mut().find(|p| p.id == id).ok_or(BookError::PositionNotFound(id))
    }

    pub fn delete_position(&mut self, id: PositionId) -> Result<Position> {
        let idx = self
            .positions
            .iter()
            .position(|p| p.id == id)
            .ok_or(BookError::PositionNotFound(id))?;
        let removed = self.positions.remove(idx);
        tracing::debug!("Deleted position {} ({} left)", id, self.positions.len());
        Ok(removed)
    }

    pub fn set_selected(&mut self, id: PositionId, selected: bool) -> Result<()> {
        self.get_mut(id)?.selected = selected;
        Ok(())
    }

    /// Flip membership in the active set, returning the new state
    pub fn toggle(&mut self, id: PositionId) -> Result<bool> {
        let position = self.get_mut(id)?;
        position.selected = !position.selected;
        Ok(position.selected)
    }

    /// Store the lots exactly as entered; parsing happens at recomputation
    pub fn set_lots(&mut self, id: PositionId, lots: impl Into<RawNumber>) -> Result<()> {
        self.get_mut(id)?.lots = lots.into();
        Ok(())
    }

    pub fn set_entry(&mut self, id: PositionId, entry: impl Into<RawNumber>) -> Result<()> {
        self.get_mut(id)?.entry = entry.into();
        Ok(())
    }

    pub fn clear(&mut self) {
        tracing::debug!("Cleared {} positions", self.positions.len());
        self.positions.clear();
    }

    /// Insert the starter row when the book is empty. Returns whether it did.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.positions.is_empty() {
            return false;
        }
        self.push(Position::with_fields(DEFAULT_LOTS, SEED_ENTRY));
        true
    }

    /// Resolve a full id or a unique leading fragment of one
    pub fn resolve_id(&self, fragment: &str) -> Result<PositionId> {
        let fragment = fragment.trim().to_lowercase();
        let mut matches = self
            .positions
            .iter()
            .filter(|p| !fragment.is_empty() && p.id.to_string().starts_with(&fragment));

        match (matches.next(), matches.next()) {
            (Some(p), None) => Ok(p.id),
            (Some(_), Some(_)) => Err(BookError::AmbiguousIdPrefix(fragment.clone())),
            (None, _) => Err(BookError::UnknownIdPrefix(fragment.clone())),
        }
    }

    /// Recompute every metric for the current state
    pub fn evaluate(&self, cfg: &EngineCfg) -> RiskMetrics {
        evaluate(cfg, &self.positions, &self.market, &self.funds)
    }
}
