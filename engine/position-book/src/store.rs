//! JSON state file holding the workbook between runs
//!
//! A missing file starts a fresh book. A file that cannot be read back is
//! logged and replaced by a fresh book on the next save; only writes fail.

use crate::error::{BookError, Result};
use crate::workbook::Workbook;
use chrono::{DateTime, Utc};
use risk_engine::{FundsInput, MarketInput, Position};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Format tag written into every state file
pub const STATE_KEY: &str = "usdjpy_be_state_v1";

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    key: String,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    positions: Vec<Position>,
    #[serde(default)]
    market: MarketInput,
    #[serde(default)]
    funds: FundsInput,
}

/// File-backed persistence for a single workbook
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved workbook, falling back to an empty one
    pub fn load(&self) -> Workbook {
        match self.try_load() {
            Ok(Some(book)) => book,
            Ok(None) => {
                tracing::info!("No state file at {:?}, starting with clean state", self.path);
                Workbook::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable state file {:?}: {}", self.path, e);
                Workbook::default()
            }
        }
    }

    /// Load the saved workbook. `Ok(None)` when there is no file yet.
    pub fn try_load(&self) -> Result<Option<Workbook>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BookError::Io(e)),
        };

        let state: StateFile = serde_json::from_reader(BufReader::new(file))?;
        if state.key != STATE_KEY {
            return Err(BookError::corruption(format!(
                "unexpected state key '{}', expected '{}'",
                state.key, STATE_KEY
            )));
        }

        tracing::info!(
            "Loaded {} positions from {:?} (saved at {:?})",
            state.positions.len(),
            self.path,
            state.saved_at
        );
        Ok(Some(Workbook { positions: state.positions, market: state.market, funds: state.funds }))
    }

    /// Write the workbook, replacing any previous state
    pub fn save(&self, book: &Workbook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let state = StateFile {
            key: STATE_KEY.to_string(),
            saved_at: Some(Utc::now()),
            positions: book.positions.clone(),
            market: book.market.clone(),
            funds: book.funds.clone(),
        };

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &state)?;
        writer.flush()?;

        tracing::debug!("Saved {} positions to {:?}", book.positions.len(), self.path);
        Ok(())
    }
}
