//! # Command Line Interface
//!
//! Every invocation loads the state file, applies at most one edit, saves it
//! when something changed, and prints the recomputed panel.

use anyhow::Result;
use clap::{Parser, Subcommand};
use position_book::Workbook;
use risk_engine::{FundsMode, RawNumber, Side};
use std::path::PathBuf;

/// Breakeven, PnL and margin-call calculator for same-instrument FX positions
#[derive(Parser, Debug)]
#[command(name = "risk-cli")]
#[command(about = "Breakeven, PnL and zero-equity price for a basket of FX positions")]
#[command(version)]
pub struct Cli {
    /// Path to the state file
    #[arg(short, long, global = true)]
    pub state: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the metrics as JSON instead of the panel
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the current metrics
    Show,
    /// Add a position (defaults: 0.1 lots, entry 0)
    Add {
        #[arg(long)]
        lots: Option<String>,
        #[arg(long)]
        entry: Option<String>,
    },
    /// Delete a position by id or unique id prefix
    Delete { id: String },
    /// Include or exclude a position from the aggregate
    Select {
        id: String,
        #[arg(action = clap::ArgAction::Set)]
        selected: bool,
    },
    /// Flip a position's membership in the aggregate
    Toggle { id: String },
    /// Change lots and/or entry of a position
    Edit {
        id: String,
        #[arg(long)]
        lots: Option<String>,
        #[arg(long)]
        entry: Option<String>,
    },
    /// Remove every position
    Clear,
    /// Update side, mid, spread or unit
    Market {
        #[arg(long)]
        side: Option<Side>,
        #[arg(long, allow_hyphen_values = true)]
        mid: Option<String>,
        #[arg(long)]
        spread: Option<String>,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Update the funds figure and what it represents
    Funds {
        #[arg(long)]
        mode: Option<FundsMode>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
}

/// Apply one command to the workbook. Returns whether the book changed.
pub fn apply(book: &mut Workbook, command: &Commands) -> Result<bool> {
    match command {
        Commands::Show => Ok(false),
        Commands::Add { lots, entry } => {
            let id = book.add_position();
            if let Some(lots) = lots {
                book.set_lots(id, lots.as_str())?;
            }
            if let Some(entry) = entry {
                book.set_entry(id, entry.as_str())?;
            }
            tracing::info!("Added position {}", id);
            Ok(true)
        }
        Commands::Delete { id } => {
            let id = book.resolve_id(id)?;
            book.delete_position(id)?;
            tracing::info!("Deleted position {}", id);
            Ok(true)
        }
        Commands::Select { id, selected } => {
            let id = book.resolve_id(id)?;
            book.set_selected(id, *selected)?;
            Ok(true)
        }
        Commands::Toggle { id } => {
            let id = book.resolve_id(id)?;
            let selected = book.toggle(id)?;
            tracing::info!("Position {} selected={}", id, selected);
            Ok(true)
        }
        Commands::Edit { id, lots, entry } => {
            let id = book.resolve_id(id)?;
            if let Some(lots) = lots {
                book.set_lots(id, lots.as_str())?;
            }
            if let Some(entry) = entry {
                book.set_entry(id, entry.as_str())?;
            }
            Ok(lots.is_some() || entry.is_some())
        }
        Commands::Clear => {
            book.clear();
            Ok(true)
        }
        Commands::Market { side, mid, spread, unit } => {
            let market = &mut book.market;
            if let Some(side) = side {
                market.side = *side;
            }
            set_raw(&mut market.mid, mid);
            set_raw(&mut market.spread, spread);
            set_raw(&mut market.unit, unit);
            Ok(side.is_some() || mid.is_some() || spread.is_some() || unit.is_some())
        }
        Commands::Funds { mode, amount } => {
            if let Some(mode) = mode {
                book.funds.mode = *mode;
            }
            set_raw(&mut book.funds.funds, amount);
            Ok(mode.is_some() || amount.is_some())
        }
    }
}

fn set_raw(field: &mut RawNumber, value: &Option<String>) {
    if let Some(value) = value {
        *field = RawNumber::from(value.as_str());
    }
}
