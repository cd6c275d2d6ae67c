//! # PositionBook
//!
//! Owns the trader's state between recomputations: the ordered position list,
//! the market and funds inputs, and the JSON file they are kept in. The risk
//! engine itself is stateless and only ever sees a borrowed snapshot.

pub mod error;
pub mod store;
pub mod workbook;

pub use error::{BookError, Result};
pub use store::{StateStore, STATE_KEY};
pub use workbook::Workbook;

/// Entry price of the starter row inserted into an empty book
pub const SEED_ENTRY: f64 = 145.0;
