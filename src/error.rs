//! Error kinds surfaced to a caller constructing or validating a deal.
//!
//! Internal inconsistencies and cache exhaustion are not represented here:
//! per the error model, those indicate a bug in the engine itself and are
//! fatal — they `assert!`/panic rather than return a `Result`.

use thiserror::Error;

/// Recoverable failures from parsing or validating a deal record. A deal
/// that fails either variant is skipped; it does not abort sibling deals.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A malformed rank/suit/side token, or a structural mismatch in the
    /// input record (wrong field count, unparseable hand string, etc).
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed deal fails (I1), (I2), or (I3) for already-played cards,
    /// or the in-progress trick has more than 3 plays.
    #[error("invalid deal: {0}")]
    InvalidDeal(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
