//! Error types for play and administration operations.
//!
//! Every failure here is detected synchronously during validation, before any
//! ledger mutation; a rejected call leaves the platform state untouched.

use thiserror::Error;

/// Failures surfaced by the game-resolution engine and the administration
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The wagered selection is outside the game's choice domain.
    #[error("Invalid choice for the requested game")]
    InvalidChoice,

    /// The stake is outside the platform's accepted range.
    #[error("Invalid bet amount: {amount} outside [{min}, {max}]")]
    InvalidBetAmount { amount: u64, min: u64, max: u64 },

    /// The caller is not the platform owner.
    #[error("Not authorized")]
    NotAuthorized,

    /// A withdrawal asked for more than the house holds.
    #[error("Insufficient balance: requested {requested}, house holds {available}")]
    InsufficientBalance { requested: u64, available: u64 },

    /// A fee update exceeded the hard cap.
    #[error("Fee too high: {percent}% exceeds the {max}% cap")]
    FeeTooHigh { percent: u64, max: u64 },

    /// Play operations are rejected while the platform is paused.
    #[error("Contract is paused")]
    ContractPaused,

    /// No game exists under the given id.
    #[error("Game {0} not found")]
    GameNotFound(u64),
}

/// Convenience alias used throughout the crate.
pub type PlatformResult<T> = Result<T, PlatformError>;
