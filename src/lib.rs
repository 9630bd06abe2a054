//! ClarityBet - wagering ledger and game-resolution engine.
//!
//! Accepts bets for coinflip, dice-roll, and roulette games, draws outcomes
//! from an injectable randomness source, applies house fees, and keeps
//! platform-wide accounting under owner authorization and pause control.
//!
//! Settlement (paying winners), durable storage, and the transaction layer
//! that authenticates and serializes callers are external collaborators; this
//! crate owns only the accounting state machine and outcome logic.

pub mod admin;
pub mod auth;
pub mod config;
pub mod errors;
pub mod games;
pub mod ledger;
pub mod platform;
pub mod randomness;

pub use auth::{AccountId, OwnerGuard};
pub use config::{ConfigError, PlatformConfig};
pub use errors::{PlatformError, PlatformResult};
pub use games::types::{
    GameData, GameOutcome, GameRecord, GameStatus, GameType, PlayReceipt, RouletteBetKind,
};
pub use ledger::{
    BetLimits, LedgerState, PlatformStats, DEFAULT_HOUSE_FEE_PERCENT, MAX_BET_AMOUNT,
    MAX_HOUSE_FEE_PERCENT, MIN_BET_AMOUNT,
};
pub use platform::BetPlatform;
pub use randomness::{FixedSequence, OsRandomness, RandomnessSource};
