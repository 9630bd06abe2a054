//! Game-facing types: kinds, statuses, per-game data, and play receipts.

use crate::auth::AccountId;
use crate::errors::{PlatformError, PlatformResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported game kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    CoinFlip,
    DiceRoll,
    Roulette,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::CoinFlip => write!(f, "coinflip"),
            GameType::DiceRoll => write!(f, "diceroll"),
            GameType::Roulette => write!(f, "roulette"),
        }
    }
}

/// Lifecycle of a placed bet.
///
/// `Active -> Completed` on resolution; `Refunded` is reachable from either
/// state through the administration controller, including from `Completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Completed,
    Refunded,
}

/// Win/loss from the player's perspective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
}

/// Roulette wager families. Discriminants match the wire values accepted by
/// `play_roulette`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RouletteBetKind {
    /// Single number; choice in 0..=36.
    StraightUp = 0,
    /// 0 = red, 1 = black. Pocket 0 loses.
    Color = 1,
    /// 0 = even, 1 = odd. Pocket 0 loses.
    Parity = 2,
    /// 0 = low (1-18), 1 = high (19-36). Pocket 0 loses.
    Range = 3,
}

impl RouletteBetKind {
    pub fn from_wire(value: u8) -> PlatformResult<Self> {
        match value {
            0 => Ok(Self::StraightUp),
            1 => Ok(Self::Color),
            2 => Ok(Self::Parity),
            3 => Ok(Self::Range),
            _ => Err(PlatformError::InvalidChoice),
        }
    }
}

/// Game-specific data stored with each record (discriminated union).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "play", rename_all = "lowercase")]
pub enum GameData {
    CoinFlip {
        /// 0 = heads, 1 = tails.
        player_choice: u8,
        result: u8,
    },
    DiceRoll {
        /// Playable targets are 1..=5; rolls span 1..=6.
        target: u8,
        rolled: u8,
    },
    Roulette {
        bet_kind: RouletteBetKind,
        bet_choice: u8,
        pocket: u8,
    },
}

impl GameData {
    /// The caller's wagered selection.
    pub fn player_choice(&self) -> u8 {
        match *self {
            GameData::CoinFlip { player_choice, .. } => player_choice,
            GameData::DiceRoll { target, .. } => target,
            GameData::Roulette { bet_choice, .. } => bet_choice,
        }
    }

    /// The drawn outcome value.
    pub fn result(&self) -> u8 {
        match *self {
            GameData::CoinFlip { result, .. } => result,
            GameData::DiceRoll { rolled, .. } => rolled,
            GameData::Roulette { pocket, .. } => pocket,
        }
    }

    /// The resolved winning selection; equals the drawn result for every
    /// game kind.
    pub fn winning_choice(&self) -> u8 {
        self.result()
    }
}

/// One placed bet and its resolution. Records are never deleted, only
/// status-transitioned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u64,
    pub creator: AccountId,
    pub game_type: GameType,
    pub bet_amount: u64,
    pub status: GameStatus,
    pub outcome: GameOutcome,
    #[serde(flatten)]
    pub data: GameData,
}

/// Wager parameters for one play call, prior to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRequest {
    CoinFlip { choice: u8 },
    DiceRoll { target: u8 },
    Roulette { bet_type: u8, bet_choice: u8 },
}

impl PlayRequest {
    pub fn game_type(&self) -> GameType {
        match self {
            PlayRequest::CoinFlip { .. } => GameType::CoinFlip,
            PlayRequest::DiceRoll { .. } => GameType::DiceRoll,
            PlayRequest::Roulette { .. } => GameType::Roulette,
        }
    }
}

/// Returned to the caller after a successful play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayReceipt {
    pub game_id: u64,
    pub won: bool,
    /// Drawn outcome value; domain depends on the game.
    pub result: u8,
}
