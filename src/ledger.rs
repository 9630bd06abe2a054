//! Platform accounting state: aggregate counters and the game registry.
//!
//! `LedgerState` is the single shared mutable resource. All mutation flows
//! through the resolution engine and the administration controller; each
//! mutator commits its whole effect or nothing, so no caller ever observes a
//! partially updated state.

use crate::auth::AccountId;
use crate::errors::{PlatformError, PlatformResult};
use crate::games::types::{GameData, GameOutcome, GameRecord, GameStatus, GameType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum accepted stake, in micro-STX (1 STX).
pub const MIN_BET_AMOUNT: u64 = 1_000_000;

/// Maximum accepted stake, in micro-STX (1,000 STX).
pub const MAX_BET_AMOUNT: u64 = 1_000_000_000;

/// Hard cap on the house fee percentage.
pub const MAX_HOUSE_FEE_PERCENT: u64 = 20;

/// House fee applied when none is configured.
pub const DEFAULT_HOUSE_FEE_PERCENT: u64 = 5;

/// First id handed out by a fresh ledger; ids are never reused.
pub const FIRST_GAME_ID: u64 = 1;

/// Aggregate platform counters, one set per platform instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformStats {
    /// Accumulated fees not yet withdrawn. Never exceeds cumulative fees
    /// collected minus cumulative withdrawals.
    pub house_balance: u64,
    /// Monotonically increasing play counter.
    pub total_games_played: u64,
    /// Monotonically increasing sum of accepted bet amounts.
    pub total_wagered: u64,
    /// Fee percentage in `0..=MAX_HOUSE_FEE_PERCENT`, owner-mutable.
    pub house_fee_percent: u64,
    /// When true, all play operations are rejected.
    pub contract_paused: bool,
    /// Next id to assign; monotonic.
    pub next_game_id: u64,
}

/// Stake bounds enforced by the validation pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLimits {
    pub min: u64,
    pub max: u64,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            min: MIN_BET_AMOUNT,
            max: MAX_BET_AMOUNT,
        }
    }
}

/// Counters plus the append-only game registry.
#[derive(Debug, Clone)]
pub struct LedgerState {
    stats: PlatformStats,
    limits: BetLimits,
    games: HashMap<u64, GameRecord>,
}

impl LedgerState {
    pub fn new(house_fee_percent: u64, limits: BetLimits, paused: bool) -> Self {
        Self {
            stats: PlatformStats {
                house_balance: 0,
                total_games_played: 0,
                total_wagered: 0,
                house_fee_percent,
                contract_paused: paused,
                next_game_id: FIRST_GAME_ID,
            },
            limits,
            games: HashMap::new(),
        }
    }

    pub fn stats(&self) -> &PlatformStats {
        &self.stats
    }

    pub fn limits(&self) -> BetLimits {
        self.limits
    }

    /// Look up a game by id.
    pub fn game(&self, id: u64) -> PlatformResult<&GameRecord> {
        self.games.get(&id).ok_or(PlatformError::GameNotFound(id))
    }

    pub fn games_recorded(&self) -> usize {
        self.games.len()
    }

    /// Record one resolved play as a single atomic unit: sequence advance,
    /// counters, fee accrual, and the new registry entry all land together.
    pub(crate) fn commit_play(
        &mut self,
        creator: AccountId,
        game_type: GameType,
        bet_amount: u64,
        outcome: GameOutcome,
        data: GameData,
    ) -> u64 {
        let id = self.stats.next_game_id;
        self.stats.next_game_id += 1;
        self.stats.total_games_played += 1;
        // Monotonic counters saturate rather than wrap.
        self.stats.total_wagered = self.stats.total_wagered.saturating_add(bet_amount);

        let house_fee = bet_amount * self.stats.house_fee_percent / 100;
        self.stats.house_balance = self.stats.house_balance.saturating_add(house_fee);

        self.games.insert(
            id,
            GameRecord {
                id,
                creator,
                game_type,
                bet_amount,
                status: GameStatus::Completed,
                outcome,
                data,
            },
        );

        tracing::debug!(game_id = id, %game_type, bet_amount, house_fee, "play committed");
        id
    }

    pub(crate) fn withdraw_fees(&mut self, amount: u64) -> PlatformResult<()> {
        let available = self.stats.house_balance;
        if amount > available {
            return Err(PlatformError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        self.stats.house_balance = available - amount;
        Ok(())
    }

    pub(crate) fn set_fee_percent(&mut self, percent: u64) -> PlatformResult<()> {
        if percent > MAX_HOUSE_FEE_PERCENT {
            return Err(PlatformError::FeeTooHigh {
                percent,
                max: MAX_HOUSE_FEE_PERCENT,
            });
        }
        self.stats.house_fee_percent = percent;
        Ok(())
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.stats.contract_paused = paused;
    }

    /// Force a game into `Refunded`, whatever its prior status.
    pub(crate) fn mark_refunded(&mut self, id: u64) -> PlatformResult<()> {
        let game = self
            .games
            .get_mut(&id)
            .ok_or(PlatformError::GameNotFound(id))?;
        game.status = GameStatus::Refunded;
        Ok(())
    }
}
