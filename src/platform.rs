//! Public platform facade wiring the guard, ledger, engine, and randomness.

use crate::admin;
use crate::auth::{AccountId, OwnerGuard};
use crate::config::{ConfigError, PlatformConfig};
use crate::errors::PlatformResult;
use crate::games::engine;
use crate::games::types::{GameRecord, PlayReceipt, PlayRequest};
use crate::ledger::{BetLimits, LedgerState, PlatformStats};
use crate::randomness::{OsRandomness, RandomnessSource};
use std::sync::{Arc, Mutex, RwLock};

/// Cloneable handle to one platform instance.
///
/// The host environment serializes invocations; the write lock below makes
/// each operation atomic regardless, so sequence assignment and balance
/// updates stay race-free even under a misbehaving host.
#[derive(Clone)]
pub struct BetPlatform {
    guard: OwnerGuard,
    state: Arc<RwLock<LedgerState>>,
    randomness: Arc<Mutex<Box<dyn RandomnessSource>>>,
}

impl BetPlatform {
    /// Platform with the OS-backed randomness source.
    pub fn new(config: &PlatformConfig) -> Result<Self, ConfigError> {
        Self::with_randomness(config, Box::new(OsRandomness))
    }

    /// Platform with an injected randomness source (tests script outcomes
    /// through this).
    pub fn with_randomness(
        config: &PlatformConfig,
        randomness: Box<dyn RandomnessSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let owner = config.owner_account()?;
        let state = LedgerState::new(
            config.house_fee_percent,
            BetLimits {
                min: config.min_bet,
                max: config.max_bet,
            },
            config.start_paused,
        );

        tracing::info!(owner = %owner, fee = config.house_fee_percent, "platform initialized");

        Ok(Self {
            guard: OwnerGuard::new(owner),
            state: Arc::new(RwLock::new(state)),
            randomness: Arc::new(Mutex::new(randomness)),
        })
    }

    pub fn owner(&self) -> AccountId {
        self.guard.owner()
    }

    /// Snapshot of the aggregate counters.
    pub fn platform_stats(&self) -> PlatformStats {
        self.state.read().unwrap().stats().clone()
    }

    /// Look up a game record by id.
    pub fn game(&self, id: u64) -> PlatformResult<GameRecord> {
        self.state.read().unwrap().game(id).cloned()
    }

    /// Wager on a coin flip; `choice` is 0 (heads) or 1 (tails).
    pub fn play_coinflip(
        &self,
        caller: AccountId,
        choice: u8,
        bet_amount: u64,
    ) -> PlatformResult<PlayReceipt> {
        self.play(caller, PlayRequest::CoinFlip { choice }, bet_amount)
    }

    /// Wager on a die landing exactly on `target` (1..=5).
    pub fn play_diceroll(
        &self,
        caller: AccountId,
        target: u8,
        bet_amount: u64,
    ) -> PlatformResult<PlayReceipt> {
        self.play(caller, PlayRequest::DiceRoll { target }, bet_amount)
    }

    /// Wager on a roulette spin; see `RouletteBetKind` for the bet-type and
    /// choice domains.
    pub fn play_roulette(
        &self,
        caller: AccountId,
        bet_type: u8,
        bet_choice: u8,
        bet_amount: u64,
    ) -> PlatformResult<PlayReceipt> {
        self.play(caller, PlayRequest::Roulette { bet_type, bet_choice }, bet_amount)
    }

    fn play(
        &self,
        caller: AccountId,
        request: PlayRequest,
        bet_amount: u64,
    ) -> PlatformResult<PlayReceipt> {
        // Held for the whole call: validation, draw, and commit are one unit.
        let mut state = self.state.write().unwrap();
        let mut randomness = self.randomness.lock().unwrap();
        engine::play(&mut state, randomness.as_mut(), caller, request, bet_amount)
    }

    /// Owner only: move accumulated fees out of the house balance.
    pub fn withdraw_house_fees(&self, caller: AccountId, amount: u64) -> PlatformResult<()> {
        admin::withdraw_house_fees(&mut self.state.write().unwrap(), &self.guard, caller, amount)
    }

    /// Owner only: replace the house fee percentage (max 20).
    pub fn update_house_fee(&self, caller: AccountId, percent: u64) -> PlatformResult<()> {
        admin::update_house_fee(&mut self.state.write().unwrap(), &self.guard, caller, percent)
    }

    /// Owner only: set or clear the pause flag.
    pub fn set_contract_paused(&self, caller: AccountId, paused: bool) -> PlatformResult<()> {
        admin::set_contract_paused(&mut self.state.write().unwrap(), &self.guard, caller, paused)
    }

    /// Owner only: mark a game refunded regardless of prior status.
    pub fn emergency_refund(&self, caller: AccountId, game_id: u64) -> PlatformResult<()> {
        admin::emergency_refund(&mut self.state.write().unwrap(), &self.guard, caller, game_id)
    }
}
