//! Administration controller: owner-gated operations that mutate the ledger
//! directly, bypassing game resolution.
//!
//! Every operation consults the guard first; an unauthorized caller gets
//! `NotAuthorized` and nothing changes.

use crate::auth::{AccountId, OwnerGuard};
use crate::errors::{PlatformError, PlatformResult};
use crate::games::types::GameStatus;
use crate::ledger::LedgerState;

fn authorize(guard: &OwnerGuard, caller: AccountId) -> PlatformResult<()> {
    if guard.is_owner(caller) {
        Ok(())
    } else {
        Err(PlatformError::NotAuthorized)
    }
}

/// Move `amount` of accumulated fees out of the house balance.
pub fn withdraw_house_fees(
    state: &mut LedgerState,
    guard: &OwnerGuard,
    caller: AccountId,
    amount: u64,
) -> PlatformResult<()> {
    authorize(guard, caller)?;
    state.withdraw_fees(amount)?;
    tracing::info!(amount, remaining = state.stats().house_balance, "house fees withdrawn");
    Ok(())
}

/// Replace the house fee percentage; capped at 20.
pub fn update_house_fee(
    state: &mut LedgerState,
    guard: &OwnerGuard,
    caller: AccountId,
    percent: u64,
) -> PlatformResult<()> {
    authorize(guard, caller)?;
    state.set_fee_percent(percent)?;
    tracing::info!(percent, "house fee updated");
    Ok(())
}

/// Set or clear the pause flag. Unconditional once authorized.
pub fn set_contract_paused(
    state: &mut LedgerState,
    guard: &OwnerGuard,
    caller: AccountId,
    paused: bool,
) -> PlatformResult<()> {
    authorize(guard, caller)?;
    state.set_paused(paused);
    tracing::info!(paused, "pause flag updated");
    Ok(())
}

/// Mark a game `Refunded` regardless of its prior status.
pub fn emergency_refund(
    state: &mut LedgerState,
    guard: &OwnerGuard,
    caller: AccountId,
    game_id: u64,
) -> PlatformResult<()> {
    authorize(guard, caller)?;
    if state.game(game_id)?.status == GameStatus::Completed {
        // Settlement may already have paid this game out.
        tracing::warn!(game_id, "refunding an already-completed game");
    }
    state.mark_refunded(game_id)?;
    tracing::info!(game_id, "game refunded");
    Ok(())
}
