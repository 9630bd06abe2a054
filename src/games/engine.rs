//! Game resolution: validation pipeline, outcome draw, win determination,
//! and the atomic ledger commit.
//!
//! Validation runs in fixed order (pause, stake bounds, choice domain); a
//! failure at any step commits nothing. Exactly one value is consumed from
//! the randomness source per successful call.

use crate::auth::AccountId;
use crate::errors::{PlatformError, PlatformResult};
use crate::games::types::{GameData, GameOutcome, PlayReceipt, PlayRequest, RouletteBetKind};
use crate::ledger::LedgerState;
use crate::randomness::RandomnessSource;

/// Pockets that pay on a red color bet (standard European layout).
const RED_POCKETS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

const COIN_SIDES: u32 = 2;
const DIE_FACES: u32 = 6;
const ROULETTE_POCKETS: u32 = 37;

/// A play whose choice domain has been checked.
enum ValidatedPlay {
    CoinFlip { choice: u8 },
    DiceRoll { target: u8 },
    Roulette { bet_kind: RouletteBetKind, bet_choice: u8 },
}

/// Resolve one play against the ledger and return the receipt.
pub fn play(
    state: &mut LedgerState,
    randomness: &mut dyn RandomnessSource,
    creator: AccountId,
    request: PlayRequest,
    bet_amount: u64,
) -> PlatformResult<PlayReceipt> {
    if state.stats().contract_paused {
        return Err(PlatformError::ContractPaused);
    }

    let limits = state.limits();
    if bet_amount < limits.min || bet_amount > limits.max {
        return Err(PlatformError::InvalidBetAmount {
            amount: bet_amount,
            min: limits.min,
            max: limits.max,
        });
    }

    let validated = validate_choice(request)?;
    let (outcome, data) = resolve(validated, randomness);
    let result = data.result();

    let game_type = request.game_type();
    let game_id = state.commit_play(creator, game_type, bet_amount, outcome, data);

    tracing::info!(
        game_id,
        %game_type,
        bet_amount,
        result,
        won = outcome == GameOutcome::Win,
        "game resolved"
    );

    Ok(PlayReceipt {
        game_id,
        won: outcome == GameOutcome::Win,
        result,
    })
}

fn validate_choice(request: PlayRequest) -> PlatformResult<ValidatedPlay> {
    match request {
        PlayRequest::CoinFlip { choice } => {
            if choice > 1 {
                return Err(PlatformError::InvalidChoice);
            }
            Ok(ValidatedPlay::CoinFlip { choice })
        }
        // Targets stop at 5 even though the die has six faces; a roll of 6
        // loses for every legal bet.
        PlayRequest::DiceRoll { target } => {
            if !(1..=5).contains(&target) {
                return Err(PlatformError::InvalidChoice);
            }
            Ok(ValidatedPlay::DiceRoll { target })
        }
        PlayRequest::Roulette { bet_type, bet_choice } => {
            let bet_kind = RouletteBetKind::from_wire(bet_type)?;
            let in_domain = match bet_kind {
                RouletteBetKind::StraightUp => bet_choice <= 36,
                _ => bet_choice <= 1,
            };
            if !in_domain {
                return Err(PlatformError::InvalidChoice);
            }
            Ok(ValidatedPlay::Roulette { bet_kind, bet_choice })
        }
    }
}

fn resolve(
    play: ValidatedPlay,
    randomness: &mut dyn RandomnessSource,
) -> (GameOutcome, GameData) {
    match play {
        ValidatedPlay::CoinFlip { choice } => {
            let result = draw_in(randomness, COIN_SIDES);
            (
                won(result == choice),
                GameData::CoinFlip {
                    player_choice: choice,
                    result,
                },
            )
        }
        ValidatedPlay::DiceRoll { target } => {
            let rolled = draw_in(randomness, DIE_FACES) + 1;
            (won(rolled == target), GameData::DiceRoll { target, rolled })
        }
        ValidatedPlay::Roulette { bet_kind, bet_choice } => {
            let pocket = draw_in(randomness, ROULETTE_POCKETS);
            (
                won(roulette_wins(bet_kind, bet_choice, pocket)),
                GameData::Roulette {
                    bet_kind,
                    bet_choice,
                    pocket,
                },
            )
        }
    }
}

/// One draw from the untrusted source, reduced into the domain if the source
/// misbehaves and answers out of range.
fn draw_in(randomness: &mut dyn RandomnessSource, upper: u32) -> u8 {
    (randomness.draw(upper) % upper) as u8
}

fn won(win: bool) -> GameOutcome {
    if win {
        GameOutcome::Win
    } else {
        GameOutcome::Loss
    }
}

fn roulette_wins(bet_kind: RouletteBetKind, bet_choice: u8, pocket: u8) -> bool {
    match bet_kind {
        RouletteBetKind::StraightUp => pocket == bet_choice,
        RouletteBetKind::Color => {
            if pocket == 0 {
                return false;
            }
            let is_red = RED_POCKETS.contains(&pocket);
            (bet_choice == 0 && is_red) || (bet_choice == 1 && !is_red)
        }
        RouletteBetKind::Parity => pocket != 0 && pocket % 2 == bet_choice,
        RouletteBetKind::Range => {
            if pocket == 0 {
                return false;
            }
            if bet_choice == 0 {
                pocket <= 18
            } else {
                pocket >= 19
            }
        }
    }
}
