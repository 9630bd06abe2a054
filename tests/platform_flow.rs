//! End-to-end platform scenarios exercised through the public facade.

use claritybet::{
    AccountId, BetPlatform, FixedSequence, PlatformConfig, PlatformError, GameStatus,
};

fn owner() -> AccountId {
    AccountId::new([7; 32])
}

fn player() -> AccountId {
    AccountId::new([9; 32])
}

fn config() -> PlatformConfig {
    PlatformConfig {
        owner: owner().to_hex(),
        ..PlatformConfig::default()
    }
}

fn platform_with(draws: &[u32]) -> BetPlatform {
    init_tracing();
    BetPlatform::with_randomness(&config(), Box::new(FixedSequence::new(draws.iter().copied())))
        .unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("claritybet=debug")
        .try_init();
}

#[test]
fn initial_stats_are_zeroed_with_default_fee() {
    let platform = platform_with(&[]);
    let stats = platform.platform_stats();

    assert_eq!(stats.house_balance, 0);
    assert_eq!(stats.total_games_played, 0);
    assert_eq!(stats.total_wagered, 0);
    assert_eq!(stats.house_fee_percent, 5);
}

#[test]
fn coinflip_bet_accrues_exact_house_fee() {
    // The reference scenario: 1 STX on heads at the default 5% fee.
    let platform = platform_with(&[1]);
    let receipt = platform.play_coinflip(player(), 0, 1_000_000).unwrap();

    assert_eq!(receipt.game_id, 1);
    let stats = platform.platform_stats();
    assert_eq!(stats.total_games_played, 1);
    assert_eq!(stats.total_wagered, 1_000_000);
    assert_eq!(stats.house_balance, 50_000);
}

#[test]
fn each_game_kind_is_playable_and_counted() {
    let platform = platform_with(&[0, 2, 17]);

    platform.play_coinflip(player(), 0, 1_000_000).unwrap();
    platform.play_diceroll(player(), 3, 1_000_000).unwrap();
    let roulette = platform.play_roulette(player(), 0, 17, 1_000_000).unwrap();

    assert!(roulette.won);
    let stats = platform.platform_stats();
    assert_eq!(stats.total_games_played, 3);
    assert_eq!(stats.total_wagered, 3_000_000);
    assert_eq!(stats.next_game_id, 4);
}

#[test]
fn invalid_inputs_are_rejected_without_state_change() {
    let platform = platform_with(&[0]);

    assert_eq!(
        platform.play_coinflip(player(), 2, 1_000_000).unwrap_err(),
        PlatformError::InvalidChoice
    );
    assert_eq!(
        platform.play_diceroll(player(), 6, 1_000_000).unwrap_err(),
        PlatformError::InvalidChoice
    );
    assert_eq!(
        platform.play_roulette(player(), 4, 0, 1_000_000).unwrap_err(),
        PlatformError::InvalidChoice
    );
    assert!(matches!(
        platform.play_coinflip(player(), 0, 999_999).unwrap_err(),
        PlatformError::InvalidBetAmount { .. }
    ));

    let stats = platform.platform_stats();
    assert_eq!(stats.total_games_played, 0);
    assert_eq!(stats.total_wagered, 0);
    assert_eq!(stats.house_balance, 0);
}

#[test]
fn owner_withdraws_half_of_collected_fees() {
    let platform = platform_with(&[1]);
    platform.play_coinflip(player(), 0, 1_000_000).unwrap();

    let before = platform.platform_stats().house_balance;
    platform.withdraw_house_fees(owner(), before / 2).unwrap();
    assert_eq!(platform.platform_stats().house_balance, before - before / 2);

    // Non-owner attempts change nothing.
    let err = platform.withdraw_house_fees(player(), 1).unwrap_err();
    assert_eq!(err, PlatformError::NotAuthorized);
    assert_eq!(platform.platform_stats().house_balance, before - before / 2);
}

#[test]
fn fee_update_applies_to_subsequent_plays() {
    let platform = platform_with(&[1, 1]);

    platform.update_house_fee(owner(), 6).unwrap();
    assert_eq!(platform.platform_stats().house_fee_percent, 6);

    platform.play_coinflip(player(), 0, 1_000_000).unwrap();
    assert_eq!(platform.platform_stats().house_balance, 60_000);

    assert_eq!(
        platform.update_house_fee(owner(), 21).unwrap_err(),
        PlatformError::FeeTooHigh { percent: 21, max: 20 }
    );

    platform.update_house_fee(owner(), 0).unwrap();
    platform.play_coinflip(player(), 0, 1_000_000).unwrap();
    assert_eq!(platform.platform_stats().house_balance, 60_000);
}

#[test]
fn paused_platform_rejects_every_game() {
    let platform = platform_with(&[0]);
    platform.set_contract_paused(owner(), true).unwrap();

    assert_eq!(
        platform.play_coinflip(player(), 0, 1_000_000).unwrap_err(),
        PlatformError::ContractPaused
    );
    assert_eq!(
        platform.play_diceroll(player(), 3, 1_000_000).unwrap_err(),
        PlatformError::ContractPaused
    );
    assert_eq!(
        platform.play_roulette(player(), 1, 0, 1_000_000).unwrap_err(),
        PlatformError::ContractPaused
    );

    platform.set_contract_paused(owner(), false).unwrap();
    assert!(platform.play_coinflip(player(), 0, 1_000_000).is_ok());
}

#[test]
fn emergency_refund_marks_completed_game_refunded() {
    let platform = platform_with(&[0]);
    let receipt = platform.play_coinflip(player(), 0, 1_000_000).unwrap();
    assert_eq!(platform.game(receipt.game_id).unwrap().status, GameStatus::Completed);

    platform.emergency_refund(owner(), receipt.game_id).unwrap();
    assert_eq!(platform.game(receipt.game_id).unwrap().status, GameStatus::Refunded);

    assert_eq!(
        platform.emergency_refund(owner(), 999).unwrap_err(),
        PlatformError::GameNotFound(999)
    );
    assert_eq!(
        platform.emergency_refund(player(), receipt.game_id).unwrap_err(),
        PlatformError::NotAuthorized
    );
}
