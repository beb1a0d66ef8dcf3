use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Closes a losing bet and releases its payout reservation.
///
/// Permissionless crank. Bets reserve their full potential payout at
/// placement; without this instruction a losing bet would pin that custody
/// forever and starve later rounds of liquidity.
pub fn process_close_bet(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("CloseBet: permissionless settlement");

    // Load accounts.
    // Account layout:
    // 0: signer (anyone - doesn't need to be the bet owner)
    // 1: round - the bet's round PDA
    // 2: bet - bet PDA
    // 3: asset_config - per-mint config PDA
    let [signer_info, round_info, bet_info, asset_config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    bet_info.is_writable()?;

    let bet = bet_info.as_account_mut::<Bet>(&danhde_api::ID)?;
    round_info.has_seeds(&[ROUND, &bet.round_id.to_le_bytes()], &danhde_api::ID)?;
    asset_config_info
        .is_writable()?
        .has_seeds(&[ASSET, &bet.mint.to_bytes()], &danhde_api::ID)?;
    let round = round_info.as_account::<Round>(&danhde_api::ID)?;
    let asset_config = asset_config_info.as_account_mut::<AssetConfig>(&danhde_api::ID)?;

    // Only a settled-by-the-clock loser can be closed. Cancelled rounds go
    // through the refund path instead.
    if round.is_cancelled() {
        return Err(DanhdeError::RoundCancelled.into());
    }
    if !round.has_result() {
        sol_log("Round has no result yet");
        return Err(DanhdeError::ResultNotSet.into());
    }
    if bet.is_winner(round) {
        sol_log("Bet did not lose");
        return Err(DanhdeError::NotLosingBet.into());
    }
    if bet.is_settled() {
        sol_log("Bet already settled");
        return Err(DanhdeError::AlreadyClaimed.into());
    }

    let reservation = bet.payout().ok_or(DanhdeError::ArithmeticOverflow)?;

    // The house keeps the wager; only the reservation is released.
    bet.settlement = Settlement::Forfeited as u8;
    asset_config.reserved = asset_config.reserved.saturating_sub(reservation);

    BetForfeited {
        bet_id: bet.id,
        round_id: bet.round_id,
    }
    .log();

    sol_log(&format!(
        "Bet {} forfeited, reserved now {}",
        bet.id, asset_config.reserved
    ));

    Ok(())
}
