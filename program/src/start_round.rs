use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Opens a fresh round after a cancellation.
///
/// Normal resolution opens the next round by itself; this only exists to
/// move past a cancelled round, whose bets stay refundable under their own
/// round id.
pub fn process_start_round(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("StartRound");

    // Load accounts.
    // Account layout:
    // 0: signer (operator)
    // 1: board - round pointer PDA
    // 2: config - program config PDA
    // 3: round - current (cancelled) round PDA
    // 4: next_round - next round PDA (created here)
    // 5: system_program
    let [signer_info, board_info, config_info, round_info, next_round_info, system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    board_info.is_writable()?.has_seeds(&[BOARD], &danhde_api::ID)?;
    config_info.has_address(&CONFIG_ADDRESS)?;
    next_round_info.is_writable()?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    if config.operator != *signer_info.key {
        sol_log("Signer is not the operator");
        return Err(DanhdeError::NotOperator.into());
    }

    let board = board_info.as_account_mut::<Board>(&danhde_api::ID)?;
    let round_id = board.round_id;
    let next_round_id = round_id
        .checked_add(1)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    round_info.has_seeds(&[ROUND, &round_id.to_le_bytes()], &danhde_api::ID)?;
    next_round_info
        .is_empty()?
        .has_seeds(&[ROUND, &next_round_id.to_le_bytes()], &danhde_api::ID)?;

    let round = round_info.as_account::<Round>(&danhde_api::ID)?;
    if !round.is_cancelled() {
        sol_log("Current round is still live");
        return Err(DanhdeError::RoundStillLive.into());
    }

    let clock = Clock::get()?;
    create_program_account::<Round>(
        next_round_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[ROUND, &next_round_id.to_le_bytes()],
    )?;
    let next_round = next_round_info.as_account_mut::<Round>(&danhde_api::ID)?;
    next_round.id = next_round_id;
    next_round.start_time = clock.unix_timestamp;
    next_round.end_time = clock.unix_timestamp + config.round_duration;
    next_round.result_time = 0;
    next_round.winning_number = 0;
    next_round.cancelled = 0;
    next_round.total_wagered_value = 0;
    next_round.total_bets = 0;
    board.round_id = next_round_id;

    RoundStarted {
        round_id: next_round_id,
        start_time: next_round.start_time,
        end_time: next_round.end_time,
    }
    .log();

    sol_log(&format!("Round {} open", next_round_id));

    Ok(())
}
