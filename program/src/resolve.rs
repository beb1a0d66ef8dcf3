use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Fixes the winning number on the board's current round and opens the next
/// one. Shared by direct and oracle-driven resolution.
///
/// Expects board/round/next_round already validated as writable; binds the
/// round accounts to the board's current pointer here.
pub fn resolve_and_advance<'a, 'info>(
    signer_info: &'a AccountInfo<'info>,
    board_info: &'a AccountInfo<'info>,
    round_info: &'a AccountInfo<'info>,
    next_round_info: &'a AccountInfo<'info>,
    system_program: &'a AccountInfo<'info>,
    config: &Config,
    number: u8,
) -> ProgramResult {
    let board = board_info.as_account_mut::<Board>(&danhde_api::ID)?;
    let round_id = board.round_id;
    let next_round_id = round_id
        .checked_add(1)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    round_info.has_seeds(&[ROUND, &round_id.to_le_bytes()], &danhde_api::ID)?;
    next_round_info
        .is_empty()?
        .has_seeds(&[ROUND, &next_round_id.to_le_bytes()], &danhde_api::ID)?;
    let round = round_info.as_account_mut::<Round>(&danhde_api::ID)?;

    let clock = Clock::get()?;
    if round.is_cancelled() {
        return Err(DanhdeError::RoundCancelled.into());
    }
    if round.has_result() {
        sol_log("Result already set");
        return Err(DanhdeError::ResultAlreadySet.into());
    }
    if round.is_open(clock.unix_timestamp) {
        sol_log("Round not ended");
        return Err(DanhdeError::RoundNotEnded.into());
    }

    // Fix the result.
    round.winning_number = number;
    round.result_time = clock.unix_timestamp;

    RoundResultSet {
        round_id,
        winning_number: number as u64,
        result_time: round.result_time,
    }
    .log();

    // Open the next round.
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

    sol_log(&format!(
        "Round {} resolved with number {}, round {} open",
        round_id, number, next_round_id
    ));

    Ok(())
}
