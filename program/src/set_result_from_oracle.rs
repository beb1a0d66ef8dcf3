use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::resolve::resolve_and_advance;

/// Resolves the current round from a recorded oracle draw result.
/// Operator only; an oracle must be configured and the draw must already be
/// on chain.
pub fn process_set_result_from_oracle(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetResultFromOracle::try_from_bytes(data)?;
    let draw_id_len = args.draw_id_len as usize;
    if draw_id_len == 0 || draw_id_len > MAX_DRAW_ID_LEN {
        return Err(DanhdeError::InvalidDrawId.into());
    }
    let draw_id = &args.draw_id[..draw_id_len];

    sol_log("SetResultFromOracle");

    // Load accounts.
    // Account layout:
    // 0: signer (operator)
    // 1: board - round pointer PDA
    // 2: config - program config PDA
    // 3: round - current round PDA
    // 4: next_round - next round PDA (created here)
    // 5: oracle_result - recorded draw result PDA
    // 6: system_program
    let [signer_info, board_info, config_info, round_info, next_round_info, oracle_result_info, system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    board_info.is_writable()?.has_seeds(&[BOARD], &danhde_api::ID)?;
    config_info.has_address(&CONFIG_ADDRESS)?;
    round_info.is_writable()?;
    next_round_info.is_writable()?;
    oracle_result_info.has_seeds(&[ORACLE_RESULT, draw_id], &danhde_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    if config.operator != *signer_info.key {
        sol_log("Signer is not the operator");
        return Err(DanhdeError::NotOperator.into());
    }
    if !config.has_oracle() {
        sol_log("Oracle not set");
        return Err(DanhdeError::OracleNotSet.into());
    }

    // The draw must have been recorded by the feed.
    if oracle_result_info.data_is_empty() {
        sol_log("Oracle result not found");
        return Err(DanhdeError::ResultNotFound.into());
    }
    let result = oracle_result_info.as_account::<OracleResult>(&danhde_api::ID)?;
    let number = result.last_two_digits;
    if number > MAX_NUMBER {
        return Err(DanhdeError::InvalidLastTwoDigits.into());
    }

    resolve_and_advance(
        signer_info,
        board_info,
        round_info,
        next_round_info,
        system_program,
        config,
        number,
    )
}
