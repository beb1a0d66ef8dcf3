use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::resolve::resolve_and_advance;

/// Sets the winning number for the current round directly.
/// Operator only; the round must have ended.
pub fn process_set_result(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetResult::try_from_bytes(data)?;
    let number = args.number;

    sol_log(&format!("SetResult: number={}", number));

    // Load accounts.
    // Account layout:
    // 0: signer (operator)
    // 1: board - round pointer PDA
    // 2: config - program config PDA
    // 3: round - current round PDA
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
    round_info.is_writable()?;
    next_round_info.is_writable()?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    if config.operator != *signer_info.key {
        sol_log("Signer is not the operator");
        return Err(DanhdeError::NotOperator.into());
    }

    if number > MAX_NUMBER {
        return Err(DanhdeError::InvalidNumber.into());
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
