use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Cancels a round, making every bet in it refundable.
/// Operator only; a resolved round can no longer be cancelled.
pub fn process_cancel_round(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("CancelRound");

    // Load accounts.
    // Account layout:
    // 0: signer (operator)
    // 1: config - program config PDA
    // 2: round - round PDA
    let [signer_info, config_info, round_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_address(&CONFIG_ADDRESS)?;
    round_info.is_writable()?;

    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    if config.operator != *signer_info.key {
        sol_log("Signer is not the operator");
        return Err(DanhdeError::NotOperator.into());
    }

    let round = round_info.as_account_mut::<Round>(&danhde_api::ID)?;
    if round.has_result() {
        sol_log("Result already set");
        return Err(DanhdeError::ResultAlreadySet.into());
    }
    if round.is_cancelled() {
        return Err(DanhdeError::RoundCancelled.into());
    }

    round.cancelled = 1;

    RoundCancelled { round_id: round.id }.log();

    sol_log(&format!("Round {} cancelled", round.id));

    Ok(())
}
