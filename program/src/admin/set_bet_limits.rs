use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Updates the VND bet limits. Only affects bets placed afterwards.
pub fn process_set_bet_limits(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetBetLimits::try_from_bytes(data)?;
    let min_bet_value = u64::from_le_bytes(args.min_bet_value);
    let max_bet_value = u64::from_le_bytes(args.max_bet_value);

    sol_log(&format!("SetBetLimits: min={}, max={}", min_bet_value, max_bet_value));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    if min_bet_value == 0 || min_bet_value > max_bet_value {
        return Err(DanhdeError::InvalidBetLimits.into());
    }

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.min_bet_value = min_bet_value;
    config.max_bet_value = max_bet_value;

    Ok(())
}
