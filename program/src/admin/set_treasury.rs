use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Points emergency withdrawals at a new treasury address.
pub fn process_set_treasury(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetTreasury::try_from_bytes(data)?;

    sol_log(&format!("SetTreasury: new_treasury={}", args.new_treasury));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.treasury = args.new_treasury;

    Ok(())
}
