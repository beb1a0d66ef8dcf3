use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Hands the admin role to a new address.
pub fn process_set_admin(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetAdmin::try_from_bytes(data)?;

    sol_log(&format!("SetAdmin: new_admin={}", args.new_admin));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.admin = args.new_admin;

    Ok(())
}
