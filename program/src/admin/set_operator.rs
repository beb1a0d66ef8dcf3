use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Hands the operator role to a new address.
pub fn process_set_operator(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetOperator::try_from_bytes(data)?;

    sol_log(&format!("SetOperator: new_operator={}", args.new_operator));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.operator = args.new_operator;

    Ok(())
}
