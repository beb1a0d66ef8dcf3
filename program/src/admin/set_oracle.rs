use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Enables or disables oracle-driven resolution. Pass the default pubkey to
/// disable.
pub fn process_set_oracle(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetOracle::try_from_bytes(data)?;

    sol_log(&format!("SetOracle: oracle={}", args.oracle));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.oracle = args.oracle;

    Ok(())
}
