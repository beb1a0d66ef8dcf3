use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Hands the oracle feed authority to a new address.
pub fn process_set_oracle_authority(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetOracleAuthority::try_from_bytes(data)?;

    sol_log(&format!("SetOracleAuthority: new_authority={}", args.new_authority));

    // Load accounts.
    let [signer_info, config_info, oracle_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    oracle_info
        .is_writable()?
        .has_seeds(&[ORACLE], &danhde_api::ID)?;

    let oracle = oracle_info.as_account_mut::<Oracle>(&danhde_api::ID)?;
    oracle.authority = args.new_authority;

    Ok(())
}
