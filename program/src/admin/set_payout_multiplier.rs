use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::assert_admin;

/// Updates the payout multiplier. Bets already on the ledger keep the
/// multiplier they were placed under.
pub fn process_set_payout_multiplier(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetPayoutMultiplier::try_from_bytes(data)?;
    let multiplier = u64::from_le_bytes(args.multiplier);

    sol_log(&format!("SetPayoutMultiplier: multiplier={}", multiplier));

    // Load accounts.
    let [signer_info, config_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    config_info.is_writable()?;

    if multiplier == 0 || multiplier > MAX_PAYOUT_MULTIPLIER {
        return Err(DanhdeError::InvalidMultiplier.into());
    }

    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    let previous = config.payout_multiplier;
    config.payout_multiplier = multiplier;

    PayoutMultiplierUpdated {
        previous,
        current: multiplier,
    }
    .log();

    Ok(())
}
