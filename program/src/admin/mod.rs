//! Admin module - administrative functions

mod emergency_withdraw;
mod set_admin;
mod set_asset_config;
mod set_bet_limits;
mod set_oracle;
mod set_oracle_authority;
mod set_operator;
mod set_payout_multiplier;
mod set_treasury;

pub use emergency_withdraw::*;
pub use set_admin::*;
pub use set_asset_config::*;
pub use set_bet_limits::*;
pub use set_oracle::*;
pub use set_oracle_authority::*;
pub use set_operator::*;
pub use set_payout_multiplier::*;
pub use set_treasury::*;

use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Verify the signer holds the admin role.
pub(super) fn assert_admin(
    signer_info: &AccountInfo<'_>,
    config_info: &AccountInfo<'_>,
) -> ProgramResult {
    signer_info.is_signer()?;
    config_info.has_address(&CONFIG_ADDRESS)?;
    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    if config.admin != *signer_info.key {
        sol_log("Signer is not the admin");
        return Err(DanhdeError::NotAdmin.into());
    }
    Ok(())
}
