use danhde_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::program_pack::Pack;
use steel::*;

use super::assert_admin;

/// Registers a token for wagering or updates its rate and enabled flag.
///
/// Creates the per-mint config on first use, snapshotting the mint's
/// decimals, and makes sure the vault has a custody account for it.
pub fn process_set_asset_config(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SetAssetConfig::try_from_bytes(data)?;
    let enabled = args.enabled != 0;
    let rate = u64::from_le_bytes(args.rate);

    sol_log(&format!("SetAssetConfig: enabled={}, rate={}", enabled, rate));

    // Load accounts.
    // Account layout:
    // 0: signer (admin)
    // 1: config - program config PDA
    // 2: asset_config - per-mint config PDA
    // 3: mint - token mint
    // 4: vault - vault PDA
    // 5: vault_ata - vault's token account for the mint
    // 6: system_program
    // 7: token_program
    // 8: associated_token_program
    let [signer_info, config_info, asset_config_info, mint_info, vault_info, vault_ata, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    asset_config_info
        .is_writable()?
        .has_seeds(&[ASSET, &mint_info.key.to_bytes()], &danhde_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    vault_ata.is_writable()?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    // An enabled asset needs a nonzero rate to value wagers.
    if enabled && rate == 0 {
        return Err(DanhdeError::InvalidAmount.into());
    }

    mint_info.as_mint()?;
    let decimals = spl_token::state::Mint::unpack(&mint_info.data.borrow())?.decimals;

    // Create the asset config on first registration.
    let asset_config = if asset_config_info.data_is_empty() {
        create_program_account::<AssetConfig>(
            asset_config_info,
            system_program,
            signer_info,
            &danhde_api::ID,
            &[ASSET, &mint_info.key.to_bytes()],
        )?;
        let asset_config = asset_config_info.as_account_mut::<AssetConfig>(&danhde_api::ID)?;
        asset_config.mint = *mint_info.key;
        asset_config.reserved = 0;
        asset_config
    } else {
        asset_config_info.as_account_mut::<AssetConfig>(&danhde_api::ID)?
    };

    asset_config.enabled = enabled as u8;
    asset_config.decimals = decimals;
    asset_config.rate = rate;

    // Make sure the vault can take custody of this token.
    if vault_ata.data_is_empty() {
        create_associated_token_account(
            signer_info,
            vault_info,
            vault_ata,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
        sol_log("Created vault token account");
    }

    sol_log(&format!(
        "Asset {} configured: enabled={}, rate={}, decimals={}",
        mint_info.key, enabled, rate, decimals
    ));

    Ok(())
}
