use danhde_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::program_pack::Pack;
use steel::*;

use super::assert_admin;

/// Sweeps a token's surplus custody to the treasury.
///
/// Only the balance above the asset's outstanding payout reservations can
/// leave the vault, so pending claims and refunds stay covered.
pub fn process_emergency_withdraw(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("EmergencyWithdraw");

    // Load accounts.
    // Account layout:
    // 0: signer (admin)
    // 1: config - program config PDA
    // 2: asset_config - per-mint config PDA
    // 3: mint - token mint
    // 4: vault - vault PDA (authority for custody token accounts)
    // 5: vault_ata - vault's token account for the mint
    // 6: treasury - treasury address from config
    // 7: treasury_ata - treasury's token account for the mint
    // 8: system_program
    // 9: token_program
    // 10: associated_token_program
    let [signer_info, config_info, asset_config_info, mint_info, vault_info, vault_ata, treasury_info, treasury_ata, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    assert_admin(signer_info, config_info)?;
    asset_config_info.has_seeds(&[ASSET, &mint_info.key.to_bytes()], &danhde_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    vault_ata.is_writable()?;
    treasury_ata.is_writable()?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    treasury_info.has_address(&config.treasury)?;

    let asset_config = asset_config_info.as_account::<AssetConfig>(&danhde_api::ID)?;
    vault_ata.as_associated_token_account(vault_info.key, mint_info.key)?;
    let vault_balance = spl_token::state::Account::unpack(&vault_ata.data.borrow())?.amount;

    // Only the unreserved surplus may leave.
    let amount = vault_balance.saturating_sub(asset_config.reserved);
    if amount == 0 {
        sol_log("No surplus custody to withdraw");
        return Ok(());
    }

    // Create the treasury token account if it doesn't exist.
    if treasury_ata.data_is_empty() {
        create_associated_token_account(
            signer_info,
            treasury_info,
            treasury_ata,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
    } else {
        treasury_ata.as_associated_token_account(treasury_info.key, mint_info.key)?;
    }

    // Transfer the surplus from the vault to the treasury.
    transfer_signed(
        vault_info,
        vault_ata,
        treasury_ata,
        token_program,
        amount,
        &[VAULT],
    )?;

    sol_log(&format!(
        "Withdrew {} to treasury (reserved {} stays)",
        amount, asset_config.reserved
    ));

    Ok(())
}
