use danhde_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::program_pack::Pack;
use steel::*;

/// Pays out a winning bet from the vault.
///
/// The payout is amount times the multiplier snapshotted at placement, in
/// the wagered token. Marks the bet paid before the transfer so a bet can
/// never be claimed twice.
pub fn process_claim_winnings(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    sol_log("ClaimWinnings");

    // Load accounts.
    // Account layout:
    // 0: signer (bet owner)
    // 1: round - the bet's round PDA
    // 2: bet - bet PDA
    // 3: asset_config - per-mint config PDA
    // 4: mint - wagered token mint
    // 5: vault - vault PDA (authority for custody token accounts)
    // 6: vault_ata - vault's token account for the mint
    // 7: beneficiary_ata - signer's token account for the mint
    // 8: system_program
    // 9: token_program
    // 10: associated_token_program
    let [signer_info, round_info, bet_info, asset_config_info, mint_info, vault_info, vault_ata, beneficiary_ata, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    bet_info.is_writable()?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    vault_ata.is_writable()?;
    beneficiary_ata.is_writable()?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    // Load the bet and bind the remaining accounts to it.
    let bet = bet_info.as_account_mut::<Bet>(&danhde_api::ID)?;
    if bet.player != *signer_info.key {
        sol_log("Not your bet");
        return Err(DanhdeError::NotBetOwner.into());
    }
    round_info.has_seeds(&[ROUND, &bet.round_id.to_le_bytes()], &danhde_api::ID)?;
    asset_config_info
        .is_writable()?
        .has_seeds(&[ASSET, &bet.mint.to_bytes()], &danhde_api::ID)?;
    mint_info.has_address(&bet.mint)?;
    let round = round_info.as_account::<Round>(&danhde_api::ID)?;
    let asset_config = asset_config_info.as_account_mut::<AssetConfig>(&danhde_api::ID)?;

    // The round must be resolved and the bet must have hit the number.
    if round.is_cancelled() {
        return Err(DanhdeError::RoundCancelled.into());
    }
    if !round.has_result() {
        return Err(DanhdeError::ResultNotSet.into());
    }
    if !bet.is_winner(round) {
        sol_log("Not a winning bet");
        return Err(DanhdeError::NotWinningBet.into());
    }
    if bet.is_settled() {
        sol_log("Bet already settled");
        return Err(DanhdeError::AlreadyClaimed.into());
    }

    let payout = bet.payout().ok_or(DanhdeError::ArithmeticOverflow)?;
    vault_ata.as_associated_token_account(vault_info.key, mint_info.key)?;
    let vault_balance = spl_token::state::Account::unpack(&vault_ata.data.borrow())?.amount;
    if vault_balance < payout {
        sol_log("Insufficient custody balance for payout");
        return Err(DanhdeError::InsufficientLiquidity.into());
    }

    // Settle BEFORE the transfer (Check-Effects-Interactions).
    bet.settlement = Settlement::PaidWin as u8;
    asset_config.reserved = asset_config.reserved.saturating_sub(payout);

    // Create the beneficiary token account if it doesn't exist.
    if beneficiary_ata.data_is_empty() {
        create_associated_token_account(
            signer_info,
            signer_info,
            beneficiary_ata,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
    } else {
        beneficiary_ata.as_associated_token_account(signer_info.key, mint_info.key)?;
    }

    // Transfer the payout from the vault to the winner.
    transfer_signed(
        vault_info,
        vault_ata,
        beneficiary_ata,
        token_program,
        payout,
        &[VAULT],
    )?;

    BetClaimed {
        bet_id: bet.id,
        player: *signer_info.key,
        payout,
    }
    .log();

    sol_log(&format!("Bet {} paid out {}", bet.id, payout));

    Ok(())
}
