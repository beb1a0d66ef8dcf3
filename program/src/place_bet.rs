use danhde_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::program::invoke;
use solana_program::program_pack::Pack;
use steel::*;

/// Places a bet on a two-digit number in the current round.
///
/// The wager is valued in VND through the token's asset config and checked
/// against the configured limits. The full potential payout is reserved in
/// the asset's custody so a later claim can never find the vault short.
pub fn process_place_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = PlaceBet::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);
    let number = args.number;

    sol_log(&format!("PlaceBet: number={}, amount={}", number, amount));

    // Load accounts.
    // Account layout:
    // 0: signer
    // 1: board - round pointer and bet counter PDA
    // 2: config - program config PDA
    // 3: round - current round PDA
    // 4: bet - new bet PDA
    // 5: asset_config - per-mint config PDA
    // 6: mint - wagered token mint
    // 7: vault - vault PDA (owner of custody token accounts)
    // 8: vault_ata - vault's token account for the mint
    // 9: signer_ata - signer's token account for the mint
    // 10: system_program
    // 11: token_program
    // 12: associated_token_program
    let [signer_info, board_info, config_info, round_info, bet_info, asset_config_info, mint_info, vault_info, vault_ata, signer_ata, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    board_info.is_writable()?.has_seeds(&[BOARD], &danhde_api::ID)?;
    config_info.has_address(&CONFIG_ADDRESS)?;
    round_info.is_writable()?;
    bet_info.is_empty()?.is_writable()?;
    asset_config_info
        .is_writable()?
        .has_seeds(&[ASSET, &mint_info.key.to_bytes()], &danhde_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    vault_ata.is_writable()?;
    signer_ata.is_writable()?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    // Validate the picked number and raw amount.
    if number > MAX_NUMBER {
        return Err(DanhdeError::InvalidNumber.into());
    }
    if amount == 0 {
        return Err(DanhdeError::InvalidAmount.into());
    }

    // Load state.
    let board = board_info.as_account_mut::<Board>(&danhde_api::ID)?;
    let config = config_info.as_account::<Config>(&danhde_api::ID)?;
    let asset_config = asset_config_info.as_account_mut::<AssetConfig>(&danhde_api::ID)?;

    // The round and bet accounts must be the board's current round and the
    // next bet slot.
    round_info.has_seeds(&[ROUND, &board.round_id.to_le_bytes()], &danhde_api::ID)?;
    bet_info.has_seeds(&[BET, &board.next_bet_id.to_le_bytes()], &danhde_api::ID)?;
    let round = round_info.as_account_mut::<Round>(&danhde_api::ID)?;

    // The token must be registered and enabled.
    if !asset_config.is_enabled() {
        sol_log("Token not supported");
        return Err(DanhdeError::TokenNotSupported.into());
    }

    // Betting must still be open.
    let clock = Clock::get()?;
    if round.is_cancelled() {
        return Err(DanhdeError::RoundCancelled.into());
    }
    if !round.is_open(clock.unix_timestamp) {
        sol_log("Betting is closed for this round");
        return Err(DanhdeError::BettingClosed.into());
    }

    // Value the wager in VND and enforce the limits. The conversion
    // truncates, so a dust wager that rounds to zero is rejected outright.
    let value = asset_config
        .vnd_value(amount)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    if value == 0 {
        return Err(DanhdeError::ZeroValueBet.into());
    }
    if value < config.min_bet_value {
        sol_log(&format!("Bet value {} below minimum {}", value, config.min_bet_value));
        return Err(DanhdeError::BetBelowMinimum.into());
    }
    if value > config.max_bet_value {
        sol_log(&format!("Bet value {} above maximum {}", value, config.max_bet_value));
        return Err(DanhdeError::BetAboveMaximum.into());
    }

    // Reserve the full potential payout in the wagered token.
    let max_payout = amount
        .checked_mul(config.payout_multiplier)
        .ok_or(DanhdeError::ArithmeticOverflow)?;

    // The custody (after this deposit) must cover every outstanding
    // reservation plus this one.
    let vault_balance = if vault_ata.data_is_empty() {
        0
    } else {
        vault_ata.as_associated_token_account(vault_info.key, mint_info.key)?;
        spl_token::state::Account::unpack(&vault_ata.data.borrow())?.amount
    };
    let available = vault_balance
        .checked_add(amount)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    let required = asset_config
        .reserved
        .checked_add(max_payout)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    if required > available {
        sol_log("Insufficient custody to cover potential payout");
        return Err(DanhdeError::InsufficientLiquidity.into());
    }

    // Record the bet.
    let bet_id = board.next_bet_id;
    create_program_account::<Bet>(
        bet_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[BET, &bet_id.to_le_bytes()],
    )?;
    let bet = bet_info.as_account_mut::<Bet>(&danhde_api::ID)?;
    bet.id = bet_id;
    bet.player = *signer_info.key;
    bet.mint = *mint_info.key;
    bet.round_id = round.id;
    bet.amount = amount;
    bet.payout_multiplier = config.payout_multiplier;
    bet.number = number;
    bet.settlement = Settlement::Unsettled as u8;

    // Update counters before the transfer (Check-Effects-Interactions).
    board.next_bet_id = board
        .next_bet_id
        .checked_add(1)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    round.total_wagered_value = round
        .total_wagered_value
        .checked_add(value)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    round.total_bets = round
        .total_bets
        .checked_add(1)
        .ok_or(DanhdeError::ArithmeticOverflow)?;
    asset_config.reserved = required;

    // Create the vault's token account if it doesn't exist.
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

    // Transfer the wager from the signer to the vault.
    invoke(
        &spl_token::instruction::transfer(
            &spl_token::ID,
            signer_ata.key,
            vault_ata.key,
            signer_info.key,
            &[],
            amount,
        )?,
        &[
            signer_ata.clone(),
            vault_ata.clone(),
            signer_info.clone(),
            token_program.clone(),
        ],
    )?;

    BetPlaced {
        bet_id,
        round_id: round.id,
        player: *signer_info.key,
        mint: *mint_info.key,
        amount,
        number: number as u64,
    }
    .log();

    sol_log(&format!(
        "Bet {} placed: round={}, value={}, reserved={}",
        bet_id, round.id, value, asset_config.reserved
    ));

    Ok(())
}
