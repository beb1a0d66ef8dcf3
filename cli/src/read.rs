use anyhow::{anyhow, Context, Result};
use danhde_api::prelude::*;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use std::time::{SystemTime, UNIX_EPOCH};
use steel::AccountDeserialize;

// Byte offsets into Bet account data (8-byte discriminator first).
const BET_PLAYER_OFFSET: usize = 16;
const BET_ROUND_ID_OFFSET: usize = 80;

fn now_ts() -> Result<i64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("clock before unix epoch")?
        .as_secs() as i64)
}

pub async fn fetch<T: AccountDeserialize + Copy>(
    client: &RpcClient,
    address: Pubkey,
) -> Result<T> {
    let data = client
        .get_account_data(&address)
        .await
        .with_context(|| format!("account {} not found", address))?;
    let value = T::try_from_bytes(&data).map_err(|e| anyhow!("bad account data: {:?}", e))?;
    Ok(*value)
}

fn status_name(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Open => "open",
        RoundStatus::Pending => "pending result",
        RoundStatus::Finished => "finished",
        RoundStatus::Cancelled => "cancelled",
    }
}

pub async fn show_config(client: &RpcClient) -> Result<()> {
    let config: Config = fetch(client, CONFIG_ADDRESS).await?;
    println!("config: {}", CONFIG_ADDRESS);
    println!("  admin:             {}", config.admin);
    println!("  operator:          {}", config.operator);
    println!("  treasury:          {}", config.treasury);
    if config.has_oracle() {
        println!("  oracle:            {}", config.oracle);
    } else {
        println!("  oracle:            (not set)");
    }
    println!("  payout multiplier: {}x", config.payout_multiplier);
    println!("  min bet value:     {} VND units", config.min_bet_value);
    println!("  max bet value:     {} VND units", config.max_bet_value);
    println!("  round duration:    {}s", config.round_duration);
    Ok(())
}

pub async fn show_board(client: &RpcClient) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    println!("board: {}", BOARD_ADDRESS);
    println!("  current round: {}", board.round_id);
    println!("  next bet id:   {}", board.next_bet_id);
    Ok(())
}

pub async fn show_oracle(client: &RpcClient) -> Result<()> {
    let oracle: Oracle = fetch(client, ORACLE_ADDRESS).await?;
    println!("oracle: {}", ORACLE_ADDRESS);
    println!("  authority:     {}", oracle.authority);
    println!("  total results: {}", oracle.total_results);
    if oracle.has_result() {
        println!(
            "  latest draw:   {}",
            String::from_utf8_lossy(oracle.latest_draw_id_bytes())
        );
        println!("  latest number: {}", oracle.latest_full_number);
        println!("  latest digits: {:02}", oracle.latest_last_two_digits);
        println!("  submitted at:  {}", oracle.latest_timestamp);
    } else {
        println!("  latest draw:   (none)");
    }
    Ok(())
}

pub async fn show_round(client: &RpcClient, id: Option<u64>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => fetch::<Board>(client, BOARD_ADDRESS).await?.round_id,
    };
    let address = round_pda(id).0;
    let round: Round = fetch(client, address).await?;
    let status = round.status(now_ts()?);
    println!("round {}: {}", id, address);
    println!("  status:        {}", status_name(status));
    println!("  start time:    {}", round.start_time);
    println!("  end time:      {}", round.end_time);
    if round.has_result() {
        println!("  winning number: {:02}", round.winning_number);
        println!("  result time:    {}", round.result_time);
    }
    println!("  total bets:    {}", round.total_bets);
    println!("  total wagered: {} VND units", round.total_wagered_value);
    Ok(())
}

fn print_bet(bet: &Bet, round: Option<&Round>) {
    println!("bet {}: {}", bet.id, bet_pda(bet.id).0);
    println!("  player:     {}", bet.player);
    println!("  mint:       {}", bet.mint);
    println!("  round:      {}", bet.round_id);
    println!("  number:     {:02}", bet.number);
    println!("  amount:     {}", bet.amount);
    println!("  multiplier: {}x", bet.payout_multiplier);
    println!("  settlement: {:?}", bet.settlement());
    if let Some(round) = round {
        if round.is_cancelled() {
            println!("  outcome:    refundable (round cancelled)");
        } else if !round.has_result() {
            println!("  outcome:    round unresolved");
        } else if bet.is_winner(round) {
            match bet.payout() {
                Some(payout) => println!("  outcome:    WON, payout {}", payout),
                None => println!("  outcome:    WON, payout overflows"),
            }
        } else {
            println!("  outcome:    lost");
        }
    }
}

pub async fn show_bet(client: &RpcClient, id: u64) -> Result<()> {
    let bet: Bet = fetch(client, bet_pda(id).0).await?;
    let round: Round = fetch(client, round_pda(bet.round_id).0).await?;
    print_bet(&bet, Some(&round));
    Ok(())
}

async fn scan_bets(client: &RpcClient, extra: RpcFilterType) -> Result<Vec<Bet>> {
    let filters = vec![
        RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
            0,
            vec![DanhdeAccount::Bet as u8],
        )),
        extra,
    ];
    let config = RpcProgramAccountsConfig {
        filters: Some(filters),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            ..Default::default()
        },
        ..Default::default()
    };
    let accounts = client
        .get_program_accounts_with_config(&danhde_api::ID, config)
        .await?;
    let mut bets = Vec::with_capacity(accounts.len());
    for (address, account) in accounts {
        let bet = Bet::try_from_bytes(&account.data)
            .map_err(|e| anyhow!("bad bet account {}: {:?}", address, e))?;
        bets.push(*bet);
    }
    bets.sort_by_key(|b| b.id);
    Ok(bets)
}

pub async fn list_player_bets(client: &RpcClient, player: Pubkey) -> Result<()> {
    let filter = RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
        BET_PLAYER_OFFSET,
        player.to_bytes().to_vec(),
    ));
    let bets = scan_bets(client, filter).await?;
    println!("{} bets for {}", bets.len(), player);
    for bet in bets {
        print_bet(&bet, None);
    }
    Ok(())
}

pub async fn list_round_bets(client: &RpcClient, round_id: u64) -> Result<()> {
    let filter = RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
        BET_ROUND_ID_OFFSET,
        round_id.to_le_bytes().to_vec(),
    ));
    let bets = scan_bets(client, filter).await?;
    let round: Round = fetch(client, round_pda(round_id).0).await?;
    println!("{} bets in round {}", bets.len(), round_id);
    for bet in bets {
        print_bet(&bet, Some(&round));
    }
    Ok(())
}

pub async fn show_asset_value(client: &RpcClient, mint: Pubkey, amount: u64) -> Result<()> {
    let asset: AssetConfig = fetch(client, asset_config_pda(&mint).0).await?;
    println!("asset {}: {}", mint, asset_config_pda(&mint).0);
    println!("  enabled:  {}", asset.is_enabled());
    println!("  decimals: {}", asset.decimals);
    println!("  rate:     {} VND per whole token", asset.rate);
    println!("  reserved: {}", asset.reserved);
    let vault_ata = get_associated_token_address(&VAULT_ADDRESS, &mint);
    match client.get_token_account_balance(&vault_ata).await {
        Ok(balance) => println!("  custody:  {}", balance.amount),
        Err(_) => println!("  custody:  0 (no vault account)"),
    }
    if amount > 0 {
        match asset.vnd_value(amount) {
            Some(value) => println!("  value of {}: {} VND units", amount, value),
            None => println!("  value of {}: overflows", amount),
        }
    }
    Ok(())
}
