use anyhow::Result;
use danhde_api::sdk;
use danhde_api::state::{bet_pda, Bet, Board, Config};
use danhde_api::consts::{BOARD_ADDRESS, CONFIG_ADDRESS};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::read::fetch;

async fn submit(client: &RpcClient, payer: &Keypair, ix: Instruction) -> Result<()> {
    let blockhash = client.get_latest_blockhash().await?;
    let tx =
        Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], blockhash);
    let sig = client.send_and_confirm_transaction(&tx).await?;
    println!("{}", sig);
    Ok(())
}

pub async fn place_bet(
    client: &RpcClient,
    payer: &Keypair,
    mint: Pubkey,
    number: u8,
    amount: u64,
) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    let ix = sdk::place_bet(
        payer.pubkey(),
        mint,
        board.round_id,
        board.next_bet_id,
        amount,
        number,
    );
    println!(
        "placing bet {} on {:02} in round {}",
        board.next_bet_id, number, board.round_id
    );
    submit(client, payer, ix).await
}

pub async fn claim_winnings(client: &RpcClient, payer: &Keypair, bet_id: u64) -> Result<()> {
    let bet: Bet = fetch(client, bet_pda(bet_id).0).await?;
    let ix = sdk::claim_winnings(payer.pubkey(), bet.mint, bet.round_id, bet_id);
    submit(client, payer, ix).await
}

pub async fn claim_refund(client: &RpcClient, payer: &Keypair, bet_id: u64) -> Result<()> {
    let bet: Bet = fetch(client, bet_pda(bet_id).0).await?;
    let ix = sdk::claim_refund(payer.pubkey(), bet.mint, bet.round_id, bet_id);
    submit(client, payer, ix).await
}

pub async fn close_bet(client: &RpcClient, payer: &Keypair, bet_id: u64) -> Result<()> {
    let bet: Bet = fetch(client, bet_pda(bet_id).0).await?;
    let ix = sdk::close_bet(payer.pubkey(), bet.mint, bet.round_id, bet_id);
    submit(client, payer, ix).await
}

pub async fn set_result(client: &RpcClient, payer: &Keypair, number: u8) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    let ix = sdk::set_result(payer.pubkey(), board.round_id, number);
    submit(client, payer, ix).await
}

pub async fn set_result_from_oracle(
    client: &RpcClient,
    payer: &Keypair,
    draw_id: &str,
) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    let ix = sdk::set_result_from_oracle(payer.pubkey(), board.round_id, draw_id.as_bytes());
    submit(client, payer, ix).await
}

pub async fn cancel_round(client: &RpcClient, payer: &Keypair) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    let ix = sdk::cancel_round(payer.pubkey(), board.round_id);
    submit(client, payer, ix).await
}

pub async fn start_round(client: &RpcClient, payer: &Keypair) -> Result<()> {
    let board: Board = fetch(client, BOARD_ADDRESS).await?;
    let ix = sdk::start_round(payer.pubkey(), board.round_id);
    submit(client, payer, ix).await
}

pub async fn submit_result(
    client: &RpcClient,
    payer: &Keypair,
    draw_id: &str,
    full_number: u64,
) -> Result<()> {
    let ix = sdk::submit_result(payer.pubkey(), draw_id.as_bytes(), full_number);
    submit(client, payer, ix).await
}

pub async fn submit_result_explicit(
    client: &RpcClient,
    payer: &Keypair,
    draw_id: &str,
    last_two_digits: u8,
    full_number: u64,
) -> Result<()> {
    let ix = sdk::submit_result_explicit(
        payer.pubkey(),
        draw_id.as_bytes(),
        last_two_digits,
        full_number,
    );
    submit(client, payer, ix).await
}

pub async fn initialize(client: &RpcClient, payer: &Keypair) -> Result<()> {
    let ix = sdk::initialize(payer.pubkey());
    submit(client, payer, ix).await
}

pub async fn set_asset_config(
    client: &RpcClient,
    payer: &Keypair,
    mint: Pubkey,
    enabled: bool,
    rate: u64,
) -> Result<()> {
    let ix = sdk::set_asset_config(payer.pubkey(), mint, enabled, rate);
    submit(client, payer, ix).await
}

pub async fn set_bet_limits(
    client: &RpcClient,
    payer: &Keypair,
    min: u64,
    max: u64,
) -> Result<()> {
    let ix = sdk::set_bet_limits(payer.pubkey(), min, max);
    submit(client, payer, ix).await
}

pub async fn set_payout_multiplier(
    client: &RpcClient,
    payer: &Keypair,
    multiplier: u64,
) -> Result<()> {
    let ix = sdk::set_payout_multiplier(payer.pubkey(), multiplier);
    submit(client, payer, ix).await
}

pub async fn set_admin(client: &RpcClient, payer: &Keypair, new_admin: Pubkey) -> Result<()> {
    let ix = sdk::set_admin(payer.pubkey(), new_admin);
    submit(client, payer, ix).await
}

pub async fn set_operator(client: &RpcClient, payer: &Keypair, new_operator: Pubkey) -> Result<()> {
    let ix = sdk::set_operator(payer.pubkey(), new_operator);
    submit(client, payer, ix).await
}

pub async fn set_treasury(client: &RpcClient, payer: &Keypair, new_treasury: Pubkey) -> Result<()> {
    let ix = sdk::set_treasury(payer.pubkey(), new_treasury);
    submit(client, payer, ix).await
}

pub async fn set_oracle(client: &RpcClient, payer: &Keypair, oracle: Pubkey) -> Result<()> {
    let ix = sdk::set_oracle(payer.pubkey(), oracle);
    submit(client, payer, ix).await
}

pub async fn set_oracle_authority(
    client: &RpcClient,
    payer: &Keypair,
    new_authority: Pubkey,
) -> Result<()> {
    let ix = sdk::set_oracle_authority(payer.pubkey(), new_authority);
    submit(client, payer, ix).await
}

pub async fn emergency_withdraw(client: &RpcClient, payer: &Keypair, mint: Pubkey) -> Result<()> {
    let config: Config = fetch(client, CONFIG_ADDRESS).await?;
    let ix = sdk::emergency_withdraw(payer.pubkey(), mint, config.treasury);
    submit(client, payer, ix).await
}
