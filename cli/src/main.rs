mod read;
mod send;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};

#[derive(Parser)]
#[command(name = "danhde", about = "DanhDe lottery program CLI", version)]
struct Args {
    /// RPC endpoint.
    #[arg(long, default_value = "http://127.0.0.1:8899", global = true)]
    rpc: String,

    /// Path to the fee payer keypair.
    #[arg(long, default_value = "~/.config/solana/id.json", global = true)]
    keypair: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the program config.
    Config,
    /// Show the board (current round pointer and bet counter).
    Board,
    /// Show the oracle and its latest submission.
    Oracle,
    /// Show a round (defaults to the current one).
    Round { id: Option<u64> },
    /// Show a bet, including whether it won and its payout.
    Bet { id: u64 },
    /// List a player's bets.
    PlayerBets { player: Pubkey },
    /// List the bets of a round.
    RoundBets { round_id: u64 },
    /// Show an asset config and quote an amount's VND value.
    AssetValue {
        mint: Pubkey,
        #[arg(default_value_t = 0)]
        amount: u64,
    },

    /// Place a bet on a two-digit number in the current round.
    PlaceBet {
        mint: Pubkey,
        number: u8,
        amount: u64,
    },
    /// Claim the payout of a winning bet.
    ClaimWinnings { bet_id: u64 },
    /// Claim the refund of a bet on a cancelled round.
    ClaimRefund { bet_id: u64 },
    /// Close a losing bet and release its reservation (permissionless).
    CloseBet { bet_id: u64 },

    /// Set the current round's winning number (operator).
    SetResult { number: u8 },
    /// Resolve the current round from a recorded oracle draw (operator).
    SetResultFromOracle { draw_id: String },
    /// Cancel the current round (operator).
    CancelRound,
    /// Open a fresh round after a cancellation (operator).
    StartRound,

    /// Record a draw result, deriving the last two digits (oracle authority).
    SubmitResult { draw_id: String, full_number: u64 },
    /// Record a draw result with explicit digits (oracle authority).
    SubmitResultExplicit {
        draw_id: String,
        last_two_digits: u8,
        full_number: u64,
    },

    /// Create the program accounts (deployer).
    Initialize,
    /// Register or update a wagerable token (admin).
    SetAssetConfig {
        mint: Pubkey,
        rate: u64,
        #[arg(long)]
        disabled: bool,
    },
    /// Update the VND bet limits (admin).
    SetBetLimits { min: u64, max: u64 },
    /// Update the payout multiplier (admin).
    SetPayoutMultiplier { multiplier: u64 },
    /// Hand over the admin role (admin).
    SetAdmin { new_admin: Pubkey },
    /// Hand over the operator role (admin).
    SetOperator { new_operator: Pubkey },
    /// Point withdrawals at a new treasury (admin).
    SetTreasury { new_treasury: Pubkey },
    /// Enable or disable oracle-driven resolution (admin).
    SetOracle { oracle: Pubkey },
    /// Hand over the oracle feed authority (admin).
    SetOracleAuthority { new_authority: Pubkey },
    /// Sweep a token's unreserved custody to the treasury (admin).
    EmergencyWithdraw { mint: Pubkey },
}

fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded = if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").context("HOME not set")?;
        format!("{}/{}", home, rest)
    } else {
        path.to_string()
    };
    read_keypair_file(&expanded).map_err(|e| anyhow!("failed to read keypair {}: {}", expanded, e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = RpcClient::new_with_commitment(args.rpc.clone(), CommitmentConfig::confirmed());
    let payer = load_keypair(&args.keypair)?;

    match args.command {
        Command::Config => read::show_config(&client).await,
        Command::Board => read::show_board(&client).await,
        Command::Oracle => read::show_oracle(&client).await,
        Command::Round { id } => read::show_round(&client, id).await,
        Command::Bet { id } => read::show_bet(&client, id).await,
        Command::PlayerBets { player } => read::list_player_bets(&client, player).await,
        Command::RoundBets { round_id } => read::list_round_bets(&client, round_id).await,
        Command::AssetValue { mint, amount } => read::show_asset_value(&client, mint, amount).await,

        Command::PlaceBet {
            mint,
            number,
            amount,
        } => send::place_bet(&client, &payer, mint, number, amount).await,
        Command::ClaimWinnings { bet_id } => send::claim_winnings(&client, &payer, bet_id).await,
        Command::ClaimRefund { bet_id } => send::claim_refund(&client, &payer, bet_id).await,
        Command::CloseBet { bet_id } => send::close_bet(&client, &payer, bet_id).await,

        Command::SetResult { number } => send::set_result(&client, &payer, number).await,
        Command::SetResultFromOracle { draw_id } => {
            send::set_result_from_oracle(&client, &payer, &draw_id).await
        }
        Command::CancelRound => send::cancel_round(&client, &payer).await,
        Command::StartRound => send::start_round(&client, &payer).await,

        Command::SubmitResult {
            draw_id,
            full_number,
        } => send::submit_result(&client, &payer, &draw_id, full_number).await,
        Command::SubmitResultExplicit {
            draw_id,
            last_two_digits,
            full_number,
        } => {
            send::submit_result_explicit(&client, &payer, &draw_id, last_two_digits, full_number)
                .await
        }

        Command::Initialize => send::initialize(&client, &payer).await,
        Command::SetAssetConfig {
            mint,
            rate,
            disabled,
        } => send::set_asset_config(&client, &payer, mint, !disabled, rate).await,
        Command::SetBetLimits { min, max } => send::set_bet_limits(&client, &payer, min, max).await,
        Command::SetPayoutMultiplier { multiplier } => {
            send::set_payout_multiplier(&client, &payer, multiplier).await
        }
        Command::SetAdmin { new_admin } => send::set_admin(&client, &payer, new_admin).await,
        Command::SetOperator { new_operator } => {
            send::set_operator(&client, &payer, new_operator).await
        }
        Command::SetTreasury { new_treasury } => {
            send::set_treasury(&client, &payer, new_treasury).await
        }
        Command::SetOracle { oracle } => send::set_oracle(&client, &payer, oracle).await,
        Command::SetOracleAuthority { new_authority } => {
            send::set_oracle_authority(&client, &payer, new_authority).await
        }
        Command::EmergencyWithdraw { mint } => {
            send::emergency_withdraw(&client, &payer, mint).await
        }
    }
}
