mod admin;
mod cancel_round;
mod claim_refund;
mod claim_winnings;
mod close_bet;
mod initialize;
mod oracle;
mod place_bet;
mod resolve;
mod set_result;
mod set_result_from_oracle;
mod start_round;

use admin::*;
use cancel_round::*;
use claim_refund::*;
use claim_winnings::*;
use close_bet::*;
use initialize::*;
use oracle::*;
use place_bet::*;
use set_result::*;
use set_result_from_oracle::*;
use start_round::*;

use danhde_api::instruction::*;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&danhde_api::ID, program_id, data)?;

    match ix {
        // Player
        DanhdeInstruction::PlaceBet => process_place_bet(accounts, data)?,
        DanhdeInstruction::ClaimWinnings => process_claim_winnings(accounts, data)?,
        DanhdeInstruction::ClaimRefund => process_claim_refund(accounts, data)?,
        DanhdeInstruction::CloseBet => process_close_bet(accounts, data)?,

        // Operator
        DanhdeInstruction::SetResult => process_set_result(accounts, data)?,
        DanhdeInstruction::SetResultFromOracle => process_set_result_from_oracle(accounts, data)?,
        DanhdeInstruction::CancelRound => process_cancel_round(accounts, data)?,
        DanhdeInstruction::StartRound => process_start_round(accounts, data)?,

        // Oracle feed
        DanhdeInstruction::SubmitResult => process_submit_result(accounts, data)?,
        DanhdeInstruction::SubmitResultExplicit => process_submit_result_explicit(accounts, data)?,

        // Admin
        DanhdeInstruction::Initialize => process_initialize(accounts, data)?,
        DanhdeInstruction::SetAssetConfig => process_set_asset_config(accounts, data)?,
        DanhdeInstruction::SetBetLimits => process_set_bet_limits(accounts, data)?,
        DanhdeInstruction::SetPayoutMultiplier => process_set_payout_multiplier(accounts, data)?,
        DanhdeInstruction::SetAdmin => process_set_admin(accounts, data)?,
        DanhdeInstruction::SetOperator => process_set_operator(accounts, data)?,
        DanhdeInstruction::SetTreasury => process_set_treasury(accounts, data)?,
        DanhdeInstruction::SetOracle => process_set_oracle(accounts, data)?,
        DanhdeInstruction::SetOracleAuthority => process_set_oracle_authority(accounts, data)?,
        DanhdeInstruction::EmergencyWithdraw => process_emergency_withdraw(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
