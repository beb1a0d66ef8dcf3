use steel::*;

use spl_associated_token_account::get_associated_token_address;

use crate::consts::*;
use crate::instruction::*;
use crate::state::*;

/// Pack a draw id into the fixed-width seed form, truncating past the PDA
/// seed limit.
pub fn pack_draw_id(draw_id: &[u8]) -> ([u8; MAX_DRAW_ID_LEN], u8) {
    let len = draw_id.len().min(MAX_DRAW_ID_LEN);
    let mut packed = [0u8; MAX_DRAW_ID_LEN];
    packed[..len].copy_from_slice(&draw_id[..len]);
    (packed, len as u8)
}

/// Build an initialize instruction. Creates the config, board and oracle
/// singletons plus the first round.
pub fn initialize(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(BOARD_ADDRESS, false),
            AccountMeta::new(CONFIG_ADDRESS, false),
            AccountMeta::new(ORACLE_ADDRESS, false),
            AccountMeta::new(round_pda(1).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: Initialize {}.to_bytes(),
    }
}

/// Build a place_bet instruction. `bet_id` must be the board's current
/// next_bet_id and `round_id` the board's current round.
pub fn place_bet(
    signer: Pubkey,
    mint: Pubkey,
    round_id: u64,
    bet_id: u64,
    amount: u64,
    number: u8,
) -> Instruction {
    let sender_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(BOARD_ADDRESS, false),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(round_pda(round_id).0, false),
            AccountMeta::new(bet_pda(bet_id).0, false),
            AccountMeta::new(asset_config_pda(&mint).0, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new(sender_tokens, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: PlaceBet {
            amount: amount.to_le_bytes(),
            number,
            _padding: [0; 7],
        }
        .to_bytes(),
    }
}

/// Build a claim_winnings instruction for a winning bet.
pub fn claim_winnings(signer: Pubkey, mint: Pubkey, round_id: u64, bet_id: u64) -> Instruction {
    let beneficiary_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
            AccountMeta::new(bet_pda(bet_id).0, false),
            AccountMeta::new(asset_config_pda(&mint).0, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new(beneficiary_tokens, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: ClaimWinnings {}.to_bytes(),
    }
}

/// Build a claim_refund instruction for a bet on a cancelled round.
pub fn claim_refund(signer: Pubkey, mint: Pubkey, round_id: u64, bet_id: u64) -> Instruction {
    let beneficiary_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
            AccountMeta::new(bet_pda(bet_id).0, false),
            AccountMeta::new(asset_config_pda(&mint).0, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new(beneficiary_tokens, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: ClaimRefund {}.to_bytes(),
    }
}

/// Build a close_bet instruction. Permissionless; releases the payout
/// reservation of a losing bet.
pub fn close_bet(signer: Pubkey, mint: Pubkey, round_id: u64, bet_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
            AccountMeta::new(bet_pda(bet_id).0, false),
            AccountMeta::new(asset_config_pda(&mint).0, false),
        ],
        data: CloseBet {}.to_bytes(),
    }
}

/// Build a set_result instruction. Resolves the given round and opens the
/// next one.
pub fn set_result(signer: Pubkey, round_id: u64, number: u8) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(BOARD_ADDRESS, false),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(round_pda(round_id).0, false),
            AccountMeta::new(round_pda(round_id + 1).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: SetResult { number }.to_bytes(),
    }
}

/// Build a set_result_from_oracle instruction, resolving the round from a
/// recorded draw result.
pub fn set_result_from_oracle(signer: Pubkey, round_id: u64, draw_id: &[u8]) -> Instruction {
    let (packed, len) = pack_draw_id(draw_id);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(BOARD_ADDRESS, false),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(round_pda(round_id).0, false),
            AccountMeta::new(round_pda(round_id + 1).0, false),
            AccountMeta::new_readonly(oracle_result_pda(&packed[..len as usize]).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: SetResultFromOracle {
            draw_id: packed,
            draw_id_len: len,
        }
        .to_bytes(),
    }
}

/// Build a cancel_round instruction.
pub fn cancel_round(signer: Pubkey, round_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(round_pda(round_id).0, false),
        ],
        data: CancelRound {}.to_bytes(),
    }
}

/// Build a start_round instruction, opening a fresh round after a
/// cancellation. `round_id` is the cancelled round's id.
pub fn start_round(signer: Pubkey, round_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(BOARD_ADDRESS, false),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new_readonly(round_pda(round_id).0, false),
            AccountMeta::new(round_pda(round_id + 1).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: StartRound {}.to_bytes(),
    }
}

/// Build a submit_result instruction. The last two digits are derived from
/// the full number on chain.
pub fn submit_result(signer: Pubkey, draw_id: &[u8], full_number: u64) -> Instruction {
    let (packed, len) = pack_draw_id(draw_id);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ORACLE_ADDRESS, false),
            AccountMeta::new(oracle_result_pda(&packed[..len as usize]).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: SubmitResult {
            draw_id: packed,
            draw_id_len: len,
            _padding: [0; 7],
            full_number: full_number.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a submit_result_explicit instruction carrying pre-derived digits.
pub fn submit_result_explicit(
    signer: Pubkey,
    draw_id: &[u8],
    last_two_digits: u8,
    full_number: u64,
) -> Instruction {
    let (packed, len) = pack_draw_id(draw_id);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(ORACLE_ADDRESS, false),
            AccountMeta::new(oracle_result_pda(&packed[..len as usize]).0, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
        ],
        data: SubmitResultExplicit {
            draw_id: packed,
            draw_id_len: len,
            last_two_digits,
            _padding: [0; 6],
            full_number: full_number.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a set_asset_config instruction, registering or updating a
/// wagerable token.
pub fn set_asset_config(signer: Pubkey, mint: Pubkey, enabled: bool, rate: u64) -> Instruction {
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(asset_config_pda(&mint).0, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: SetAssetConfig {
            enabled: enabled as u8,
            _padding: [0; 7],
            rate: rate.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a set_bet_limits instruction. Values are in VND indivisible units.
pub fn set_bet_limits(signer: Pubkey, min_bet_value: u64, max_bet_value: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetBetLimits {
            min_bet_value: min_bet_value.to_le_bytes(),
            max_bet_value: max_bet_value.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a set_payout_multiplier instruction.
pub fn set_payout_multiplier(signer: Pubkey, multiplier: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetPayoutMultiplier {
            multiplier: multiplier.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a set_admin instruction.
pub fn set_admin(signer: Pubkey, new_admin: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetAdmin { new_admin }.to_bytes(),
    }
}

/// Build a set_operator instruction.
pub fn set_operator(signer: Pubkey, new_operator: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetOperator { new_operator }.to_bytes(),
    }
}

/// Build a set_treasury instruction.
pub fn set_treasury(signer: Pubkey, new_treasury: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetTreasury { new_treasury }.to_bytes(),
    }
}

/// Build a set_oracle instruction. Pass Pubkey::default() to disable
/// oracle-driven resolution.
pub fn set_oracle(signer: Pubkey, oracle: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetOracle { oracle }.to_bytes(),
    }
}

/// Build a set_oracle_authority instruction.
pub fn set_oracle_authority(signer: Pubkey, new_authority: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(ORACLE_ADDRESS, false),
        ],
        data: SetOracleAuthority { new_authority }.to_bytes(),
    }
}

/// Build an emergency_withdraw instruction, sweeping unreserved custody of
/// a token to the treasury.
pub fn emergency_withdraw(signer: Pubkey, mint: Pubkey, treasury: Pubkey) -> Instruction {
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    let treasury_tokens = get_associated_token_address(&treasury, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new_readonly(asset_config_pda(&mint).0, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new_readonly(treasury, false),
            AccountMeta::new(treasury_tokens, false),
            AccountMeta::new_readonly(solana_program::system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: EmergencyWithdraw {}.to_bytes(),
    }
}
