mod asset_config;
mod bet;
mod board;
mod config;
mod oracle;
mod round;

pub use asset_config::*;
pub use bet::*;
pub use board::*;
pub use config::*;
pub use oracle::*;
pub use round::*;

use steel::*;

use crate::consts::*;

/// Discriminators for DanhDe program accounts.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum DanhdeAccount {
    AssetConfig = 100,
    Bet = 101,
    Board = 102,
    Config = 103,
    Oracle = 104,
    OracleResult = 105,
    Round = 106,
}

pub fn asset_config_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ASSET, mint.as_ref()], &crate::id())
}

pub fn bet_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BET, &id.to_le_bytes()], &crate::id())
}

pub fn board_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BOARD], &crate::id())
}

pub fn config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG], &crate::id())
}

pub fn oracle_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ORACLE], &crate::id())
}

pub fn oracle_result_pda(draw_id: &[u8]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ORACLE_RESULT, draw_id], &crate::id())
}

pub fn round_pda(id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUND, &id.to_le_bytes()], &crate::id())
}

pub fn vault_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT], &crate::id())
}
