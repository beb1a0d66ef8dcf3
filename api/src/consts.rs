use const_crypto::ed25519;
use solana_program::pubkey::Pubkey;

/// The decimal precision of the VND reference token.
/// All bet limits and round totals are denominated in these units.
pub const VND_DECIMALS: u8 = 6;

/// One whole VND, denominated in indivisible units.
pub const ONE_VND: u64 = 10u64.pow(VND_DECIMALS as u32);

/// The duration of one minute, in seconds.
pub const ONE_MINUTE: i64 = 60;

/// The duration of one hour, in seconds.
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;

/// The duration of one day, in seconds.
pub const ONE_DAY: i64 = 24 * ONE_HOUR;

/// The default duration of a betting round.
pub const DEFAULT_ROUND_DURATION: i64 = ONE_DAY;

/// The default payout multiplier applied to winning bets.
pub const DEFAULT_PAYOUT_MULTIPLIER: u64 = 80;

/// The maximum payout multiplier (exclusive upper bound is 100).
pub const MAX_PAYOUT_MULTIPLIER: u64 = 99;

/// The default minimum bet (10,000 VND).
pub const DEFAULT_MIN_BET_VALUE: u64 = 10_000 * ONE_VND;

/// The default maximum bet (10,000,000 VND).
pub const DEFAULT_MAX_BET_VALUE: u64 = 10_000_000 * ONE_VND;

/// The smallest two-digit number a bet can pick.
pub const MIN_NUMBER: u8 = 0;

/// The largest two-digit number a bet can pick.
pub const MAX_NUMBER: u8 = 99;

/// The maximum byte length of an oracle draw id (PDA seed limit).
pub const MAX_DRAW_ID_LEN: usize = 32;

/// The seed of the asset config account PDA.
pub const ASSET: &[u8] = b"asset";

/// The seed of the bet account PDA.
pub const BET: &[u8] = b"bet";

/// The seed of the board account PDA.
pub const BOARD: &[u8] = b"board";

/// The seed of the config account PDA.
pub const CONFIG: &[u8] = b"config";

/// The seed of the oracle account PDA.
pub const ORACLE: &[u8] = b"oracle";

/// The seed of the oracle result account PDA.
pub const ORACLE_RESULT: &[u8] = b"result";

/// The seed of the round account PDA.
pub const ROUND: &[u8] = b"round";

/// The seed of the vault PDA that owns custody token accounts.
pub const VAULT: &[u8] = b"vault";

/// Program id for const pda derivations.
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the config account.
pub const CONFIG_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).0);

/// The address of the board account.
pub const BOARD_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[BOARD], &PROGRAM_ID).0);

/// The address of the oracle account.
pub const ORACLE_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[ORACLE], &PROGRAM_ID).0);

/// The address of the vault authority.
pub const VAULT_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[VAULT], &PROGRAM_ID).0);

/// The bump of the vault authority.
pub const VAULT_BUMP: u8 = ed25519::derive_program_address(&[VAULT], &PROGRAM_ID).1;
