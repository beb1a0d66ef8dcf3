use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::MAX_DRAW_ID_LEN;
use crate::state::{oracle_pda, oracle_result_pda};

use super::DanhdeAccount;

/// Oracle is a singleton account holding the feed authority and a copy of
/// the most recent submission for cheap reads.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Oracle {
    /// The authority allowed to submit results.
    pub authority: Pubkey,

    /// The draw id of the latest submission, zero-padded.
    pub latest_draw_id: [u8; MAX_DRAW_ID_LEN],

    /// The byte length of the latest draw id.
    pub latest_draw_id_len: u8,

    /// The last two digits of the latest full number.
    pub latest_last_two_digits: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// The full drawn number of the latest submission.
    pub latest_full_number: u64,

    /// The unix timestamp of the latest submission (0 = none yet).
    pub latest_timestamp: i64,

    /// The number of results submitted over the oracle's lifetime.
    pub total_results: u64,
}

impl Oracle {
    pub fn pda() -> (Pubkey, u8) {
        oracle_pda()
    }

    pub fn has_result(&self) -> bool {
        self.latest_timestamp != 0
    }

    pub fn latest_draw_id_bytes(&self) -> &[u8] {
        &self.latest_draw_id[..self.latest_draw_id_len as usize]
    }
}

account!(DanhdeAccount, Oracle);

/// One immutable draw result, keyed by draw id. Submissions are write-once:
/// the account's existence is the proof a draw was recorded.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct OracleResult {
    /// The external draw identifier, zero-padded.
    pub draw_id: [u8; MAX_DRAW_ID_LEN],

    /// The byte length of the draw id.
    pub draw_id_len: u8,

    /// The last two digits of the full number.
    pub last_two_digits: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// The full drawn number as published by the source.
    pub full_number: u64,

    /// The unix timestamp at which the result was recorded.
    pub timestamp: i64,
}

impl OracleResult {
    pub fn pda(&self) -> (Pubkey, u8) {
        oracle_result_pda(self.draw_id_bytes())
    }

    pub fn draw_id_bytes(&self) -> &[u8] {
        &self.draw_id[..self.draw_id_len as usize]
    }
}

account!(DanhdeAccount, OracleResult);

/// Reduce a full drawn number to its last two digits.
pub fn last_two_digits(full_number: u64) -> u8 {
    (full_number % 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_two_digits() {
        assert_eq!(last_two_digits(12345), 45);
        assert_eq!(last_two_digits(100), 0);
        assert_eq!(last_two_digits(99942), 42);
        assert_eq!(last_two_digits(7), 7);
        assert_eq!(last_two_digits(0), 0);
    }

    #[test]
    fn test_draw_id_bytes_respects_length() {
        let mut result = OracleResult {
            draw_id: [0; MAX_DRAW_ID_LEN],
            draw_id_len: 10,
            last_two_digits: 45,
            _padding: [0; 6],
            full_number: 12345,
            timestamp: 1_700_000_000,
        };
        result.draw_id[..10].copy_from_slice(b"2026-08-31");
        assert_eq!(result.draw_id_bytes(), b"2026-08-31");
    }
}
