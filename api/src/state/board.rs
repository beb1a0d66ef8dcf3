use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::board_pda;

use super::DanhdeAccount;

/// Board is a singleton account tracking the current round pointer and the
/// global bet counter. Round ids start at 1, bet ids at 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Board {
    /// The id of the current (highest) round.
    pub round_id: u64,

    /// The id the next bet will be assigned.
    pub next_bet_id: u64,
}

impl Board {
    pub fn pda() -> (Pubkey, u8) {
        board_pda()
    }
}

account!(DanhdeAccount, Board);
