use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::round_pda;

use super::DanhdeAccount;

/// The derived lifecycle status of a round. Never stored; computed from the
/// clock and the round's terminal flags whenever queried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundStatus {
    /// Betting is open (now < end_time).
    Open,
    /// Betting has closed, awaiting a result.
    Pending,
    /// A winning number has been set.
    Finished,
    /// The round was cancelled; bets are refundable.
    Cancelled,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Round {
    /// The round number (starts at 1).
    pub id: u64,

    /// The unix timestamp at which the round opened.
    pub start_time: i64,

    /// The unix timestamp at which betting closes.
    pub end_time: i64,

    /// The unix timestamp at which the result was set (0 = unset).
    pub result_time: i64,

    /// The winning number (only meaningful once result_time != 0).
    pub winning_number: u8,

    /// Whether the round was cancelled (0 = no, 1 = yes).
    pub cancelled: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// The total wagered value across all bets, in VND indivisible units.
    pub total_wagered_value: u64,

    /// The number of bets placed in the round.
    pub total_bets: u64,
}

impl Round {
    pub fn pda(&self) -> (Pubkey, u8) {
        round_pda(self.id)
    }

    /// Whether a winning number has been fixed.
    pub fn has_result(&self) -> bool {
        self.result_time != 0
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled != 0
    }

    /// Derive the round's status at the given time. Cancellation and
    /// resolution are terminal; the Open/Pending split is purely a
    /// function of the clock.
    pub fn status(&self, now: i64) -> RoundStatus {
        if self.is_cancelled() {
            RoundStatus::Cancelled
        } else if self.has_result() {
            RoundStatus::Finished
        } else if now < self.end_time {
            RoundStatus::Open
        } else {
            RoundStatus::Pending
        }
    }

    /// Whether bets may still be placed at the given time.
    pub fn is_open(&self, now: i64) -> bool {
        self.status(now) == RoundStatus::Open
    }

    /// Whether the result may be set at the given time.
    pub fn awaits_result(&self, now: i64) -> bool {
        self.status(now) == RoundStatus::Pending
    }
}

account!(DanhdeAccount, Round);

#[cfg(test)]
mod tests {
    use super::*;

    fn open_round() -> Round {
        Round {
            id: 1,
            start_time: 1_000,
            end_time: 1_000 + 86_400,
            result_time: 0,
            winning_number: 0,
            cancelled: 0,
            _padding: [0; 6],
            total_wagered_value: 0,
            total_bets: 0,
        }
    }

    #[test]
    fn test_status_follows_clock() {
        let round = open_round();
        assert_eq!(round.status(1_000), RoundStatus::Open);
        assert_eq!(round.status(87_399), RoundStatus::Open);
        // end_time itself is no longer open
        assert_eq!(round.status(87_400), RoundStatus::Pending);
        assert!(round.awaits_result(87_400));
        assert!(!round.is_open(87_400));
    }

    #[test]
    fn test_resolved_round_is_finished() {
        let mut round = open_round();
        round.result_time = 90_000;
        round.winning_number = 42;
        assert_eq!(round.status(90_000), RoundStatus::Finished);
        assert!(!round.awaits_result(90_000));
    }

    #[test]
    fn test_cancelled_wins_over_clock() {
        let mut round = open_round();
        round.cancelled = 1;
        assert_eq!(round.status(1_000), RoundStatus::Cancelled);
        assert_eq!(round.status(i64::MAX), RoundStatus::Cancelled);
        assert!(!round.awaits_result(i64::MAX));
    }
}
