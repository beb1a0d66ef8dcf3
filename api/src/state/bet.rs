use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::{bet_pda, Round};

use super::DanhdeAccount;

/// How a bet was settled. A bet leaves Unsettled exactly once, so the
/// single-settlement invariant is structural rather than a pair of flags.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum Settlement {
    Unsettled = 0,
    PaidWin = 1,
    Refunded = 2,
    Forfeited = 3,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Bet {
    /// The global bet id (starts at 0).
    pub id: u64,

    /// The player who placed the bet.
    pub player: Pubkey,

    /// The mint of the wagered token.
    pub mint: Pubkey,

    /// The round the bet belongs to.
    pub round_id: u64,

    /// The wagered amount, in the token's indivisible units.
    pub amount: u64,

    /// The payout multiplier snapshotted when the bet was placed.
    pub payout_multiplier: u64,

    /// The chosen number (0-99).
    pub number: u8,

    /// The settlement state (see [`Settlement`]).
    pub settlement: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],
}

impl Bet {
    pub fn pda(&self) -> (Pubkey, u8) {
        bet_pda(self.id)
    }

    pub fn settlement(&self) -> Settlement {
        Settlement::try_from(self.settlement).unwrap_or(Settlement::Unsettled)
    }

    pub fn is_settled(&self) -> bool {
        self.settlement != Settlement::Unsettled as u8
    }

    /// Whether this bet won the given round. Only meaningful for the bet's
    /// own round; cancelled or unresolved rounds have no winners.
    pub fn is_winner(&self, round: &Round) -> bool {
        self.round_id == round.id
            && round.has_result()
            && !round.is_cancelled()
            && self.number == round.winning_number
    }

    /// The payout a winning claim transfers, in the bet's own token.
    pub fn payout(&self) -> Option<u64> {
        self.amount.checked_mul(self.payout_multiplier)
    }
}

account!(DanhdeAccount, Bet);

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_round(winning_number: u8) -> Round {
        Round {
            id: 1,
            start_time: 0,
            end_time: 86_400,
            result_time: 90_000,
            winning_number,
            cancelled: 0,
            _padding: [0; 6],
            total_wagered_value: 0,
            total_bets: 0,
        }
    }

    fn bet_on(number: u8) -> Bet {
        Bet {
            id: 0,
            player: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            round_id: 1,
            amount: 100_000_000_000, // 100k VND at 6 decimals
            payout_multiplier: 80,
            number,
            settlement: Settlement::Unsettled as u8,
            _padding: [0; 6],
        }
    }

    #[test]
    fn test_winner_pays_multiplier() {
        let round = resolved_round(42);
        let bet = bet_on(42);
        assert!(bet.is_winner(&round));
        // 100k VND at 80x = 8M VND
        assert_eq!(bet.payout(), Some(8_000_000_000_000));
    }

    #[test]
    fn test_loser_is_not_winner() {
        let round = resolved_round(42);
        assert!(!bet_on(7).is_winner(&round));
    }

    #[test]
    fn test_no_winner_before_result() {
        let mut round = resolved_round(42);
        round.result_time = 0;
        assert!(!bet_on(42).is_winner(&round));
    }

    #[test]
    fn test_no_winner_on_cancelled_round() {
        let mut round = resolved_round(42);
        round.cancelled = 1;
        assert!(!bet_on(42).is_winner(&round));
    }

    #[test]
    fn test_wrong_round_is_not_winner() {
        let round = resolved_round(42);
        let mut bet = bet_on(42);
        bet.round_id = 2;
        assert!(!bet.is_winner(&round));
    }

    #[test]
    fn test_payout_overflow_is_none() {
        let mut bet = bet_on(42);
        bet.amount = u64::MAX / 2;
        assert_eq!(bet.payout(), None);
    }

    #[test]
    fn test_settlement_round_trip() {
        let mut bet = bet_on(42);
        assert!(!bet.is_settled());
        bet.settlement = Settlement::PaidWin as u8;
        assert!(bet.is_settled());
        assert_eq!(bet.settlement(), Settlement::PaidWin);
        bet.settlement = Settlement::Refunded as u8;
        assert_eq!(bet.settlement(), Settlement::Refunded);
    }
}
