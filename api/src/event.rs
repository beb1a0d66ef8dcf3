use steel::*;

/// Emitted when a new round is opened for betting.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RoundStarted {
    pub round_id: u64,
    pub start_time: i64,
    pub end_time: i64,
}

event!(RoundStarted);

/// Emitted when a round's winning number is fixed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RoundResultSet {
    pub round_id: u64,
    pub winning_number: u64,
    pub result_time: i64,
}

event!(RoundResultSet);

/// Emitted when a round is cancelled by the operator.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RoundCancelled {
    pub round_id: u64,
}

event!(RoundCancelled);

/// Emitted when a bet enters the ledger.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BetPlaced {
    pub bet_id: u64,
    pub round_id: u64,
    pub player: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub number: u64,
}

event!(BetPlaced);

/// Emitted when a winning bet is paid out.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BetClaimed {
    pub bet_id: u64,
    pub player: Pubkey,
    pub payout: u64,
}

event!(BetClaimed);

/// Emitted when a bet on a cancelled round is refunded.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BetRefunded {
    pub bet_id: u64,
    pub player: Pubkey,
    pub amount: u64,
}

event!(BetRefunded);

/// Emitted when a losing bet is closed and its reservation released.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BetForfeited {
    pub bet_id: u64,
    pub round_id: u64,
}

event!(BetForfeited);

/// Emitted when the admin changes the payout multiplier.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PayoutMultiplierUpdated {
    pub previous: u64,
    pub current: u64,
}

event!(PayoutMultiplierUpdated);

/// Emitted when the oracle records a draw outcome.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ResultSubmitted {
    pub draw_id: [u8; 32],
    pub last_two_digits: u64,
    pub full_number: u64,
    pub timestamp: i64,
}

event!(ResultSubmitted);
