use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::config_pda;

use super::DanhdeAccount;

/// Config is a singleton account holding the role addresses and betting
/// parameters. The deployer starts out holding every role.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Config {
    /// The admin, allowed to configure assets, limits and roles.
    pub admin: Pubkey,

    /// The operator, allowed to set results and cancel rounds.
    pub operator: Pubkey,

    /// The treasury address surplus balances are withdrawn to.
    pub treasury: Pubkey,

    /// The oracle account results are read from (default = not set).
    pub oracle: Pubkey,

    /// The multiplier applied to a winning bet's amount (1-99).
    pub payout_multiplier: u64,

    /// The minimum bet, in VND indivisible units.
    pub min_bet_value: u64,

    /// The maximum bet, in VND indivisible units.
    pub max_bet_value: u64,

    /// The duration of a betting round, in seconds.
    pub round_duration: i64,
}

impl Config {
    pub fn pda() -> (Pubkey, u8) {
        config_pda()
    }

    /// Whether an oracle has been configured for feed-driven results.
    pub fn has_oracle(&self) -> bool {
        self.oracle != Pubkey::default()
    }
}

account!(DanhdeAccount, Config);
