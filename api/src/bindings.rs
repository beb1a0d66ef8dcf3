//! TypeScript bindings generation for frontend types.
//!
//! This module exports Rust types to TypeScript using ts-rs.
//! Enable with the `ts-bindings` feature flag.

// Re-export types with TS derive when feature is enabled
#[cfg(feature = "ts-bindings")]
mod ts_types {
    use ts_rs::TS;

    /// TypeScript export for the derived round status
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/danhde/src/generated/")]
    #[allow(dead_code)]
    pub enum RoundStatusTS {
        Open = 0,
        Pending = 1,
        Finished = 2,
        Cancelled = 3,
    }

    /// TypeScript export for Round state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/danhde/src/generated/")]
    #[allow(dead_code)]
    pub struct RoundTS {
        /// The round number (starts at 1)
        pub id: u64,
        /// The unix timestamp at which the round opened
        pub start_time: i64,
        /// The unix timestamp at which betting closes
        pub end_time: i64,
        /// The unix timestamp at which the result was set (0 = unset)
        pub result_time: i64,
        /// The winning number (only meaningful once result_time != 0)
        pub winning_number: u8,
        /// Whether the round was cancelled
        pub cancelled: bool,
        /// The total wagered value across all bets, in VND indivisible units
        pub total_wagered_value: u64,
        /// The number of bets placed in the round
        pub total_bets: u64,
    }

    /// TypeScript export for Bet state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/danhde/src/generated/")]
    #[allow(dead_code)]
    pub struct BetTS {
        /// The global bet id (starts at 0)
        pub id: u64,
        /// The player who placed the bet
        pub player: String, // Pubkey as string
        /// The mint of the wagered token
        pub mint: String, // Pubkey as string
        /// The round the bet belongs to
        pub round_id: u64,
        /// The wagered amount, in the token's indivisible units
        pub amount: u64,
        /// The payout multiplier snapshotted when the bet was placed
        pub payout_multiplier: u64,
        /// The chosen number (0-99)
        pub number: u8,
        /// The settlement state (0 unsettled, 1 paid, 2 refunded, 3 forfeited)
        pub settlement: u8,
    }

    /// TypeScript export for AssetConfig state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/danhde/src/generated/")]
    #[allow(dead_code)]
    pub struct AssetConfigTS {
        /// The token mint
        pub mint: String, // Pubkey as string
        /// Whether bets in this token are accepted
        pub enabled: bool,
        /// The token's decimal precision
        pub decimals: u8,
        /// VND units per one whole token
        pub rate: u64,
        /// Custody earmarked for pending payouts and refunds
        pub reserved: u64,
    }
}

#[cfg(feature = "ts-bindings")]
#[cfg(test)]
mod tests {
    use super::ts_types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test generates the TypeScript bindings when run with --features ts-bindings
        RoundStatusTS::export().expect("Failed to export RoundStatusTS");
        RoundTS::export().expect("Failed to export RoundTS");
        BetTS::export().expect("Failed to export BetTS");
        AssetConfigTS::export().expect("Failed to export AssetConfigTS");
    }
}
