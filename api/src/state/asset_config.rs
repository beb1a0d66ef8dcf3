use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::VND_DECIMALS;
use crate::state::asset_config_pda;

use super::DanhdeAccount;

/// Per-mint configuration for a wagerable token. Absence of the account
/// means the token is unsupported.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct AssetConfig {
    /// The token mint.
    pub mint: Pubkey,

    /// Whether bets in this token are accepted (0 = no, 1 = yes).
    pub enabled: u8,

    /// The token's decimal precision, read from the mint at config time.
    pub decimals: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// VND units per one whole token (e.g. 25_000 for a USD stable).
    pub rate: u64,

    /// Custody earmarked for pending payouts and refunds, in the token's
    /// indivisible units. Excluded from emergency withdrawals.
    pub reserved: u64,
}

impl AssetConfig {
    pub fn pda(&self) -> (Pubkey, u8) {
        asset_config_pda(&self.mint)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled != 0
    }

    /// The wagered amount's value in VND indivisible units, or None if the
    /// value overflows the on-chain u64 total.
    pub fn vnd_value(&self, amount: u64) -> Option<u64> {
        let value = normalized_value(amount, self.rate, self.decimals, VND_DECIMALS)?;
        u64::try_from(value).ok()
    }
}

account!(DanhdeAccount, AssetConfig);

/// Convert a raw token amount to reference-currency indivisible units:
///
///   value = amount * rate * 10^(ref_decimals - asset_decimals)
///
/// Unsigned integer math, truncating toward zero. The truncation is a load-
/// bearing property of limit enforcement: callers must reject results that
/// fall below their minimum instead of rounding up.
pub fn normalized_value(
    amount: u64,
    rate: u64,
    asset_decimals: u8,
    ref_decimals: u8,
) -> Option<u128> {
    let scaled = (amount as u128).checked_mul(rate as u128)?;
    if ref_decimals >= asset_decimals {
        let exp = u32::from(ref_decimals - asset_decimals);
        scaled.checked_mul(10u128.checked_pow(exp)?)
    } else {
        let exp = u32::from(asset_decimals - ref_decimals);
        Some(scaled / 10u128.checked_pow(exp)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rate_is_one_to_one() {
        // VND wagered as VND: rate 1, matching decimals.
        let amount = 100_000 * 10u64.pow(VND_DECIMALS as u32);
        assert_eq!(
            normalized_value(amount, 1, VND_DECIMALS, VND_DECIMALS),
            Some(amount as u128)
        );
    }

    #[test]
    fn test_usd_rate_with_wide_reference() {
        // 10 whole units of a 6-decimal token at 25,000 against an
        // 18-decimal reference: 250,000 * 10^18.
        let value = normalized_value(10_000_000, 25_000, 6, 18);
        assert_eq!(value, Some(250_000 * 10u128.pow(18)));
    }

    #[test]
    fn test_usd_rate_with_native_reference() {
        // Same wager against the deployed 6-decimal VND token.
        let value = normalized_value(10_000_000, 25_000, 6, VND_DECIMALS);
        assert_eq!(value, Some(250_000 * 10u128.pow(VND_DECIMALS as u32)));
    }

    #[test]
    fn test_order_preserving_in_amount() {
        let a = normalized_value(1_000, 25_000, 6, VND_DECIMALS).unwrap();
        let b = normalized_value(1_001, 25_000, 6, VND_DECIMALS).unwrap();
        assert!(b >= a);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // A 9-decimal token against the 6-decimal reference: one raw unit
        // is below the reference's resolution and must truncate to zero.
        assert_eq!(normalized_value(1, 1, 9, 6), Some(0));
        // 999 raw units still truncate to zero; 1000 is exactly one unit.
        assert_eq!(normalized_value(999, 1, 9, 6), Some(0));
        assert_eq!(normalized_value(1_000, 1, 9, 6), Some(1));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(normalized_value(u64::MAX, u64::MAX, 0, 38), None);
    }

    #[test]
    fn test_vnd_value_caps_at_u64() {
        let config = AssetConfig {
            mint: Pubkey::new_unique(),
            enabled: 1,
            decimals: VND_DECIMALS,
            _padding: [0; 6],
            rate: u64::MAX,
            reserved: 0,
        };
        // amount 1 at matching decimals lands exactly on the cap; amount 2
        // exceeds it.
        assert_eq!(config.vnd_value(1), Some(u64::MAX));
        assert_eq!(config.vnd_value(2), None);
        assert_eq!(config.vnd_value(u64::MAX), None);
    }
}
