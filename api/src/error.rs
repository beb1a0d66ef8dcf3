use steel::*;

/// DanhDe program error codes
/// Range 1000-1999: Validation errors
/// Range 2000-2999: Authorization errors
/// Range 3000-3999: State errors
/// Range 4000-4999: Funds errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum DanhdeError {
    // Validation errors (1000-1999)
    #[error("Number must be 0-99")]
    InvalidNumber = 1001,

    #[error("Amount must be greater than zero")]
    InvalidAmount = 1002,

    #[error("Token not supported")]
    TokenNotSupported = 1003,

    #[error("Bet below minimum")]
    BetBelowMinimum = 1004,

    #[error("Bet above maximum")]
    BetAboveMaximum = 1005,

    #[error("Invalid multiplier")]
    InvalidMultiplier = 1006,

    #[error("Invalid draw ID")]
    InvalidDrawId = 1007,

    #[error("Invalid last two digits")]
    InvalidLastTwoDigits = 1008,

    #[error("Bet value truncates to zero")]
    ZeroValueBet = 1009,

    #[error("Invalid bet limits")]
    InvalidBetLimits = 1010,

    // Authorization errors (2000-2999)
    #[error("Signer is not the admin")]
    NotAdmin = 2001,

    #[error("Signer is not the operator")]
    NotOperator = 2002,

    #[error("Not your bet")]
    NotBetOwner = 2003,

    #[error("Signer is not the oracle authority")]
    NotOracleAuthority = 2004,

    // State errors (3000-3999)
    #[error("Round not ended")]
    RoundNotEnded = 3001,

    #[error("Betting is closed for this round")]
    BettingClosed = 3002,

    #[error("Result already set")]
    ResultAlreadySet = 3003,

    #[error("Round cancelled")]
    RoundCancelled = 3004,

    #[error("Round not cancelled")]
    RoundNotCancelled = 3005,

    #[error("Result already submitted")]
    ResultAlreadySubmitted = 3006,

    #[error("Oracle not set")]
    OracleNotSet = 3007,

    #[error("Oracle result not found")]
    ResultNotFound = 3008,

    #[error("Already claimed")]
    AlreadyClaimed = 3009,

    #[error("Not a winning bet")]
    NotWinningBet = 3010,

    #[error("Bet did not lose")]
    NotLosingBet = 3011,

    #[error("Current round is still live")]
    RoundStillLive = 3012,

    #[error("Result not set")]
    ResultNotSet = 3013,

    // Funds errors (4000-4999)
    #[error("Insufficient custody balance for payout")]
    InsufficientLiquidity = 4001,

    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 4002,
}

error!(DanhdeError);
