use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum DanhdeInstruction {
    // Player
    PlaceBet = 0,
    ClaimWinnings = 1,
    ClaimRefund = 2,
    CloseBet = 3,

    // Operator
    SetResult = 10,
    SetResultFromOracle = 11,
    CancelRound = 12,
    StartRound = 13,

    // Oracle feed
    SubmitResult = 20,
    SubmitResultExplicit = 21,

    // Admin
    Initialize = 100,
    SetAssetConfig = 101,
    SetBetLimits = 102,
    SetPayoutMultiplier = 103,
    SetAdmin = 104,
    SetOperator = 105,
    SetTreasury = 106,
    SetOracle = 107,
    SetOracleAuthority = 108,
    EmergencyWithdraw = 109,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaceBet {
    pub amount: [u8; 8],
    pub number: u8,
    pub _padding: [u8; 7],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ClaimWinnings {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ClaimRefund {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CloseBet {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetResult {
    pub number: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetResultFromOracle {
    pub draw_id: [u8; 32],
    pub draw_id_len: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CancelRound {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StartRound {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SubmitResult {
    pub draw_id: [u8; 32],
    pub draw_id_len: u8,
    pub _padding: [u8; 7],
    pub full_number: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SubmitResultExplicit {
    pub draw_id: [u8; 32],
    pub draw_id_len: u8,
    pub last_two_digits: u8,
    pub _padding: [u8; 6],
    pub full_number: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetAssetConfig {
    pub enabled: u8,
    pub _padding: [u8; 7],
    pub rate: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetBetLimits {
    pub min_bet_value: [u8; 8],
    pub max_bet_value: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetPayoutMultiplier {
    pub multiplier: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetAdmin {
    pub new_admin: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetOperator {
    pub new_operator: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetTreasury {
    pub new_treasury: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetOracle {
    pub oracle: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetOracleAuthority {
    pub new_authority: Pubkey,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EmergencyWithdraw {}

instruction!(DanhdeInstruction, Initialize);
instruction!(DanhdeInstruction, PlaceBet);
instruction!(DanhdeInstruction, ClaimWinnings);
instruction!(DanhdeInstruction, ClaimRefund);
instruction!(DanhdeInstruction, CloseBet);
instruction!(DanhdeInstruction, SetResult);
instruction!(DanhdeInstruction, SetResultFromOracle);
instruction!(DanhdeInstruction, CancelRound);
instruction!(DanhdeInstruction, StartRound);
instruction!(DanhdeInstruction, SubmitResult);
instruction!(DanhdeInstruction, SubmitResultExplicit);
instruction!(DanhdeInstruction, SetAssetConfig);
instruction!(DanhdeInstruction, SetBetLimits);
instruction!(DanhdeInstruction, SetPayoutMultiplier);
instruction!(DanhdeInstruction, SetAdmin);
instruction!(DanhdeInstruction, SetOperator);
instruction!(DanhdeInstruction, SetTreasury);
instruction!(DanhdeInstruction, SetOracle);
instruction!(DanhdeInstruction, SetOracleAuthority);
instruction!(DanhdeInstruction, EmergencyWithdraw);
