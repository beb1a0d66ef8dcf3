use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use super::submit_result::record_result;

/// Records a draw result with the last two digits supplied by the caller.
///
/// Escape hatch for sources that publish the two-digit outcome separately
/// from the full number; the digits are trusted as given.
pub fn process_submit_result_explicit(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SubmitResultExplicit::try_from_bytes(data)?;
    let draw_id_len = args.draw_id_len as usize;
    if draw_id_len == 0 || draw_id_len > MAX_DRAW_ID_LEN {
        return Err(DanhdeError::InvalidDrawId.into());
    }
    let digits = args.last_two_digits;
    if digits > MAX_NUMBER {
        return Err(DanhdeError::InvalidLastTwoDigits.into());
    }
    let full_number = u64::from_le_bytes(args.full_number);

    sol_log(&format!(
        "SubmitResultExplicit: full_number={}, digits={}",
        full_number, digits
    ));

    record_result(accounts, args.draw_id, args.draw_id_len, digits, full_number)
}
