use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Records a draw result, deriving the last two digits from the full
/// number. Oracle authority only; one record per draw id, forever.
pub fn process_submit_result(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = SubmitResult::try_from_bytes(data)?;
    let draw_id_len = args.draw_id_len as usize;
    if draw_id_len == 0 || draw_id_len > MAX_DRAW_ID_LEN {
        return Err(DanhdeError::InvalidDrawId.into());
    }
    let draw_id = &args.draw_id[..draw_id_len];
    let full_number = u64::from_le_bytes(args.full_number);
    let digits = last_two_digits(full_number);

    sol_log(&format!("SubmitResult: full_number={}, digits={}", full_number, digits));

    record_result(accounts, args.draw_id, args.draw_id_len, digits, full_number)
}

/// Shared write-once recording path for both submission flavors.
pub(super) fn record_result(
    accounts: &[AccountInfo<'_>],
    draw_id: [u8; MAX_DRAW_ID_LEN],
    draw_id_len: u8,
    digits: u8,
    full_number: u64,
) -> ProgramResult {
    // Load accounts.
    // Account layout:
    // 0: signer (oracle authority)
    // 1: oracle - oracle singleton PDA
    // 2: oracle_result - draw result PDA (created here)
    // 3: system_program
    let [signer_info, oracle_info, oracle_result_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let draw_id_bytes = &draw_id[..draw_id_len as usize];

    signer_info.is_signer()?;
    oracle_info
        .is_writable()?
        .has_seeds(&[ORACLE], &danhde_api::ID)?;
    oracle_result_info
        .is_writable()?
        .has_seeds(&[ORACLE_RESULT, draw_id_bytes], &danhde_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let oracle = oracle_info.as_account_mut::<Oracle>(&danhde_api::ID)?;
    if oracle.authority != *signer_info.key {
        sol_log("Signer is not the oracle authority");
        return Err(DanhdeError::NotOracleAuthority.into());
    }

    // Results are write-once: an existing account means this draw was
    // already recorded.
    if !oracle_result_info.data_is_empty() {
        sol_log("Result already submitted for this draw");
        return Err(DanhdeError::ResultAlreadySubmitted.into());
    }

    let clock = Clock::get()?;
    create_program_account::<OracleResult>(
        oracle_result_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[ORACLE_RESULT, draw_id_bytes],
    )?;
    let result = oracle_result_info.as_account_mut::<OracleResult>(&danhde_api::ID)?;
    result.draw_id = draw_id;
    result.draw_id_len = draw_id_len;
    result.last_two_digits = digits;
    result.full_number = full_number;
    result.timestamp = clock.unix_timestamp;

    // Mirror the submission on the singleton for cheap latest-result reads.
    oracle.latest_draw_id = draw_id;
    oracle.latest_draw_id_len = draw_id_len;
    oracle.latest_last_two_digits = digits;
    oracle.latest_full_number = full_number;
    oracle.latest_timestamp = clock.unix_timestamp;
    oracle.total_results = oracle
        .total_results
        .checked_add(1)
        .ok_or(DanhdeError::ArithmeticOverflow)?;

    ResultSubmitted {
        draw_id,
        last_two_digits: digits as u64,
        full_number,
        timestamp: clock.unix_timestamp,
    }
    .log();

    sol_log(&format!("Draw recorded, digits={}", digits));

    Ok(())
}
