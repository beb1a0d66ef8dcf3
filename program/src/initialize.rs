use danhde_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Initialize the program accounts (Board, Config, Oracle, Round 1).
/// Can only be called once by the program deployer, who starts out holding
/// every role.
pub fn process_initialize(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts
    let [signer_info, board_info, config_info, oracle_info, round_info, system_program] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    board_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[BOARD], &danhde_api::ID)?;
    config_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[CONFIG], &danhde_api::ID)?;
    oracle_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[ORACLE], &danhde_api::ID)?;
    round_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[ROUND, &1u64.to_le_bytes()], &danhde_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    sol_log("Initializing DanhDe program accounts...");

    let clock = Clock::get()?;

    // Create Board account
    create_program_account::<Board>(
        board_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[BOARD],
    )?;
    let board = board_info.as_account_mut::<Board>(&danhde_api::ID)?;
    board.round_id = 1;
    board.next_bet_id = 0;
    sol_log(&format!("Board created at {}", board_info.key));

    // Create Config account
    create_program_account::<Config>(
        config_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[CONFIG],
    )?;
    let config = config_info.as_account_mut::<Config>(&danhde_api::ID)?;
    config.admin = *signer_info.key;
    config.operator = *signer_info.key;
    config.treasury = *signer_info.key;
    config.oracle = Pubkey::default();
    config.payout_multiplier = DEFAULT_PAYOUT_MULTIPLIER;
    config.min_bet_value = DEFAULT_MIN_BET_VALUE;
    config.max_bet_value = DEFAULT_MAX_BET_VALUE;
    config.round_duration = DEFAULT_ROUND_DURATION;
    sol_log(&format!("Config created at {}", config_info.key));

    // Create Oracle account
    create_program_account::<Oracle>(
        oracle_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[ORACLE],
    )?;
    let oracle = oracle_info.as_account_mut::<Oracle>(&danhde_api::ID)?;
    oracle.authority = *signer_info.key;
    oracle.latest_draw_id = [0; MAX_DRAW_ID_LEN];
    oracle.latest_draw_id_len = 0;
    oracle.latest_last_two_digits = 0;
    oracle.latest_full_number = 0;
    oracle.latest_timestamp = 0;
    oracle.total_results = 0;
    sol_log(&format!("Oracle created at {}", oracle_info.key));

    // Create Round 1 account and open betting immediately
    create_program_account::<Round>(
        round_info,
        system_program,
        signer_info,
        &danhde_api::ID,
        &[ROUND, &1u64.to_le_bytes()],
    )?;
    let round = round_info.as_account_mut::<Round>(&danhde_api::ID)?;
    round.id = 1;
    round.start_time = clock.unix_timestamp;
    round.end_time = clock.unix_timestamp + config.round_duration;
    round.result_time = 0;
    round.winning_number = 0;
    round.cancelled = 0;
    round.total_wagered_value = 0;
    round.total_bets = 0;
    sol_log(&format!("Round 1 created at {}", round_info.key));

    RoundStarted {
        round_id: round.id,
        start_time: round.start_time,
        end_time: round.end_time,
    }
    .log();

    sol_log("DanhDe program initialized successfully!");

    Ok(())
}
