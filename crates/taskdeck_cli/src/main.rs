//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskdeck_core` linkage and run one board session against an
//!   in-memory database.
//! - Keep output deterministic so it can be diffed in local sanity checks.

use std::process::ExitCode;
use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{
    format_date, parse_date_input, BoardConfig, FixedClock, SqliteKeyValueStore, TaskBoard,
};

const SMOKE_TODAY: &str = "2024-01-05";

fn main() -> ExitCode {
    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    match run_board_smoke() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskdeck smoke failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_board_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let today = parse_date_input(SMOKE_TODAY)?;
    let mut board = TaskBoard::open(
        SqliteKeyValueStore::new(&conn),
        FixedClock(today),
        &BoardConfig::default(),
    );

    board.on_add_task("smoke overdue", "2024-01-01")?;
    let tasks = board.on_add_task("smoke upcoming", "2024-01-20")?;
    board.on_toggle_done(&tasks[1].id);

    let filter = board.filter();
    println!("tasks total={}", board.tasks().len());
    println!("tasks expired={}", board.expired_tasks().len());
    println!(
        "tasks in_range={} start={} end={}",
        board.filtered_tasks().len(),
        format_date(filter.start),
        format_date(filter.end)
    );
    Ok(())
}
