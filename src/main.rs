//! sched - Dependency-aware task sequencer

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = smart_scheduler::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
