//! litcal - Liturgical calendar of the Roman rite

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = liturgical_calendar::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
