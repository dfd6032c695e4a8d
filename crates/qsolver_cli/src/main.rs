//! qsolver
//!
//! Prints the real roots of A * x^2 + B * x + C = 0.

use qsolver_cli::app::{execute, finish, parse_command, Command};
use qsolver_cli::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    let result = parse_command(std::env::args_os()).and_then(|command| {
        if let Command::Solve(request) = &command {
            init_tracing(request.settings.log_level)?;
            tracing::debug!(
                version = qsolver_cli::VERSION,
                log_level = %request.settings.log_level,
                "qsolver settings loaded"
            );
        }
        execute(&command, &mut out)
    });

    ExitCode::from(finish(result, &mut out, &mut err))
}
