//! Command execution.
//!
//! [`parse_command`] turns raw arguments into a [`Command`], [`execute`]
//! runs it and [`finish`] reports the outcome and picks the exit status.
//! [`run`] chains all three.

use crate::args::Args;
use crate::config::{build_settings, Settings};
use crate::error::{CliError, Result};
use qsolver_core::math::solvers::{EquationSolver, SolverConfig};
use std::ffi::OsString;
use std::io::Write;

/// Fixed usage banner
pub const USAGE: &str = "\
usage: qsolver [-h] [-p PRECISION] A B C

Solve a quadratic equation in form A * x^2 + B * x + C = 0
Print newline-separated roots of the equation.

positional arguments:
 A, B, C                      coefficients of the equation

optional arguments:
 -h, --help                   show this help message and exit
 -p, --precision PRECISION    set real numbers compare precision
 -c, --config FILE            read settings from a TOML file
     --log-level LEVEL        set log verbosity (trace, debug, info, warn, error)
";

/// Process exit status for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// A validated request to solve one equation
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRequest {
    /// Coefficient of x^2
    pub a: f64,
    /// Coefficient of x
    pub b: f64,
    /// Constant term
    pub c: f64,
    /// Resolved settings
    pub settings: Settings,
}

/// What the tool has been asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the usage banner
    Help,
    /// Solve an equation
    Solve(SolveRequest),
}

/// Parse and validate command-line arguments.
///
/// The help flag wins over every check except argument parsing itself.
pub fn parse_command<I, T>(argv: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_args(argv)?;

    if args.help {
        return Ok(Command::Help);
    }

    let [a, b, c] = match args.coefficients.as_slice() {
        &[a, b, c] => [a, b, c],
        other => {
            return Err(CliError::WrongCoefficientCount { given: other.len() });
        }
    };

    let settings = build_settings(&args)?;

    Ok(Command::Solve(SolveRequest { a, b, c, settings }))
}

/// Run a command, writing roots or the banner to `out`.
pub fn execute<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Help => {
            out.write_all(USAGE.as_bytes())?;
        }
        Command::Solve(request) => {
            let SolveRequest { a, b, c, settings } = request;
            tracing::debug!(a, b, c, precision = settings.precision, "Solving quadratic equation");

            let solver = EquationSolver::new(SolverConfig::try_new(settings.precision)?);
            let roots = solver.solve_quadratic(*a, *b, *c).inspect_err(|e| {
                tracing::warn!(error = %e, "Equation could not be solved");
            })?;

            tracing::debug!(count = roots.len(), "Roots found");
            for root in roots {
                // Adding zero turns -0 into 0
                writeln!(out, "{}", root + 0.0)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Report the outcome of a run and return the process exit status.
///
/// Error messages go to `err`; the usage banner, when due, goes to `out`.
pub fn finish<O: Write, E: Write>(result: Result<()>, out: &mut O, err: &mut E) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            // Nothing sensible is left to do if reporting itself fails
            let _ = writeln!(err, "{}", error.to_string().trim_end());
            if error.shows_usage() {
                let _ = out.write_all(USAGE.as_bytes());
            }
            error.exit_code()
        }
    }
}

/// Parse, execute and report in one go.
pub fn run<I, T, O, E>(argv: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let result = parse_command(argv).and_then(|command| execute(&command, out));
    finish(result, out, err)
}
