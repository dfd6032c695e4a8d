//! Command-line argument definition.

use clap::{ArgAction, Parser};
use qsolver_core::types::{parse_real, ParseError};
use std::ffi::OsString;
use std::path::PathBuf;

/// Solve a quadratic equation in form A * x^2 + B * x + C = 0
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "qsolver")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Coefficients A, B and C of the equation
    #[arg(value_name = "COEFFICIENT", value_parser = parse_number)]
    pub coefficients: Vec<f64>,

    /// Real numbers compare precision
    #[arg(
        short,
        long,
        value_name = "PRECISION",
        env = "QSOLVER_PRECISION",
        value_parser = parse_number
    )]
    pub precision: Option<f64>,

    /// Settings file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", env = "QSOLVER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Show the help message and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

/// Options whose value is the next argument, with their long spelling
const VALUE_OPTIONS: [(&str, &str); 5] = [
    ("-p", "--precision"),
    ("--precision", "--precision"),
    ("-c", "--config"),
    ("--config", "--config"),
    ("--log-level", "--log-level"),
];

fn parse_number(input: &str) -> Result<f64, ParseError> {
    parse_real(input)
}

fn is_number(token: &str) -> bool {
    parse_real::<f64>(token).is_ok()
}

fn is_option_value(token: &OsString) -> bool {
    token
        .to_str()
        .map_or(true, |text| !text.starts_with('-') || is_number(text))
}

/// Rewrite `argv` so that clap never takes a number for a flag.
///
/// Any token that parses as a real number is positional, even with a leading
/// `-` (`-.5`, `-1e-3`). Option values are attached with `=` and all
/// positionals move behind a `--` separator, keeping their relative order.
fn normalize_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = argv.into_iter().map(Into::<OsString>::into).peekable();
    let mut options: Vec<OsString> = tokens.next().into_iter().collect();
    let mut positionals = Vec::new();

    while let Some(token) = tokens.next() {
        let Some(text) = token.to_str() else {
            positionals.push(token);
            continue;
        };

        if text == "--" {
            positionals.extend(tokens.by_ref());
            break;
        }
        if !text.starts_with('-') || is_number(text) {
            positionals.push(token);
            continue;
        }

        let long = VALUE_OPTIONS
            .iter()
            .find(|(flag, _)| *flag == text)
            .map(|(_, long)| *long);
        match long.and_then(|long| Some((long, tokens.next_if(is_option_value)?))) {
            Some((long, value)) => {
                let mut joined = OsString::from(long);
                joined.push("=");
                joined.push(value);
                options.push(joined);
            }
            // Left for clap to accept or report
            None => options.push(token),
        }
    }

    if !positionals.is_empty() {
        options.push(OsString::from("--"));
        options.append(&mut positionals);
    }
    options
}

impl Args {
    /// Parse arguments from an iterator, the first item being the program name.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(normalize_argv(argv))
    }
}
