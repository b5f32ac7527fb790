//! Command-line argument parsing.

use crate::config::DeckConfig;

/// Flags that adjust the deck for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub page: Option<u32>,
    pub api_key: Option<String>,
    pub sol: Option<u32>,
}

impl RunOptions {
    /// Layer these flags over `config`.
    pub fn apply(&self, mut config: DeckConfig) -> DeckConfig {
        if let Some(page) = self.page {
            config = config.with_start_page(page);
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        if let Some(sol) = self.sol {
            config = config.with_sol(sol);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the deck (default)
    Run(RunOptions),
    /// Bad arguments, with the reason
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// ```
/// use marsdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["marsdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--page" | "-p" => match number(&arg, args.next()) {
                Ok(0) => return CliCommand::Invalid("--page must be at least 1".to_string()),
                Ok(page) => options.page = Some(page),
                Err(reason) => return CliCommand::Invalid(reason),
            },
            "--sol" => match number(&arg, args.next()) {
                Ok(sol) => options.sol = Some(sol),
                Err(reason) => return CliCommand::Invalid(reason),
            },
            "--api-key" => match args.next() {
                Some(key) if !key.is_empty() => options.api_key = Some(key),
                _ => return CliCommand::Invalid("--api-key needs a value".to_string()),
            },
            other => return CliCommand::Invalid(format!("unknown argument: {}", other)),
        }
    }

    CliCommand::Run(options)
}

fn number(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got {:?}", flag, value))
}
