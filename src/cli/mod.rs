//! Command-line interface.
//!
//! Parse flags early in `main()`, before the terminal is taken over:
//!
//! ```ignore
//! use marsdeck::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("marsdeck {}", marsdeck::cli::VERSION),
//!     CliCommand::Help => println!("{}", marsdeck::cli::USAGE),
//!     CliCommand::Invalid(reason) => eprintln!("{}", reason),
//!     CliCommand::Run(options) => { /* start the deck */ }
//! }
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, RunOptions};

/// Crate version, from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: marsdeck [OPTIONS]

Swipe through Mars rover photos in the terminal.

Options:
  -p, --page <N>       First page to fetch (default 1)
      --sol <N>        Martian day to query (default 1000)
      --api-key <KEY>  API key (default DEMO_KEY)
  -h, --help           Show this help
  -V, --version        Show version

Environment:
  MARSDECK_API_URL, MARSDECK_API_KEY, MARSDECK_SOL, MARSDECK_START_PAGE,
  MARSDECK_FETCH_TIMEOUT_SECS, MARSDECK_LOG";
