//! Mutant Watch command-line front end
//!
//! Library half of the `mutant-watch` binary: the command tree, the
//! subcommand handlers and logging setup. The binary only wires them
//! together.
//!
//! # Example
//!
//! ```rust
//! use mw_cli::{build_cli, execute, Exit};
//!
//! let matches = build_cli()
//!     .try_get_matches_from(["mutant-watch", "search", "télépo", "--category", "mutant"])
//!     .unwrap();
//! let mut out = Vec::new();
//!
//! assert_eq!(execute(&matches, &mut out).unwrap(), Exit::Success);
//! assert!(String::from_utf8(out).unwrap().contains("Nightcrawler"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod app;
mod commands;
mod logging;

// Re-exports
pub use app::build_cli;
pub use commands::{execute, Exit};
pub use logging::{init_logging, DEFAULT_FILTER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
