//! Subcommand handlers.
//!
//! Each handler runs one keyed-list command against the loaded variables and
//! reports what to print and whether the variables changed.

pub mod del;
pub mod get;
pub mod keys;
pub mod set;

use keylist::Bindings;

use crate::cli::Commands;

/// Result of a subcommand.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print on stdout
    pub output: Option<String>,
    /// Whether the variables must be saved
    pub modified: bool,
}

/// Dispatches `command` against `vars`.
pub fn run(vars: &mut Bindings, command: &Commands) -> Result<Outcome, keylist::Error> {
    match command {
        Commands::Get(args) => get::run(vars, args),
        Commands::Set(args) => set::run(vars, args),
        Commands::Del(args) => del::run(vars, args),
        Commands::Keys(args) => keys::run(vars, args),
    }
}
