//! CLI argument definitions for the keyl binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read and edit keyed lists held in named variables
#[derive(Parser, Debug)]
#[command(name = "keyl")]
#[command(about = "keyl: keyed lists addressed by dotted paths")]
#[command(version)]
pub struct Cli {
    /// JSON file holding the variables
    #[arg(short, long, default_value = "keyl.json", env = "KEYL_STORE")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a key path, or list the top-level keys when no key is given
    Get(GetArgs),
    /// Set one or more key paths
    Set(SetArgs),
    /// Delete one or more key paths
    Del(DelArgs),
    /// List the keys at a key path
    Keys(KeysArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Variable holding the keyed list
    pub var: String,

    /// Dotted key path
    pub key: Option<String>,

    /// Store the value in this variable and print 1 or 0 instead.
    /// An empty name only tests for the key.
    #[arg(long, requires = "key")]
    pub ret_var: Option<String>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Variable holding the keyed list; created when missing
    pub var: String,

    /// Alternating key paths and values
    #[arg(value_name = "KEY VALUE")]
    pub args: Vec<String>,
}

/// Arguments for the del command
#[derive(clap::Args, Debug)]
pub struct DelArgs {
    /// Variable holding the keyed list
    pub var: String,

    /// Key paths to delete
    pub keys: Vec<String>,
}

/// Arguments for the keys command
#[derive(clap::Args, Debug)]
pub struct KeysArgs {
    /// Variable holding the keyed list
    pub var: String,

    /// Dotted key path of a nested keyed list
    pub key: Option<String>,
}
