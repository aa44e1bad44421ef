//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use uniquify_profile::StoreBackend;

/// Deterministic per-site credentials from a single master secret.
#[derive(Debug, Parser)]
#[command(name = "uniquify", version, about)]
pub struct Cli {
    /// Directory holding the profile file.
    #[arg(long, env = "UNIQUIFY_DATA_DIR", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Profile store backend.
    #[arg(long, value_enum, default_value_t = Backend::Typed, global = true)]
    pub backend: Backend,

    /// Keep the profile in memory only; nothing is read or written on disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Log more (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Values keep their JSON types (`profile.json`).
    Typed,
    /// Values are stored as strings (`local-profile.json`).
    Local,
}

impl From<Backend> for StoreBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Typed => Self::Typed,
            Backend::Local => Self::Local,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show whether a master secret is set and the current settings
    Status,

    /// Set the master secret (read twice from stdin)
    Setup {
        /// Do not remember the master secret hash
        #[arg(long)]
        no_remember: bool,
    },

    /// Print the credential for a site (master secret read from stdin)
    Derive {
        /// Site identifier, e.g. a host name
        site: String,

        /// Skip checking the master secret against the stored hash
        #[arg(long)]
        no_verify: bool,
    },

    /// Check a master secret (read from stdin) against the stored hash
    Verify,

    /// Forget the stored master secret hash
    Forget,

    /// Show or change derivation settings
    Settings(SettingsArgs),

    /// Wipe the whole profile
    Reset,
}

#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    /// Credential length: 8, 12 or 16
    #[arg(long)]
    pub length: Option<usize>,

    /// Include lowercase letters
    #[arg(long, value_name = "BOOL")]
    pub lowercase: Option<bool>,

    /// Include uppercase letters
    #[arg(long, value_name = "BOOL")]
    pub uppercase: Option<bool>,

    /// Include digits
    #[arg(long, value_name = "BOOL")]
    pub number: Option<bool>,

    /// Include symbols
    #[arg(long, value_name = "BOOL")]
    pub symbol: Option<bool>,
}

impl SettingsArgs {
    /// `true` if no setting was given, i.e. show only.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length.is_none()
            && self.lowercase.is_none()
            && self.uppercase.is_none()
            && self.number.is_none()
            && self.symbol.is_none()
    }
}
