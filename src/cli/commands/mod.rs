//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod doctor;
pub mod global;
pub mod install;
pub mod list;
pub mod remove;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed SDK versions
    List,

    /// Install an SDK version or channel
    Install {
        /// Version to install (a channel name or an exact semantic version)
        #[arg(value_name = "VERSION")]
        version_name: String,

        /// Rename the installed build to its resolved SDK version
        #[arg(long)]
        pin: bool,
    },

    /// Remove an installed SDK version
    Remove {
        /// Version to remove
        #[arg(value_name = "VERSION")]
        version_name: String,
    },

    /// Show or set the global SDK version
    Global {
        /// Version to make global (shows the current one if omitted)
        #[arg(value_name = "VERSION")]
        version_name: Option<String>,
    },

    /// Check cache and configuration health
    Doctor,
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::List => list::execute(),
            Self::Install { version_name, pin } => install::execute(&version_name, pin),
            Self::Remove { version_name } => remove::execute(&version_name),
            Self::Global { version_name } => global::execute(version_name.as_deref()),
            Self::Doctor => doctor::execute(),
        }
    }
}
