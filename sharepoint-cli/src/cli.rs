//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

/// App-only SharePoint client using Azure AD client credentials.
#[derive(Debug, Parser)]
#[command(name = "sharepoint", version, about)]
pub struct Cli {
    /// Dotenv file to load before reading the environment
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate configuration, authenticate, connect and list a few files (default)
    Check {
        /// Document library to list
        #[arg(long, default_value = "Documents")]
        library: String,
    },
    /// Show site metadata
    Site,
    /// List files in a document library
    List {
        /// Document library to list
        #[arg(long, default_value = "Documents")]
        library: String,
    },
    /// Upload a local file into a document library
    Upload {
        /// Local file to upload
        path: PathBuf,
        /// Target document library
        #[arg(long, default_value = "Documents")]
        library: String,
        /// Remote file name (defaults to the local file name)
        #[arg(long)]
        name: Option<String>,
    },
}

impl Cli {
    /// Returns the sub-command, defaulting to `check` on the Documents library.
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Check {
            library: "Documents".to_string(),
        })
    }
}
