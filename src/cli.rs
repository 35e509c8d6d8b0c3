use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sfx_core::drag::ElementRole;
use sfx_core::OsPreference;

#[derive(Parser, Debug)]
#[command(name = "sfxdrag")]
#[command(about = "Drag export bridge for the sound-effects catalog", long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: under the app data directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog service base URL, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or change the OS path convention used for drag export
    Os {
        #[command(subcommand)]
        action: OsAction,
    },
    /// Check that the catalog service is reachable
    Health,
    /// List catalog files
    List {
        /// Free-text search
        #[arg(short, long)]
        q: Option<String>,
        /// Tag filter, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        #[arg(short, long)]
        project: Option<String>,
    },
    /// Print the URI and payload a drag of this file would carry
    Resolve {
        id: String,
        /// Use this convention instead of the stored preference
        #[arg(long)]
        os: Option<OsArg>,
    },
    /// Run a hover and drag of one file and install its payload
    ///
    /// Without --headless the payload goes to the system clipboard and the
    /// process stays running to serve it; press Ctrl-C to release it.
    Export {
        id: String,
        /// Hover this long before dragging (default: until the prefetch settles)
        #[arg(long)]
        hover_ms: Option<u64>,
        /// Element the gesture starts on, innermost first; the card root is implied
        #[arg(long = "from", value_enum)]
        from: Vec<RoleArg>,
        /// Keep the payload in memory instead of writing the system clipboard
        #[arg(long)]
        headless: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum OsAction {
    /// Print the effective preference
    Get,
    /// Store a preference
    Set { os: OsArg },
    /// List the available conventions
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsArg {
    Windows,
    Mac,
    Linux,
}

impl From<OsArg> for OsPreference {
    fn from(value: OsArg) -> Self {
        match value {
            OsArg::Windows => OsPreference::Windows,
            OsArg::Mac => OsPreference::Mac,
            OsArg::Linux => OsPreference::Linux,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleArg {
    Button,
    Link,
    TextInput,
    Slider,
    Checkbox,
    Content,
}

impl From<RoleArg> for ElementRole {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Button => ElementRole::Button,
            RoleArg::Link => ElementRole::Link,
            RoleArg::TextInput => ElementRole::TextInput,
            RoleArg::Slider => ElementRole::Slider,
            RoleArg::Checkbox => ElementRole::Checkbox,
            RoleArg::Content => ElementRole::Content,
        }
    }
}
