//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Render binary trees as level-aligned text diagrams
#[derive(Parser, Debug)]
#[command(name = "bintree-render")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree given in level-order notation
    Render {
        #[command(flatten)]
        input: TreeInput,
    },

    /// Print the depth of a tree given in level-order notation
    Depth {
        #[command(flatten)]
        input: TreeInput,
    },

    /// Render the sample tree 1 -> 2 -> 3 (right children)
    Demo,

    /// Print the column table for a balanced tree of DEPTH levels
    Table {
        /// Number of levels
        depth: usize,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    /// True if the command reads the loaded settings.
    pub fn uses_settings(&self) -> bool {
        match self {
            Commands::Render { .. } | Commands::Depth { .. } | Commands::Table { .. } => true,
            Commands::Config { command } => matches!(command, ConfigCommands::Show),
            Commands::Demo | Commands::Completion { .. } => false,
        }
    }
}

/// Where the level-order notation comes from.
#[derive(Args, Debug, Clone)]
pub struct TreeInput {
    /// Level-order notation, e.g. "1,null,2,null,3" (stdin if omitted or "-")
    #[arg(conflicts_with = "file")]
    pub tree: Option<String>,

    /// Read the notation from a file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Token marking an absent child (overrides config)
    #[arg(long)]
    pub null_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config file path
    Path,

    /// Print a commented config template
    Template,
}
