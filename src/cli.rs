//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Load site data sources into a template context
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: tola.toml)
    #[arg(short = 'C', long, default_value = "tola.toml")]
    pub config: PathBuf,

    /// Print full error traces for files that fail to load
    #[arg(long)]
    pub debug: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load every data source and print the resulting `data` mapping as JSON
    Build {
        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report whether a data source name can be loaded
    Check {
        /// Source name as it would appear in `[data] sources`
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["tola-data", "-r", "site", "--debug", "build", "-o", "data.json"]);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("tola.toml"));
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::Build { output: Some(ref path) } if path == &PathBuf::from("data.json")
        ));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["tola-data", "-C", "site.toml", "check", "team"]);
        assert!(matches!(cli.command, Commands::Check { ref name } if name == "team"));
        assert!(!cli.debug);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
