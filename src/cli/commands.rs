//! CLI commands and argument parsing

use crate::config::ClientConfig;
use crate::types::NavigationMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// REST collection pager
#[derive(Parser, Debug)]
#[command(name = "restpager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Collection URL (overrides config)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Records per page (overrides config)
    #[arg(short, long, global = true)]
    pub page_size: Option<u32>,

    /// Navigation mode (overrides config)
    #[arg(short, long, global = true)]
    pub mode: Option<NavigationMode>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(url) = &self.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of the collection
    List {
        /// Pages to move forward from the first page
        #[arg(long, default_value = "0")]
        forward: u32,
    },

    /// Browse interactively (f = forward, b = back, n = new, q = quit)
    Browse,

    /// Create a record
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: String,

        #[arg(long, default_value = "")]
        description: String,
    },
}

/// One line of input in `browse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Forward,
    Back,
    New,
    Quit,
    Help,
}

impl BrowseCommand {
    /// Parse a line; anything unrecognised asks for help
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "f" | "forward" | "next" => Self::Forward,
            "b" | "back" | "prev" => Self::Back,
            "n" | "new" => Self::New,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("f", BrowseCommand::Forward ; "short forward")]
    #[test_case("  Forward ", BrowseCommand::Forward ; "long forward")]
    #[test_case("b", BrowseCommand::Back ; "short back")]
    #[test_case("prev", BrowseCommand::Back ; "prev alias")]
    #[test_case("n", BrowseCommand::New ; "new")]
    #[test_case("QUIT", BrowseCommand::Quit ; "quit")]
    #[test_case("", BrowseCommand::Help ; "blank")]
    #[test_case("jump", BrowseCommand::Help ; "unknown")]
    fn test_browse_command_parse(line: &str, expected: BrowseCommand) {
        assert_eq!(BrowseCommand::parse(line), expected);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "restpager",
            "--base-url",
            "http://api.test/items",
            "--page-size",
            "5",
            "--mode",
            "page",
            "list",
        ]);
        let mut config = ClientConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.base_url, "http://api.test/items");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.mode, NavigationMode::Page);
        assert!(matches!(cli.command, Commands::List { forward: 0 }));
    }

    #[test]
    fn test_cli_create_args() {
        let cli = Cli::parse_from([
            "restpager", "create", "--name", "Blob", "--age", "12",
        ]);
        match cli.command {
            Commands::Create {
                name,
                age,
                description,
            } => {
                assert_eq!(name, "Blob");
                assert_eq!(age, "12");
                assert!(description.is_empty());
            }
            other => panic!("Expected Create, got {other:?}"),
        }
    }
}
