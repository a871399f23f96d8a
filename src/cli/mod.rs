//! Command-line interface.
//!
//! Without a subcommand `zwickly` launches the TUI; the flags here tune it.
//! The subcommands answer quickly and exit.

pub mod completions;

use crate::assistant;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use std::path::PathBuf;

/// Campus life in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "zwickly",
    version,
    about = "Campus life in your terminal: events, social wall, mensa, timetable and the Pixi assistant",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Color theme for this run: dark, light or nocolor (overrides the config file)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Go straight to onboarding instead of waiting on the splash screen
    #[arg(long)]
    pub skip_splash: bool,

    /// Use this configuration file instead of ~/.config/zwickly/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask Pixi a question and print the answer
    Ask {
        /// The question, e.g. "what's for lunch?"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Output the answer as JSON for scripting
        #[arg(long)]
        json: bool,
    },
    /// Show the configuration file location and effective values
    Config,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from the environment when omitted)
        shell: Option<Shell>,
    },
}

#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    question: &'a str,
    answer: &'a str,
    answered_at: String,
}

impl Cli {
    /// Config path from `--config`, or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Execute a subcommand. Returns false when there was none and the TUI
    /// should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Ask { text, json }) => Self::cmd_ask(&text.join(" "), *json)?,
            Some(Commands::Config) => self.cmd_config()?,
            Some(Commands::Completions { shell }) => completions::generate(*shell)?,
            None => return Ok(false),
        }
        Ok(true)
    }

    fn cmd_ask(question: &str, json: bool) -> Result<()> {
        let answer = assistant::resolve(question);
        if json {
            let output = AskOutput {
                question,
                answer,
                answered_at: chrono::Local::now().to_rfc3339(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize answer")?
            );
        } else {
            println!("🤖 Pixi: {}", answer);
        }
        Ok(())
    }

    fn cmd_config(&self) -> Result<()> {
        let config_path = self.config_path();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        println!("Config file: {}", config_path.display());
        println!("Log file:    {}", Config::log_dir().join("zwickly.log").display());
        println!();
        print!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to serialize config")?
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["zwickly", "--skip-splash", "--theme", "light"]);
        assert!(cli.command.is_none());
        assert!(cli.skip_splash);
        assert_eq!(cli.theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["zwickly", "ask", "what's", "for", "lunch?", "--json"]);
        match cli.command {
            Some(Commands::Ask { text, json }) => {
                assert_eq!(text.join(" "), "what's for lunch?");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_flag_overrides_path() {
        let cli = Cli::parse_from(["zwickly", "config", "--config", "/tmp/z.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/z.toml"));
        let cli = Cli::parse_from(["zwickly"]);
        assert_eq!(cli.config_path(), Config::default_path());
    }
}
