//! Command-line argument parsing

use crate::config::CardMatching;
use clap::Parser;
use std::path::PathBuf;

/// Flashcards - manage decks of flashcards from an interactive prompt
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "flashcards")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Prompt printed before each command
    #[arg(long, default_value = "$ ")]
    pub prompt: String,

    /// Read commands from a file instead of standard input
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// How a removed flashcard is matched against the deck
    #[arg(long, value_enum, default_value_t = CardMatching::Identity)]
    pub card_matching: CardMatching,

    /// Do not print the welcome message
    #[arg(long)]
    pub no_banner: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["flashcards"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.prompt, "$ ");
        assert!(args.script.is_none());
        assert_eq!(args.card_matching, CardMatching::Identity);
        assert!(!args.no_banner);
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["flashcards", "--debug"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_session_options() {
        let args = Args::try_parse_from([
            "flashcards",
            "--prompt",
            "> ",
            "-s",
            "commands.txt",
            "--card-matching",
            "value",
        ])
        .unwrap();
        assert_eq!(args.prompt, "> ");
        assert_eq!(args.script, Some(PathBuf::from("commands.txt")));
        assert_eq!(args.card_matching, CardMatching::Value);
    }

    #[test]
    fn test_reject_unknown_matching() {
        assert!(Args::try_parse_from(["flashcards", "--card-matching", "fuzzy"]).is_err());
    }
}
