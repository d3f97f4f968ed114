//! Configuration management for the flashcard manager
//!
//! Centralizes session options and provides validation.

use crate::{cli::Args, error::FlashcardError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Interactive session configuration
    pub session: SessionConfig,
    /// Input source configuration
    pub input: InputConfig,
    /// How card removal decides that two cards are the same
    pub card_matching: CardMatching,
}

/// Interactive session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Prompt printed before each read
    pub prompt: String,
    /// Print the welcome lines on startup
    pub show_banner: bool,
}

/// Input source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Read commands from this file instead of stdin
    pub script: Option<PathBuf>,
}

/// Card equality used when removing a single flashcard
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CardMatching {
    /// Same card object only; a card rebuilt from a command never matches
    #[default]
    Identity,
    /// Same front and back text
    Value,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            show_banner: true,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, FlashcardError> {
        let config = Self {
            debug: args.debug,
            session: SessionConfig {
                prompt: args.prompt.clone(),
                show_banner: !args.no_banner,
            },
            input: InputConfig {
                script: args.script.clone(),
            },
            card_matching: args.card_matching,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), FlashcardError> {
        if self.session.prompt.contains(['\n', '\r']) {
            return Err(FlashcardError::config(
                "Prompt must not contain line breaks",
            ));
        }

        if let Some(script) = &self.input.script {
            if !script.is_file() {
                return Err(FlashcardError::validation(format!(
                    "Script file not found: {}",
                    script.display()
                )));
            }
        }

        Ok(())
    }
}
