//! Free-text command parsing
//!
//! Turns a line such as `Add hola/hello flashcard to Spanish Deck` into a
//! [`ParsedCommand`]. Parsing only locates the grammar anchors; whether the
//! referenced deck or card exists is decided at execution time.

use crate::error::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// The two supported command verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Add,
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("Add"),
            Self::Remove => f.write_str("Remove"),
        }
    }
}

/// Front/back text of a single flashcard named in a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayload {
    pub front: String,
    pub back: String,
}

/// Structured form of one command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Add or Remove
    pub action: Action,
    /// Target deck name
    pub deck_name: String,
    /// Card to add or remove; `None` targets the whole deck
    pub card: Option<CardPayload>,
}

/// Command-line interpreter keyed on literal anchor tokens
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    /// Substring that selects [`Action::Add`]
    add_keyword: &'static str,
    /// Token that follows the deck name
    deck_anchor: &'static str,
    /// Token that follows the `front/back` pair
    card_anchor: &'static str,
    /// Separator between front and back text
    separator: char,
}

impl CommandInterpreter {
    /// Create an interpreter for the standard grammar
    pub const fn new() -> Self {
        Self {
            add_keyword: "Add",
            deck_anchor: "Deck",
            card_anchor: "flashcard",
            separator: '/',
        }
    }

    /// Parse one trimmed input line
    #[instrument(skip(self))]
    pub fn parse(&self, line: &str) -> Result<ParsedCommand> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        debug!("Command has {} tokens", tokens.len());

        let action = self.action_of(line);
        let deck_name = self.deck_name_of(line, &tokens)?;
        let card = self.card_of(&tokens);

        debug!(
            "Parsed command: action={}, deck='{}', card={:?}",
            action, deck_name, card
        );

        Ok(ParsedCommand {
            action,
            deck_name,
            card,
        })
    }

    fn action_of(&self, line: &str) -> Action {
        if line.contains(self.add_keyword) {
            Action::Add
        } else {
            Action::Remove
        }
    }

    fn deck_name_of(&self, line: &str, tokens: &[&str]) -> Result<String> {
        let anchor = tokens
            .iter()
            .position(|token| *token == self.deck_anchor)
            .ok_or_else(|| {
                FlashcardError::malformed_command(
                    line,
                    format!("expected '<name> {}'", self.deck_anchor),
                )
            })?;

        anchor
            .checked_sub(1)
            .map(|index| tokens[index].to_string())
            .ok_or_else(|| {
                FlashcardError::malformed_command(
                    line,
                    format!("no deck name before '{}'", self.deck_anchor),
                )
            })
    }

    fn card_of(&self, tokens: &[&str]) -> Option<CardPayload> {
        let anchor = tokens.iter().position(|token| *token == self.card_anchor)?;
        let text = tokens.get(anchor.checked_sub(1)?)?;
        let (front, back) = text.split_once(self.separator)?;
        Some(CardPayload {
            front: front.to_string(),
            back: back.to_string(),
        })
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
