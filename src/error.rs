//! Error types for the flashcard manager
//!
//! Separates conditions that are reported to the user and recovered from
//! (bad commands, missing decks or cards) from those that end the session.

use thiserror::Error;

/// Main error type for the flashcard manager
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// A command line is missing a required grammar anchor
    #[error("Malformed command '{line}': {message}")]
    MalformedCommand { line: String, message: String },

    /// A command targets a deck that is not in the catalog
    #[error("Deck not found: {name}")]
    DeckNotFound { name: String },

    /// A card removal found no matching card in the deck
    #[error("Flashcard {front}/{back} not found in deck {deck}")]
    CardNotFound {
        deck: String,
        front: String,
        back: String,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {operation} failed")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FlashcardError {
    /// Create a new malformed command error
    pub fn malformed_command(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedCommand {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a new deck lookup error
    pub fn deck_not_found(name: impl Into<String>) -> Self {
        Self::DeckNotFound { name: name.into() }
    }

    /// Create a new card lookup error
    pub fn card_not_found(
        deck: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self::CardNotFound {
            deck: deck.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    /// Create a new I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the session should report this error and keep reading input
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedCommand { .. } | Self::DeckNotFound { .. } | Self::CardNotFound { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FlashcardError>;
