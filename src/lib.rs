//! # Flashcards
//!
//! An interactive command-line flashcard manager. Decks and cards are
//! managed with free-text commands typed at a prompt and kept in memory
//! for the length of the session.
//!
//! ## Features
//!
//! - Free-text command grammar (`Add hola/hello flashcard to Spanish Deck`)
//! - In-memory catalog of named decks
//! - Selectable card matching for removals
//! - Script replay from a file
//!
//! ## Example
//!
//! ```
//! use flashcards::core::{Catalog, CommandExecutor, CommandInterpreter};
//!
//! let interpreter = CommandInterpreter::new();
//! let command = interpreter.parse("Add hola/hello flashcard to Spanish Deck")?;
//!
//! let mut catalog = Catalog::new();
//! let outcome = CommandExecutor::default().execute(&command, &mut catalog)?;
//! println!("{outcome}");
//! assert_eq!(catalog.find_deck("Spanish").map(|deck| deck.len()), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout carries only the session transcript.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
