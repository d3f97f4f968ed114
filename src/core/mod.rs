//! Core flashcard functionality
//!
//! Contains the in-memory catalog, the free-text command interpreter,
//! and the executor that applies parsed commands to the catalog.

pub mod catalog;
pub mod executor;
pub mod interpreter;

pub use catalog::{Card, CardId, Catalog, Deck};
pub use executor::{CommandExecutor, Outcome};
pub use interpreter::{Action, CardPayload, CommandInterpreter, ParsedCommand};
