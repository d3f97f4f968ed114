//! Command execution against the catalog
//!
//! Applies a [`ParsedCommand`] in place. There is no rollback: a command
//! either fully applies or leaves the catalog untouched and returns an
//! error.

use crate::{
    config::CardMatching,
    core::{
        catalog::{Catalog, Deck},
        interpreter::{Action, CardPayload, ParsedCommand},
    },
    error::{FlashcardError, Result},
};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// What a successfully executed command changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DeckAdded { deck: String },
    CardAdded {
        deck: String,
        front: String,
        back: String,
    },
    DeckRemoved { deck: String, cards: usize },
    CardRemoved {
        deck: String,
        front: String,
        back: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeckAdded { deck } => write!(f, "Added deck {deck}"),
            Self::CardAdded { deck, front, back } => {
                write!(f, "Added flashcard {front}/{back} to deck {deck}")
            }
            Self::DeckRemoved { deck, cards } => {
                write!(f, "Removed deck {deck} ({cards} card(s))")
            }
            Self::CardRemoved { deck, front, back } => {
                write!(f, "Removed flashcard {front}/{back} from deck {deck}")
            }
        }
    }
}

/// Applies parsed commands to a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor {
    card_matching: CardMatching,
}

impl CommandExecutor {
    /// Create an executor using the given card matching rule
    #[must_use]
    pub const fn new(card_matching: CardMatching) -> Self {
        Self { card_matching }
    }

    /// Execute a command, mutating the catalog
    #[instrument(skip(self, catalog))]
    pub fn execute(&self, command: &ParsedCommand, catalog: &mut Catalog) -> Result<Outcome> {
        match (command.action, &command.card) {
            (Action::Add, None) => Ok(Self::add_deck(&command.deck_name, catalog)),
            (Action::Add, Some(card)) => Ok(Self::add_card(&command.deck_name, card, catalog)),
            (Action::Remove, None) => Self::remove_deck(&command.deck_name, catalog),
            (Action::Remove, Some(card)) => self.remove_card(&command.deck_name, card, catalog),
        }
    }

    fn add_deck(name: &str, catalog: &mut Catalog) -> Outcome {
        if catalog.duplicate_deck(name).is_some() {
            warn!("Deck {} already exists, appending a duplicate entry", name);
        } else {
            catalog.add_deck(Deck::new(name));
        }

        info!("Added deck {}", name);
        Outcome::DeckAdded {
            deck: name.to_string(),
        }
    }

    fn add_card(name: &str, payload: &CardPayload, catalog: &mut Catalog) -> Outcome {
        let card = catalog.mint_card(payload.front.as_str(), payload.back.as_str());
        debug!("Minted card {} for deck {}", card.id(), name);

        let deck = catalog.find_or_insert_deck(name);
        deck.add_card(card);

        info!("Deck {} now holds {} card(s)", name, deck.len());
        Outcome::CardAdded {
            deck: name.to_string(),
            front: payload.front.clone(),
            back: payload.back.clone(),
        }
    }

    fn remove_deck(name: &str, catalog: &mut Catalog) -> Result<Outcome> {
        let deck = catalog
            .remove_deck(name)
            .ok_or_else(|| FlashcardError::deck_not_found(name))?;

        info!("Removed deck {} with {} card(s)", name, deck.len());
        Ok(Outcome::DeckRemoved {
            deck: name.to_string(),
            cards: deck.len(),
        })
    }

    fn remove_card(
        &self,
        name: &str,
        payload: &CardPayload,
        catalog: &mut Catalog,
    ) -> Result<Outcome> {
        if catalog.find_deck(name).is_none() {
            return Err(FlashcardError::deck_not_found(name));
        }

        let probe = catalog.mint_card(payload.front.as_str(), payload.back.as_str());
        let deck = catalog
            .find_deck_mut(name)
            .ok_or_else(|| FlashcardError::deck_not_found(name))?;

        let removed = match self.card_matching {
            CardMatching::Identity => deck.remove_card_where(|card| card.id() == probe.id()),
            CardMatching::Value => deck.remove_card_where(|card| card.same_text(&probe)),
        };

        match removed {
            Some(card) => {
                info!("Removed card {} from deck {}", card.id(), name);
                Ok(Outcome::CardRemoved {
                    deck: name.to_string(),
                    front: payload.front.clone(),
                    back: payload.back.clone(),
                })
            }
            None => {
                if self.card_matching == CardMatching::Identity {
                    debug!("Identity matching never matches a card rebuilt from a command");
                }
                Err(FlashcardError::card_not_found(
                    name,
                    payload.front.as_str(),
                    payload.back.as_str(),
                ))
            }
        }
    }
}
