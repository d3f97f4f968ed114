//! In-memory flashcard storage
//!
//! A [`Catalog`] holds the decks of one session in insertion order. Each
//! [`Deck`] owns its [`Card`]s; cards carry a session-unique [`CardId`]
//! minted by the catalog so that removal can compare either by identity
//! or by value.

use serde::Serialize;
use std::fmt;

/// Session-unique identity of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single flashcard
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    id: CardId,
    front: String,
    back: String,
}

impl Card {
    /// Identity minted by the catalog
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Prompt side of the card
    pub fn front(&self) -> &str {
        &self.front
    }

    /// Answer side of the card
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Whether both cards carry the same text
    pub fn same_text(&self, other: &Self) -> bool {
        self.front == other.front && self.back == other.back
    }
}

/// A named, ordered collection of cards
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Deck name, matched exactly on lookup
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in insertion order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card to the end of the deck
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first card for which `matches` holds
    pub fn remove_card_where<F>(&mut self, matches: F) -> Option<Card>
    where
        F: Fn(&Card) -> bool,
    {
        let index = self.cards.iter().position(matches)?;
        Some(self.cards.remove(index))
    }
}

/// All decks of one session
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    decks: Vec<Deck>,
    #[serde(skip)]
    next_card_id: u64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Decks in insertion order, duplicates included
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of deck entries
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Whether the catalog holds no decks
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Build a new card with a fresh identity
    pub fn mint_card(&mut self, front: impl Into<String>, back: impl Into<String>) -> Card {
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        Card {
            id,
            front: front.into(),
            back: back.into(),
        }
    }

    /// Append a deck; names are not deduplicated
    pub fn add_deck(&mut self, deck: Deck) -> &mut Deck {
        self.decks.push(deck);
        let last = self.decks.len() - 1;
        &mut self.decks[last]
    }

    /// First deck with exactly this name
    pub fn find_deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.name == name)
    }

    /// First deck with exactly this name, mutably
    pub fn find_deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|deck| deck.name == name)
    }

    /// Append a copy of the first deck with this name
    ///
    /// Copied cards get fresh identities, so ids stay unique across the
    /// catalog. Returns `None` when no deck has this name.
    pub fn duplicate_deck(&mut self, name: &str) -> Option<&mut Deck> {
        let source = self.find_deck(name)?;
        let texts: Vec<(String, String)> = source
            .cards
            .iter()
            .map(|card| (card.front.clone(), card.back.clone()))
            .collect();

        let mut copy = Deck::new(name);
        for (front, back) in texts {
            let card = self.mint_card(front, back);
            copy.add_card(card);
        }
        Some(self.add_deck(copy))
    }

    /// Existing deck with this name, or a newly appended empty one
    pub fn find_or_insert_deck(&mut self, name: &str) -> &mut Deck {
        match self.decks.iter().position(|deck| deck.name == name) {
            Some(index) => &mut self.decks[index],
            None => self.add_deck(Deck::new(name)),
        }
    }

    /// Remove the first deck with exactly this name
    pub fn remove_deck(&mut self, name: &str) -> Option<Deck> {
        let index = self.decks.iter().position(|deck| deck.name == name)?;
        Some(self.decks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_cards_have_distinct_ids() {
        let mut catalog = Catalog::new();
        let a = catalog.mint_card("hola", "hello");
        let b = catalog.mint_card("hola", "hello");
        assert_ne!(a.id(), b.id());
        assert!(a.same_text(&b));
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.add_deck(Deck::new("Spanish"));
        assert!(catalog.find_deck("Spanish").is_some());
        assert!(catalog.find_deck("spanish").is_none());
        assert!(catalog.find_deck("Span").is_none());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut catalog = Catalog::new();
        catalog.add_deck(Deck::new("French"));
        catalog.add_deck(Deck::new("French"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_remove_deck_takes_first_match_only() {
        let mut catalog = Catalog::new();
        let card = catalog.mint_card("un", "one");
        catalog.add_deck(Deck::new("French")).add_card(card);
        catalog.add_deck(Deck::new("German"));
        catalog.add_deck(Deck::new("French"));

        let removed = catalog.remove_deck("French").unwrap();
        assert_eq!(removed.len(), 1);
        let names: Vec<_> = catalog.decks().iter().map(Deck::name).collect();
        assert_eq!(names, vec!["German", "French"]);
        assert!(catalog.find_deck("French").unwrap().is_empty());
        assert!(catalog.remove_deck("Italian").is_none());
    }

    #[test]
    fn test_duplicate_deck_mints_fresh_ids() {
        let mut catalog = Catalog::new();
        let first = catalog.mint_card("a", "b");
        let second = catalog.mint_card("c", "d");
        let deck = catalog.add_deck(Deck::new("Letters"));
        deck.add_card(first);
        deck.add_card(second);

        let copy = catalog.duplicate_deck("Letters").unwrap();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.cards()[1].front(), "c");

        let mut ids: Vec<CardId> = catalog
            .decks()
            .iter()
            .flat_map(Deck::cards)
            .map(Card::id)
            .collect();
        assert_eq!(ids.len(), 4);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(catalog.duplicate_deck("Numbers").is_none());
    }

    #[test]
    fn test_find_or_insert_deck() {
        let mut catalog = Catalog::new();
        catalog.find_or_insert_deck("Spanish");
        catalog.find_or_insert_deck("Spanish");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_card_where() {
        let mut catalog = Catalog::new();
        let first = catalog.mint_card("a", "b");
        let second = catalog.mint_card("a", "b");
        let second_id = second.id();
        let deck = catalog.add_deck(Deck::new("Letters"));
        deck.add_card(first);
        deck.add_card(second);

        let removed = deck.remove_card_where(|card| card.id() == second_id).unwrap();
        assert_eq!(removed.id(), second_id);
        assert_eq!(deck.len(), 1);
        assert!(deck.remove_card_where(|card| card.front() == "z").is_none());
    }
}
