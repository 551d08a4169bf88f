//! Ordered card collections.

use crate::Card;
use serde::{Deserialize, Serialize};

/// Cards in a stable, explicit order with id lookup.
///
/// Inserting a card whose id is already present replaces the earlier card
/// in place.
///
/// # Examples
///
/// ```
/// use fabula_codex::{Card, CardSet};
///
/// let mut set = CardSet::new();
/// set.insert(Card::from_markdown("first", "A"));
/// set.insert(Card::from_markdown("second", "B"));
/// set.insert(Card::from_markdown("replaced", "A"));
///
/// assert_eq!(set.ids().collect::<Vec<_>>(), vec!["A", "B"]);
/// assert_eq!(set.get("A").unwrap().body(), "replaced");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card, replacing any card with the same id.
    pub fn insert(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.id() == card.id()) {
            Some(slot) => *slot = card,
            None => self.cards.push(card),
        }
    }

    /// Looks a card up by id.
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// First card in order.
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Card ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.id().as_str())
    }

    /// Cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the set holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
