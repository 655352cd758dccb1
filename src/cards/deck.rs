//! Deck construction and invariants.
//!
//! A deck holds exactly two cards per registered face, 2K cards in all.
//! Decks are built either by shuffling (every new round) or from a fixed
//! layout (replays and tests), which is validated against the invariant.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardIndex, FaceId};
use super::instance::Card;
use super::registry::FaceRegistry;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// Copies of each face in a deck.
pub const COPIES_PER_FACE: usize = 2;

/// Ordered sequence of cards; a card's position is its index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a freshly shuffled deck: every face twice, uniformly permuted.
    #[must_use]
    pub fn shuffled(registry: &FaceRegistry, rng: &mut GameRng) -> Self {
        let mut faces: Vec<FaceId> = registry
            .ids()
            .flat_map(|face| std::iter::repeat(face).take(COPIES_PER_FACE))
            .collect();
        rng.shuffle(&mut faces);
        Self::from_faces(faces)
    }

    /// Build a deck from a fixed layout.
    ///
    /// Fails unless every registered face appears exactly twice and no
    /// unregistered face appears.
    pub fn from_layout(layout: &[FaceId], registry: &FaceRegistry) -> Result<Self> {
        if layout.len() != registry.len() * COPIES_PER_FACE {
            return Err(EngineError::InvalidLayout(format!(
                "expected {} cards, got {}",
                registry.len() * COPIES_PER_FACE,
                layout.len()
            )));
        }

        let mut counts: FxHashMap<FaceId, usize> = FxHashMap::default();
        for &face in layout {
            if !registry.contains(face) {
                return Err(EngineError::InvalidLayout(format!("unknown face {face}")));
            }
            *counts.entry(face).or_insert(0) += 1;
        }

        if let Some((face, count)) = counts.iter().find(|(_, &n)| n != COPIES_PER_FACE) {
            return Err(EngineError::InvalidLayout(format!(
                "{face} appears {count} times"
            )));
        }

        Ok(Self::from_faces(layout.to_vec()))
    }

    fn from_faces(faces: Vec<FaceId>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Card::new(CardIndex::new(i), face))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.0)
    }

    pub(crate) fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index.0)
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Face layout in board order.
    #[must_use]
    pub fn layout(&self) -> Vec<FaceId> {
        self.cards.iter().map(Card::face).collect()
    }

    /// Count cards per face.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<FaceId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face()).or_insert(0) += 1;
        }
        counts
    }

    /// True once every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Index of the other card with the same face, if any.
    #[must_use]
    pub fn partner_of(&self, index: CardIndex) -> Option<CardIndex> {
        let face = self.get(index)?.face();
        self.cards
            .iter()
            .find(|c| c.face() == face && c.index() != index)
            .map(Card::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(k: usize) -> FaceRegistry {
        FaceRegistry::from_keys((0..k).map(|i| format!("face-{i}"))).unwrap()
    }

    #[test]
    fn test_shuffled_has_two_of_each() {
        let registry = registry(8);
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&registry, &mut rng);

        assert_eq!(deck.len(), 16);
        let counts = deck.face_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_indices_match_positions() {
        let registry = registry(4);
        let mut rng = GameRng::new(1);
        let deck = Deck::shuffled(&registry, &mut rng);

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index(), CardIndex::new(i));
            assert!(card.is_selectable());
        }
    }

    #[test]
    fn test_shuffled_varies_with_seed() {
        let registry = registry(8);
        let a = Deck::shuffled(&registry, &mut GameRng::new(1));
        let b = Deck::shuffled(&registry, &mut GameRng::new(2));

        assert_ne!(a.layout(), b.layout());
    }

    #[test]
    fn test_from_layout() {
        let registry = registry(2);
        let (a, b) = (FaceId::new(0), FaceId::new(1));
        let deck = Deck::from_layout(&[a, b, a, b], &registry).unwrap();

        assert_eq!(deck.layout(), vec![a, b, a, b]);
        assert_eq!(deck.partner_of(CardIndex::new(0)), Some(CardIndex::new(2)));
        assert_eq!(deck.partner_of(CardIndex::new(3)), Some(CardIndex::new(1)));
        assert_eq!(deck.partner_of(CardIndex::new(9)), None);
    }

    #[test]
    fn test_from_layout_wrong_length() {
        let registry = registry(2);
        let result = Deck::from_layout(&[FaceId::new(0), FaceId::new(0)], &registry);
        assert!(matches!(result, Err(EngineError::InvalidLayout(_))));
    }

    #[test]
    fn test_from_layout_uneven_counts() {
        let registry = registry(2);
        let (a, b) = (FaceId::new(0), FaceId::new(1));
        let result = Deck::from_layout(&[a, a, a, b], &registry);
        assert!(matches!(result, Err(EngineError::InvalidLayout(_))));
    }

    #[test]
    fn test_from_layout_unknown_face() {
        let registry = registry(2);
        let (a, z) = (FaceId::new(0), FaceId::new(9));
        let result = Deck::from_layout(&[a, z, a, z], &registry);
        assert!(matches!(result, Err(EngineError::InvalidLayout(_))));
    }

    #[test]
    fn test_all_matched() {
        let registry = registry(1);
        let mut deck = Deck::from_layout(&[FaceId::new(0), FaceId::new(0)], &registry).unwrap();
        assert!(!deck.all_matched());

        for i in 0..2 {
            deck.get_mut(CardIndex::new(i)).unwrap().mark_matched();
        }
        assert!(deck.all_matched());
        assert_eq!(deck.matched_count(), 2);
    }
}
