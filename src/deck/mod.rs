//! Card decks: the ordered, fixed set of cards a session lays out.
//!
//! This module provides:
//! - `CardDeck` - the cards plus the shared cell size
//! - `manifest` - decks described by a TOML file
//! - `scanner` - decks built from a directory of card images

pub mod manifest;
pub mod scanner;

use crate::error::CardsError;
use crate::models::{CardItem, CardSize};

/// An ordered, non-empty set of cards.
///
/// Every card is laid out in the same cell: the component-wise maximum of
/// all card sizes, never smaller than one unit per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDeck {
    cards: Vec<CardItem>,
    cell: CardSize,
}

impl CardDeck {
    /// Builds a deck from cards in display order.
    ///
    /// Card indices are reassigned from their position.
    pub fn new(mut cards: Vec<CardItem>) -> Result<Self, CardsError> {
        if cards.is_empty() {
            return Err(CardsError::NoCards);
        }

        for (index, card) in cards.iter_mut().enumerate() {
            card.index = index;
        }
        let cell = cards
            .iter()
            .fold(CardSize::UNIT, |cell, card| cell.max(card.size));

        Ok(Self { cards, cell })
    }

    /// Builds a deck of anonymous cards.
    pub fn from_sizes<I>(sizes: I) -> Result<Self, CardsError>
    where
        I: IntoIterator<Item = CardSize>,
    {
        let cards = sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| CardItem::new(index, format!("card-{}", index), size))
            .collect();
        Self::new(cards)
    }

    pub fn cards(&self) -> &[CardItem] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cell every card is laid out in.
    pub fn cell_size(&self) -> CardSize {
        self.cell
    }
}
