use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;

/// Most deck packs a shoe may be built from.
pub const MAX_DECKS: usize = 5;

/// The working set of cards available to draw from, built from one or more
/// 52-card decks. Owned by the table; draws are sequential, and the last
/// element of the vector is the top of the shoe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `decks` packs of 52 in canonical suit-major order. The order is
    /// irrelevant in practice because a shuffle always follows.
    pub fn new(decks: usize) -> Result<Self, GameError> {
        if decks == 0 || decks > MAX_DECKS {
            return Err(GameError::InvalidDeckCount(decks));
        }
        let mut cards = Vec::with_capacity(decks * 52);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Ok(Self { cards })
    }

    /// Builds a shoe from an explicit card list, bypassing generation.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.is_empty() {
            return Err(GameError::EmptyShoe);
        }
        Ok(Self { cards })
    }

    /// Deterministic in-place shuffle: the same seed over the same
    /// composition always yields the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyShoe)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
