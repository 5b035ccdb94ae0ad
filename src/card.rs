use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Card rank. Face cards all count 10 towards a score; the Ace is worth
/// 11 until the scoring algorithm demotes it to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Soft value of the rank: Ace is 11 here, faces are 10.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.symbol() == s)
            .ok_or_else(|| GameError::InvalidRank(s.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
        }
    }
}

impl FromStr for Suit {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .iter()
            .copied()
            .find(|suit| suit.symbol() == s)
            .ok_or_else(|| GameError::InvalidSuit(s.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single playing card. Plain value type; a multi-deck shoe holds several
/// equal cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Soft value of the card towards a hand score.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses the wire form used by the table interface: rank symbol followed
    /// by suit symbol, e.g. `"AS"`, `"10H"`, `"KD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split before the last character, not the last byte; the input is
        // arbitrary user text and may end in multi-byte UTF-8.
        let suit_start = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        let (rank_part, suit_part) = s.split_at(suit_start);
        if rank_part.is_empty() {
            return Err(GameError::InvalidCard(s.to_string()));
        }
        let rank = rank_part
            .parse::<Rank>()
            .map_err(|_| GameError::InvalidCard(s.to_string()))?;
        let suit = suit_part
            .parse::<Suit>()
            .map_err(|_| GameError::InvalidCard(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        assert_eq!(Rank::King.value(), 10);
    }

    #[test]
    fn test_card_parse_valid() {
        let card: Card = "AH".parse().unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Hearts);

        let card: Card = "10S".parse().unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spades);
    }

    #[test]
    fn test_card_parse_invalid_rank() {
        assert!(matches!(
            "11H".parse::<Card>(),
            Err(GameError::InvalidCard(_))
        ));
        assert!(matches!("1".parse::<Rank>(), Err(GameError::InvalidRank(_))));
    }

    #[test]
    fn test_card_parse_rejects_arbitrary_text() {
        // Multi-byte trailing characters must parse to an error, not panic
        // on a byte-boundary split.
        for input in ["A\u{e9}", "\u{e9}", "10\u{2660}", "", "A"] {
            assert!(matches!(
                input.parse::<Card>(),
                Err(GameError::InvalidCard(_))
            ));
        }
    }

    #[test]
    fn test_card_parse_invalid_suit() {
        assert!(matches!(
            "AP".parse::<Card>(),
            Err(GameError::InvalidCard(_))
        ));
        assert!(matches!("P".parse::<Suit>(), Err(GameError::InvalidSuit(_))));
    }

    #[test]
    fn test_card_display_round_trip() {
        for symbol in ["AS", "10D", "QC", "7H"] {
            let card: Card = symbol.parse().unwrap();
            assert_eq!(card.to_string(), symbol);
        }
    }
}
