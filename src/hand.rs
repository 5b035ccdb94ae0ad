use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::GameError;

/// A participant's cards for one wager.
///
/// A hand starts active and is deactivated exactly once, by sticking,
/// doubling down, busting, or the optional five-card auto-stand. An empty
/// hand scores 0 so display code can render it before the deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    wager: Option<u64>,
    active: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            wager: None,
            active: true,
        }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            wager: None,
            active: true,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn wager(&self) -> Option<u64> {
        self.wager
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Best score not exceeding 21 where possible. Every Ace is counted as
    /// 11 first, then demoted to 1 one at a time while the total is over 21.
    pub fn score(&self) -> u8 {
        let mut total: u32 = self.cards.iter().map(|c| c.value() as u32).sum();
        let mut soft_aces = self.cards.iter().filter(|c| c.is_ace()).count();
        while total > 21 && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total.min(u8::MAX as u32) as u8
    }

    /// True when an Ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        let hard: u32 = self
            .cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { c.value() as u32 })
            .sum();
        self.cards.iter().any(|c| c.is_ace()) && hard + 10 == self.score() as u32
    }

    /// A natural: exactly two cards scoring 21. A three-card 21 is not a
    /// blackjack.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Exactly two cards of identical literal rank. A king and a queen are
    /// both worth 10 but do not form a pair.
    pub fn has_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank() == self.cards[1].rank()
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the last-added card; used by split to move one
    /// card into the sibling hand.
    pub fn pop_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// One-way transition to inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn set_wager(&mut self, amount: u64, minimum_bet: u64) -> Result<(), GameError> {
        if amount < minimum_bet {
            return Err(GameError::InvalidWager {
                wager: amount,
                minimum: minimum_bet,
            });
        }
        self.wager = Some(amount);
        Ok(())
    }

    pub fn double_wager(&mut self) {
        if let Some(wager) = self.wager.as_mut() {
            *wager *= 2;
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(symbols: &[&str]) -> Hand {
        Hand::with_cards(symbols.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn test_score_empty_hand_is_zero() {
        assert_eq!(Hand::new().score(), 0);
    }

    #[test]
    fn test_score_no_aces() {
        assert_eq!(hand(&["2H", "3S"]).score(), 5);
        assert_eq!(hand(&["KH", "QS"]).score(), 20);
        assert_eq!(hand(&["10H", "9D", "5C"]).score(), 24);
    }

    #[test]
    fn test_score_soft_ace() {
        assert_eq!(hand(&["AH", "6S"]).score(), 17);
        assert!(hand(&["AH", "6S"]).is_soft());
    }

    #[test]
    fn test_score_demotes_one_ace() {
        // 11 + 7 + 6 = 24, demote the ace: 1 + 7 + 6 = 14.
        assert_eq!(hand(&["AH", "7S", "6D"]).score(), 14);
        assert!(!hand(&["AH", "7S", "6D"]).is_soft());
    }

    #[test]
    fn test_score_all_aces_demoted() {
        assert_eq!(hand(&["AH", "7S", "6D", "7C"]).score(), 21);
        assert_eq!(hand(&["AH", "7S", "6D", "8C"]).score(), 22);
    }

    #[test]
    fn test_score_multiple_aces() {
        assert_eq!(hand(&["AH", "AS"]).score(), 12);
        assert_eq!(hand(&["AH", "AS", "9C"]).score(), 21);
        assert_eq!(hand(&["AH", "AS", "AD", "AC"]).score(), 14);
    }

    #[test]
    fn test_is_blackjack() {
        assert!(hand(&["AH", "KD"]).is_blackjack());
        assert!(!hand(&["AH", "9D"]).is_blackjack());
        // Three-card 21 is not a natural.
        assert!(!hand(&["7H", "7S", "7D"]).is_blackjack());
    }

    #[test]
    fn test_is_bust() {
        assert!(hand(&["KH", "QS", "5C"]).is_bust());
        assert!(!hand(&["KH", "QS"]).is_bust());
    }

    #[test]
    fn test_has_pair_literal_rank_only() {
        assert!(hand(&["AH", "AD"]).has_pair());
        assert!(hand(&["8H", "8S"]).has_pair());
        // Equal value, different rank: not a pair.
        assert!(!hand(&["KH", "QD"]).has_pair());
        assert!(!hand(&["8H", "8S", "2C"]).has_pair());
    }

    #[test]
    fn test_pop_card() {
        let mut h = hand(&["AH", "KD"]);
        assert_eq!(h.pop_card(), Some("KD".parse().unwrap()));
        assert_eq!(h.cards().len(), 1);
    }

    #[test]
    fn test_deactivate_is_one_way() {
        let mut h = Hand::new();
        assert!(h.is_active());
        h.deactivate();
        assert!(!h.is_active());
    }

    #[test]
    fn test_set_wager_below_minimum() {
        let mut h = Hand::new();
        assert!(matches!(
            h.set_wager(499, 500),
            Err(GameError::InvalidWager {
                wager: 499,
                minimum: 500
            })
        ));
        assert_eq!(h.wager(), None);
    }

    #[test]
    fn test_double_wager() {
        let mut h = Hand::new();
        h.set_wager(600, 500).unwrap();
        h.double_wager();
        assert_eq!(h.wager(), Some(1200));
    }
}
