use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use crate::rules::TableRules;
use crate::shoe::Shoe;

/// A player decision for one active hand. The wire strings are the ones the
/// input collector presents and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stick,
    Split,
    DoubleDown,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stick => "stick",
            Action::Split => "split",
            Action::DoubleDown => "double-down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Action::Hit),
            "stick" => Ok(Action::Stick),
            "split" => Ok(Action::Split),
            "double-down" => Ok(Action::DoubleDown),
            other => Err(GameError::InvalidAction(other.to_string())),
        }
    }
}

/// Shared capability of anyone holding hands at the table. Hands are owned
/// exclusively and live for one round.
pub trait HasHands {
    fn hands(&self) -> &[Hand];
    fn hands_mut(&mut self) -> &mut Vec<Hand>;

    fn give_hand(&mut self, hand: Hand) {
        self.hands_mut().push(hand);
    }

    /// Index of the first hand still active, in hand-creation order.
    fn get_next_hand(&self) -> Option<usize> {
        self.hands().iter().position(|h| h.is_active())
    }

    fn reset(&mut self) {
        self.hands_mut().clear();
    }
}

/// A seated player: a name, a purse in pennies, and one or more hands
/// (several after splitting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    purse: u64,
    split_count: u8,
    hands: Vec<Hand>,
}

impl HasHands for Player {
    fn hands(&self) -> &[Hand] {
        &self.hands
    }

    fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }

    fn reset(&mut self) {
        self.hands.clear();
        self.split_count = 0;
    }
}

impl Player {
    pub fn new(name: impl Into<String>, purse: u64) -> Result<Self, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }
        Ok(Self {
            name,
            purse,
            split_count: 0,
            hands: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn purse(&self) -> u64 {
        self.purse
    }

    pub fn split_count(&self) -> u8 {
        self.split_count
    }

    pub fn credit(&mut self, amount: u64) {
        self.purse += amount;
    }

    pub fn debit(&mut self, amount: u64) -> Result<(), GameError> {
        if amount > self.purse {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                purse: self.purse,
            });
        }
        self.purse -= amount;
        Ok(())
    }

    /// Draws one card into the hand. Busting, reaching 21, or filling a
    /// five-card hand (when the rule is on) deactivates it automatically.
    pub fn hit(&mut self, idx: usize, shoe: &mut Shoe, rules: &TableRules) -> Result<(), GameError> {
        let card = shoe.draw()?;
        let hand = &mut self.hands[idx];
        hand.add_card(card);
        if hand.score() >= 21 {
            hand.deactivate();
        } else if rules.five_card_charlie && hand.cards().len() >= 5 {
            hand.deactivate();
        }
        Ok(())
    }

    /// Deactivates the hand without drawing.
    pub fn stick(&mut self, idx: usize) {
        self.hands[idx].deactivate();
    }

    /// Split is legal when the hand is a wagered pair, the purse covers a
    /// matching wager, and the per-round split cap has not been reached.
    pub fn can_split(&self, idx: usize, rules: &TableRules) -> bool {
        let hand = &self.hands[idx];
        match hand.wager() {
            Some(wager) => {
                hand.has_pair() && self.purse >= wager && self.split_count < rules.max_splits
            }
            None => false,
        }
    }

    /// Splits the pair at `idx` into two wagered hands, drawing one card into
    /// each. The sibling hand is appended after all existing hands.
    pub fn split(&mut self, idx: usize, shoe: &mut Shoe, rules: &TableRules) -> Result<(), GameError> {
        let hand = &self.hands[idx];
        let wager = hand.wager().ok_or(GameError::SplitNotAllowed)?;
        if !hand.has_pair() || self.split_count >= rules.max_splits {
            return Err(GameError::SplitNotAllowed);
        }
        self.debit(wager)?;

        let moved = self.hands[idx]
            .pop_card()
            .ok_or(GameError::SplitNotAllowed)?;
        let mut sibling = Hand::new();
        sibling.add_card(moved);
        sibling.set_wager(wager, rules.minimum_bet)?;
        self.hands.push(sibling);
        self.split_count += 1;

        // One fresh card for each half; either may deactivate on the spot.
        let sibling_idx = self.hands.len() - 1;
        self.hit(idx, shoe, rules)?;
        self.hit(sibling_idx, shoe, rules)?;
        Ok(())
    }

    /// Double-down is legal on any wagered two-card hand the purse can match.
    pub fn can_double_down(&self, idx: usize) -> bool {
        let hand = &self.hands[idx];
        match hand.wager() {
            Some(wager) => hand.cards().len() == 2 && self.purse >= wager,
            None => false,
        }
    }

    /// Doubles the wager for exactly one more card and an immediate stand.
    pub fn double_down(
        &mut self,
        idx: usize,
        shoe: &mut Shoe,
        _rules: &TableRules,
    ) -> Result<(), GameError> {
        let hand = &self.hands[idx];
        let wager = hand.wager().ok_or(GameError::DoubleDownNotAllowed)?;
        if hand.cards().len() != 2 {
            return Err(GameError::DoubleDownNotAllowed);
        }
        self.debit(wager)?;
        let card = shoe.draw()?;
        let hand = &mut self.hands[idx];
        hand.add_card(card);
        hand.double_wager();
        hand.deactivate();
        Ok(())
    }

    /// The legal actions for the hand at `idx`, for the input collector to
    /// present. Hit and stick are always available on an active hand.
    pub fn action_choices(&self, idx: usize, rules: &TableRules) -> Vec<Action> {
        let mut choices = vec![Action::Hit, Action::Stick];
        if self.can_split(idx, rules) {
            choices.push(Action::Split);
        }
        if self.can_double_down(idx) {
            choices.push(Action::DoubleDown);
        }
        choices
    }
}

/// The house. Holds a single hand per round; the second-dealt card is the
/// public upcard, the first stays hidden until the dealer's turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dealer {
    hands: Vec<Hand>,
}

impl HasHands for Dealer {
    fn hands(&self) -> &[Hand] {
        &self.hands
    }

    fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hands.first()
    }

    pub fn upcard(&self) -> Option<Card> {
        self.hand().and_then(|h| h.cards().get(1).copied())
    }

    pub fn hole_card(&self) -> Option<Card> {
        self.hand().and_then(|h| h.cards().first().copied())
    }
}
