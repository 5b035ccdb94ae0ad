use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::rules::PayoutRatio;

/// A resolved hand classified for settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Bust,
    Score(u8),
    Blackjack,
}

impl HandOutcome {
    pub fn of(hand: &Hand) -> Self {
        if hand.is_bust() {
            HandOutcome::Bust
        } else if hand.is_blackjack() {
            HandOutcome::Blackjack
        } else {
            HandOutcome::Score(hand.score())
        }
    }
}

/// What a settled hand pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement {
    /// Wager is kept by the house.
    Lost,
    /// Wager returned, no winnings.
    Push,
    /// Wager returned plus equal winnings.
    WinEven,
    /// Wager returned plus the blackjack premium.
    WinBlackjack,
}

/// The outcome matrix. Only Score-vs-Score needs the scalar comparison;
/// every other cell is fixed.
pub fn resolve(player: HandOutcome, dealer: HandOutcome) -> Settlement {
    match (player, dealer) {
        (HandOutcome::Bust, _) => Settlement::Lost,
        (HandOutcome::Score(_), HandOutcome::Bust) => Settlement::WinEven,
        (HandOutcome::Score(_), HandOutcome::Blackjack) => Settlement::Lost,
        (HandOutcome::Score(p), HandOutcome::Score(d)) => {
            if p > d {
                Settlement::WinEven
            } else if p < d {
                Settlement::Lost
            } else {
                Settlement::Push
            }
        }
        (HandOutcome::Blackjack, HandOutcome::Blackjack) => Settlement::Push,
        (HandOutcome::Blackjack, _) => Settlement::WinBlackjack,
    }
}

/// Amount returned to the purse for a settled wager. The wager itself was
/// debited when the bet was placed, so a loss pays nothing back.
pub fn payout(settlement: Settlement, wager: u64, blackjack_payout: PayoutRatio) -> u64 {
    match settlement {
        Settlement::Lost => 0,
        Settlement::Push => wager,
        Settlement::WinEven => 2 * wager,
        Settlement::WinBlackjack => wager + blackjack_payout.winnings(wager),
    }
}
