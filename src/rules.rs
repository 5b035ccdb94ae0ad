use serde::{Deserialize, Serialize};

/// Blackjack payout multiplier as a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Winnings (excluding the returned stake) for a given wager, rounded
    /// down to whole pennies.
    pub fn winnings(&self, wager: u64) -> u64 {
        wager * self.numerator as u64 / self.denominator as u64
    }
}

/// Table configuration, constructed once at startup and passed explicitly to
/// the table and participants. Amounts are in pennies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Smallest wager accepted for any hand.
    pub minimum_bet: u64,

    /// Maximum number of seats at the table.
    pub max_players: usize,

    /// Maximum number of splits per player per round.
    pub max_splits: u8,

    /// Auto-stand a hand that reaches five cards without busting.
    pub five_card_charlie: bool,

    /// Dealer draws on a soft 17 instead of standing.
    pub dealer_hits_soft_17: bool,

    /// Payout for a natural blackjack (commonly 3:2 or 6:5).
    pub blackjack_payout: PayoutRatio,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            minimum_bet: 500,
            max_players: 5,
            max_splits: 3,
            five_card_charlie: true,
            dealer_hits_soft_17: false,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_ratio_three_to_two() {
        let ratio = PayoutRatio::THREE_TO_TWO;
        assert_eq!(ratio.winnings(100), 150);
        assert_eq!(ratio.winnings(10), 15);
        assert_eq!(ratio.winnings(500), 750);
    }

    #[test]
    fn test_payout_ratio_six_to_five() {
        let ratio = PayoutRatio::SIX_TO_FIVE;
        assert_eq!(ratio.winnings(100), 120);
        assert_eq!(ratio.winnings(50), 60);
    }

    #[test]
    fn test_payout_ratio_rounds_down() {
        assert_eq!(PayoutRatio::THREE_TO_TWO.winnings(501), 751);
    }

    #[test]
    fn test_default_rules() {
        let rules = TableRules::default();
        assert_eq!(rules.minimum_bet, 500);
        assert_eq!(rules.max_players, 5);
        assert_eq!(rules.max_splits, 3);
        assert!(rules.five_card_charlie);
        assert!(!rules.dealer_hits_soft_17);
        assert_eq!(rules.blackjack_payout, PayoutRatio::THREE_TO_TWO);
    }
}
