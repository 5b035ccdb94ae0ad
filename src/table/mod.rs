use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use crate::participant::{Action, Dealer, HasHands, Player};
use crate::payout::{payout, resolve, HandOutcome, Settlement};
use crate::rules::TableRules;
use crate::shoe::Shoe;

/// The blocking seam to the input collector. Wagers and action choices are
/// supplied synchronously; validation failures surface as errors from the
/// round, and re-prompting is the collector's business.
pub trait TableInterface {
    /// The wager this player puts on their hand for the round.
    fn place_wager(&mut self, player: &Player) -> u64;

    /// One of `choices` for the player's hand at `hand_idx`.
    fn choose_action(&mut self, player: &Player, hand_idx: usize, choices: &[Action]) -> Action;
}

/// Settlement record for one player hand, for display after the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub player: String,
    pub cards: Vec<Card>,
    pub score: u8,
    pub wager: u64,
    pub outcome: HandOutcome,
    pub settlement: Settlement,
    /// Amount returned to the purse (stake plus winnings, or nothing).
    pub returned: u64,
}

/// Read-only snapshot of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub dealer_cards: Vec<Card>,
    pub dealer_score: u8,
    pub dealer_outcome: HandOutcome,
    /// False when the dealer's turn was skipped.
    pub dealer_played: bool,
    pub hands: Vec<HandResult>,
    /// Final purse per player, in seating order.
    pub purses: Vec<(String, u64)>,
}

/// A single blackjack table: the shoe, the seated players, and the dealer.
/// The shoe persists across rounds and is re-shuffled per round.
#[derive(Debug)]
pub struct Table {
    rules: TableRules,
    shoe: Shoe,
    players: Vec<Player>,
    dealer: Dealer,
    shuffle_each_round: bool,
}

impl Table {
    pub fn new(rules: TableRules, players: Vec<Player>, decks: usize) -> Result<Self, GameError> {
        if players.is_empty() || players.len() > rules.max_players {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }
        Ok(Self {
            rules,
            shoe: Shoe::new(decks)?,
            players,
            dealer: Dealer::new(),
            shuffle_each_round: true,
        })
    }

    /// Builds a table over an explicit shoe, for reproducing exact deals.
    /// The shoe is drawn from as given; the per-round shuffle is skipped.
    pub fn with_shoe(rules: TableRules, players: Vec<Player>, shoe: Shoe) -> Result<Self, GameError> {
        if players.is_empty() || players.len() > rules.max_players {
            return Err(GameError::InvalidPlayerCount(players.len()));
        }
        Ok(Self {
            rules,
            shoe,
            players,
            dealer: Dealer::new(),
            shuffle_each_round: false,
        })
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Plays one full round: shuffle, wagers, deal, player turns, dealer
    /// turn (when required), settlement, reset. The same seed, wagers and
    /// choices reproduce the same summary.
    ///
    /// A failed round is aborted: un-settled wagers are refunded and all
    /// hands cleared, so the table can host another round.
    pub fn play_round(
        &mut self,
        seed: u64,
        interface: &mut impl TableInterface,
    ) -> Result<RoundSummary, GameError> {
        let result = self.run_round(seed, interface);
        if result.is_err() {
            self.abort_round();
        }
        result
    }

    fn run_round(
        &mut self,
        seed: u64,
        interface: &mut impl TableInterface,
    ) -> Result<RoundSummary, GameError> {
        if self.shuffle_each_round {
            debug!("shuffling shoe with seed {seed}, {} cards", self.shoe.len());
            self.shoe.shuffle(seed);
        }

        self.collect_wagers(interface)?;
        self.deal()?;
        self.play_player_turns(interface)?;

        let dealer_played = self.dealer_must_play();
        if dealer_played {
            self.play_dealer_turn()?;
        } else {
            debug!("dealer turn skipped");
        }

        let summary = self.settle(dealer_played);
        for player in &mut self.players {
            player.reset();
        }
        self.dealer.reset();
        Ok(summary)
    }

    /// Hands carry their own wagers, so refunding what each live hand holds
    /// returns exactly what was debited, doubles and splits included.
    fn abort_round(&mut self) {
        for player in &mut self.players {
            let refund: u64 = player.hands().iter().filter_map(|h| h.wager()).sum();
            player.credit(refund);
            player.reset();
        }
        self.dealer.reset();
        debug!("round aborted, wagers refunded");
    }

    /// One wagered, still-empty hand per player. The purse is debited as
    /// soon as the bet is accepted.
    fn collect_wagers(&mut self, interface: &mut impl TableInterface) -> Result<(), GameError> {
        for player in &mut self.players {
            let wager = interface.place_wager(player);
            let mut hand = Hand::new();
            hand.set_wager(wager, self.rules.minimum_bet)?;
            player.debit(wager)?;
            debug!("{} wagers {}", player.name(), wager);
            player.give_hand(hand);
        }
        Ok(())
    }

    /// Two cards each, dealt one at a time around the table with the dealer
    /// last. The dealer's first card is the hole card, the second the upcard.
    fn deal(&mut self) -> Result<(), GameError> {
        self.dealer.give_hand(Hand::new());
        for _ in 0..2 {
            for player in &mut self.players {
                let card = self.shoe.draw()?;
                player.hands_mut()[0].add_card(card);
            }
            let card = self.shoe.draw()?;
            self.dealer.hands_mut()[0].add_card(card);
        }
        Ok(())
    }

    fn play_player_turns(&mut self, interface: &mut impl TableInterface) -> Result<(), GameError> {
        for i in 0..self.players.len() {
            while let Some(idx) = self.players[i].get_next_hand() {
                let player = &self.players[i];
                if player.hands()[idx].is_blackjack() {
                    // A natural plays itself; no prompting.
                    debug!("{} has blackjack", player.name());
                    self.players[i].hands_mut()[idx].deactivate();
                    continue;
                }
                let choices = player.action_choices(idx, &self.rules);
                let action = interface.choose_action(player, idx, &choices);
                if !choices.contains(&action) {
                    return Err(GameError::InvalidAction(action.to_string()));
                }
                trace!("{} plays {} on hand {idx}", player.name(), action);
                let player = &mut self.players[i];
                match action {
                    Action::Hit => player.hit(idx, &mut self.shoe, &self.rules)?,
                    Action::Stick => player.stick(idx),
                    Action::Split => player.split(idx, &mut self.shoe, &self.rules)?,
                    Action::DoubleDown => player.double_down(idx, &mut self.shoe, &self.rules)?,
                }
            }
        }
        Ok(())
    }

    /// The dealer plays unless no comparison against a dealer score can
    /// matter: every player hand busted, or every player hand is a blackjack
    /// and the upcard rules out a dealer blackjack.
    fn dealer_must_play(&self) -> bool {
        let all_bust = self
            .players
            .iter()
            .flat_map(|p| p.hands())
            .all(|h| h.is_bust());
        if all_bust {
            return false;
        }
        let all_blackjack = self
            .players
            .iter()
            .flat_map(|p| p.hands())
            .all(|h| h.is_blackjack());
        if all_blackjack {
            let upcard_is_ace = self.dealer.upcard().map(|c| c.is_ace()).unwrap_or(false);
            return upcard_is_ace;
        }
        true
    }

    /// Hole card comes up; the dealer draws to 17. A soft 17 stands unless
    /// the table rule says otherwise.
    fn play_dealer_turn(&mut self) -> Result<(), GameError> {
        loop {
            let hand = &self.dealer.hands()[0];
            let score = hand.score();
            let draws = score < 17
                || (score == 17 && hand.is_soft() && self.rules.dealer_hits_soft_17);
            if !draws {
                break;
            }
            let card = self.shoe.draw()?;
            self.dealer.hands_mut()[0].add_card(card);
        }
        let hand = &mut self.dealer.hands_mut()[0];
        hand.deactivate();
        debug!("dealer stands on {}", hand.score());
        Ok(())
    }

    fn settle(&mut self, dealer_played: bool) -> RoundSummary {
        let dealer_hand = self.dealer.hands()[0].clone();
        let dealer_outcome = HandOutcome::of(&dealer_hand);
        let mut results = Vec::new();

        for player in &mut self.players {
            for hand in player.hands().to_vec() {
                let Some(wager) = hand.wager() else { continue };
                let outcome = HandOutcome::of(&hand);
                let settlement = resolve(outcome, dealer_outcome);
                let returned = payout(settlement, wager, self.rules.blackjack_payout);
                player.credit(returned);
                debug!(
                    "{}: {:?} vs dealer {:?} -> {:?}, {} returned",
                    player.name(),
                    outcome,
                    dealer_outcome,
                    settlement,
                    returned
                );
                results.push(HandResult {
                    player: player.name().to_string(),
                    cards: hand.cards().to_vec(),
                    score: hand.score(),
                    wager,
                    outcome,
                    settlement,
                    returned,
                });
            }
        }

        RoundSummary {
            dealer_score: dealer_hand.score(),
            dealer_outcome,
            dealer_cards: dealer_hand.cards().to_vec(),
            dealer_played,
            hands: results,
            purses: self
                .players
                .iter()
                .map(|p| (p.name().to_string(), p.purse()))
                .collect(),
        }
    }
}
