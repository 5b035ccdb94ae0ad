//! Single-table, multi-round blackjack rules engine.
//!
//! The crate owns the card/shoe model, hand scoring, the player and dealer
//! turn machinery (including splits and double-downs), and payout
//! resolution. Prompting, rendering and the process entry point are
//! external: they drive a [`Table`] through the [`TableInterface`] seam and
//! read snapshots back.

mod card;
mod error;
mod hand;
mod participant;
mod payout;
mod rules;
mod shoe;
mod table;

pub use card::{Card, Rank, Suit};
pub use error::GameError;
pub use hand::Hand;
pub use participant::{Action, Dealer, HasHands, Player};
pub use payout::{payout, resolve, HandOutcome, Settlement};
pub use rules::{PayoutRatio, TableRules};
pub use shoe::{Shoe, MAX_DECKS};
pub use table::{HandResult, RoundSummary, Table, TableInterface};
