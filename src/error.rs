use thiserror::Error;

/// Errors raised by the game engine.
///
/// Setup and validation errors (deck count, player count, wagers) are meant
/// to be caught and re-prompted by the input layer. Split/double-down
/// precondition failures indicate the caller offered an action that was not
/// legal, and should be treated as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid rank: {0}")]
    InvalidRank(String),

    #[error("invalid suit: {0}")]
    InvalidSuit(String),

    #[error("invalid card: {0}")]
    InvalidCard(String),

    #[error("invalid number of decks: {0}")]
    InvalidDeckCount(usize),

    #[error("invalid number of players: {0}")]
    InvalidPlayerCount(usize),

    #[error("player name must not be empty")]
    InvalidName,

    #[error("drawing from an empty shoe")]
    EmptyShoe,

    #[error("wager {wager} is below the minimum bet {minimum}")]
    InvalidWager { wager: u64, minimum: u64 },

    #[error("insufficient funds: need {needed}, purse holds {purse}")]
    InsufficientFunds { needed: u64, purse: u64 },

    #[error("hand cannot be split")]
    SplitNotAllowed,

    #[error("hand cannot be doubled down")]
    DoubleDownNotAllowed,

    #[error("invalid action: {0}")]
    InvalidAction(String),
}
