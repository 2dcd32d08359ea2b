use thiserror::Error;

use crate::card::{Card, CardColor};

pub type PolicyError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Cannot deal hands of {0} cards")]
    InvalidHandSize(usize),
    #[error("The deck is empty and there is nothing left to reshuffle")]
    EmptyDeck,
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("{0} cannot be played right now")]
    InvalidChoice(Card),
    #[error("Invalid color choice {color:?} for {card}")]
    InvalidColor {
        card: Card,
        color: Option<CardColor>,
    },
    #[error("The game is already over")]
    GameOver,
    #[error("Choice policy failed: {0}")]
    Policy(#[source] PolicyError),
}

impl UnoError {
    /// A policy broke its contract. The game state is untouched, so the turn
    /// can be retried.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            UnoError::CardNotInHand(_) | UnoError::InvalidChoice(_) | UnoError::InvalidColor { .. }
        )
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
