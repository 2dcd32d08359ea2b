use std::fmt;

use crate::{
    card::Card,
    deck::Deck,
    error::{Result, UnoError},
    pile::DiscardPile,
};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand: cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    /// Every card in hand that may go on top of `top`, in hand order.
    pub fn legal_plays(&self, top: &Card) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.matches(top))
            .copied()
            .collect()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Draws the top card of `deck` into the hand. The deck must be refilled
    /// by the caller beforehand.
    pub fn draw_card(&mut self, deck: &mut Deck) -> Result<Card> {
        let card = deck.draw_one()?;
        self.add_card(card);
        Ok(card)
    }

    /// Moves one instance of `card` from the hand to the top of `pile`.
    pub fn play_card(&mut self, card: &Card, pile: &mut DiscardPile) -> Result<()> {
        let index = self
            .card_index(card)
            .ok_or(UnoError::CardNotInHand(*card))?;
        pile.add_card(self.hand.remove(index));
        Ok(())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} cards.", self.name, self.cards_count())
    }
}
