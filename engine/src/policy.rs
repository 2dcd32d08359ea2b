//! How a seat decides what to play.
//!
//! The engine never decides for a player. On every turn with at least one
//! legal play it asks the seat's [`ChoicePolicy`], and when a freshly drawn
//! wild card is played automatically it asks for a color only.

use std::fmt::Debug;

use crate::{
    card::{Card, CardColor},
    error::PolicyError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Play `card`. `color` must be set exactly when `card` is wild.
    Play {
        card: Card,
        color: Option<CardColor>,
    },
    /// Draw a card instead of playing.
    Decline,
}

impl Choice {
    pub fn play(card: Card) -> Self {
        Choice::Play { card, color: None }
    }

    pub fn play_wild(card: Card, color: CardColor) -> Self {
        Choice::Play {
            card,
            color: Some(color),
        }
    }
}

pub trait ChoicePolicy: Debug {
    /// Picks one of `legal_plays` or declines. `legal_plays` is never empty
    /// and is a subset of `hand`.
    fn choose(
        &mut self,
        hand: &[Card],
        legal_plays: &[Card],
        top_card: &Card,
    ) -> Result<Choice, PolicyError>;

    /// Picks the color for a wild card that was drawn and played right away.
    fn choose_color(&mut self, hand: &[Card], card: &Card) -> Result<CardColor, PolicyError>;

    /// Whether a person sits behind this policy. Sinks use it to decide
    /// what to reveal.
    fn is_interactive(&self) -> bool {
        false
    }
}

impl<P: ChoicePolicy + ?Sized> ChoicePolicy for Box<P> {
    fn choose(
        &mut self,
        hand: &[Card],
        legal_plays: &[Card],
        top_card: &Card,
    ) -> Result<Choice, PolicyError> {
        (**self).choose(hand, legal_plays, top_card)
    }

    fn choose_color(&mut self, hand: &[Card], card: &Card) -> Result<CardColor, PolicyError> {
        (**self).choose_color(hand, card)
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}
