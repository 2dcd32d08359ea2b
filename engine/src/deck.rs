use std::fmt;

use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::{
    card::{Card, CardColor, Rank},
    constants::*,
    error::{Result, UnoError},
    pile::DiscardPile,
};

/// The draw pile. The last card of the vector is the top of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// A full, shuffled deck.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::unshuffled();
        deck.shuffle(rng);
        deck
    }

    /// The canonical 108 cards in a fixed order.
    pub fn unshuffled() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::colored(color, Rank::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::wild());
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild_draw_four());
        }

        Self(cards)
    }

    /// A deck holding exactly `cards`, the last one on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn draw_one(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyDeck)
    }

    /// Removes the topmost card that is not wild.
    pub(crate) fn draw_colored_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|card| !card.is_wild())
            .map(|pos| self.0.remove(pos))
    }

    /// Moves everything below the pile's top card back into the deck and
    /// shuffles it. Wild cards lose the color chosen when they were played.
    pub fn refill_from<R: Rng + ?Sized>(&mut self, pile: &mut DiscardPile, rng: &mut R) {
        if !self.is_empty() {
            warn!(
                remaining = self.cards_count(),
                "refilling a deck that still holds cards"
            );
        }

        let mut recycled = pile.recycle_below_top();
        for card in &mut recycled {
            card.wash();
        }

        self.0.append(&mut recycled);
        self.shuffle(rng);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An Uno deck with {} cards remaining.", self.cards_count())
    }
}
