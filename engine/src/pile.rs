use std::fmt;

use crate::{
    card::{Card, CardColor},
    deck::Deck,
    error::{Result, UnoError},
};

/// Played cards, most recent last. Never empty once the game is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    /// Seeds the pile with the topmost colored card of `deck`.
    pub fn new(deck: &mut Deck) -> Result<Self> {
        let card = deck.draw_colored_card().ok_or(UnoError::EmptyDeck)?;
        Ok(Self(vec![card]))
    }

    /// A pile holding exactly `cards`, the last one on top.
    ///
    /// # Panics
    ///
    /// Panics if `cards` is empty.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "a discard pile needs a top card");
        Self(cards)
    }

    pub fn top_card(&self) -> &Card {
        self.0
            .last()
            .expect("The discard pile always holds at least one card.")
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Removes every card except the top one and returns them, oldest first.
    pub fn recycle_below_top(&mut self) -> Vec<Card> {
        let below = self.0.len().saturating_sub(1);
        self.0.drain(..below).collect()
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn paint_top(&mut self, color: CardColor) {
        if let Some(top) = self.0.last_mut() {
            top.paint(color);
        }
    }
}

impl fmt::Display for DiscardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The pile has {} on top.", self.top_card())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn new_pile_takes_one_colored_card_from_the_deck() {
        let mut deck = Deck::from_cards(vec![
            Card::number(CardColor::Yellow, 2),
            Card::wild(),
        ]);

        let pile = DiscardPile::new(&mut deck).unwrap();

        assert_eq!(pile.cards_count(), 1);
        assert_eq!(pile.top_card(), &Card::number(CardColor::Yellow, 2));
        assert_eq!(deck.cards(), &[Card::wild()]);
    }

    #[test]
    fn new_pile_fails_without_colored_cards() {
        let mut deck = Deck::from_cards(vec![Card::wild(), Card::wild_draw_four()]);
        assert!(matches!(
            DiscardPile::new(&mut deck),
            Err(UnoError::EmptyDeck)
        ));
    }

    #[test]
    fn add_card_changes_top() {
        let mut pile = DiscardPile::from_cards(vec![Card::number(CardColor::Red, 1)]);
        pile.add_card(Card::colored(CardColor::Red, Rank::Skip));

        assert_eq!(pile.top_card(), &Card::colored(CardColor::Red, Rank::Skip));
        assert_eq!(pile.cards_count(), 2);
    }

    #[test]
    fn recycle_keeps_only_the_top_card() {
        let mut pile = DiscardPile::from_cards(vec![
            Card::number(CardColor::Red, 1),
            Card::number(CardColor::Red, 2),
            Card::number(CardColor::Red, 3),
        ]);

        let recycled = pile.recycle_below_top();

        assert_eq!(
            recycled,
            vec![
                Card::number(CardColor::Red, 1),
                Card::number(CardColor::Red, 2)
            ]
        );
        assert_eq!(pile.cards_count(), 1);
        assert_eq!(pile.top_card(), &Card::number(CardColor::Red, 3));
    }

    #[test]
    fn recycle_with_single_card_is_a_no_op() {
        let mut pile = DiscardPile::from_cards(vec![Card::number(CardColor::Blue, 6)]);

        assert!(pile.recycle_below_top().is_empty());
        assert!(pile.recycle_below_top().is_empty());
        assert_eq!(pile.cards_count(), 1);
        assert_eq!(pile.top_card(), &Card::number(CardColor::Blue, 6));
    }

    #[test]
    fn paint_top_colors_a_played_wild() {
        let mut pile = DiscardPile::from_cards(vec![Card::number(CardColor::Blue, 6)]);
        pile.add_card(Card::wild_draw_four());
        pile.paint_top(CardColor::Green);

        assert_eq!(pile.top_card().color(), Some(CardColor::Green));
        assert_eq!(pile.to_string(), "The pile has Green Wild Draw Four on top.");
    }
}
