//! Computer-controlled choice policies.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor},
    error::PolicyError,
    policy::{Choice, ChoicePolicy},
};

/// The color most represented in `hand`. Ties go to the color listed first in
/// [`CardColor`]; a hand without colored cards picks red.
pub fn most_held_color(hand: &[Card]) -> CardColor {
    let mut best = CardColor::Red;
    let mut best_count = 0;

    for color in CardColor::iter() {
        let count = hand
            .iter()
            .filter(|card| card.color() == Some(color))
            .count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }

    best
}

/// Plays the first legal card in hand order, keeping wild cards for last.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMatchBot;

impl FirstMatchBot {
    pub fn new() -> Self {
        Self
    }
}

impl ChoicePolicy for FirstMatchBot {
    fn choose(
        &mut self,
        hand: &[Card],
        legal_plays: &[Card],
        _top_card: &Card,
    ) -> Result<Choice, PolicyError> {
        let card = legal_plays
            .iter()
            .find(|card| !card.is_wild())
            .or_else(|| legal_plays.first());

        Ok(match card {
            Some(card) if card.is_wild() => Choice::play_wild(*card, most_held_color(hand)),
            Some(card) => Choice::play(*card),
            None => Choice::Decline,
        })
    }

    fn choose_color(&mut self, hand: &[Card], _card: &Card) -> Result<CardColor, PolicyError> {
        Ok(most_held_color(hand))
    }
}

/// Plays a random legal card and names a random color.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_color(&mut self) -> CardColor {
        let colors = CardColor::iter().collect::<Vec<_>>();
        *colors
            .choose(&mut self.rng)
            .unwrap_or(&CardColor::Red)
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoicePolicy for RandomBot {
    fn choose(
        &mut self,
        _hand: &[Card],
        legal_plays: &[Card],
        _top_card: &Card,
    ) -> Result<Choice, PolicyError> {
        let Some(card) = legal_plays.choose(&mut self.rng).copied() else {
            return Ok(Choice::Decline);
        };

        Ok(if card.is_wild() {
            Choice::play_wild(card, self.random_color())
        } else {
            Choice::play(card)
        })
    }

    fn choose_color(&mut self, _hand: &[Card], _card: &Card) -> Result<CardColor, PolicyError> {
        Ok(self.random_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn most_held_color_counts_colored_cards() {
        let hand = [
            Card::number(CardColor::Blue, 1),
            Card::number(CardColor::Green, 2),
            Card::colored(CardColor::Blue, Rank::Skip),
            Card::wild(),
        ];
        assert_eq!(most_held_color(&hand), CardColor::Blue);
    }

    #[test]
    fn most_held_color_breaks_ties_in_declaration_order() {
        let hand = [
            Card::number(CardColor::Yellow, 1),
            Card::number(CardColor::Green, 2),
        ];
        assert_eq!(most_held_color(&hand), CardColor::Green);
        assert_eq!(most_held_color(&[Card::wild()]), CardColor::Red);
    }

    #[test]
    fn first_match_bot_prefers_non_wild_cards() {
        let hand = [
            Card::wild(),
            Card::number(CardColor::Red, 4),
            Card::number(CardColor::Red, 9),
        ];
        let top = Card::number(CardColor::Red, 1);

        let choice = FirstMatchBot::new().choose(&hand, &hand, &top).unwrap();

        assert_eq!(choice, Choice::play(Card::number(CardColor::Red, 4)));
    }

    #[test]
    fn first_match_bot_plays_wild_with_most_held_color() {
        let hand = [
            Card::wild_draw_four(),
            Card::number(CardColor::Yellow, 4),
            Card::number(CardColor::Yellow, 6),
            Card::number(CardColor::Blue, 2),
        ];
        let top = Card::number(CardColor::Green, 1);
        let legal_plays = [Card::wild_draw_four()];

        let choice = FirstMatchBot::new()
            .choose(&hand, &legal_plays, &top)
            .unwrap();

        assert_eq!(
            choice,
            Choice::play_wild(Card::wild_draw_four(), CardColor::Yellow)
        );
    }

    #[test]
    fn random_bot_only_plays_legal_cards() {
        let hand = [
            Card::number(CardColor::Red, 4),
            Card::number(CardColor::Blue, 4),
            Card::wild(),
            Card::number(CardColor::Green, 8),
        ];
        let legal_plays = [
            Card::number(CardColor::Red, 4),
            Card::number(CardColor::Blue, 4),
            Card::wild(),
        ];
        let top = Card::number(CardColor::Red, 4);
        let mut bot = RandomBot::seeded(11);

        for _ in 0..100 {
            match bot.choose(&hand, &legal_plays, &top).unwrap() {
                Choice::Play { card, color } => {
                    assert!(legal_plays.contains(&card));
                    assert_eq!(color.is_some(), card.is_wild());
                }
                Choice::Decline => panic!("random bot never declines a legal play"),
            }
        }
    }

    #[test]
    fn seeded_random_bots_agree() {
        let legal_plays = [
            Card::number(CardColor::Red, 4),
            Card::number(CardColor::Blue, 4),
            Card::number(CardColor::Green, 4),
        ];
        let top = Card::number(CardColor::Yellow, 4);
        let mut first = RandomBot::seeded(5);
        let mut second = RandomBot::seeded(5);

        for _ in 0..20 {
            assert_eq!(
                first.choose(&legal_plays, &legal_plays, &top).unwrap(),
                second.choose(&legal_plays, &legal_plays, &top).unwrap()
            );
        }
    }
}
