use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// A single Uno card.
///
/// Colored cards always carry a color. Wild cards carry none while they sit in
/// the deck or in a hand, and get one assigned when they are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    color: Option<CardColor>,
}

impl Card {
    /// A card of the given color. Wild ranks ignore `color`, since wild cards
    /// only get one when they are played.
    pub fn colored(color: CardColor, rank: Rank) -> Self {
        Self {
            rank,
            color: (!rank.is_wild()).then_some(color),
        }
    }

    pub fn number(color: CardColor, number: u8) -> Self {
        Self::colored(color, Rank::Number(number))
    }

    pub fn wild() -> Self {
        Self {
            rank: Rank::Wild,
            color: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            rank: Rank::WildDrawFour,
            color: None,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Option<CardColor> {
        self.color
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// Whether this card may be played on top of `top`.
    pub fn matches(&self, top: &Card) -> bool {
        let same_color = matches!((self.color, top.color), (Some(a), Some(b)) if a == b);
        same_color || self.rank == top.rank || self.is_wild()
    }

    pub(crate) fn paint(&mut self, color: CardColor) {
        if self.is_wild() {
            self.color = Some(color);
        }
    }

    /// Drops the color chosen for a played wild card.
    pub(crate) fn wash(&mut self) {
        if self.is_wild() {
            self.color = None;
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::number(CardColor::Red, 3);
        assert_eq!(red_3.to_string(), "Red 3");

        let yellow_5 = Card::number(CardColor::Yellow, 5);
        assert_eq!(yellow_5.to_string(), "Yellow 5");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let blue_skip = Card::colored(CardColor::Blue, Rank::Skip);
        assert_eq!(blue_skip.to_string(), "Blue Skip");

        let green_reverse = Card::colored(CardColor::Green, Rank::Reverse);
        assert_eq!(green_reverse.to_string(), "Green Reverse");

        let red_draw_two = Card::colored(CardColor::Red, Rank::DrawTwo);
        assert_eq!(red_draw_two.to_string(), "Red Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::wild().to_string(), "Wild");
        assert_eq!(Card::wild_draw_four().to_string(), "Wild Draw Four");

        let mut wild = Card::wild();
        wild.paint(CardColor::Yellow);
        assert_eq!(wild.to_string(), "Yellow Wild");
    }

    #[test]
    fn different_color_and_rank_do_not_match() {
        let red_5 = Card::number(CardColor::Red, 5);
        let blue_3 = Card::number(CardColor::Blue, 3);
        assert!(!red_5.matches(&blue_3));
    }

    #[test]
    fn same_rank_matches_across_colors() {
        let red_5 = Card::number(CardColor::Red, 5);
        let blue_5 = Card::number(CardColor::Blue, 5);
        assert!(red_5.matches(&blue_5));

        let red_skip = Card::colored(CardColor::Red, Rank::Skip);
        let green_skip = Card::colored(CardColor::Green, Rank::Skip);
        assert!(red_skip.matches(&green_skip));
    }

    #[test]
    fn same_color_matches_across_ranks() {
        let red_5 = Card::number(CardColor::Red, 5);
        let red_reverse = Card::colored(CardColor::Red, Rank::Reverse);
        assert!(red_5.matches(&red_reverse));
        assert!(red_reverse.matches(&red_5));
    }

    #[test]
    fn wild_cards_always_match() {
        let blue_7 = Card::number(CardColor::Blue, 7);
        assert!(Card::wild().matches(&blue_7));
        assert!(Card::wild_draw_four().matches(&blue_7));
        assert!(Card::wild().matches(&Card::wild_draw_four()));
    }

    #[test]
    fn painted_wild_on_top_matches_by_chosen_color() {
        let mut top = Card::wild_draw_four();
        top.paint(CardColor::Green);

        assert!(Card::number(CardColor::Green, 1).matches(&top));
        assert!(!Card::number(CardColor::Red, 1).matches(&top));
    }

    #[test]
    fn uncolored_wild_on_top_only_matches_wild_cards() {
        let top = Card::wild();
        assert!(!Card::number(CardColor::Red, 4).matches(&top));
        assert!(Card::wild_draw_four().matches(&top));
    }

    #[test]
    fn painting_only_affects_wild_cards() {
        let mut red_2 = Card::number(CardColor::Red, 2);
        red_2.paint(CardColor::Blue);
        assert_eq!(red_2.color(), Some(CardColor::Red));

        let mut wild = Card::wild();
        wild.paint(CardColor::Blue);
        assert_eq!(wild.color(), Some(CardColor::Blue));
        wild.wash();
        assert_eq!(wild, Card::wild());
    }

    #[test]
    fn wild_ranks_never_start_with_a_color() {
        assert_eq!(Card::colored(CardColor::Red, Rank::Wild), Card::wild());
        assert_eq!(
            Card::colored(CardColor::Blue, Rank::WildDrawFour),
            Card::wild_draw_four()
        );
        assert_eq!(
            Card::colored(CardColor::Blue, Rank::Skip).color(),
            Some(CardColor::Blue)
        );
    }

    #[test]
    fn colors_parse_case_insensitively() {
        assert_eq!(CardColor::from_str("red").unwrap(), CardColor::Red);
        assert_eq!(CardColor::from_str("YELLOW").unwrap(), CardColor::Yellow);
        assert!(CardColor::from_str("purple").is_err());
    }
}
