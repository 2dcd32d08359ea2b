use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: usize = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: usize = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: usize = 2;

pub(crate) const NUMBER_CARDS_IN_DECK: usize = NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT;
pub(crate) const SKIP_CARDS_IN_DECK: usize = SKIP_CARDS_PER_COLOR * CardColor::COUNT;
pub(crate) const REVERSE_CARDS_IN_DECK: usize = REVERSE_CARDS_PER_COLOR * CardColor::COUNT;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: usize = DRAW_TWO_CARDS_PER_COLOR * CardColor::COUNT;

pub(crate) const WILD_CARDS_IN_DECK: usize = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub const TOTAL_CARDS_IN_DECK: usize = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub const STARTING_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

pub(crate) const DRAW_TWO_PENALTY: usize = 2;
pub(crate) const WILD_DRAW_FOUR_PENALTY: usize = 4;
