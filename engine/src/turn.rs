use rand::Rng;
use strum_macros::Display;

use crate::card::{Card, CardColor, Rank};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Whose turn it is and where play goes next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    current: usize,
    direction: Direction,
    pending_skip_count: usize,
}

impl Rotation {
    pub fn new(current: usize, direction: Direction) -> Self {
        Self {
            current,
            direction,
            pending_skip_count: 1,
        }
    }

    /// Clockwise, starting at a uniformly random seat.
    pub fn random<R: Rng + ?Sized>(players: usize, rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..players), Direction::Clockwise)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_skip_count(&self) -> usize {
        self.pending_skip_count
    }

    /// The seat `steps` places away from the current one in the current
    /// direction.
    pub fn seat_after(&self, steps: usize, players: usize) -> usize {
        let offset = self.direction.step() * steps as isize;
        (self.current as isize + offset).rem_euclid(players as isize) as usize
    }

    pub fn next_seat(&self, players: usize) -> usize {
        self.seat_after(1, players)
    }

    pub(crate) fn skip_next(&mut self) {
        self.pending_skip_count *= 2;
    }

    pub(crate) fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Moves to the next seat, jumping over skipped ones, and returns it.
    pub(crate) fn advance(&mut self, players: usize) -> usize {
        self.current = self.seat_after(self.pending_skip_count, players);
        self.pending_skip_count = 1;
        self.current
    }
}

/// What a turn put on the pile, as far as rotation is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub rank: Rank,
    pub color: Option<CardColor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// A card from the hand was played.
    Played(Card),
    /// Nothing could be played; the drawn card matched and was played.
    DrewAndPlayed(Card),
    /// Nothing could be played; the drawn card did not match either.
    DrewAndKept(Card),
}

impl TurnAction {
    pub fn played_card(&self) -> Option<&Card> {
        match self {
            TurnAction::Played(card) | TurnAction::DrewAndPlayed(card) => Some(card),
            TurnAction::DrewAndKept(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: usize,
    pub action: TurnAction,
    pub outcome: PlayOutcome,
    pub won: bool,
}
