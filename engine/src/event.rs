//! Observational events emitted while a game is played.

use std::{cell::RefCell, fmt::Debug, rc::Rc};

use crate::{card::Card, turn::Direction};

/// One line of the table's status: who sits where and how many cards they hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub cards: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted {
        seat: usize,
        name: String,
        top_card: Card,
        hand: Vec<Card>,
        interactive: bool,
        standings: Vec<Standing>,
    },
    CardPlayed {
        seat: usize,
        name: String,
        card: Card,
    },
    /// No legal play, the player has to draw.
    Blocked {
        seat: usize,
        name: String,
        interactive: bool,
    },
    CardDrawn {
        seat: usize,
        name: String,
        card: Card,
        playable: bool,
        interactive: bool,
    },
    PenaltyDrawn {
        seat: usize,
        name: String,
        count: usize,
    },
    Skipped {
        seat: usize,
        name: String,
    },
    DirectionReversed {
        direction: Direction,
    },
    DeckRefilled {
        cards: usize,
    },
    Won {
        seat: usize,
        name: String,
    },
}

pub trait EventSink: Debug {
    fn emit(&mut self, event: GameEvent);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Keeps every event in memory. Clones share the same log, so one clone can
/// be handed to the game while another is read from.
#[derive(Debug, Default, Clone)]
pub struct EventLog(Rc<RefCell<Vec<GameEvent>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.0.borrow_mut().push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
