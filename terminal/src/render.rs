//! Prints game events for the people at the table.

use std::io::{self, Write};

use tracing::warn;
use uno_engine::event::{EventSink, GameEvent};

#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::TurnStarted {
                name,
                top_card,
                hand,
                interactive,
                standings,
                ..
            } => {
                writeln!(out)?;
                writeln!(out, "-------")?;
                for standing in standings {
                    writeln!(out, "{} has {} cards.", standing.name, standing.cards)?;
                }
                writeln!(out, "-------")?;
                writeln!(out, "{name}, it's your turn.")?;
                writeln!(out, "The pile has {top_card} on top.")?;
                if *interactive {
                    writeln!(out, "Your hand:")?;
                    for card in hand {
                        writeln!(out, "{card}")?;
                    }
                }
            }
            GameEvent::Blocked {
                name, interactive, ..
            } => {
                if *interactive {
                    writeln!(out, "You can't play, so you have to draw.")?;
                } else {
                    writeln!(out, "{name} can't play and draws a card.")?;
                }
            }
            GameEvent::CardDrawn {
                name,
                card,
                playable,
                interactive,
                ..
            } => match (*interactive, *playable) {
                (true, true) => {
                    writeln!(out, "You drew: {card}")?;
                    writeln!(out, "Good -- you can play that!")?;
                }
                (true, false) => {
                    writeln!(out, "You drew: {card}")?;
                    writeln!(out, "Sorry, you still can't play.")?;
                }
                (false, false) => writeln!(out, "{name} still can't play.")?,
                (false, true) => {}
            },
            GameEvent::CardPlayed { name, card, .. } => {
                writeln!(out, "{name} plays {card}.")?;
            }
            GameEvent::PenaltyDrawn { name, count, .. } => {
                writeln!(out, "{name} draws {count} cards.")?;
            }
            GameEvent::Skipped { name, .. } => {
                writeln!(out, "{name} is skipped.")?;
            }
            GameEvent::DirectionReversed { direction } => {
                writeln!(out, "Play now goes {direction}.")?;
            }
            GameEvent::DeckRefilled { cards } => {
                writeln!(
                    out,
                    "The deck ran out, {cards} cards were shuffled back in."
                )?;
            }
            GameEvent::Won { name, .. } => {
                writeln!(out, "{name} wins!")?;
                writeln!(out, "Thanks for playing!")?;
            }
        }
        out.flush()
    }
}

impl<W: Write + std::fmt::Debug> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Err(error) = self.render(&event) {
            warn!(%error, "failed to print a game event");
        }
    }
}
