//! Uno in the terminal.

mod cli;
mod human;
mod names;
mod render;

use std::{cell::RefCell, io, process::ExitCode, rc::Rc};

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use uno_engine::{
    bot::{FirstMatchBot, RandomBot},
    ChoicePolicy, Game, GameConfig, Seat, UnoError,
};

use crate::{
    cli::{BotStyle, Cli},
    human::{ask_player_names, HumanPolicy, SharedInput},
    names::bot_names,
    render::ConsoleSink,
};

/// Exit code for a game that could not go on because the cards ran out.
const EXIT_DECK_EXHAUSTED: u8 = 2;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let input: SharedInput<_> = Rc::new(RefCell::new(io::stdin().lock()));

    let seats = create_seats(&cli, &input)?;
    let config = GameConfig {
        seed: cli.seed,
        ..GameConfig::default()
    };

    let mut game = Game::new(seats, config)
        .wrap_err("Failed to set up the game")?
        .with_sink(ConsoleSink::stdout());

    match game.run_with_retries(retry_human) {
        Ok(outcome) => {
            info!(winner = %outcome.name, turns = outcome.turns, "game over");
            Ok(ExitCode::SUCCESS)
        }
        Err(UnoError::EmptyDeck) => {
            error!("no cards left to draw");
            eprintln!("Every card is in someone's hand, the game cannot go on.");
            Ok(ExitCode::from(EXIT_DECK_EXHAUSTED))
        }
        Err(error) => Err(error).wrap_err("The game stopped unexpectedly"),
    }
}

/// Humans sit first, in the order they were named, then the bots.
fn create_seats<R>(cli: &Cli, input: &SharedInput<R>) -> Result<Vec<Seat>>
where
    R: io::BufRead + std::fmt::Debug + 'static,
{
    let humans = if cli.players.is_empty() {
        ask_player_names(input, &mut io::stdout()).wrap_err("Failed to read player names")?
    } else {
        cli.players.clone()
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut seats = Vec::with_capacity(humans.len() + cli.bots);
    for name in humans {
        seats.push(Seat::new(
            name,
            HumanPolicy::new(Rc::clone(input), io::stdout()),
        ));
    }

    for (index, name) in bot_names(cli.bots, &mut rng).into_iter().enumerate() {
        let policy: Box<dyn ChoicePolicy> = match cli.bot_style {
            BotStyle::FirstMatch => Box::new(FirstMatchBot::new()),
            BotStyle::Random => match cli.seed {
                Some(seed) => Box::new(RandomBot::seeded(seed.wrapping_add(index as u64))),
                None => Box::new(RandomBot::new()),
            },
        };
        seats.push(Seat::new(name, policy));
    }

    Ok(seats)
}

/// A human whose choice is rejected is asked again. Bots are not.
fn retry_human(game: &Game, error: &UnoError) -> bool {
    let seat = game.current_seat();
    let retry = game.seat(seat).map_or(false, Seat::is_interactive);
    if retry {
        warn!(%error, seat, "rejected a choice, asking again");
    }
    retry
}
