use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::card::{Card, CardColor, Rank};
use crate::constants::*;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::event::{EventSink, GameEvent, NullSink, Standing};
use crate::pile::DiscardPile;
use crate::player::Player;
use crate::policy::{Choice, ChoicePolicy};
use crate::turn::{Direction, PlayOutcome, Rotation, TurnAction, TurnReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seeds every shuffle and the choice of the first player. `None` draws a
    /// seed from the operating system.
    pub seed: Option<u64>,
    pub hand_size: usize,
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: STARTING_HAND_SIZE,
        }
    }
}

/// A player together with whatever decides their moves.
#[derive(Debug)]
pub struct Seat {
    player: Player,
    policy: Box<dyn ChoicePolicy>,
}

impl Seat {
    /// A seat with an empty hand, to be dealt by [`Game::new`].
    pub fn new(name: impl Into<String>, policy: impl ChoicePolicy + 'static) -> Self {
        Self::with_player(Player::new(name, Vec::new()), policy)
    }

    pub fn with_player(player: Player, policy: impl ChoicePolicy + 'static) -> Self {
        Self {
            player,
            policy: Box::new(policy),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_interactive(&self) -> bool {
        self.policy.is_interactive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: usize,
    pub name: String,
    pub turns: usize,
}

#[derive(Debug)]
pub struct Game {
    deck: Deck,
    pile: DiscardPile,
    seats: Vec<Seat>,
    rotation: Rotation,
    rng: StdRng,
    sink: Box<dyn EventSink>,
    winner: Option<usize>,
    turns: usize,
    /// The turn whose start was last announced.
    announced: Option<usize>,
    /// Set once a turn failed halfway and the game cannot go on.
    halted: bool,
}

impl Game {
    /// Shuffles a fresh deck, turns up the first pile card, deals every seat
    /// a hand and picks a random player to start.
    pub fn new(mut seats: Vec<Seat>, config: GameConfig) -> Result<Self> {
        Self::check_table(seats.len())?;
        if config.hand_size == 0 || config.hand_size >= TOTAL_CARDS_IN_DECK {
            return Err(UnoError::InvalidHandSize(config.hand_size));
        }
        let dealt = seats.len().checked_mul(config.hand_size);
        if dealt.map_or(true, |cards| cards >= TOTAL_CARDS_IN_DECK) {
            return Err(UnoError::TooManyPlayers);
        }

        let mut rng = config.rng();
        let mut deck = Deck::new(&mut rng);
        let pile = DiscardPile::new(&mut deck)?;

        for seat in &mut seats {
            for _ in 0..config.hand_size {
                seat.player.draw_card(&mut deck)?;
            }
        }

        let rotation = Rotation::random(seats.len(), &mut rng);

        info!(
            players = seats.len(),
            first = rotation.current(),
            top = %pile.top_card(),
            "game set up"
        );

        Ok(Self::assemble(deck, pile, seats, rotation, rng))
    }

    /// Puts together a game from pieces that are already dealt.
    ///
    /// # Panics
    ///
    /// Panics if the rotation points at a seat that does not exist.
    pub fn from_parts(
        deck: Deck,
        pile: DiscardPile,
        seats: Vec<Seat>,
        rotation: Rotation,
        config: GameConfig,
    ) -> Result<Self> {
        Self::check_table(seats.len())?;
        assert!(
            rotation.current() < seats.len(),
            "The current seat must be at the table."
        );

        Ok(Self::assemble(deck, pile, seats, rotation, config.rng()))
    }

    fn assemble(
        deck: Deck,
        pile: DiscardPile,
        seats: Vec<Seat>,
        rotation: Rotation,
        rng: StdRng,
    ) -> Self {
        Self {
            deck,
            pile,
            seats,
            rotation,
            rng,
            sink: Box::new(NullSink),
            winner: None,
            turns: 0,
            announced: None,
            halted: false,
        }
    }

    fn check_table(players: usize) -> Result<()> {
        if players < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if players > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }
        Ok(())
    }

    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Plays turns until somebody empties their hand.
    pub fn run(&mut self) -> Result<GameOutcome> {
        self.run_with_retries(|_, _| false)
    }

    /// Like [`Game::run`], but a turn that fails with an error for which
    /// `retry` returns `true` is played again instead of ending the run.
    /// Only contract violations leave the turn in a state that can be
    /// retried; other errors end the game whatever `retry` says.
    pub fn run_with_retries<F>(&mut self, mut retry: F) -> Result<GameOutcome>
    where
        F: FnMut(&Self, &UnoError) -> bool,
    {
        loop {
            match self.play_turn() {
                Ok(report) if report.won => return Ok(self.outcome(report.seat)),
                Ok(_) => {}
                Err(error) if error.is_contract_violation() && retry(self, &error) => {}
                Err(error) => return Err(error),
            }
        }
    }

    /// Plays exactly one turn for the current seat.
    ///
    /// A policy that breaks its contract gets an error back before anything
    /// is changed, so the same turn can simply be played again. Any other
    /// error ends the game and later calls return [`UnoError::GameOver`].
    #[instrument(level = "debug", skip_all, fields(seat = self.rotation.current(), turn = self.turns))]
    pub fn play_turn(&mut self) -> Result<TurnReport> {
        if self.winner.is_some() || self.halted {
            return Err(UnoError::GameOver);
        }

        let result = self.take_turn();
        if let Err(error) = &result {
            if !error.is_contract_violation() {
                warn!(%error, "turn failed, the game is halted");
                self.halted = true;
            }
        }
        result
    }

    fn take_turn(&mut self) -> Result<TurnReport> {
        let seat = self.rotation.current();
        let top = *self.pile.top_card();
        if self.announced != Some(self.turns) {
            self.announce_turn(seat, &top);
            self.announced = Some(self.turns);
        }

        let legal_plays = self.seats[seat].player.legal_plays(&top);
        let choice = if legal_plays.is_empty() {
            self.emit(GameEvent::Blocked {
                seat,
                name: self.name(seat),
                interactive: self.seats[seat].is_interactive(),
            });
            Choice::Decline
        } else {
            let Seat { player, policy } = &mut self.seats[seat];
            policy
                .choose(player.hand(), &legal_plays, &top)
                .map_err(UnoError::Policy)?
        };

        let (action, outcome) = match choice {
            Choice::Play { card, color } => {
                self.check_choice(seat, &legal_plays, &card, color)?;
                let played = self.play(seat, &card, color)?;
                (
                    TurnAction::Played(played),
                    PlayOutcome {
                        rank: played.rank(),
                        color,
                    },
                )
            }
            Choice::Decline => self.draw_instead(seat, &top)?,
        };

        self.turns += 1;
        debug!(?action, ?outcome, "turn played");

        let won = self.seats[seat].player.has_won();
        if won {
            self.winner = Some(seat);
            info!(winner = %self.name(seat), turns = self.turns, "game won");
            self.emit(GameEvent::Won {
                seat,
                name: self.name(seat),
            });
        } else {
            if action.played_card().is_some() {
                self.resolve_effect(outcome.rank)?;
            }
            self.rotation.advance(self.seats.len());
        }

        Ok(TurnReport {
            seat,
            action,
            outcome,
            won,
        })
    }

    fn check_choice(
        &self,
        seat: usize,
        legal_plays: &[Card],
        card: &Card,
        color: Option<CardColor>,
    ) -> Result<()> {
        if self.seats[seat].player.card_index(card).is_none() {
            return Err(UnoError::CardNotInHand(*card));
        }
        if !legal_plays.contains(card) {
            return Err(UnoError::InvalidChoice(*card));
        }
        if card.is_wild() != color.is_some() {
            return Err(UnoError::InvalidColor { card: *card, color });
        }
        Ok(())
    }

    /// Moves `card` from the seat's hand to the pile, coloring it if it is
    /// wild, and returns it as it now lies on the pile.
    fn play(&mut self, seat: usize, card: &Card, color: Option<CardColor>) -> Result<Card> {
        self.seats[seat].player.play_card(card, &mut self.pile)?;
        if let Some(color) = color {
            self.pile.paint_top(color);
        }

        let played = *self.pile.top_card();
        self.emit(GameEvent::CardPlayed {
            seat,
            name: self.name(seat),
            card: played,
        });
        Ok(played)
    }

    /// Draws one card and plays it straight away if it fits on `top`.
    fn draw_instead(&mut self, seat: usize, top: &Card) -> Result<(TurnAction, PlayOutcome)> {
        let card = self.draw_for(seat)?;
        let playable = card.matches(top);

        self.emit(GameEvent::CardDrawn {
            seat,
            name: self.name(seat),
            card,
            playable,
            interactive: self.seats[seat].is_interactive(),
        });

        if !playable {
            let outcome = PlayOutcome {
                rank: top.rank(),
                color: None,
            };
            return Ok((TurnAction::DrewAndKept(card), outcome));
        }

        let color = if card.is_wild() {
            let Seat { player, policy } = &mut self.seats[seat];
            Some(
                policy
                    .choose_color(player.hand(), &card)
                    .map_err(UnoError::Policy)?,
            )
        } else {
            None
        };

        let played = self.play(seat, &card, color)?;
        let outcome = PlayOutcome {
            rank: played.rank(),
            color,
        };
        Ok((TurnAction::DrewAndPlayed(played), outcome))
    }

    fn resolve_effect(&mut self, rank: Rank) -> Result<()> {
        match rank {
            Rank::Skip => {
                let skipped = self.rotation.next_seat(self.seats.len());
                self.rotation.skip_next();
                self.emit(GameEvent::Skipped {
                    seat: skipped,
                    name: self.name(skipped),
                });
            }
            Rank::Reverse => {
                self.rotation.reverse();
                self.emit(GameEvent::DirectionReversed {
                    direction: self.rotation.direction(),
                });
            }
            Rank::DrawTwo => self.punish_next(DRAW_TWO_PENALTY)?,
            Rank::WildDrawFour => self.punish_next(WILD_DRAW_FOUR_PENALTY)?,
            Rank::Number(_) | Rank::Wild => {}
        }
        Ok(())
    }

    /// The next seat draws `count` cards and loses its turn.
    fn punish_next(&mut self, count: usize) -> Result<()> {
        let target = self.rotation.next_seat(self.seats.len());
        for _ in 0..count {
            self.draw_for(target)?;
        }

        self.emit(GameEvent::PenaltyDrawn {
            seat: target,
            name: self.name(target),
            count,
        });

        self.rotation.skip_next();
        self.emit(GameEvent::Skipped {
            seat: target,
            name: self.name(target),
        });
        Ok(())
    }

    /// Draws one card for `seat`, reshuffling the pile into the deck first if
    /// the deck ran out.
    fn draw_for(&mut self, seat: usize) -> Result<Card> {
        if self.deck.is_empty() {
            self.refill_deck();
        }
        self.seats[seat].player.draw_card(&mut self.deck)
    }

    fn refill_deck(&mut self) {
        self.deck.refill_from(&mut self.pile, &mut self.rng);
        let cards = self.deck.cards_count();
        if cards > 0 {
            info!(cards, "deck refilled from the discard pile");
            self.emit(GameEvent::DeckRefilled { cards });
        }
    }

    fn announce_turn(&mut self, seat: usize, top: &Card) {
        debug!(player = %self.name(seat), %top, hand = self.seats[seat].player.cards_count(), "turn started");

        let standings = self
            .seats
            .iter()
            .map(|seat| Standing {
                name: seat.player.name().to_string(),
                cards: seat.player.cards_count(),
            })
            .collect();

        self.emit(GameEvent::TurnStarted {
            seat,
            name: self.name(seat),
            top_card: *top,
            hand: self.seats[seat].player.hand().to_vec(),
            interactive: self.seats[seat].is_interactive(),
            standings,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        self.sink.emit(event);
    }

    fn name(&self, seat: usize) -> String {
        self.seats[seat].player.name().to_string()
    }

    fn outcome(&self, winner: usize) -> GameOutcome {
        GameOutcome {
            winner,
            name: self.name(winner),
            turns: self.turns,
        }
    }

    pub fn current_seat(&self) -> usize {
        self.rotation.current()
    }

    pub fn next_seat(&self) -> usize {
        self.rotation.next_seat(self.seats.len())
    }

    pub fn direction(&self) -> Direction {
        self.rotation.direction()
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn top_card(&self) -> &Card {
        self.pile.top_card()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &DiscardPile {
        &self.pile
    }

    pub fn seats_count(&self) -> usize {
        self.seats.len()
    }

    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.seats.get(index).map(Seat::player)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().map(Seat::player)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|seat| self.player(seat))
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Every card in the deck, on the pile and in hands.
    pub fn cards_in_play(&self) -> usize {
        self.deck.cards_count()
            + self.pile.cards_count()
            + self.players().map(Player::cards_count).sum::<usize>()
    }
}
