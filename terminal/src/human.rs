//! A person at the keyboard.

use std::{
    cell::RefCell,
    fmt,
    io::{self, BufRead, Write},
    rc::Rc,
    str::FromStr,
};

use uno_engine::{error::PolicyError, Card, CardColor, Choice, ChoicePolicy};

/// Input shared by every human at the table. They all type into the same
/// terminal, so only one reader may exist.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Prints `question` and reads one trimmed line. Closed input is an error.
fn prompt<R: BufRead, W: Write>(
    input: &SharedInput<R>,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.borrow_mut().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim().to_string())
}

/// Asks how many people play and what their names are.
pub fn ask_player_names<R: BufRead, W: Write>(
    input: &SharedInput<R>,
    output: &mut W,
) -> io::Result<Vec<String>> {
    let count = loop {
        if let Ok(count) = prompt(input, output, "How many players? ")?.parse::<usize>() {
            break count;
        }
    };

    (1..=count)
        .map(|number| prompt(input, output, &format!("Player #{number}, enter your name: ")))
        .collect()
}

#[derive(Debug)]
pub struct HumanPolicy<R, W> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPolicy<R, W> {
    pub fn new(input: SharedInput<R>, output: W) -> Self {
        Self { input, output }
    }

    fn ask_color(&mut self) -> io::Result<CardColor> {
        loop {
            let answer = prompt(&self.input, &mut self.output, "What is the new color? ")?;
            if let Ok(color) = CardColor::from_str(&answer) {
                return Ok(color);
            }
        }
    }
}

impl<R, W> ChoicePolicy for HumanPolicy<R, W>
where
    R: BufRead + fmt::Debug,
    W: Write + fmt::Debug,
{
    fn choose(
        &mut self,
        _hand: &[Card],
        legal_plays: &[Card],
        _top_card: &Card,
    ) -> Result<Choice, PolicyError> {
        for (index, card) in legal_plays.iter().enumerate() {
            writeln!(self.output, "{}: {}", index + 1, card)?;
        }
        writeln!(self.output, "d: draw a card instead")?;

        let card = loop {
            let answer = prompt(&self.input, &mut self.output, "Which do you want to play? ")?;
            if answer.eq_ignore_ascii_case("d") {
                return Ok(Choice::Decline);
            }
            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| legal_plays.get(index));
            if let Some(card) = picked {
                break *card;
            }
        };

        if card.is_wild() {
            Ok(Choice::play_wild(card, self.ask_color()?))
        } else {
            Ok(Choice::play(card))
        }
    }

    fn choose_color(&mut self, _hand: &[Card], _card: &Card) -> Result<CardColor, PolicyError> {
        Ok(self.ask_color()?)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
