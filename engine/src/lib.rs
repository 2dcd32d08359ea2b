pub mod bot;
pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod pile;
pub mod player;
pub mod policy;
pub mod turn;

pub use card::{Card, CardColor, Rank};
pub use error::{Result, UnoError};
pub use game::{Game, GameConfig, GameOutcome, Seat};
pub use policy::{Choice, ChoicePolicy};
