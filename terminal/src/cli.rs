//! Command-line interface for the terminal game.

use clap::{Parser, ValueEnum};

/// Play Uno in the terminal against friends and bots
#[derive(Parser, Debug)]
#[command(name = "uno")]
#[command(about = "Play Uno in the terminal against friends and bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of a human player, repeat for every human at the table.
    /// Asked for interactively when left out.
    #[arg(short, long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Number of computer players
    #[arg(short, long, default_value_t = 1)]
    pub bots: usize,

    /// How the computer players pick their cards
    #[arg(long, value_enum, default_value_t = BotStyle::FirstMatch)]
    pub bot_style: BotStyle,

    /// Seed for shuffling and bot decisions, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BotStyle {
    /// Plays the first matching card, wild cards last
    FirstMatch,
    /// Plays any matching card at random
    Random,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn defaults_to_one_first_match_bot() {
        let cli = Cli::try_parse_from(["uno", "-p", "Ada"]).unwrap();

        assert_eq!(cli.players, vec!["Ada".to_string()]);
        assert_eq!(cli.bots, 1);
        assert_eq!(cli.bot_style, BotStyle::FirstMatch);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::try_parse_from([
            "uno",
            "--player",
            "Ada",
            "-p",
            "Bob",
            "--bots",
            "3",
            "--bot-style",
            "random",
            "--seed",
            "42",
        ])
        .unwrap();

        assert_eq!(cli.players, vec!["Ada".to_string(), "Bob".to_string()]);
        assert_eq!(cli.bots, 3);
        assert_eq!(cli.bot_style, BotStyle::Random);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn help_lists_every_bot_style() {
        let command = Cli::command();
        let bot_style = command
            .get_arguments()
            .find(|arg| arg.get_id() == "bot_style")
            .unwrap();

        let names = bot_style
            .get_possible_values()
            .iter()
            .map(|value| value.get_name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first-match", "random"]);
    }

    #[test]
    fn rejects_unknown_bot_style() {
        assert!(Cli::try_parse_from(["uno", "--bot-style", "genius"]).is_err());
    }
}
