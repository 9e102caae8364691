use clap::{Parser, Subcommand};
use dish_swipe::SwipeDirection;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dish-swipe", version, about = "Headless dish swipe deck")]
pub struct CliArgs {
    /// Print output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Load restaurants from a JSON file instead of the built-in catalog
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the dishes of the swipe deck
    Deck,
    /// List every restaurant in the catalog
    Catalog,
    /// Show the info card and map a restaurant's detail page would render
    Show { slug: String },
    /// Print the map-view URL for a restaurant
    Url { slug: String },
    /// Simulate a swipe session, e.g. `rrl` (r = like, l = dislike)
    Swipe {
        #[arg(value_parser = parse_moves)]
        moves: Moves,
    },
}

/// Swipe directions given on the command line, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moves(pub Vec<SwipeDirection>);

fn parse_moves(value: &str) -> Result<Moves, String> {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'r' => Ok(SwipeDirection::Right),
            'l' => Ok(SwipeDirection::Left),
            other => Err(format!("unknown move '{other}', expected 'l' or 'r'")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_parse_case_insensitively() {
        assert_eq!(
            parse_moves("rL r"),
            Ok(Moves(vec![
                SwipeDirection::Right,
                SwipeDirection::Left,
                SwipeDirection::Right
            ]))
        );
        assert!(parse_moves("rx").is_err());
    }

    #[test]
    fn swipe_command_parses() {
        let args = CliArgs::try_parse_from(["dish-swipe", "--json", "swipe", "rl"]).expect("args");

        assert!(args.json);
        assert!(matches!(args.command, Command::Swipe { ref moves } if moves.0.len() == 2));
    }
}
