use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::data::query::MatchMode;
use crate::report::Format;

#[derive(Parser, Debug)]
#[command(
    name = "cafeteria-menu",
    version,
    about = "Search the cafeteria menu CSV and total its nutrition values"
)]
pub struct Cli {
    /// Menu CSV to read. Defaults to the bundled file next to the executable.
    #[arg(long, global = true, env = "CAFETERIA_CSV")]
    pub csv: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dish count and the first few dishes
    Stats,
    /// Keyword search; names starting with the keyword rank first
    Search {
        keyword: String,
        /// How many hits to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Show one dish by its exact name
    Show { name: String },
    /// Total every dish whose name contains the keyword
    Sum { keyword: String },
    /// Dishes with the most kcal
    Topkcal {
        #[arg(short = 'n', default_value_t = 10)]
        n: usize,
    },
    /// Total several dishes, matched by exact name (or substring with --contains)
    Sumx {
        #[arg(required = true, num_args = 1..)]
        items: Vec<String>,
        /// Match items as substrings instead of exact names
        #[arg(long)]
        contains: bool,
    },
}

impl Cli {
    pub fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            Format::Text
        }
    }
}

pub fn match_mode(contains: bool) -> MatchMode {
    if contains {
        MatchMode::Contains
    } else {
        MatchMode::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sumx_items_and_flag() {
        let cli = Cli::try_parse_from(["cafeteria-menu", "sumx", "カレー", "豚汁", "--contains"])
            .unwrap();
        match cli.command {
            Command::Sumx { items, contains } => {
                assert_eq!(items, vec!["カレー", "豚汁"]);
                assert!(contains);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sumx_requires_an_item() {
        assert!(Cli::try_parse_from(["cafeteria-menu", "sumx"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cafeteria-menu",
            "search",
            "ラーメン",
            "-n",
            "3",
            "--json",
            "--csv",
            "menu.csv",
        ])
        .unwrap();
        assert_eq!(cli.format(), Format::Json);
        assert_eq!(cli.csv, Some(PathBuf::from("menu.csv")));
        assert!(matches!(cli.command, Command::Search { limit: 3, .. }));
    }

    #[test]
    fn topkcal_defaults_to_ten() {
        let cli = Cli::try_parse_from(["cafeteria-menu", "topkcal"]).unwrap();
        assert!(matches!(cli.command, Command::Topkcal { n: 10 }));
    }
}
