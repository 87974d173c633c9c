mod cli;
mod config;
mod data;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use cli::{Cli, Command};
use data::loader::{load_menu, LoadError};
use data::query;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERROR] {err:#}");
            if let Some(LoadError::NotFound(_)) = err.downcast_ref::<LoadError>() {
                eprintln!("        Put the menu CSV next to the executable or pass --csv <path>.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format();
    let csv_path = config::resolve_csv_path(cli.csv)?;
    debug!("menu CSV: {}", csv_path.display());

    let dishes = load_menu(&csv_path)?;

    let output = match cli.command {
        Command::Stats => report::stats(&dishes, format)?,
        Command::Search { keyword, limit } => {
            let hits = query::search(&dishes, &keyword);
            report::search(&hits, limit, format)?
        }
        Command::Show { name } => report::show(query::find_exact(&dishes, &name), format)?,
        Command::Sum { keyword } => {
            let matched = query::filter_by_keyword(&dishes, &keyword);
            let totals =
                (!matched.is_empty()).then(|| query::sum_nutrients(matched.iter().copied()));
            report::sum(&matched, totals.as_ref(), format)?
        }
        Command::Topkcal { n } => report::top_energy(&query::top_by_energy(&dishes, n), n, format)?,
        Command::Sumx { items, contains } => {
            let resolution = query::resolve_targets(&dishes, &items, cli::match_mode(contains));
            report::resolution(&resolution, format)?
        }
    };

    print!("{output}");
    if format == report::Format::Json {
        println!();
    }
    Ok(())
}
