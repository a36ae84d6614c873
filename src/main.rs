// src/main.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gamehub::application::commands::*;
use gamehub::application::menu::MENU_BANNER;
use gamehub::application::{user_message, AppState, MenuOption};
use gamehub::config::CatalogConfig;
use gamehub::error::AppResult;

#[derive(Parser)]
#[command(name = "gamehub")]
#[command(about = "Keep a catalog of digital games", long_about = None)]
struct Cli {
    /// Snapshot file used by save/load (defaults to the user data directory)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Currency code prices are shown in (defaults to EUR)
    #[arg(short, long)]
    currency: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = CatalogConfig::resolve(cli.snapshot, cli.currency)
        .context("failed to resolve configuration")?;
    let mut state = AppState::new(config).context("failed to start the catalog")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", MENU_BANNER);
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        let option = match line.parse::<MenuOption>() {
            Ok(option) => option,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let outcome: AppResult<String> = match option {
            MenuOption::CreateGames => create_sample_games(&mut state.catalog),
            MenuOption::SearchByTag => {
                let tag = prompt(&mut lines, "Enter a tag to search for similar games: ")?;
                Ok(search_by_tag(&state.catalog, tag.trim()))
            }
            MenuOption::ShowAll => Ok(show_all(&state.catalog)),
            MenuOption::Save => save_games(&state),
            MenuOption::Load => load_games(&mut state),
            MenuOption::AddTags => add_sample_tags(&mut state.catalog),
            MenuOption::RemoveTags => remove_sample_tags(&mut state.catalog),
            MenuOption::SetCurrency => {
                let code = prompt(&mut lines, "Enter currency code: ")?;
                set_currency(&mut state.catalog, &code)
            }
            // no flush on exit
            MenuOption::Exit => return Ok(()),
        };

        match outcome {
            Ok(text) if text.is_empty() => {}
            Ok(text) => println!("{}", text.trim_end()),
            Err(err) => println!("{}", user_message(&err)),
        }
    }
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<String> {
    println!("{}", message);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}
