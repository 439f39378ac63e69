use clap::Parser;
use vidz::catalog::Catalog;
use vidz::error::Result;
use vidz::player::Player;

mod cli;
use cli::commands::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load_path(path)?,
        None => Catalog::load_default()?,
    };
    let mut player = Player::new(catalog);

    match args.command {
        Some(Commands::Videos) => cli::print::messages(&player.show_all_videos().messages),
        Some(Commands::Count) => cli::print::messages(&player.number_of_videos().messages),
        Some(Commands::Search { term }) => {
            cli::print::messages(&player.search_videos(&term).messages)
        }
        Some(Commands::Tag { tag }) => {
            cli::print::messages(&player.search_videos_with_tag(&tag).messages)
        }
        Some(Commands::Shell) | None => cli::shell::run(&mut player)?,
    }
    Ok(())
}
