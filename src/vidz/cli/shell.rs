//! The interactive shell: one command per line, dispatched to the
//! [`Player`]. Line parsing is separated from the read loop so it can be
//! tested without a terminal.

use std::io::{self, BufRead, Write};

use vidz::commands::search::parse_selection;
use vidz::model::Video;
use vidz::player::Player;

use super::print;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Exit,
    Count,
    Videos,
    Play(String),
    Random,
    Stop,
    Pause,
    Resume,
    Playing,
    Search(String),
    SearchTag(String),
    Playlists,
    Show(String),
    Create(String),
    Add { name: String, id: String },
    Remove { name: String, id: String },
    Clear(String),
    Delete(String),
    Flag { id: String, reason: Option<String> },
    Allow(String),
}

/// Parses one input line. `Ok(None)` is a blank line; `Err` carries the
/// usage or unknown-command message to print.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let cmd = match word.to_lowercase().as_str() {
        "help" => ShellCommand::Help,
        "exit" | "quit" => ShellCommand::Exit,
        "count" => ShellCommand::Count,
        "videos" => ShellCommand::Videos,
        "play" => ShellCommand::Play(one_arg("play <video-id>", &args)?),
        "random" => ShellCommand::Random,
        "stop" => ShellCommand::Stop,
        "pause" => ShellCommand::Pause,
        "resume" | "continue" => ShellCommand::Resume,
        "playing" => ShellCommand::Playing,
        "search" => ShellCommand::Search(joined("search <term>", &args)?),
        "tag" => ShellCommand::SearchTag(one_arg("tag <tag>", &args)?),
        "playlists" => ShellCommand::Playlists,
        "show" => ShellCommand::Show(joined("show <playlist>", &args)?),
        "create" => ShellCommand::Create(joined("create <playlist>", &args)?),
        "add" => {
            let (name, id) = name_and_id("add <playlist> <video-id>", &args)?;
            ShellCommand::Add { name, id }
        }
        "remove" => {
            let (name, id) = name_and_id("remove <playlist> <video-id>", &args)?;
            ShellCommand::Remove { name, id }
        }
        "clear" => ShellCommand::Clear(joined("clear <playlist>", &args)?),
        "delete" => ShellCommand::Delete(joined("delete <playlist>", &args)?),
        "flag" => {
            let [id, reason @ ..] = &args[..] else {
                return Err("Usage: flag <video-id> [reason]".to_string());
            };
            let reason = (!reason.is_empty()).then(|| reason.join(" "));
            ShellCommand::Flag {
                id: id.to_string(),
                reason,
            }
        }
        "allow" => ShellCommand::Allow(one_arg("allow <video-id>", &args)?),
        other => {
            return Err(format!(
                "Unknown command: {}. Type 'help' for a list of commands.",
                other
            ))
        }
    };
    Ok(Some(cmd))
}

fn one_arg(usage: &str, args: &[&str]) -> Result<String, String> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(format!("Usage: {}", usage)),
    }
}

/// The whole remainder of the line as one argument (playlist names and
/// search terms may contain spaces).
fn joined(usage: &str, args: &[&str]) -> Result<String, String> {
    if args.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(args.join(" "))
    }
}

/// Last token is the video id, everything before it is the playlist name.
fn name_and_id(usage: &str, args: &[&str]) -> Result<(String, String), String> {
    match args {
        [name @ .., id] if !name.is_empty() => Ok((name.join(" "), id.to_string())),
        _ => Err(format!("Usage: {}", usage)),
    }
}

pub fn run(player: &mut Player) -> io::Result<()> {
    println!("vidz shell. Type 'help' for commands, 'exit' to leave.");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Exit)) => break,
            Ok(Some(ShellCommand::Help)) => print_help(),
            Ok(Some(cmd)) => dispatch(player, cmd)?,
            Err(message) => println!("{}", message),
        }
    }
    Ok(())
}

fn dispatch(player: &mut Player, cmd: ShellCommand) -> io::Result<()> {
    let result = match cmd {
        ShellCommand::Count => player.number_of_videos(),
        ShellCommand::Videos => player.show_all_videos(),
        ShellCommand::Play(id) => player.play_video(&id),
        ShellCommand::Random => player.play_random_video(),
        ShellCommand::Stop => player.stop_video(),
        ShellCommand::Pause => player.pause_video(),
        ShellCommand::Resume => player.continue_video(),
        ShellCommand::Playing => player.show_playing(),
        ShellCommand::Search(term) => {
            let result = player.search_videos(&term);
            print::messages(&result.messages);
            return offer_playback(player, &result.listed);
        }
        ShellCommand::SearchTag(tag) => {
            let result = player.search_videos_with_tag(&tag);
            print::messages(&result.messages);
            return offer_playback(player, &result.listed);
        }
        ShellCommand::Playlists => player.show_all_playlists(),
        ShellCommand::Show(name) => player.show_playlist(&name),
        ShellCommand::Create(name) => player.create_playlist(&name),
        ShellCommand::Add { name, id } => player.add_to_playlist(&name, &id),
        ShellCommand::Remove { name, id } => player.remove_from_playlist(&name, &id),
        ShellCommand::Clear(name) => player.clear_playlist(&name),
        ShellCommand::Delete(name) => player.delete_playlist(&name),
        ShellCommand::Flag { id, reason } => player.flag_video(&id, reason.as_deref()),
        ShellCommand::Allow(id) => player.allow_video(&id),
        // Handled by the read loop
        ShellCommand::Help | ShellCommand::Exit => return Ok(()),
    };
    print::messages(&result.messages);
    Ok(())
}

/// The post-search prompt: a number in range plays that result, anything
/// else is a silent no.
fn offer_playback(player: &mut Player, hits: &[Video]) -> io::Result<()> {
    if hits.is_empty() {
        return Ok(());
    }
    println!("Would you like to play any of the above? If yes, specify the number of the video.");
    println!("If your answer is not a valid number, we will assume it's a no.");
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        return Ok(());
    }
    if let Some(i) = parse_selection(&answer, hits.len()) {
        print::messages(&player.play_video(&hits[i].id).messages);
    }
    Ok(())
}

fn print_help() {
    println!("Catalog:");
    println!("  videos                         list every video");
    println!("  count                          number of videos in the library");
    println!("Playback:");
    println!("  play <video-id>                play a video (stops the current one)");
    println!("  random                         play a random non-flagged video");
    println!("  stop | pause | resume          control the current video");
    println!("  playing                        show what is playing");
    println!("Playlists:");
    println!("  create <playlist>              create a new playlist");
    println!("  add <playlist> <video-id>      add a video to a playlist");
    println!("  remove <playlist> <video-id>   remove a video from a playlist");
    println!("  clear <playlist>               remove every video from a playlist");
    println!("  delete <playlist>              delete a playlist");
    println!("  playlists                      list all playlists");
    println!("  show <playlist>                show a playlist's videos");
    println!("Search:");
    println!("  search <term>                  search titles, then offer playback");
    println!("  tag <tag>                      search by exact tag");
    println!("Moderation:");
    println!("  flag <video-id> [reason]       flag a video");
    println!("  allow <video-id>               remove a video's flag");
    println!("Other:");
    println!("  help, exit");
}
