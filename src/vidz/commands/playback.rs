//! The playback state machine: Idle, Playing, or Paused on a single video.
//!
//! Playing over a current video stops it first, so a `play` on top of
//! `play` always yields exactly one stop message followed by one play
//! message. Flagged videos never start.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Playback;
use rand::seq::IndexedRandom;

/// The current video's title, falling back to its id if the catalog no
/// longer knows it. Ids only ever come from the catalog, so the fallback is
/// unreachable today; it stays a fallback rather than a panic.
fn title_of<'a>(catalog: &'a Catalog, id: &'a str) -> &'a str {
    catalog.get(id).map(|v| v.title.as_str()).unwrap_or(id)
}

pub fn play(catalog: &Catalog, playback: &mut Playback, id: &str) -> CmdResult {
    const ERR: &str = "Cannot play video:";
    let Some(video) = catalog.get(id) else {
        return CmdResult::message(CmdMessage::error(format!("{ERR} Video does not exist")));
    };
    if video.is_flagged() {
        return CmdResult::message(CmdMessage::error(format!(
            "{ERR} Video is currently flagged (reason: {})",
            video.reason_label()
        )));
    }

    let mut result = if playback.current_id().is_some() {
        stop(catalog, playback)
    } else {
        CmdResult::default()
    };
    result.add_message(CmdMessage::success(format!("Playing video: {}", video.title)));
    *playback = Playback::Playing(video.id.clone());
    result
}

pub fn stop(catalog: &Catalog, playback: &mut Playback) -> CmdResult {
    match playback.current_id() {
        Some(id) => {
            let message = CmdMessage::success(format!("Stopping video: {}", title_of(catalog, id)));
            *playback = Playback::Idle;
            CmdResult::message(message)
        }
        None => CmdResult::message(CmdMessage::error(
            "Cannot stop video: No video is currently playing",
        )),
    }
}

/// Uniform pick among non-flagged videos, then a normal `play`.
pub fn play_random(catalog: &Catalog, playback: &mut Playback) -> CmdResult {
    let candidates: Vec<_> = catalog
        .all()
        .into_iter()
        .filter(|v| !v.is_flagged())
        .collect();
    match candidates.choose(&mut rand::rng()) {
        Some(video) => play(catalog, playback, &video.id),
        None => CmdResult::message(CmdMessage::warning("No videos available")),
    }
}

pub fn pause(catalog: &Catalog, playback: &mut Playback) -> CmdResult {
    match playback.current_id().map(str::to_string) {
        None => CmdResult::message(CmdMessage::error(
            "Cannot pause video: No video is currently playing",
        )),
        Some(id) if playback.is_paused() => CmdResult::message(CmdMessage::warning(format!(
            "Video already paused: {}",
            title_of(catalog, &id)
        ))),
        Some(id) => {
            let message =
                CmdMessage::success(format!("Pausing video: {}", title_of(catalog, &id)));
            *playback = Playback::Paused(id);
            CmdResult::message(message)
        }
    }
}

pub fn resume(catalog: &Catalog, playback: &mut Playback) -> CmdResult {
    const ERR: &str = "Cannot continue video:";
    match playback.current_id().map(str::to_string) {
        None => CmdResult::message(CmdMessage::error(format!(
            "{ERR} No video is currently playing"
        ))),
        Some(_) if !playback.is_paused() => {
            CmdResult::message(CmdMessage::error(format!("{ERR} Video is not paused")))
        }
        Some(id) => {
            let message =
                CmdMessage::success(format!("Continuing video: {}", title_of(catalog, &id)));
            *playback = Playback::Playing(id);
            CmdResult::message(message)
        }
    }
}

pub fn show_playing(catalog: &Catalog, playback: &Playback) -> CmdResult {
    let line = match playback {
        Playback::Idle => "No video is currently playing".to_string(),
        Playback::Playing(id) => match catalog.get(id) {
            Some(v) => format!("Currently playing: {}", v.display_line()),
            None => "No video is currently playing".to_string(),
        },
        Playback::Paused(id) => match catalog.get(id) {
            Some(v) => format!("Currently playing: {} - PAUSED", v.display_line()),
            None => "No video is currently playing".to_string(),
        },
    };
    CmdResult::message(CmdMessage::info(line))
}
