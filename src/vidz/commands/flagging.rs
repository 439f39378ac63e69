//! Moderation: flag a video (blocking playback and playlist insertion) and
//! allow it again. Flagging the current video stops it first.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Playback;

use super::playback;

pub fn flag(
    catalog: &mut Catalog,
    playback_state: &mut Playback,
    id: &str,
    reason: Option<&str>,
) -> CmdResult {
    const ERR: &str = "Cannot flag video:";
    let Some(video) = catalog.get(id) else {
        return CmdResult::message(CmdMessage::error(format!("{ERR} Video does not exist")));
    };
    let already_flagged = video.is_flagged();

    let mut result = if playback_state.current_id() == Some(id) {
        playback::stop(catalog, playback_state)
    } else {
        CmdResult::default()
    };

    if already_flagged {
        result.add_message(CmdMessage::error(format!("{ERR} Video is already flagged")));
        return result;
    }

    if let Some(video) = catalog.get_mut(id) {
        video.set_flag(reason);
        result.add_message(CmdMessage::success(format!(
            "Successfully flagged video: {} (reason: {})",
            video.title,
            video.reason_label()
        )));
    }
    result
}

pub fn allow(catalog: &mut Catalog, id: &str) -> CmdResult {
    const ERR: &str = "Cannot remove flag from video:";
    match catalog.get_mut(id) {
        None => CmdResult::message(CmdMessage::error(format!("{ERR} Video does not exist"))),
        Some(video) if !video.is_flagged() => {
            CmdResult::message(CmdMessage::warning(format!("{ERR} Video is not flagged")))
        }
        Some(video) => {
            video.clear_flag();
            CmdResult::message(CmdMessage::success(format!(
                "Successfully removed flag from video: {}",
                video.title
            )))
        }
    }
}
