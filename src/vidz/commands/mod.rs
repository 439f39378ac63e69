//! # Command Layer
//!
//! The business logic of vidz. Every operation is a plain function over the
//! domain types ([`Catalog`](crate::catalog::Catalog),
//! [`PlaylistDirectory`](crate::playlists::PlaylistDirectory),
//! [`Playback`](crate::model::Playback)) returning a [`CmdResult`].
//!
//! Commands never touch stdout or stderr and never fail: every unhappy path
//! — unknown video, flagged video, missing playlist, benign no-op — comes
//! back as a leveled [`CmdMessage`] inside the result, for the UI layer to
//! render. The only fatal error in the whole program is a malformed catalog
//! at load time, and that happens before any command runs.
//!
//! ## Command modules
//!
//! - [`videos`]: catalog count and listing
//! - [`playback`]: the play/stop/pause/resume state machine
//! - [`playlist`]: create, add, remove, clear, delete, list, show
//! - [`search`]: title and tag search, plus the selection parse
//! - [`flagging`]: moderation flag and allow

use crate::model::Video;

pub mod flagging;
pub mod playback;
pub mod playlist;
pub mod search;
pub mod videos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI: the messages to render, in order,
/// and — for searches — the matched videos so the caller can offer to play
/// one of them.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed: Vec<Video>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, videos: Vec<Video>) -> Self {
        self.listed = videos;
        self
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::catalog::Catalog;
    use super::{CmdResult, MessageLevel};

    /// Small fixture shared by command tests: three playable videos and one
    /// pre-flagged video.
    pub fn catalog() -> Catalog {
        let mut catalog = Catalog::parse(
            "Amazing Cats | amazing_cats_video_id | #cat, #animal\n\
             Another Cat Video | another_cat_video_id | #cat, #animal\n\
             Funny Dogs | funny_dogs_video_id | #dog, #animal\n\
             Home Movie | home_movie_video_id | #cat\n",
        )
        .unwrap();
        if let Some(v) = catalog.get_mut("home_movie_video_id") {
            v.set_flag(Some("family_only"));
        }
        catalog
    }

    pub fn contents(result: &CmdResult) -> Vec<&str> {
        result.messages.iter().map(|m| m.content.as_str()).collect()
    }

    pub fn has_error(result: &CmdResult) -> bool {
        result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
