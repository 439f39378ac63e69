//! Core data types: [`Video`] and the [`Playback`] session state.
//!
//! A video's moderation state is a single `Option<String>`: `None` means the
//! video is not flagged, `Some(reason)` means it is. The reason may be the
//! empty string ("no reason given"); display code renders that as
//! "Not supplied". This keeps "a reason without a flag" unrepresentable.

/// A single catalog entry. Identity, title, and tags are fixed at load time;
/// only the moderation flag is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    flag: Option<String>,
}

impl Video {
    pub fn new(title: impl Into<String>, id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// The reason to show in messages: the stored reason, or "Not supplied"
    /// when the video was flagged without one.
    pub fn reason_label(&self) -> &str {
        match self.flag.as_deref() {
            Some(reason) if !reason.is_empty() => reason,
            _ => "Not supplied",
        }
    }

    pub fn set_flag(&mut self, reason: Option<&str>) {
        self.flag = Some(reason.unwrap_or_default().to_string());
    }

    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// Canonical display string: `Title (id) [tag1 tag2]`.
    pub fn display_line(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }

    /// Display string with the moderation annotation appended when flagged.
    pub fn annotated_line(&self) -> String {
        if self.is_flagged() {
            format!(
                "{} - FLAGGED (reason: {})",
                self.display_line(),
                self.reason_label()
            )
        } else {
            self.display_line()
        }
    }
}

/// Playback session state. At most one video is current; "paused" only
/// exists while a video is current, so the combination lives in one enum
/// rather than a nullable id plus a bool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,
    Playing(String),
    Paused(String),
}

impl Playback {
    pub fn current_id(&self) -> Option<&str> {
        match self {
            Playback::Idle => None,
            Playback::Playing(id) | Playback::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Playback::Paused(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> Video {
        Video::new(
            "Amazing Cats",
            "amazing_cats_video_id",
            vec!["#cat".into(), "#animal".into()],
        )
    }

    #[test]
    fn display_line_includes_id_and_tags() {
        assert_eq!(
            video().display_line(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn display_line_with_no_tags_shows_empty_brackets() {
        let v = Video::new("Video about nothing", "nothing_video_id", vec![]);
        assert_eq!(
            v.display_line(),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn flag_then_clear_leaves_no_trace_of_the_reason() {
        let mut v = video();
        v.set_flag(Some("dont_like_cats"));
        assert!(v.is_flagged());
        assert_eq!(v.flag_reason(), Some("dont_like_cats"));

        v.clear_flag();
        assert!(!v.is_flagged());
        assert_eq!(v.flag_reason(), None);
        assert_eq!(v.annotated_line(), v.display_line());
    }

    #[test]
    fn missing_reason_renders_as_not_supplied() {
        let mut v = video();
        v.set_flag(None);
        assert_eq!(v.flag_reason(), Some(""));
        assert_eq!(v.reason_label(), "Not supplied");
        assert!(v.annotated_line().ends_with("- FLAGGED (reason: Not supplied)"));
    }

    #[test]
    fn playback_paused_only_with_a_current_video() {
        assert_eq!(Playback::Idle.current_id(), None);
        assert!(!Playback::Idle.is_paused());

        let paused = Playback::Paused("v".into());
        assert_eq!(paused.current_id(), Some("v"));
        assert!(paused.is_paused());
    }
}
