use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};

pub fn count(catalog: &Catalog) -> CmdResult {
    CmdResult::message(CmdMessage::info(format!(
        "{} videos in the library",
        catalog.len()
    )))
}

/// Every video, sorted by title, with the moderation annotation on flagged
/// entries.
pub fn list(catalog: &Catalog) -> CmdResult {
    let mut result = CmdResult::message(CmdMessage::info(
        "Here's a list of all available videos:",
    ));
    let mut videos = catalog.all();
    videos.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
    for video in videos {
        result.add_message(CmdMessage::info(format!("  {}", video.annotated_line())));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;

    #[test]
    fn count_reports_library_size() {
        let result = count(&testing::catalog());
        assert_eq!(
            testing::contents(&result),
            ["4 videos in the library"]
        );
    }

    #[test]
    fn list_sorts_by_title_and_annotates_flags() {
        let result = list(&testing::catalog());
        let lines = testing::contents(&result);
        assert_eq!(lines[0], "Here's a list of all available videos:");
        assert_eq!(
            lines[1],
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
        assert_eq!(
            lines[4],
            "  Home Movie (home_movie_video_id) [#cat] - FLAGGED (reason: family_only)"
        );
    }
}
