//! Stateless queries over the catalog. Flagged videos never appear in
//! results; hits come back both as numbered messages and as the
//! `CmdResult::listed` payload so the caller can offer to play one.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Video;

pub fn by_title(catalog: &Catalog, term: &str) -> CmdResult {
    let needle = term.to_lowercase();
    let hits = collect_hits(catalog, |v| v.title.to_lowercase().contains(&needle));
    results(term, hits)
}

pub fn by_tag(catalog: &Catalog, tag: &str) -> CmdResult {
    let needle = tag.to_lowercase();
    let hits = collect_hits(catalog, |v| {
        v.tags.iter().any(|t| t.to_lowercase() == needle)
    });
    results(tag, hits)
}

/// The "digit or decline" parse for the post-search prompt: a 1-based
/// selection within `len` becomes a 0-based index, anything else is a
/// silent decline.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

fn collect_hits(catalog: &Catalog, matches: impl Fn(&Video) -> bool) -> Vec<Video> {
    let mut hits: Vec<Video> = catalog
        .all()
        .into_iter()
        .filter(|v| !v.is_flagged() && matches(v))
        .cloned()
        .collect();
    hits.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
    hits
}

fn results(term: &str, hits: Vec<Video>) -> CmdResult {
    if hits.is_empty() {
        return CmdResult::message(CmdMessage::info(format!("No search results for {term}")));
    }
    let mut result = CmdResult::message(CmdMessage::info(format!(
        "Here are the results for {term}:"
    )));
    for (i, video) in hits.iter().enumerate() {
        result.add_message(CmdMessage::info(format!(
            "  {}) {}",
            i + 1,
            video.display_line()
        )));
    }
    result.with_listed(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;

    #[test]
    fn title_search_is_a_case_insensitive_substring_match() {
        let catalog = testing::catalog();
        let result = by_title(&catalog, "CAT");
        let lines = testing::contents(&result);
        assert_eq!(lines[0], "Here are the results for CAT:");
        assert_eq!(
            lines[1],
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
        assert_eq!(
            lines[2],
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]"
        );
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn title_search_excludes_flagged_videos() {
        // "Home Movie" matches "movie" but is flagged
        let result = by_title(&testing::catalog(), "movie");
        assert_eq!(
            testing::contents(&result),
            ["No search results for movie"]
        );
        assert!(result.listed.is_empty());
    }

    #[test]
    fn tag_search_is_exact_not_substring() {
        let catalog = testing::catalog();
        let none = by_tag(&catalog, "#ca");
        assert_eq!(testing::contents(&none), ["No search results for #ca"]);

        let cats = by_tag(&catalog, "#CAT");
        // Home Movie is tagged #cat too, but flagged
        assert_eq!(cats.listed.len(), 2);
        assert_eq!(cats.listed[0].title, "Amazing Cats");
        assert_eq!(cats.listed[1].title, "Another Cat Video");
    }

    #[test]
    fn selection_accepts_only_in_range_numbers() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 \n", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("no", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("1", 0), None);
    }
}
