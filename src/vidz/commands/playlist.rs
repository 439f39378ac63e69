//! Playlist operations. Every one resolves the playlist by case-insensitive
//! name first; none of them ever creates or destroys a playlist as a side
//! effect of something else.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::playlists::PlaylistDirectory;

pub fn create(playlists: &mut PlaylistDirectory, name: &str) -> CmdResult {
    if playlists.find(name).is_some() {
        return CmdResult::message(CmdMessage::error(
            "Cannot create playlist: A playlist with the same name already exists",
        ));
    }
    playlists.create(name);
    CmdResult::message(CmdMessage::success(format!(
        "Successfully created new playlist: {name}"
    )))
}

/// Check order is fixed: playlist first, then video existence, then the
/// moderation gate, then the duplicate check.
pub fn add(
    catalog: &Catalog,
    playlists: &mut PlaylistDirectory,
    name: &str,
    id: &str,
) -> CmdResult {
    let err = format!("Cannot add video to {name}:");
    let Some(playlist) = playlists.find_mut(name) else {
        return CmdResult::message(CmdMessage::error(format!("{err} Playlist does not exist")));
    };
    let Some(video) = catalog.get(id) else {
        return CmdResult::message(CmdMessage::error(format!("{err} Video does not exist")));
    };
    if video.is_flagged() {
        return CmdResult::message(CmdMessage::error(format!(
            "{err} Video is currently flagged (reason: {})",
            video.reason_label()
        )));
    }
    if playlist.add(id) {
        CmdResult::message(CmdMessage::success(format!(
            "Added video to {name}: {}",
            video.title
        )))
    } else {
        CmdResult::message(CmdMessage::warning(format!("{err} Video already added")))
    }
}

pub fn remove(
    catalog: &Catalog,
    playlists: &mut PlaylistDirectory,
    name: &str,
    id: &str,
) -> CmdResult {
    let err = format!("Cannot remove video from {name}:");
    let Some(playlist) = playlists.find_mut(name) else {
        return CmdResult::message(CmdMessage::error(format!("{err} Playlist does not exist")));
    };
    let Some(video) = catalog.get(id) else {
        return CmdResult::message(CmdMessage::error(format!("{err} Video does not exist")));
    };
    if playlist.remove(id) {
        CmdResult::message(CmdMessage::success(format!(
            "Removed video from {name}: {}",
            video.title
        )))
    } else {
        CmdResult::message(CmdMessage::warning(format!(
            "{err} Video is not in playlist"
        )))
    }
}

pub fn clear(playlists: &mut PlaylistDirectory, name: &str) -> CmdResult {
    match playlists.find_mut(name) {
        Some(playlist) => {
            playlist.clear();
            CmdResult::message(CmdMessage::success(format!(
                "Successfully removed all videos from {name}"
            )))
        }
        None => CmdResult::message(CmdMessage::error(format!(
            "Cannot clear playlist {name}: Playlist does not exist"
        ))),
    }
}

pub fn delete(playlists: &mut PlaylistDirectory, name: &str) -> CmdResult {
    if playlists.delete(name) {
        CmdResult::message(CmdMessage::success(format!("Deleted playlist: {name}")))
    } else {
        CmdResult::message(CmdMessage::error(format!(
            "Cannot delete playlist {name}: Playlist does not exist"
        )))
    }
}

pub fn list(playlists: &PlaylistDirectory) -> CmdResult {
    if playlists.is_empty() {
        return CmdResult::message(CmdMessage::info("No playlists exist yet"));
    }
    let mut result = CmdResult::message(CmdMessage::info("Showing all playlists:"));
    let mut names: Vec<&str> = playlists.all().iter().map(|p| p.name()).collect();
    names.sort_by_key(|n| n.to_lowercase());
    for name in names {
        result.add_message(CmdMessage::info(format!("  {name}")));
    }
    result
}

/// Entries are shown in insertion order and resolved against the catalog on
/// the way out; an id the catalog does not know is skipped silently.
pub fn show(catalog: &Catalog, playlists: &PlaylistDirectory, name: &str) -> CmdResult {
    let Some(playlist) = playlists.find(name) else {
        return CmdResult::message(CmdMessage::error(format!(
            "Cannot show playlist {name}: Playlist does not exist"
        )));
    };
    let mut result = CmdResult::message(CmdMessage::info(format!("Showing playlist: {name}")));
    if playlist.is_empty() {
        result.add_message(CmdMessage::info("  No videos here yet"));
        return result;
    }
    for video in playlist.video_ids().iter().filter_map(|id| catalog.get(id)) {
        result.add_message(CmdMessage::info(format!("  {}", video.annotated_line())));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;

    #[test]
    fn create_rejects_case_insensitive_duplicates() {
        let mut playlists = PlaylistDirectory::new();
        let first = create(&mut playlists, "My List");
        assert_eq!(
            testing::contents(&first),
            ["Successfully created new playlist: My List"]
        );

        let second = create(&mut playlists, "my list");
        assert_eq!(
            testing::contents(&second),
            ["Cannot create playlist: A playlist with the same name already exists"]
        );
        assert_eq!(playlists.all().len(), 1);
    }

    #[test]
    fn add_to_missing_playlist_creates_nothing() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        let result = add(&catalog, &mut playlists, "X", "amazing_cats_video_id");
        assert_eq!(
            testing::contents(&result),
            ["Cannot add video to X: Playlist does not exist"]
        );
        assert!(playlists.is_empty());
    }

    #[test]
    fn add_checks_video_existence_then_flag_state() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");

        let missing = add(&catalog, &mut playlists, "mix", "nope");
        assert_eq!(
            testing::contents(&missing),
            ["Cannot add video to mix: Video does not exist"]
        );

        let flagged = add(&catalog, &mut playlists, "mix", "home_movie_video_id");
        assert_eq!(
            testing::contents(&flagged),
            ["Cannot add video to mix: Video is currently flagged (reason: family_only)"]
        );
        assert!(playlists.find("mix").unwrap().is_empty());
    }

    #[test]
    fn double_add_keeps_one_copy_and_says_so() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");

        add(&catalog, &mut playlists, "mix", "amazing_cats_video_id");
        let again = add(&catalog, &mut playlists, "MIX", "amazing_cats_video_id");
        assert_eq!(
            testing::contents(&again),
            ["Cannot add video to MIX: Video already added"]
        );
        assert_eq!(
            playlists.find("mix").unwrap().video_ids(),
            ["amazing_cats_video_id"]
        );
    }

    #[test]
    fn remove_distinguishes_absent_video_from_absent_membership() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");
        add(&catalog, &mut playlists, "mix", "amazing_cats_video_id");

        let gone = remove(&catalog, &mut playlists, "mix", "nope");
        assert_eq!(
            testing::contents(&gone),
            ["Cannot remove video from mix: Video does not exist"]
        );

        let removed = remove(&catalog, &mut playlists, "mix", "amazing_cats_video_id");
        assert_eq!(
            testing::contents(&removed),
            ["Removed video from mix: Amazing Cats"]
        );

        let not_in = remove(&catalog, &mut playlists, "mix", "amazing_cats_video_id");
        assert_eq!(
            testing::contents(&not_in),
            ["Cannot remove video from mix: Video is not in playlist"]
        );
    }

    #[test]
    fn clear_empties_unconditionally() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");
        add(&catalog, &mut playlists, "mix", "amazing_cats_video_id");

        let result = clear(&mut playlists, "mix");
        assert_eq!(
            testing::contents(&result),
            ["Successfully removed all videos from mix"]
        );
        assert!(playlists.find("mix").unwrap().is_empty());
    }

    #[test]
    fn deleted_playlist_disappears_from_list_and_show() {
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");
        delete(&mut playlists, "mix");

        assert_eq!(testing::contents(&list(&playlists)), ["No playlists exist yet"]);
        let shown = show(&testing::catalog(), &playlists, "mix");
        assert!(testing::has_error(&shown));
    }

    #[test]
    fn list_sorts_names_case_insensitively() {
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "zebra");
        create(&mut playlists, "Alpha");
        create(&mut playlists, "beta");

        let result = list(&playlists);
        assert_eq!(
            testing::contents(&result),
            ["Showing all playlists:", "  Alpha", "  beta", "  zebra"]
        );
    }

    #[test]
    fn show_keeps_insertion_order_and_annotates_flags() {
        let catalog = testing::catalog();
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");
        add(&catalog, &mut playlists, "mix", "funny_dogs_video_id");
        add(&catalog, &mut playlists, "mix", "amazing_cats_video_id");
        // Flag a member after the fact; show still lists it, annotated.
        playlists.find_mut("mix").unwrap().add("home_movie_video_id");

        let result = show(&catalog, &playlists, "mix");
        let lines = testing::contents(&result);
        assert_eq!(lines[0], "Showing playlist: mix");
        assert!(lines[1].starts_with("  Funny Dogs"));
        assert!(lines[2].starts_with("  Amazing Cats"));
        assert!(lines[3].ends_with("FLAGGED (reason: family_only)"));
    }

    #[test]
    fn show_empty_playlist_has_its_own_line() {
        let mut playlists = PlaylistDirectory::new();
        create(&mut playlists, "mix");
        let result = show(&testing::catalog(), &playlists, "mix");
        assert_eq!(
            testing::contents(&result),
            ["Showing playlist: mix", "  No videos here yet"]
        );
    }
}
