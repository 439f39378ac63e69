//! The player facade: the single entry point for every operation.
//!
//! A [`Player`] owns the loaded [`Catalog`], the [`PlaylistDirectory`], and
//! the [`Playback`] session state, and dispatches to the command layer. It
//! holds no I/O and returns [`CmdResult`] values for the UI to render.
//!
//! A `Player` is a plain single-threaded value. Its operations are
//! non-reentrant and carry no internal synchronization; sharing one across
//! threads requires an external mutex around the whole thing.

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::model::Playback;
use crate::playlists::PlaylistDirectory;

pub struct Player {
    catalog: Catalog,
    playlists: PlaylistDirectory,
    playback: Playback,
}

impl Player {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistDirectory::new(),
            playback: Playback::Idle,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    // --- Catalog display ---

    pub fn number_of_videos(&self) -> CmdResult {
        commands::videos::count(&self.catalog)
    }

    pub fn show_all_videos(&self) -> CmdResult {
        commands::videos::list(&self.catalog)
    }

    // --- Playback ---

    pub fn play_video(&mut self, id: &str) -> CmdResult {
        commands::playback::play(&self.catalog, &mut self.playback, id)
    }

    pub fn stop_video(&mut self) -> CmdResult {
        commands::playback::stop(&self.catalog, &mut self.playback)
    }

    pub fn play_random_video(&mut self) -> CmdResult {
        commands::playback::play_random(&self.catalog, &mut self.playback)
    }

    pub fn pause_video(&mut self) -> CmdResult {
        commands::playback::pause(&self.catalog, &mut self.playback)
    }

    pub fn continue_video(&mut self) -> CmdResult {
        commands::playback::resume(&self.catalog, &mut self.playback)
    }

    pub fn show_playing(&self) -> CmdResult {
        commands::playback::show_playing(&self.catalog, &self.playback)
    }

    // --- Playlists ---

    pub fn create_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlist::create(&mut self.playlists, name)
    }

    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> CmdResult {
        commands::playlist::add(&self.catalog, &mut self.playlists, name, id)
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> CmdResult {
        commands::playlist::remove(&self.catalog, &mut self.playlists, name, id)
    }

    pub fn clear_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlist::clear(&mut self.playlists, name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlist::delete(&mut self.playlists, name)
    }

    pub fn show_all_playlists(&self) -> CmdResult {
        commands::playlist::list(&self.playlists)
    }

    pub fn show_playlist(&self, name: &str) -> CmdResult {
        commands::playlist::show(&self.catalog, &self.playlists, name)
    }

    // --- Search ---

    pub fn search_videos(&self, term: &str) -> CmdResult {
        commands::search::by_title(&self.catalog, term)
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> CmdResult {
        commands::search::by_tag(&self.catalog, tag)
    }

    // --- Moderation ---

    pub fn flag_video(&mut self, id: &str, reason: Option<&str>) -> CmdResult {
        commands::flagging::flag(&mut self.catalog, &mut self.playback, id, reason)
    }

    pub fn allow_video(&mut self, id: &str) -> CmdResult {
        commands::flagging::allow(&mut self.catalog, id)
    }
}
