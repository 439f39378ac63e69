//! Playlists and the directory that owns them.
//!
//! A playlist holds video ids, never videos: entries are resolved against
//! the [`Catalog`](crate::catalog::Catalog) on every read, so there is no
//! ownership to get wrong. Names are case-preserved for display, but every
//! lookup — find, the creation collision check, and delete — matches
//! case-insensitively.

/// A named, insertion-ordered, duplicate-free list of video ids.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_ids: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn add(&mut self, id: &str) -> bool {
        if self.video_ids.iter().any(|v| v == id) {
            return false;
        }
        self.video_ids.push(id.to_string());
        true
    }

    /// Removes `id` if present. Returns whether a removal happened.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|v| v != id);
        self.video_ids.len() != before
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

/// Owns every live playlist. Invariant: no two playlists have
/// case-insensitively equal names.
#[derive(Debug, Default)]
pub struct PlaylistDirectory {
    playlists: Vec<Playlist>,
}

impl PlaylistDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Playlist> {
        let needle = name.to_lowercase();
        self.playlists
            .iter()
            .find(|p| p.name.to_lowercase() == needle)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        let needle = name.to_lowercase();
        self.playlists
            .iter_mut()
            .find(|p| p.name.to_lowercase() == needle)
    }

    /// Stores a new empty playlist under `name`, case preserved.
    ///
    /// Does not re-check uniqueness: the player is the only caller and
    /// rejects collisions before calling in.
    pub fn create(&mut self, name: &str) {
        self.playlists.push(Playlist::new(name));
    }

    /// Removes the playlist matching `name` by the same case-insensitive
    /// rule as [`find`](Self::find). Returns whether one was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let needle = name.to_lowercase();
        let before = self.playlists.len();
        self.playlists.retain(|p| p.name.to_lowercase() != needle);
        self.playlists.len() != before
    }

    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_a_set_insert() {
        let mut p = Playlist::new("mix");
        assert!(p.add("a"));
        assert!(p.add("b"));
        assert!(!p.add("a"));
        assert_eq!(p.video_ids(), ["a", "b"]);
    }

    #[test]
    fn remove_reports_whether_anything_happened() {
        let mut p = Playlist::new("mix");
        p.add("a");
        assert!(p.remove("a"));
        assert!(!p.remove("a"));
        assert!(p.is_empty());
    }

    #[test]
    fn clear_always_succeeds() {
        let mut p = Playlist::new("mix");
        p.clear();
        p.add("a");
        p.add("b");
        p.clear();
        assert!(p.is_empty());
    }

    #[test]
    fn find_is_case_insensitive_and_preserves_display_case() {
        let mut dir = PlaylistDirectory::new();
        dir.create("My List");
        let found = dir.find("my LIST").unwrap();
        assert_eq!(found.name(), "My List");
    }

    #[test]
    fn delete_uses_the_same_case_rule_as_find() {
        let mut dir = PlaylistDirectory::new();
        dir.create("My List");
        assert!(dir.delete("MY list"));
        assert!(dir.find("my list").is_none());
        assert!(!dir.delete("My List"));
    }
}
