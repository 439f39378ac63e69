//! The video catalog: an id-to-video map loaded once and never resized.
//!
//! The source format is line oriented, three pipe-separated fields per
//! record: `title | id | comma,separated,tags`. Fields and tags are
//! whitespace-trimmed; an empty tag field means no tags; blank lines are
//! skipped. Anything else is a fatal load error — the program cannot run
//! without its catalog.

use crate::error::{Result, VidzError};
use crate::model::Video;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("../../data/videos.txt");

#[derive(Debug, Default)]
pub struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// The catalog baked into the binary, used when no `--catalog` path is
    /// given.
    pub fn load_default() -> Result<Self> {
        Self::parse(DEFAULT_CATALOG)
    }

    pub fn load_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut videos = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
            let &[title, id, tag_field] = fields.as_slice() else {
                return Err(VidzError::Catalog {
                    line,
                    reason: format!(
                        "expected 3 fields separated by '|', got {}",
                        fields.len()
                    ),
                });
            };
            let tags = if tag_field.is_empty() {
                Vec::new()
            } else {
                tag_field.split(',').map(|t| t.trim().to_string()).collect()
            };
            if videos
                .insert(id.to_string(), Video::new(title, id, tags))
                .is_some()
            {
                return Err(VidzError::Catalog {
                    line,
                    reason: format!("duplicate video id '{}'", id),
                });
            }
        }
        debug!("catalog loaded with {} videos", videos.len());
        Ok(Self { videos })
    }

    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// All videos in unspecified order; callers sort as needed.
    pub fn all(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
