use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "vidz", version = get_version())]
#[command(about = "Terminal video catalog with playlists and simulated playback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load (pipe-delimited: title | id | tag, tag)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every video in the catalog
    Videos,

    /// Print the number of videos in the catalog
    Count,

    /// Search video titles (one-shot, no playback prompt)
    Search {
        /// Case-insensitive substring to look for
        term: String,
    },

    /// List videos carrying a tag exactly (one-shot)
    Tag {
        /// Tag to match, case-insensitive
        tag: String,
    },

    /// Start the interactive shell (the default when no command is given)
    Shell,
}
