//! # Vidz Architecture
//!
//! Vidz is a **UI-agnostic video-catalog library**: a fixed catalog of
//! videos, a playback state machine, playlists, and moderation flags, with
//! a thin interactive CLI client on top. Nothing below the CLI knows about
//! terminals.
//!
//! ## The layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the shell, prints messages        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Player facade (player.rs)                                  │
//! │  - Owns catalog, playlists, and playback state              │
//! │  - Dispatches to commands, returns structured CmdResult     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over Catalog/PlaylistDirectory       │
//! │  - Failures are leveled messages, never panics or Err       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principles
//!
//! - **No I/O assumptions in core.** From `player.rs` inward, code takes
//!   plain arguments and returns plain values; rendering and prompt reading
//!   live in the binary's `cli` module.
//! - **One fatal error.** A malformed catalog aborts startup
//!   ([`error::VidzError::Catalog`]); everything after load is total and
//!   surfaces problems as messages in [`commands::CmdResult`].
//! - **Ids, not references.** Playlists and the playback state hold video
//!   ids and resolve them against the [`catalog::Catalog`] on every read.
//! - **Single-threaded.** No internal synchronization anywhere; callers
//!   that want threads must wrap the [`player::Player`] themselves.
//!
//! ## Module overview
//!
//! - [`player`]: the facade — entry point for all operations
//! - [`commands`]: business logic and the `CmdResult`/`CmdMessage` types
//! - [`catalog`]: the id→video map and its pipe-delimited loader
//! - [`playlists`]: `Playlist` and `PlaylistDirectory`
//! - [`model`]: `Video` and the `Playback` state enum
//! - [`error`]: error types

pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
pub mod player;
pub mod playlists;
