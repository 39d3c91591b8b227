//! Database models for the OpenMusic playlist store
//!
//! This module contains SQLx row types for:
//! - Playlists, their listing rows and song memberships
//! - Songs as seen through a playlist

pub mod playlist;
pub mod song;

pub use playlist::{Playlist, PlaylistSongEntry, PlaylistSummary, PlaylistWithSongs};
pub use song::Song;
