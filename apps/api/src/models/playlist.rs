//! Playlist models for OpenMusic
//!
//! Rows from the `playlists` and `playlistsongs` tables, plus the
//! joined shapes the store hands back to callers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::song::Song;

/// Prefix of every generated playlist id
pub const PLAYLIST_ID_PREFIX: &str = "playlist";

/// Prefix of every generated playlist membership id
pub const PLAYLIST_SONG_ID_PREFIX: &str = "playlist_songs";

/// Playlist record from the playlists table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier (`playlist-<16 chars>`)
    pub id: String,

    /// Playlist name
    pub name: String,

    /// User id of the owner
    pub owner: String,
}

/// Playlist listing row with the owner's display name
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    /// Owner's username; `None` when the owner has no users row
    pub username: Option<String>,
}

/// Song membership row from the playlistsongs table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PlaylistSongEntry {
    /// Unique membership identifier (`playlist_songs-<16 chars>`)
    pub id: String,

    /// Playlist the song belongs to
    pub playlist_id: String,

    /// Song in the playlist
    pub song_id: String,
}

/// A playlist together with every song attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWithSongs {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub songs: Vec<Song>,
}

impl PlaylistWithSongs {
    /// Attach the song list to a playlist header row
    pub fn from_summary(summary: PlaylistSummary, songs: Vec<Song>) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            username: summary.username,
            songs,
        }
    }
}
