//! Shared utility functions for repositories
//!
//! This module provides id generation and the column lists shared by
//! the repositories.

use rand::Rng;

/// URL-safe alphabet used for the random part of generated ids
const ID_ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Number of random characters after the prefix
pub const ID_SUFFIX_LEN: usize = 16;

/// Generate a new identifier of the form `{prefix}-{16 random chars}`.
///
/// # Example
/// ```
/// use openmusic_api::repositories::utils::generate_id;
///
/// let id = generate_id("playlist");
/// assert!(id.starts_with("playlist-"));
/// assert_eq!(id.len(), "playlist-".len() + 16);
/// ```
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", prefix, suffix)
}

// ============================================================================
// SQL Column Constants
// ============================================================================

/// SQL columns for playlist queries
pub const PLAYLIST_COLUMNS: &str = "id, name, owner";

/// SQL columns for playlist listing queries (requires the users join)
pub const PLAYLIST_SUMMARY_COLUMNS: &str = "playlists.id, playlists.name, users.username";

/// SQL columns for song queries
pub const SONG_COLUMNS: &str = "songs.id, songs.title, songs.performer";
