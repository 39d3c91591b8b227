//! Song model for OpenMusic
//!
//! Songs are read-only from the playlist store's point of view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Song record from the songs table
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub performer: String,
}
