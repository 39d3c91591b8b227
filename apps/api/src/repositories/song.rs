//! Song repository
//!
//! Songs are owned by the catalog; the playlist store only reads them.

use sqlx::PgPool;

use super::utils::SONG_COLUMNS;
use crate::models::Song;

/// Repository for song lookups
#[derive(Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    /// Create a new SongRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a song by its unique ID
    pub async fn find_by_id(&self, song_id: &str) -> Result<Option<Song>, sqlx::Error> {
        let sql = format!("SELECT {} FROM songs WHERE songs.id = $1", SONG_COLUMNS);
        sqlx::query_as::<_, Song>(&sql)
            .bind(song_id)
            .fetch_optional(&self.pool)
            .await
    }
}
