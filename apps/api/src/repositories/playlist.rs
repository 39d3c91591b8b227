//! Playlist repository for centralized database operations
//!
//! This module provides every statement against the `playlists` and
//! `playlistsongs` tables in a single location, following the repository
//! pattern. Presence checks and error translation live in the store.

use sqlx::PgPool;

use super::utils::{PLAYLIST_COLUMNS, PLAYLIST_SUMMARY_COLUMNS, SONG_COLUMNS};
use crate::models::{Playlist, PlaylistSongEntry, PlaylistSummary, Song};

/// Repository for playlist database operations
#[derive(Clone)]
pub struct PlaylistRepository {
    pool: PgPool,
}

impl PlaylistRepository {
    /// Create a new PlaylistRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a playlist row, returning the id the database stored
    pub async fn insert(
        &self,
        id: &str,
        name: &str,
        owner: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO playlists (id, name, owner) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(id)
        .bind(name)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a playlist by its unique ID
    pub async fn find_by_id(&self, playlist_id: &str) -> Result<Option<Playlist>, sqlx::Error> {
        let sql = format!("SELECT {} FROM playlists WHERE id = $1", PLAYLIST_COLUMNS);
        sqlx::query_as::<_, Playlist>(&sql)
            .bind(playlist_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find every playlist a user owns or collaborates on
    ///
    /// Collaboration is tested with EXISTS rather than a join so a playlist
    /// with several collaborators is returned once.
    pub async fn find_visible_to(
        &self,
        user_id: &str,
    ) -> Result<Vec<PlaylistSummary>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {}
            FROM playlists
            LEFT JOIN users ON users.id = playlists.owner
            WHERE playlists.owner = $1
                OR EXISTS(
                    SELECT 1 FROM collaborations
                    WHERE collaborations.playlist_id = playlists.id
                        AND collaborations.user_id = $1
                )
            "#,
            PLAYLIST_SUMMARY_COLUMNS
        );
        sqlx::query_as::<_, PlaylistSummary>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Find a playlist header row (with the owner's username) by ID
    pub async fn find_summary_by_id(
        &self,
        playlist_id: &str,
    ) -> Result<Option<PlaylistSummary>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {}
            FROM playlists
            LEFT JOIN users ON users.id = playlists.owner
            WHERE playlists.id = $1
            "#,
            PLAYLIST_SUMMARY_COLUMNS
        );
        sqlx::query_as::<_, PlaylistSummary>(&sql)
            .bind(playlist_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a playlist, returning its id when a row was removed
    pub async fn delete_by_id(&self, playlist_id: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM playlists WHERE id = $1 RETURNING id")
            .bind(playlist_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a song membership row
    pub async fn insert_song(
        &self,
        id: &str,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Option<PlaylistSongEntry>, sqlx::Error> {
        sqlx::query_as::<_, PlaylistSongEntry>(
            r#"
            INSERT INTO playlistsongs (id, playlist_id, song_id)
            VALUES ($1, $2, $3)
            RETURNING id, playlist_id, song_id
            "#,
        )
        .bind(id)
        .bind(playlist_id)
        .bind(song_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Get the songs in a playlist, in storage order
    pub async fn get_songs(&self, playlist_id: &str) -> Result<Vec<Song>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT {}
            FROM playlistsongs
            JOIN songs ON songs.id = playlistsongs.song_id
            WHERE playlistsongs.playlist_id = $1
            "#,
            SONG_COLUMNS
        );
        sqlx::query_as::<_, Song>(&sql)
            .bind(playlist_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Remove a song from a playlist, returning the ids of the removed rows
    pub async fn delete_song(
        &self,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "DELETE FROM playlistsongs WHERE playlist_id = $1 AND song_id = $2 RETURNING id",
        )
        .bind(playlist_id)
        .bind(song_id)
        .fetch_all(&self.pool)
        .await
    }
}
