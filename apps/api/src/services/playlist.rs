//! Playlist store: CRUD and access control for playlists
//!
//! [`PlaylistStore`] wraps the playlist and song repositories with the
//! presence checks callers rely on, and decides who may touch a playlist:
//! - the owner, checked against the `owner` column
//! - a collaborator, checked through the injected [`CollaborationAuthority`]
//!
//! Every method is one or two sequential statements. Nothing here opens a
//! transaction, so a verify-then-mutate sequence in the caller is only as
//! consistent as the individual statements.

use std::future::Future;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::{ApiError, ApiResult};
use crate::models::playlist::{PLAYLIST_ID_PREFIX, PLAYLIST_SONG_ID_PREFIX};
use crate::models::{Playlist, PlaylistSummary, PlaylistWithSongs, Song};
use crate::repositories::utils::generate_id;
use crate::repositories::{PlaylistRepository, SongRepository};
use crate::services::collaboration::{CollaborationAuthority, CollaborationService};

/// Message carried by every ownership denial
const NOT_OWNER_MESSAGE: &str = "you are not allowed to access this playlist";

/// Outcome of the ownership half of an access check
#[derive(Debug)]
enum OwnershipCheck {
    /// Caller owns the playlist
    Owner,
    /// Playlist does not exist; collaboration is irrelevant
    Missing(ApiError),
    /// Ownership failed for any other reason; collaboration may still grant access
    Denied(ApiError),
}

impl From<ApiResult<()>> for OwnershipCheck {
    fn from(result: ApiResult<()>) -> Self {
        match result {
            Ok(()) => Self::Owner,
            Err(err) if err.is_not_found() => Self::Missing(err),
            Err(err) => Self::Denied(err),
        }
    }
}

/// Combine an ownership result with a fallback collaboration check.
///
/// The collaboration check only runs when ownership was denied. If it fails
/// too, the ownership error is returned, so callers see `NotFound` or
/// `Authorization` and never a collaboration-specific error.
pub async fn resolve_access<F, Fut>(
    ownership: ApiResult<()>,
    collaborator_check: F,
) -> ApiResult<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<()>>,
{
    match OwnershipCheck::from(ownership) {
        OwnershipCheck::Owner => Ok(()),
        OwnershipCheck::Missing(err) => Err(err),
        OwnershipCheck::Denied(denied) => match collaborator_check().await {
            Ok(()) => Ok(()),
            Err(collab_err) => {
                debug!(error = %collab_err, "collaboration check failed");
                Err(denied)
            }
        },
    }
}

/// Map a membership insert failure onto the store's error vocabulary
fn membership_insert_error(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return ApiError::invariant("song is already in the playlist");
        }
        if db_err.is_foreign_key_violation() {
            return ApiError::invariant("playlist or song does not exist");
        }
    }
    ApiError::Database(err)
}

/// Façade over the connection pool for playlist operations
#[derive(Clone)]
pub struct PlaylistStore {
    playlist_repo: PlaylistRepository,
    song_repo: SongRepository,
    collaborations: Arc<dyn CollaborationAuthority>,
}

impl PlaylistStore {
    /// Create a store over `pool` with an injected collaboration authority
    pub fn new(pool: PgPool, collaborations: Arc<dyn CollaborationAuthority>) -> Self {
        Self {
            playlist_repo: PlaylistRepository::new(pool.clone()),
            song_repo: SongRepository::new(pool),
            collaborations,
        }
    }

    /// Create a store that verifies collaborators against the same database
    pub fn with_collaboration_service(pool: PgPool) -> Self {
        let collaborations = Arc::new(CollaborationService::new(pool.clone()));
        Self::new(pool, collaborations)
    }

    /// Create a playlist and return its generated id
    #[instrument(skip(self))]
    pub async fn add_playlist(&self, name: &str, owner: &str) -> ApiResult<String> {
        let id = generate_id(PLAYLIST_ID_PREFIX);

        let stored = self
            .playlist_repo
            .insert(&id, name, owner)
            .await?
            .filter(|stored| !stored.is_empty())
            .ok_or_else(|| ApiError::invariant("playlist could not be added"))?;

        debug!(playlist_id = %stored, "playlist created");
        Ok(stored)
    }

    /// List playlists the user owns or collaborates on
    #[instrument(skip(self))]
    pub async fn get_playlists(&self, owner: &str) -> ApiResult<Vec<PlaylistSummary>> {
        Ok(self.playlist_repo.find_visible_to(owner).await?)
    }

    /// Fetch a playlist by id
    #[instrument(skip(self))]
    pub async fn get_playlists_by_id(&self, id: &str) -> ApiResult<Playlist> {
        self.playlist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("playlist", id))
    }

    /// Delete a playlist by id
    #[instrument(skip(self))]
    pub async fn delete_playlist_by_id(&self, id: &str) -> ApiResult<()> {
        match self.playlist_repo.delete_by_id(id).await? {
            Some(_) => {
                debug!(playlist_id = %id, "playlist deleted");
                Ok(())
            }
            None => Err(ApiError::not_found("playlist", id)),
        }
    }

    /// Attach a song to a playlist
    #[instrument(skip(self))]
    pub async fn add_song_to_playlist(&self, playlist_id: &str, song_id: &str) -> ApiResult<()> {
        let id = generate_id(PLAYLIST_SONG_ID_PREFIX);

        let entry = self
            .playlist_repo
            .insert_song(&id, playlist_id, song_id)
            .await
            .map_err(membership_insert_error)?
            .ok_or_else(|| ApiError::invariant("song could not be added to the playlist"))?;

        debug!(entry_id = %entry.id, "song added to playlist");
        Ok(())
    }

    /// Fetch a playlist with its owner's username and all of its songs
    #[instrument(skip(self))]
    pub async fn get_songs_playlist_by_playlist_id(
        &self,
        playlist_id: &str,
    ) -> ApiResult<PlaylistWithSongs> {
        let summary = self
            .playlist_repo
            .find_summary_by_id(playlist_id)
            .await?
            .ok_or_else(|| ApiError::not_found("playlist", playlist_id))?;

        let songs = self.playlist_repo.get_songs(playlist_id).await?;

        Ok(PlaylistWithSongs::from_summary(summary, songs))
    }

    /// Detach a song from a playlist
    #[instrument(skip(self))]
    pub async fn delete_song_from_playlist(
        &self,
        playlist_id: &str,
        song_id: &str,
    ) -> ApiResult<()> {
        let removed = self.playlist_repo.delete_song(playlist_id, song_id).await?;
        if removed.is_empty() {
            return Err(ApiError::invariant("song could not be removed from the playlist"));
        }

        debug!(count = removed.len(), "song removed from playlist");
        Ok(())
    }

    /// Fail unless `owner` is exactly the stored owner of playlist `id`
    #[instrument(skip(self))]
    pub async fn verify_playlist_owner(&self, id: &str, owner: &str) -> ApiResult<()> {
        let playlist = self.get_playlists_by_id(id).await?;
        if playlist.owner != owner {
            return Err(ApiError::forbidden(NOT_OWNER_MESSAGE));
        }
        Ok(())
    }

    /// Fail unless the user owns or collaborates on the playlist
    #[instrument(skip(self))]
    pub async fn verify_playlist_access(
        &self,
        playlist_id: &str,
        user_id: &str,
    ) -> ApiResult<()> {
        let ownership = self.verify_playlist_owner(playlist_id, user_id).await;
        resolve_access(ownership, || {
            self.collaborations.verify_collaborator(playlist_id, user_id)
        })
        .await
    }

    /// Fetch a song by id
    #[instrument(skip(self))]
    pub async fn get_song_by_id(&self, id: &str) -> ApiResult<Song> {
        self.song_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("song", id))
    }
}
