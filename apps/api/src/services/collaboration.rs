//! Collaboration checks consumed by the playlist store
//!
//! The store only needs to know whether a user collaborates on a playlist.
//! [`CollaborationAuthority`] is that capability; [`CollaborationService`]
//! answers it from the `collaborations` table.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::error::{ApiError, ApiResult};
use crate::repositories::CollaborationRepository;

/// Confirms whether a user is a registered collaborator on a playlist
#[async_trait]
pub trait CollaborationAuthority: Send + Sync {
    /// Succeed when `user_id` collaborates on `playlist_id`, fail otherwise.
    async fn verify_collaborator(&self, playlist_id: &str, user_id: &str) -> ApiResult<()>;
}

/// Postgres-backed collaboration authority
#[derive(Clone)]
pub struct CollaborationService {
    collaboration_repo: CollaborationRepository,
}

impl CollaborationService {
    /// Create a new CollaborationService
    pub fn new(pool: PgPool) -> Self {
        Self {
            collaboration_repo: CollaborationRepository::new(pool),
        }
    }
}

#[async_trait]
impl CollaborationAuthority for CollaborationService {
    #[instrument(skip(self))]
    async fn verify_collaborator(&self, playlist_id: &str, user_id: &str) -> ApiResult<()> {
        if self.collaboration_repo.exists(playlist_id, user_id).await? {
            Ok(())
        } else {
            Err(ApiError::invariant("collaboration could not be verified"))
        }
    }
}
