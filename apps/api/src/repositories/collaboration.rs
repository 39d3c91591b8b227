//! Collaboration repository
//!
//! Read-only view of the `collaborations` table. Adding and removing
//! collaborators belongs to the collaboration subsystem.

use sqlx::PgPool;

/// Repository for collaboration membership checks
#[derive(Clone)]
pub struct CollaborationRepository {
    pool: PgPool,
}

impl CollaborationRepository {
    /// Create a new CollaborationRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a user is registered as a collaborator on a playlist
    pub async fn exists(&self, playlist_id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        let result: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM collaborations
                WHERE playlist_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(playlist_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.unwrap_or(false))
    }
}
