//! Mock collaboration authority for access-control tests
//!
//! [`MockCollaborationAuthority`] keeps `(playlist_id, user_id)` pairs in
//! memory and counts how often it was asked, so tests can check both the
//! answer and whether the fallback ran at all.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use openmusic_api::{ApiError, ApiResult, CollaborationAuthority};

/// In-memory collaboration authority
///
/// Clones share the same membership set and call counter.
#[derive(Clone, Default)]
pub struct MockCollaborationAuthority {
    members: Arc<RwLock<HashSet<(String, String)>>>,
    calls: Arc<AtomicUsize>,
}

impl MockCollaborationAuthority {
    /// Create an authority with no collaborators
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collaborator
    pub fn add(&self, playlist_id: &str, user_id: &str) {
        let mut members = self.members.write().unwrap_or_else(|e| e.into_inner());
        members.insert((playlist_id.to_string(), user_id.to_string()));
    }

    /// Number of `verify_collaborator` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollaborationAuthority for MockCollaborationAuthority {
    async fn verify_collaborator(&self, playlist_id: &str, user_id: &str) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let members = self.members.read().unwrap_or_else(|e| e.into_inner());
        if members.contains(&(playlist_id.to_string(), user_id.to_string())) {
            Ok(())
        } else {
            Err(ApiError::invariant("collaboration could not be verified"))
        }
    }
}
