//! OpenMusic playlist data-access layer
//!
//! This crate exposes the playlist store used by the OpenMusic API:
//! playlist CRUD, song membership and owner/collaborator access checks
//! over a shared PostgreSQL pool.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use services::{CollaborationAuthority, CollaborationService, PlaylistStore};
