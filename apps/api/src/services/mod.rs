//! Business logic services for OpenMusic
//!
//! This module contains the playlist store and the collaboration
//! capability it depends on.

pub mod collaboration;
pub mod playlist;

pub use collaboration::{CollaborationAuthority, CollaborationService};
pub use playlist::{resolve_access, PlaylistStore};
