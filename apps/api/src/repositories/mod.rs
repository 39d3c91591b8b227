//! Database repository layer for OpenMusic
//!
//! Every SQL statement the playlist store issues lives here. Repositories
//! return raw `sqlx` results; presence checks and error translation are the
//! store's job. All statements use positional `$n` binding.

pub mod collaboration;
pub mod playlist;
pub mod song;
pub mod utils;

pub use collaboration::CollaborationRepository;
pub use playlist::PlaylistRepository;
pub use song::SongRepository;
