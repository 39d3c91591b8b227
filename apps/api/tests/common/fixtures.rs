//! Test fixtures for playlist store integration tests
//!
//! Inserts the catalog rows (users, songs, collaborations) the store reads
//! but never writes. Every fixture uses freshly generated ids so tests can
//! share one database and run in parallel.

#![allow(dead_code)]

use fake::faker::internet::en::Username;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use openmusic_api::models::Song;
use openmusic_api::repositories::utils::generate_id;
use sqlx::PgPool;

/// A user row created for a test
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
}

/// Insert a user with a unique id and username
pub async fn insert_user(pool: &PgPool) -> TestUser {
    let id = generate_id("user");
    let base: String = Username().fake();
    let username = format!("{}_{}", base, &id[5..13]);
    let fullname: String = Name().fake();

    sqlx::query("INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4)")
        .bind(&id)
        .bind(&username)
        .bind("not-a-real-hash")
        .bind(&fullname)
        .execute(pool)
        .await
        .expect("user fixture should insert");

    TestUser { id, username }
}

/// Insert a song with a random title and performer
pub async fn insert_song(pool: &PgPool) -> Song {
    let id = generate_id("song");
    let title_words: Vec<String> = Words(2..4).fake();
    let title = title_words.join(" ");
    let performer: String = Name().fake();

    sqlx::query(
        "INSERT INTO songs (id, title, year, genre, performer, duration) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&id)
    .bind(&title)
    .bind(2021_i32)
    .bind("Indie")
    .bind(&performer)
    .bind(180_i32)
    .execute(pool)
    .await
    .expect("song fixture should insert");

    Song {
        id,
        title,
        performer,
    }
}

/// Register `user_id` as a collaborator on `playlist_id`
pub async fn insert_collaboration(pool: &PgPool, playlist_id: &str, user_id: &str) {
    sqlx::query("INSERT INTO collaborations (id, playlist_id, user_id) VALUES ($1, $2, $3)")
        .bind(generate_id("collab"))
        .bind(playlist_id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("collaboration fixture should insert");
}
