//! Access-control decisions without a database
//!
//! Drives `resolve_access` with the in-memory collaboration authority to pin
//! down which error a caller sees for each ownership outcome.

mod common;

use common::MockCollaborationAuthority;
use openmusic_api::services::resolve_access;
use openmusic_api::{ApiError, ApiResult, CollaborationAuthority};
use rstest::rstest;

const PLAYLIST: &str = "playlist-Qbax5Oy7L8WKf74l";

#[derive(Debug, Clone, Copy)]
enum Ownership {
    Owner,
    Missing,
    NotOwner,
}

impl Ownership {
    fn result(self) -> ApiResult<()> {
        match self {
            Self::Owner => Ok(()),
            Self::Missing => Err(ApiError::not_found("playlist", PLAYLIST)),
            Self::NotOwner => Err(ApiError::forbidden("not the owner")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Granted,
    NotFound,
    Forbidden,
}

fn outcome(result: ApiResult<()>) -> Outcome {
    match result {
        Ok(()) => Outcome::Granted,
        Err(ApiError::NotFound { .. }) => Outcome::NotFound,
        Err(ApiError::Authorization(_)) => Outcome::Forbidden,
        Err(other) => panic!("unexpected error kind: {other}"),
    }
}

#[rstest]
#[case(Ownership::Owner, false, Outcome::Granted, 0)]
#[case(Ownership::Owner, true, Outcome::Granted, 0)]
#[case(Ownership::Missing, true, Outcome::NotFound, 0)]
#[case(Ownership::Missing, false, Outcome::NotFound, 0)]
#[case(Ownership::NotOwner, true, Outcome::Granted, 1)]
#[case(Ownership::NotOwner, false, Outcome::Forbidden, 1)]
#[tokio::test]
async fn test_access_matrix(
    #[case] ownership: Ownership,
    #[case] is_collaborator: bool,
    #[case] expected: Outcome,
    #[case] expected_calls: usize,
) {
    let authority = MockCollaborationAuthority::new();
    if is_collaborator {
        authority.add(PLAYLIST, "user-guest");
    }

    let result = resolve_access(ownership.result(), || {
        authority.verify_collaborator(PLAYLIST, "user-guest")
    })
    .await;

    assert_eq!(outcome(result), expected);
    assert_eq!(authority.calls(), expected_calls);
}

#[tokio::test]
async fn test_collaborator_on_other_playlist_is_forbidden() {
    let authority = MockCollaborationAuthority::new();
    authority.add("playlist-someothermix0001", "user-guest");

    let result = resolve_access(Ownership::NotOwner.result(), || {
        authority.verify_collaborator(PLAYLIST, "user-guest")
    })
    .await;

    assert_eq!(outcome(result), Outcome::Forbidden);
}
