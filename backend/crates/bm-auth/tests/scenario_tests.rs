//! Register, sign in, verify, and authorize mutations across two users

use bm_auth::{
    AccessGuard, AuthError, CredentialVerifier, JwtIssuer, JwtValidator, PasswordHasher,
    authorize_mutation,
};
use bm_core::Bookmark;
use bm_db::{BookmarkRepository, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;

const SECRET: &[u8] = b"scenario-secret-key-at-least-32-bytes";

#[tokio::test]
async fn register_signin_verify_and_authorize_across_two_users() {
    let pool = bm_db::open_in_memory_pool().await.unwrap();
    let users = UserRepository::new(pool.clone());
    let bookmarks = BookmarkRepository::new(pool);
    let verifier =
        CredentialVerifier::new(users, PasswordHasher::with_params(1024, 1, 1).unwrap()).unwrap();
    let issuer = JwtIssuer::with_hs256(SECRET, Duration::from_secs(900));
    let guard = AccessGuard::new(Arc::new(JwtValidator::with_hs256(SECRET)));

    // register("a@x.com", "pw1") succeeds
    let a = verifier.register("a@x.com", "pw1").await.unwrap();
    let b = verifier.register("b@x.com", "pw2").await.unwrap();

    // wrong secret is rejected
    let wrong = verifier.authenticate("a@x.com", "wrong").await;
    assert!(matches!(wrong, Err(AuthError::InvalidCredentials { .. })));

    // right secret yields a token that resolves back to A
    let signed_in = verifier.authenticate("a@x.com", "pw1").await.unwrap();
    let token = issuer.issue(&signed_in).unwrap();
    let identity = guard
        .authenticate(Some(&format!("Bearer {}", token)))
        .unwrap();
    assert_that!(identity.user_id, eq(a.id));

    let owned_by_a = Bookmark::new(a.id, "A".into(), "https://a.example".into(), None);
    let owned_by_b = Bookmark::new(b.id, "B".into(), "https://b.example".into(), None);
    bookmarks.create(&owned_by_a).await.unwrap();
    bookmarks.create(&owned_by_b).await.unwrap();

    // A may mutate its own bookmark but not B's
    assert_that!(authorize_mutation(identity.user_id, &owned_by_a), ok(anything()));
    let denied = authorize_mutation(identity.user_id, &owned_by_b);
    assert!(matches!(denied, Err(AuthError::Forbidden { .. })));

    // A's listing never includes B's bookmark
    let listing = bookmarks.list_by_owner(identity.user_id).await.unwrap();
    let ids: Vec<_> = listing.iter().map(|bm| bm.id).collect();
    assert_eq!(ids, vec![owned_by_a.id]);
}
