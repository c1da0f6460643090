use crate::{AuthError, authorize_mutation};

use bm_core::Bookmark;

use uuid::Uuid;

fn bookmark_owned_by(owner: Uuid) -> Bookmark {
    Bookmark::new(
        owner,
        "Rust book".to_string(),
        "https://doc.rust-lang.org/book/".to_string(),
        None,
    )
}

#[test]
fn given_owner_when_authorized_then_allows_mutation() {
    let owner = Uuid::new_v4();
    let bookmark = bookmark_owned_by(owner);

    let result = authorize_mutation(owner, &bookmark);

    assert!(result.is_ok());
}

#[test]
fn given_other_user_when_authorized_then_returns_forbidden() {
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let bookmark = bookmark_owned_by(owner);

    let result = authorize_mutation(intruder, &bookmark);

    assert!(matches!(result, Err(AuthError::Forbidden { .. })));
    assert_eq!(result.unwrap_err().error_code(), "FORBIDDEN");
}
