use crate::{AuthError, Result as AuthErrorResult};

use bm_core::Owned;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Allow a mutation only when the requester owns the resource.
///
/// Pure comparison. Run it after the resource has been loaded (a missing
/// resource is `NotFound`, never `Forbidden`) and before anything is written.
#[track_caller]
pub fn authorize_mutation<R: Owned>(requester_id: Uuid, resource: &R) -> AuthErrorResult<()> {
    if resource.owner_id() == requester_id {
        return Ok(());
    }

    Err(AuthError::Forbidden {
        message: "Access to resources denied".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
