use crate::error::{Result as ServerErrorResult, ServerError};

use bm_auth::PasswordHasher;
use bm_config::ConfigError;
use bm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;

fn fail_config() -> ServerErrorResult<()> {
    Err::<(), _>(ConfigError::auth("auth.jwt_secret is required"))?;
    Ok(())
}

fn fail_database() -> ServerErrorResult<()> {
    Err::<(), _>(DbError::Initialization {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    Ok(())
}

fn fail_hasher() -> ServerErrorResult<PasswordHasher> {
    Ok(PasswordHasher::with_params(0, 0, 0)?)
}

#[test]
fn given_config_error_when_propagated_then_wrapped_as_config() {
    let result = fail_config();

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn given_database_error_when_propagated_then_wrapped_as_database() {
    let result = fail_database();

    assert!(matches!(result, Err(ServerError::Database(_))));
}

#[test]
fn given_invalid_argon2_params_when_propagated_then_wrapped_as_auth() {
    let result = fail_hasher();

    assert!(matches!(result, Err(ServerError::Auth(_))));
}
