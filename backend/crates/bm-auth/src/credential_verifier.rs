//! Signup and signin against the credential store.
//!
//! `authenticate` fails with `InvalidCredentials` for both an unknown email
//! and a wrong password. When the email is unknown a verification against a
//! throwaway hash still runs so both paths cost about the same.

use crate::{AuthError, PasswordHasher, Result as AuthErrorResult};

use bm_core::User;
use bm_db::{DbError, UserRepository};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

#[derive(Clone)]
pub struct CredentialVerifier {
    users: UserRepository,
    hasher: PasswordHasher,
    dummy_hash: Arc<str>,
}

impl CredentialVerifier {
    pub fn new(users: UserRepository, hasher: PasswordHasher) -> AuthErrorResult<Self> {
        let dummy_hash = hasher.hash("bm-dummy-password")?;

        Ok(Self {
            users,
            hasher,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Create a new identity. Rejects an email that is already registered,
    /// including one that wins a concurrent signup race at the store.
    pub async fn register(&self, email: &str, password: &str) -> AuthErrorResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            warn!("Signup rejected: email already registered");
            return Err(AuthError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let hash = self.hash_blocking(password.to_string()).await?;
        let user = User::new(email.to_string(), hash);

        match self.users.create(&user).await {
            Ok(()) => {}
            Err(DbError::ConstraintViolation { .. }) => {
                warn!("Signup rejected: email registered concurrently");
                return Err(AuthError::DuplicateEmail {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Resolve an email/password pair to its identity
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthErrorResult<User> {
        let user = self.users.find_by_email(email).await?;

        let phc = match &user {
            Some(u) => u.hash.clone(),
            None => self.dummy_hash.to_string(),
        };
        let matched = self.verify_blocking(password.to_string(), phc).await?;

        match user {
            Some(user) if matched => {
                info!("User {} signed in", user.id);
                Ok(user)
            }
            _ => {
                warn!("Signin rejected: credentials incorrect");
                Err(AuthError::InvalidCredentials {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    async fn hash_blocking(&self, password: String) -> AuthErrorResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Hashing task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    async fn verify_blocking(&self, password: String, phc: String) -> AuthErrorResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &phc))
            .await
            .map_err(|e| AuthError::Hashing {
                message: format!("Verification task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
