use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use crate::constants::*;
use crate::error::StoreError;
use crate::models::{PublicUser, User};
use crate::store::ExpenseStore;

/// How credentials are stored and compared. The demo data uses verbatim
/// passwords; keeping the comparison behind this trait lets the at-rest
/// form be swapped for a hash without touching any caller.
pub trait CredentialScheme: Send + Sync {
    /// Converts a submitted password into its at-rest form.
    fn store_form(&self, password: &str) -> Result<String, StoreError>;

    /// Checks a submitted password against a stored credential.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Passwords stored and compared verbatim. Default scheme for the demo data.
pub struct PlainText;

impl CredentialScheme for PlainText {
    fn store_form(&self, password: &str) -> Result<String, StoreError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        password == stored
    }
}

/// Argon2id PHC-string storage for deployments that want real hashing.
pub struct Argon2Hash;

impl CredentialScheme for Argon2Hash {
    fn store_form(&self, password: &str) -> Result<String, StoreError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| StoreError::Persistence(format!("password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl ExpenseStore {
    /// Registers a user with a freshly generated id. Usernames are unique;
    /// a clash is reported as `DuplicateUsername`, not silently accepted.
    pub async fn add_user(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<PublicUser, StoreError> {
        let mut failing = Vec::new();
        if username.trim().is_empty() {
            failing.push(FIELD_USERNAME.to_string());
        }
        if password.is_empty() {
            failing.push(FIELD_PASSWORD.to_string());
        }
        if !failing.is_empty() {
            return Err(StoreError::Validation(failing));
        }
        if self.users.iter().any(|u| u.username == username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            password: self.scheme().store_form(password)?,
        };

        let mut next = self.users.clone();
        next.push(user.clone());
        self.flush_users(&next).await?;
        self.users = next;

        Ok(PublicUser {
            id: user.id,
            username: user.username,
        })
    }

    /// Linear scan for a user whose username and credential both match.
    /// A mismatch is an expected outcome, reported as `None`, never an error.
    pub fn authenticate_user(&self, username: &str, password: &str) -> Option<PublicUser> {
        self.users
            .iter()
            .find(|u| u.username == username && self.scheme().verify(password, &u.password))
            .map(|u| PublicUser {
                id: u.id.clone(),
                username: u.username.clone(),
            })
    }

    /// Seed-mode startup: ensures the demo account exists. Idempotent.
    pub async fn seed_demo_data(&mut self) -> Result<(), StoreError> {
        if self.users.iter().any(|u| u.username == DEMO_USERNAME) {
            return Ok(());
        }
        self.add_user(DEMO_USERNAME, DEMO_PASSWORD).await?;
        log::info!("seeded demo account '{}'", DEMO_USERNAME);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
