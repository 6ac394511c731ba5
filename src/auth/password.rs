//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Hash checked when the account does not exist, so a miss costs one Argon2
/// verification just like a wrong password.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("intake-api-unknown-account").ok());

#[cfg(test)]
thread_local! {
    static VERIFICATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of Argon2 verifications run on the current thread.
#[cfg(test)]
pub(crate) fn verification_count() -> usize {
    VERIFICATIONS.with(|count| count.get())
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("Stored password hash is malformed")]
    MalformedHash,
}

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::MalformedHash)?;

    #[cfg(test)]
    VERIFICATIONS.with(|count| count.set(count.get() + 1));

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Verify `password` against a fixed hash no account owns. Always false.
pub fn verify_unknown_account(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}
