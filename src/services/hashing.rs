use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use sha2::{Digest, Sha256};

/// Length of the hex SHA-256 digests written by the previous backend.
const LEGACY_DIGEST_LEN: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("Invalid hashing parameters: {0}")]
    Params(argon2::Error),

    #[error("Failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),
}

// m=8MB, t=2 iterations, p=1 parallelism
fn get_argon2() -> Result<Argon2<'static>, HashingError> {
    let params = Params::new(8192, 2, 1, None).map_err(HashingError::Params)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

pub fn hash_password(password: &str) -> Result<String, HashingError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = get_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(HashingError::Hash)?;
    Ok(hash.to_string())
}

/// Checks `password` against a stored digest. Accepts Argon2 PHC strings and
/// the unsalted SHA-256 hex digests of accounts created before the switch.
/// A malformed digest never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    if is_legacy_digest(stored) {
        let computed = hex::encode(Sha256::digest(password.as_bytes()));
        return constant_time_eq(computed.as_bytes(), stored.to_ascii_lowercase().as_bytes());
    }

    let Ok(parsed_hash) = PasswordHash::new(stored) else {
        return false;
    };

    match get_argon2() {
        Ok(argon2) => argon2.verify_password(password.as_bytes(), &parsed_hash).is_ok(),
        Err(_) => false,
    }
}

/// True when the stored digest should be replaced by a fresh Argon2 hash on
/// the next successful login.
pub fn needs_rehash(stored: &str) -> bool {
    is_legacy_digest(stored)
}

fn is_legacy_digest(stored: &str) -> bool {
    stored.len() == LEGACY_DIGEST_LEN && stored.bytes().all(|b| b.is_ascii_hexdigit())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
