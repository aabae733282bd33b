//! bcrypt password hashes for the admin account.

use crate::error::Result;

/// Work factor used when hashing new passwords.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Checks `password` against a stored hash. Anything that is not a bcrypt hash never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}
