use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::QuillError;

/// Hash a plaintext password with bcrypt at the default cost.
/// Each call salts independently, so equal inputs produce distinct hashes.
pub fn hash_password(plaintext: &str) -> Result<String, QuillError> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// True iff `plaintext` is the password that produced `password_hash`.
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, QuillError> {
    Ok(verify(plaintext, password_hash)?)
}
