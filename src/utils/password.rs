//! Password hashing utilities.
//!
//! Wraps bcrypt with the cost factor fixed for the whole application, so
//! every creation path (registration, admin user creation, CLI) hashes the
//! same way. bcrypt embeds a per-user random salt in the hash itself.

use crate::error::AppError;

/// Fixed bcrypt work factor.
const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Hashes a raw password with bcrypt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if bcrypt fails (effectively never for
/// valid UTF-8 input).
pub fn hash_password(raw: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(raw, BCRYPT_COST)?)
}

/// Verifies a raw password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; errors only on a malformed hash.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored hash cannot be parsed.
pub fn verify_password(raw: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(raw, hash)?)
}
