use thiserror::Error;

pub type CryptResult<T> = std::result::Result<T, CryptError>;

#[derive(Debug, Error)]
pub enum CryptError {
    #[error("argon2 error: {0}")]
    Argon2Error(#[from] argon2::password_hash::Error),
    /// Stored value is not a PHC string, e.g. a row written before hashing was introduced.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(argon2::password_hash::Error),
}
