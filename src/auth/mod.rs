mod error;
pub use error::{CryptError, CryptResult};

mod password;
pub use password::{hash_password, verify_password};
