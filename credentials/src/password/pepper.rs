use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

use super::errors::PasswordError;

/// Secret prepended to every password before hashing.
///
/// Lives outside the database. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Pepper(String);

impl Pepper {
    pub const MIN_LENGTH: usize = 32;

    /// Number of random bytes drawn by [`Pepper::generate`].
    const GENERATED_BYTES: usize = 32;

    /// Wrap a configured pepper.
    ///
    /// # Errors
    /// * `InvalidPepper` - Pepper is shorter than 32 characters
    pub fn new(pepper: String) -> Result<Self, PasswordError> {
        let length = pepper.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordError::InvalidPepper(format!(
                "must be at least {} characters, got {}",
                Self::MIN_LENGTH,
                length
            )));
        }
        Ok(Self(pepper))
    }

    /// Generate a fresh pepper from the OS random source.
    ///
    /// # Returns
    /// 256 bits of entropy, hex encoded (64 characters)
    pub fn generate() -> Self {
        let mut bytes = [0u8; Self::GENERATED_BYTES];
        OsRng.fill_bytes(&mut bytes);

        Self(hex::encode(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Expose the secret, e.g. for writing it into a config file.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Pepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pepper(<redacted>)")
    }
}

/// Generate a pepper suitable for `PASSWORD__PEPPER`.
pub fn generate_pepper() -> String {
    Pepper::generate().0
}
