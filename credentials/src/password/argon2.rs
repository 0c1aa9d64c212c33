use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Version;

use super::errors::PasswordError;
use super::params::HashParams;
use super::pepper::Pepper;

/// Peppered password hashing.
///
/// Hashes `pepper || password` with Argon2id (v0x13) and a random salt per call.
/// Output is a PHC string carrying algorithm, version, parameters, salt and digest,
/// so records hashed under older parameters keep verifying.
pub struct PasswordHasher {
    pepper: Pepper,
    params: HashParams,
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher.
    ///
    /// # Arguments
    /// * `pepper` - Process-wide secret applied to every password
    /// * `params` - Target cost parameters for new hashes
    ///
    /// # Errors
    /// * `InvalidParams` - Parameters rejected by Argon2
    pub fn new(pepper: Pepper, params: HashParams) -> Result<Self, PasswordError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);

        Ok(Self {
            pepper,
            params,
            argon2,
        })
    }

    /// Target parameters applied to new hashes.
    pub fn params(&self) -> &HashParams {
        &self.params
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(&self.peppered(password), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Re-derives with the parameters embedded in `hash`; digests are compared in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `MalformedHash` - Hash is not a usable Argon2 PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match self
            .argon2
            .verify_password(&self.peppered(password), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }

    /// Check whether a stored hash was produced with other than the target settings.
    ///
    /// Unparseable hashes also report true so callers replace them.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "Stored hash does not parse, flagging for rehash");
                return true;
            }
        };

        if parsed_hash.algorithm.as_str() != Algorithm::Argon2id.as_str() {
            return true;
        }

        if parsed_hash.version != Some(Version::V0x13 as u32) {
            return true;
        }

        let params = &parsed_hash.params;
        params.get_decimal("m") != Some(self.params.memory_cost_kib)
            || params.get_decimal("t") != Some(self.params.time_cost)
            || params.get_decimal("p") != Some(self.params.parallelism)
            || parsed_hash.hash.as_ref().map(|output| output.len()) != Some(self.params.output_len)
    }

    fn peppered(&self, password: &str) -> Vec<u8> {
        let pepper = self.pepper.as_bytes();
        let mut input = Vec::with_capacity(pepper.len() + password.len());
        input.extend_from_slice(pepper);
        input.extend_from_slice(password.as_bytes());
        input
    }
}
