//! Credential hashing library
//!
//! Stores passwords as pepper + salt + hash:
//! - Pepper: a process-wide secret kept outside the database
//! - Salt: random per password, embedded in the hash string
//! - Hash: Argon2id over `pepper || password`
//!
//! The pepper is handed to [`PasswordHasher`] at construction; there is no global state.
//!
//! # Examples
//!
//! ## Hashing and verification
//! ```
//! use credentials::HashParams;
//! use credentials::PasswordHasher;
//! use credentials::Pepper;
//!
//! let pepper = Pepper::generate();
//! let hasher = PasswordHasher::new(pepper, HashParams::new(1024, 1, 1, 32)).unwrap();
//!
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Parameter upgrades
//! ```
//! use credentials::HashParams;
//! use credentials::PasswordHasher;
//! use credentials::Pepper;
//!
//! let pepper = Pepper::new("0123456789abcdef0123456789abcdef".to_string()).unwrap();
//! let legacy = PasswordHasher::new(pepper.clone(), HashParams::new(1024, 1, 1, 32)).unwrap();
//! let current = PasswordHasher::new(pepper, HashParams::new(2048, 2, 1, 32)).unwrap();
//!
//! let old_hash = legacy.hash("password123").unwrap();
//!
//! // Old records still verify, but are flagged for an upgrade
//! assert!(current.verify("password123", &old_hash).unwrap());
//! assert!(current.needs_rehash(&old_hash));
//! ```

pub mod password;

pub use password::generate_pepper;
pub use password::HashParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::Pepper;
