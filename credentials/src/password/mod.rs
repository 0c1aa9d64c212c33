pub mod argon2;
pub mod errors;
pub mod params;
pub mod pepper;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
pub use params::HashParams;
pub use pepper::generate_pepper;
pub use pepper::Pepper;
