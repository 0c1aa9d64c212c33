use argon2::Params;
use serde::Deserialize;

use super::errors::PasswordError;

/// Argon2id cost parameters.
///
/// Defaults: 64 MiB memory, 3 iterations, 4 lanes, 32-byte digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_cost_kib: u32,

    /// Number of passes over memory
    pub time_cost: u32,

    /// Number of lanes
    pub parallelism: u32,

    /// Digest length in bytes
    pub output_len: usize,
}

impl HashParams {
    pub const DEFAULT_MEMORY_COST_KIB: u32 = 64 * 1024;
    pub const DEFAULT_TIME_COST: u32 = 3;
    pub const DEFAULT_PARALLELISM: u32 = 4;
    pub const DEFAULT_OUTPUT_LEN: usize = 32;

    pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u32, output_len: usize) -> Self {
        Self {
            memory_cost_kib,
            time_cost,
            parallelism,
            output_len,
        }
    }

    /// Convert into Argon2 parameters.
    ///
    /// # Errors
    /// * `InvalidParams` - Values fall outside the ranges Argon2 accepts
    pub fn to_argon2(&self) -> Result<Params, PasswordError> {
        Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MEMORY_COST_KIB,
            Self::DEFAULT_TIME_COST,
            Self::DEFAULT_PARALLELISM,
            Self::DEFAULT_OUTPUT_LEN,
        )
    }
}
