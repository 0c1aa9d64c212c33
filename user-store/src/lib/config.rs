use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use credentials::HashParams;
use credentials::PasswordError;
use credentials::PasswordHasher;
use credentials::Pepper;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn default_max_connections() -> u32 {
        5
    }
}

#[derive(Deserialize, Clone)]
pub struct PasswordConfig {
    pub pepper: String,
    #[serde(default)]
    pub hashing: HashParams,
}

impl std::fmt::Debug for PasswordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordConfig")
            .field("pepper", &"<redacted>")
            .field("hashing", &self.hashing)
            .finish()
    }
}

impl PasswordConfig {
    /// Build the process-wide password hasher.
    ///
    /// # Errors
    /// * `InvalidPepper` - Pepper missing or shorter than 32 characters
    /// * `InvalidParams` - Hashing parameters rejected by Argon2
    pub fn build_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        let pepper = Pepper::new(self.pepper.clone())?;
        PasswordHasher::new(pepper, self.hashing)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, PASSWORD__PEPPER, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: PASSWORD__PEPPER=... overrides password.pepper
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(source: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_hashing_defaults_when_omitted() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/users"

            [password]
            pepper = "0123456789abcdef0123456789abcdef"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.password.hashing, HashParams::default());
    }

    #[test]
    fn test_partial_hashing_override() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/users"
            max_connections = 10

            [password]
            pepper = "0123456789abcdef0123456789abcdef"

            [password.hashing]
            time_cost = 4
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.password.hashing.time_cost, 4);
        assert_eq!(
            config.password.hashing.memory_cost_kib,
            HashParams::DEFAULT_MEMORY_COST_KIB
        );
    }

    #[test]
    fn test_missing_pepper_is_an_error() {
        let result = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/users"

            [password]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_short_pepper_rejected_when_building_hasher() {
        let config = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/users"

            [password]
            pepper = "short"
            "#,
        )
        .expect("Failed to load config");

        assert!(matches!(
            config.password.build_hasher(),
            Err(PasswordError::InvalidPepper(_))
        ));
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        env::set_var("PASSWORD__PEPPER", "env_pepper_0123456789abcdef0123456789");
        env::set_var("DATABASE__URL", "postgresql://env/users");
        env::set_var("PASSWORD__HASHING__TIME_COST", "5");

        let result = Config::load();

        env::remove_var("PASSWORD__PEPPER");
        env::remove_var("DATABASE__URL");
        env::remove_var("PASSWORD__HASHING__TIME_COST");

        let config = result.expect("Failed to load config from environment");
        assert_eq!(config.password.pepper, "env_pepper_0123456789abcdef0123456789");
        assert_eq!(config.database.url, "postgresql://env/users");
        assert_eq!(config.password.hashing.time_cost, 5);
        assert!(config.password.build_hasher().is_ok());
    }

    #[test]
    fn test_debug_redacts_pepper() {
        let config = PasswordConfig {
            pepper: "super_secret_pepper_value_0123456789".to_string(),
            hashing: HashParams::default(),
        };
        assert!(!format!("{:?}", config).contains("super_secret"));
    }
}
