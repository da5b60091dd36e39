//! Configuration for Catalog API

use core_config::{app_info, cors::CorsConfig, env_flag, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Load the sample catalogue and users at startup (SEED_DATA, default true)
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let seed_data = env_flag("SEED_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None),
                ("PORT", None),
                ("CORS_ALLOWED_ORIGIN", None),
                ("SEED_DATA", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "catalog_api");
                assert_eq!(config.server.port, 3000);
                assert_eq!(config.environment, Environment::Development);
                assert!(!config.cors.is_configured());
                assert!(config.seed_data);
            },
        );
    }

    #[test]
    fn test_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("8081")),
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3001")),
                ("SEED_DATA", Some("false")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 8081);
                assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3001"]);
                assert!(!config.seed_data);
            },
        );
    }

    #[test]
    fn test_config_invalid_seed_flag() {
        temp_env::with_var("SEED_DATA", Some("maybe"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("SEED_DATA"));
        });
    }
}
