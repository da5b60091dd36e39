use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, cors::CorsConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Builds the CORS layer for the configured origins.
///
/// Listed origins get an explicit allow-list with the methods the API
/// serves. With no origins configured, development falls back to a
/// permissive layer and production refuses to start.
///
/// # Errors
/// - an origin is not a valid header value
/// - no origins are configured in production
pub fn cors_layer(config: &CorsConfig, environment: &Environment) -> io::Result<CorsLayer> {
    if !config.is_configured() {
        if environment.is_production() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://example.com",
            ));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(
        "CORS configured with allowed origins: {}",
        config.allowed_origins.join(",")
    );

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_is_permissive_in_development() {
        let layer = cors_layer(&CorsConfig::default(), &Environment::Development);
        assert!(layer.is_ok());
    }

    #[test]
    fn test_unconfigured_fails_in_production() {
        let err = cors_layer(&CorsConfig::default(), &Environment::Production).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn test_listed_origins_are_accepted() {
        let config = CorsConfig::new(vec![
            "http://localhost:3001".to_string(),
            "https://shop.example.com".to_string(),
        ]);
        assert!(cors_layer(&config, &Environment::Production).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::new(vec!["http://bad\norigin".to_string()]);
        assert!(cors_layer(&config, &Environment::Development).is_err());
    }
}
