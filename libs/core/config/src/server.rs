//! Listen address for the HTTP server.
//!
//! `HOST` and `PORT` are parsed once at startup so that a typo in either
//! fails before the catalogue is seeded, not at bind time.

use crate::{ConfigError, FromEnv};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.socket_addr(), f)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` must be an IP literal (all interfaces when unset), `PORT` a u16.
    fn from_env() -> Result<Self, ConfigError> {
        let host = parse_var("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_var("PORT", DEFAULT_PORT)?;
        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
                key: key.to_string(),
                details: format!("{raw:?}: {e}"),
            })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_defaults_listen_on_all_interfaces() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.to_string(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        temp_env::with_vars([("HOST", Some(" ")), ("PORT", Some(""))], || {
            assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());
        });
    }

    #[test]
    fn test_ipv6_host() {
        temp_env::with_vars([("HOST", Some("::1")), ("PORT", Some("8080"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, IpAddr::V6(Ipv6Addr::LOCALHOST));
            assert_eq!(config.to_string(), "[::1]:8080");
        });
    }

    #[test]
    fn test_hostname_is_rejected() {
        temp_env::with_vars([("HOST", Some("localhost")), ("PORT", None)], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("HOST"));
        });
    }

    #[test]
    fn test_port_out_of_range() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", Some("99999"))], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }
}
