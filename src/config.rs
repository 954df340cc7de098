use std::{env, net::SocketAddr, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub classifier_url: String,
    pub classifier_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PORT").ok(),
            env::var("CLASSIFIER_URL").ok(),
            env::var("CLASSIFIER_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_values(
        port: Option<String>,
        classifier_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        let port = match port {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("ignoring invalid PORT '{value}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let classifier_url = classifier_url
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_string());

        let classifier_timeout = timeout_secs.and_then(|value| match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                warn!("ignoring invalid CLASSIFIER_TIMEOUT_SECS '{value}'");
                None
            }
        });

        Self {
            port,
            classifier_url,
            classifier_timeout,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.classifier_url, DEFAULT_CLASSIFIER_URL);
        assert_eq!(config.classifier_timeout, None);
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_values(
            Some("9090".into()),
            Some("http://classifier:5000/".into()),
            Some("15".into()),
        );
        assert_eq!(config.port, 9090);
        assert_eq!(config.classifier_url, "http://classifier:5000");
        assert_eq!(config.classifier_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.bind_addr().port(), 9090);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_values(Some("http".into()), Some("  ".into()), Some("0".into()));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.classifier_url, DEFAULT_CLASSIFIER_URL);
        assert_eq!(config.classifier_timeout, None);
    }
}
