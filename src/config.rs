use std::env;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_JSON_PAYLOAD_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

/// HTTP server settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub json_limit: usize,
    /// Error reporting is off unless this is set.
    pub sentry_dsn: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_PAYLOAD_LIMIT,
            sentry_dsn: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let json_limit = lookup("JSON_PAYLOAD_LIMIT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_JSON_PAYLOAD_LIMIT);

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        ServerConfig {
            port,
            json_limit,
            sentry_dsn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("JSON_PAYLOAD_LIMIT", "1024"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.json_limit, 1024);
        assert_eq!(config.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("JSON_PAYLOAD_LIMIT", "-5"),
            ("SENTRY_DSN", "  "),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
