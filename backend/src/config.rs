use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

/// Server settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the trunk build of the frontend.
    pub static_dir: PathBuf,
    /// Allowed CORS origin.
    pub frontend_url: String,
    pub form_rate_limit_per_minute: u32,
    /// Take the client address from `X-Forwarded-For`. Only safe behind a
    /// proxy that overwrites the header.
    pub trust_forwarded_for: bool,
    /// Accepted submissions kept in memory per form; the oldest are dropped.
    pub max_stored_per_form: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("../frontend/dist"),
            frontend_url: "http://localhost:8080".to_string(),
            form_rate_limit_per_minute: 5,
            trust_forwarded_for: false,
            max_stored_per_form: 1000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("BIND_ADDR is not a socket address: {}", value))?,
            Err(_) => defaults.bind_addr,
        };
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let frontend_url = std::env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url);
        let form_rate_limit_per_minute = match std::env::var("FORM_RATE_LIMIT_PER_MINUTE") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("FORM_RATE_LIMIT_PER_MINUTE is not a number: {}", value))?,
            Err(_) => defaults.form_rate_limit_per_minute,
        };

        let trust_forwarded_for = match std::env::var("TRUST_FORWARDED_FOR") {
            Ok(value) => parse_flag(&value)
                .with_context(|| format!("TRUST_FORWARDED_FOR is not a boolean: {}", value))?,
            Err(_) => defaults.trust_forwarded_for,
        };
        let max_stored_per_form = match std::env::var("MAX_STORED_PER_FORM") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("MAX_STORED_PER_FORM is not a number: {}", value))?,
            Err(_) => defaults.max_stored_per_form,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            frontend_url,
            form_rate_limit_per_minute,
            trust_forwarded_for,
            max_stored_per_form,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_for_is_untrusted_by_default() {
        assert!(!ServerConfig::default().trust_forwarded_for);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" Yes ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
