//! Service configuration.

use serde::Serialize;

/// Default address to listen on.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Default `RocksDB` data directory.
const DEFAULT_DATA_DIR: &str = "./data/cost-manager";

/// Default maximum request body size (64 KiB).
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Default request timeout.
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// A developer listed by `GET /api/about`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl TeamMember {
    /// Create a team member.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Parse `"First Last"`. Everything after the first word is the last name.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let (first, last) = raw.split_once(char::is_whitespace).unwrap_or((raw, ""));
        Some(Self::new(first, last.trim()))
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:3000").
    pub listen_addr: String,

    /// Path to `RocksDB` data directory (default: "./data/cost-manager").
    pub data_dir: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Developers returned by the about endpoint.
    pub team: Vec<TeamMember>,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map_or_else(|_| vec!["*".into()], |raw| split_list(&raw)),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            team: std::env::var("TEAM_MEMBERS")
                .ok()
                .map(|raw| parse_team(&raw))
                .filter(|team| !team.is_empty())
                .unwrap_or_else(default_team),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.into(),
            data_dir: DEFAULT_DATA_DIR.into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            team: default_team(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_team(raw: &str) -> Vec<TeamMember> {
    raw.split(',').filter_map(TeamMember::parse).collect()
}

fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember::new("Tamara", "Mesengiser"),
        TeamMember::new("Niv", "Neuvirth"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_member_parsing() {
        assert_eq!(
            TeamMember::parse("  Ada  Lovelace "),
            Some(TeamMember::new("Ada", "Lovelace"))
        );
        assert_eq!(
            TeamMember::parse("Cher"),
            Some(TeamMember::new("Cher", ""))
        );
        assert_eq!(
            TeamMember::parse("Mary Ann Evans"),
            Some(TeamMember::new("Mary", "Ann Evans"))
        );
        assert_eq!(TeamMember::parse("   "), None);
    }

    #[test]
    fn team_list_skips_blanks() {
        let team = parse_team("Ada Lovelace, ,Grace Hopper,");
        assert_eq!(
            team,
            vec![
                TeamMember::new("Ada", "Lovelace"),
                TeamMember::new("Grace", "Hopper")
            ]
        );
    }

    #[test]
    fn origin_list_is_trimmed() {
        assert_eq!(
            split_list("http://a.test, http://b.test ,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert_eq!(config.team.len(), 2);
    }
}
