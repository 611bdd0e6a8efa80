//! Database URL resolution.
//!
//! The store connection string comes from an explicit override, the
//! `DATABASE_URL` environment variable, or a fixed local development
//! default, in that order.

use std::env;

/// Environment variable holding the store connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Local development fallback: a `SQLite` file in the working directory,
/// created on first use. Carries no credentials.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://receiptkins.db?mode=rwc";

/// How the database URL was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseUrlSource {
    /// Passed explicitly (e.g., CLI flag).
    Explicit,
    /// Read from `DATABASE_URL` / `.env`.
    EnvVar,
    /// Fallback default.
    Default,
}

/// Resolution result for the database URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrlResolution {
    pub url: String,
    pub source: DatabaseUrlSource,
}

impl DatabaseUrlResolution {
    /// The URL with any `user:password@` section masked, for logging.
    pub fn redacted(&self) -> String {
        redact_credentials(&self.url)
    }
}

/// Resolve the database URL from an explicit override, env var, or default.
///
/// Blank values are treated as absent.
pub fn resolve_database_url(explicit: Option<&str>) -> DatabaseUrlResolution {
    resolve_with(explicit, env::var(DATABASE_URL_ENV).ok().as_deref())
}

fn resolve_with(explicit: Option<&str>, env_value: Option<&str>) -> DatabaseUrlResolution {
    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    if let Some(url) = non_blank(explicit) {
        return DatabaseUrlResolution {
            url: url.to_string(),
            source: DatabaseUrlSource::Explicit,
        };
    }

    if let Some(url) = non_blank(env_value) {
        return DatabaseUrlResolution {
            url: url.to_string(),
            source: DatabaseUrlSource::EnvVar,
        };
    }

    DatabaseUrlResolution {
        url: DEFAULT_DATABASE_URL.to_string(),
        source: DatabaseUrlSource::Default,
    }
}

fn redact_credentials(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let authority_end = rest.find('/').unwrap_or(rest.len());

    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***{}", &url[..authority_start], &rest[at..]),
        None => url.to_string(),
    }
}
