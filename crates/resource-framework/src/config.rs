//! # API Configuration
//!
//! The base URL is resolved once, when a transport is built, and never changes
//! afterwards.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `MEWAYZ_API_URL` | `/api` | Base URL of the REST collections |
//! | `MEWAYZ_ORIGIN` | `http://localhost:3000` | Origin a relative base URL resolves against |

use crate::error::RequestError;
use url::Url;

pub const API_URL_VAR: &str = "MEWAYZ_API_URL";
pub const ORIGIN_VAR: &str = "MEWAYZ_ORIGIN";
pub const DEFAULT_API_URL: &str = "/api";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Where the REST collections live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute URL or a path relative to `origin`.
    pub base_url: String,
    pub origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: read(API_URL_VAR).unwrap_or(defaults.base_url),
            origin: read(ORIGIN_VAR).unwrap_or(defaults.origin),
        }
    }

    /// Returns true when the base URL was explicitly pointed somewhere absolute.
    pub fn is_absolute(&self) -> bool {
        Url::parse(&self.base_url).is_ok()
    }

    /// Resolves `base_url` to an absolute URL, joining it onto `origin` if relative.
    pub fn resolve_base_url(&self) -> Result<Url, RequestError> {
        match Url::parse(&self.base_url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = Url::parse(&self.origin).map_err(|e| {
                    RequestError::InvalidRequest(format!("invalid origin {}: {e}", self.origin))
                })?;
                origin.join(&self.base_url).map_err(|e| {
                    RequestError::InvalidRequest(format!("invalid base URL {}: {e}", self.base_url))
                })
            }
            Err(e) => Err(RequestError::InvalidRequest(format!(
                "invalid base URL {}: {e}",
                self.base_url
            ))),
        }
    }
}
