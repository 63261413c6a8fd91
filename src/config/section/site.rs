//! `site` setting: canonical site URL.
//!
//! ```toml
//! site = "https://example.com/docs"
//! ```
//!
//! The path component becomes the base prefix for every route, so a site
//! deployed under `/docs` emits `dist/docs/...` and links to `/docs/...`.

use crate::config::util::extract_url_path;
use crate::config::{ConfigError, FieldPath};
use percent_encoding::percent_decode_str;
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Validated absolute site URL.
///
/// Keeps the string exactly as configured next to the parsed form, so the
/// value handed to the pipeline is byte-for-byte what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    raw: String,
    parsed: Url,
}

impl SiteUrl {
    pub const FIELD: FieldPath = FieldPath::new("site");

    /// Parse and validate a site URL for `field`.
    ///
    /// # Checks
    /// - must parse as an absolute URL
    /// - scheme must be http or https
    /// - must have a host
    pub fn parse(field: FieldPath, raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            field,
            value: raw.to_string(),
            reason,
        };

        let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("URL must have a host".into()));
        }

        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The URL exactly as configured.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme, host and port without any path (e.g. `https://example.com`).
    pub fn origin(&self) -> String {
        self.parsed.origin().ascii_serialization()
    }

    /// Decoded path prefix without surrounding slashes.
    ///
    /// `/docs/` -> `docs`, `/d%C3%B6cs/` -> `döcs`. Routes are kept decoded,
    /// so the prefix is too.
    pub fn base(&self) -> String {
        let path = extract_url_path(self.parsed.as_str()).unwrap_or_default();
        match percent_decode_str(&path).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => path,
        }
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for SiteUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
