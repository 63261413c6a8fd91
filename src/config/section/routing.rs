//! `trailing_slash` setting.
//!
//! ```toml
//! trailing_slash = "ignore"   # always | never | ignore
//! ```

use crate::config::{Choice, FieldPath};
use serde::Serialize;

/// Rule for whether a route URL must, must not, or may end with `/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Only `/about/` matches.
    Always,
    /// Only `/about` matches.
    Never,
    /// `/about` and `/about/` both match.
    #[default]
    Ignore,
}

impl TrailingSlash {
    pub const FIELD: FieldPath = FieldPath::new("trailing_slash");

    /// Whether a request path with (or without) a trailing slash is accepted.
    ///
    /// The root path is accepted under every policy.
    pub fn accepts(self, path: &str) -> bool {
        if path == "/" || path.is_empty() {
            return true;
        }
        match self {
            Self::Always => path.ends_with('/'),
            Self::Never => !path.ends_with('/'),
            Self::Ignore => true,
        }
    }
}

impl Choice for TrailingSlash {
    const VARIANTS: &'static [&'static str] = &["always", "never", "ignore"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Ignore => "ignore",
        }
    }
}
