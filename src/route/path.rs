//! Route path type.
//!
//! - Internal representation: always decoded, leading `/`, no trailing `/`
//!   (the root is `/`)
//! - Browser boundary: decode on input, encode on output
//!
//! Whether a request carried a trailing slash is kept separately in
//! [`RequestPath`], since that is what the trailing-slash policy looks at.

use std::borrow::Borrow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Serialize, Serializer};

/// Characters escaped inside a path segment (non-ASCII is always escaped).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Decoded route path, e.g. `/blog/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Root route.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Create from a decoded route (`about`, `/about/`, `/faq/why?`).
    ///
    /// `?` and `#` are ordinary characters here; query and fragment only
    /// exist in the browser form, see [`RequestPath::from_browser`].
    pub fn new(decoded: &str) -> Self {
        Self::from_segments(decoded.trim())
    }

    /// Empty and `.` segments are dropped, `..` removes the previous one.
    fn from_segments(path: &str) -> Self {
        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        if segments.is_empty() {
            Self::root()
        } else {
            Self(Arc::from(format!("/{}", segments.join("/"))))
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Path without the leading slash (`""` for the root).
    #[inline]
    pub fn relative(&self) -> &str {
        &self.0[1..]
    }

    /// Path segments, empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.relative().split('/').filter(|s| !s.is_empty())
    }

    /// Strip a base prefix (`docs` strips `/docs/...`).
    ///
    /// Returns `None` when the route is outside the base.
    pub fn strip_base(&self, base: &str) -> Option<Self> {
        let base = base.trim_matches('/');
        if base.is_empty() {
            return Some(self.clone());
        }
        let rest = self.relative().strip_prefix(base)?;
        match rest {
            "" => Some(Self::root()),
            _ => rest.starts_with('/').then(|| Self::from_segments(rest)),
        }
    }

    /// Render with or without a trailing slash (root is always `/`).
    pub fn to_url_path(&self, trailing_slash: bool) -> String {
        if self.is_root() {
            return "/".to_string();
        }
        if trailing_slash {
            format!("{}/", self.0)
        } else {
            self.0.to_string()
        }
    }

    /// Encode for browser (percent-encode non-ASCII and reserved characters).
    pub fn to_encoded(&self) -> String {
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Encoded URL path, with or without a trailing slash (root is always `/`).
    pub fn to_encoded_url_path(&self, trailing_slash: bool) -> String {
        let mut encoded = self.to_encoded();
        if trailing_slash && !self.is_root() {
            encoded.push('/');
        }
        encoded
    }

    /// Prefix this route with a decoded base (`docs` + `/a` -> `/docs/a`).
    pub fn with_base(&self, base: &str) -> Self {
        let base = base.trim_matches('/');
        if base.is_empty() {
            return self.clone();
        }
        Self::from_segments(&format!("/{base}{}", self.0))
    }
}

/// A path as requested by a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    pub route: RoutePath,
    /// Whether the request ended with `/` (always true for the root).
    pub trailing_slash: bool,
}

impl RequestPath {
    /// Parse a browser path (percent-encoded, may carry query and fragment).
    pub fn from_browser(encoded: &str) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        let route = RoutePath::from_segments(&decoded);
        let trailing_slash = route.is_root() || decoded.ends_with('/');
        Self {
            route,
            trailing_slash,
        }
    }

    /// The request as it would appear in a URL.
    pub fn to_url_path(&self) -> String {
        self.route.to_url_path(self.trailing_slash)
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
