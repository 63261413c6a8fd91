//! Request matching under the trailing-slash policy.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::{SiteConfig, SiteUrl, TrailingSlash};

use super::{OutputLayout, RequestPath, RoutePath};
use std::path::PathBuf;

/// Outcome of matching a request against the known routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteMatch {
    /// Request served by `route`, written to `file`.
    Found { route: RoutePath, file: PathBuf },
    /// Route exists but the slash form is rejected by the policy.
    SlashMismatch {
        route: RoutePath,
        /// Accepted form of the request path.
        location: String,
    },
    NotFound,
}

/// Set of generated routes plus the rules for reaching them.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: FxHashSet<RoutePath>,
    policy: TrailingSlash,
    base: String,
    layout: OutputLayout,
}

impl RouteTable {
    pub fn new<I, S>(config: &SiteConfig, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            routes: routes
                .into_iter()
                .map(|r| RoutePath::new(r.as_ref()))
                .collect(),
            policy: config.trailing_slash,
            base: config.base.clone(),
            layout: OutputLayout::new(config),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Match a browser request path (percent-encoded, base included).
    pub fn resolve(&self, request: &str) -> RouteMatch {
        let request = RequestPath::from_browser(request);
        let Some(route) = request.route.strip_base(&self.base) else {
            return RouteMatch::NotFound;
        };
        if !self.routes.contains(&route) {
            return RouteMatch::NotFound;
        }

        let url_path = request.to_url_path();
        if self.policy.accepts(&url_path) {
            let file = self.layout.file_for(&route);
            RouteMatch::Found { route, file }
        } else {
            let location = request
                .route
                .to_encoded_url_path(matches!(self.policy, TrailingSlash::Always));
            RouteMatch::SlashMismatch { route, location }
        }
    }
}

/// Canonical URL of `route` for `site`.
///
/// The trailing slash follows the policy; under `ignore` it follows the
/// build format (`directory` ends with `/`, `file` does not).
pub fn canonical_url(config: &SiteConfig, site: &SiteUrl, route: &RoutePath) -> String {
    let trailing = match config.trailing_slash {
        TrailingSlash::Always => true,
        TrailingSlash::Never => false,
        TrailingSlash::Ignore => config.build.format.prefers_trailing_slash(),
    };

    let path = route.with_base(&site.base()).to_encoded_url_path(trailing);
    format!("{}{}", site.origin(), path)
}
