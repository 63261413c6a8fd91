//! Server-side import classification.
//!
//! Tells the dev server which imports go into the server bundle and which are
//! left as runtime `import`s, based on `[vite.ssr]`.
//!
//! ```text
//! ./icon.svg           -> bundled   (relative)
//! node:fs              -> external  (built-in)
//! svgo                 -> external  (listed in vite.ssr.external)
//! svgo/lib/svgo.js     -> external  (deep import of a listed package)
//! @astrojs/markdown    -> bundled   (not listed)
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::{SiteConfig, SsrConfig, section::vite::package_name};

/// Where an import ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Inlined into the server bundle.
    Bundled,
    /// Resolved by the runtime when the server module loads.
    External,
}

/// Classifies import specifiers against the externalized module set.
#[derive(Debug, Clone, Default)]
pub struct ImportClassifier {
    external: FxHashSet<String>,
    no_external: FxHashSet<String>,
}

impl ImportClassifier {
    pub fn new(ssr: &SsrConfig) -> Self {
        Self {
            external: ssr.external.iter().cloned().collect(),
            no_external: ssr.no_external.iter().cloned().collect(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.vite.ssr)
    }

    /// Classify one import specifier.
    pub fn classify(&self, specifier: &str) -> ImportKind {
        let specifier = specifier.trim();

        if specifier.is_empty() || is_path_like(specifier) {
            return ImportKind::Bundled;
        }
        if specifier.starts_with("node:") {
            return ImportKind::External;
        }

        let package = package_name(specifier);
        if self.no_external.contains(package) {
            ImportKind::Bundled
        } else if self.external.contains(package) {
            ImportKind::External
        } else {
            ImportKind::Bundled
        }
    }

    /// Externalized package names in sorted order.
    pub fn externals(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .external
            .iter()
            .filter(|name| !self.no_external.contains(*name))
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }
}

/// Relative, absolute, or virtual-module specifiers are never packages.
fn is_path_like(specifier: &str) -> bool {
    specifier.starts_with(['.', '/', '\0'])
        || specifier.starts_with("virtual:")
        || specifier.contains(":\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn svgo() -> ImportClassifier {
        let config = test_parse_config("[vite.ssr]\nexternal = [\"svgo\"]");
        ImportClassifier::from_config(&config)
    }

    #[test]
    fn test_listed_package_never_bundled() {
        let classifier = svgo();
        for specifier in ["svgo", "svgo/lib/svgo.js", "svgo/browser", " svgo "] {
            assert_eq!(
                classifier.classify(specifier),
                ImportKind::External,
                "{specifier}"
            );
        }
    }

    #[test]
    fn test_similar_names_are_bundled() {
        let classifier = svgo();
        for specifier in ["svgo-loader", "svg", "@svgo/core", "./svgo", "/node_modules/svgo"] {
            assert_eq!(
                classifier.classify(specifier),
                ImportKind::Bundled,
                "{specifier}"
            );
        }
    }

    #[test]
    fn test_builtins_are_external() {
        let classifier = ImportClassifier::default();
        assert_eq!(classifier.classify("node:fs"), ImportKind::External);
        assert_eq!(classifier.classify("fs-extra"), ImportKind::Bundled);
    }

    #[test]
    fn test_no_external_wins() {
        let config = test_parse_config(
            "[vite.ssr]\nexternal = [\"svgo\", \"@scope/pkg\"]\nno_external = [\"svgo\"]",
        );
        let classifier = ImportClassifier::from_config(&config);
        assert_eq!(classifier.classify("svgo"), ImportKind::Bundled);
        assert_eq!(classifier.classify("@scope/pkg/sub"), ImportKind::External);
        assert_eq!(classifier.externals(), vec!["@scope/pkg"]);
    }

    #[test]
    fn test_path_like_specifiers() {
        assert!(is_path_like("./a"));
        assert!(is_path_like("../a"));
        assert!(is_path_like("/abs"));
        assert!(is_path_like("virtual:astro-islands"));
        assert!(is_path_like("C:\\project\\a.js"));
        assert!(!is_path_like("svgo"));
    }
}
