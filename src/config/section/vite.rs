//! `[vite]` section: dev-server bundler settings.
//!
//! Only the server-side bundling exclusions are owned here; the bundler
//! itself runs outside this tool.
//!
//! # Example
//!
//! ```toml
//! [vite.ssr]
//! external = ["svgo"]         # Resolved at runtime, never bundled
//! no_external = []            # Forced into the bundle
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest package name the registry accepts.
const MAX_PACKAGE_NAME: usize = 214;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViteConfig {
    pub ssr: SsrConfig,
}

/// Server-side bundling exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsrConfig {
    /// Packages excluded from the server bundle.
    pub external: Vec<String>,

    /// Packages bundled even when they match `external`.
    #[serde(alias = "noExternal")]
    pub no_external: Vec<String>,
}

impl SsrConfig {
    pub const EXTERNAL: FieldPath = FieldPath::new("vite.ssr.external");
    pub const NO_EXTERNAL: FieldPath = FieldPath::new("vite.ssr.no_external");

    /// Validate package names and their availability under `root`.
    ///
    /// # Checks
    /// - every entry is a valid package name (error)
    /// - duplicates and `external`/`no_external` overlaps (warning)
    /// - `external` entries missing from `node_modules` (hint)
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        Self::validate_names(Self::EXTERNAL, &self.external, diag);
        Self::validate_names(Self::NO_EXTERNAL, &self.no_external, diag);

        let forced: FxHashSet<&str> = self.no_external.iter().map(String::as_str).collect();
        for name in &self.external {
            if forced.contains(name.as_str()) {
                diag.warn(
                    Self::EXTERNAL,
                    format!("'{name}' is also listed in no_external and will be bundled"),
                );
            }
        }

        if root.as_os_str().is_empty() || self.external.is_empty() {
            return;
        }
        let modules = root.join("node_modules");
        if !modules.is_dir() {
            diag.hint(
                Self::EXTERNAL,
                "node_modules not found; external packages must be installed before the dev server starts",
            );
            return;
        }
        for name in &self.external {
            if is_valid_package_name(name) && !modules.join(name).exists() {
                diag.hint(
                    Self::EXTERNAL,
                    format!("package '{name}' is not installed in node_modules"),
                );
            }
        }
    }

    fn validate_names(field: FieldPath, names: &[String], diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for name in names {
            if !is_valid_package_name(name) {
                diag.error_with_hint(
                    field,
                    format!("'{name}' is not a valid package name"),
                    "use the name as published, e.g. \"svgo\" or \"@scope/pkg\"",
                );
            } else if !seen.insert(name.as_str()) {
                diag.warn(field, format!("'{name}' is listed more than once"));
            }
        }
    }
}

/// Check a package name as it appears in `external`.
///
/// Accepts `name` and `@scope/name`; subpaths are not package names.
pub fn is_valid_package_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_PACKAGE_NAME {
        return false;
    }

    let valid_part = |part: &str| {
        !part.is_empty()
            && !part.starts_with(['.', '_'])
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~'))
    };

    match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, pkg)) => valid_part(scope) && valid_part(pkg),
            None => false,
        },
        None => valid_part(name),
    }
}

/// Package name of a bare import specifier.
///
/// `svgo/lib/svgo.js` -> `svgo`, `@scope/pkg/sub` -> `@scope/pkg`.
pub fn package_name(specifier: &str) -> &str {
    let mut end = 0;
    let take = if specifier.starts_with('@') { 2 } else { 1 };
    for (i, part) in specifier.split('/').take(take).enumerate() {
        end += part.len() + usize::from(i > 0);
    }
    &specifier[..end]
}
