//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! format = "directory"    # file | directory
//! output = "dist"         # Output directory (relative to project root)
//! assets = "_assets"      # Directory name for emitted assets
//! ```

use crate::config::{Choice, ConfigDiagnostics, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a route is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFormat {
    /// `/about` -> `about.html`
    File,
    /// `/about` -> `about/index.html`
    #[default]
    Directory,
}

impl Choice for BuildFormat {
    const VARIANTS: &'static [&'static str] = &["file", "directory"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "file" => Some(Self::File),
            "directory" => Some(Self::Directory),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// `[build]` as written in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub format: Option<String>,
    pub output: PathBuf,
    pub assets: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            format: None,
            output: "dist".into(),
            assets: "_assets".into(),
        }
    }
}

/// Resolved `[build]` settings.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSectionConfig {
    pub format: BuildFormat,

    /// Build output directory (absolute after loading).
    pub output: PathBuf,

    /// Directory name for emitted assets, inside the output directory.
    pub assets: String,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            format: BuildFormat::default(),
            output: "dist".into(),
            assets: "_assets".into(),
        }
    }
}

impl BuildSectionConfig {
    pub const FORMAT: FieldPath = FieldPath::new("build.format");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const ASSETS: FieldPath = FieldPath::new("build.assets");

    pub fn resolve(section: BuildSection) -> Result<Self, ConfigError> {
        Ok(Self {
            format: BuildFormat::resolve(Self::FORMAT, section.format.as_deref())?,
            output: section.output,
            assets: section.assets,
        })
    }

    /// Validate build configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error(Self::OUTPUT, "output directory must not be empty");
        }
        if self.assets.is_empty() || self.assets.contains(['/', '\\']) {
            diag.error_with_hint(
                Self::ASSETS,
                format!("'{}' is not a plain directory name", self.assets),
                "use a single name such as \"_assets\"",
            );
        }
    }
}
