//! Site build configuration for `trellis.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── output     # output, adapter
//! │   ├── routing    # trailing_slash
//! │   ├── serve      # [serve]
//! │   ├── site       # site
//! │   └── vite       # [vite.ssr]
//! ├── types/         # Utility types
//! │   ├── choice     # String-backed enums
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! output = "static"
//! site = "https://www.thelocalplace.com"
//! trailing_slash = "ignore"
//!
//! [build]
//! format = "directory"
//!
//! [vite.ssr]
//! external = ["svgo"]
//! ```
//!
//! # Loading
//!
//! Loading runs in two stages. [`SiteConfig::resolve`] turns the raw file into
//! typed values and fails fast on the first malformed URL or unknown enum
//! value. [`SiteConfig::validate`] then runs semantic checks and reports all
//! of them at once.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_path};

pub use section::{
    BuildFormat, BuildSection, BuildSectionConfig, OutputMode, ServeConfig, SiteUrl, SsrConfig,
    TrailingSlash, ViteConfig,
};
pub use types::{Choice, ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename.
pub const CONFIG_FILE: &str = "trellis.toml";

// ============================================================================
// raw file
// ============================================================================

/// `trellis.toml` as written, before enum and URL resolution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub site: Option<String>,
    #[serde(alias = "trailingSlash")]
    pub trailing_slash: Option<String>,
    pub adapter: Option<String>,
    pub build: BuildSection,
    pub vite: ViteConfig,
    pub serve: ServeConfig,
}

// ============================================================================
// root configuration
// ============================================================================

/// Validated build configuration. Read-only once loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Generation strategy.
    pub output: OutputMode,

    /// Canonical site URL.
    pub site: Option<SiteUrl>,

    /// URL path prefix derived from `site` (no surrounding slashes).
    pub base: String,

    /// Trailing-slash policy for route matching and canonical URLs.
    pub trailing_slash: TrailingSlash,

    /// Server adapter (server and hybrid output only).
    pub adapter: Option<String>,

    /// Build settings
    pub build: BuildSectionConfig,

    /// Dev-server bundler settings
    pub vite: ViteConfig,

    /// Development server settings
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration for the CLI.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cwd, &cli.config).with_context(|| {
            format!(
                "Config file '{}' not found. Run 'trellis init' to create a new project.",
                cli.config.display()
            )
        })?;

        let mut config = Self::from_path(&config_path)?;
        config.apply_cli_options(cli)?;
        config.finalize(&config_path);
        config.validate()?;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Parse and resolve configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Self::resolve(file)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (file, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Self::resolve(file)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(ConfigFile, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let file = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((file, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    /// Convert the raw file into typed values.
    ///
    /// Fields are checked in the order `output`, `site`, `trailing_slash`,
    /// `build.format`; the first bad value is returned.
    pub fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        let output = OutputMode::resolve(OutputMode::FIELD, file.output.as_deref())?;
        let site = file
            .site
            .as_deref()
            .map(|raw| SiteUrl::parse(SiteUrl::FIELD, raw))
            .transpose()?;
        let trailing_slash =
            TrailingSlash::resolve(TrailingSlash::FIELD, file.trailing_slash.as_deref())?;
        let build = BuildSectionConfig::resolve(file.build)?;

        let base = site.as_ref().map(SiteUrl::base).unwrap_or_default();

        Ok(Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            output,
            site,
            base,
            trailing_slash,
            adapter: file.adapter,
            build,
            vite: file.vite,
            serve: file.serve,
        })
    }

    /// Apply global CLI overrides (`--site-url`, `--output`).
    fn apply_cli_options(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(raw) = &cli.site_url {
            self.set_site(SiteUrl::parse(SiteUrl::FIELD, raw)?);
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        Ok(())
    }

    /// Replace the site URL and re-derive the base prefix.
    pub fn set_site(&mut self, site: SiteUrl) {
        self.base = site.base();
        self.site = Some(site);
    }

    /// Set paths relative to the config file location.
    fn finalize(&mut self, config_path: &Path) {
        let root = config_path
            .parent()
            .map(normalize_path)
            .unwrap_or_default();

        self.config_path = normalize_path(config_path);
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.root = root;
    }

    /// Output directory including the base prefix.
    ///
    /// `dist` for `https://example.com`, `dist/docs` for `https://example.com/docs/`.
    pub fn output_dir(&self) -> PathBuf {
        if self.base.is_empty() {
            self.build.output.clone()
        } else {
            self.build.output.join(&self.base)
        }
    }

    /// Site URL, or the dev server address when `site` is not configured.
    pub fn site_or_local(&self) -> Result<SiteUrl, ConfigError> {
        match &self.site {
            Some(site) => Ok(site.clone()),
            None => SiteUrl::parse(SiteUrl::FIELD, &self.serve.local_url()),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the resolved configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.output
            .validate_adapter(self.adapter.as_deref(), &mut diag);
        self.build.validate(&mut diag);
        self.vite.ssr.validate(&self.root, &mut diag);

        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and resolve a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (file, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    SiteConfig::resolve(file).unwrap()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = r#"
output = "static"
site = "https://www.thelocalplace.com"
trailing_slash = "ignore"

[build]
format = "directory"

[vite.ssr]
external = ["svgo"]
"#;

    #[test]
    fn test_reference_config() {
        let config = test_parse_config(REFERENCE);
        assert_eq!(config.output, OutputMode::Static);
        assert_eq!(
            config.site.as_ref().map(SiteUrl::as_str),
            Some("https://www.thelocalplace.com")
        );
        assert_eq!(config.trailing_slash, TrailingSlash::Ignore);
        assert_eq!(config.build.format, BuildFormat::Directory);
        assert_eq!(config.vite.ssr.external, vec!["svgo".to_string()]);
        assert_eq!(config.base, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_site_round_trips_through_loader() {
        for raw in [
            "https://www.thelocalplace.com",
            "https://www.thelocalplace.com/",
            "https://example.github.io/my-project/",
            "https://example.com/a/b/?ref=x",
            "http://localhost:4321",
            "https://example.com/d%C3%B6cs/",
        ] {
            let config = test_parse_config(&format!("site = \"{raw}\""));
            assert_eq!(config.site.as_ref().map(SiteUrl::as_str), Some(raw));

            let config = SiteConfig::from_str(&format!("output = \"static\"\nsite = \"{raw}\""))
                .unwrap();
            assert_eq!(config.site.map(|s| s.to_string()).as_deref(), Some(raw));
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[build\nformat = \"file\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_malformed_site_url() {
        let err = SiteConfig::from_str("site = \"not a url\"").unwrap_err();
        match err {
            ConfigError::InvalidUrl { field, value, .. } => {
                assert_eq!(field, SiteUrl::FIELD);
                assert_eq!(value, "not a url");
            }
            other => panic!("expected InvalidUrl, got {other}"),
        }
    }

    #[test]
    fn test_unknown_enum_values_name_the_field() {
        for (content, field) in [
            ("output = \"dynamic\"", OutputMode::FIELD),
            ("trailing_slash = \"sometimes\"", TrailingSlash::FIELD),
            ("[build]\nformat = \"folder\"", BuildSectionConfig::FORMAT),
        ] {
            let err = SiteConfig::from_str(content).unwrap_err();
            assert!(
                matches!(err, ConfigError::UnknownEnumValue { .. }),
                "{content}: {err}"
            );
            assert_eq!(err.field(), Some(field), "{content}");
        }
    }

    #[test]
    fn test_first_error_wins() {
        let err = SiteConfig::from_str("output = \"nope\"\nsite = \"nope\"").unwrap_err();
        assert_eq!(err.field(), Some(OutputMode::FIELD));
    }

    #[test]
    fn test_static_never_enables_server_rendering() {
        let config = test_parse_config(
            "output = \"static\"\nadapter = \"node\"\n[vite.ssr]\nexternal = [\"svgo\"]",
        );
        assert!(!config.output.server_runtime());
        // adapter is only a warning under static output
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_without_adapter_fails_validation() {
        let config = test_parse_config("output = \"server\"");
        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => {
                assert_eq!(diag.errors()[0].field, OutputMode::ADAPTER);
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "output = \"static\"\n[unknown_section]\nfield = \"value\"";
        let (file, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(file.output.as_deref(), Some("static"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_base_and_output_dir() {
        let mut config = test_parse_config("site = \"https://example.github.io/my-project/\"");
        assert_eq!(config.base, "my-project");

        config.finalize(Path::new("/srv/site/trellis.toml"));
        assert_eq!(config.root, PathBuf::from("/srv/site"));
        assert_eq!(config.build.output, PathBuf::from("/srv/site/dist"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/dist/my-project"));
    }

    #[test]
    fn test_set_site_rederives_base() {
        let mut config = test_parse_config("site = \"https://example.com/docs\"");
        config.set_site(SiteUrl::parse(SiteUrl::FIELD, "https://example.org").unwrap());
        assert_eq!(config.base, "");
    }

    #[test]
    fn test_site_or_local() {
        let config = test_parse_config("[serve]\nport = 8080");
        assert_eq!(
            config.site_or_local().unwrap().as_str(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, REFERENCE).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.build.format, BuildFormat::Directory);

        let missing = SiteConfig::from_path(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(..))));
    }
}
