//! Project initialization: writes a default `trellis.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::{config::CONFIG_FILE, log};

/// Default configuration: a static site with directory output.
const TEMPLATE: &str = r#"# Generation strategy: static | server | hybrid
output = "static"

# Canonical site URL, used for canonical links and sitemap entries
site = "https://www.example.com"

# Trailing slashes in URLs: always | never | ignore
trailing_slash = "ignore"

[build]
# page.html (file) or page/index.html (directory)
format = "directory"
output = "dist"

[vite.ssr]
# Packages resolved at runtime instead of bundled
external = ["svgo"]
"#;

/// Config template with a version header.
pub fn generate_config_template() -> String {
    format!(
        "# Trellis configuration file (v{})\n\n{}",
        env!("CARGO_PKG_VERSION"),
        TEMPLATE
    )
}

/// Write the default config into `root`.
///
/// Refuses to overwrite an existing config unless `force` is set.
pub fn write_config(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Run `trellis init`.
pub fn new_site(name: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    write_config(&root, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildFormat, OutputMode, SiteConfig, TrailingSlash};

    #[test]
    fn test_template_is_valid_config() {
        let (file, ignored) = SiteConfig::parse_with_ignored(&generate_config_template()).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");

        let config = SiteConfig::resolve(file).unwrap();
        assert_eq!(config.output, OutputMode::Static);
        assert_eq!(config.trailing_slash, TrailingSlash::Ignore);
        assert_eq!(config.build.format, BuildFormat::Directory);
        assert_eq!(config.vite.ssr.external, vec!["svgo".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");

        write_config(&root, false).unwrap();
        assert!(root.join(CONFIG_FILE).is_file());

        assert!(write_config(&root, false).is_err());
        assert!(write_config(&root, true).is_ok());
    }
}
