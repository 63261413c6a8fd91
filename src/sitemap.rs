//! Sitemap generation.
//!
//! Lists every route under its canonical URL for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{SiteConfig, SiteUrl},
    log,
    route::{RoutePath, canonical_url},
};
use anyhow::{Context, Result, bail};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap filename inside the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

pub struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Build the sitemap for `routes`.
    ///
    /// Requires `site`: a sitemap with local dev-server URLs is useless.
    pub fn build<I, S>(config: &SiteConfig, routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(site) = &config.site else {
            bail!(
                "{} is not configured; sitemap entries need an absolute site URL",
                SiteUrl::FIELD
            );
        };

        let mut routes: Vec<RoutePath> = routes
            .into_iter()
            .map(|r| RoutePath::new(r.as_ref()))
            .collect();
        routes.sort();
        routes.dedup();

        let urls = routes
            .iter()
            .map(|route| canonical_url(config, site, route))
            .collect();
        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write `sitemap.xml` to the output directory, returning its path.
    pub fn write(self, config: &SiteConfig) -> Result<PathBuf> {
        let output_dir = config.output_dir();
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let sitemap_path = output_dir.join(SITEMAP_FILE);
        let count = self.len();
        fs::write(&sitemap_path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({} urls)", sitemap_path.display(), count);
        Ok(sitemap_path)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const SITE: &str = "site = \"https://www.thelocalplace.com\"\n";

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<'\">"), "&lt;&apos;&quot;&gt;");
    }

    #[test]
    fn test_requires_site() {
        let config = test_parse_config("");
        assert!(Sitemap::build(&config, ["/"]).is_err());
    }

    #[test]
    fn test_xml_lists_canonical_urls() {
        let config = test_parse_config(SITE);
        let sitemap = Sitemap::build(&config, ["/about", "/", "/about/"]).unwrap();
        assert_eq!(sitemap.len(), 2);

        let xml = sitemap.into_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(SITEMAP_NS));
        let root = xml.find("<loc>https://www.thelocalplace.com/</loc>").unwrap();
        let about = xml
            .find("<loc>https://www.thelocalplace.com/about/</loc>")
            .unwrap();
        assert!(root < about);
    }

    #[test]
    fn test_file_format_urls() {
        let config = test_parse_config(&format!("{SITE}[build]\nformat = \"file\""));
        let xml = Sitemap::build(&config, ["/about"]).unwrap().into_xml();
        assert!(xml.contains("<loc>https://www.thelocalplace.com/about</loc>"));
    }

    #[test]
    fn test_write_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config(SITE);
        config.build.output = dir.path().join("dist");

        let path = Sitemap::build(&config, ["/"]).unwrap().write(&config).unwrap();
        assert_eq!(path, dir.path().join("dist").join(SITEMAP_FILE));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("https://www.thelocalplace.com/"));
    }
}
