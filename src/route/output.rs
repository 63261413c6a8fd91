//! Route -> output file mapping.
//!
//! ```text
//! format = "directory"          format = "file"
//! /            -> index.html    /            -> index.html
//! /about       -> about/index.html
//!                               /about       -> about.html
//! /blog/post   -> blog/post/index.html
//!                               /blog/post   -> blog/post.html
//! ```

use std::path::PathBuf;

use crate::config::{BuildFormat, SiteConfig};

use super::RoutePath;

const INDEX_HTML: &str = "index.html";

impl BuildFormat {
    /// Output file for `route`, relative to the output directory.
    pub fn output_file(self, route: &RoutePath) -> PathBuf {
        if route.is_root() {
            return PathBuf::from(INDEX_HTML);
        }

        let mut path: PathBuf = route.segments().collect();
        match self {
            Self::Directory => path.push(INDEX_HTML),
            Self::File => {
                // set_extension would replace a dotted segment like `v1.2`
                let mut file = path.into_os_string();
                file.push(".html");
                path = PathBuf::from(file);
            }
        }
        path
    }

    /// Whether canonical URLs for this layout end with `/`.
    pub const fn prefers_trailing_slash(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Output placement for a whole site.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Output directory including the base prefix.
    pub dir: PathBuf,
    pub format: BuildFormat,
}

impl OutputLayout {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            dir: config.output_dir(),
            format: config.build.format,
        }
    }

    /// Absolute output file for `route`.
    pub fn file_for(&self, route: &RoutePath) -> PathBuf {
        self.dir.join(self.format.output_file(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_directory_format() {
        let format = BuildFormat::Directory;
        assert_eq!(format.output_file(&RoutePath::root()), PathBuf::from("index.html"));
        for route in ["/about", "/about/", "/blog/post", "/v1.2", "/posts/中文"] {
            let route = RoutePath::new(route);
            assert_eq!(
                format.output_file(&route),
                Path::new(route.relative()).join("index.html"),
                "failed for {route}"
            );
        }
    }

    #[test]
    fn test_file_format() {
        let format = BuildFormat::File;
        assert_eq!(format.output_file(&RoutePath::root()), PathBuf::from("index.html"));
        assert_eq!(
            format.output_file(&RoutePath::new("/about/")),
            PathBuf::from("about.html")
        );
        assert_eq!(
            format.output_file(&RoutePath::new("/blog/post")),
            PathBuf::from("blog/post.html")
        );
        assert_eq!(
            format.output_file(&RoutePath::new("/v1.2")),
            PathBuf::from("v1.2.html")
        );
    }

    #[test]
    fn test_layout_with_base() {
        let mut config = test_parse_config("site = \"https://example.com/docs/\"");
        config.build.output = PathBuf::from("/srv/dist");
        let layout = OutputLayout::new(&config);

        assert_eq!(
            layout.file_for(&RoutePath::new("/guide")),
            PathBuf::from("/srv/dist/docs/guide/index.html")
        );
        assert_eq!(
            layout.file_for(&RoutePath::root()),
            PathBuf::from("/srv/dist/docs/index.html")
        );
    }
}
