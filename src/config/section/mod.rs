//! Configuration section definitions.
//!
//! | Module     | TOML key                 | Purpose                            |
//! |------------|--------------------------|------------------------------------|
//! | `output`   | `output`, `adapter`      | Generation strategy                |
//! | `site`     | `site`                   | Canonical site URL                 |
//! | `routing`  | `trailing_slash`         | Trailing-slash policy              |
//! | `build`    | `[build]`                | Output layout and directories      |
//! | `vite`     | `[vite.ssr]`             | Server-side bundling exclusions    |
//! | `serve`    | `[serve]`                | Development server address         |

mod build;
mod output;
mod routing;
mod serve;
mod site;
pub mod vite;

pub use build::{BuildFormat, BuildSection, BuildSectionConfig};
pub use output::OutputMode;
pub use routing::TrailingSlash;
pub use serve::ServeConfig;
pub use site::SiteUrl;
pub use vite::{SsrConfig, ViteConfig};
