//! Routes: paths, output files and request matching.
//!
//! | Module   | Purpose                                               |
//! |----------|-------------------------------------------------------|
//! | `path`   | `RoutePath` / `RequestPath` normalization             |
//! | `output` | Route -> output file for `build.format`               |
//! | `table`  | Request matching under `trailing_slash`, canonical URL |

mod output;
mod path;
mod table;

pub use output::OutputLayout;
pub use path::{RequestPath, RoutePath};
pub use table::{RouteMatch, RouteTable, canonical_url};
