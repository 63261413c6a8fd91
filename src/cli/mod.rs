//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod route;
pub mod sitemap;

pub use args::{Cli, Commands};
