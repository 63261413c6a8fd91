//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Trellis static site build configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override the site URL from the config file.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one committed in trellis.toml. The path component becomes the base
    /// prefix for all routes.
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default trellis.toml
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config, then print the build plan
    #[command(visible_alias = "c")]
    Check {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the output file and canonical URL of routes
    #[command(visible_alias = "r")]
    Route {
        /// Route paths (e.g. `/`, `/about`, `/blog/post/`)
        #[arg(required = true, value_name = "ROUTE")]
        routes: Vec<String>,
    },

    /// Match a request path against known routes
    Resolve {
        /// Request path as sent by a browser (e.g. `/about/?ref=x`)
        request: String,

        /// Known routes
        #[arg(short, long = "route", required = true, num_args = 1.., value_name = "ROUTE")]
        routes: Vec<String>,
    },

    /// Classify import specifiers for the dev server bundle
    Import {
        /// Import specifiers (e.g. `svgo`, `./icon.svg`)
        #[arg(required = true, value_name = "SPECIFIER")]
        specifiers: Vec<String>,
    },

    /// Generate sitemap.xml for routes
    #[command(visible_alias = "s")]
    Sitemap {
        /// Route paths to list
        #[arg(required = true, value_name = "ROUTE")]
        routes: Vec<String>,

        /// Print to stdout instead of writing to the output directory
        #[arg(long)]
        stdout: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "trellis", "resolve", "/about/", "--route", "/", "/about",
        ]);
        match cli.command {
            Commands::Resolve { request, routes } => {
                assert_eq!(request, "/about/");
                assert_eq!(routes, ["/", "/about"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_site_url() {
        let cli = Cli::parse_from(["trellis", "check", "-U", "https://example.com/docs"]);
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com/docs"));
        assert_eq!(cli.config, PathBuf::from("trellis.toml"));
        assert!(matches!(cli.command, Commands::Check { json: false }));
    }
}
