//! Trellis - build configuration for static sites.

mod bundle;
mod cli;
mod config;
mod logger;
mod plan;
mod route;
mod sitemap;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Init { name, force, dry } = &cli.command {
        return cli::init::new_site(name.as_deref(), *force, *dry);
    }

    // Config errors are fatal: nothing below runs with an invalid config.
    let config = match SiteConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check { json } => cli::check::run_check(&config, *json),
        Commands::Route { routes } => cli::route::run_route(&config, routes),
        Commands::Resolve { request, routes } => {
            cli::route::run_resolve(&config, request, routes)
        }
        Commands::Import { specifiers } => cli::route::run_import(&config, specifiers),
        Commands::Sitemap { routes, stdout } => {
            cli::sitemap::run_sitemap(&config, routes, *stdout)
        }
    }
}
