//! `trellis route`, `trellis resolve` and `trellis import`.

use anyhow::Result;

use crate::{
    bundle::{ImportClassifier, ImportKind},
    config::SiteConfig,
    debug,
    route::{OutputLayout, RouteMatch, RoutePath, RouteTable, canonical_url},
};

/// Print output file and canonical URL per route.
pub fn run_route(config: &SiteConfig, routes: &[String]) -> Result<()> {
    let layout = OutputLayout::new(config);
    let site = config.site_or_local()?;
    if config.site.is_none() {
        debug!("route"; "site not configured, using {}", site);
    }

    for raw in routes {
        let route = RoutePath::new(raw);
        println!(
            "{}\t{}\t{}",
            route,
            layout.file_for(&route).display(),
            canonical_url(config, &site, &route)
        );
    }
    Ok(())
}

/// Print how `request` resolves against `routes`.
///
/// Returns an error when the request does not resolve, so scripts can rely
/// on the exit status.
pub fn run_resolve(config: &SiteConfig, request: &str, routes: &[String]) -> Result<()> {
    let table = RouteTable::new(config, routes);
    debug!("route"; "{} routes, trailing_slash = {:?}", table.len(), config.trailing_slash);

    match table.resolve(request) {
        RouteMatch::Found { route, file } => {
            println!("{}\t{}", route, file.display());
            Ok(())
        }
        RouteMatch::SlashMismatch { route, location } => {
            anyhow::bail!("'{request}' does not match route {route} under trailing_slash policy, expected '{location}'")
        }
        RouteMatch::NotFound => anyhow::bail!("no route matches '{request}'"),
    }
}

/// Print the bundle decision per import specifier.
pub fn run_import(config: &SiteConfig, specifiers: &[String]) -> Result<()> {
    let classifier = ImportClassifier::from_config(config);
    for specifier in specifiers {
        let kind = match classifier.classify(specifier) {
            ImportKind::Bundled => "bundled",
            ImportKind::External => "external",
        };
        println!("{specifier}\t{kind}");
    }
    Ok(())
}
