//! `trellis sitemap`.

use anyhow::Result;

use crate::{config::SiteConfig, sitemap::Sitemap};

pub fn run_sitemap(config: &SiteConfig, routes: &[String], stdout: bool) -> Result<()> {
    let sitemap = Sitemap::build(config, routes)?;
    if stdout {
        print!("{}", sitemap.into_xml());
    } else {
        sitemap.write(config)?;
    }
    Ok(())
}
