//! Build plan: what the external pipeline is asked to produce.

use serde::Serialize;
use std::path::PathBuf;

use crate::bundle::ImportClassifier;
use crate::config::{BuildFormat, OutputMode, SiteConfig, TrailingSlash};

/// Summary of a validated configuration, as handed to the build pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub output: OutputMode,
    /// Emit a server entry point.
    pub server_runtime: bool,
    /// Render pages at build time unless they opt out.
    pub prerender_default: bool,
    /// Adapter handed to the pipeline (`None` under static output).
    pub adapter: Option<String>,
    pub site: Option<String>,
    pub base: String,
    pub trailing_slash: TrailingSlash,
    pub format: BuildFormat,
    pub output_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub ssr_external: Vec<String>,
}

impl BuildPlan {
    pub fn new(config: &SiteConfig) -> Self {
        let server_runtime = config.output.server_runtime();
        let output_dir = config.output_dir();

        Self {
            output: config.output,
            server_runtime,
            prerender_default: config.output.prerender_default(),
            adapter: config.adapter.clone().filter(|_| server_runtime),
            site: config.site.as_ref().map(|s| s.as_str().to_string()),
            base: config.base.clone(),
            trailing_slash: config.trailing_slash,
            format: config.build.format,
            assets_dir: output_dir.join(&config.build.assets),
            output_dir,
            ssr_external: ImportClassifier::from_config(config)
                .externals()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
