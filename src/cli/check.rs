//! `trellis check`: validate and print the build plan.

use anyhow::Result;

use crate::{config::SiteConfig, log, plan::BuildPlan};

pub fn run_check(config: &SiteConfig, json: bool) -> Result<()> {
    let plan = BuildPlan::new(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    log!("check"; "{} is valid", config.config_path.display());
    println!("{}", render_plan(&plan));
    Ok(())
}

/// Human-readable plan, one `key: value` per line.
fn render_plan(plan: &BuildPlan) -> String {
    use crate::config::Choice;

    let rendering = match (plan.server_runtime, plan.prerender_default) {
        (false, _) => "prerender all pages, no server runtime",
        (true, true) => "server runtime, prerender by default",
        (true, false) => "server runtime, render on demand",
    };
    let externals = if plan.ssr_external.is_empty() {
        "-".to_string()
    } else {
        plan.ssr_external.join(", ")
    };

    let lines = [
        ("output", plan.output.name().to_string()),
        ("rendering", rendering.to_string()),
        ("adapter", plan.adapter.clone().unwrap_or_else(|| "-".into())),
        ("site", plan.site.clone().unwrap_or_else(|| "-".into())),
        ("base", format!("/{}", plan.base)),
        ("trailing_slash", plan.trailing_slash.name().to_string()),
        ("build.format", plan.format.name().to_string()),
        ("output_dir", plan.output_dir.display().to_string()),
        ("ssr.external", externals),
    ];

    lines
        .iter()
        .map(|(key, value)| format!("{key:>14}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
