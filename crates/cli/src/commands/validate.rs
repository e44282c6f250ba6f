use anyhow::{Context, Result};
use roadtrip_ssg_core::{BuildLayout, PRERENDER_ROUTES, PageRenderer, SiteRegistry};
use roadtrip_ssg_generator::SitePageRenderer;
use roadtrip_ssg_validator::validate_build;
use std::path::PathBuf;

pub async fn run(root: PathBuf) -> Result<()> {
    println!("Validating build at: {}", root.display());

    let registry = SiteRegistry::builtin();
    let layout = BuildLayout::load(&root, &registry).context("Failed to load ssg.toml")?;
    let routes: Vec<String> = PRERENDER_ROUTES.iter().map(|r| r.to_string()).collect();
    let renderer = SitePageRenderer::new(registry);

    let report = validate_build(&layout, &registry, &routes, &renderer.routes());

    for line in &report.info {
        println!("  ✓ {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        eprintln!("  ✗ {}", line);
    }

    if !report.is_ok() {
        anyhow::bail!("{} validation error(s)", report.errors.len());
    }

    println!("\n✅ Build inputs valid");
    Ok(())
}
