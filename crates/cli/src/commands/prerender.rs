use anyhow::{Context, Result};
use chrono::Local;
use roadtrip_ssg_core::{BuildLayout, SiteRegistry};
use roadtrip_ssg_generator::{Prerenderer, SitePageRenderer};
use std::path::PathBuf;

/// Pre-render every site under `root`.
pub async fn run(root: PathBuf) -> Result<()> {
    let registry = SiteRegistry::builtin();
    let layout = BuildLayout::load(&root, &registry)
        .with_context(|| format!("Failed to load build layout from {}", root.display()))?;

    println!("🔨 Pre-rendering {} sites...", registry.len());
    println!("   Shell:  {}", layout.shell.display());
    println!("   Client: {}", layout.client_dir.display());
    println!();

    let prerenderer = Prerenderer::new(layout, registry, Local::now().date_naive());
    let report = prerenderer
        .run(&SitePageRenderer::new(registry))
        .context("Pre-render failed")?;

    for site in &report.sites {
        println!(
            "✓ {} → {}/ ({} pages, {} assets)",
            site.site_id.to_uppercase(),
            prerenderer.layout.display_path(&site.out_dir),
            site.pages.len(),
            site.assets_copied
        );
        for page in &site.pages {
            println!(
                "   {:<12} → {} ({:.1} KB)",
                page.route,
                prerenderer.layout.display_path(&page.path),
                page.bytes as f64 / 1024.0
            );
        }
    }

    println!();
    println!("✅ Done. {} pages ready for deployment.", report.page_count());
    for site in registry.iter() {
        println!(
            "   {} → {}/  (deploy to {})",
            site.id.to_uppercase(),
            prerenderer.layout.display_path(&prerenderer.layout.site_out_path(site)),
            site.base_url()
        );
    }

    Ok(())
}
