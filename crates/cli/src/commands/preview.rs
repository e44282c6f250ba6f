use anyhow::{Context, Result};
use axum::Router;
use roadtrip_ssg_core::{BuildLayout, SiteRegistry};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Serve one site's output directory the way the static host would:
/// extensionless routes resolve to `<route>/index.html`.
pub async fn run(root: PathBuf, site_id: String, port: u16) -> Result<()> {
    let registry = SiteRegistry::builtin();
    let site = registry.find(&site_id).with_context(|| {
        format!(
            "Unknown site '{}'. Known sites: {}",
            site_id,
            registry.ids().join(", ")
        )
    })?;
    let layout = BuildLayout::load(&root, &registry).context("Failed to load ssg.toml")?;
    let out_dir = layout.site_out_path(site);

    if !out_dir.join("index.html").is_file() {
        anyhow::bail!(
            "{} has no pre-rendered pages\nRun 'roadtrip-ssg prerender' first",
            layout.display_path(&out_dir)
        );
    }

    println!("🌐 Previewing {} ({})", site.site_name, site.id);
    println!("   Serving: {}", layout.display_path(&out_dir));

    let serve_dir = ServeDir::new(&out_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(out_dir.join("index.html")));
    let app = Router::new()
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
