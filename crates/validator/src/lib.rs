//! Pre-flight checks for a pre-render run.
//!
//! Unlike the pre-renderer, which stops at the first problem, validation
//! collects everything it finds into one report.

use roadtrip_ssg_core::{BuildLayout, SiteRegistry};
use roadtrip_ssg_generator::analytics::is_configured;
use roadtrip_ssg_generator::prerender::{check_route_path, check_routes};
use roadtrip_ssg_generator::shell::HtmlShell;
use std::fs;
use walkdir::WalkDir;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check registry, build inputs and route agreement without writing anything.
pub fn validate_build(
    layout: &BuildLayout,
    registry: &SiteRegistry,
    routes: &[String],
    renderer_routes: &[&str],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    match registry.validate() {
        Ok(()) => report
            .info
            .push(format!("{} sites: {}", registry.len(), registry.ids().join(", "))),
        Err(e) => report.errors.push(e.to_string()),
    }
    if let Err(e) = layout.check_output_dirs(registry) {
        report.errors.push(e.to_string());
    }

    check_shell(layout, &mut report);
    check_client_dir(layout, &mut report);

    for route in routes {
        if let Err(e) = check_route_path(route) {
            report.errors.push(e.to_string());
        }
    }
    match check_routes(routes, renderer_routes) {
        Ok(()) => report.info.push(format!("{} routes: {}", routes.len(), routes.join(", "))),
        Err(e) => report.errors.push(e.to_string()),
    }

    for site in registry.iter() {
        let ids = &site.analytics;
        for (name, id) in [
            ("GA4", ids.ga4_measurement_id),
            ("Google Ads", ids.google_ads_id),
            ("Meta Pixel", ids.meta_pixel_id),
            ("Clarity", ids.clarity_id),
        ] {
            if !is_configured(id) {
                report
                    .warnings
                    .push(format!("site '{}': {} id not configured, tag skipped", site.id, name));
            }
        }
        report.info.push(format!(
            "site '{}' -> {}",
            site.id,
            layout.site_out_dir(site).display()
        ));
    }

    report
}

fn check_shell(layout: &BuildLayout, report: &mut ValidationReport) {
    let shell_path = layout.shell_path();
    let shown = layout.display_path(&shell_path);
    match fs::read_to_string(&shell_path) {
        Ok(content) => match HtmlShell::parse(content) {
            Ok(_) => report.info.push(format!("shell ok: {}", shown)),
            Err(e) => report.errors.push(format!("{}: {}", shown, e)),
        },
        Err(_) => report
            .errors
            .push(format!("{} not found. Run the client build first.", shown)),
    }
}

fn check_client_dir(layout: &BuildLayout, report: &mut ValidationReport) {
    let client_dir = layout.client_dir_path();
    let shown = layout.display_path(&client_dir);
    if !client_dir.is_dir() {
        report
            .errors
            .push(format!("{} not found. Run the client build first.", shown));
        return;
    }

    let files = WalkDir::new(&client_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    report.info.push(format!("{} files in {}", files, shown));

    if !client_dir.join("assets").is_dir() {
        report
            .warnings
            .push(format!("no assets/ directory in {}", shown));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_ssg_core::PRERENDER_ROUTES;
    use std::path::Path;
    use tempfile::TempDir;

    const SHELL: &str = "<html lang=\"de\"><head><!--helmet--></head><body><!--ssr-outlet--></body></html>";

    fn routes() -> Vec<String> {
        PRERENDER_ROUTES.iter().map(|r| r.to_string()).collect()
    }

    fn client_build(root: &Path, with_assets: bool) {
        let client = root.join("dist/client");
        fs::create_dir_all(&client).unwrap();
        fs::write(client.join("index.html"), SHELL).unwrap();
        if with_assets {
            fs::create_dir_all(client.join("assets")).unwrap();
            fs::write(client.join("assets/app.js"), "").unwrap();
        }
    }

    #[test]
    fn test_valid_build() {
        let dir = TempDir::new().unwrap();
        client_build(dir.path(), true);

        let report = validate_build(
            &BuildLayout::new(dir.path()),
            &SiteRegistry::builtin(),
            &routes(),
            PRERENDER_ROUTES,
        );
        assert!(report.is_ok(), "{:?}", report.errors);
        assert!(report.info.iter().any(|i| i == "2 files in dist/client"));
        assert!(report.info.iter().any(|i| i == "2 sites: ama, giw"));
    }

    #[test]
    fn test_missing_client_build() {
        let dir = TempDir::new().unwrap();
        let report = validate_build(
            &BuildLayout::new(dir.path()),
            &SiteRegistry::builtin(),
            &routes(),
            PRERENDER_ROUTES,
        );
        assert!(!report.is_ok());
        assert!(
            report
                .errors
                .contains(&"dist/client/index.html not found. Run the client build first.".to_string())
        );
    }

    #[test]
    fn test_collects_multiple_errors() {
        let dir = TempDir::new().unwrap();
        client_build(dir.path(), false);
        fs::write(dir.path().join("dist/client/index.html"), "<html>").unwrap();

        let mut bad_routes = routes();
        bad_routes.push("/a/b".to_string());
        let report = validate_build(
            &BuildLayout::new(dir.path()),
            &SiteRegistry::builtin(),
            &bad_routes,
            PRERENDER_ROUTES,
        );
        // shell, route shape, route mismatch
        assert_eq!(report.errors.len(), 3, "{:?}", report.errors);
        assert!(report.warnings.iter().any(|w| w.starts_with("no assets/ directory")));
    }

    #[test]
    fn test_placeholder_analytics_warn() {
        let dir = TempDir::new().unwrap();
        client_build(dir.path(), true);
        let report = validate_build(
            &BuildLayout::new(dir.path()),
            &SiteRegistry::builtin(),
            &routes(),
            PRERENDER_ROUTES,
        );
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("site 'ama': Meta Pixel id not configured"))
        );
    }
}
