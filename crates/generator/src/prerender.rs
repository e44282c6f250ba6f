//! The static pre-render pass: copy client assets, render every route for
//! every site, splice into the shell, then write crawl files.
//!
//! Sites and routes run strictly in order and the first error aborts the
//! whole run, so a site after a failing one never gets an output directory.

use crate::crawl::{robots_txt, sitemap_xml};
use crate::shell::HtmlShell;
use chrono::NaiveDate;
use roadtrip_ssg_core::{
    BuildLayout, Error, PRERENDER_ROUTES, PageRenderer, Result, SiteDescriptor, SiteRegistry,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub site_id: &'static str,
    pub route: String,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutput {
    pub site_id: &'static str,
    pub out_dir: PathBuf,
    pub assets_copied: usize,
    pub pages: Vec<PageOutput>,
    pub robots: PathBuf,
    pub sitemap: PathBuf,
}

/// Everything a successful run wrote, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerenderReport {
    pub sites: Vec<SiteOutput>,
}

impl PrerenderReport {
    pub fn page_count(&self) -> usize {
        self.sites.iter().map(|s| s.pages.len()).sum()
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageOutput> {
        self.sites.iter().flat_map(|s| s.pages.iter())
    }
}

pub struct Prerenderer {
    pub layout: BuildLayout,
    pub registry: SiteRegistry,
    pub routes: Vec<String>,
    /// Date stamped into every sitemap entry.
    pub lastmod: NaiveDate,
}

impl Prerenderer {
    /// Pre-render the standard route list.
    pub fn new(layout: BuildLayout, registry: SiteRegistry, lastmod: NaiveDate) -> Self {
        Self {
            layout,
            registry,
            routes: PRERENDER_ROUTES.iter().map(|r| r.to_string()).collect(),
            lastmod,
        }
    }

    pub fn with_routes<I, S>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.routes = routes.into_iter().map(Into::into).collect();
        self
    }

    /// Every check that must pass before anything is written.
    pub fn check_preconditions(&self, renderer: &dyn PageRenderer) -> Result<HtmlShell> {
        self.registry.validate()?;
        self.layout.check_output_dirs(&self.registry)?;

        let shell_path = self.layout.shell_path();
        if !shell_path.is_file() {
            return Err(Error::MissingPrecondition {
                artifact: self.layout.display_path(&shell_path),
                hint: "Run the client build first.".to_string(),
            });
        }
        let client_dir = self.layout.client_dir_path();
        if !client_dir.is_dir() {
            return Err(Error::MissingPrecondition {
                artifact: self.layout.display_path(&client_dir),
                hint: "Run the client build first.".to_string(),
            });
        }

        for route in &self.routes {
            check_route_path(route)?;
        }
        check_routes(&self.routes, &renderer.routes())?;

        HtmlShell::parse(fs::read_to_string(&shell_path)?)
    }

    pub fn run(&self, renderer: &dyn PageRenderer) -> Result<PrerenderReport> {
        let shell = self.check_preconditions(renderer)?;

        let mut report = PrerenderReport::default();
        for site in self.registry.iter() {
            report.sites.push(self.render_site(site, &shell, renderer)?);
        }
        Ok(report)
    }

    fn render_site(
        &self,
        site: &'static SiteDescriptor,
        shell: &HtmlShell,
        renderer: &dyn PageRenderer,
    ) -> Result<SiteOutput> {
        let out_dir = self.layout.site_out_path(site);
        let assets_copied = copy_dir(&self.layout.client_dir_path(), &out_dir)?;
        debug!(site = site.id, files = assets_copied, "copied client assets");

        let shell = shell.with_lang(site.default_locale);
        debug!(site = site.id, lang = site.default_locale.as_str(), "rewrote shell language");
        let mut pages = Vec::with_capacity(self.routes.len());

        for route in &self.routes {
            let result = renderer.render(route, site.id)?;
            let html = shell.splice(&result.head.to_html(), &result.body);

            let path = route_output_path(&out_dir, route);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &html)?;

            info!(
                site = site.id,
                route = route.as_str(),
                path = %self.layout.display_path(&path),
                bytes = html.len(),
                "wrote page"
            );
            pages.push(PageOutput {
                site_id: site.id,
                route: route.clone(),
                path,
                bytes: html.len(),
            });
        }

        let route_refs: Vec<&str> = self.routes.iter().map(String::as_str).collect();
        let robots = out_dir.join("robots.txt");
        fs::write(&robots, robots_txt(site))?;
        let sitemap = out_dir.join("sitemap.xml");
        fs::write(&sitemap, sitemap_xml(site, &route_refs, self.lastmod))?;
        info!(site = site.id, "wrote robots.txt and sitemap.xml");

        Ok(SiteOutput {
            site_id: site.id,
            out_dir,
            assets_copied,
            pages,
            robots,
            sitemap,
        })
    }
}

/// `/` maps to the site root, `/x` to `x/index.html`.
pub fn route_output_path(site_root: &Path, route: &str) -> PathBuf {
    let segment = route.trim_start_matches('/');
    if segment.is_empty() {
        site_root.join("index.html")
    } else {
        site_root.join(segment).join("index.html")
    }
}

/// A route is `/` or a single path segment of `[A-Za-z0-9_-]`.
pub fn check_route_path(route: &str) -> Result<()> {
    if route == "/" {
        return Ok(());
    }
    let valid = route
        .strip_prefix('/')
        .filter(|seg| !seg.is_empty())
        .is_some_and(|seg| {
            seg.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "route '{}' must be '/' or a single path segment",
            route
        )))
    }
}

/// Configured routes and the renderer's route table must be the same set.
pub fn check_routes(configured: &[String], renderer_routes: &[&str]) -> Result<()> {
    let configured: BTreeSet<&str> = configured.iter().map(String::as_str).collect();
    let known: BTreeSet<&str> = renderer_routes.iter().copied().collect();

    let missing: Vec<String> = configured
        .difference(&known)
        .map(|r| r.to_string())
        .collect();
    let unlisted: Vec<String> = known
        .difference(&configured)
        .map(|r| r.to_string())
        .collect();

    if missing.is_empty() && unlisted.is_empty() {
        Ok(())
    } else {
        Err(Error::RouteMismatch { missing, unlisted })
    }
}

/// Recursively copy `src` into `dst`, overwriting files. Returns files copied.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::InvalidData(e.to_string()))?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_route_output_path() {
        let root = Path::new("/out");
        assert_eq!(route_output_path(root, "/"), PathBuf::from("/out/index.html"));
        assert_eq!(
            route_output_path(root, "/flotte"),
            PathBuf::from("/out/flotte/index.html")
        );
    }

    #[test]
    fn test_check_route_path() {
        assert!(check_route_path("/").is_ok());
        assert!(check_route_path("/preise").is_ok());
        assert!(check_route_path("").is_err());
        assert!(check_route_path("preise").is_err());
        assert!(check_route_path("/a/b").is_err());
        assert!(check_route_path("/..").is_err());
    }

    #[test]
    fn test_check_routes_reports_both_sides() {
        let configured = vec!["/".to_string(), "/flotte".to_string(), "/extra".to_string()];
        let err = check_routes(&configured, &["/", "/flotte", "/preise"]).unwrap_err();
        match err {
            Error::RouteMismatch { missing, unlisted } => {
                assert_eq!(missing, vec!["/extra".to_string()]);
                assert_eq!(unlisted, vec!["/preise".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_routes_ignores_order() {
        let configured = vec!["/b".to_string(), "/".to_string()];
        assert!(check_routes(&configured, &["/", "/b"]).is_ok());
    }

    #[test]
    fn test_copy_dir() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("assets/js")).unwrap();
        fs::write(src.path().join("index.html"), "shell").unwrap();
        fs::write(src.path().join("assets/js/app.js"), "js").unwrap();
        fs::write(dst.path().join("index.html"), "stale").unwrap();

        let copied = copy_dir(src.path(), dst.path()).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.path().join("index.html")).unwrap(), "shell");
        assert_eq!(fs::read_to_string(dst.path().join("assets/js/app.js")).unwrap(), "js");
    }
}
