//! Per-site `robots.txt` and `sitemap.xml`.

use crate::escape::html_escape;
use chrono::NaiveDate;
use roadtrip_ssg_core::SiteDescriptor;

/// Search crawlers given an explicit allow block.
pub const NAMED_CRAWLERS: &[&str] = &["Googlebot", "Bingbot", "DuckDuckBot"];

fn route_loc(base: &str, route: &str) -> String {
    if route == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}", base, route)
    }
}

pub fn robots_txt(site: &SiteDescriptor) -> String {
    let mut out = String::new();
    out.push_str("User-agent: *\nAllow: /\n\n");
    out.push_str(&format!("Sitemap: {}/sitemap.xml\n\n", site.base_url()));
    out.push_str("Crawl-delay: 1\n");
    for crawler in NAMED_CRAWLERS {
        out.push_str(&format!("\nUser-agent: {}\nAllow: /\n", crawler));
    }
    out
}

/// Sitemap with one entry per route, root first-class.
pub fn sitemap_xml(site: &SiteDescriptor, routes: &[&str], lastmod: NaiveDate) -> String {
    let base = site.base_url();
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        let priority = if *route == "/" { "1.0" } else { "0.8" };
        out.push_str("  <url>\n");
        out.push_str(&format!(
            "    <loc>{}</loc>\n",
            html_escape(&route_loc(base, route))
        ));
        out.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        out.push_str("    <changefreq>weekly</changefreq>\n");
        out.push_str(&format!("    <priority>{}</priority>\n", priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_ssg_core::site::{AMA, GIW};
    use roadtrip_ssg_core::{PRERENDER_ROUTES, SiteDescriptor};

    const SLASHED: SiteDescriptor = SiteDescriptor {
        id: "x",
        site_url: "https://x.example/",
        ..GIW
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_robots_txt() {
        let robots = robots_txt(&GIW);
        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Sitemap: https://www.goiconicway.com/sitemap.xml\n"));
        assert!(robots.contains("Crawl-delay: 1\n"));
        for crawler in NAMED_CRAWLERS {
            assert!(robots.contains(&format!("User-agent: {}\nAllow: /\n", crawler)));
        }
    }

    #[test]
    fn test_sitemap_entries() {
        let xml = sitemap_xml(&AMA, PRERENDER_ROUTES, date());
        assert_eq!(xml.matches("<url>").count(), 4);
        assert!(xml.contains(
            "<loc>https://www.abenteuermietenamerika.de/</loc>\n    <lastmod>2026-03-14</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>1.0</priority>"
        ));
        assert!(xml.contains(
            "<loc>https://www.abenteuermietenamerika.de/routen</loc>\n    <lastmod>2026-03-14</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>0.8</priority>"
        ));
        assert_eq!(xml.matches("<priority>1.0</priority>").count(), 1);
    }

    #[test]
    fn test_sitemap_is_deterministic() {
        assert_eq!(
            sitemap_xml(&GIW, PRERENDER_ROUTES, date()),
            sitemap_xml(&GIW, PRERENDER_ROUTES, date())
        );
    }

    #[test]
    fn test_trailing_slash_base_is_trimmed() {
        let robots = robots_txt(&SLASHED);
        assert!(robots.contains("Sitemap: https://x.example/sitemap.xml\n"));
        assert!(!robots.contains("//sitemap.xml"));

        let xml = sitemap_xml(&SLASHED, &["/", "/a"], date());
        assert!(xml.contains("<loc>https://x.example/</loc>"));
        assert!(xml.contains("<loc>https://x.example/a</loc>"));
        assert!(!xml.contains("example//"));
    }
}
