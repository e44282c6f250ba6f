use crate::error::{Error, Result};
use crate::locale::Locale;
use std::collections::HashSet;

/// External HTTP services a site talks to. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub concierge_api_url: &'static str,
    pub checkout_api_url: &'static str,
    /// Value of `source` in checkout requests, identifies the brand.
    pub booking_source: &'static str,
    pub lead_capture_url: &'static str,
    pub whatsapp_url: &'static str,
}

/// Third-party analytics identifiers. Placeholder ids contain `XXXX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsIds {
    pub ga4_measurement_id: &'static str,
    pub google_ads_id: &'static str,
    pub meta_pixel_id: &'static str,
    pub clarity_id: &'static str,
}

/// Everything that differs between the deployed brands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDescriptor {
    pub id: &'static str,
    pub default_locale: Locale,
    pub supported_locales: &'static [Locale],
    pub storage_prefix: &'static str,
    /// Output directory, relative to the project root.
    pub out_dir: &'static str,
    pub site_url: &'static str,
    pub partner_site_url: &'static str,
    pub site_name: &'static str,
    pub company_dba: &'static str,
    pub contact_email: &'static str,
    pub og_image: &'static str,
    /// Hostname substrings that select this site at runtime.
    pub host_markers: &'static [&'static str],
    pub endpoints: Endpoints,
    pub analytics: AnalyticsIds,
}

impl SiteDescriptor {
    pub fn supports(&self, locale: Locale) -> bool {
        self.supported_locales.contains(&locale)
    }

    pub fn is_bilingual(&self) -> bool {
        self.supported_locales.len() > 1
    }

    /// Site URL without trailing slashes.
    pub fn base_url(&self) -> &'static str {
        self.site_url.trim_end_matches('/')
    }

    /// Absolute URL for a route path. The root route maps to the bare base URL.
    pub fn page_url(&self, route: &str) -> String {
        if route == "/" {
            self.base_url().to_string()
        } else {
            format!("{}{}", self.base_url(), route)
        }
    }
}

const CHECKOUT_API_URL: &str = "https://abenteuer-mieten-platform.vercel.app/api/public/checkout";
const CONCIERGE_API_URL: &str = "https://ama-api.anja687gutierrez.workers.dev/api/concierge";
const LEAD_CAPTURE_URL: &str = "https://script.google.com/macros/s/AKfycbzF4t-juXYphl5JjFjzurt9ARcaYnyOHYo4vCVUgmb99l96p-seSdcQJTZKaP5d92icyg/exec";
const WHATSAPP_URL: &str = "https://wa.me/13106006624";

pub const AMA: SiteDescriptor = SiteDescriptor {
    id: "ama",
    default_locale: Locale::De,
    supported_locales: &[Locale::De, Locale::En],
    storage_prefix: "ama",
    out_dir: "dist/client-ama",
    site_url: "https://www.abenteuermietenamerika.de",
    partner_site_url: "https://www.goiconicway.com",
    site_name: "Abenteuer Mieten Amerika",
    company_dba: "Gutierrez Ventures LLC DBA Abenteuer Mieten Amerika\u{2122}",
    contact_email: "info@abenteuermietenamerika.de",
    og_image: "https://www.abenteuermietenamerika.de/og-image.jpg",
    host_markers: &["abenteuermietenamerika"],
    endpoints: Endpoints {
        concierge_api_url: CONCIERGE_API_URL,
        checkout_api_url: CHECKOUT_API_URL,
        booking_source: "abenteuer",
        lead_capture_url: LEAD_CAPTURE_URL,
        whatsapp_url: WHATSAPP_URL,
    },
    analytics: AnalyticsIds {
        ga4_measurement_id: "G-7LCWYNKB6M",
        google_ads_id: "AW-XXXXXXXXXX",
        meta_pixel_id: "XXXXXXXXXXXXXXXX",
        clarity_id: "XXXXXXXXXX",
    },
};

pub const GIW: SiteDescriptor = SiteDescriptor {
    id: "giw",
    default_locale: Locale::En,
    supported_locales: &[Locale::En],
    storage_prefix: "giw",
    out_dir: "dist/client-giw",
    site_url: "https://www.goiconicway.com",
    partner_site_url: "https://www.abenteuermietenamerika.de",
    site_name: "Go Iconic Way",
    company_dba: "Gutierrez Ventures LLC DBA Go Iconic Way\u{2122}",
    contact_email: "info@goiconicway.com",
    og_image: "https://www.goiconicway.com/og-image.jpg",
    host_markers: &["goiconicway", "iconicpathways"],
    endpoints: Endpoints {
        concierge_api_url: CONCIERGE_API_URL,
        checkout_api_url: CHECKOUT_API_URL,
        booking_source: "goiconicway",
        lead_capture_url: LEAD_CAPTURE_URL,
        whatsapp_url: WHATSAPP_URL,
    },
    // GA4 property is shared between both brands
    analytics: AnalyticsIds {
        ga4_measurement_id: "G-7LCWYNKB6M",
        google_ads_id: "AW-XXXXXXXXXX",
        meta_pixel_id: "XXXXXXXXXXXXXXXX",
        clarity_id: "XXXXXXXXXX",
    },
};

/// Built-in sites in processing order. The first entry is the default site.
pub static SITES: [SiteDescriptor; 2] = [AMA, GIW];

/// Lookup table from site id to descriptor.
#[derive(Debug, Clone, Copy)]
pub struct SiteRegistry {
    sites: &'static [SiteDescriptor],
}

impl SiteRegistry {
    pub fn builtin() -> Self {
        Self { sites: &SITES }
    }

    /// Registry over an arbitrary static site list; the first site is the default.
    ///
    /// Call [`SiteRegistry::validate`] before relying on the invariants.
    pub fn new(sites: &'static [SiteDescriptor]) -> Self {
        Self { sites }
    }

    /// Site used when an id is unknown. `None` only for an empty registry.
    pub fn default_site(&self) -> Option<&'static SiteDescriptor> {
        self.sites.first()
    }

    pub fn find(&self, id: &str) -> Option<&'static SiteDescriptor> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Look up a site, falling back to the default site for unknown ids.
    pub fn get(&self, id: &str) -> Option<&'static SiteDescriptor> {
        self.find(id).or_else(|| self.default_site())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static SiteDescriptor> {
        self.sites.iter()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.sites.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Check the invariants every consumer of the registry relies on.
    pub fn validate(&self) -> Result<()> {
        if self.sites.is_empty() {
            return Err(Error::InvalidData("site registry is empty".to_string()));
        }

        let mut ids = HashSet::new();
        let mut out_dirs = HashSet::new();
        for site in self.sites {
            if site.id.trim().is_empty() {
                return Err(Error::InvalidData("site with empty id".to_string()));
            }
            if !ids.insert(site.id) {
                return Err(Error::InvalidData(format!(
                    "duplicate site id '{}'",
                    site.id
                )));
            }
            if !out_dirs.insert(site.out_dir) {
                return Err(Error::InvalidData(format!(
                    "site '{}' shares output directory '{}' with another site",
                    site.id, site.out_dir
                )));
            }
            if site.supported_locales.is_empty() {
                return Err(Error::InvalidData(format!(
                    "site '{}' supports no locales",
                    site.id
                )));
            }
            if !site.supports(site.default_locale) {
                return Err(Error::InvalidData(format!(
                    "site '{}' default locale '{}' is not in its supported locales",
                    site.id,
                    site.default_locale.as_str()
                )));
            }
            for url in [site.site_url, site.partner_site_url] {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(Error::InvalidData(format!(
                        "site '{}' has non-http URL '{}'",
                        site.id, url
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
