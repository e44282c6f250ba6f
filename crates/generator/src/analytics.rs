//! Load-once analytics tags behind an injectable port.
//!
//! Pre-rendered pages carry the tags inert (`type="text/plain"`); the consent
//! banner swaps the type once the visitor agrees to the matching category.

use crate::escape::html_escape;
use roadtrip_ssg_core::site::AnalyticsIds;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Provider {
    Ga4,
    GoogleAds,
    MetaPixel,
    Clarity,
}

impl Provider {
    pub fn key(self) -> &'static str {
        match self {
            Provider::Ga4 => "ga4",
            Provider::GoogleAds => "google-ads",
            Provider::MetaPixel => "meta-pixel",
            Provider::Clarity => "clarity",
        }
    }

    /// Consent category gating the provider.
    pub fn consent(self) -> &'static str {
        match self {
            Provider::Ga4 | Provider::Clarity => "analytics",
            Provider::GoogleAds | Provider::MetaPixel => "marketing",
        }
    }
}

/// Unset ids are empty or still carry the `XXXX` placeholder.
pub fn is_configured(id: &str) -> bool {
    !id.trim().is_empty() && !id.contains("XXXX")
}

pub trait TagPort {
    /// Load `provider` once. Returns true only on the call that loaded it.
    fn ensure_loaded(&mut self, provider: Provider, id: &str) -> bool;

    fn is_loaded(&self, provider: Provider) -> bool;
}

/// Collects consent-gated tags for the head script group.
#[derive(Debug, Default)]
pub struct HeadTagPort {
    loaded: BTreeSet<Provider>,
    tags: Vec<String>,
}

impl HeadTagPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }

    fn tag_for(provider: Provider, id: &str) -> String {
        let id = html_escape(id);
        let consent = provider.consent();
        let key = provider.key();
        match provider {
            Provider::Ga4 => format!(
                r#"<script type="text/plain" data-consent="{consent}" data-provider="{key}" async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>"#
            ),
            Provider::GoogleAds => format!(
                r#"<script type="text/plain" data-consent="{consent}" data-provider="{key}" data-ads-id="{id}"></script>"#
            ),
            Provider::MetaPixel => format!(
                r#"<script type="text/plain" data-consent="{consent}" data-provider="{key}" data-pixel-id="{id}" async src="https://connect.facebook.net/en_US/fbevents.js"></script>"#
            ),
            Provider::Clarity => format!(
                r#"<script type="text/plain" data-consent="{consent}" data-provider="{key}" async src="https://www.clarity.ms/tag/{id}"></script>"#
            ),
        }
    }
}

impl TagPort for HeadTagPort {
    fn ensure_loaded(&mut self, provider: Provider, id: &str) -> bool {
        if !is_configured(id) || self.loaded.contains(&provider) {
            return false;
        }
        // Ads config rides on the gtag loader
        if provider == Provider::GoogleAds && !self.loaded.contains(&Provider::Ga4) {
            return false;
        }
        self.loaded.insert(provider);
        self.tags.push(Self::tag_for(provider, id));
        true
    }

    fn is_loaded(&self, provider: Provider) -> bool {
        self.loaded.contains(&provider)
    }
}

/// Load every configured provider for a site.
pub fn load_site_analytics(port: &mut dyn TagPort, ids: &AnalyticsIds) {
    port.ensure_loaded(Provider::Ga4, ids.ga4_measurement_id);
    port.ensure_loaded(Provider::GoogleAds, ids.google_ads_id);
    port.ensure_loaded(Provider::MetaPixel, ids.meta_pixel_id);
    port.ensure_loaded(Provider::Clarity, ids.clarity_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ga4: &'static str, ads: &'static str) -> AnalyticsIds {
        AnalyticsIds {
            ga4_measurement_id: ga4,
            google_ads_id: ads,
            meta_pixel_id: "XXXXXXXXXXXXXXXX",
            clarity_id: "",
        }
    }

    #[test]
    fn test_ensure_loaded_is_idempotent() {
        let mut port = HeadTagPort::new();
        assert!(port.ensure_loaded(Provider::Ga4, "G-123"));
        assert!(!port.ensure_loaded(Provider::Ga4, "G-123"));
        assert!(!port.ensure_loaded(Provider::Ga4, "G-456"));
        assert_eq!(port.into_tags().len(), 1);
    }

    #[test]
    fn test_placeholder_ids_are_skipped() {
        let mut port = HeadTagPort::new();
        load_site_analytics(&mut port, &ids("G-XXXXXXX", "AW-XXXXXXXXXX"));
        assert!(!port.is_loaded(Provider::Ga4));
        assert!(port.into_tags().is_empty());
    }

    #[test]
    fn test_ads_requires_ga4() {
        let mut port = HeadTagPort::new();
        assert!(!port.ensure_loaded(Provider::GoogleAds, "AW-1"));
        load_site_analytics(&mut port, &ids("G-1", "AW-1"));
        assert!(port.is_loaded(Provider::Ga4));
        assert!(port.is_loaded(Provider::GoogleAds));
        let tags = port.into_tags();
        assert_eq!(tags.len(), 2);
        assert!(tags[0].contains("gtag/js?id=G-1"));
        assert!(tags[1].contains(r#"data-consent="marketing""#));
    }

    #[test]
    fn test_tags_are_inert() {
        let mut port = HeadTagPort::new();
        port.ensure_loaded(Provider::Clarity, "abc123");
        let tags = port.into_tags();
        assert!(tags[0].starts_with(r#"<script type="text/plain" data-consent="analytics""#));
        assert!(tags[0].contains("clarity.ms/tag/abc123"));
    }
}
