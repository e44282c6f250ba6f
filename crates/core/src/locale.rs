//! Active site and locale resolution.
//!
//! Build-time renders pass the site id explicitly; the browser runtime infers
//! it from the host. Both go through [`resolve_site`].

use crate::site::{SiteDescriptor, SiteRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Open Graph locale tag.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::De => "de_DE",
            Locale::En => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Persisted user preferences (the browser's local storage at runtime).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Pick the active site. An explicit id always wins over the hostname.
///
/// Returns `None` only when the registry is empty.
pub fn resolve_site(
    registry: &SiteRegistry,
    explicit_id: Option<&str>,
    hostname: Option<&str>,
) -> Option<&'static SiteDescriptor> {
    if let Some(id) = explicit_id {
        return registry.get(id);
    }

    if let Some(host) = hostname {
        let host = host.to_ascii_lowercase();
        if let Some(site) = registry
            .iter()
            .find(|s| s.host_markers.iter().any(|m| host.contains(m)))
        {
            return Some(site);
        }
    }

    registry.default_site()
}

fn preference_key(site: &SiteDescriptor) -> String {
    format!("{}_lang", site.storage_prefix)
}

/// Single-locale sites ignore stored preferences entirely.
pub fn resolve_locale(site: &SiteDescriptor, stored: Option<&str>) -> Locale {
    if site.supported_locales.len() == 1 {
        return site.default_locale;
    }

    stored
        .and_then(|s| s.parse::<Locale>().ok())
        .filter(|l| site.supports(*l))
        .unwrap_or(site.default_locale)
}

/// Site + locale pair handed to every rendering component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleContext {
    pub site: &'static SiteDescriptor,
    pub locale: Locale,
}

impl LocaleContext {
    /// Context for a build-time render: the site's default locale, no stored state.
    pub fn for_render(site: &'static SiteDescriptor) -> Self {
        Self {
            site,
            locale: site.default_locale,
        }
    }

    /// Context for a runtime visit, honouring a persisted preference.
    pub fn from_store(site: &'static SiteDescriptor, store: &dyn PreferenceStore) -> Self {
        let stored = store.get(&preference_key(site));
        Self {
            site,
            locale: resolve_locale(site, stored.as_deref()),
        }
    }

    /// Inline translation: `t("Buchen", "Book")`.
    pub fn t<'a>(&self, de: &'a str, en: &'a str) -> &'a str {
        match self.locale {
            Locale::De => de,
            Locale::En => en,
        }
    }

    pub fn is_bilingual(&self) -> bool {
        self.site.is_bilingual()
    }

    pub fn is_de(&self) -> bool {
        self.locale == Locale::De
    }

    /// Switch locale and persist it. Unsupported locales are ignored.
    pub fn set_locale(&mut self, locale: Locale, store: &mut dyn PreferenceStore) -> bool {
        if !self.site.supports(locale) {
            return false;
        }
        self.locale = locale;
        store.set(&preference_key(self.site), locale.as_str());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{AMA, GIW};

    #[test]
    fn test_explicit_id_beats_hostname() {
        let registry = SiteRegistry::builtin();
        let site = resolve_site(&registry, Some("ama"), Some("www.goiconicway.com")).unwrap();
        assert_eq!(site.id, "ama");
    }

    #[test]
    fn test_hostname_detection() {
        let registry = SiteRegistry::builtin();
        let id = |host| resolve_site(&registry, None, host).map(|s| s.id);
        assert_eq!(id(Some("www.goiconicway.com")), Some("giw"));
        assert_eq!(id(Some("iconicpathways.net")), Some("giw"));
        assert_eq!(id(Some("www.abenteuermietenamerika.de")), Some("ama"));
        assert_eq!(id(Some("localhost")), Some("ama"));
        assert_eq!(id(None), Some("ama"));
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        static NONE: [SiteDescriptor; 0] = [];
        let registry = SiteRegistry::new(&NONE);
        assert!(resolve_site(&registry, Some("ama"), None).is_none());
        assert!(resolve_site(&registry, None, Some("www.goiconicway.com")).is_none());
        assert!(resolve_site(&registry, None, None).is_none());
    }

    #[test]
    fn test_single_locale_site_ignores_preference() {
        assert_eq!(resolve_locale(&GIW, Some("de")), Locale::En);
    }

    #[test]
    fn test_bilingual_site_honours_valid_preference() {
        assert_eq!(resolve_locale(&AMA, Some("en")), Locale::En);
        assert_eq!(resolve_locale(&AMA, Some("fr")), Locale::De);
        assert_eq!(resolve_locale(&AMA, None), Locale::De);
    }

    #[test]
    fn test_translation_helper() {
        let de = LocaleContext::for_render(&AMA);
        let en = LocaleContext::for_render(&GIW);
        assert_eq!(de.t("Buchen", "Book"), "Buchen");
        assert_eq!(en.t("Buchen", "Book"), "Book");
    }

    #[test]
    fn test_set_locale_persists_and_respects_support() {
        let mut store = MemoryPreferences::new();

        let mut ama = LocaleContext::for_render(&AMA);
        assert!(ama.set_locale(Locale::En, &mut store));
        assert_eq!(store.get("ama_lang").as_deref(), Some("en"));
        assert_eq!(LocaleContext::from_store(&AMA, &store).locale, Locale::En);

        let mut giw = LocaleContext::for_render(&GIW);
        assert!(!giw.set_locale(Locale::De, &mut store));
        assert_eq!(giw.locale, Locale::En);
        assert!(store.get("giw_lang").is_none());
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
        assert!("DE".parse::<Locale>().is_err());
        assert_eq!(Locale::En.og_locale(), "en_US");
    }
}
