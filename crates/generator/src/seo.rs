//! Per-page `<head>` tags: primary meta, Open Graph, Twitter card, canonical
//! and hreflang links, and JSON-LD structured data.
//!
//! Every value comes from the [`LocaleContext`] handed in, so a page rendered
//! for one brand can only ever name that brand.

use crate::analytics::{HeadTagPort, load_site_analytics};
use crate::content::{Bi, FAQ, PRICING_TIERS, VEHICLES};
use crate::escape::{html_escape, script_safe_json};
use crate::pages::Page;
use roadtrip_ssg_core::{HeadElements, Locale, LocaleContext};
use serde_json::{Value, json};

struct PageSeo {
    title: Bi,
    description: Bi,
    og_title: Option<Bi>,
    og_description: Option<Bi>,
}

fn page_seo(page: Page) -> Option<PageSeo> {
    let seo = match page {
        Page::Home => PageSeo {
            title: Bi::new(
                "Tesla Roadtrip-Paket USA | Ihre Buchungsplattform",
                "Tesla Road Trip Package USA | Your Booking Platform",
            ),
            description: Bi::new(
                "Buchen Sie Ihr Tesla Roadtrip-Paket in den USA! Vollelektrische Fahrzeuge mit Camping-Ausrüstung, Versicherung & Supercharging. KI-Routenplaner & vorgeplante Routen: Route 66, Grand Canyon, Yellowstone. Ab $119/Tag.",
                "Book your Tesla road trip package in the USA! All-electric vehicles with camping gear, insurance & Supercharging. AI route planner & pre-planned routes: Route 66, Grand Canyon, Yellowstone. From $119/day.",
            ),
            og_title: Some(Bi::new("Tesla Camping Roadtrip USA", "Tesla Camping Road Trip USA")),
            og_description: Some(Bi::new(
                "Tesla Roadtrip-Paket mit Camping-Ausrüstung, Versicherung & Supercharging. Route 66, Grand Canyon, Yellowstone. Ab $119/Tag.",
                "Tesla road trip package with camping gear, insurance & Supercharging. Route 66, Grand Canyon, Yellowstone. From $119/day.",
            )),
        },
        Page::Fleet => PageSeo {
            title: Bi::new(
                "Tesla Flotte | Model Y, Cybertruck & Model 3",
                "Tesla Fleet | Model Y, Cybertruck & Model 3",
            ),
            description: Bi::new(
                "Unsere Tesla-Flotte: Model Y Camping-Paket, Cybertruck Off-Grid ab $299/Tag, Model Y Budget ab $119/Tag. Alle mit Camping-Ausrüstung, Versicherung & Supercharging.",
                "Our Tesla fleet: Model Y Camping Package, Cybertruck Off-Grid from $299/day, Model Y Budget from $119/day. All with camping gear, insurance & Supercharging.",
            ),
            og_title: None,
            og_description: None,
        },
        Page::Trips => PageSeo {
            title: Bi::new(
                "Nationalpark-Routen | Route 66, Grand Canyon, Yellowstone",
                "National Park Routes | Route 66, Grand Canyon, Yellowstone",
            ),
            description: Bi::new(
                "6 vorgeplante Tesla-Routen: Grand Circle, Route 66, Rocky Mountains, Pacific Coast Highway, San Diego Desert Loop, Lake Michigan. KML-Dateien für Google Earth inklusive.",
                "6 pre-planned Tesla routes: Grand Circle, Route 66, Rocky Mountains, Pacific Coast Highway, San Diego Desert Loop, Lake Michigan. KML files for Google Earth included.",
            ),
            og_title: None,
            og_description: None,
        },
        Page::Pricing => PageSeo {
            title: Bi::new(
                "Preise & Pakete | Ab $119/Tag | Tesla Camping Roadtrip",
                "Pricing & Packages | From $119/day | Tesla Camping Road Trip",
            ),
            description: Bi::new(
                "Tesla Roadtrip-Pakete ab $119/Tag. Budget, Comfort & Off-Grid Pakete. Camping-Ausrüstung, Versicherung, Supercharging & KI-Routenplaner App inklusive.",
                "Tesla road trip packages from $119/day. Budget, Comfort & Off-Grid packages. Camping gear, insurance, Supercharging & AI route planner app included.",
            ),
            og_title: None,
            og_description: None,
        },
        Page::NotFound => return None,
    };
    Some(seo)
}

const KEYWORDS: Bi = Bi::new(
    "Tesla buchen USA, Route 66 Roadtrip, Camping Roadtrip Amerika, E-Auto Buchung Las Vegas, Nationalparks USA, Grand Canyon Tesla, Yellowstone Roadtrip, Dachzelt Tesla, Model Y Camping-Paket, Cybertruck buchen",
    "Tesla rental USA, Route 66 road trip, camping road trip America, EV rental Las Vegas, National Parks USA, Grand Canyon Tesla, Yellowstone road trip, rooftop tent Tesla, Model Y camping package, Cybertruck rental",
);

/// Twitter cards get shorter copy than the Open Graph description.
const TWITTER_DESCRIPTION: Bi = Bi::new(
    "Buchen Sie Ihr Tesla Roadtrip-Paket! Camping & Supercharging inklusive. Route 66, Grand Canyon, Yellowstone. Ab $119/Tag.",
    "Book your Tesla road trip package! Camping & Supercharging included. Route 66, Grand Canyon, Yellowstone. From $119/day.",
);

const OG_IMAGE_ALT: Bi = Bi::new(
    "Tesla Model Y mit Dachzelt vor dem Grand Canyon bei Sonnenuntergang",
    "Tesla Model Y with rooftop tent at the Grand Canyon at sunset",
);

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        html_escape(name),
        html_escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        html_escape(property),
        html_escape(content)
    )
}

fn link(rel: &str, href: &str, hreflang: Option<&str>) -> String {
    match hreflang {
        Some(lang) => format!(
            r#"<link rel="{}" hreflang="{}" href="{}">"#,
            html_escape(rel),
            html_escape(lang),
            html_escape(href)
        ),
        None => format!(
            r#"<link rel="{}" href="{}">"#,
            html_escape(rel),
            html_escape(href)
        ),
    }
}

fn json_ld(value: &Value) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        script_safe_json(&value.to_string())
    )
}

fn title_tag(text: &str) -> String {
    format!("<title>{}</title>", html_escape(text))
}

/// URL of `route` on the partner brand, which serves the other language.
fn partner_url(ctx: &LocaleContext, route: &str) -> String {
    let base = ctx.site.partner_site_url.trim_end_matches('/');
    if route == "/" {
        base.to_string()
    } else {
        format!("{}{}", base, route)
    }
}

/// Collect the head tags for `page` rendered in `ctx`.
pub fn head_for(page: Page, ctx: &LocaleContext) -> HeadElements {
    let mut head = match page_seo(page) {
        Some(seo) => indexable_head(page, &seo, ctx),
        None => not_found_head(ctx),
    };

    let mut tags = HeadTagPort::new();
    load_site_analytics(&mut tags, &ctx.site.analytics);
    head.script.extend(tags.into_tags());

    head
}

fn not_found_head(ctx: &LocaleContext) -> HeadElements {
    let title = format!(
        "{} | {}",
        ctx.t("Seite nicht gefunden", "Page Not Found"),
        ctx.site.site_name
    );
    HeadElements {
        title: Some(title_tag(&title)),
        meta: vec![meta_name("robots", "noindex")],
        ..Default::default()
    }
}

fn indexable_head(page: Page, seo: &PageSeo, ctx: &LocaleContext) -> HeadElements {
    let site = ctx.site;
    let route = page.path();
    let title = format!("{} | {}", seo.title.get(ctx), site.site_name);
    let description = seo.description.get(ctx);
    let og_title = match seo.og_title {
        Some(t) => format!("{} | {}", t.get(ctx), site.site_name),
        None => title.clone(),
    };
    let og_description = seo.og_description.map_or(description, |d| d.get(ctx));
    let canonical = site.page_url(route);
    let image_alt = OG_IMAGE_ALT.get(ctx);

    let mut meta = vec![
        meta_name("title", &title),
        meta_name("description", description),
        meta_name(
            "robots",
            "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1",
        ),
        meta_name("googlebot", "index, follow"),
        meta_name("author", site.company_dba),
        meta_name("publisher", site.company_dba),
        meta_name("copyright", &format!("2026 {}", site.company_dba)),
        meta_name("keywords", KEYWORDS.get(ctx)),
        meta_name("language", ctx.locale.as_str()),
        meta_name("revisit-after", "7 days"),
        meta_name("geo.region", "US-NV"),
        meta_name("geo.placename", "Las Vegas"),
        meta_name("geo.position", "36.1147;-115.1728"),
        meta_name("ICBM", "36.1147, -115.1728"),
        meta_property("og:type", "website"),
        meta_property("og:url", &canonical),
        meta_property("og:title", &og_title),
        meta_property("og:description", og_description),
        meta_property("og:image", site.og_image),
        meta_property("og:image:width", "1200"),
        meta_property("og:image:height", "630"),
        meta_property("og:image:alt", image_alt),
        meta_property("og:locale", ctx.locale.og_locale()),
    ];
    if ctx.is_bilingual() {
        for alt in site.supported_locales.iter().filter(|l| **l != ctx.locale) {
            meta.push(meta_property("og:locale:alternate", alt.og_locale()));
        }
    }
    meta.extend([
        meta_property("og:site_name", site.site_name),
        meta_name("twitter:card", "summary_large_image"),
        meta_name("twitter:url", &canonical),
        meta_name("twitter:title", &og_title),
        meta_name("twitter:description", TWITTER_DESCRIPTION.get(ctx)),
        meta_name("twitter:image", site.og_image),
        meta_name("twitter:image:alt", image_alt),
    ]);

    // The partner brand serves the other language
    let own_lang = site.default_locale;
    let other_lang = match own_lang {
        Locale::De => Locale::En,
        Locale::En => Locale::De,
    };
    let links = vec![
        link("canonical", &canonical, None),
        link("alternate", &canonical, Some(own_lang.as_str())),
        link("alternate", &partner_url(ctx, route), Some(other_lang.as_str())),
        link("alternate", &canonical, Some("x-default")),
    ];

    let mut script = vec![
        json_ld(&local_business_schema(ctx)),
        json_ld(&website_schema(ctx)),
        json_ld(&navigation_schema(ctx)),
    ];
    if matches!(page, Page::Home | Page::Fleet | Page::Pricing) {
        script.push(json_ld(&product_schema(ctx)));
    }
    if matches!(page, Page::Home | Page::Pricing) {
        script.push(json_ld(&faq_schema(ctx)));
    }

    HeadElements {
        title: Some(title_tag(&title)),
        meta,
        link: links,
        script,
    }
}

fn local_business_schema(ctx: &LocaleContext) -> Value {
    let site = ctx.site;
    let base = site.base_url();
    let offers: Vec<Value> = PRICING_TIERS
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": tier.name,
                    "description": tier.tagline.get(ctx),
                },
                "price": tier.daily_price.to_string(),
                "priceCurrency": "USD",
            })
        })
        .collect();
    let languages: Vec<&str> = site.supported_locales.iter().map(|l| l.as_str()).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": format!("{}/#organization", base),
        "name": site.site_name,
        "legalName": site.company_dba,
        "description": ctx.t(
            "Tesla Roadtrip-Paket buchen in Las Vegas: Ihre Buchungsplattform für Camping-Roadtrips mit Ausrüstung, Versicherung & Supercharging.",
            "Book your Tesla road trip package in Las Vegas: your booking platform for camping road trips with gear, insurance & Supercharging.",
        ),
        "url": base,
        "logo": format!("{}/favicon-32.png", base),
        "image": site.og_image,
        "telephone": "+1-323-917-7708",
        "email": site.contact_email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "6445 S Tenaya Way, Suite 110",
            "addressLocality": "Las Vegas",
            "addressRegion": "NV",
            "postalCode": "89113",
            "addressCountry": "US",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "36.1147",
            "longitude": "-115.1728",
        },
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
            "opens": "09:00",
            "closes": "18:00",
        },
        "priceRange": "$119-$299",
        "currenciesAccepted": "USD",
        "knowsLanguage": languages,
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": ctx.t("Tesla Camping Buchung", "Tesla Camping Booking"),
            "itemListElement": offers,
        },
    })
}

fn website_schema(ctx: &LocaleContext) -> Value {
    let base = ctx.site.base_url();
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": ctx.site.site_name,
        "url": base,
        "inLanguage": ctx.locale.as_str(),
    })
}

fn navigation_schema(ctx: &LocaleContext) -> Value {
    let base = ctx.site.base_url();
    let entries = [
        (Bi::new("Preise", "Pricing"), "/preise"),
        (Bi::new("Fahrzeuge", "Vehicles"), "/flotte"),
        (Bi::new("Routen", "Routes"), "/routen"),
        (Bi::new("Kontakt", "Contact"), "/#kontakt"),
    ];
    let graph: Vec<Value> = entries
        .iter()
        .map(|(name, path)| {
            json!({
                "@type": "SiteNavigationElement",
                "name": name.get(ctx),
                "url": format!("{}{}", base, path),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

fn product_schema(ctx: &LocaleContext) -> Value {
    let offers: Vec<Value> = VEHICLES
        .iter()
        .map(|v| {
            json!({
                "@type": "Offer",
                "name": v.name,
                "price": v.daily_price.to_string(),
                "priceCurrency": "USD",
                "availability": "https://schema.org/InStock",
                "url": format!("{}/flotte", ctx.site.base_url()),
            })
        })
        .collect();
    let low = VEHICLES.iter().map(|v| v.daily_price).min().unwrap_or_default();
    let high = VEHICLES.iter().map(|v| v.daily_price).max().unwrap_or_default();

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": ctx.t("Tesla Camping Roadtrip-Paket", "Tesla Camping Road Trip Package"),
        "brand": { "@type": "Brand", "name": ctx.site.site_name },
        "image": ctx.site.og_image,
        "offers": {
            "@type": "AggregateOffer",
            "lowPrice": low.to_string(),
            "highPrice": high.to_string(),
            "priceCurrency": "USD",
            "offerCount": offers.len(),
            "offers": offers,
        },
    })
}

fn faq_schema(ctx: &LocaleContext) -> Value {
    let entries: Vec<Value> = FAQ
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question.get(ctx),
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer.get(ctx),
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_ssg_core::site::{AMA, GIW};

    fn json_ld_scripts(head: &HeadElements) -> Vec<String> {
        head.script
            .iter()
            .filter(|s| s.contains("application/ld+json"))
            .cloned()
            .collect()
    }

    fn has_link(head: &HeadElements, tag: &str) -> bool {
        head.link.iter().any(|l| l == tag)
    }

    #[test]
    fn test_title_carries_site_name() {
        let head = head_for(Page::Fleet, &LocaleContext::for_render(&GIW));
        assert_eq!(
            head.title.as_deref(),
            Some("<title>Tesla Fleet | Model Y, Cybertruck &amp; Model 3 | Go Iconic Way</title>")
        );
    }

    #[test]
    fn test_canonical_and_hreflang() {
        let head = head_for(Page::Pricing, &LocaleContext::for_render(&AMA));
        assert!(has_link(
            &head,
            r#"<link rel="canonical" href="https://www.abenteuermietenamerika.de/preise">"#
        ));
        assert!(has_link(
            &head,
            r#"<link rel="alternate" hreflang="en" href="https://www.goiconicway.com/preise">"#
        ));

        let head = head_for(Page::Home, &LocaleContext::for_render(&GIW));
        assert_eq!(
            head.link[0],
            r#"<link rel="canonical" href="https://www.goiconicway.com">"#
        );
    }

    #[test]
    fn test_twitter_card_has_own_description() {
        let head = head_for(Page::Home, &LocaleContext::for_render(&GIW));
        let twitter = meta_name("twitter:description", TWITTER_DESCRIPTION.en);
        let og = head
            .meta
            .iter()
            .find(|m| m.contains(r#"property="og:description""#))
            .unwrap();
        assert!(head.meta.contains(&twitter));
        assert!(!og.contains("Book your Tesla road trip package!"));

        let ama = head_for(Page::Fleet, &LocaleContext::for_render(&AMA));
        assert!(ama.meta.contains(&meta_name("twitter:description", TWITTER_DESCRIPTION.de)));
    }

    #[test]
    fn test_og_locale_alternate_only_on_bilingual_sites() {
        let ama = head_for(Page::Home, &LocaleContext::for_render(&AMA));
        let giw = head_for(Page::Home, &LocaleContext::for_render(&GIW));
        assert!(ama.meta.iter().any(|m| m.contains("og:locale:alternate") && m.contains("en_US")));
        assert!(!giw.meta.iter().any(|m| m.contains("og:locale:alternate")));
    }

    #[test]
    fn test_structured_data_per_page() {
        let ctx = LocaleContext::for_render(&GIW);
        assert_eq!(json_ld_scripts(&head_for(Page::Home, &ctx)).len(), 5);
        assert_eq!(json_ld_scripts(&head_for(Page::Pricing, &ctx)).len(), 5);
        assert_eq!(json_ld_scripts(&head_for(Page::Fleet, &ctx)).len(), 4);
        assert_eq!(json_ld_scripts(&head_for(Page::Trips, &ctx)).len(), 3);

        let home = head_for(Page::Home, &ctx);
        assert!(home.script.iter().any(|s| s.contains(r#""@type":"FAQPage""#)));
    }

    #[test]
    fn test_not_found_is_noindex() {
        let head = head_for(Page::NotFound, &LocaleContext::for_render(&AMA));
        assert_eq!(
            head.title.as_deref(),
            Some("<title>Seite nicht gefunden | Abenteuer Mieten Amerika</title>")
        );
        assert_eq!(head.meta, vec![r#"<meta name="robots" content="noindex">"#.to_string()]);
        assert!(head.link.is_empty());
    }

    #[test]
    fn test_ga4_tag_present_for_builtin_sites() {
        let head = head_for(Page::Home, &LocaleContext::for_render(&AMA));
        assert!(head.script.iter().any(|s| s.contains("gtag/js?id=G-7LCWYNKB6M")));
        // Placeholder ids stay out
        assert!(!head.script.iter().any(|s| s.contains("fbevents.js")));
    }

    #[test]
    fn test_german_head_text() {
        let head = head_for(Page::Trips, &LocaleContext::for_render(&AMA));
        assert!(head.meta.iter().any(|m| m == r#"<meta name="language" content="de">"#));
        assert!(head.meta.iter().any(|m| m.contains("6 vorgeplante Tesla-Routen")));
    }
}
