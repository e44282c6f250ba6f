use crate::content::NAV_ITEMS;
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

/// Site header with navigation and, on bilingual sites, the language switch.
#[component]
pub fn Header(ctx: LocaleContext) -> impl IntoView {
    let nav = NAV_ITEMS
        .iter()
        .map(|(href, label)| {
            view! {
                <li><a href={*href}>{label.get(&ctx)}</a></li>
            }
        })
        .collect_view();

    let switch = ctx.is_bilingual().then(|| {
        let buttons = ctx
            .site
            .supported_locales
            .iter()
            .map(|locale| {
                let class = if *locale == ctx.locale { "lang-btn active" } else { "lang-btn" };
                view! {
                    <button type="button" class=class data-lang={locale.as_str()}>
                        {locale.as_str().to_uppercase()}
                    </button>
                }
            })
            .collect_view();
        view! { <div class="lang-switch">{buttons}</div> }
    });

    view! {
        <header class="site-header" data-site={ctx.site.id}>
            <div class="container header-inner">
                <a href="/" class="logo">{ctx.site.site_name}</a>
                <nav aria-label={ctx.t("Hauptnavigation", "Main navigation")}>
                    <ul class="nav-links">{nav}</ul>
                </nav>
                {switch}
                <a href="/#booking-bar" class="btn-main header-cta">
                    {ctx.t("Abenteuer Starten", "Start Adventure")}
                </a>
            </div>
        </header>
    }
}

#[component]
pub fn Footer(ctx: LocaleContext) -> impl IntoView {
    let site = ctx.site;
    let mailto = format!("mailto:{}", site.contact_email);

    view! {
        <footer role="contentinfo" aria-label={ctx.t("Fußzeile", "Footer")}>
            <div class="container">
                <div class="footer-content">
                    <div class="footer-col">
                        <h3>{ctx.t("Kontakt", "Contact")}</h3>
                        <p>
                            <a href={site.endpoints.whatsapp_url} target="_blank" rel="noopener noreferrer">
                                "WhatsApp"
                            </a>
                        </p>
                        <p>{ctx.t("Büro: +1 (323) 917-7708", "Office: +1 (323) 917-7708")}</p>
                        <p><a href=mailto>{site.contact_email}</a></p>
                        <p>{ctx.t("Mo-So: 9:00 - 18:00 Uhr", "Mon-Sun: 9:00 AM - 6:00 PM")}</p>
                        <p>"6445 S Tenaya Way, Suite 110, Las Vegas, NV 89113"</p>
                    </div>
                    <div class="footer-col">
                        <h3>{ctx.t("Navigation", "Sitemap")}</h3>
                        <p><a href="/flotte">{ctx.t("Flotte", "Fleet")}</a></p>
                        <p><a href="/routen">{ctx.t("Routen", "Routes")}</a></p>
                        <p><a href="/preise">{ctx.t("Preise", "Pricing")}</a></p>
                    </div>
                    <div class="footer-col">
                        <h3>{ctx.t("Rechtliches", "Legal")}</h3>
                        <p><a href="#" data-modal="terms">{ctx.t("AGB & Mietbedingungen", "Terms & Rental Conditions")}</a></p>
                        <p><a href="#" data-modal="privacy">{ctx.t("Datenschutz", "Privacy Policy")}</a></p>
                        <p><a href="#" data-modal="imprint">{ctx.t("Impressum", "Imprint")}</a></p>
                        <p><a href="#" data-consent-settings="true">{ctx.t("Cookie-Einstellungen", "Cookie Settings")}</a></p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("\u{a9} 2026 {}", site.company_dba)}</p>
                    <p>{ctx.t("Alle Preise in USD.", "All prices in USD.")}</p>
                </div>
            </div>
        </footer>
    }
}
