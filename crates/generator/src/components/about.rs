use crate::content::{
    APP_FEATURES, FOUNDER_CARDS, FOUNDER_NAME, FOUNDER_QUOTE, FounderCard, Paragraph, TESTIMONIALS,
};
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

#[component]
pub fn Testimonials(ctx: LocaleContext) -> impl IntoView {
    let cards = TESTIMONIALS
        .iter()
        .map(|item| {
            view! {
                <div class="testimonial-card">
                    <div class="avatar-wrapper">
                        <img src={format!("/assets/images/{}", item.image)} class="avatar-img" alt={item.alt} loading="lazy" />
                    </div>
                    <div class="testimonial-content">
                        <p class="testimonial-quote">{item.quote.get(&ctx)}</p>
                        <div class="author-info">
                            <h4>{item.name}</h4>
                            <p>{item.detail.get(&ctx)}</p>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="testimonials">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Kundenbewertungen", "Customer Reviews")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Geschichten von Reisenden, die Amerika mit E-Autos über unsere Plattform erkundet haben.",
                            "Stories from travelers who explored America with EVs booked through our platform.",
                        )}
                    </p>
                </div>
                <div class="testimonials-grid">{cards}</div>
            </div>
        </section>
    }
}

fn paragraph(para: &'static Paragraph, ctx: &LocaleContext) -> impl IntoView + use<> {
    let lead = para.lead.map(|b| view! { <strong>{b.get(ctx)}</strong> });
    let tail = para.tail.map(|b| view! { <strong>{b.get(ctx)}</strong> });
    view! { <p>{lead}{para.text.get(ctx)}{tail}</p> }
}

fn founder_card(card: &'static FounderCard, ctx: &LocaleContext) -> impl IntoView + use<> {
    let class = match card.accent {
        Some(accent) => format!("founder-card {}", accent),
        None => "founder-card".to_string(),
    };
    let paragraphs = card
        .paragraphs
        .iter()
        .map(|para| paragraph(para, ctx))
        .collect_view();

    view! {
        <div class=class>
            <div class="founder-card-label">{card.label.get(ctx)}</div>
            {paragraphs}
        </div>
    }
}

#[component]
pub fn Founder(ctx: LocaleContext) -> impl IntoView {
    let cards = FOUNDER_CARDS
        .iter()
        .map(|card| founder_card(card, &ctx))
        .collect_view();
    let alt = format!(
        "{} - {} {} {}",
        FOUNDER_NAME,
        ctx.t("Gründerin", "Founder"),
        ctx.site.site_name,
        ctx.t("Tesla Camping Buchungsplattform", "Tesla Camping Booking Platform"),
    );

    view! {
        <section id="founder">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Die Gründerin", "Meet the Founder")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Grenzenlos reisen. Intelligent geplant. Sicheres Ankommen.",
                            "Travel without limits. Intelligently planned. Safe arrival.",
                        )}
                    </p>
                </div>
                <article class="founder-magazine">
                    <div class="founder-photo">
                        <img src="/assets/images/anja-founder.jpg" alt=alt loading="lazy" width="400" height="500" />
                    </div>
                    <div class="founder-cards-column">
                        {cards}
                        <div class="founder-signature">{format!("~ {}", FOUNDER_NAME)}</div>
                        <p class="founder-quote">{FOUNDER_QUOTE.get(&ctx)}</p>
                    </div>
                </article>
            </div>
        </section>
    }
}

/// Companion app teaser. The download button is inert until the client bundle
/// loads.
#[component]
pub fn AppPortal(ctx: LocaleContext) -> impl IntoView {
    let features = APP_FEATURES
        .iter()
        .map(|(icon, label)| {
            view! {
                <div class="af-item">
                    <div class="af-icon"><i class={*icon}></i></div>
                    <span>{label.get(&ctx)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="app-portal">
            <div class="container">
                <div class="portal-glass">
                    <div class="portal-content">
                        <div class="portal-badge">{ctx.t("Bei jeder Buchung inklusive", "Included with Every Booking")}</div>
                        <h2 class="portal-title">{ctx.t("Ihr digitaler Co-Pilot", "Your Digital Co-Pilot")}</h2>
                        <p class="portal-subtitle">
                            {ctx.t(
                                "Vergessen Sie Reichweitenangst. Unsere eigenständige App liest die Tesla-Telemetrie und verwandelt jeden Kilometer in ein Erlebnis \u{2014} mit 7 KI-Reisepersönlichkeiten, versteckten Nationalpark-Highlights und Ladestopps so präzise berechnet, dass Sorge nicht entstehen kann.",
                                "Forget range anxiety. Our standalone app reads Tesla telemetry and transforms every mile into an experience \u{2014} with 7 AI travel personas, hidden national park highlights, and charging stops calculated so precisely that worry can't arise.",
                            )}
                        </p>
                        <div class="app-features">{features}</div>
                    </div>
                    <div class="interface-preview">
                        <div class="ai-pulse-orb"></div>
                        <div class="interface-card">
                            <div class="card-label">"Klausy \u{2014} Travel Bestie"</div>
                            <div class="card-text">
                                "\u{201c}Route nach Zion optimiert! Ankunft mit 18% Batterie. Supercharger-Stop in St. George eingeplant. Psst: 10 Min vom Charger liegt ein versteckter Wasserfall \u{2014} 4.9 Sterne, kaum Touristen.\u{201d}"
                            </div>
                        </div>
                        <div class="route-visual">
                            <div class="rv-point">
                                <span class="rv-code">"LAS"</span>
                                <span class="rv-time">"10:00 AM"</span>
                            </div>
                            <div class="rv-line"></div>
                            <div class="rv-point">
                                <span class="rv-code">"ZION"</span>
                                <span class="rv-time">"02:45 PM"</span>
                            </div>
                        </div>
                        <button class="app-download-btn" type="button">
                            <i class="fas fa-download"></i>
                            " "
                            <span>{ctx.t("Die App Herunterladen", "Download the App")}</span>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_ssg_core::Locale;
    use roadtrip_ssg_core::site::{AMA, GIW};

    #[test]
    fn test_founder_alt_names_the_rendering_site() {
        let ctx = LocaleContext {
            site: &AMA,
            locale: Locale::En,
        };
        let html = view! { <Founder ctx=ctx /> }.to_html();
        assert!(html.contains("Anja Gutierrez - Founder Abenteuer Mieten Amerika"));
        assert!(!html.contains(GIW.site_name));
    }

    #[test]
    fn test_founder_story_bold_segments() {
        let html = view! { <Founder ctx={LocaleContext::for_render(&GIW)} /> }.to_html();
        assert!(html.contains("<strong>So can you.</strong>"));
        assert!(html.contains("<strong>The Digital Co-Pilot</strong>"));
        assert!(html.contains(r#"class="founder-card blue""#));
    }

    #[test]
    fn test_testimonials_follow_locale() {
        let de = view! { <Testimonials ctx={LocaleContext::for_render(&AMA)} /> }.to_html();
        let en = view! { <Testimonials ctx={LocaleContext::for_render(&GIW)} /> }.to_html();
        assert_eq!(de.matches("testimonial-card").count(), 3);
        assert!(de.contains("Kundenbewertungen"));
        assert!(en.contains("Customer Reviews"));
    }
}
