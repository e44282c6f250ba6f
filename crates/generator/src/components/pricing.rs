use crate::content::{FAQ, FEES, PRICING_TIERS, PricingTier};
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

fn tier_card(tier: &'static PricingTier, ctx: &LocaleContext) -> impl IntoView + use<> {
    let included = tier
        .included
        .iter()
        .map(|item| view! { <li class="included">{item.get(ctx)}</li> })
        .collect_view();
    let extras = tier
        .extras
        .iter()
        .map(|item| view! { <li class="extra">{item.get(ctx)}</li> })
        .collect_view();

    view! {
        <article class={format!("pricing-card {}", tier.tier_class)} data-tier={tier.id}>
            <span class="tier-badge">{tier.tier_label.get(ctx)}</span>
            <h3>{tier.name}</h3>
            <p class="tier-tagline">{tier.tagline.get(ctx)}</p>
            <p class="tier-price">
                <span class="from">{ctx.t("ab", "from")}</span>
                " "
                <strong>{format!("${}", tier.daily_price)}</strong>
                {ctx.t("/Tag", "/day")}
            </p>
            <ul class="tier-features">{included}{extras}</ul>
            <a href="/#booking-bar" class="btn-main">{ctx.t("Jetzt Buchen", "Book Now")}</a>
        </article>
    }
}

#[component]
pub fn PricingTiers(ctx: LocaleContext) -> impl IntoView {
    let cards = PRICING_TIERS.iter().map(|tier| tier_card(tier, &ctx)).collect_view();
    let fees = FEES.iter().map(|fee| view! { <li>{fee.get(&ctx)}</li> }).collect_view();

    view! {
        <section id="pricing" class="pricing-section">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Preise & Pakete", "Pricing & Packages")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Transparente Tagespreise. Versicherung, Supercharging und Ausrüstung inklusive.",
                            "Transparent daily rates. Insurance, Supercharging and gear included.",
                        )}
                    </p>
                </div>
                <div class="pricing-grid">{cards}</div>
                <div class="fees-notice">
                    <h3>{ctx.t("Zusätzliche Gebühren", "Additional Fees")}</h3>
                    <ul class="fee-list">{fees}</ul>
                </div>
            </div>
        </section>
    }
}

/// FAQ entries as native `<details>` so answers stay readable without script.
#[component]
pub fn FaqAccordion(ctx: LocaleContext) -> impl IntoView {
    let items = FAQ
        .iter()
        .map(|item| {
            view! {
                <details class="faq-item">
                    <summary>{item.question.get(&ctx)}</summary>
                    <p>{item.answer.get(&ctx)}</p>
                </details>
            }
        })
        .collect_view();

    view! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="sec-title">{ctx.t("Häufige Fragen", "Frequently Asked Questions")}</h2>
                <div class="faq-list">{items}</div>
            </div>
        </section>
    }
}
