//! Server-rendered page bodies.
//!
//! Components take the [`LocaleContext`] as a plain prop and hold no reactive
//! state, so rendering needs no runtime.

mod about;
mod fleet;
mod layout;
mod pricing;
mod sections;
mod trips;

pub use about::{AppPortal, Founder, Testimonials};
pub use fleet::{ComparisonTable, FleetGrid};
pub use layout::{Footer, Header};
pub use pricing::{FaqAccordion, PricingTiers};
pub use sections::{BookingBar, Cta, Hero, ValueProposition};
pub use trips::{HowRoutesWork, RouteCatalog};

use crate::pages::Page;
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

#[component]
pub fn HomePage(ctx: LocaleContext) -> impl IntoView {
    view! {
        <Header ctx=ctx />
        <main>
            <Hero ctx=ctx />
            <BookingBar ctx=ctx />
            <ValueProposition ctx=ctx />
            <FleetGrid ctx=ctx />
            <RouteCatalog ctx=ctx />
            <Testimonials ctx=ctx />
            <Founder ctx=ctx />
            <AppPortal ctx=ctx />
            <Cta ctx=ctx />
        </main>
        <Footer ctx=ctx />
    }
}

#[component]
pub fn FleetPage(ctx: LocaleContext) -> impl IntoView {
    view! {
        <Header ctx=ctx />
        <main>
            <FleetGrid ctx=ctx />
            <ComparisonTable ctx=ctx />
            <BookingBar ctx=ctx />
        </main>
        <Footer ctx=ctx />
    }
}

#[component]
pub fn TripsPage(ctx: LocaleContext) -> impl IntoView {
    view! {
        <Header ctx=ctx />
        <main>
            <HowRoutesWork ctx=ctx />
            <RouteCatalog ctx=ctx />
            <BookingBar ctx=ctx />
        </main>
        <Footer ctx=ctx />
    }
}

#[component]
pub fn PricingPage(ctx: LocaleContext) -> impl IntoView {
    view! {
        <Header ctx=ctx />
        <main>
            <PricingTiers ctx=ctx />
            <BookingBar ctx=ctx />
            <FaqAccordion ctx=ctx />
        </main>
        <Footer ctx=ctx />
    }
}

#[component]
pub fn NotFoundPage(ctx: LocaleContext) -> impl IntoView {
    view! {
        <Header ctx=ctx />
        <main class="not-found">
            <h1>"404"</h1>
            <p>{ctx.t("Diese Seite existiert nicht.", "This page does not exist.")}</p>
            <a href="/" class="btn-main">{ctx.t("Zur Startseite", "Back to Home")}</a>
        </main>
        <Footer ctx=ctx />
    }
}

/// Render the body markup for `page`.
pub fn render_body(page: Page, ctx: LocaleContext) -> String {
    match page {
        Page::Home => view! { <HomePage ctx=ctx /> }.to_html(),
        Page::Fleet => view! { <FleetPage ctx=ctx /> }.to_html(),
        Page::Trips => view! { <TripsPage ctx=ctx /> }.to_html(),
        Page::Pricing => view! { <PricingPage ctx=ctx /> }.to_html(),
        Page::NotFound => view! { <NotFoundPage ctx=ctx /> }.to_html(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadtrip_ssg_core::site::{AMA, GIW};

    fn assert_in_order(html: &str, markers: &[&str]) {
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{markers:?}");
    }

    #[test]
    fn test_home_section_order() {
        let html = render_body(Page::Home, LocaleContext::for_render(&AMA));
        assert_in_order(
            &html,
            &[
                r#"class="hero""#,
                r#"id="booking-bar""#,
                r#"class="value-proposition""#,
                r#"id="fleet""#,
                r#"id="routes""#,
                r#"id="testimonials""#,
                r#"id="founder""#,
                r#"id="app-portal""#,
                r#"class="cta-section""#,
            ],
        );
        assert!(!html.contains(r#"id="faq""#));
    }

    #[test]
    fn test_fleet_ends_with_booking() {
        let html = render_body(Page::Fleet, LocaleContext::for_render(&GIW));
        assert_in_order(
            &html,
            &[r#"id="fleet""#, r#"class="comparison-section""#, r#"id="booking-bar""#],
        );
        assert!(!html.contains("cta-section"));
    }

    #[test]
    fn test_trips_explains_routes_before_catalog() {
        let html = render_body(Page::Trips, LocaleContext::for_render(&AMA));
        assert_in_order(
            &html,
            &[r#"class="how-routes-work""#, r#"id="routes""#, r#"id="booking-bar""#],
        );
        assert_eq!(html.matches(r#"class="route-step""#).count(), 4);
    }

    #[test]
    fn test_pricing_fees_inside_tiers() {
        let html = render_body(Page::Pricing, LocaleContext::for_render(&GIW));
        assert_in_order(
            &html,
            &[r#"id="pricing""#, r#"class="fees-notice""#, r#"id="booking-bar""#, r#"id="faq""#],
        );
    }

    #[test]
    fn test_booking_form_offers_form_locations_only() {
        let html = render_body(Page::Home, LocaleContext::for_render(&GIW));
        assert!(html.contains(r#"<option value="Los Angeles">Los Angeles, CA</option>"#));
        assert!(html.contains(r#"<option value="Las Vegas">Las Vegas, NV</option>"#));
        assert!(!html.contains(r#"value="San Francisco""#));
    }
}
