use crate::content::{PICKUP_LOCATIONS, VALUE_PROPS};
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

#[component]
pub fn Hero(ctx: LocaleContext) -> impl IntoView {
    let pills = [
        ctx.t("Supercharger Inklusive", "Free Supercharging"),
        ctx.t("Geprüfte Exklusivpartner", "Exclusively Vetted Partners"),
        ctx.t("KI-Concierge", "AI Concierge"),
        ctx.t("Camping-Ausrüstung", "Camping Gear"),
    ]
    .into_iter()
    .map(|text| view! { <span class="opal-pill">{text}</span> })
    .collect_view();

    view! {
        <section class="hero">
            <div class="hero-bg">
                <img class="hero-static-image" src="/assets/images/hero-poster.jpg" alt="" />
                <div class="hero-overlay"></div>
            </div>
            <div class="container hero-container">
                <div class="hero-content">
                    <span class="hero-badge">{ctx.t("USA Roadtrip Spezialist", "USA Roadtrip Specialist")}</span>
                    <h1 class="hero-title">
                        {ctx.t("Erlebe den ultimativen", "Experience the ultimate")}
                        " "
                        <span class="highlight">{ctx.t("Tesla Roadtrip", "Tesla Road Trip")}</span>
                    </h1>
                    <p class="hero-desc">
                        {ctx.t(
                            "Vollelektrische Fahrzeuge mit Camping-Ausrüstung, Versicherung und Supercharging. Ab $119/Tag.",
                            "All-electric vehicles with camping gear, insurance and Supercharging. From $119/day.",
                        )}
                    </p>
                    <div class="hero-pills">{pills}</div>
                    <div class="hero-actions btn-group">
                        <a href="#booking-bar" class="btn-main">{ctx.t("Abenteuer Starten", "Start Adventure")}</a>
                    </div>
                </div>
                <div class="stats-box">
                    <div class="stat"><strong>"0g"</strong><span>{ctx.t("CO\u{2082} Emissionen", "CO\u{2082} Emissions")}</span></div>
                    <div class="stat"><strong>{ctx.t("530km", "330mi")}</strong><span>{ctx.t("Reichweite", "Range")}</span></div>
                    <div class="stat"><strong>{ctx.t("KI", "AI")}</strong><span>{ctx.t("Routenplanung", "Route Planning")}</span></div>
                </div>
            </div>
        </section>
    }
}

/// Vehicle options posted by the booking form. Values are the backend's
/// vehicle type keys.
const BOOKING_VEHICLES: &[(&str, &str)] = &[
    ("tesla_model_y", "Model Y (Camping Suite)"),
    ("tesla_cybertruck", "Cybertruck (Off-Grid)"),
    ("tesla_model_3", "Model Y (Budget)"),
];

/// Static booking form; the client bundle takes over submission.
#[component]
pub fn BookingBar(ctx: LocaleContext) -> impl IntoView {
    let locations = PICKUP_LOCATIONS
        .iter()
        .map(|(value, label)| view! { <option value={*value}>{*label}</option> })
        .collect_view();
    let vehicles = BOOKING_VEHICLES
        .iter()
        .map(|(value, label)| view! { <option value={*value}>{*label}</option> })
        .collect_view();

    view! {
        <section id="booking-bar">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Ihr Roadtrip-Concierge", "Your Roadtrip Concierge")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Ihre Buchungsplattform für Tesla Roadtrip-Abenteuer. Wir sind Ihr Partner für elektrische Mobilität in den USA.",
                            "Your booking platform for Tesla Roadtrip adventures. We're your partner for electric mobility in the USA.",
                        )}
                    </p>
                </div>
                <div class="booking-widget horizontal-bar">
                    <form class="widget-form" method="post" action={ctx.site.endpoints.checkout_api_url} data-source={ctx.site.endpoints.booking_source}>
                        <div class="input-group">
                            <label for="pickup-location">{ctx.t("Abholung", "Pickup")}</label>
                            <select id="pickup-location" class="input-field" name="pickupLocation">{locations}</select>
                        </div>
                        <div class="input-group">
                            <label for="pickup-date">{ctx.t("Start", "Start")}</label>
                            <input id="pickup-date" type="date" class="input-field" name="pickupDate" />
                        </div>
                        <div class="input-group">
                            <label for="dropoff-date">{ctx.t("Rückgabe", "Return")}</label>
                            <input id="dropoff-date" type="date" class="input-field" name="dropoffDate" />
                        </div>
                        <div class="input-group">
                            <label for="vehicle-type">{ctx.t("Fahrzeug Wählen", "Choose Vehicle")}</label>
                            <select id="vehicle-type" class="input-field" name="vehicleType">
                                <option value="">{ctx.t("Fahrzeug wählen", "Choose Vehicle")}</option>
                                {vehicles}
                            </select>
                        </div>
                        <button class="check-btn" type="submit">
                            {ctx.t("Verfügbarkeit Prüfen", "Check Availability")}
                        </button>
                    </form>
                    <p class="booking-note">
                        {ctx.t("Neue Abholorte werden laufend hinzugefügt.", "New pickup locations added regularly.")}
                        " "
                        <a href={ctx.site.endpoints.whatsapp_url} target="_blank" rel="noopener noreferrer">
                            {ctx.t("Schreib uns", "Text us")}
                        </a>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ValueProposition(ctx: LocaleContext) -> impl IntoView {
    let cards = VALUE_PROPS
        .iter()
        .map(|prop| {
            view! {
                <div class="value-card">
                    <h3>{prop.title.get(&ctx)}</h3>
                    <p>{prop.text.get(&ctx)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="value-proposition">
            <div class="container">
                <div class="value-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Cta(ctx: LocaleContext) -> impl IntoView {
    view! {
        <section class="cta-section" id="kontakt">
            <div class="container">
                <h2 class="cta-title">{ctx.t("Bereit für Ihr USA-Abenteuer?", "Ready for Your USA Adventure?")}</h2>
                <p class="cta-text">
                    {ctx.t(
                        "Starten Sie noch heute mit der Planung Ihres ultimativen Roadtrips. Unser Team steht Ihnen 24/7 zur Verfügung.",
                        "Start planning your ultimate road trip today. Our team is available 24/7.",
                    )}
                </p>
                <a href={ctx.site.endpoints.whatsapp_url} class="btn-main" target="_blank" rel="noopener noreferrer">
                    {ctx.t("Jetzt Kontaktieren", "Contact Us Now")}
                </a>
            </div>
        </section>
    }
}
