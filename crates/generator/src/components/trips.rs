use crate::content::{ROUTE_STEPS, TRIPS, Trip};
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

fn trip_card(trip: &'static Trip, ctx: &LocaleContext) -> impl IntoView + use<> {
    let stops = trip
        .stops
        .iter()
        .map(|stop| {
            let distance = stop.distance.map(|d| view! { <span class="stop-distance">{d}</span> });
            let charger = stop
                .charger
                .map(|c| view! { <span class="stop-charger">{c.get(ctx)}</span> });
            view! {
                <li class="route-stop">
                    <strong>{stop.day.get(ctx)}</strong>
                    " "
                    <span class="stop-leg">{stop.leg.get(ctx)}</span>
                    {distance}
                    {charger}
                </li>
            }
        })
        .collect_view();
    let downloads = trip
        .kml
        .iter()
        .map(|kml| {
            view! {
                <a class="kml-download" href={format!("/assets/kml/{}", kml.file)} download={kml.file}>
                    {kml.label.get(ctx)}
                </a>
            }
        })
        .collect_view();

    view! {
        <article class="route-card" id={trip.id}>
            <img src={format!("/assets/images/{}", trip.image)} alt={trip.title} loading="lazy" />
            <div class="route-body">
                <h3>{trip.title}</h3>
                <p class="route-meta">{trip.meta.get(ctx)}</p>
                <p class="route-summary">{trip.summary.get(ctx)}</p>
                <ol class="route-stops">{stops}</ol>
                <div class="route-downloads">{downloads}</div>
            </div>
        </article>
    }
}

#[component]
pub fn RouteCatalog(ctx: LocaleContext) -> impl IntoView {
    let cards = TRIPS.iter().map(|trip| trip_card(trip, &ctx)).collect_view();

    view! {
        <section id="routes" class="routes-section">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Vorgeplante Routen", "Pre-Planned Routes")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Jede Route ist auf Supercharger-Stopps abgestimmt. Laden Sie die KML-Datei für Google Earth herunter.",
                            "Every route is planned around Supercharger stops. Download the KML file for Google Earth.",
                        )}
                    </p>
                </div>
                <div class="route-grid">{cards}</div>
            </div>
        </section>
    }
}

/// Numbered walkthrough from picking a route to camping.
#[component]
pub fn HowRoutesWork(ctx: LocaleContext) -> impl IntoView {
    let steps = ROUTE_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <div class="route-step">
                    <div class="route-step-icon">
                        <i class={step.icon}></i>
                        <span class="route-step-number">{i + 1}</span>
                    </div>
                    <h3>{step.title.get(&ctx)}</h3>
                    <p>{step.text.get(&ctx)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="how-routes-work">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("So funktioniert\u{2019}s", "How It Works")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Von der Routenwahl bis zum Campingplatz \u{2014} in 4 einfachen Schritten.",
                            "From route selection to campsite \u{2014} in 4 simple steps.",
                        )}
                    </p>
                </div>
                <div class="route-steps">{steps}</div>
            </div>
        </section>
    }
}
