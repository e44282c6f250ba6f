use crate::content::{COMPARISON, SUPERCHARGING_INCLUDED, VEHICLES, Vehicle};
use leptos::prelude::*;
use roadtrip_ssg_core::LocaleContext;

fn vehicle_card(vehicle: &'static Vehicle, ctx: &LocaleContext) -> impl IntoView + use<> {
    let stats = vehicle
        .stats
        .iter()
        .map(|stat| {
            view! {
                <div class="stat-row">
                    <span class="stat-label">{stat.label.get(ctx)}</span>
                    <div class="stat-bar"><div class="stat-fill" style={format!("width: {}%", stat.fill)}></div></div>
                    <span class="stat-value">{stat.value}</span>
                </div>
            }
        })
        .collect_view();
    let specs = vehicle
        .quick_specs
        .iter()
        .map(|spec| view! { <span class="quick-spec">{spec.get(ctx)}</span> })
        .collect_view();
    let equipment = vehicle
        .equipment
        .iter()
        .map(|item| view! { <li>{item.get(ctx)}</li> })
        .collect_view();

    view! {
        <article class={format!("vehicle-card {}", vehicle.tier_class)} data-vehicle={vehicle.id} data-kind={vehicle.kind}>
            <div class="card-front">
                <img src={format!("/assets/images/{}", vehicle.image)} alt={vehicle.name} loading="lazy" />
                <span class="tier-badge">{vehicle.tier_label.get(ctx)}</span>
                <span class="kind-badge">{vehicle.kind_label.get(ctx)}</span>
                <h3>{vehicle.name}</h3>
                <p class="price">
                    <strong>{format!("${}", vehicle.daily_price)}</strong>
                    {ctx.t("/Tag", "/day")}
                </p>
                <div class="quick-specs">{specs}</div>
            </div>
            <div class="card-back">
                <div class="stats">{stats}</div>
                <h4>{ctx.t("Ausrüstung", "Equipment")}</h4>
                <ul class="equipment">{equipment}</ul>
                <p class="supercharging">{SUPERCHARGING_INCLUDED.get(ctx)}</p>
            </div>
        </article>
    }
}

#[component]
pub fn FleetGrid(ctx: LocaleContext) -> impl IntoView {
    let cards = VEHICLES
        .iter()
        .map(|vehicle| vehicle_card(vehicle, &ctx))
        .collect_view();

    view! {
        <section id="fleet" class="fleet-section">
            <div class="container">
                <div class="sec-head">
                    <h2 class="sec-title">{ctx.t("Unsere E-Flotte", "Our E-Fleet")}</h2>
                    <p class="sec-sub">
                        {ctx.t(
                            "Jedes Fahrzeug kommt mit kompletter Camping-Ausrüstung, Versicherung und Supercharging.",
                            "Every vehicle comes with complete camping gear, insurance and Supercharging.",
                        )}
                    </p>
                </div>
                <div class="fleet-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ComparisonTable(ctx: LocaleContext) -> impl IntoView {
    let rows = COMPARISON
        .iter()
        .map(|(label, cells)| {
            let cells = cells.iter().map(|cell| view! { <td>{*cell}</td> }).collect_view();
            view! {
                <tr>
                    <th scope="row">{label.get(&ctx)}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="comparison-section">
            <div class="container">
                <h2 class="sec-title">{ctx.t("Fahrzeugvergleich", "Vehicle Comparison")}</h2>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th scope="col"></th>
                            <th scope="col">"Budget"</th>
                            <th scope="col">"Comfort"</th>
                            <th scope="col">"Off-Grid"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <p class="table-note">
                    {ctx.t(
                        "* Reichweite mit Dachzelt reduziert.",
                        "* Range reduced with rooftop tent.",
                    )}
                </p>
            </div>
        </section>
    }
}
