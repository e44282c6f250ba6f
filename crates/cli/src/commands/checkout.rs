use anyhow::{Context, Result};
use chrono::Local;
use roadtrip_ssg_checkout::{
    BookingRequest, CheckoutError, HttpCheckout, PickupLocation, VehicleType, submit_booking,
};
use roadtrip_ssg_core::{LocaleContext, SiteRegistry};

pub async fn run(
    site_id: String,
    vehicle: VehicleType,
    pickup: String,
    dropoff: String,
    location: PickupLocation,
    email: String,
) -> Result<()> {
    let registry = SiteRegistry::builtin();
    let site = registry.find(&site_id).with_context(|| {
        format!(
            "Unknown site '{}'. Known sites: {}",
            site_id,
            registry.ids().join(", ")
        )
    })?;
    let ctx = LocaleContext::for_render(site);
    let gateway = HttpCheckout::for_site(site);

    println!("🧾 Submitting booking via {}...", gateway.endpoint());

    let booking = BookingRequest {
        vehicle,
        pickup_date: pickup,
        dropoff_date: dropoff,
        location,
        email,
    };

    match submit_booking(&gateway, &ctx, &booking, Local::now().date_naive()).await {
        Ok(url) => {
            println!("✅ Checkout ready: {}", url);
            Ok(())
        }
        Err(CheckoutError::Invalid(e)) => anyhow::bail!("{}", e.message(ctx.locale)),
        Err(e) => Err(e).context("Checkout failed"),
    }
}
