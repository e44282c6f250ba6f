use anyhow::Result;
use roadtrip_ssg_checkout::{VehicleType, estimate};

pub fn run(vehicle: VehicleType, pickup: &str, dropoff: &str) -> Result<()> {
    let Some(est) = estimate(vehicle, pickup, dropoff) else {
        anyhow::bail!(
            "No estimate: dates must be YYYY-MM-DD and the return must follow the pickup"
        );
    };

    println!("{} ({} → {})", vehicle, pickup, dropoff);
    println!("   {} days × ${}/day = ${}", est.days, est.daily_rate, est.subtotal);
    println!("   Service fee:         ${}", est.service_fee);
    println!("   Total (estimate):    ${}", est.total);
    println!();
    println!("Final price is calculated by the checkout service.");
    Ok(())
}
