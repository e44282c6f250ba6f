//! Booking form model: vehicles, pickup points, the display estimate and
//! input validation.
//!
//! Prices here are for display only. The checkout service recalculates the
//! authoritative price, so nothing price-related is ever sent to it.

use chrono::NaiveDate;
use roadtrip_ssg_core::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One-time service fee added to every estimate, USD.
pub const SERVICE_FEE: u32 = 139;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Vehicle types known to the checkout backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    TeslaModelY,
    TeslaModelX,
    TeslaModel3,
    TeslaCybertruck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::TeslaModelY,
        VehicleType::TeslaModelX,
        VehicleType::TeslaModel3,
        VehicleType::TeslaCybertruck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::TeslaModelY => "tesla_model_y",
            VehicleType::TeslaModelX => "tesla_model_x",
            VehicleType::TeslaModel3 => "tesla_model_3",
            VehicleType::TeslaCybertruck => "tesla_cybertruck",
        }
    }

    /// Display rate, USD per day.
    pub fn daily_rate(self) -> u32 {
        match self {
            VehicleType::TeslaModelY => 149,
            VehicleType::TeslaModelX => 199,
            VehicleType::TeslaModel3 => 119,
            VehicleType::TeslaCybertruck => 299,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                format!("unknown vehicle type '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupLocation {
    #[serde(rename = "Las Vegas")]
    LasVegas,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
}

impl PickupLocation {
    pub const ALL: [PickupLocation; 3] = [
        PickupLocation::LasVegas,
        PickupLocation::LosAngeles,
        PickupLocation::SanFrancisco,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PickupLocation::LasVegas => "Las Vegas",
            PickupLocation::LosAngeles => "Los Angeles",
            PickupLocation::SanFrancisco => "San Francisco",
        }
    }
}

impl fmt::Display for PickupLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PickupLocation {
    type Err = String;

    /// Accepts the display name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pickup location '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceEstimate {
    pub days: i64,
    pub daily_rate: u32,
    pub subtotal: u64,
    pub service_fee: u32,
    pub total: u64,
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Display estimate for a stay, or `None` when the dates don't form a range.
pub fn estimate(vehicle: VehicleType, pickup: &str, dropoff: &str) -> Option<PriceEstimate> {
    let start = parse_date(pickup)?;
    let end = parse_date(dropoff)?;
    if end <= start {
        return None;
    }

    let days = (end - start).num_days();
    let daily_rate = vehicle.daily_rate();
    let subtotal = days as u64 * u64::from(daily_rate);
    Some(PriceEstimate {
        days,
        daily_rate,
        subtotal,
        service_fee: SERVICE_FEE,
        total: subtotal + u64::from(SERVICE_FEE),
    })
}

/// Booking input rejected before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("pickup and return dates are required")]
    MissingDates,
    #[error("dates must be YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("return date must be after the start date")]
    ReturnNotAfterStart,
    #[error("start date is in the past")]
    StartInPast,
    #[error("invalid email address")]
    InvalidEmail,
}

impl BookingError {
    /// Customer-facing message in `locale`.
    pub fn message(self, locale: Locale) -> &'static str {
        let (de, en) = match self {
            BookingError::MissingDates => (
                "Bitte wählen Sie ein Start- und Rückgabedatum.",
                "Please select a start and return date.",
            ),
            BookingError::InvalidDateFormat => {
                ("Ungültiges Datumsformat.", "Invalid date format.")
            }
            BookingError::ReturnNotAfterStart => (
                "Das Rückgabedatum muss nach dem Startdatum liegen.",
                "Return date must be after the start date.",
            ),
            BookingError::StartInPast => (
                "Das Startdatum darf nicht in der Vergangenheit liegen.",
                "Start date cannot be in the past.",
            ),
            BookingError::InvalidEmail => (
                "Bitte geben Sie eine gültige E-Mail-Adresse ein.",
                "Please enter a valid email address.",
            ),
        };
        match locale {
            Locale::De => de,
            Locale::En => en,
        }
    }
}

/// Check a date range against `today`. Checks run in a fixed order, so the
/// first failing rule is the one reported.
pub fn validate_dates(pickup: &str, dropoff: &str, today: NaiveDate) -> Result<(), BookingError> {
    if pickup.trim().is_empty() || dropoff.trim().is_empty() {
        return Err(BookingError::MissingDates);
    }
    let (Some(start), Some(end)) = (parse_date(pickup), parse_date(dropoff)) else {
        return Err(BookingError::InvalidDateFormat);
    };
    if end <= start {
        return Err(BookingError::ReturnNotAfterStart);
    }
    if start < today {
        return Err(BookingError::StartInPast);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(BookingError::InvalidEmail);
    }
    Ok(())
}

/// What the customer filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub vehicle: VehicleType,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub location: PickupLocation,
    pub email: String,
}

impl BookingRequest {
    pub fn validate(&self, today: NaiveDate) -> Result<(), BookingError> {
        validate_dates(&self.pickup_date, &self.dropoff_date, today)?;
        validate_email(&self.email)
    }
}

/// Body posted to the checkout endpoint. Carries no price fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub vehicle_type: VehicleType,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub pickup_location: PickupLocation,
    pub customer_email: String,
    pub source: String,
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn test_estimate() {
        let est = estimate(VehicleType::TeslaCybertruck, "2026-06-10", "2026-06-17").unwrap();
        assert_eq!(est.days, 7);
        assert_eq!(est.daily_rate, 299);
        assert_eq!(est.subtotal, 2093);
        assert_eq!(est.total, 2093 + 139);
    }

    #[test]
    fn test_estimate_rejects_bad_ranges() {
        assert!(estimate(VehicleType::TeslaModelY, "2026-06-10", "2026-06-10").is_none());
        assert!(estimate(VehicleType::TeslaModelY, "2026-06-10", "2026-06-09").is_none());
        assert!(estimate(VehicleType::TeslaModelY, "June 10", "2026-06-12").is_none());
    }

    #[test]
    fn test_validate_dates_order_of_checks() {
        assert_eq!(validate_dates("", "2026-06-05", today()), Err(BookingError::MissingDates));
        assert_eq!(
            validate_dates("2026-13-01", "2026-06-05", today()),
            Err(BookingError::InvalidDateFormat)
        );
        // Reversed range wins over a past start
        assert_eq!(
            validate_dates("2026-05-10", "2026-05-01", today()),
            Err(BookingError::ReturnNotAfterStart)
        );
        assert_eq!(
            validate_dates("2026-05-30", "2026-06-05", today()),
            Err(BookingError::StartInPast)
        );
        assert_eq!(validate_dates("2026-06-01", "2026-06-02", today()), Ok(()));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.de").is_ok());
        assert_eq!(validate_email(""), Err(BookingError::InvalidEmail));
        assert_eq!(validate_email("nobody"), Err(BookingError::InvalidEmail));
    }

    #[test]
    fn test_messages_are_localized() {
        assert_eq!(
            BookingError::StartInPast.message(Locale::De),
            "Das Startdatum darf nicht in der Vergangenheit liegen."
        );
        assert_eq!(
            BookingError::MissingDates.message(Locale::En),
            "Please select a start and return date."
        );
    }

    #[test]
    fn test_parse_vehicle_and_location() {
        assert_eq!("tesla_model_3".parse(), Ok(VehicleType::TeslaModel3));
        assert!("model_s".parse::<VehicleType>().is_err());
        assert_eq!("las vegas".parse(), Ok(PickupLocation::LasVegas));
    }

    #[test]
    fn test_payload_has_no_prices() {
        let payload = CheckoutPayload {
            vehicle_type: VehicleType::TeslaModelY,
            pickup_date: "2026-06-10".to_string(),
            dropoff_date: "2026-06-12".to_string(),
            pickup_location: PickupLocation::LosAngeles,
            customer_email: "a@b.de".to_string(),
            source: "abenteuer".to_string(),
            locale: Locale::De,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "vehicleType": "tesla_model_y",
                "pickupDate": "2026-06-10",
                "dropoffDate": "2026-06-12",
                "pickupLocation": "Los Angeles",
                "customerEmail": "a@b.de",
                "source": "abenteuer",
                "locale": "de",
            })
        );
    }
}
