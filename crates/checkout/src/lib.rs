//! Booking hand-off to the external checkout service.
//!
//! Validation and the price estimate run locally; pricing, availability and
//! persistence belong to the checkout service.

pub mod booking;
pub mod gateway;

pub use booking::{
    BookingError, BookingRequest, CheckoutPayload, PickupLocation, PriceEstimate, SERVICE_FEE,
    VehicleType, estimate, validate_dates, validate_email,
};
pub use gateway::{CheckoutError, CheckoutGateway, HttpCheckout, fallback_message, submit_booking};
