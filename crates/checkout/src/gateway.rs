use crate::booking::{BookingError, BookingRequest, CheckoutPayload};
use async_trait::async_trait;
use chrono::NaiveDate;
use roadtrip_ssg_core::{Locale, LocaleContext, SiteDescriptor};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("invalid booking: {0}")]
    Invalid(#[from] BookingError),

    /// The checkout service answered but refused the booking.
    #[error("checkout rejected: {0}")]
    Rejected(String),

    #[error("checkout request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Generic failure text shown when the service gives no reason.
pub fn fallback_message(locale: Locale) -> &'static str {
    match locale {
        Locale::De => "Etwas ist schiefgelaufen. Bitte versuchen Sie es erneut.",
        Locale::En => "Something went wrong. Please try again.",
    }
}

/// The external checkout service. Returns the URL to send the customer to.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_checkout(&self, payload: &CheckoutPayload) -> Result<String, CheckoutError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutResponse {
    checkout_url: Option<String>,
    /// Returned instead of `checkout_url` when the booking already exists.
    booking_url: Option<String>,
    error: Option<String>,
}

/// JSON-over-HTTP checkout client.
#[derive(Debug, Clone)]
pub struct HttpCheckout {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCheckout {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn for_site(site: &SiteDescriptor) -> Self {
        Self::new(site.endpoints.checkout_api_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckout {
    async fn create_checkout(&self, payload: &CheckoutPayload) -> Result<String, CheckoutError> {
        debug!(endpoint = %self.endpoint, source = %payload.source, "posting checkout");
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        // Error pages are not always JSON
        let body: CheckoutResponse = response.json().await.unwrap_or_default();

        if !status.is_success() {
            warn!(status = status.as_u16(), "checkout rejected");
            let reason = body
                .error
                .unwrap_or_else(|| fallback_message(payload.locale).to_string());
            return Err(CheckoutError::Rejected(reason));
        }

        body.checkout_url
            .or(body.booking_url)
            .ok_or_else(|| CheckoutError::Rejected(fallback_message(payload.locale).to_string()))
    }
}

/// Validate `booking`, then hand it to the gateway under `ctx`'s site.
///
/// Invalid input never reaches the gateway.
pub async fn submit_booking(
    gateway: &dyn CheckoutGateway,
    ctx: &LocaleContext,
    booking: &BookingRequest,
    today: NaiveDate,
) -> Result<String, CheckoutError> {
    booking.validate(today)?;

    let payload = CheckoutPayload {
        vehicle_type: booking.vehicle,
        pickup_date: booking.pickup_date.trim().to_string(),
        dropoff_date: booking.dropoff_date.trim().to_string(),
        pickup_location: booking.location,
        customer_email: booking.email.trim().to_string(),
        source: ctx.site.endpoints.booking_source.to_string(),
        locale: ctx.locale,
    };
    gateway.create_checkout(&payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{PickupLocation, VehicleType};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use roadtrip_ssg_core::site::{AMA, GIW};
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn booking() -> BookingRequest {
        BookingRequest {
            vehicle: VehicleType::TeslaModelY,
            pickup_date: "2026-06-10".to_string(),
            dropoff_date: "2026-06-14".to_string(),
            location: PickupLocation::LasVegas,
            email: " guest@example.com ".to_string(),
        }
    }

    #[derive(Default)]
    struct RecordingGateway {
        calls: AtomicUsize,
        last: Mutex<Option<CheckoutPayload>>,
    }

    #[async_trait]
    impl CheckoutGateway for RecordingGateway {
        async fn create_checkout(&self, payload: &CheckoutPayload) -> Result<String, CheckoutError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(payload.clone());
            Ok("https://checkout.example/session/1".to_string())
        }
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/public/checkout", addr)
    }

    #[tokio::test]
    async fn test_submit_builds_payload_from_site() {
        let gateway = RecordingGateway::default();
        let ctx = LocaleContext::for_render(&GIW);

        let url = submit_booking(&gateway, &ctx, &booking(), today()).await.unwrap();
        assert_eq!(url, "https://checkout.example/session/1");

        let payload = gateway.last.lock().unwrap().clone().unwrap();
        assert_eq!(payload.source, "goiconicway");
        assert_eq!(payload.locale, Locale::En);
        assert_eq!(payload.customer_email, "guest@example.com");
    }

    #[tokio::test]
    async fn test_invalid_booking_never_calls_gateway() {
        let gateway = RecordingGateway::default();
        let ctx = LocaleContext::for_render(&AMA);

        let mut past = booking();
        past.pickup_date = "2026-05-01".to_string();
        let err = submit_booking(&gateway, &ctx, &past, today()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Invalid(BookingError::StartInPast)));

        let mut no_email = booking();
        no_email.email = String::new();
        let err = submit_booking(&gateway, &ctx, &no_email, today()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Invalid(BookingError::InvalidEmail)));

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_http_checkout_returns_checkout_url() {
        let router = Router::new().route(
            "/api/public/checkout",
            post(|Json(body): Json<Value>| async move {
                assert!(body.get("totalPrice").is_none());
                assert_eq!(body["vehicleType"], "tesla_model_y");
                Json(json!({ "checkoutUrl": "https://pay.example/abc" }))
            }),
        );
        let endpoint = serve(router).await;
        let ctx = LocaleContext::for_render(&AMA);

        let url = submit_booking(&HttpCheckout::new(endpoint), &ctx, &booking(), today())
            .await
            .unwrap();
        assert_eq!(url, "https://pay.example/abc");
    }

    #[tokio::test]
    async fn test_http_checkout_falls_back_to_booking_url() {
        let router = Router::new().route(
            "/api/public/checkout",
            post(|| async { Json(json!({ "bookingUrl": "https://book.example/existing" })) }),
        );
        let endpoint = serve(router).await;
        let ctx = LocaleContext::for_render(&GIW);

        let url = submit_booking(&HttpCheckout::new(endpoint), &ctx, &booking(), today())
            .await
            .unwrap();
        assert_eq!(url, "https://book.example/existing");
    }

    #[tokio::test]
    async fn test_http_checkout_rejection_uses_server_error() {
        let router = Router::new().route(
            "/api/public/checkout",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Vehicle unavailable for these dates" })),
                )
            }),
        );
        let endpoint = serve(router).await;
        let ctx = LocaleContext::for_render(&GIW);

        let err = submit_booking(&HttpCheckout::new(endpoint), &ctx, &booking(), today())
            .await
            .unwrap_err();
        match err {
            CheckoutError::Rejected(msg) => assert_eq!(msg, "Vehicle unavailable for these dates"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_http_checkout_rejection_without_reason_is_localized() {
        let router = Router::new().route(
            "/api/public/checkout",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
        );
        let endpoint = serve(router).await;
        let ctx = LocaleContext::for_render(&AMA);

        let err = submit_booking(&HttpCheckout::new(endpoint), &ctx, &booking(), today())
            .await
            .unwrap_err();
        match err {
            CheckoutError::Rejected(msg) => assert_eq!(msg, fallback_message(Locale::De)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
