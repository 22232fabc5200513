// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod clock;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono_tz::Tz;
use clap::Parser;
use clock::{Now, VenueClock};
use courtside_api::{
    ApiError, CheckoutRequest, CheckoutResponse, CoachQuoteRequest, CoachQuoteResponse,
    CombinedQuoteRequest, CombinedQuoteResponse, DraftBookingRequest, DraftBookingResponse,
    FieldQuoteRequest, FieldQuoteResponse, SlotGridRequest, SlotGridResponse,
    ValidateSelectionRequest, ValidateSelectionResponse, build_slot_grid, checkout, draft_booking,
    quote_coach, quote_combined, quote_field, translate_domain_error, validate_selection,
};
use courtside_domain::{DomainError, parse_timezone};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Courtside Server - HTTP server for the Courtside booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// IANA timezone of the venue, used to decide which slots have passed
    #[arg(short, long, default_value = "Asia/Ho_Chi_Minh")]
    timezone: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The venue clock.
    clock: VenueClock,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is serving.
    status: String,
    /// The venue timezone the server evaluates slots in.
    timezone: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from(translate_domain_error(err))
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        timezone: app_state.clock.timezone().name().to_string(),
    })
}

/// Handler for POST `/slots/grid` endpoint.
///
/// Renders the slot grid of a date with availability and past flags.
async fn handle_slot_grid(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SlotGridRequest>,
) -> Result<Json<SlotGridResponse>, HttpError> {
    info!(flow = ?req.flow, date = %req.schedule.date, "Handling slot_grid request");

    let now: Now = app_state.clock.now()?;
    let response: SlotGridResponse = build_slot_grid(&req, now.local)?;

    Ok(Json(response))
}

/// Handler for POST `/selection/validate` endpoint.
///
/// Replays hour clicks and reports whether the range may be submitted.
async fn handle_validate_selection(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ValidateSelectionRequest>,
) -> Result<Json<ValidateSelectionResponse>, HttpError> {
    info!(
        flow = ?req.flow,
        date = %req.schedule.date,
        clicks = req.clicks.len(),
        "Handling validate_selection request"
    );

    let now: Now = app_state.clock.now()?;
    let response: ValidateSelectionResponse = validate_selection(&req, now.local)?;

    Ok(Json(response))
}

/// Handler for POST `/quotes/field` endpoint.
async fn handle_quote_field(
    Json(req): Json<FieldQuoteRequest>,
) -> Result<Json<FieldQuoteResponse>, HttpError> {
    info!(
        date = %req.date,
        start = %req.start_time,
        end = %req.end_time,
        "Handling quote_field request"
    );

    Ok(Json(quote_field(&req)?))
}

/// Handler for POST `/quotes/coach` endpoint.
async fn handle_quote_coach(
    Json(req): Json<CoachQuoteRequest>,
) -> Result<Json<CoachQuoteResponse>, HttpError> {
    info!(start = %req.start_time, end = %req.end_time, "Handling quote_coach request");

    Ok(Json(quote_coach(&req)?))
}

/// Handler for POST `/quotes/combined` endpoint.
async fn handle_quote_combined(
    Json(req): Json<CombinedQuoteRequest>,
) -> Result<Json<CombinedQuoteResponse>, HttpError> {
    info!(
        date = %req.date,
        amenities = req.amenities.len(),
        with_coach = req.coach_price.is_some(),
        "Handling quote_combined request"
    );

    Ok(Json(quote_combined(&req)?))
}

/// Handler for POST `/bookings/draft` endpoint.
///
/// Validates the range and returns the booking submission body.
async fn handle_draft_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DraftBookingRequest>,
) -> Result<Json<DraftBookingResponse>, HttpError> {
    info!(flow = ?req.flow, date = %req.schedule.date, "Handling draft_booking request");

    let now: Now = app_state.clock.now()?;
    let response: DraftBookingResponse = draft_booking(&req, now.local)?;

    Ok(Json(response))
}

/// Handler for POST `/bookings/checkout` endpoint.
///
/// Completes a booking while the backend hold is live.
async fn handle_checkout(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, HttpError> {
    info!(booking_id = %req.hold.id, "Handling checkout request");

    let now: Now = app_state.clock.now()?;
    let response: CheckoutResponse = checkout(&req, now.local, now.utc)?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/slots/grid", post(handle_slot_grid))
        .route("/selection/validate", post(handle_validate_selection))
        .route("/quotes/field", post(handle_quote_field))
        .route("/quotes/coach", post(handle_quote_coach))
        .route("/quotes/combined", post(handle_quote_combined))
        .route("/bookings/draft", post(handle_draft_booking))
        .route("/bookings/checkout", post(handle_checkout))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Courtside Server");

    let timezone: Tz = parse_timezone(&args.timezone)?;
    info!(timezone = %timezone.name(), "Evaluating slots in venue timezone");

    let app_state: AppState = AppState {
        clock: VenueClock::system(timezone),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Helper to create test app state frozen at 10:00 on Monday 2025-03-10, venue time.
    fn create_test_app_state() -> AppState {
        let instant = Utc
            .with_ymd_and_hms(2025, 3, 10, 3, 0, 0)
            .single()
            .expect("valid test instant");
        AppState {
            clock: VenueClock::fixed(Tz::Asia__Ho_Chi_Minh, instant),
        }
    }

    fn monday_schedule(booked: &[u8]) -> Value {
        let slots: Vec<Value> = (8..=21)
            .map(|hour: u8| {
                json!({
                    "startTime": format!("{hour:02}:00"),
                    "available": !booked.contains(&hour),
                })
            })
            .collect();
        json!({
            "date": "2025-03-10",
            "operatingHours": [{ "day": "monday", "start": "08:00", "end": "21:00" }],
            "availability": { "data": slots },
        })
    }

    fn with_fields(mut base: Value, fields: Value) -> Value {
        if let (Some(target), Some(extra)) = (base.as_object_mut(), fields.as_object()) {
            for (key, value) in extra {
                target.insert(key.clone(), value.clone());
            }
        }
        base
    }

    async fn post_json(uri: &str, body: &Value) -> (HttpStatusCode, Value) {
        let app: Router = build_router(create_test_app_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_timezone() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.timezone, "Asia/Ho_Chi_Minh");
    }

    #[tokio::test]
    async fn test_slot_grid_uses_venue_time() {
        let body: Value = with_fields(monday_schedule(&[14]), json!({ "flow": "field" }));

        let (status, grid) = post_json("/slots/grid", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        let slots = grid["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 14);
        // 09:00 has passed at 10:00 local; 10:00 has not
        assert_eq!(slots[1]["startTime"], "09:00");
        assert_eq!(slots[1]["past"], true);
        assert_eq!(slots[2]["past"], false);
        assert_eq!(slots[6]["startTime"], "14:00");
        assert_eq!(slots[6]["available"], false);
    }

    #[tokio::test]
    async fn test_validate_selection_reports_blocking_hours() {
        let body: Value = with_fields(
            monday_schedule(&[14]),
            json!({ "flow": "coach", "clicks": [13, 15] }),
        );

        let (status, result) = post_json("/selection/validate", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(result["valid"], false);
        assert_eq!(result["blockingHours"], json!(["14:00"]));
    }

    #[tokio::test]
    async fn test_coach_quote() {
        let body: Value = json!({ "startTime": "15:00", "endTime": "17:00", "price": 200_000 });

        let (status, quote) = post_json("/quotes/coach", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(quote["total"], 400_000);
        assert_eq!(quote["durationHours"], 2);
    }

    #[tokio::test]
    async fn test_field_quote_saturday_surcharge() {
        let body: Value = json!({
            "date": "2025-03-15",
            "startTime": "18:00",
            "endTime": "20:00",
            "basePrice": 150_000,
            "priceRanges": [
                { "day": "saturday", "start": "18:00", "end": "22:00", "multiplier": 1.2 }
            ],
        });

        let (status, quote) = post_json("/quotes/field", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(quote["total"], 360_000);
    }

    #[tokio::test]
    async fn test_inverted_range_is_unprocessable() {
        let body: Value = json!({ "startTime": "15:00", "endTime": "13:00", "price": 200_000 });

        let (status, error) = post_json("/quotes/coach", &body).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error["error"], true);
        assert_eq!(
            error["message"],
            "Domain rule violation (end_after_start): End time 13:00 must be after start time 15:00"
        );
    }

    #[tokio::test]
    async fn test_malformed_time_is_bad_request() {
        let body: Value = json!({ "startTime": "noon", "endTime": "13:00", "price": 200_000 });

        let (status, error) = post_json("/quotes/coach", &body).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert_eq!(error["error"], true);
    }

    #[tokio::test]
    async fn test_draft_booking_over_booked_hour_is_rejected() {
        let body: Value = with_fields(
            monday_schedule(&[14]),
            json!({ "flow": "coach", "startTime": "13:00", "endTime": "15:00" }),
        );

        let (status, error) = post_json("/bookings/draft", &body).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error["message"],
            "Domain rule violation (range_available): The selected time includes booked slots: 14:00"
        );
    }

    #[tokio::test]
    async fn test_draft_booking_returns_submission() {
        let body: Value = with_fields(
            monday_schedule(&[14]),
            json!({
                "flow": "field",
                "startTime": "15:00",
                "endTime": "17:00",
                "fieldId": "field-7",
            }),
        );

        let (status, draft) = post_json("/bookings/draft", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(draft["step"], "details");
        assert_eq!(draft["booking"]["date"], "2025-03-10");
        assert_eq!(draft["booking"]["startTime"], "15:00");
        assert_eq!(draft["booking"]["endTime"], "17:00");
        assert_eq!(draft["booking"]["fieldId"], "field-7");
    }

    #[tokio::test]
    async fn test_checkout_with_expired_hold_is_rejected() {
        let booking: Value = with_fields(
            monday_schedule(&[]),
            json!({ "flow": "coach", "startTime": "15:00", "endTime": "17:00" }),
        );
        let body: Value = json!({
            "booking": booking,
            "hold": { "id": "bk-42", "expiresAt": "2025-03-10T02:59:00Z" },
        });

        let (status, error) = post_json("/bookings/checkout", &body).await;

        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error["message"],
            "Domain rule violation (hold_active): The hold on booking bk-42 has expired. Please select a time again"
        );
    }

    #[tokio::test]
    async fn test_checkout_with_live_hold_completes() {
        let booking: Value = with_fields(
            monday_schedule(&[]),
            json!({ "flow": "coach", "startTime": "15:00", "endTime": "17:00" }),
        );
        let body: Value = json!({
            "booking": booking,
            "hold": { "id": "bk-42", "expiresAt": "2025-03-10T03:05:00Z" },
        });

        let (status, result) = post_json("/bookings/checkout", &body).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(result["step"], "complete");
        assert_eq!(result["bookingId"], "bk-42");
        assert_eq!(result["holdRemainingSeconds"], 300);
    }
}
