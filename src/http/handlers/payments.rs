use crate::domain::payment::{CreateOrderRequest, VerifyPaymentRequest};
use crate::service::payment_service::reject;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };
    match state.payment_service.create_order(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn verify_payment(
    State(state): State<AppState>,
    body: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };
    match state.payment_service.verify_payment(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Missing or mistyped fields get the same 400 envelope as failed validation.
fn bad_body(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "rejected request body");
    let (status, body) = reject(StatusCode::BAD_REQUEST, &rejection.body_text());
    (status, Json(body)).into_response()
}
