pub mod cli;
pub mod config;
pub mod domain {
    pub mod env_file;
    pub mod payment;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod report;
pub mod service {
    pub mod env_bootstrapper;
    pub mod order_store;
    pub mod payment_service;
    pub mod smoke_test;
}

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            payment_service: service::payment_service::PaymentService {
                order_store: service::order_store::OrderStore::new(),
            },
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route("/api/payment/order", post(http::handlers::payments::create_order))
        .route("/api/payment/verify", post(http::handlers::payments::verify_payment))
        .with_state(state)
}
