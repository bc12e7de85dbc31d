use crate::domain::payment::{ApiEnvelope, CreateOrderRequest, VerifyPaymentRequest};
use serde::de::DeserializeOwned;
use std::fmt;

pub mod http_api;
pub mod mock;

#[derive(Debug, thiserror::Error)]
pub enum PaymentApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading response body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Json(serde_json::Value),
    Text(String),
}

impl ReplyBody {
    /// Bodies that are not valid JSON are kept verbatim.
    pub fn from_text(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(value) => ReplyBody::Json(value),
            Err(_) => ReplyBody::Text(raw),
        }
    }
}

impl fmt::Display for ReplyBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyBody::Json(value) => write!(f, "{value}"),
            ReplyBody::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ApiReply {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            body: ReplyBody::Json(value),
        }
    }

    /// Returns the payload and message when the reply is a 200 carrying
    /// `success: true` and a `data` object of the expected shape.
    pub fn accepted<T: DeserializeOwned>(&self) -> Option<(T, Option<String>)> {
        if self.status != 200 {
            return None;
        }
        let ReplyBody::Json(value) = &self.body else {
            return None;
        };
        let envelope: ApiEnvelope<T> = serde_json::from_value(value.clone()).ok()?;
        if !envelope.success {
            return None;
        }
        envelope.data.map(|data| (data, envelope.message))
    }
}

#[async_trait::async_trait]
pub trait PaymentApi: Send + Sync {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<ApiReply, PaymentApiError>;

    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<ApiReply, PaymentApiError>;
}
