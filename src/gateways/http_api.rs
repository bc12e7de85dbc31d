use crate::domain::payment::{CreateOrderRequest, VerifyPaymentRequest};
use crate::gateways::{ApiReply, PaymentApi, PaymentApiError, ReplyBody};
use serde::Serialize;

/// reqwest-backed client for the `/payment/order` and `/payment/verify`
/// endpoints. No request timeout is set.
pub struct HttpPaymentApi {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl HttpPaymentApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiReply, PaymentApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| PaymentApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status().as_u16();
        let raw = resp
            .text()
            .await
            .map_err(|source| PaymentApiError::Body { url, source })?;

        Ok(ApiReply {
            status,
            body: ReplyBody::from_text(raw),
        })
    }
}

#[async_trait::async_trait]
impl PaymentApi for HttpPaymentApi {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<ApiReply, PaymentApiError> {
        self.post_json("/payment/order", request).await
    }

    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<ApiReply, PaymentApiError> {
        self.post_json("/payment/verify", request).await
    }
}
