use crate::domain::payment::{
    ApiEnvelope, CreateOrderRequest, OrderData, VerificationData, VerifyPaymentRequest,
    STATUS_FAILED, STATUS_VERIFIED,
};
use crate::service::order_store::{MarkPaid, OrderStore};
use axum::http::StatusCode;

pub type Rejection = (StatusCode, ApiEnvelope<serde_json::Value>);

/// Mock-mode order and verification logic. Signatures are accepted without
/// cryptographic checks.
#[derive(Clone)]
pub struct PaymentService {
    pub order_store: OrderStore,
}

impl PaymentService {
    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<ApiEnvelope<OrderData>, Rejection> {
        validate_order(&req)?;

        let currency = req.currency.to_ascii_uppercase();
        let record = self.order_store.create(req.amount, &currency).await;
        tracing::info!(order_id = %record.order_id, amount = record.amount, currency = %record.currency, "mock order created");

        Ok(ApiEnvelope::ok(
            OrderData {
                order_id: record.order_id,
                amount: record.amount,
                currency: record.currency,
            },
            "Order created successfully (mock mode)",
        ))
    }

    pub async fn verify_payment(
        &self,
        req: VerifyPaymentRequest,
    ) -> Result<ApiEnvelope<VerificationData>, Rejection> {
        if req.order_id.trim().is_empty()
            || req.payment_id.trim().is_empty()
            || req.signature.trim().is_empty()
        {
            return Err(reject(
                StatusCode::BAD_REQUEST,
                "order_id, payment_id and signature are required",
            ));
        }

        match self.order_store.mark_paid(&req.order_id, &req.payment_id).await {
            MarkPaid::Verified(record) => {
                tracing::info!(order_id = %record.order_id, payment_id = %req.payment_id, "mock payment verified");
                Ok(ApiEnvelope::ok(
                    VerificationData {
                        status: STATUS_VERIFIED.to_string(),
                    },
                    "Payment verified successfully (mock mode)",
                ))
            }
            MarkPaid::UnknownOrder => Err(reject(StatusCode::NOT_FOUND, "Order not found")),
            MarkPaid::AlreadyPaid { payment_id } => {
                tracing::warn!(order_id = %req.order_id, %payment_id, "order already paid");
                Err((
                    StatusCode::CONFLICT,
                    ApiEnvelope::fail("Order already paid with a different payment")
                        .with_data(serde_json::json!({ "status": STATUS_FAILED })),
                ))
            }
        }
    }
}

fn validate_order(req: &CreateOrderRequest) -> Result<(), Rejection> {
    if req.amount <= 0 {
        return Err(reject(StatusCode::BAD_REQUEST, "amount must be > 0"));
    }
    if req.currency.len() != 3 || !req.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "currency must be a three-letter code",
        ));
    }
    Ok(())
}

pub fn reject(status: StatusCode, message: &str) -> Rejection {
    (status, ApiEnvelope::fail(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PaymentService {
        PaymentService {
            order_store: OrderStore::new(),
        }
    }

    #[tokio::test]
    async fn order_echoes_amount_and_currency() {
        let resp = service()
            .create_order(CreateOrderRequest {
                amount: 61_500,
                currency: "inr".to_string(),
            })
            .await
            .unwrap();
        let data = resp.data.unwrap();
        assert!(resp.success);
        assert_eq!(data.amount, 61_500);
        assert_eq!(data.currency, "INR");
    }

    #[tokio::test]
    async fn rejects_non_positive_amount_and_bad_currency() {
        let svc = service();
        let (status, body) = svc
            .create_order(CreateOrderRequest {
                amount: 0,
                currency: "INR".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);

        let (status, _) = svc
            .create_order(CreateOrderRequest {
                amount: 10,
                currency: "RUPEES".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn verify_requires_known_order() {
        let (status, body) = service()
            .verify_payment(VerifyPaymentRequest {
                order_id: "order_missing".to_string(),
                payment_id: "pay_mock_1".to_string(),
                signature: "mock_signature_1".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message.as_deref(), Some("Order not found"));
    }

    #[tokio::test]
    async fn verify_rejects_blank_signature() {
        let (status, _) = service()
            .verify_payment(VerifyPaymentRequest {
                order_id: "order_1".to_string(),
                payment_id: "pay_mock_1".to_string(),
                signature: " ".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn second_payment_on_paid_order_fails() {
        let svc = service();
        let order = svc
            .create_order(CreateOrderRequest {
                amount: 100,
                currency: "INR".to_string(),
            })
            .await
            .unwrap()
            .data
            .unwrap();

        let verify = |payment_id: &str| VerifyPaymentRequest {
            order_id: order.order_id.clone(),
            payment_id: payment_id.to_string(),
            signature: "mock_signature_1".to_string(),
        };

        let ok = svc.verify_payment(verify("pay_mock_1")).await.unwrap();
        assert_eq!(ok.data.unwrap().status, STATUS_VERIFIED);

        let (status, body) = svc.verify_payment(verify("pay_mock_2")).await.unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.data, Some(serde_json::json!({"status": "failed"})));
    }
}
