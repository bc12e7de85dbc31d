use crate::domain::payment::VerifyPaymentRequest;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Current time in milliseconds, bumped so that no two calls in this
/// process return the same value.
pub fn next_stamp() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(seen) => last = seen,
        }
    }
}

/// Synthetic payment id and signature accepted by a server in mock mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCredentials {
    pub payment_id: String,
    pub signature: String,
}

impl MockCredentials {
    pub fn generate() -> Self {
        Self::at(next_stamp())
    }

    pub fn at(stamp: i64) -> Self {
        Self {
            payment_id: format!("pay_mock_{stamp}"),
            signature: format!("mock_signature_{stamp}"),
        }
    }

    pub fn for_order(self, order_id: &str) -> VerifyPaymentRequest {
        VerifyPaymentRequest {
            order_id: order_id.to_string(),
            payment_id: self.payment_id,
            signature: self.signature,
        }
    }
}
