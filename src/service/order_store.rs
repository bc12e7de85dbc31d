use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Created,
    Paid,
}

#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MarkPaid {
    Verified(OrderRecord),
    UnknownOrder,
    AlreadyPaid { payment_id: String },
}

/// In-memory order table for mock mode. Orders live as long as the process.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<HashMap<String, OrderRecord>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, amount: i64, currency: &str) -> OrderRecord {
        let record = OrderRecord {
            order_id: format!("order_mock_{}", uuid::Uuid::new_v4().simple()),
            amount,
            currency: currency.to_string(),
            status: OrderStatus::Created,
            payment_id: None,
        };
        self.inner
            .write()
            .await
            .insert(record.order_id.clone(), record.clone());
        record
    }

    /// Verifying the same payment twice is accepted; a second, different
    /// payment against a paid order is not.
    pub async fn mark_paid(&self, order_id: &str, payment_id: &str) -> MarkPaid {
        let mut orders = self.inner.write().await;
        let Some(record) = orders.get_mut(order_id) else {
            return MarkPaid::UnknownOrder;
        };

        match &record.payment_id {
            Some(existing) if existing != payment_id => MarkPaid::AlreadyPaid {
                payment_id: existing.clone(),
            },
            _ => {
                record.status = OrderStatus::Paid;
                record.payment_id = Some(payment_id.to_string());
                MarkPaid::Verified(record.clone())
            }
        }
    }
}
