//! Bookings made against a chosen plan.

use serde::{Deserialize, Serialize};

use super::pagination::{PageParams, QueryParams, push_opt};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed by the provider.
    Confirmed,
    /// Cancelled by the traveller.
    Cancelled,
    /// Trip finished.
    Completed,
}

impl OrderStatus {
    /// Wire name used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    Unpaid,
    /// Paid in full.
    Paid,
    /// Payment returned.
    Refunded,
}

/// A booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend identifier.
    pub order_id: String,
    /// Owning account.
    pub user_id: String,
    /// Booked plan.
    pub plan_id: String,
    /// Lifecycle state.
    pub status: OrderStatus,
    /// Amount due.
    pub total_amount: f64,
    /// Payment state.
    pub payment_status: PaymentStatus,
    /// Contact person.
    pub contact_name: String,
    /// Contact phone.
    pub contact_phone: String,
    /// Contact e-mail.
    pub contact_email: String,
    /// Extra remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp as sent by the backend.
    pub created_at: String,
    /// Last update timestamp as sent by the backend.
    pub updated_at: String,
}

/// Payload for booking a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Plan to book.
    pub plan_id: String,
    /// Contact person.
    pub contact_name: String,
    /// Contact phone.
    pub contact_phone: String,
    /// Contact e-mail.
    pub contact_email: String,
    /// Extra remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Editable order fields; absent values are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// New contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// New contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// New contact e-mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// New remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of the pay call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Provider name such as `alipay` or `wechat`.
    pub payment_method: String,
}

/// Checkout session returned by the pay call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Where the traveller completes payment.
    pub payment_url: String,
}

/// Filters for the order list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Only orders in this state.
    pub status: Option<OrderStatus>,
    /// Page selection.
    pub page: PageParams,
}

impl QueryParams for OrderListParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "status", self.status.map(OrderStatus::as_str));
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(OrderStatus::Pending)]
    #[case(OrderStatus::Confirmed)]
    #[case(OrderStatus::Cancelled)]
    #[case(OrderStatus::Completed)]
    fn status_query_value_matches_serde_name(#[case] status: OrderStatus) {
        let encoded = serde_json::to_value(status).expect("serialise");
        assert_eq!(encoded, json!(status.as_str()));
    }

    #[test]
    fn order_list_params_filter_by_status() {
        let params = OrderListParams {
            status: Some(OrderStatus::Cancelled),
            page: PageParams::default(),
        };
        assert_eq!(
            params.query_pairs(),
            vec![("status".to_owned(), "cancelled".to_owned())]
        );
    }

    #[test]
    fn order_decodes_without_notes() {
        let order: Order = serde_json::from_value(json!({
            "order_id": "o-9",
            "user_id": "u-1",
            "plan_id": "p-3",
            "status": "pending",
            "total_amount": 5200.5,
            "payment_status": "unpaid",
            "contact_name": "Wei",
            "contact_phone": "13900000000",
            "contact_email": "wei@example.com",
            "created_at": "2025-09-01T10:00:00Z",
            "updated_at": "2025-09-01T10:00:00Z"
        }))
        .expect("order decodes");
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert!(order.notes.is_none());
    }
}
