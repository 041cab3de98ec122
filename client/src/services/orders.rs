//! Order endpoints.

use super::endpoints::orders;
use crate::domain::{
    CreateOrderRequest, Order, OrderListParams, OrderUpdate, PaginatedResponse, PaymentRequest,
    PaymentSession,
};
use crate::http::{ApiClient, ClientError};

/// Typed access to `/orders*`.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    /// Issue calls through `client`.
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Book a plan.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order, ClientError> {
        self.client.post(orders::ORDERS, order).await
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ClientError> {
        self.client.get(orders::order(order_id)).await
    }

    /// List the traveller's orders.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn list_orders(
        &self,
        params: &OrderListParams,
    ) -> Result<PaginatedResponse<Order>, ClientError> {
        self.client.get_with_query(orders::ORDERS, params).await
    }

    /// Change contact details or notes.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn update_order(
        &self,
        order_id: &str,
        update: &OrderUpdate,
    ) -> Result<Order, ClientError> {
        self.client.put(orders::order(order_id), update).await
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Order, ClientError> {
        self.client.post_empty(orders::cancel(order_id)).await
    }

    /// Start payment with the named provider.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn pay_order(
        &self,
        order_id: &str,
        payment_method: &str,
    ) -> Result<PaymentSession, ClientError> {
        let body = PaymentRequest {
            payment_method: payment_method.to_owned(),
        };
        self.client.post(orders::pay(order_id), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use crate::domain::ports::HttpMethod;
    use crate::test_support::{ScriptedTransport, scripted_client};
    use serde_json::json;

    #[tokio::test]
    async fn pay_order_posts_method_and_returns_url() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&json!({ "payment_url": "https://pay.example.com/s/1" }));
        let service = OrderService::new(scripted_client(&transport).expect("client"));

        let session = service.pay_order("o-1", "alipay").await.expect("pay");
        assert_eq!(session.payment_url, "https://pay.example.com/s/1");

        let sent = transport.last_request().expect("sent");
        assert_eq!(sent.url.path(), "/api/v1/orders/o-1/pay");
        let body: serde_json::Value =
            serde_json::from_slice(sent.body.as_deref().expect("body")).expect("json");
        assert_eq!(body, json!({ "payment_method": "alipay" }));
    }

    #[tokio::test]
    async fn cancel_order_posts_without_body() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&json!({
            "order_id": "o-1", "user_id": "u-1", "plan_id": "p-1",
            "status": "cancelled", "total_amount": 100, "payment_status": "refunded",
            "contact_name": "Lin", "contact_phone": "1", "contact_email": "l@e.c",
            "created_at": "t0", "updated_at": "t1"
        }));
        let service = OrderService::new(scripted_client(&transport).expect("client"));
        let order = service.cancel_order("o-1").await.expect("cancel");
        assert_eq!(order.status, OrderStatus::Cancelled);

        let sent = transport.last_request().expect("sent");
        assert_eq!(sent.method, HttpMethod::Post);
        assert!(sent.body.is_none());
        assert_eq!(sent.url.path(), "/api/v1/orders/o-1/cancel");
    }

    #[tokio::test]
    async fn business_failure_surfaces_as_api_error() {
        let transport = ScriptedTransport::new();
        let sold_out = json!({ "code": 3002, "message": "plan sold out" });
        transport.reply_json(200, &sold_out);
        let service = OrderService::new(scripted_client(&transport).expect("client"));
        let err = service
            .get_order("o-9")
            .await
            .expect_err("business failure");
        let api = err.as_api().expect("api error");
        assert_eq!((api.code(), api.message()), (3002, "plan sold out"));
    }
}
