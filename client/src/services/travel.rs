//! Travel request and plan endpoints.

use serde::de::IgnoredAny;

use super::endpoints::{plans, travel};
use crate::domain::{
    ComparePlansRequest, PageParams, PaginatedResponse, TravelPlan, TravelRequest,
    TravelRequestRecord,
};
use crate::http::{ApiClient, ClientError};

/// Typed access to `/travel/*`.
#[derive(Debug, Clone)]
pub struct TravelService {
    client: ApiClient,
}

impl TravelService {
    /// Issue calls through `client`.
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Submit a new request for planning.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn create_request(
        &self,
        request: &TravelRequest,
    ) -> Result<TravelRequestRecord, ClientError> {
        self.client.post(travel::REQUESTS, request).await
    }

    /// Fetch one request.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_request(&self, request_id: &str) -> Result<TravelRequestRecord, ClientError> {
        self.client.get(travel::request(request_id)).await
    }

    /// List the traveller's requests.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn list_requests(
        &self,
        page: &PageParams,
    ) -> Result<PaginatedResponse<TravelRequestRecord>, ClientError> {
        self.client.get_with_query(travel::REQUESTS, page).await
    }

    /// Replace a request's parameters.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn update_request(
        &self,
        request_id: &str,
        request: &TravelRequest,
    ) -> Result<TravelRequestRecord, ClientError> {
        self.client.put(travel::request(request_id), request).await
    }

    /// Delete a request.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn delete_request(&self, request_id: &str) -> Result<(), ClientError> {
        self.client
            .delete::<IgnoredAny>(travel::request(request_id))
            .await
            .map(|_| ())
    }

    /// Plans generated for a request.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_plans(&self, request_id: &str) -> Result<Vec<TravelPlan>, ClientError> {
        self.client.get(plans::for_request(request_id)).await
    }

    /// Full detail of one plan.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_plan_detail(&self, plan_id: &str) -> Result<TravelPlan, ClientError> {
        self.client.get(plans::plan(plan_id)).await
    }

    /// Side-by-side comparison of several plans.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn compare_plans(&self, plan_ids: &[String]) -> Result<Vec<TravelPlan>, ClientError> {
        let body = ComparePlansRequest {
            plan_ids: plan_ids.to_vec(),
        };
        self.client.post(plans::COMPARE, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpMethod;
    use crate::test_support::{
        ScriptedTransport, sample_plan, sample_record, sample_request, scripted_client,
    };
    use serde_json::json;

    fn service(transport: &std::sync::Arc<ScriptedTransport>) -> TravelService {
        TravelService::new(scripted_client(transport).expect("client"))
    }

    #[tokio::test]
    async fn create_request_returns_stored_record() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&sample_record("r-1"));
        let record = service(&transport)
            .create_request(&sample_request())
            .await
            .expect("created");
        assert_eq!(record.request_id, "r-1");
        assert_eq!(record.request, sample_request());
    }

    #[tokio::test]
    async fn get_plans_targets_the_nested_route() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&vec![sample_plan("p-1"), sample_plan("p-2")]);
        let plans = service(&transport).get_plans("r 1").await.expect("plans");
        assert_eq!(plans.len(), 2);
        assert_eq!(
            transport.last_request().expect("sent").url.path(),
            "/api/v1/travel/requests/r%201/plans"
        );
    }

    #[tokio::test]
    async fn list_requests_forwards_paging() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&json!({
            "items": [sample_record("r-1")],
            "total": 1, "page": 2, "page_size": 10, "total_pages": 1
        }));
        let page = PageParams {
            page: Some(2),
            page_size: Some(10),
        };
        let listed = service(&transport)
            .list_requests(&page)
            .await
            .expect("list");
        assert_eq!(listed.items.len(), 1);
        assert_eq!(
            transport.last_request().expect("sent").url.query(),
            Some("page=2&page_size=10")
        );
    }

    #[tokio::test]
    async fn compare_plans_posts_plan_ids() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&vec![sample_plan("p-1")]);
        service(&transport)
            .compare_plans(&["p-1".to_owned(), "p-2".to_owned()])
            .await
            .expect("compared");
        let sent = transport.last_request().expect("sent");
        assert_eq!(sent.method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_slice(sent.body.as_deref().expect("body")).expect("json");
        assert_eq!(body, json!({ "plan_ids": ["p-1", "p-2"] }));
    }

    #[tokio::test]
    async fn delete_request_accepts_null_data() {
        let transport = ScriptedTransport::new();
        let empty = json!({ "code": 0, "message": "", "data": null });
        transport.reply_json(200, &empty);
        service(&transport)
            .delete_request("r-1")
            .await
            .expect("deleted");
        assert_eq!(
            transport.last_request().expect("sent").method,
            HttpMethod::Delete
        );
    }
}
