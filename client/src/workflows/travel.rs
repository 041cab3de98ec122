//! Planning flows: a service call followed by the matching store action.

use super::note_persistence;
use crate::domain::{TravelPlan, TravelRequest, TravelRequestRecord};
use crate::http::ClientError;
use crate::services::TravelService;
use crate::session::TravelStore;

/// Couples [`TravelService`] with the persisted [`TravelStore`].
#[derive(Debug)]
pub struct TravelWorkflow {
    service: TravelService,
    store: TravelStore,
}

impl TravelWorkflow {
    /// Drive `store` with results from `service`.
    pub const fn new(service: TravelService, store: TravelStore) -> Self {
        Self { service, store }
    }

    /// Planning state after the last action.
    pub const fn store(&self) -> &TravelStore {
        &self.store
    }

    /// Mutable access for actions with no backend call.
    pub const fn store_mut(&mut self) -> &mut TravelStore {
        &mut self.store
    }

    /// Submit `request` and make it the active request.
    ///
    /// # Errors
    ///
    /// Returns the service error; the store is left unchanged.
    pub async fn create_request(
        &mut self,
        request: &TravelRequest,
    ) -> Result<TravelRequestRecord, ClientError> {
        let record = self.service.create_request(request).await?;
        note_persistence(
            "set_current_request",
            self.store.set_current_request(record.clone()),
        );
        Ok(record)
    }

    /// Load the plans for `request_id`, replacing the in-memory list.
    ///
    /// # Errors
    ///
    /// Returns the service error; the store is left unchanged.
    pub async fn load_plans(&mut self, request_id: &str) -> Result<&[TravelPlan], ClientError> {
        let plans = self.service.get_plans(request_id).await?;
        self.store.set_plans(plans);
        Ok(self.store.state().plans())
    }

    /// Fetch full detail for `plan_id` and record it as the choice.
    ///
    /// # Errors
    ///
    /// Returns the service error; the store is left unchanged.
    pub async fn choose_plan(&mut self, plan_id: &str) -> Result<TravelPlan, ClientError> {
        let plan = self.service.get_plan_detail(plan_id).await?;
        note_persistence("select_plan", self.store.select_plan(plan.clone()));
        Ok(plan)
    }
}
