//! Persisted travel-planning session.

use crate::domain::{TravelPlan, TravelRequestRecord, TravelState};
use crate::storage::{StorageAdapter, StorageOutcome, keys};

/// [`TravelState`] with the current request and selected plan mirrored to
/// storage. The plan list lives in memory only.
#[derive(Debug, Clone)]
pub struct TravelStore {
    state: TravelState,
    storage: StorageAdapter,
}

impl TravelStore {
    /// Load persisted progress; missing or corrupt keys read as empty.
    pub fn rehydrate(storage: StorageAdapter) -> Self {
        let state = TravelState::restored(
            storage.get(keys::TRAVEL_REQUEST),
            storage.get(keys::SELECTED_PLAN),
        );
        Self { state, storage }
    }

    /// Current state.
    pub const fn state(&self) -> &TravelState {
        &self.state
    }

    /// Make `request` the active request.
    pub fn set_current_request(&mut self, request: TravelRequestRecord) -> StorageOutcome {
        let outcome = self.storage.set(keys::TRAVEL_REQUEST, &request);
        self.state.set_current_request(request);
        outcome
    }

    /// Drop the active request.
    pub fn clear_current_request(&mut self) -> StorageOutcome {
        self.state.clear_current_request();
        self.storage.remove(keys::TRAVEL_REQUEST)
    }

    /// Replace the plan list. Not persisted.
    pub fn set_plans(&mut self, plans: Vec<TravelPlan>) {
        self.state.set_plans(plans);
    }

    /// Append a plan. Not persisted.
    pub fn add_plan(&mut self, plan: TravelPlan) {
        self.state.add_plan(plan);
    }

    /// Record the chosen plan.
    pub fn select_plan(&mut self, plan: TravelPlan) -> StorageOutcome {
        let outcome = self.storage.set(keys::SELECTED_PLAN, &plan);
        self.state.select_plan(plan);
        outcome
    }

    /// Forget the chosen plan.
    pub fn clear_selected_plan(&mut self) -> StorageOutcome {
        self.state.clear_selected_plan();
        self.storage.remove(keys::SELECTED_PLAN)
    }

    /// Reset everything and drop both persisted keys.
    pub fn clear_all(&mut self) -> StorageOutcome {
        self.state.clear_all();
        self.storage
            .remove(keys::TRAVEL_REQUEST)
            .and(self.storage.remove(keys::SELECTED_PLAN))
    }
}
