//! Pure travel-planning state: the active request, its plans and the pick.

use super::{TravelPlan, TravelRequestRecord};

/// Planning progress for the signed-in traveller.
///
/// `plans` keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelState {
    current_request: Option<TravelRequestRecord>,
    plans: Vec<TravelPlan>,
    selected_plan: Option<TravelPlan>,
}

impl TravelState {
    /// Rebuild state from persisted values; plans always start empty.
    pub const fn restored(
        current_request: Option<TravelRequestRecord>,
        selected_plan: Option<TravelPlan>,
    ) -> Self {
        Self {
            current_request,
            plans: Vec::new(),
            selected_plan,
        }
    }

    /// Request being planned.
    pub const fn current_request(&self) -> Option<&TravelRequestRecord> {
        self.current_request.as_ref()
    }

    /// Plans loaded for the current request.
    pub fn plans(&self) -> &[TravelPlan] {
        &self.plans
    }

    /// Plan chosen by the traveller.
    pub const fn selected_plan(&self) -> Option<&TravelPlan> {
        self.selected_plan.as_ref()
    }

    /// Replace the active request.
    pub fn set_current_request(&mut self, request: TravelRequestRecord) {
        self.current_request = Some(request);
    }

    /// Drop the active request.
    pub fn clear_current_request(&mut self) {
        self.current_request = None;
    }

    /// Replace the plan list.
    pub fn set_plans(&mut self, plans: Vec<TravelPlan>) {
        self.plans = plans;
    }

    /// Append one plan.
    pub fn add_plan(&mut self, plan: TravelPlan) {
        self.plans.push(plan);
    }

    /// Record the traveller's choice.
    pub fn select_plan(&mut self, plan: TravelPlan) {
        self.selected_plan = Some(plan);
    }

    /// Forget the choice.
    pub fn clear_selected_plan(&mut self) {
        self.selected_plan = None;
    }

    /// Reset every field.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}
