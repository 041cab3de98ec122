//! Travel requests and the itineraries generated for them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip parameters submitted by the traveller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    /// Target city or region.
    pub destination: String,
    /// First day of the trip.
    pub departure_date: NaiveDate,
    /// Last day of the trip.
    pub return_date: NaiveDate,
    /// Number of travellers.
    pub people_count: u32,
    /// Total budget in the backend's currency unit.
    pub budget: f64,
    /// Whether the trip stays within the home country.
    pub is_domestic: bool,
    /// Free-form interest tags such as `food` or `museums`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
    /// Accessibility or other special needs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

/// Processing state of a submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Queued for plan generation.
    Pending,
    /// Plans are being generated.
    Processing,
    /// Plans are available.
    Completed,
    /// Generation failed.
    Failed,
}

/// A request as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequestRecord {
    /// Backend identifier.
    pub request_id: String,
    /// Owning account.
    pub user_id: String,
    /// Current processing state.
    pub status: RequestStatus,
    /// Creation timestamp as sent by the backend.
    pub created_at: String,
    /// The submitted trip parameters.
    #[serde(flatten)]
    pub request: TravelRequest,
}

/// Kind of scheduled activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Sightseeing stop.
    Attraction,
    /// Transfer between places.
    Transportation,
    /// Anything else.
    Other,
}

/// One scheduled item in a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Start time, e.g. `09:30`.
    pub time: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Where it takes place.
    pub location: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Cost for the party.
    pub cost: f64,
    /// Activity category.
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

/// Meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
}

/// A planned meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Which meal of the day.
    #[serde(rename = "type")]
    pub kind: MealType,
    /// Suggested restaurant.
    pub restaurant_name: String,
    /// Cost for the party.
    pub cost: f64,
    /// Cuisine, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
}

/// Overnight stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    /// Hotel name.
    pub hotel_name: String,
    /// Street address.
    pub address: String,
    /// Check-in date or time as sent by the backend.
    pub check_in: String,
    /// Check-out date or time as sent by the backend.
    pub check_out: String,
    /// Cost for the night.
    pub cost: f64,
    /// Star or review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// One day of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyItinerary {
    /// One-based day number.
    pub day: u32,
    /// Calendar date as sent by the backend.
    pub date: String,
    /// Scheduled activities in order.
    pub activities: Vec<Activity>,
    /// Planned meals.
    pub meals: Vec<Meal>,
    /// Where the night is spent.
    pub accommodation: Accommodation,
}

/// Cost split by category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Transfers and tickets.
    pub transportation: f64,
    /// Hotels.
    pub accommodation: f64,
    /// Food.
    pub meals: f64,
    /// Entrance fees.
    pub attractions: f64,
    /// Everything else.
    pub other: f64,
    /// Grand total.
    pub total: f64,
}

/// A generated plan for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    /// Backend identifier.
    pub plan_id: String,
    /// Request this plan answers.
    pub request_id: String,
    /// Display name.
    pub plan_name: String,
    /// Summary.
    pub description: String,
    /// Total cost for the party.
    pub total_cost: f64,
    /// Day-by-day schedule.
    pub daily_itinerary: Vec<DailyItinerary>,
    /// Cost split.
    pub cost_breakdown: CostBreakdown,
    /// Selling points.
    pub highlights: Vec<String>,
    /// Extra remarks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp as sent by the backend.
    pub created_at: String,
}

/// Body of the plan comparison call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparePlansRequest {
    /// Plans to compare.
    pub plan_ids: Vec<String>,
}
