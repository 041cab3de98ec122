//! Domain records, session state and ports.
//!
//! Purpose: typed mirrors of the backend's JSON payloads plus the pure state
//! transitions the session stores build on. Wire field names are snake_case
//! throughout, so serde derives need no renaming beyond `type` fields.
//!
//! Public surface:
//! - `ApiEnvelope` / `ApiError`: response wrapper and normalized failure.
//! - `AuthState` / `TravelState`: storage-free session containers.
//! - Entities for accounts, travel requests, plans, catalogue and orders.

mod auth;
mod auth_state;
mod catalogue;
mod envelope;
mod error;
mod orders;
mod pagination;
pub mod ports;
mod travel;
mod travel_state;

pub use self::auth::{AuthResponse, LoginRequest, RegisterRequest, TokenRefresh, User, UserPatch};
pub use self::auth_state::AuthState;
pub use self::catalogue::{Attraction, AttractionSearch, Restaurant, RestaurantSearch};
pub use self::envelope::{ApiEnvelope, SUCCESS_CODES};
pub use self::error::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use self::orders::{
    CreateOrderRequest, Order, OrderListParams, OrderStatus, OrderUpdate, PaymentRequest,
    PaymentSession, PaymentStatus,
};
pub use self::pagination::{PageParams, PaginatedResponse, QueryParams};
pub use self::travel::{
    Accommodation, Activity, ActivityType, ComparePlansRequest, CostBreakdown, DailyItinerary,
    Meal, MealType, RequestStatus, TravelPlan, TravelRequest, TravelRequestRecord,
};
pub use self::travel_state::TravelState;
