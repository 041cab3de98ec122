//! Every backend route, defined once.
//!
//! Identifiers are appended as single path segments and percent-encoded when
//! the URL is resolved.

use crate::http::ApiPath;

/// Authentication routes.
pub mod auth {
    /// `POST` credentials.
    pub const LOGIN: &str = "/auth/login";
    /// `POST` new account.
    pub const REGISTER: &str = "/auth/register";
    /// `POST` end session.
    pub const LOGOUT: &str = "/auth/logout";
    /// `POST` rotate token.
    pub const REFRESH: &str = "/auth/refresh";
    /// `GET` / `PUT` own profile.
    pub const PROFILE: &str = "/auth/profile";
}

/// Travel request routes.
pub mod travel {
    use super::ApiPath;

    /// `POST` create, `GET` list.
    pub const REQUESTS: &str = "/travel/requests";

    /// `GET` / `PUT` / `DELETE` one request.
    pub fn request(id: &str) -> ApiPath {
        ApiPath::from(REQUESTS).join(id)
    }
}

/// Generated plan routes.
pub mod plans {
    use super::{ApiPath, travel};

    /// `POST` `{ plan_ids }`.
    pub const COMPARE: &str = "/travel/plans/compare";

    /// `GET` plans for a request.
    pub fn for_request(request_id: &str) -> ApiPath {
        travel::request(request_id).join("plans")
    }

    /// `GET` one plan.
    pub fn plan(id: &str) -> ApiPath {
        ApiPath::from("/travel/plans").join(id)
    }
}

/// Attraction routes.
pub mod attractions {
    use super::ApiPath;

    /// `GET` list.
    pub const LIST: &str = "/attractions";
    /// `GET` search.
    pub const SEARCH: &str = "/attractions/search";

    /// `GET` one attraction.
    pub fn attraction(id: &str) -> ApiPath {
        ApiPath::from(LIST).join(id)
    }
}

/// Restaurant routes.
pub mod restaurants {
    use super::ApiPath;

    /// `GET` list.
    pub const LIST: &str = "/restaurants";
    /// `GET` search.
    pub const SEARCH: &str = "/restaurants/search";

    /// `GET` one restaurant.
    pub fn restaurant(id: &str) -> ApiPath {
        ApiPath::from(LIST).join(id)
    }
}

/// Order routes.
pub mod orders {
    use super::ApiPath;

    /// `POST` create, `GET` list.
    pub const ORDERS: &str = "/orders";

    /// `GET` / `PUT` one order.
    pub fn order(id: &str) -> ApiPath {
        ApiPath::from(ORDERS).join(id)
    }

    /// `POST` cancel.
    pub fn cancel(id: &str) -> ApiPath {
        order(id).join("cancel")
    }

    /// `POST` `{ payment_method }`.
    pub fn pay(id: &str) -> ApiPath {
        order(id).join("pay")
    }
}
