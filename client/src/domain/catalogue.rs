//! Attraction and restaurant listings.

use serde::{Deserialize, Serialize};

use super::pagination::{PageParams, QueryParams, push_opt};

/// A point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Summary.
    pub description: String,
    /// Address or area.
    pub location: String,
    /// Review rating.
    pub rating: f64,
    /// Opening hours as free text.
    pub opening_hours: String,
    /// Ticket price per person.
    pub ticket_price: f64,
    /// Suggested visit length in minutes.
    pub estimated_duration: u32,
    /// Photo URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    /// Category tags.
    pub tags: Vec<String>,
}

/// A place to eat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cuisine.
    pub cuisine_type: String,
    /// Review rating.
    pub rating: f64,
    /// Price band as free text.
    pub price_range: String,
    /// Street address.
    pub address: String,
    /// Signature dishes.
    pub specialties: Vec<String>,
    /// Photo URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

/// Query for the attraction search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttractionSearch {
    /// Destination to search in.
    pub destination: String,
    /// Optional free-text filter.
    pub keyword: Option<String>,
    /// Page selection.
    pub page: PageParams,
}

impl AttractionSearch {
    /// Search every attraction at `destination`.
    pub fn in_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for AttractionSearch {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("destination".to_owned(), self.destination.clone())];
        push_opt(&mut pairs, "keyword", self.keyword.as_deref());
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

/// Query for the restaurant search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantSearch {
    /// Destination to search in.
    pub destination: String,
    /// Optional free-text filter.
    pub keyword: Option<String>,
    /// Optional cuisine filter.
    pub cuisine_type: Option<String>,
    /// Page selection.
    pub page: PageParams,
}

impl RestaurantSearch {
    /// Search every restaurant at `destination`.
    pub fn in_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }
}

impl QueryParams for RestaurantSearch {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("destination".to_owned(), self.destination.clone())];
        push_opt(&mut pairs, "keyword", self.keyword.as_deref());
        push_opt(&mut pairs, "cuisine_type", self.cuisine_type.as_deref());
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_owned(), value.to_owned())
    }

    #[test]
    fn attraction_search_always_sends_destination() {
        let search = AttractionSearch::in_destination("Xi'an");
        assert_eq!(search.query_pairs(), vec![pair("destination", "Xi'an")]);
    }

    #[test]
    fn restaurant_search_appends_filters_then_paging() {
        let search = RestaurantSearch {
            destination: "Guangzhou".to_owned(),
            keyword: None,
            cuisine_type: Some("Cantonese".to_owned()),
            page: PageParams {
                page: Some(3),
                page_size: None,
            },
        };
        assert_eq!(
            search.query_pairs(),
            vec![
                pair("destination", "Guangzhou"),
                pair("cuisine_type", "Cantonese"),
                pair("page", "3"),
            ]
        );
    }
}
