//! Attraction and restaurant endpoints.

use super::endpoints::{attractions, restaurants};
use crate::domain::{
    Attraction, AttractionSearch, PageParams, PaginatedResponse, Restaurant, RestaurantSearch,
};
use crate::http::{ApiClient, ClientError};

/// Typed access to `/attractions*` and `/restaurants*`.
#[derive(Debug, Clone)]
pub struct CatalogueService {
    client: ApiClient,
}

impl CatalogueService {
    /// Issue calls through `client`.
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Browse attractions.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn list_attractions(
        &self,
        page: &PageParams,
    ) -> Result<PaginatedResponse<Attraction>, ClientError> {
        self.client.get_with_query(attractions::LIST, page).await
    }

    /// Search attractions at a destination.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn search_attractions(
        &self,
        search: &AttractionSearch,
    ) -> Result<PaginatedResponse<Attraction>, ClientError> {
        self.client
            .get_with_query(attractions::SEARCH, search)
            .await
    }

    /// Fetch one attraction.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_attraction(&self, id: &str) -> Result<Attraction, ClientError> {
        self.client.get(attractions::attraction(id)).await
    }

    /// Browse restaurants.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn list_restaurants(
        &self,
        page: &PageParams,
    ) -> Result<PaginatedResponse<Restaurant>, ClientError> {
        self.client.get_with_query(restaurants::LIST, page).await
    }

    /// Search restaurants at a destination.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn search_restaurants(
        &self,
        search: &RestaurantSearch,
    ) -> Result<PaginatedResponse<Restaurant>, ClientError> {
        self.client
            .get_with_query(restaurants::SEARCH, search)
            .await
    }

    /// Fetch one restaurant.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError`] from the client.
    pub async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ClientError> {
        self.client.get(restaurants::restaurant(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedTransport, scripted_client};
    use serde_json::json;

    fn empty_page() -> serde_json::Value {
        json!({ "items": [], "total": 0, "page": 1, "page_size": 20, "total_pages": 0 })
    }

    #[tokio::test]
    async fn search_attractions_sends_destination_and_keyword() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&empty_page());
        let service = CatalogueService::new(scripted_client(&transport).expect("client"));
        let search = AttractionSearch {
            keyword: Some("temple".to_owned()),
            ..AttractionSearch::in_destination("Kyoto")
        };
        let page = service.search_attractions(&search).await.expect("search");
        assert!(page.items.is_empty());

        let url = transport.last_request().expect("sent").url;
        assert_eq!(url.path(), "/api/v1/attractions/search");
        assert_eq!(url.query(), Some("destination=Kyoto&keyword=temple"));
    }

    #[tokio::test]
    async fn get_restaurant_decodes_record() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&json!({
            "id": "s-1",
            "name": "Lou Wai Lou",
            "cuisine_type": "Hangzhou",
            "rating": 4.6,
            "price_range": "$$",
            "address": "30 Gushan Rd",
            "specialties": ["West Lake fish"]
        }));
        let service = CatalogueService::new(scripted_client(&transport).expect("client"));
        let restaurant = service.get_restaurant("s-1").await.expect("restaurant");
        assert_eq!(restaurant.name, "Lou Wai Lou");
        assert!(restaurant.photos.is_none());
    }

    #[tokio::test]
    async fn list_restaurants_without_paging_sends_no_query() {
        let transport = ScriptedTransport::new();
        transport.reply_data(&empty_page());
        let service = CatalogueService::new(scripted_client(&transport).expect("client"));
        service
            .list_restaurants(&PageParams::default())
            .await
            .expect("list");
        let sent = transport.last_request().expect("sent");
        assert!(sent.url.query().is_none());
    }
}
