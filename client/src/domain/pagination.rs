//! Page envelopes and query parameter records for list endpoints.

use serde::{Deserialize, Serialize};

/// One page of results from a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total matching items across all pages.
    pub total: u64,
    /// One-based page number.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Number of pages available.
    pub total_pages: u32,
}

/// Converts a parameter record into URL query pairs.
///
/// Absent optional values are skipped rather than sent empty.
pub trait QueryParams {
    /// Query pairs in a stable order.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

/// Helper that appends `name=value` when `value` is present.
pub(crate) fn push_opt<V: ToString>(
    pairs: &mut Vec<(String, String)>,
    name: &str,
    value: Option<V>,
) {
    if let Some(present) = value {
        pairs.push((name.to_owned(), present.to_string()));
    }
}

/// Page selection shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// One-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

impl QueryParams for PageParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "page_size", self.page_size);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_page_params_produce_no_pairs() {
        assert!(PageParams::default().query_pairs().is_empty());
    }

    #[test]
    fn page_params_keep_page_before_size() {
        let params = PageParams {
            page: Some(2),
            page_size: Some(20),
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("page_size".to_owned(), "20".to_owned()),
            ]
        );
    }

    #[test]
    fn paginated_response_decodes_backend_shape() {
        let page: PaginatedResponse<String> = serde_json::from_value(json!({
            "items": ["a", "b"],
            "total": 12,
            "page": 1,
            "page_size": 2,
            "total_pages": 6
        }))
        .expect("page decodes");
        assert_eq!(page.items, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(page.total_pages, 6);
    }
}
