//! Item Requests

use super::{endpoint, get_json};
use crate::config;
use crate::error::ApiError;
use crate::models::Item;

fn items_url(base: &str) -> String {
    endpoint(base, "items")
}

pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    get_json(&items_url(config::api_base_url())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url() {
        assert_eq!(items_url("http://localhost:3333"), "http://localhost:3333/items");
    }
}
