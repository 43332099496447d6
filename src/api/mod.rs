//! HTTP Client
//!
//! Thin wrappers over the backend and IBGE REST endpoints, organized by
//! domain.

mod geography;
mod items;
mod points;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

// Re-export all public items
pub use geography::*;
pub use items::*;
pub use points::*;

/// Join a base URL and a path with exactly one slash
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// GET `url` and decode the JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("[Api] GET {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(endpoint("http://api.test", "items"), "http://api.test/items");
        assert_eq!(endpoint("http://api.test/", "/items"), "http://api.test/items");
    }
}
