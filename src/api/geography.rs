//! IBGE Geography Requests
//!
//! States and their districts, ordered by name on the IBGE side so the
//! dropdowns get proper Portuguese collation.

use super::{endpoint, get_json};
use crate::config;
use crate::error::ApiError;
use crate::models::{City, State};

fn states_url(base: &str) -> String {
    endpoint(base, "estados?orderBy=nome")
}

fn cities_url(base: &str, state_id: u32) -> String {
    endpoint(base, &format!("estados/{}/distritos?orderBy=nome", state_id))
}

pub async fn fetch_states() -> Result<Vec<State>, ApiError> {
    get_json(&states_url(config::IBGE_BASE_URL)).await
}

pub async fn fetch_cities(state_id: u32) -> Result<Vec<City>, ApiError> {
    get_json(&cities_url(config::IBGE_BASE_URL, state_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_url() {
        assert_eq!(
            states_url(config::IBGE_BASE_URL),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados?orderBy=nome"
        );
    }

    #[test]
    fn test_cities_url() {
        assert_eq!(
            cities_url(config::IBGE_BASE_URL, 31),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/31/distritos?orderBy=nome"
        );
    }
}
