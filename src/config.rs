//! Build-time Configuration
//!
//! Endpoints and map settings. The backend URL can be overridden by setting
//! `ECOLETA_API_URL` when building.

/// Backend used when `ECOLETA_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "https://gentle-taiga-19543.herokuapp.com";

/// IBGE localities service (states and districts)
pub const IBGE_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// OpenStreetMap tiles
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

pub const MAP_ZOOM: u8 = 15;

/// Backend base URL without trailing slash
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("ECOLETA_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}
