//! Frontend Models
//!
//! Data structures matching the backend and IBGE payloads.

use serde::{Deserialize, Serialize};

/// Recyclable item category (matches backend `/items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Brazilian state as returned by IBGE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
}

impl State {
    /// Option text, e.g. "Minas Gerais (MG)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.nome, self.sigla)
    }
}

/// IBGE district of a state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub nome: String,
}

/// Geographic coordinate, Leaflet `LatLng` shaped
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Payload posted to `/points`
#[derive(Debug, Clone, PartialEq)]
pub struct PointSubmission {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

impl PointSubmission {
    /// Multipart fields in send order; `items` repeats once per selected id
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("whatsapp", self.whatsapp.clone()),
            ("uf", self.uf.clone()),
            ("city", self.city.clone()),
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
        ];
        fields.extend(self.items.iter().map(|id| ("items", id.to_string())));
        fields
    }
}

/// Body of a `/points` response; only the error message matters
#[derive(Debug, Default, Deserialize)]
pub struct PointResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_label() {
        let state = State { id: 31, sigla: "MG".into(), nome: "Minas Gerais".into() };
        assert_eq!(state.label(), "Minas Gerais (MG)");
    }

    #[test]
    fn test_decode_ibge_state_ignores_extra_fields() {
        let json = r#"[{"id":35,"sigla":"SP","nome":"São Paulo",
            "regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}]"#;
        let states: Vec<State> = serde_json::from_str(json).unwrap();
        assert_eq!(states, vec![State { id: 35, sigla: "SP".into(), nome: "São Paulo".into() }]);
    }

    #[test]
    fn test_decode_ibge_district() {
        let json = r#"[{"id":310010405,"nome":"Abadia dos Dourados",
            "municipio":{"id":3100104,"nome":"Abadia dos Dourados"}}]"#;
        let cities: Vec<City> = serde_json::from_str(json).unwrap();
        assert_eq!(cities[0].id, 310010405);
        assert_eq!(cities[0].nome, "Abadia dos Dourados");
    }

    #[test]
    fn test_decode_backend_item() {
        let json = r#"{"id":1,"title":"Lâmpadas","image_url":"http://localhost:3333/uploads/lampadas.svg"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Lâmpadas");
    }

    #[test]
    fn test_form_fields_order_and_repeated_items() {
        let submission = PointSubmission {
            name: "Mercado".into(),
            email: "contato@mercado.com".into(),
            whatsapp: "31999990000".into(),
            uf: "MG".into(),
            city: "Belo Horizonte".into(),
            latitude: -19.9191,
            longitude: -43.9386,
            items: vec![3, 1],
        };
        let fields = submission.form_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["name", "email", "whatsapp", "uf", "city", "latitude", "longitude", "items", "items"]
        );
        assert_eq!(fields[5].1, "-19.9191");
        assert_eq!(fields[7].1, "3");
        assert_eq!(fields[8].1, "1");
    }

    #[test]
    fn test_form_fields_without_items() {
        let submission = PointSubmission {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            uf: String::new(),
            city: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            items: vec![],
        };
        let fields = submission.form_fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[5].1, "0");
    }

    #[test]
    fn test_point_response_message() {
        let ok: PointResponse = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert!(ok.message.is_none());
        let err: PointResponse = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(err.message.as_deref(), Some("boom"));
    }
}
