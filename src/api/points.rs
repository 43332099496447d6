//! Collection Point Requests

use gloo_net::http::Request;
use web_sys::FormData;

use super::endpoint;
use crate::config;
use crate::error::ApiError;
use crate::models::{PointResponse, PointSubmission};

fn points_url(base: &str) -> String {
    endpoint(base, "points")
}

fn to_form_data(submission: &PointSubmission) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    for (key, value) in submission.form_fields() {
        form.append_with_str(key, &value).map_err(ApiError::from_js)?;
    }
    Ok(form)
}

/// Decide the outcome of a `/points` response.
///
/// A `message` in the body is an error whatever the status.
fn interpret_response(status: u16, body: &str) -> Result<(), ApiError> {
    let parsed = serde_json::from_str::<PointResponse>(body).unwrap_or_default();
    if let Some(message) = parsed.message {
        return Err(ApiError::Rejected(message));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    Ok(())
}

/// POST the point as multipart form data
pub async fn create_point(submission: &PointSubmission) -> Result<(), ApiError> {
    let url = points_url(config::api_base_url());
    log::info!("[Api] POST {} ({} items)", url, submission.items.len());

    let form = to_form_data(submission)?;
    let response = Request::post(&url).body(form)?.send().await?;
    let status = response.status();
    let body = response.text().await?;
    interpret_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_url() {
        assert_eq!(points_url("http://localhost:3333/"), "http://localhost:3333/points");
    }

    #[test]
    fn test_created_point_is_success() {
        let body = r#"{"id":12,"name":"Coleta Central","items":[1,2]}"#;
        assert_eq!(interpret_response(201, body), Ok(()));
    }

    #[test]
    fn test_message_body_is_rejection() {
        let body = r#"{"message":"Validation failed"}"#;
        assert_eq!(
            interpret_response(200, body),
            Err(ApiError::Rejected("Validation failed".into()))
        );
        assert_eq!(
            interpret_response(400, body),
            Err(ApiError::Rejected("Validation failed".into()))
        );
    }

    #[test]
    fn test_error_status_without_message() {
        assert_eq!(interpret_response(500, "Internal Server Error"), Err(ApiError::Status(500)));
        assert_eq!(interpret_response(404, ""), Err(ApiError::Status(404)));
    }

    #[test]
    fn test_empty_success_body() {
        assert_eq!(interpret_response(204, ""), Ok(()));
    }
}
