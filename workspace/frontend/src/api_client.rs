pub mod datasets;
pub mod gst;

use common::{ApiResponse, ErrorBody};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Sends a prepared request and unwraps the `{ data, message, success }` envelope.
async fn send<T>(endpoint: &str, request: RequestBuilder) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_body: Result<ErrorBody, _> = response.json().await;
        return Err(match error_body {
            Ok(err) => {
                log::error!("GET {} - API error {}: {}", endpoint, err.code, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - {}", endpoint, api_response.message);
    Ok(api_response.data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);
    send(endpoint, Request::get(&url)).await
}

/// GET request with query string parameters
pub async fn get_with_query<T>(endpoint: &str, params: &[(&str, String)]) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {} with {:?}", url, params);
    let request = Request::get(&url).query(params.iter().map(|(name, value)| (*name, value)));
    send(endpoint, request).await
}
