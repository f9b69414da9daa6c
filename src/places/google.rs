//! Google Places web service provider.
//!
//! Uses the legacy JSON endpoints:
//! - `nearbysearch/json` for the result list
//! - `details/json` for the detail modal
//! - `photo` for photo URLs (never fetched here)
//!
//! The service answers most failures with HTTP 200 and a non-OK `status`
//! field, so both the HTTP status and the body status are checked.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::provider::{NearbySearchRequest, PlacesError, PlacesProvider};
use super::types::{
    NearbySearchResponse, PlaceDetailsResponse, RawPlace, RawPlaceDetail, is_success_status,
};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Field mask for the detail request.
pub const DETAIL_FIELDS: &str = "name,formatted_phone_number,price_level,website,geometry,photos";

/// Google Places provider
pub struct GooglePlacesProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GooglePlacesProvider {
    /// Creates a new Google Places provider.
    ///
    /// # Arguments
    /// * `api_key` - Places API key
    /// * `base_url` - Optional custom base URL (defaults to Google's API)
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Sends a GET to `{base_url}/{endpoint}` and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesError> {
        if self.api_key.is_empty() {
            return Err(PlacesError::Config("places API key is empty".to_string()));
        }

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            // The request URL carries the key
            .map_err(|e| PlacesError::Network(e.without_url().to_string()))?;

        debug!("Places {} response status: {}", endpoint, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16().to_string();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Places API HTTP error: {} - {}", status, err_body);
            return Err(PlacesError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::Network(e.without_url().to_string()))?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Parse(e.to_string()))
    }
}

fn check_status(status: &str, error_message: Option<String>) -> Result<(), PlacesError> {
    if is_success_status(status) {
        return Ok(());
    }
    warn!("Places API returned status {}", status);
    Err(PlacesError::Api {
        status: status.to_string(),
        message: error_message.unwrap_or_default(),
    })
}

#[async_trait]
impl PlacesProvider for GooglePlacesProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn nearby_search(
        &self,
        request: NearbySearchRequest<'_>,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        info!(
            "Nearby search: location={},{} radius={} type={} keyword={:?}",
            request.location.latitude,
            request.location.longitude,
            request.radius_m,
            request.place_type,
            request.keyword
        );

        let params = [
            (
                "location",
                format!("{},{}", request.location.latitude, request.location.longitude),
            ),
            ("radius", request.radius_m.to_string()),
            ("type", request.place_type.to_string()),
            ("keyword", request.keyword.to_string()),
        ];
        let response: NearbySearchResponse = self.get_json("nearbysearch/json", &params).await?;
        check_status(&response.status, response.error_message)?;

        info!("Nearby search returned {} places", response.results.len());
        Ok(response.results)
    }

    async fn place_details(&self, place_id: &str) -> Result<RawPlaceDetail, PlacesError> {
        info!("Place details: place_id={}", place_id);

        let params = [
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
        ];
        let response: PlaceDetailsResponse = self.get_json("details/json", &params).await?;
        check_status(&response.status, response.error_message)?;

        response
            .result
            .ok_or_else(|| PlacesError::Parse("details response has no result".to_string()))
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Option<String> {
        let params = [
            ("maxwidth", max_width.to_string()),
            ("photoreference", photo_reference.to_string()),
            ("key", self.api_key.clone()),
        ];
        reqwest::Url::parse_with_params(&format!("{}/photo", self.base_url), &params)
            .map(|url| url.to_string())
            .inspect_err(|e| warn!("Could not build photo URL from {}: {}", self.base_url, e))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let provider = GooglePlacesProvider::new("k".to_string(), None);
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider =
            GooglePlacesProvider::new("k".to_string(), Some("http://localhost:9000/".to_string()));
        assert_eq!(provider.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_photo_url() {
        let provider = GooglePlacesProvider::new("secret".to_string(), None);
        let url = provider.photo_url("ref-1", 400);
        assert_eq!(
            url.as_deref(),
            Some(
                "https://maps.googleapis.com/maps/api/place/photo?maxwidth=400&photoreference=ref-1&key=secret"
            )
        );
    }

    #[test]
    fn test_photo_url_with_unparseable_base_is_none() {
        let provider =
            GooglePlacesProvider::new("secret".to_string(), Some("not a url".to_string()));
        assert_eq!(provider.photo_url("ref-1", 400), None);
    }

    #[tokio::test]
    async fn test_network_error_does_not_carry_key() {
        // Nothing listens on port 9 in the test environment
        let provider = GooglePlacesProvider::new(
            "secret-key".to_string(),
            Some("http://127.0.0.1:9".to_string()),
        );
        match provider.place_details("abc").await {
            Err(PlacesError::Network(msg)) => assert!(!msg.contains("secret-key")),
            other => panic!("Expected Network error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_status() {
        assert!(check_status("OK", None).is_ok());
        assert!(check_status("ZERO_RESULTS", None).is_ok());
        assert_eq!(
            check_status("REQUEST_DENIED", Some("bad key".to_string())),
            Err(PlacesError::Api {
                status: "REQUEST_DENIED".to_string(),
                message: "bad key".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_empty_api_key_is_config_error() {
        let provider = GooglePlacesProvider::new(String::new(), None);
        let result = provider.place_details("abc").await;
        assert!(matches!(result, Err(PlacesError::Config(_))));
    }
}
