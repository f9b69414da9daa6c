use std::fmt;

use async_trait::async_trait;

use super::types::{RawPlace, RawPlaceDetail};
use crate::core::geo::Coordinate;

/// Errors that can occur while talking to the places service.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacesError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The service rejected the request, either with an HTTP error status or
    /// with a non-OK `status` field in a 200 response.
    Api { status: String, message: String },
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::Config(msg) => write!(f, "config error: {msg}"),
            PlacesError::Network(msg) => write!(f, "network error: {msg}"),
            PlacesError::Api { status, message } => {
                write!(f, "places API error ({status}): {message}")
            }
            PlacesError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for PlacesError {}

/// Parameters of one nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest<'a> {
    pub location: Coordinate,
    pub radius_m: u32,
    pub place_type: &'a str,
    pub keyword: &'a str,
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Places matching the keyword within the radius, in service order.
    async fn nearby_search(
        &self,
        request: NearbySearchRequest<'_>,
    ) -> Result<Vec<RawPlace>, PlacesError>;

    /// Extended fields for a single place.
    async fn place_details(&self, place_id: &str) -> Result<RawPlaceDetail, PlacesError>;

    /// URL of a photo. Never fetched by the app, only handed to the opener.
    /// `None` when no valid URL can be built from the configured base.
    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Option<String>;
}
