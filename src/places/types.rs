//! Wire types for the places web service.
//!
//! Only the fields the app reads are modelled; everything else in the JSON is
//! ignored by serde.

use serde::Deserialize;

use crate::core::geo::Coordinate;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate::new(value.lat, value.lng)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

/// One entry of a nearby-search `results` array.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawPlace {
    #[serde(default)]
    pub name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub vicinity: String,
    pub geometry: Geometry,
    pub place_id: String,
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    pub photo_reference: String,
}

/// The `result` object of a place-details response.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawPlaceDetail {
    #[serde(default)]
    pub name: String,
    pub formatted_phone_number: Option<String>,
    pub price_level: Option<u8>,
    pub website: Option<String>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Deserialize, Debug)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<RawPlace>,
    pub error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<RawPlaceDetail>,
    pub error_message: Option<String>,
}

/// Statuses that count as a successful call. `ZERO_RESULTS` is an empty list,
/// not a failure.
pub fn is_success_status(status: &str) -> bool {
    matches!(status, "OK" | "ZERO_RESULTS")
}
