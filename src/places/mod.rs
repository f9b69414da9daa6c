pub mod google;
pub mod provider;
pub mod types;

pub use google::GooglePlacesProvider;
pub use provider::{NearbySearchRequest, PlacesError, PlacesProvider};
pub use types::{Geometry, LatLng, OpeningHours, Photo, RawPlace, RawPlaceDetail};

/// A URL safe to log or display: the query string, which carries the API
/// key on photo links, is dropped.
pub fn redact_url(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
