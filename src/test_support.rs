//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::geo::Coordinate;
use crate::core::pipeline::{OpenState, RestaurantSummary};
use crate::core::state::App;
use crate::places::{
    NearbySearchRequest, PlacesError, PlacesProvider, RawPlace, RawPlaceDetail,
};

/// A canned provider for tests that don't need real API calls.
pub struct StubPlacesProvider {
    places: Result<Vec<RawPlace>, PlacesError>,
    detail: Result<RawPlaceDetail, PlacesError>,
    last_keyword: Mutex<Option<String>>,
}

impl StubPlacesProvider {
    pub fn with_places(places: Vec<RawPlace>) -> Self {
        Self {
            places: Ok(places),
            detail: Ok(RawPlaceDetail::default()),
            last_keyword: Mutex::new(None),
        }
    }

    pub fn with_detail(detail: RawPlaceDetail) -> Self {
        Self {
            places: Ok(Vec::new()),
            detail: Ok(detail),
            last_keyword: Mutex::new(None),
        }
    }

    pub fn failing(error: PlacesError) -> Self {
        Self {
            places: Err(error.clone()),
            detail: Err(error),
            last_keyword: Mutex::new(None),
        }
    }

    pub fn last_keyword(&self) -> Option<String> {
        self.last_keyword.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesProvider for StubPlacesProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn nearby_search(
        &self,
        request: NearbySearchRequest<'_>,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        *self.last_keyword.lock().unwrap() = Some(request.keyword.to_string());
        self.places.clone()
    }

    async fn place_details(&self, _place_id: &str) -> Result<RawPlaceDetail, PlacesError> {
        self.detail.clone()
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Option<String> {
        Some(format!("stub://photo/{photo_reference}?w={max_width}"))
    }
}

/// Creates a test App with an empty stub provider and a seeded RNG.
pub fn test_app() -> App {
    App::new(
        Arc::new(StubPlacesProvider::with_places(Vec::new())),
        StdRng::seed_from_u64(1),
    )
}

/// A summary at `distance_m` meters with the given id.
pub fn summary(place_id: &str, distance_m: f64, rating: f64) -> RestaurantSummary {
    RestaurantSummary {
        name: format!("Restaurant {place_id}"),
        rating,
        address: format!("{place_id} Road"),
        coordinate: Coordinate::new(0.0, distance_m / 111_195.0),
        place_id: place_id.to_string(),
        distance_m,
        open_state: OpenState::Unknown,
        icon: "🍕",
    }
}
