//! # Result Pipeline
//!
//! Turns a search query into a ranked list of display-ready restaurants:
//!
//! ```text
//! SearchQuery ──► nearby search ──► drop rating < 4.0 ──► summarize ──► sort by distance
//! ```
//!
//! The network half goes through the [`PlacesProvider`] trait; the rest is
//! pure and tested directly through [`rank`].

use std::fmt;

use log::info;
use rand::Rng;

use crate::core::cuisine;
use crate::core::geo::{Coordinate, haversine_distance};
use crate::places::{
    NearbySearchRequest, PlacesError, PlacesProvider, RawPlace, RawPlaceDetail, redact_url,
};

pub const SEARCH_RADIUS_M: u32 = 2000;
pub const MIN_RATING: f64 = 4.0;
pub const TOP_PICK_RATING: f64 = 4.5;
pub const PLACE_TYPE: &str = "restaurant";
pub const PHOTO_MAX_WIDTH: u32 = 400;

const VEGETARIAN_QUALIFIER: &str = "vegetarian";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: Coordinate,
    pub cuisine: String,
    pub veg_only: bool,
}

impl SearchQuery {
    pub fn new(origin: Coordinate, cuisine: impl Into<String>, veg_only: bool) -> Self {
        Self {
            origin,
            cuisine: cuisine.into(),
            veg_only,
        }
    }

    /// The keyword sent to the search endpoint.
    pub fn keyword(&self) -> String {
        if self.veg_only {
            format!("{} {}", VEGETARIAN_QUALIFIER, self.cuisine)
        } else {
            self.cuisine.clone()
        }
    }
}

/// Whether a place is open right now, as far as the service knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    Open,
    Closed,
    Unknown,
}

impl From<Option<bool>> for OpenState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => OpenState::Open,
            Some(false) => OpenState::Closed,
            None => OpenState::Unknown,
        }
    }
}

impl OpenState {
    pub fn label(self) -> &'static str {
        match self {
            OpenState::Open => "✅ Open Now",
            OpenState::Closed => "❌ Closed",
            OpenState::Unknown => "⏳ Hours unknown",
        }
    }
}

/// A search hit, ready for the list and the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantSummary {
    pub name: String,
    pub rating: f64,
    pub address: String,
    pub coordinate: Coordinate,
    pub place_id: String,
    /// Meters from the search origin.
    pub distance_m: f64,
    pub open_state: OpenState,
    pub icon: &'static str,
}

impl RestaurantSummary {
    pub fn is_top_pick(&self) -> bool {
        self.rating >= TOP_PICK_RATING
    }
}

/// Extended fields shown in the detail modal.
///
/// `Debug` redacts `photo_url`: its query string carries the API key.
#[derive(Clone, PartialEq)]
pub struct RestaurantDetail {
    pub place_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub price_level: Option<u8>,
    pub website: Option<String>,
    pub photo_reference: Option<String>,
    pub photo_url: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl fmt::Debug for RestaurantDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestaurantDetail")
            .field("place_id", &self.place_id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("price_level", &self.price_level)
            .field("website", &self.website)
            .field("photo_reference", &self.photo_reference)
            .field("photo_url", &self.photo_url.as_deref().map(redact_url))
            .field("coordinate", &self.coordinate)
            .finish()
    }
}

impl RestaurantDetail {
    fn from_raw(place_id: &str, raw: RawPlaceDetail, provider: &dyn PlacesProvider) -> Self {
        let photo_reference = raw.photos.into_iter().next().map(|p| p.photo_reference);
        let photo_url = photo_reference
            .as_deref()
            .and_then(|r| provider.photo_url(r, PHOTO_MAX_WIDTH));
        Self {
            place_id: place_id.to_string(),
            name: raw.name,
            phone: raw.formatted_phone_number.filter(|p| !p.trim().is_empty()),
            price_level: raw.price_level,
            website: raw.website.filter(|w| !w.trim().is_empty()),
            photo_reference,
            photo_url,
            coordinate: raw.geometry.map(|g| g.location.into()),
        }
    }

    /// Price as repeated currency marks; an unknown or zero level shows one.
    pub fn price_display(&self) -> String {
        let level = self.price_level.unwrap_or(0).max(1) as usize;
        "₹".repeat(level)
    }
}

/// Summarize one raw place, or `None` if it falls under the rating floor.
pub fn summarize(origin: &Coordinate, keyword: &str, raw: RawPlace) -> Option<RestaurantSummary> {
    let rating = raw.rating?;
    if rating < MIN_RATING {
        return None;
    }
    let coordinate: Coordinate = raw.geometry.location.into();
    Some(RestaurantSummary {
        name: raw.name,
        rating,
        address: raw.vicinity,
        distance_m: haversine_distance(origin, &coordinate),
        coordinate,
        place_id: raw.place_id,
        open_state: raw.opening_hours.and_then(|h| h.open_now).into(),
        icon: cuisine::icon_for(keyword),
    })
}

/// Filter, summarize and sort raw places by ascending distance.
///
/// `keyword` is the bare cuisine (no vegetarian prefix) so the icon lookup
/// hits the catalog. The sort is stable, so equal distances keep API order.
pub fn rank(origin: &Coordinate, keyword: &str, raw: Vec<RawPlace>) -> Vec<RestaurantSummary> {
    let mut summaries: Vec<RestaurantSummary> = raw
        .into_iter()
        .filter_map(|place| summarize(origin, keyword, place))
        .collect();
    summaries.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    summaries
}

/// Run one search end to end.
pub async fn run_search(
    provider: &dyn PlacesProvider,
    query: &SearchQuery,
) -> Result<Vec<RestaurantSummary>, PlacesError> {
    let keyword = query.keyword();
    let request = NearbySearchRequest {
        location: query.origin,
        radius_m: SEARCH_RADIUS_M,
        place_type: PLACE_TYPE,
        keyword: &keyword,
    };
    let raw = provider.nearby_search(request).await?;

    let fetched = raw.len();
    let ranked = rank(&query.origin, &query.cuisine, raw);
    info!(
        "Search {:?}: {} fetched, {} kept after rating filter",
        keyword,
        fetched,
        ranked.len()
    );
    Ok(ranked)
}

/// Fetch the detail modal contents for one place.
pub async fn fetch_detail(
    provider: &dyn PlacesProvider,
    place_id: &str,
) -> Result<RestaurantDetail, PlacesError> {
    let raw = provider.place_details(place_id).await?;
    Ok(RestaurantDetail::from_raw(place_id, raw, provider))
}

/// Uniformly random index into a list of `len` items, `None` when empty.
pub fn pick_surprise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::{Geometry, LatLng, OpeningHours, Photo};
    use crate::test_support::StubPlacesProvider;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn raw(place_id: &str, lat: f64, lng: f64, rating: Option<f64>) -> RawPlace {
        RawPlace {
            name: format!("Place {place_id}"),
            rating,
            vicinity: format!("{place_id} Street"),
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
            place_id: place_id.to_string(),
            opening_hours: None,
        }
    }

    const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    #[test]
    fn test_keyword_plain() {
        let q = SearchQuery::new(ORIGIN, "italian", false);
        assert_eq!(q.keyword(), "italian");
    }

    #[test]
    fn test_keyword_vegetarian_prefix() {
        let q = SearchQuery::new(ORIGIN, "indian", true);
        assert_eq!(q.keyword(), "vegetarian indian");
    }

    #[test]
    fn test_low_rated_candidate_is_dropped() {
        let places = vec![
            raw("a", 0.0, 0.01, Some(4.2)),
            raw("b", 0.0, 0.005, Some(3.9)),
        ];
        let ranked = rank(&ORIGIN, "italian", places);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].place_id, "a");
        assert!((ranked[0].distance_m - 1111.95).abs() < 1.0);
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(rank(&ORIGIN, "italian", Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_rating_is_dropped() {
        let ranked = rank(&ORIGIN, "italian", vec![raw("a", 0.0, 0.001, None)]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rating_floor_is_inclusive() {
        let ranked = rank(&ORIGIN, "italian", vec![raw("a", 0.0, 0.001, Some(4.0))]);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_sorted_by_ascending_distance() {
        let places = vec![
            raw("far", 0.0, 0.015, Some(4.5)),
            raw("near", 0.0, 0.001, Some(4.1)),
            raw("mid", 0.005, 0.0, Some(4.9)),
        ];
        let ranked = rank(&ORIGIN, "chinese", places);
        let ids: Vec<&str> = ranked.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert!(ranked.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
        assert!(ranked.iter().all(|r| r.rating >= MIN_RATING));
    }

    #[test]
    fn test_equal_distances_keep_api_order() {
        let places = vec![
            raw("first", 0.0, 0.002, Some(4.1)),
            raw("second", 0.0, -0.002, Some(4.8)),
            raw("third", 0.0, 0.002, Some(4.3)),
        ];
        let ranked = rank(&ORIGIN, "chinese", places);
        let ids: Vec<&str> = ranked.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_open_state_derivation() {
        let mut open = raw("o", 0.0, 0.0, Some(4.5));
        open.opening_hours = Some(OpeningHours {
            open_now: Some(true),
        });
        let mut closed = raw("c", 0.0, 0.0, Some(4.5));
        closed.opening_hours = Some(OpeningHours {
            open_now: Some(false),
        });
        let mut no_flag = raw("n", 0.0, 0.0, Some(4.5));
        no_flag.opening_hours = Some(OpeningHours { open_now: None });
        let absent = raw("a", 0.0, 0.0, Some(4.5));

        let state = |p| summarize(&ORIGIN, "italian", p).unwrap().open_state;
        assert_eq!(state(open), OpenState::Open);
        assert_eq!(state(closed), OpenState::Closed);
        assert_eq!(state(no_flag), OpenState::Unknown);
        assert_eq!(state(absent), OpenState::Unknown);
    }

    #[test]
    fn test_icon_from_cuisine() {
        let s = summarize(&ORIGIN, "japanese", raw("a", 0.0, 0.0, Some(4.5))).unwrap();
        assert_eq!(s.icon, "🍣");
        let s = summarize(&ORIGIN, "korean", raw("a", 0.0, 0.0, Some(4.5))).unwrap();
        assert_eq!(s.icon, cuisine::DEFAULT_ICON);
    }

    #[test]
    fn test_top_pick_threshold() {
        let mut s = summarize(&ORIGIN, "italian", raw("a", 0.0, 0.0, Some(4.5))).unwrap();
        assert!(s.is_top_pick());
        s.rating = 4.4;
        assert!(!s.is_top_pick());
    }

    #[test]
    fn test_price_display() {
        let mut detail = RestaurantDetail {
            place_id: "p".to_string(),
            name: "n".to_string(),
            phone: None,
            price_level: None,
            website: None,
            photo_reference: None,
            photo_url: None,
            coordinate: None,
        };
        assert_eq!(detail.price_display(), "₹");
        detail.price_level = Some(0);
        assert_eq!(detail.price_display(), "₹");
        detail.price_level = Some(3);
        assert_eq!(detail.price_display(), "₹₹₹");
    }

    #[test]
    fn test_pick_surprise_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_surprise(0, &mut rng), None);
    }

    #[test]
    fn test_pick_surprise_stays_in_bounds_and_covers_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let idx = pick_surprise(3, &mut rng).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[tokio::test]
    async fn test_run_search_sends_query_and_ranks() {
        let provider = StubPlacesProvider::with_places(vec![
            raw("far", 0.0, 0.01, Some(4.2)),
            raw("low", 0.0, 0.005, Some(3.9)),
            raw("near", 0.0, 0.002, Some(4.7)),
        ]);
        let query = SearchQuery::new(ORIGIN, "mexican", true);
        let ranked = run_search(&provider, &query).await.unwrap();

        let ids: Vec<&str> = ranked.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["near", "far"]);
        assert!(ranked.iter().all(|r| r.icon == "🌮"));
        assert_eq!(
            provider.last_keyword().as_deref(),
            Some("vegetarian mexican")
        );
    }

    #[tokio::test]
    async fn test_run_search_propagates_failure() {
        let provider = StubPlacesProvider::failing(PlacesError::Network("down".to_string()));
        let query = SearchQuery::new(ORIGIN, "italian", false);
        let result = run_search(&provider, &query).await;
        assert_eq!(result, Err(PlacesError::Network("down".to_string())));
    }

    #[tokio::test]
    async fn test_fetch_detail_maps_fields() {
        let provider = StubPlacesProvider::with_detail(RawPlaceDetail {
            name: "Sushi Bar".to_string(),
            formatted_phone_number: Some("080 1234".to_string()),
            price_level: Some(2),
            website: Some(String::new()),
            geometry: Some(Geometry {
                location: LatLng { lat: 1.0, lng: 2.0 },
            }),
            photos: vec![Photo {
                photo_reference: "ref-9".to_string(),
            }],
        });
        let detail = fetch_detail(&provider, "abc").await.unwrap();
        assert_eq!(detail.place_id, "abc");
        assert_eq!(detail.name, "Sushi Bar");
        assert_eq!(detail.phone.as_deref(), Some("080 1234"));
        assert_eq!(detail.website, None);
        assert_eq!(detail.photo_reference.as_deref(), Some("ref-9"));
        assert_eq!(detail.photo_url.as_deref(), Some("stub://photo/ref-9?w=400"));
        assert_eq!(detail.coordinate, Some(Coordinate::new(1.0, 2.0)));
    }

    #[tokio::test]
    async fn test_detail_debug_hides_photo_query() {
        let provider = StubPlacesProvider::with_detail(RawPlaceDetail {
            name: "Sushi Bar".to_string(),
            photos: vec![Photo {
                photo_reference: "ref-9".to_string(),
            }],
            ..RawPlaceDetail::default()
        });
        let detail = fetch_detail(&provider, "abc").await.unwrap();
        let printed = format!("{:?}", detail);
        assert!(printed.contains("stub://photo/ref-9"));
        assert!(!printed.contains("w=400"));
    }
}
