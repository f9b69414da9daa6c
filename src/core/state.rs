//! # Application State
//!
//! Core business state for the single restaurant screen. Domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn PlacesProvider>   // places API
//! ├── location: LocationState             // pending / ready / unavailable
//! ├── cuisine: Option<String>             // dropdown value (keyword)
//! ├── veg_only: bool                      // "Veg Only" switch
//! ├── restaurants: Vec<RestaurantSummary> // ranked results
//! ├── selected: Option<usize>             // list cursor
//! ├── is_loading: bool                    // search in flight
//! ├── status_message: String              // title bar text
//! ├── detail: Option<RestaurantDetail>    // modal contents
//! ├── detail_visible: bool                // modal shown
//! ├── detail_loading: bool                // detail request in flight
//! ├── alert: Option<String>               // blocking alert
//! ├── search_generation: u64              // latest search id
//! ├── detail_generation: u64              // latest detail id
//! └── rng: StdRng                         // "surprise me"
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::ResolvedConfig;
use crate::core::cuisine;
use crate::core::geo::Coordinate;
use crate::core::pipeline::{RestaurantDetail, RestaurantSummary, SearchQuery};
use crate::places::PlacesProvider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    /// Waiting for the one-shot location read.
    Pending,
    Ready(Coordinate),
    /// Permission denied or read failed. The screen stays empty for good.
    Unavailable,
}

pub struct App {
    pub provider: Arc<dyn PlacesProvider>,
    pub location: LocationState,
    pub cuisine: Option<String>,
    pub veg_only: bool,
    pub restaurants: Vec<RestaurantSummary>,
    pub selected: Option<usize>,
    pub is_loading: bool,
    pub status_message: String,
    pub detail: Option<RestaurantDetail>,
    pub detail_visible: bool,
    pub detail_loading: bool,
    pub alert: Option<String>,
    /// Bumped for every search that is spawned; results carrying an older
    /// value are dropped.
    pub search_generation: u64,
    pub detail_generation: u64,
    pub rng: StdRng,
}

impl App {
    pub fn new(provider: Arc<dyn PlacesProvider>, rng: StdRng) -> Self {
        Self {
            provider,
            location: LocationState::Pending,
            cuisine: None,
            veg_only: false,
            restaurants: Vec::new(),
            selected: None,
            is_loading: false,
            status_message: String::from("Fetching your location..."),
            detail: None,
            detail_visible: false,
            detail_loading: false,
            alert: None,
            search_generation: 0,
            detail_generation: 0,
            rng,
        }
    }

    pub fn from_config(provider: Arc<dyn PlacesProvider>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(provider, StdRng::from_entropy());
        app.cuisine = config.default_cuisine.clone();
        app.veg_only = config.veg_only;
        app
    }

    pub fn origin(&self) -> Option<Coordinate> {
        match self.location {
            LocationState::Ready(c) => Some(c),
            _ => None,
        }
    }

    /// The query for the current filters, if a search can run at all.
    pub fn search_query(&self) -> Option<SearchQuery> {
        let origin = self.origin()?;
        let cuisine = self.cuisine.as_deref().filter(|c| !c.is_empty())?;
        Some(SearchQuery::new(origin, cuisine, self.veg_only))
    }

    pub fn selected_restaurant(&self) -> Option<&RestaurantSummary> {
        self.selected.and_then(|i| self.restaurants.get(i))
    }

    pub fn cuisine_label(&self) -> &str {
        self.cuisine
            .as_deref()
            .map(cuisine::label_for)
            .unwrap_or("Select Cuisine")
    }

    /// Status line describing the current result list.
    pub fn results_status(&self) -> String {
        match self.restaurants.len() {
            0 => "No restaurants".to_string(),
            1 => "1 restaurant".to_string(),
            n => format!("{n} restaurants"),
        }
    }
}
