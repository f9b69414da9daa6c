//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User picks a cuisine? That's `Action::SelectCuisine(keyword)`.
//! Search responds? That's `Action::SearchFinished { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an [`Effect`] describing the I/O the adapter should do.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Request fencing
//!
//! Every spawned search or detail request carries a generation number. Only
//! the response matching the latest generation is applied; older ones are
//! logged and dropped, so rapid filter changes can't overwrite newer results
//! with stale ones.

use log::{debug, error, info};

use crate::core::geo::{Coordinate, directions_url};
use crate::core::pipeline::{RestaurantDetail, RestaurantSummary, SearchQuery, pick_surprise};
use crate::core::state::{App, LocationState};
use crate::location::LocationError;
use crate::places::PlacesError;

/// Alert text for a failed detail fetch.
pub const DETAIL_FAILED_ALERT: &str = "Failed to fetch details";

#[derive(Debug)]
pub enum Action {
    LocationResolved(Result<Coordinate, LocationError>),
    SelectCuisine(String),
    ToggleVegOnly,
    SearchFinished {
        generation: u64,
        result: Result<Vec<RestaurantSummary>, PlacesError>,
    },
    SelectNext,
    SelectPrevious,
    /// Open the detail modal for the list cursor.
    OpenSelected,
    OpenDetail(usize),
    SurpriseMe,
    DetailFinished {
        generation: u64,
        result: Result<RestaurantDetail, PlacesError>,
    },
    CloseDetail,
    OpenWebsite,
    CallPhone,
    GetDirections,
    OpenPhoto,
    /// The platform refused to open an outbound link.
    LinkFailed(String),
    DismissAlert,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnSearch { generation: u64, query: SearchQuery },
    SpawnDetail { generation: u64, place_id: String },
    OpenUrl(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LocationResolved(Ok(coordinate)) => {
            app.location = LocationState::Ready(coordinate);
            app.status_message = String::new();
            // A cuisine preselected via config/CLI searches right away
            start_search(app)
        }
        Action::LocationResolved(Err(e)) => {
            error!("Error fetching location: {}", e);
            app.location = LocationState::Unavailable;
            app.status_message = "Location unavailable".to_string();
            app.alert = Some(e.alert_message().to_string());
            Effect::None
        }
        Action::SelectCuisine(keyword) => {
            if app.cuisine.as_deref() == Some(keyword.as_str()) {
                debug!("Cuisine {:?} already active, no new search", keyword);
                return Effect::None;
            }
            app.cuisine = Some(keyword);
            start_search(app)
        }
        Action::ToggleVegOnly => {
            app.veg_only = !app.veg_only;
            start_search(app)
        }
        Action::SearchFinished { generation, result } => {
            if generation != app.search_generation {
                debug!(
                    "Dropping stale search result (generation {}, latest {})",
                    generation, app.search_generation
                );
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(restaurants) => {
                    info!("Search generation {} applied: {} results", generation, restaurants.len());
                    app.restaurants = restaurants;
                    app.selected = if app.restaurants.is_empty() { None } else { Some(0) };
                }
                Err(e) => {
                    // Stale results stay on screen
                    error!("Error fetching restaurants: {}", e);
                }
            }
            app.status_message = app.results_status();
            Effect::None
        }
        Action::SelectNext => {
            if !app.restaurants.is_empty() {
                let last = app.restaurants.len() - 1;
                app.selected = Some(app.selected.map_or(0, |i| (i + 1).min(last)));
            }
            Effect::None
        }
        Action::SelectPrevious => {
            if !app.restaurants.is_empty() {
                app.selected = Some(app.selected.map_or(0, |i| i.saturating_sub(1)));
            }
            Effect::None
        }
        Action::OpenSelected => match app.selected {
            Some(index) => start_detail(app, index),
            None => Effect::None,
        },
        Action::OpenDetail(index) => start_detail(app, index),
        Action::SurpriseMe => match pick_surprise(app.restaurants.len(), &mut app.rng) {
            Some(index) => {
                info!("Surprise pick: index {} of {}", index, app.restaurants.len());
                app.selected = Some(index);
                start_detail(app, index)
            }
            None => Effect::None,
        },
        Action::DetailFinished { generation, result } => {
            if generation != app.detail_generation {
                debug!(
                    "Dropping stale detail result (generation {}, latest {})",
                    generation, app.detail_generation
                );
                return Effect::None;
            }
            app.detail_loading = false;
            match result {
                Ok(detail) => {
                    app.detail = Some(detail);
                    app.detail_visible = true;
                }
                Err(e) => {
                    error!("Error fetching details: {}", e);
                    app.alert = Some(DETAIL_FAILED_ALERT.to_string());
                }
            }
            app.status_message = app.results_status();
            Effect::None
        }
        Action::CloseDetail => {
            app.detail_visible = false;
            app.detail = None;
            Effect::None
        }
        Action::OpenWebsite => visible_detail(app)
            .and_then(|d| d.website.clone())
            .map_or(Effect::None, Effect::OpenUrl),
        Action::CallPhone => visible_detail(app)
            .and_then(|d| d.phone.as_deref().map(tel_uri))
            .map_or(Effect::None, Effect::OpenUrl),
        Action::GetDirections => visible_detail(app)
            .and_then(|d| d.coordinate.as_ref().map(directions_url))
            .map_or(Effect::None, Effect::OpenUrl),
        Action::OpenPhoto => visible_detail(app)
            .and_then(|d| d.photo_url.clone())
            .map_or(Effect::None, Effect::OpenUrl),
        Action::LinkFailed(url) => {
            app.status_message = match url.strip_prefix("tel:") {
                Some(number) => {
                    format!("Couldn't dial {number}: calls need a tel: handler on this system")
                }
                None => format!("Couldn't open {url}"),
            };
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Start a search for the current filters, if location and cuisine allow it.
fn start_search(app: &mut App) -> Effect {
    let Some(query) = app.search_query() else {
        return Effect::None;
    };
    app.search_generation += 1;
    app.is_loading = true;
    app.status_message = format!("Searching {}...", query.keyword());
    info!(
        "Starting search generation {}: {:?}",
        app.search_generation,
        query.keyword()
    );
    Effect::SpawnSearch {
        generation: app.search_generation,
        query,
    }
}

fn start_detail(app: &mut App, index: usize) -> Effect {
    let Some(restaurant) = app.restaurants.get(index) else {
        return Effect::None;
    };
    let place_id = restaurant.place_id.clone();
    let status = format!("Loading {}...", restaurant.name);
    app.detail_generation += 1;
    app.detail_loading = true;
    app.status_message = status;
    Effect::SpawnDetail {
        generation: app.detail_generation,
        place_id,
    }
}

fn visible_detail(app: &App) -> Option<&RestaurantDetail> {
    if app.detail_visible {
        app.detail.as_ref()
    } else {
        None
    }
}

/// `tel:` URI for a formatted phone number. Whitespace is not valid in URIs.
pub fn tel_uri(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
