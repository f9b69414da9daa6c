//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (waiting for location, search or detail in flight): draws
//!   every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   results or terminal resize.
//!
//! ## Key routing
//!
//! Overlays take the keyboard in stacking order: alert, then cuisine picker,
//! then detail modal, then the main screen. Ctrl+C quits from anywhere.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::pipeline::{SearchQuery, fetch_detail, run_search};
use crate::core::state::{App, LocationState};
use crate::location::{self, LocationService};
use crate::places::{GooglePlacesProvider, PlacesError, PlacesProvider, redact_url};
use crate::tui::component::EventHandler;
use crate::tui::components::{CuisinePickerEvent, CuisinePickerState, RestaurantListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub restaurant_list: RestaurantListState,
    /// Cuisine dropdown overlay (None = hidden)
    pub cuisine_picker: Option<CuisinePickerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            restaurant_list: RestaurantListState::default(),
            cuisine_picker: None,
        }
    }

    pub fn open_cuisine_picker(&mut self, current: Option<&str>) {
        self.cuisine_picker = Some(CuisinePickerState::new(current));
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the Places provider from resolved config.
///
/// Fails with `PlacesError::Config` when no API key was configured.
pub fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn PlacesProvider>, PlacesError> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            PlacesError::Config(
                "Places API key missing (config file or GOOGLE_PLACES_API_KEY)".to_string(),
            )
        })?;
    Ok(Arc::new(GooglePlacesProvider::new(
        api_key,
        Some(config.base_url.clone()),
    )))
}

pub fn run(config: ResolvedConfig, location_service: Arc<dyn LocationService>) -> std::io::Result<()> {
    let (provider, startup_alert) = match build_provider(&config) {
        Ok(provider) => (provider, None),
        Err(e) => {
            warn!("{}", e);
            // Requests will keep failing with the same config error
            let provider: Arc<dyn PlacesProvider> = Arc::new(GooglePlacesProvider::new(
                String::new(),
                Some(config.base_url.clone()),
            ));
            (provider, Some(e.to_string()))
        }
    };
    info!("Using places provider: {}", provider.name());

    let mut app = App::from_config(provider, &config);
    app.alert = startup_alert;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_location(location_service, tx.clone());

    // The in-flight search, aborted when a newer one starts
    let mut search_handle: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading
            || app.detail_loading
            || matches!(app.location, LocationState::Pending);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = route_event(&app, &mut tui, &event)
                && dispatch(&mut app, action, &tx, &mut search_handle)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (location, search, detail, links)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx, &mut search_handle) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = search_handle {
        handle.abort();
    }
    ratatui::restore();
    info!("Crave Radar shutting down");
    Ok(())
}

/// Translate a terminal event into an action for whichever layer owns the
/// keyboard right now.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // Alert is blocking
    if app.alert.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissAlert),
            _ => None,
        };
    }

    if let Some(picker) = tui.cuisine_picker.as_mut() {
        return match picker.handle_event(event)? {
            CuisinePickerEvent::Select(keyword) => {
                tui.cuisine_picker = None;
                Some(Action::SelectCuisine(keyword.to_string()))
            }
            CuisinePickerEvent::Dismiss => {
                tui.cuisine_picker = None;
                None
            }
        };
    }

    if app.detail_visible {
        return match event {
            TuiEvent::InputChar('w') => Some(Action::OpenWebsite),
            TuiEvent::InputChar('c') => Some(Action::CallPhone),
            TuiEvent::InputChar('d') => Some(Action::GetDirections),
            TuiEvent::InputChar('p') => Some(Action::OpenPhoto),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::CloseDetail),
            _ => None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('c') => {
            tui.open_cuisine_picker(app.cuisine.as_deref());
            None
        }
        TuiEvent::InputChar('v') => Some(Action::ToggleVegOnly),
        TuiEvent::InputChar('s') => Some(Action::SurpriseMe),
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(Action::SelectPrevious),
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => Some(Action::SelectNext),
        TuiEvent::Submit => Some(Action::OpenSelected),
        _ => None,
    }
}

/// Apply an action and carry out its effect. Returns true when the app
/// should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    search_handle: &mut Option<AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::Quit => return true,
        Effect::SpawnSearch { generation, query } => {
            if let Some(previous) = search_handle.take() {
                debug!("Aborting superseded search task");
                previous.abort();
            }
            *search_handle = Some(spawn_search(
                app.provider.clone(),
                generation,
                query,
                tx.clone(),
            ));
        }
        Effect::SpawnDetail {
            generation,
            place_id,
        } => spawn_detail(app.provider.clone(), generation, place_id, tx.clone()),
        Effect::OpenUrl(url) => open_url(url, tx.clone()),
        Effect::None => {}
    }
    false
}

fn spawn_location(service: Arc<dyn LocationService>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let result = location::acquire(service.as_ref()).await;
        if tx.send(Action::LocationResolved(result)).is_err() {
            warn!("Failed to send location result: receiver dropped");
        }
    });
}

fn spawn_search(
    provider: Arc<dyn PlacesProvider>,
    generation: u64,
    query: SearchQuery,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning search generation {}", generation);
    let handle = tokio::spawn(async move {
        let result = run_search(provider.as_ref(), &query).await;
        if tx
            .send(Action::SearchFinished { generation, result })
            .is_err()
        {
            warn!("Failed to send search result: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_detail(
    provider: Arc<dyn PlacesProvider>,
    generation: u64,
    place_id: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning detail fetch for {} (generation {})", place_id, generation);
    tokio::spawn(async move {
        let result = fetch_detail(provider.as_ref(), &place_id).await;
        if tx
            .send(Action::DetailFinished { generation, result })
            .is_err()
        {
            warn!("Failed to send detail result: receiver dropped");
        }
    });
}

/// Hand an outbound link to the system browser or URI handler.
///
/// Only the redacted form of the link is logged or reported back.
fn open_url(url: String, tx: mpsc::Sender<Action>) {
    let shown = redact_url(&url).to_string();
    info!("Opening {}", shown);
    tokio::task::spawn_blocking(move || {
        if let Err(e) = webbrowser::open(&url) {
            warn!("Failed to open {}: {}", shown, e);
            if tx.send(Action::LinkFailed(shown)).is_err() {
                warn!("Failed to send link failure: receiver dropped");
            }
        }
    });
}
