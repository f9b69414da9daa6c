use crate::core::cuisine;
use crate::core::state::{App, LocationState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Alert, Controls, CuisinePicker, DetailModal, Footer, MapView, RestaurantList, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOCATION_UNAVAILABLE_HINT: &str =
    "Location unavailable. Pass --lat/--lng or set CRAVE_RADAR_LAT and CRAVE_RADAR_LNG.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, controls_area, body_area, footer_area] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(
        app.cuisine
            .as_deref()
            .map(|k| cuisine::label_for(k).to_string()),
        app.veg_only,
        app.status_message.clone(),
        app.is_loading || app.detail_loading,
        spinner_frame,
    )
    .render(frame, title_area);

    Controls {
        cuisine: app.cuisine.as_deref(),
        veg_only: app.veg_only,
        can_surprise: !app.restaurants.is_empty(),
    }
    .render(frame, controls_area);

    match app.location {
        LocationState::Pending => draw_waiting(frame, body_area, spinner_frame),
        LocationState::Unavailable => draw_centered_message(frame, body_area, LOCATION_UNAVAILABLE_HINT),
        LocationState::Ready(origin) => {
            let [map_area, list_area] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(body_area);
            MapView {
                origin,
                restaurants: &app.restaurants,
                selected: app.selected,
            }
            .render(frame, map_area);

            let empty_message = empty_list_message(app);
            RestaurantList::new(
                &mut tui.restaurant_list,
                &app.restaurants,
                app.selected,
                empty_message,
            )
            .render(frame, list_area);
        }
    }

    Footer {
        detail_open: app.detail_visible,
    }
    .render(frame, footer_area);

    // Overlays, bottom to top
    if let Some(picker) = tui.cuisine_picker.as_mut() {
        CuisinePicker::new(picker, app.cuisine.as_deref()).render(frame, frame.area());
    }
    if app.detail_visible
        && let Some(detail) = &app.detail
    {
        DetailModal::new(detail).render(frame, frame.area());
    }
    if let Some(message) = &app.alert {
        Alert { message }.render(frame, frame.area());
    }
}

/// Placeholder text for an empty result list.
pub fn empty_list_message(app: &App) -> &'static str {
    if app.cuisine.is_none() {
        "Press c to pick a cuisine"
    } else if app.is_loading {
        "Searching..."
    } else {
        "No restaurants found"
    }
}

fn draw_waiting(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    draw_centered_message(frame, area, &format!("{spinner} Fetching your location..."));
}

fn draw_centered_message(frame: &mut Frame, area: Rect, message: &str) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let paragraph = Paragraph::new(Line::from(message.to_string()).centered())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(paragraph, middle);
}
