//! # Map View Component
//!
//! A braille canvas centered on the user's position with one numbered marker
//! per restaurant. Numbers match the list cards; the selected marker is
//! highlighted.
//!
//! The viewport is a square in degrees around the origin, at least
//! [`MIN_SPAN_DEG`] wide and grown to fit every marker.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders};

use crate::core::geo::Coordinate;
use crate::core::pipeline::RestaurantSummary;
use crate::tui::component::Component;

/// Smallest viewport span (both axes), matching a city-block zoom level.
pub const MIN_SPAN_DEG: f64 = 0.01;

pub struct MapView<'a> {
    pub origin: Coordinate,
    pub restaurants: &'a [RestaurantSummary],
    pub selected: Option<usize>,
}

/// Viewport bounds as `([min_lng, max_lng], [min_lat, max_lat])`.
pub fn viewport(origin: &Coordinate, restaurants: &[RestaurantSummary]) -> ([f64; 2], [f64; 2]) {
    let half = restaurants
        .iter()
        .map(|r| {
            let dlat = (r.coordinate.latitude - origin.latitude).abs();
            let dlng = (r.coordinate.longitude - origin.longitude).abs();
            dlat.max(dlng) * 1.1
        })
        .fold(MIN_SPAN_DEG / 2.0, f64::max);
    (
        [origin.longitude - half, origin.longitude + half],
        [origin.latitude - half, origin.latitude + half],
    )
}

impl Component for MapView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (x_bounds, y_bounds) = viewport(&self.origin, self.restaurants);
        let origin = self.origin;
        let restaurants = self.restaurants;
        let selected = self.selected;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Map "),
            )
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                let plain: Vec<(f64, f64)> = restaurants
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| Some(*i) != selected)
                    .map(|(_, r)| (r.coordinate.longitude, r.coordinate.latitude))
                    .collect();
                ctx.draw(&Points {
                    coords: &plain,
                    color: Color::Gray,
                });
                ctx.draw(&Points {
                    coords: &[(origin.longitude, origin.latitude)],
                    color: Color::Cyan,
                });
                ctx.layer();

                for (i, r) in restaurants.iter().enumerate() {
                    let style = if Some(i) == selected {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(Color::Rgb(0xAD, 0x22, 0x01))
                    };
                    ctx.print(
                        r.coordinate.longitude,
                        r.coordinate.latitude,
                        Span::styled(format!("{}", i + 1), style),
                    );
                }
                ctx.print(
                    origin.longitude,
                    origin.latitude,
                    Span::styled("◉ You are here", Style::default().fg(Color::Cyan)),
                );
            });

        frame.render_widget(canvas, area);
    }
}
