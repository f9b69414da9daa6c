//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: app name, active filters and status line
//! - `Controls`: cuisine dropdown value, veg switch, surprise hint
//! - `MapView`: braille map with numbered markers
//! - `DetailModal`: extended info overlay for one restaurant
//! - `Alert`: blocking message box
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state between frames:
//! - `RestaurantList`: scrollable result cards
//! - `CuisinePicker`: dropdown overlay, emits `CuisinePickerEvent`
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, the wrapper borrows it
//! for one frame.
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! MapView { origin, restaurants: &app.restaurants, selected: app.selected }
//!     .render(frame, area);
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod alert;
pub mod controls;
pub mod cuisine_picker;
pub mod detail_modal;
pub mod map_view;
pub mod restaurant_list;
mod title_bar;

pub use alert::Alert;
pub use controls::{Controls, Footer};
pub use cuisine_picker::{CuisinePicker, CuisinePickerEvent, CuisinePickerState};
pub use detail_modal::DetailModal;
pub use map_view::MapView;
pub use restaurant_list::{RestaurantList, RestaurantListState};
pub use title_bar::TitleBar;

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Truncate to `max_width` terminal columns, ending with `...` when cut.
///
/// Measured in display width, so emoji and CJK names never split a cell.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Dosa Point", 20), "Dosa Point");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("Trattoria Bella Napoli", 12), "Trattoria...");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each 🍕 is two columns wide
        let out = truncate_str("🍕🍕🍕🍕", 7);
        assert_eq!(out, "🍕🍕...");
        assert!(out.width() <= 7);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_str("abcdef", 2), "..");
    }

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
