//! # TitleBar Component
//!
//! Top status bar showing the app name, active filters and the status line.
//!
//! Stateless: it receives everything as props and renders a single line.
//!
//! ```text
//! CRAVE RADAR | Italian | Veg | ⠙ Searching vegetarian italian...
//! ```
//!
//! The spinner glyph is only shown while a request is in flight.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const APP_TITLE: &str = "CRAVE RADAR";

/// Top status bar component.
pub struct TitleBar {
    /// Dropdown label of the current cuisine, if any
    pub cuisine_label: Option<String>,
    pub veg_only: bool,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        cuisine_label: Option<String>,
        veg_only: bool,
        status_message: String,
        is_loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            cuisine_label,
            veg_only,
            status_message,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = Style::default().fg(Color::Rgb(0xAD, 0x22, 0x01));
        let mut spans = vec![Span::styled(
            APP_TITLE,
            accent.add_modifier(Modifier::BOLD),
        )];

        if let Some(label) = &self.cuisine_label {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(label.clone()));
        }
        if self.veg_only {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Veg", Style::default().fg(Color::Green)));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            if self.is_loading {
                let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
                spans.push(Span::styled(format!("{glyph} "), accent));
            }
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
