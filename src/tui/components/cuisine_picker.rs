//! # Cuisine Picker Component
//!
//! The cuisine dropdown, shown as an overlay. Opened with `c`, dismissed
//! with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CuisinePickerState` lives in `TuiState`
//! - `CuisinePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::cuisine::{CATALOG, Cuisine};
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent state for the cuisine dropdown overlay.
pub struct CuisinePickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl CuisinePickerState {
    /// Opens the picker with the current keyword preselected.
    pub fn new(current: Option<&str>) -> Self {
        let selected = current
            .and_then(|k| CATALOG.iter().position(|c| c.keyword == k))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }
}

impl EventHandler for CuisinePickerState {
    type Event = CuisinePickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CuisinePickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('c') => Some(CuisinePickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.selected = (self.selected + 1).min(CATALOG.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => CATALOG
                .get(self.selected)
                .map(|c| CuisinePickerEvent::Select(c.keyword)),
            _ => None,
        }
    }
}

/// Events emitted by the cuisine picker.
#[derive(Debug, PartialEq, Eq)]
pub enum CuisinePickerEvent {
    Select(&'static str),
    Dismiss,
}

/// Transient render wrapper for the cuisine picker overlay.
pub struct CuisinePicker<'a> {
    state: &'a mut CuisinePickerState,
    current: Option<&'a str>,
}

impl<'a> CuisinePicker<'a> {
    pub fn new(state: &'a mut CuisinePickerState, current: Option<&'a str>) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Select Cuisine ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = CATALOG
            .iter()
            .enumerate()
            .map(|(i, cuisine)| self.item(i, cuisine))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }

    fn item(&self, index: usize, cuisine: &Cuisine) -> ListItem<'static> {
        let is_active = self.current == Some(cuisine.keyword);
        let style = if index == self.state.selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_active { "● " } else { "  " };
        ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{} {}", cuisine.icon, cuisine.label), style),
        ]))
    }
}
