//! # Restaurant List Component
//!
//! Scrollable cards, one per search hit, in ranked order. The list cursor
//! mirrors `App::selected`; ratatui's `ListState` keeps the selected card
//! in view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::pipeline::RestaurantSummary;
use crate::tui::components::truncate_str;

/// Persistent scroll state for the list.
#[derive(Default)]
pub struct RestaurantListState {
    pub list_state: ListState,
}

/// Transient render wrapper.
pub struct RestaurantList<'a> {
    state: &'a mut RestaurantListState,
    restaurants: &'a [RestaurantSummary],
    selected: Option<usize>,
    empty_message: &'a str,
}

impl<'a> RestaurantList<'a> {
    pub fn new(
        state: &'a mut RestaurantListState,
        restaurants: &'a [RestaurantSummary],
        selected: Option<usize>,
        empty_message: &'a str,
    ) -> Self {
        Self {
            state,
            restaurants,
            selected,
            empty_message,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Restaurants ")
            .padding(Padding::horizontal(1));

        if self.restaurants.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .restaurants
            .iter()
            .enumerate()
            .map(|(i, r)| ListItem::new(card(i, r, width)))
            .collect();

        self.state.list_state.select(self.selected);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(0x3a, 0x1a, 0x12)))
            .highlight_symbol("▌");
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// The lines of one card.
pub fn card(index: usize, r: &RestaurantSummary, width: usize) -> Text<'static> {
    let detail = Style::default().fg(Color::Gray);
    let title = format!("{}. {} {}", index + 1, r.icon, r.name);

    let mut lines = vec![Line::from(Span::styled(
        truncate_str(&title, width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if r.is_top_pick() {
        lines.push(Line::from(Span::styled(
            "🔥 Top Pick",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::styled(format!("⭐ Rating: {}", r.rating), detail));
    lines.push(Line::styled(
        truncate_str(&format!("📍 {}", r.address), width),
        detail,
    ));
    lines.push(Line::styled(
        format!("📏 {} meters away", r.distance_m.round() as u64),
        detail,
    ));
    lines.push(Line::styled(r.open_state.label(), detail));
    lines.push(Line::default());
    Text::from(lines)
}
