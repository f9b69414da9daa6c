//! # Detail Modal Component
//!
//! Overlay with the extended fields of one restaurant. Link actions are only
//! advertised when the field they need is present.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::pipeline::RestaurantDetail;
use crate::tui::component::Component;
use crate::tui::components::centered_rect;

pub struct DetailModal<'a> {
    pub detail: &'a RestaurantDetail,
}

impl<'a> DetailModal<'a> {
    pub fn new(detail: &'a RestaurantDetail) -> Self {
        Self { detail }
    }

    /// Body lines, also used by tests.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let d = self.detail;
        let accent = Style::default().fg(Color::Rgb(0xAD, 0x22, 0x01));
        let mut lines = vec![
            Line::from(Span::styled(
                d.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::default(),
        ];

        // The photo URL carries the API key, so only its presence is shown
        if d.photo_url.is_some() {
            lines.push(Line::styled(
                "📷 Photo available [p]",
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(format!("💰 Expensive: {}", d.price_display())));
        lines.push(Line::from(format!(
            "📞 {}",
            d.phone.as_deref().unwrap_or("N/A")
        )));
        lines.push(Line::styled(
            d.website
                .clone()
                .unwrap_or_else(|| "No website available".to_string()),
            accent,
        ));
        lines.push(Line::default());

        let mut actions: Vec<&str> = Vec::new();
        if d.website.is_some() {
            actions.push("[w] Visit Website");
        }
        if d.phone.is_some() {
            actions.push("[c] Call");
        }
        if d.coordinate.is_some() {
            actions.push("[d] 🧭 Get Directions");
        }
        for action in actions {
            lines.push(Line::styled(action, accent.add_modifier(Modifier::BOLD)));
        }
        lines
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(0xAD, 0x22, 0x01)))
            .title(" Details ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}
