//! # Controls and Footer
//!
//! The filter row under the title bar and the key help line at the bottom.
//!
//! ```text
//! Cuisine: [ 🍕 Italian ▾ ]   Veg Only: [●]   🎲 Surprise Me (s)
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::cuisine;
use crate::tui::component::Component;

pub struct Controls<'a> {
    pub cuisine: Option<&'a str>,
    pub veg_only: bool,
    /// Surprise Me only makes sense with results on screen.
    pub can_surprise: bool,
}

impl Controls<'_> {
    pub fn line(&self) -> Line<'static> {
        let accent = Style::default().fg(Color::Rgb(0xAD, 0x22, 0x01));
        let dim = Style::default().fg(Color::DarkGray);

        let dropdown = match self.cuisine {
            Some(keyword) => format!(
                "[ {} {} ▾ ]",
                cuisine::icon_for(keyword),
                cuisine::label_for(keyword)
            ),
            None => "[ Select Cuisine ▾ ]".to_string(),
        };
        let switch = if self.veg_only { "[●]" } else { "[ ]" };
        let switch_style = if self.veg_only {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            dim
        };

        Line::from(vec![
            Span::styled("Cuisine (c): ", dim),
            Span::styled(dropdown, accent.add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("Veg Only (v): ", dim),
            Span::styled(switch, switch_style),
            Span::raw("   "),
            Span::styled(
                "🎲 Surprise Me (s)",
                if self.can_surprise { accent } else { dim },
            ),
        ])
    }
}

impl Component for Controls<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

/// Key help for the current screen.
pub struct Footer {
    pub detail_open: bool,
}

impl Footer {
    pub fn hint(&self) -> &'static str {
        if self.detail_open {
            "w website · c call · d directions · p photo · Esc close"
        } else {
            "↑/↓ move · Enter details · c cuisine · v veg · s surprise · q quit"
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(self.hint(), Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_without_cuisine() {
        let controls = Controls {
            cuisine: None,
            veg_only: false,
            can_surprise: false,
        };
        let text = controls.line().to_string();
        assert!(text.contains("[ Select Cuisine ▾ ]"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn test_controls_with_cuisine_and_veg() {
        let controls = Controls {
            cuisine: Some("dessert"),
            veg_only: true,
            can_surprise: true,
        };
        let text = controls.line().to_string();
        assert!(text.contains("[ 🍰 Sweet Dish ▾ ]"));
        assert!(text.contains("[●]"));
        assert!(text.contains("🎲 Surprise Me (s)"));
    }

    #[test]
    fn test_footer_hint_switches_with_modal() {
        assert!(Footer { detail_open: false }.hint().contains("q quit"));
        assert!(Footer { detail_open: true }.hint().contains("Esc close"));
    }
}
