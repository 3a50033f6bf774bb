use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::pages::{accent, muted, render_static};

/// Catch-all page for routes the tracker does not know.
pub fn render(frame: &mut Frame, area: Rect, route: &str) {
    render_static(frame, area, "404", lines(route), 0);
}

pub fn lines(route: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "  404",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Page Not Found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  The quantum state you're looking for doesn't exist in this dimension."),
        Line::from(""),
        Line::from(Span::styled(format!("  No such route: {route}"), muted())),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Press "),
            Span::styled("1", accent()),
            Span::raw(" to return home."),
        ]),
    ]
}
