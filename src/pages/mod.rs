use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub mod dashboard;
pub mod features;
pub mod home;
pub mod impact;
pub mod not_found;
pub mod technical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Features,
    Technical,
    Impact,
    NotFound,
}

/// Navigation order, mirrored by the tab bar and the number keys.
pub const NAV: [(Page, &str, &str); 5] = [
    (Page::Home, "Home", "/"),
    (Page::Dashboard, "Dashboard", "/dashboard"),
    (Page::Features, "Features", "/features"),
    (Page::Technical, "Technical", "/technical"),
    (Page::Impact, "Impact", "/impact"),
];

impl Page {
    /// Route lookup with a catch-all: anything unmatched lands on NotFound.
    pub fn from_route(route: &str) -> Page {
        NAV.iter()
            .find(|(_, _, path)| *path == route)
            .map(|(page, _, _)| *page)
            .unwrap_or(Page::NotFound)
    }

    pub fn nav_index(&self) -> Option<usize> {
        NAV.iter().position(|(page, _, _)| page == self)
    }

    pub fn next(&self) -> Page {
        match self.nav_index() {
            Some(idx) => NAV[(idx + 1) % NAV.len()].0,
            None => Page::Home,
        }
    }

    pub fn prev(&self) -> Page {
        match self.nav_index() {
            Some(idx) => NAV[(idx + NAV.len() - 1) % NAV.len()].0,
            None => Page::Home,
        }
    }
}

pub(crate) fn accent() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Shared renderer for the static marketing pages: a titled block around
/// scrollable text.
pub(crate) fn render_static(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    let body = Paragraph::new(lines)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_resolve() {
        assert_eq!(Page::from_route("/"), Page::Home);
        assert_eq!(Page::from_route("/dashboard"), Page::Dashboard);
        assert_eq!(Page::from_route("/features"), Page::Features);
        assert_eq!(Page::from_route("/technical"), Page::Technical);
        assert_eq!(Page::from_route("/impact"), Page::Impact);
    }

    #[test]
    fn unknown_routes_fall_through() {
        assert_eq!(Page::from_route("/admin"), Page::NotFound);
        assert_eq!(Page::from_route(""), Page::NotFound);
        assert_eq!(Page::from_route("/dashboard/"), Page::NotFound);
    }

    #[test]
    fn nav_cycles_in_order() {
        assert_eq!(Page::Home.next(), Page::Dashboard);
        assert_eq!(Page::Impact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Impact);
        // The catch-all page is not part of the cycle.
        assert_eq!(Page::NotFound.next(), Page::Home);
        assert_eq!(Page::NotFound.nav_index(), None);
    }
}
