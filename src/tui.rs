use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::{Frame, Terminal};

use crate::cli::Cli;
use crate::core::error::TrackerError;
use crate::pages::dashboard::DashboardState;
use crate::pages::{self, Page, NAV};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, TrackerError> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

struct AppState {
    page: Page,
    /// The requested route, shown verbatim on the 404 page.
    route: String,
    dashboard: DashboardState,
    refresh_every: Duration,
    next_refresh: Instant,
    scroll: u16,
    /// Rows of page body visible inside the block borders, taken from the
    /// last layout split.
    view_height: u16,
    should_quit: bool,
}

impl AppState {
    fn new(cli: &Cli, rng: &mut impl Rng) -> Self {
        let mut dashboard = DashboardState::new(rng);
        dashboard.auto_refresh = cli.auto_refresh;
        let refresh_every = Duration::from_secs(cli.interval);
        Self {
            page: Page::from_route(&cli.route),
            route: cli.route.clone(),
            dashboard,
            refresh_every,
            next_refresh: Instant::now() + refresh_every,
            scroll: 0,
            view_height: 1,
            should_quit: false,
        }
    }

    fn goto(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.scroll = 0;
        }
    }

    /// Logical line count of the current static page, for scroll clamping.
    fn page_lines(&self) -> usize {
        match self.page {
            Page::Home => pages::home::lines().len(),
            Page::Features => pages::features::lines().len(),
            Page::Technical => pages::technical::lines().len(),
            Page::Impact => pages::impact::lines().len(),
            Page::NotFound => pages::not_found::lines(&self.route).len(),
            Page::Dashboard => 0,
        }
    }

    fn set_view_height(&mut self, height: u16) {
        self.view_height = height.max(1);
        self.clamp_scroll();
    }

    fn max_scroll(&self) -> u16 {
        (self.page_lines() as u16).saturating_sub(self.view_height)
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll > max {
            self.scroll = max;
        }
    }

    fn scroll_down(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_add(step).min(self.max_scroll());
    }

    fn scroll_up(&mut self, step: u16) {
        self.scroll = self.scroll.saturating_sub(step);
    }
}

pub fn run(cli: Cli) -> Result<(), TrackerError> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::rng();
    let mut app = AppState::new(&cli, &mut rng);

    loop {
        if app.dashboard.auto_refresh && Instant::now() >= app.next_refresh {
            app.dashboard.refresh_tick(&mut rng);
            app.next_refresh = Instant::now() + app.refresh_every;
        }

        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key.code, key.modifiers, &mut rng);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers, rng: &mut impl Rng) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => app.goto(app.page.next()),
        KeyCode::BackTab => app.goto(app.page.prev()),
        KeyCode::Char(ch @ '1'..='5') => {
            let idx = ch as usize - '1' as usize;
            app.goto(NAV[idx].0);
        }
        KeyCode::Char('a') => {
            app.dashboard.toggle_auto_refresh();
            if app.dashboard.auto_refresh {
                app.next_refresh = Instant::now() + app.refresh_every;
            }
        }
        KeyCode::Char('r') => {
            app.dashboard.touch(rng);
        }
        KeyCode::Up => {
            if app.page == Page::Dashboard {
                app.dashboard.select_prev();
            } else {
                app.scroll_up(1);
            }
        }
        KeyCode::Down => {
            if app.page == Page::Dashboard {
                app.dashboard.select_next();
            } else {
                app.scroll_down(1);
            }
        }
        KeyCode::PageUp => app.scroll_up(app.view_height),
        KeyCode::PageDown => app.scroll_down(app.view_height),
        KeyCode::Home => app.scroll = 0,
        KeyCode::End => app.scroll = app.max_scroll(),
        _ => {}
    }
}

fn draw(frame: &mut Frame, app: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(frame.size());

    // The body block spends two rows on its borders.
    app.set_view_height(layout[1].height.saturating_sub(2));

    render_navbar(frame, layout[0], app.page);

    match app.page {
        Page::Home => pages::home::render(frame, layout[1], app.scroll),
        Page::Dashboard => pages::dashboard::render(frame, layout[1], &mut app.dashboard),
        Page::Features => pages::features::render(frame, layout[1], app.scroll),
        Page::Technical => pages::technical::render(frame, layout[1], app.scroll),
        Page::Impact => pages::impact::render(frame, layout[1], app.scroll),
        Page::NotFound => pages::not_found::render(frame, layout[1], &app.route),
    }

    render_footer(frame, layout[2], app.page);
}

fn render_navbar(frame: &mut Frame, area: Rect, page: Page) {
    let titles: Vec<Line> = NAV
        .iter()
        .enumerate()
        .map(|(idx, (_, name, _))| {
            Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(*name),
            ])
        })
        .collect();

    let mut tabs = Tabs::new(titles).block(
        Block::default()
            .title("Quantum Jobs Tracker")
            .borders(Borders::ALL),
    );
    // On the 404 page no tab is active, so skip the highlight entirely.
    if let Some(idx) = page.nav_index() {
        tabs = tabs.select(idx).highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    }
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, page: Page) {
    let hints = match page {
        Page::Dashboard => {
            "1-5 pages  Tab next  a auto-refresh  r refresh  ↑/↓ select  q quit"
        }
        _ => "1-5 pages  Tab next  ↑/↓ scroll  PgUp/PgDn page  q quit",
    };
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            "Resources: docs.quantum.ibm.com  research.ibm.com/quantum-computing  qiskit.org/documentation",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(args: &[&str]) -> AppState {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        AppState::new(&cli, &mut rng)
    }

    #[test]
    fn opens_on_the_requested_route() {
        assert_eq!(app(&["qjt", "/dashboard"]).page, Page::Dashboard);
        assert_eq!(app(&["qjt"]).page, Page::Home);
    }

    #[test]
    fn bad_routes_open_the_catch_all() {
        let state = app(&["qjt", "/nope"]);
        assert_eq!(state.page, Page::NotFound);
        assert_eq!(state.route, "/nope");
    }

    #[test]
    fn auto_refresh_flag_arms_the_dashboard() {
        assert!(app(&["qjt", "--auto-refresh"]).dashboard.auto_refresh);
        assert!(!app(&["qjt"]).dashboard.auto_refresh);
    }

    #[test]
    fn quit_keys() {
        let mut rng = StdRng::seed_from_u64(1);
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = app(&["qjt"]);
            handle_key(&mut state, code, KeyModifiers::NONE, &mut rng);
            assert!(state.should_quit);
        }
        let mut state = app(&["qjt"]);
        handle_key(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL, &mut rng);
        assert!(state.should_quit);
    }

    #[test]
    fn number_keys_jump_between_pages() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = app(&["qjt"]);
        handle_key(&mut state, KeyCode::Char('4'), KeyModifiers::NONE, &mut rng);
        assert_eq!(state.page, Page::Technical);
        handle_key(&mut state, KeyCode::Char('1'), KeyModifiers::NONE, &mut rng);
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn tab_cycles_and_resets_scroll() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = app(&["qjt"]);
        state.scroll = 7;
        handle_key(&mut state, KeyCode::Tab, KeyModifiers::NONE, &mut rng);
        assert_eq!(state.page, Page::Dashboard);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn toggle_rearms_the_refresh_deadline() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = app(&["qjt"]);
        let before = state.next_refresh;
        std::thread::sleep(Duration::from_millis(5));
        handle_key(&mut state, KeyCode::Char('a'), KeyModifiers::NONE, &mut rng);
        assert!(state.dashboard.auto_refresh);
        assert!(state.next_refresh > before);
    }

    #[test]
    fn scrolling_clamps_to_content() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = app(&["qjt", "/features"]);
        state.set_view_height(10);
        handle_key(&mut state, KeyCode::End, KeyModifiers::NONE, &mut rng);
        let max = (state.page_lines() as u16).saturating_sub(10);
        assert_eq!(state.scroll, max);
        handle_key(&mut state, KeyCode::Home, KeyModifiers::NONE, &mut rng);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn resize_reclamps_scroll() {
        let mut state = app(&["qjt", "/impact"]);
        state.set_view_height(5);
        state.scroll = state.max_scroll();
        // A taller body means less to scroll; the offset must follow.
        state.set_view_height(80);
        assert_eq!(state.scroll, state.max_scroll());
        assert!(state.scroll <= (state.page_lines() as u16).saturating_sub(80));
    }

    #[test]
    fn view_height_never_hits_zero() {
        let mut state = app(&["qjt"]);
        state.set_view_height(0);
        assert_eq!(state.view_height, 1);
    }

    #[test]
    fn arrows_move_the_table_on_the_dashboard() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = app(&["qjt", "/dashboard"]);
        handle_key(&mut state, KeyCode::Down, KeyModifiers::NONE, &mut rng);
        assert_eq!(state.dashboard.table.selected(), Some(1));
        handle_key(&mut state, KeyCode::Up, KeyModifiers::NONE, &mut rng);
        assert_eq!(state.dashboard.table.selected(), Some(0));
    }
}
