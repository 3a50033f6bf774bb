use chrono::{DateTime, Local};
use rand::Rng;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph,
    Row, Table, TableState,
};
use ratatui::Frame;

use crate::core::data::mock_jobs;
use crate::core::format::{format_clock, format_duration, format_estimate, format_start_time};
use crate::core::job::{JobStatus, QuantumJob};
use crate::core::simulate;
use crate::core::stats::{self, job_distribution, StatusCounts, StatusShare, TrendPoint};
use crate::pages::muted;

/// Rows shown in the recent-jobs table.
const TABLE_ROWS: usize = 10;

/// Dashboard working state: a private copy of the mock set plus everything
/// the refresh cycle touches.
pub struct DashboardState {
    pub jobs: Vec<QuantumJob>,
    pub auto_refresh: bool,
    pub last_updated: DateTime<Local>,
    pub trend: Vec<TrendPoint>,
    pub table: TableState,
}

impl DashboardState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let now = Local::now();
        Self {
            jobs: mock_jobs(),
            auto_refresh: false,
            last_updated: now,
            trend: stats::trend_data(now, rng),
            table: TableState::default().with_selected(Some(0)),
        }
    }

    /// One auto-refresh tick: flip some running jobs, re-roll the synthetic
    /// trend, restamp the clock. Returns how many jobs flipped.
    pub fn refresh_tick(&mut self, rng: &mut impl Rng) -> usize {
        let flipped = simulate::refresh(&mut self.jobs, rng);
        self.touch(rng);
        flipped
    }

    /// Manual refresh: there is no backend to fetch from, so only the clock
    /// and the synthetic trend move.
    pub fn touch(&mut self, rng: &mut impl Rng) {
        self.last_updated = Local::now();
        self.trend = stats::trend_data(self.last_updated, rng);
    }

    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh = !self.auto_refresh;
    }

    fn visible_rows(&self) -> usize {
        self.jobs.len().min(TABLE_ROWS)
    }

    pub fn select_next(&mut self) {
        let rows = self.visible_rows();
        if rows == 0 {
            return;
        }
        let next = match self.table.selected() {
            Some(idx) => (idx + 1) % rows,
            None => 0,
        };
        self.table.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        let rows = self.visible_rows();
        if rows == 0 {
            return;
        }
        let prev = match self.table.selected() {
            Some(idx) => (idx + rows - 1) % rows,
            None => 0,
        };
        self.table.select(Some(prev));
    }

    pub fn selected_job(&self) -> Option<&QuantumJob> {
        self.table
            .selected()
            .and_then(|idx| self.jobs.get(idx).filter(|_| idx < self.visible_rows()))
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &mut DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header line
            Constraint::Length(4),  // status cards
            Constraint::Min(8),     // charts
            Constraint::Length(TABLE_ROWS as u16 + 3), // jobs table
            Constraint::Length(1),  // selected-job detail
        ])
        .split(area);

    render_header(frame, chunks[0], state);

    let counts = StatusCounts::tally(&state.jobs);
    render_status_cards(frame, chunks[1], &counts);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_distribution(frame, charts[0], &job_distribution(&state.jobs));
    render_trends(frame, charts[1], &state.trend);

    render_table(frame, chunks[3], state);
    render_detail(frame, chunks[4], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let auto = if state.auto_refresh {
        Span::styled("auto-refresh ON", Style::default().fg(Color::Green))
    } else {
        Span::styled("auto-refresh OFF", muted())
    };
    let header = Paragraph::new(Line::from(vec![
        Span::raw("Real-time monitoring of IBM Quantum computing jobs  |  "),
        Span::raw(format!(
            "Last updated: {}  |  ",
            format_clock(state.last_updated)
        )),
        auto,
    ]));
    frame.render_widget(header, area);
}

fn render_status_cards(frame: &mut Frame, area: Rect, counts: &StatusCounts) {
    const CARDS: [(JobStatus, &str, &str); 4] = [
        (JobStatus::Queued, "Queued Jobs", "Waiting for execution"),
        (JobStatus::Running, "Running Jobs", "Currently executing"),
        (JobStatus::Completed, "Completed Jobs", "Successfully finished"),
        (JobStatus::Failed, "Failed Jobs", "Execution failed"),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((status, title, subtitle), cell) in CARDS.into_iter().zip(cells.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                counts.get(status).to_string(),
                Style::default()
                    .fg(status.color())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, muted())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(status.color())),
        );
        frame.render_widget(card, *cell);
    }
}

fn render_distribution(frame: &mut Frame, area: Rect, shares: &[StatusShare]) {
    let bars: Vec<Bar> = shares
        .iter()
        .map(|share| {
            Bar::default()
                .value(share.count as u64)
                .text_value(format!("{}%", share.percentage))
                .label(Line::from(share.status.as_str()))
                .style(Style::default().fg(share.status.color()))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title("Job Distribution").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);
    frame.render_widget(chart, area);
}

fn render_trends(frame: &mut Frame, area: Rect, trend: &[TrendPoint]) {
    let as_points = |extract: fn(&TrendPoint) -> u64| -> Vec<(f64, f64)> {
        trend
            .iter()
            .enumerate()
            .map(|(idx, point)| (idx as f64, extract(point) as f64))
            .collect()
    };
    let completed = as_points(|point| point.completed);
    let failed = as_points(|point| point.failed);
    let running = as_points(|point| point.running);

    let datasets = vec![
        Dataset::default()
            .name("completed")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&completed),
        Dataset::default()
            .name("failed")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&failed),
        Dataset::default()
            .name("running")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&running),
    ];

    let x_labels: Vec<Span> = trend
        .iter()
        .map(|point| Span::styled(point.hour.clone(), muted()))
        .collect();
    let max_x = trend.len().saturating_sub(1).max(1) as f64;

    let chart = Chart::new(datasets)
        .block(Block::default().title("Execution Trends").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 10.0])
                .labels(vec![
                    Span::styled("0", muted()),
                    Span::styled("5", muted()),
                    Span::styled("10", muted()),
                ]),
        );
    frame.render_widget(chart, area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &mut DashboardState) {
    let header = Row::new(["Job ID", "Status", "Device", "Qubits", "Duration", "User"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .jobs
        .iter()
        .take(TABLE_ROWS)
        .map(|job| {
            Row::new(vec![
                Cell::from(job.id.clone()),
                Cell::from(Span::styled(
                    job.status.as_str(),
                    Style::default().fg(job.status.color()),
                )),
                Cell::from(job.device.clone()),
                Cell::from(job.qubits.to_string()),
                Cell::from(format_duration(job.duration_secs)),
                Cell::from(job.user_id.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Recent Jobs").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(table, area, &mut state.table);
}

fn render_detail(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let line = match state.selected_job() {
        Some(job) => {
            let mut spans = vec![Span::raw(format!(
                "{}  started={}  shots={}  depth={}  priority={}  eta={}",
                job.id,
                format_start_time(job.start_time),
                job.shots,
                job.circuit_depth,
                job.priority.as_str(),
                format_estimate(job.estimated_secs),
            ))];
            if let Some(message) = &job.error_message {
                spans.push(Span::styled(
                    format!("  error: {message}"),
                    Style::default().fg(Color::Red),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled("no job selected", muted())),
    };
    frame.render_widget(Paragraph::new(line), area);
}
