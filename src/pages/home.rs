use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::pages::{accent, muted, render_static};

const FEATURES: [(&str, &str); 4] = [
    (
        "Real-time Insights",
        "Monitor quantum job execution with live status updates and progress tracking.",
    ),
    (
        "Transparency",
        "Complete visibility into quantum workflows with detailed analytics and reporting.",
    ),
    (
        "Innovation Boost",
        "Accelerate quantum research with optimized workflow management and productivity tools.",
    ),
    (
        "Collaboration",
        "Enable seamless team collaboration with shared dashboards and project tracking.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    render_static(frame, area, "Quantum Jobs Tracker", lines(), scroll);
}

pub fn lines() -> Vec<Line<'static>> {
    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quantum Jobs Tracker",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Track, monitor, and analyze IBM Quantum jobs in real-time."),
        Line::from(Span::styled(
            "  The future of quantum computing transparency.",
            accent(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Why track quantum jobs?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (title, description) in FEATURES {
        out.push(Line::from(vec![
            Span::raw("    • "),
            Span::styled(title, accent()),
        ]));
        out.push(Line::from(vec![
            Span::raw("      "),
            Span::styled(description, muted()),
        ]));
        out.push(Line::from(""));
    }

    out.extend([
        Line::from(Span::styled(
            "  At a glance",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("    15+    quantum devices tracked"),
        Line::from("    24/7   continuous monitoring"),
        Line::from("    99.9%  data accuracy"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [2]", accent()),
            Span::raw(" View Dashboard    "),
            Span::styled("[3]", accent()),
            Span::raw(" Learn More"),
        ]),
    ]);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect()
    }

    #[test]
    fn hero_and_teasers_present() {
        let all = flatten(&lines());
        assert!(all.contains("Quantum Jobs Tracker"));
        for (title, _) in FEATURES {
            assert!(all.contains(title), "missing feature teaser {title}");
        }
    }
}
