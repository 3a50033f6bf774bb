use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::pages::{accent, muted, render_static};

struct Feature {
    title: &'static str,
    description: &'static str,
    benefits: [&'static str; 4],
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Real-time Insights",
        description: "Monitor quantum job execution with live status updates, progress tracking, and instant notifications.",
        benefits: [
            "Live job status monitoring",
            "Queue position tracking",
            "Execution time estimates",
            "Instant failure alerts",
        ],
    },
    Feature {
        title: "Transparency",
        description: "Complete visibility into quantum computing workflows with detailed analytics and comprehensive reporting.",
        benefits: [
            "Detailed execution metrics",
            "Resource utilization reports",
            "Historical performance data",
            "Queue analytics dashboard",
        ],
    },
    Feature {
        title: "Innovation Boost",
        description: "Accelerate quantum research and development with optimized workflow management and enhanced productivity.",
        benefits: [
            "Faster iteration cycles",
            "Optimized resource allocation",
            "Enhanced debugging capabilities",
            "Streamlined development process",
        ],
    },
    Feature {
        title: "Collaboration",
        description: "Enable seamless team collaboration with shared dashboards, project tracking, and communication tools.",
        benefits: [
            "Team project visibility",
            "Shared resource management",
            "Collaborative debugging",
            "Knowledge sharing platform",
        ],
    },
];

const ADDITIONAL: [(&str, &str); 4] = [
    (
        "High Performance",
        "Optimized for speed with minimal latency monitoring and efficient data processing.",
    ),
    (
        "Secure Access",
        "Enterprise-grade security with role-based access control and data encryption.",
    ),
    (
        "Scalable Architecture",
        "Built to handle thousands of concurrent jobs with auto-scaling capabilities.",
    ),
    (
        "Global Accessibility",
        "Access your quantum jobs from anywhere with responsive web design.",
    ),
];

const AUDIENCES: [(&str, &str); 3] = [
    (
        "Researchers",
        "Track experiment progress, optimize quantum algorithms, and collaborate with global teams.",
    ),
    (
        "Developers",
        "Debug quantum circuits, monitor performance, and streamline development workflows.",
    ),
    (
        "Organizations",
        "Manage quantum computing resources, track ROI, and scale quantum initiatives.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    render_static(
        frame,
        area,
        "Powerful Features for Quantum Computing",
        lines(),
        scroll,
    )
}

pub fn lines() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Comprehensive tools and insights to revolutionize your quantum computing workflow",
            muted(),
        )),
        Line::from(""),
    ];

    for feature in &FEATURES {
        out.push(Line::from(Span::styled(
            format!("  {}", feature.title),
            accent(),
        )));
        out.push(Line::from(format!("  {}", feature.description)));
        out.push(Line::from(Span::styled("  Key Benefits:", heading)));
        for benefit in feature.benefits {
            out.push(Line::from(format!("    • {benefit}")));
        }
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled(
        "  Additional Capabilities",
        heading,
    )));
    out.push(Line::from(""));
    for (title, description) in ADDITIONAL {
        out.push(Line::from(vec![
            Span::raw("    • "),
            Span::styled(title, accent()),
            Span::raw(" — "),
            Span::styled(description, muted()),
        ]));
    }
    out.push(Line::from(""));

    out.push(Line::from(Span::styled("  Who Benefits?", heading)));
    out.push(Line::from(""));
    for (name, pitch) in AUDIENCES {
        out.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(name, accent()),
        ]));
        out.push(Line::from(Span::styled(format!("      {pitch}"), muted())));
    }
    out.push(Line::from(""));
    out.push(Line::from(
        "  Ready to transform your quantum workflow? Open the dashboard with [2].",
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_lists_four_benefits() {
        for feature in &FEATURES {
            assert_eq!(feature.benefits.len(), 4, "{}", feature.title);
        }
    }

    #[test]
    fn copy_includes_all_sections() {
        let all: String = lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect();
        assert!(all.contains("Additional Capabilities"));
        assert!(all.contains("Who Benefits?"));
        assert!(all.contains("Queue position tracking"));
    }
}
