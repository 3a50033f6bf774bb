use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::pages::{accent, muted, render_static};

struct Component {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    features: [&'static str; 4],
}

const COMPONENTS: [Component; 4] = [
    Component {
        title: "Frontend Architecture",
        description: "Terminal dashboard rendered with an immediate-mode widget tree for a responsive, dependency-light experience.",
        technologies: &["Rust", "ratatui", "crossterm", "clap"],
        features: [
            "Component-based architecture",
            "Real-time state management",
            "Responsive layout system",
            "Keyboard-driven navigation",
        ],
    },
    Component {
        title: "Backend Integration",
        description: "Scalable backend services with robust API integration and data processing capabilities.",
        technologies: &["Node.js", "Express", "WebSocket", "Redis", "PostgreSQL"],
        features: [
            "RESTful API design",
            "Real-time data streaming",
            "Caching strategies",
            "Database optimization",
        ],
    },
    Component {
        title: "IBM Quantum Integration",
        description: "Direct integration with IBM Quantum services for real-time job monitoring and management.",
        technologies: &["IBM Quantum API", "Qiskit", "OAuth 2.0", "WebHooks"],
        features: [
            "Real-time job tracking",
            "Circuit analysis",
            "Device status monitoring",
            "Queue management",
        ],
    },
    Component {
        title: "Security & Compliance",
        description: "Enterprise-grade security with comprehensive data protection and access control.",
        technologies: &["JWT", "OAuth 2.0", "HTTPS", "Rate Limiting"],
        features: [
            "Secure authentication",
            "Role-based access",
            "Data encryption",
            "Audit logging",
        ],
    },
];

const CHALLENGES: [(&str, &str); 4] = [
    (
        "API Rate Limits",
        "Intelligent caching and request batching with Redis-based rate limiting.",
    ),
    (
        "Real-time Updates",
        "WebSocket connections with fallback polling for reliable data streams.",
    ),
    (
        "Scalability",
        "Microservices architecture with auto-scaling and load balancing.",
    ),
    (
        "Data Consistency",
        "Event-driven architecture with eventual consistency patterns.",
    ),
];

struct Phase {
    phase: &'static str,
    title: &'static str,
    duration: &'static str,
    deliverables: [&'static str; 4],
}

const PHASES: [Phase; 3] = [
    Phase {
        phase: "Phase 1",
        title: "Core Infrastructure",
        duration: "2-3 weeks",
        deliverables: [
            "Basic dashboard setup",
            "IBM Quantum API integration",
            "User authentication system",
            "Real-time job monitoring",
        ],
    },
    Phase {
        phase: "Phase 2",
        title: "Advanced Features",
        duration: "3-4 weeks",
        deliverables: [
            "Analytics and reporting",
            "Advanced visualizations",
            "Team collaboration tools",
            "Performance optimization",
        ],
    },
    Phase {
        phase: "Phase 3",
        title: "Production Deployment",
        duration: "2-3 weeks",
        deliverables: [
            "Security hardening",
            "Load testing",
            "CI/CD pipeline setup",
            "Production monitoring",
        ],
    },
];

const SPECS: [(&str, &str); 3] = [
    ("< 100ms", "API Response Time"),
    ("99.9%", "Uptime Guarantee"),
    ("10K+", "Concurrent Jobs"),
];

pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    render_static(
        frame,
        area,
        "Technical Architecture & Implementation",
        lines(),
        scroll,
    )
}

pub fn lines() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  A comprehensive technical approach to building a scalable quantum job monitoring platform",
            muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("  System Architecture", heading)),
        Line::from(""),
    ];

    for component in &COMPONENTS {
        out.push(Line::from(Span::styled(
            format!("  {}", component.title),
            accent(),
        )));
        out.push(Line::from(format!("  {}", component.description)));
        out.push(Line::from(Span::styled(
            format!("  Technologies: {}", component.technologies.join(", ")),
            muted(),
        )));
        for feature in component.features {
            out.push(Line::from(format!("    • {feature}")));
        }
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled(
        "  Technical Challenges & Solutions",
        heading,
    )));
    out.push(Line::from(""));
    for (challenge, solution) in CHALLENGES {
        out.push(Line::from(vec![
            Span::raw("    Challenge: "),
            Span::styled(challenge, accent()),
        ]));
        out.push(Line::from(Span::styled(
            format!("    Solution:  {solution}"),
            muted(),
        )));
    }
    out.push(Line::from(""));

    out.push(Line::from(Span::styled("  Implementation Roadmap", heading)));
    out.push(Line::from(""));
    for phase in &PHASES {
        out.push(Line::from(vec![
            Span::styled(format!("  {} ", phase.phase), accent()),
            Span::raw(phase.title),
            Span::styled(format!("  ({})", phase.duration), muted()),
        ]));
        for deliverable in phase.deliverables {
            out.push(Line::from(format!("    • {deliverable}")));
        }
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled(
        "  Performance Specifications",
        heading,
    )));
    for (value, label) in SPECS {
        out.push(Line::from(vec![
            Span::styled(format!("    {value:<8}"), accent()),
            Span::styled(label, muted()),
        ]));
    }
    out.push(Line::from(""));
    out.push(Line::from(
        "  Built with open-source technologies and designed for community contribution.",
    ));

    out
}
