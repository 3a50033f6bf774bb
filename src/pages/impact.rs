use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::pages::{accent, muted, render_static};

struct Benefit {
    title: &'static str,
    stats: &'static str,
    description: &'static str,
    bullets: [&'static str; 4],
}

const GLOBAL_BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Educational Excellence",
        stats: "500K+ Students",
        description: "Empowering students and researchers worldwide with hands-on quantum computing experience",
        bullets: [
            "Interactive learning platform",
            "Real-world quantum experiments",
            "Research collaboration tools",
            "Career development opportunities",
        ],
    },
    Benefit {
        title: "Industry Advancement",
        stats: "1000+ Companies",
        description: "Accelerating quantum adoption across industries with transparent and accessible tools",
        bullets: [
            "Reduced development costs",
            "Faster time-to-market",
            "Enhanced R&D capabilities",
            "Competitive advantages",
        ],
    },
    Benefit {
        title: "Innovation Catalyst",
        stats: "10K+ Innovations",
        description: "Fostering breakthrough discoveries through improved quantum computing accessibility",
        bullets: [
            "Streamlined research workflows",
            "Cross-disciplinary collaboration",
            "Rapid prototyping capabilities",
            "Knowledge democratization",
        ],
    },
    Benefit {
        title: "Global Accessibility",
        stats: "150+ Countries",
        description: "Breaking down barriers to quantum computing for researchers worldwide",
        bullets: [
            "Equal access to quantum resources",
            "Reduced geographical limitations",
            "Cultural knowledge exchange",
            "Inclusive innovation ecosystem",
        ],
    },
];

const FUTURE_READINESS: [(&str, &str, &str); 4] = [
    (
        "Quantum Workforce Development",
        "Preparing the next generation of quantum professionals",
        "Creating millions of quantum-ready jobs by 2030",
    ),
    (
        "Research Acceleration",
        "Speeding up quantum research and development cycles",
        "3x faster breakthrough discoveries in quantum science",
    ),
    (
        "Knowledge Democratization",
        "Making quantum computing accessible to all skill levels",
        "Reducing quantum learning curve by 70%",
    ),
    (
        "Innovation Ecosystem",
        "Building a thriving quantum innovation community",
        "Supporting 100K+ quantum startups globally",
    ),
];

const SECTORS: [(&str, &str, &str); 6] = [
    (
        "Healthcare",
        "Drug discovery and medical research",
        "Revolutionary treatments and personalized medicine",
    ),
    (
        "Finance",
        "Risk analysis and fraud detection",
        "Secure transactions and market optimization",
    ),
    (
        "Energy",
        "Optimization and smart grid management",
        "Sustainable energy solutions and efficiency",
    ),
    (
        "Materials",
        "Molecular simulation and design",
        "Next-generation materials and nanotechnology",
    ),
    (
        "AI & ML",
        "Quantum machine learning algorithms",
        "Exponential AI capabilities and insights",
    ),
    (
        "Cryptography",
        "Quantum-safe security protocols",
        "Unbreakable encryption and privacy protection",
    ),
];

const BY_NUMBERS: [(&str, &str); 4] = [
    ("2030", "Quantum Advantage Year"),
    ("$850B", "Market Value by 2040"),
    ("1M+", "Jobs Created"),
    ("100x", "Speed Improvement"),
];

pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    render_static(
        frame,
        area,
        "Global Impact & Future Vision",
        lines(),
        scroll,
    )
}

pub fn lines() -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut out = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Transforming the quantum computing landscape and creating opportunities for a quantum-powered future",
            muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("  Worldwide Benefits", heading)),
        Line::from(""),
    ];

    for benefit in &GLOBAL_BENEFITS {
        out.push(Line::from(vec![
            Span::styled(format!("  {}", benefit.title), accent()),
            Span::styled(format!("  ({})", benefit.stats), muted()),
        ]));
        out.push(Line::from(format!("  {}", benefit.description)));
        for bullet in benefit.bullets {
            out.push(Line::from(format!("    • {bullet}")));
        }
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled(
        "  Building Tomorrow's Quantum Future",
        heading,
    )));
    out.push(Line::from(""));
    for (title, description, impact) in FUTURE_READINESS {
        out.push(Line::from(Span::styled(format!("  {title}"), accent())));
        out.push(Line::from(Span::styled(format!("    {description}"), muted())));
        out.push(Line::from(format!("    {impact}")));
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled("  Transforming Industries", heading)));
    out.push(Line::from(""));
    for (name, description, potential) in SECTORS {
        out.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(name, accent()),
            Span::styled(format!(" — {description}"), muted()),
        ]));
        out.push(Line::from(Span::styled(
            format!("      Potential impact: {potential}"),
            muted(),
        )));
    }
    out.push(Line::from(""));

    out.push(Line::from(Span::styled("  Impact by Numbers", heading)));
    for (value, label) in BY_NUMBERS {
        out.push(Line::from(vec![
            Span::styled(format!("    {value:<8}"), accent()),
            Span::styled(label, muted()),
        ]));
    }
    out.push(Line::from(""));

    out.push(Line::from(Span::styled("  Our Vision", heading)));
    out.push(Line::from(
        "  We envision a world where quantum computing is accessible, transparent, and",
    ));
    out.push(Line::from(
        "  collaborative. By democratizing quantum technologies, we're not just building",
    ));
    out.push(Line::from(
        "  tools; we're building the foundation for humanity's next great technological leap.",
    ));

    out
}
