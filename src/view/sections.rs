//! Page Sections - Nav, hero, projects, contact
//!
//! Each builder turns content + theme into drawable lines. Builders are
//! stateless: transient presentation state (the hovered project card, the
//! live typewriter line) is passed in per frame and holds no invariants.

use crate::content::Portfolio;
use crate::theme::{Gradient, Theme};
use crate::types::Attr;

use super::{Line, PropValue, Span, gradient_spans};

/// Width of the accent bar at the top of each project card.
const CARD_BAR_WIDTH: usize = 20;

// =============================================================================
// Navigation
// =============================================================================

/// The top navigation row: brand glyph plus section anchors.
pub fn nav(portfolio: &Portfolio, theme: &Theme) -> Vec<Line> {
    let mut spans = gradient_spans(&portfolio.brand, &theme.brand, Attr::BOLD);
    spans.push(Span::plain("    "));
    for (i, item) in portfolio.nav.iter().enumerate() {
        if i > 0 {
            spans.push(Span::colored("  ·  ", theme.text_muted));
        }
        spans.push(Span::colored(item.label.clone(), theme.text));
    }
    vec![Line::new(spans)]
}

// =============================================================================
// Hero
// =============================================================================

/// The hero section: greeting, gradient name, typewriter role line, and the
/// call-to-action labels.
///
/// `role_line` is sampled on every call, so a getter backed by a running
/// typewriter animates across frames.
pub fn hero(portfolio: &Portfolio, theme: &Theme, role_line: &PropValue<String>) -> Vec<Line> {
    let mut greeting = vec![Span::new(
        format!("{} ", portfolio.greeting),
        theme.text_bright,
        Attr::BOLD,
    )];
    greeting.extend(gradient_spans(&portfolio.name, &theme.brand, Attr::BOLD));

    vec![
        Line::blank(),
        Line::centered(greeting),
        Line::blank(),
        Line::centered(vec![Span::colored(role_line.get(), theme.accent)]),
        Line::blank(),
        Line::centered(vec![
            Span::new("[ View Projects ]", theme.accent, Attr::BOLD),
            Span::plain("   "),
            Span::colored("[ Contact Me ]", theme.text_muted),
        ]),
    ]
}

// =============================================================================
// Projects
// =============================================================================

/// The project showcase: one card per project, stacked.
///
/// `hovered` highlights a single card; it is pure per-frame presentation
/// state owned by the event loop.
pub fn projects(portfolio: &Portfolio, theme: &Theme, hovered: Option<usize>) -> Vec<Line> {
    let mut lines = vec![
        Line::centered(gradient_spans("Featured Projects", &theme.heading, Attr::BOLD)),
        Line::blank(),
    ];

    for (i, project) in portfolio.projects.iter().enumerate() {
        let is_hovered = hovered == Some(i);

        let bar: String = "▀".repeat(CARD_BAR_WIDTH);
        let bar_gradient = if is_hovered {
            project.accent
        } else {
            Gradient::new(project.accent.start.dim(0.6), project.accent.stop.dim(0.6))
        };
        lines.push(Line::new(gradient_spans(&bar, &bar_gradient, Attr::NONE)));

        let title_attrs = if is_hovered {
            Attr::BOLD | Attr::UNDERLINE
        } else {
            Attr::BOLD
        };
        lines.push(Line::new(vec![Span::new(
            project.title.clone(),
            theme.text_bright,
            title_attrs,
        )]));

        lines.push(Line::new(vec![Span::colored(
            project.description.clone(),
            theme.text_muted,
        )]));

        let mut tech_spans = Vec::new();
        for (j, tech) in project.tech.iter().enumerate() {
            if j > 0 {
                tech_spans.push(Span::plain(" "));
            }
            tech_spans.push(Span::new(
                format!("⟨{tech}⟩"),
                theme.text_muted,
                Attr::DIM,
            ));
        }
        lines.push(Line::new(tech_spans));

        lines.push(Line::new(vec![Span::colored(
            format!("→ View Project ({})", project.link),
            project.accent.mid(),
        )]));
        lines.push(Line::blank());
    }

    lines
}

// =============================================================================
// Contact
// =============================================================================

/// The contact section: heading plus social links.
pub fn contact(portfolio: &Portfolio, theme: &Theme) -> Vec<Line> {
    let mut lines = vec![
        Line::centered(gradient_spans("Let's Connect", &theme.heading, Attr::BOLD)),
        Line::blank(),
    ];

    for link in &portfolio.links {
        lines.push(Line::centered(vec![
            Span::new(format!("● {}", link.label), link.accent.mid(), Attr::BOLD),
            Span::colored(format!("  {}", link.url), theme.text_muted),
        ]));
    }

    lines
}

// =============================================================================
// Page
// =============================================================================

/// Assemble the full page, sections separated by spacer lines.
pub fn page(
    portfolio: &Portfolio,
    theme: &Theme,
    role_line: &PropValue<String>,
    hovered: Option<usize>,
) -> Vec<Line> {
    let mut lines = nav(portfolio, theme);
    lines.push(Line::blank());
    lines.extend(hero(portfolio, theme, role_line));
    lines.push(Line::blank());
    lines.extend(projects(portfolio, theme, hovered));
    lines.extend(contact(portfolio, theme));
    lines.push(Line::blank());
    lines
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets::midnight;
    use spark_signals::signal;

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_nav_contains_brand_and_anchors() {
        let text = plain(&nav(&Portfolio::sample(), &midnight()));
        assert!(text.contains("AS"));
        assert!(text.contains("About"));
        assert!(text.contains("Projects"));
        assert!(text.contains("Contact"));
    }

    #[test]
    fn test_hero_samples_role_line() {
        let portfolio = Portfolio::sample();
        let theme = midnight();

        let role = signal("Problem Solver|".to_string());
        let lines = hero(&portfolio, &theme, &role.clone().into());
        assert!(plain(&lines).contains("Problem Solver|"));

        // A later frame sees the updated value.
        role.set("Tech|".to_string());
        let lines = hero(&portfolio, &theme, &role.into());
        assert!(plain(&lines).contains("Tech|"));
    }

    #[test]
    fn test_hero_contains_name_and_greeting() {
        let text = plain(&hero(
            &Portfolio::sample(),
            &midnight(),
            &PropValue::Static(String::new()),
        ));
        assert!(text.contains("Hi, I'm"));
        assert!(text.contains("Arghajit Saha"));
    }

    #[test]
    fn test_projects_lists_every_card() {
        let portfolio = Portfolio::sample();
        let text = plain(&projects(&portfolio, &midnight(), None));

        for project in &portfolio.projects {
            assert!(text.contains(&project.title));
            assert!(text.contains(&project.description));
        }
        assert!(text.contains("⟨React⟩"));
    }

    #[test]
    fn test_hovered_card_is_underlined() {
        let portfolio = Portfolio::sample();
        let theme = midnight();

        let idle = projects(&portfolio, &theme, None);
        let hovered = projects(&portfolio, &theme, Some(1));

        let find_title = |lines: &[Line]| {
            lines
                .iter()
                .flat_map(|l| l.spans.clone())
                .find(|s| s.text == "Project 2")
                .unwrap()
        };
        assert!(!find_title(&idle).attrs.contains(Attr::UNDERLINE));
        assert!(find_title(&hovered).attrs.contains(Attr::UNDERLINE));
    }

    #[test]
    fn test_contact_lists_links() {
        let text = plain(&contact(&Portfolio::sample(), &midnight()));
        assert!(text.contains("GitHub"));
        assert!(text.contains("https://linkedin.com"));
        assert!(text.contains("mailto:contact@example.com"));
    }

    #[test]
    fn test_page_assembles_all_sections() {
        let text = plain(&page(
            &Portfolio::sample(),
            &midnight(),
            &PropValue::Static("Role|".to_string()),
            None,
        ));

        assert!(text.contains("Arghajit Saha"));
        assert!(text.contains("Role|"));
        assert!(text.contains("Featured Projects"));
        assert!(text.contains("Let's Connect"));
    }
}
