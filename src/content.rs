//! Portfolio Content - The data the page displays
//!
//! Immutable, declarative content: who the portfolio belongs to, the
//! rotating role phrases for the hero typewriter, the project cards, and
//! the contact links. Content can be loaded from a JSON file so the same
//! binary renders any portfolio; [`Portfolio::sample`] ships a built-in
//! profile.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Gradient;
use crate::types::Rgba;

// =============================================================================
// Errors
// =============================================================================

/// Failure to load portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A portfolio needs at least one role phrase to drive the hero line.
    #[error("portfolio has no role phrases")]
    NoRoles,
}

// =============================================================================
// Model
// =============================================================================

/// A navigation anchor shown in the top bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
    /// Card accent gradient (top bar and title).
    pub accent: Gradient,
}

/// One contact/social link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub accent: Gradient,
}

/// The whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Short brand glyph for the nav bar.
    pub brand: String,
    /// Greeting prefix shown before the name.
    pub greeting: String,
    pub name: String,
    /// Rotating phrases for the hero typewriter.
    pub roles: Vec<String>,
    pub nav: Vec<NavItem>,
    pub projects: Vec<Project>,
    pub links: Vec<SocialLink>,
}

impl Portfolio {
    /// Parse a portfolio from JSON and check it can drive the page.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(json)?;
        if portfolio.roles.is_empty() {
            return Err(ContentError::NoRoles);
        }
        Ok(portfolio)
    }

    /// Load a portfolio from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        log::debug!("loading portfolio content from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// The built-in sample portfolio.
    pub fn sample() -> Self {
        Self {
            brand: "AS".to_string(),
            greeting: "Hi, I'm".to_string(),
            name: "Arghajit Saha".to_string(),
            roles: vec![
                "Competitive Programmer".to_string(),
                "Machine Learning Enthusiast".to_string(),
                "Problem Solver".to_string(),
                "Tech Enthusiast".to_string(),
            ],
            nav: vec![
                NavItem {
                    label: "About".to_string(),
                    anchor: "about".to_string(),
                },
                NavItem {
                    label: "Projects".to_string(),
                    anchor: "projects".to_string(),
                },
                NavItem {
                    label: "Contact".to_string(),
                    anchor: "contact".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Project 1".to_string(),
                    description: "A revolutionary web application".to_string(),
                    tech: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                    ],
                    link: "#".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0x8b5cf6),
                        Rgba::from_rgb_int(0xd946ef),
                    ),
                },
                Project {
                    title: "Project 2".to_string(),
                    description: "Mobile-first design system".to_string(),
                    tech: vec![
                        "Next.js".to_string(),
                        "TypeScript".to_string(),
                        "Tailwind".to_string(),
                    ],
                    link: "#".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0x3b82f6),
                        Rgba::from_rgb_int(0x06b6d4),
                    ),
                },
                Project {
                    title: "Project 3".to_string(),
                    description: "AI-powered analytics platform".to_string(),
                    tech: vec![
                        "Python".to_string(),
                        "TensorFlow".to_string(),
                        "AWS".to_string(),
                    ],
                    link: "#".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0x10b981),
                        Rgba::from_rgb_int(0x14b8a6),
                    ),
                },
            ],
            links: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0xc084fc),
                        Rgba::from_rgb_int(0xf472b6),
                    ),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0x60a5fa),
                        Rgba::from_rgb_int(0x22d3ee),
                    ),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:contact@example.com".to_string(),
                    accent: Gradient::new(
                        Rgba::from_rgb_int(0x34d399),
                        Rgba::from_rgb_int(0x2dd4bf),
                    ),
                },
            ],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let p = Portfolio::sample();

        assert_eq!(p.roles.len(), 4);
        assert_eq!(p.roles[0], "Competitive Programmer");
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.links.len(), 3);
        assert_eq!(p.nav.len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let p = Portfolio::sample();
        let json = serde_json::to_string_pretty(&p).unwrap();
        let back = Portfolio::from_json(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Portfolio::from_json("not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_roles() {
        let mut p = Portfolio::sample();
        p.roles.clear();
        let json = serde_json::to_string(&p).unwrap();
        assert!(matches!(
            Portfolio::from_json(&json),
            Err(ContentError::NoRoles)
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Portfolio::load(Path::new("/nonexistent/folio.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
