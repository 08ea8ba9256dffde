//! Output backends for [`RecommendationView`]

use crate::view::{Card, RecommendationView};
use std::fmt::Write;

/// Anchor the page moves focus to once results arrive
pub const RESULTS_ANCHOR: &str = "recommendations";

/// Turns a view into displayable output
pub trait Render {
    /// Render the recommendations section
    fn render(&self, view: &RecommendationView) -> String;
}

/// Plain text for terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create text renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn card(out: &mut String, card: &Card) {
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "{}", "-".repeat(card.title.chars().count().max(1)));
        let badges: Vec<String> = card.badges.iter().map(|b| format!("[{b}]")).collect();
        let _ = writeln!(out, "{}", badges.join(" "));
    }
}

impl Render for TextRenderer {
    fn render(&self, view: &RecommendationView) -> String {
        let mut out = String::new();
        match view {
            RecommendationView::Placeholder { message } => {
                let _ = writeln!(out, "{message}");
            }
            RecommendationView::Grid { heading, cards } => {
                let _ = writeln!(out, "{heading}");
                let _ = writeln!(out, "{}", "=".repeat(heading.chars().count()));
                for card in cards {
                    out.push('\n');
                    Self::card(&mut out, card);
                }
            }
        }
        out
    }
}

/// HTML fragment: the section wrapped in the results anchor
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create HTML renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn card(out: &mut String, card: &Card) {
        out.push_str("<article class=\"card\">");
        let _ = write!(out, "<h3>{}</h3><hr/>", escape(&card.title));
        out.push_str("<div class=\"badges\">");
        for badge in &card.badges {
            let _ = write!(out, "<span class=\"badge\">{}</span>", escape(&badge.to_string()));
        }
        out.push_str("</div></article>");
    }
}

impl Render for HtmlRenderer {
    fn render(&self, view: &RecommendationView) -> String {
        let mut out = String::new();
        let _ = write!(out, "<div id=\"{RESULTS_ANCHOR}\">");
        match view {
            RecommendationView::Placeholder { message } => {
                let _ = write!(out, "<div>{}</div>", escape(message));
            }
            RecommendationView::Grid { heading, cards } => {
                let _ = write!(out, "<section><h2>{}</h2><div class=\"grid\">", escape(heading));
                for card in cards {
                    Self::card(&mut out, card);
                }
                out.push_str("</div></section>");
            }
        }
        out.push_str("</div>");
        out
    }
}

/// Escape text for HTML element content and attribute values
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
