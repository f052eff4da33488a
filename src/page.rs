//! # Page composer
//!
//! Assembles cards, the matrix and the glossary into one HTML document.
use html_escape::encode_text as text;
use tracing::debug;

use crate::render::{write_card, write_matrix, write_tooltip};
use crate::{Atlas, CardState, Language, Tooltip};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Settings of one rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    /// Render every card expanded instead of collapsed
    pub expand_all: bool,
    /// Initial example tab for cards that declare it
    pub language: Option<Language>,
    pub theme: Theme,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "SOLID Principles".to_string(),
            expand_all: false,
            language: None,
            theme: Theme::Light,
        }
    }
}

impl PageOptions {
    fn card_state(&self, examples: &crate::Examples) -> CardState {
        let mut state = CardState::new(examples);
        if let Some(language) = self.language {
            // Cards without this variant keep their default tab
            if state.select_language(language).is_err() {
                debug!(%language, "card has no variant, keeping default tab");
            }
        }
        if self.expand_all {
            state.toggle();
        }
        state
    }
}

const STYLE: &str = r#"
:root { --bg: #ffffff; --fg: #111827; --muted: #6b7280; --card: #f9fafb; --primary: #2563eb; --border: #e5e7eb; }
html.dark { --bg: #0b1120; --fg: #e5e7eb; --muted: #9ca3af; --card: #111827; --primary: #60a5fa; --border: #1f2937; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; }
header.nav { position: sticky; top: 0; padding: 1rem 1.5rem; border-bottom: 1px solid var(--border); background: var(--bg); }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
.primary { color: var(--primary); }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(28rem, 1fr)); gap: 1.5rem; }
.card { border: 1px solid var(--border); border-radius: 0.5rem; background: var(--card); padding: 1.5rem; }
.card[open] { grid-column: span 2; }
.card summary { cursor: pointer; list-style: none; }
.card-heading { margin: 0; color: var(--primary); }
.card-title { margin: 0.25rem 0 1rem; color: var(--muted); }
pre.example { overflow-x: auto; padding: 1rem; border-radius: 0.375rem; background: var(--border); }
.tab[aria-selected="true"] { font-weight: bold; border-bottom: 2px solid var(--primary); }
.cross-refs { list-style: none; padding: 0; }
.has-tooltip { position: relative; cursor: help; }
.tooltip { display: none; position: absolute; bottom: 100%; left: 0; z-index: 50; max-width: 20rem; padding: 0.5rem; border-radius: 0.375rem; background: var(--fg); color: var(--bg); font-size: 0.75rem; }
.has-tooltip:hover .tooltip, .has-tooltip:focus-within .tooltip, .has-tooltip.is-visible .tooltip { display: block; }
table.matrix { width: 100%; border-collapse: collapse; }
table.matrix th, table.matrix td { padding: 0.75rem; border: 1px solid var(--border); text-align: center; }
table.matrix th[scope="row"] { text-align: left; }
.row-odd { background: var(--card); }
.glyph-yes { color: var(--primary); font-weight: 500; }
.glyph-none { color: var(--muted); }
footer { padding: 1.5rem; text-align: center; color: var(--muted); }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.tab').forEach(function (tab) {
  tab.addEventListener('click', function () {
    var card = tab.closest('.card');
    card.querySelectorAll('.tab').forEach(function (t) {
      t.setAttribute('aria-selected', String(t === tab));
    });
    card.querySelectorAll('pre.example').forEach(function (p) {
      p.hidden = p.dataset.lang !== tab.dataset.lang;
    });
  });
});
"#;

/// Renders the complete reference page
pub fn compose_page(atlas: &Atlas, options: &PageOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\" class=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n",
        options.theme.class()
    ));
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", text(&options.title)));
    out.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    out.push_str(
        "<header class=\"nav\"><strong><span class=\"primary\">SOLID</span> Principles</strong></header>\n<main>\n",
    );

    out.push_str("<section class=\"intro\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", text(&options.title)));
    out.push_str("<p>A visual guide to SOLID principles and their relationships with common design patterns</p>\n");
    out.push_str("<p>SOLID is an acronym that represents five key design principles in object-oriented programming, introduced by Robert C. Martin. These principles help developers create software that's easy to maintain, extend, and understand.</p>\n");
    out.push_str("</section>\n");

    let catalog = atlas.catalog();
    out.push_str("<section id=\"principles\">\n<h2>The Principles</h2>\n<div class=\"cards\">\n");
    for record in catalog.list_principles() {
        let state = options.card_state(&record.examples);
        write_card(&mut out, &atlas.principle_card(record, &state));
    }
    out.push_str("</div>\n</section>\n");

    out.push_str("<section id=\"patterns\">\n<h2>Design Patterns</h2>\n<div class=\"cards\">\n");
    for record in catalog.list_patterns() {
        let state = options.card_state(&record.examples);
        write_card(&mut out, &atlas.pattern_card(record, &state));
    }
    out.push_str("</div>\n</section>\n");

    out.push_str("<section id=\"matrix\">\n<h2>Relationship to Design Patterns</h2>\n");
    out.push_str("<p>This matrix shows how each principle relates to popular design patterns. Hover over or focus a checkmark for details about a relationship.</p>\n");
    write_matrix(&mut out, &atlas.matrix_view());
    out.push_str("</section>\n");

    write_glossary(&mut out, atlas);

    out.push_str("</main>\n<footer><p>SOLID Principles Guide</p></footer>\n");
    out.push_str(&format!("<script>{}</script>\n</body>\n</html>\n", SCRIPT));
    debug!(bytes = out.len(), "composed page");
    out
}

fn write_glossary(out: &mut String, atlas: &Atlas) {
    let catalog = atlas.catalog();
    out.push_str("<section id=\"terms\">\n<h2>Key Terms</h2>\n<div class=\"cards\">\n");

    out.push_str("<div class=\"terms\">\n<h3>SOLID Principles</h3>\n<ul>\n");
    for record in catalog.list_principles() {
        let letter = record.code.as_str().chars().next().unwrap_or(' ');
        out.push_str(&format!(
            "<li><strong class=\"primary\">{} - {}:</strong> ",
            letter, record.code
        ));
        write_tooltip(out, &text(record.title), record.summary, Tooltip::new());
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n");

    out.push_str("<div class=\"terms\">\n<h3>Design Patterns</h3>\n<ul>\n");
    for record in catalog.list_patterns() {
        out.push_str(&format!(
            "<li><strong class=\"primary\">{}:</strong> ",
            text(record.name.display_name())
        ));
        write_tooltip(out, &text(record.glossary), record.summary, Tooltip::new());
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n</div>\n</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_has_every_section() {
        let atlas = Atlas::load().unwrap();
        let html = compose_page(&atlas, &PageOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        for id in ["principles", "patterns", "matrix", "terms"] {
            assert!(html.contains(&format!("<section id=\"{}\">", id)), "{}", id);
        }
        assert!(html.contains("<details class=\"card card-principle\" id=\"principle-srp\">"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn expand_all_opens_every_card() {
        let atlas = Atlas::load().unwrap();
        let options = PageOptions {
            expand_all: true,
            ..PageOptions::default()
        };
        let html = compose_page(&atlas, &options);
        let cards = atlas.list_principles().len() + atlas.list_patterns().len();
        assert_eq!(html.matches("<details ").count(), cards);
        assert_eq!(html.matches("\" open>").count(), cards);
    }

    #[test]
    fn language_option_only_moves_cards_that_declare_it() {
        let atlas = Atlas::load().unwrap();
        let options = PageOptions {
            language: Some(Language::Python),
            ..PageOptions::default()
        };
        let html = compose_page(&atlas, &options);
        // principle cards only carry TypeScript and stay on it
        assert!(html.contains(
            "<pre class=\"example language-typescript\" data-lang=\"typescript\"><code>// Bad - Multiple responsibilities"
        ));
        assert!(html.contains(
            "<pre class=\"example language-python\" data-lang=\"python\"><code># Factory Pattern Example"
        ));
    }

    #[test]
    fn glossary_says_what_each_pattern_is_for() {
        let atlas = Atlas::load().unwrap();
        let html = compose_page(&atlas, &PageOptions::default());
        assert!(html.contains(
            "<li><strong class=\"primary\">Factory:</strong> <span class=\"has-tooltip\" tabindex=\"0\">Creational pattern for object creation<span class=\"tooltip\" role=\"tooltip\">Creates objects without specifying the exact class of object that will be created</span></span></li>"
        ));
        assert!(html.contains(">Structural pattern for interface compatibility<"));
    }

    #[test]
    fn dark_theme_sets_the_root_class() {
        let atlas = Atlas::load().unwrap();
        let options = PageOptions {
            theme: Theme::Dark,
            title: "A & B".to_string(),
            ..PageOptions::default()
        };
        let html = compose_page(&atlas, &options);
        assert!(html.contains("<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("<title>A &amp; B</title>"));
    }
}
