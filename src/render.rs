//! # Rendering contracts
//!
//! View models the presentation layer consumes, and the HTML writers for
//! them. A view is a snapshot of one record (or of the index) under one UI
//! state; building it never mutates the catalog.
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::Serialize;

use crate::{
    CardState, Catalog, Language, PatternRecord, PrincipleCode, PrincipleRecord,
    RelationshipCell, RelationshipIndex, Tooltip,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum CardKind {
    Principle,
    Pattern,
}

impl CardKind {
    fn class(self) -> &'static str {
        match self {
            Self::Principle => "card-principle",
            Self::Pattern => "card-pattern",
        }
    }

    fn cross_ref_heading(self) -> &'static str {
        match self {
            Self::Principle => "Related Design Patterns:",
            Self::Pattern => "Related SOLID Principles:",
        }
    }
}

/// One entry of a card's cross-reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRefView {
    pub label: &'static str,
    /// In-page link target, if the referenced record has a card
    pub anchor: Option<String>,
    /// Supplementary text shown on hover or focus
    pub note: Option<&'static str>,
}

/// One example variant of a card
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub language: Language,
    pub code: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub kind: CardKind,
    pub anchor: String,
    pub heading: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub expanded: bool,
    pub panels: Vec<Panel>,
    pub cross_refs: Vec<CrossRefView>,
}

impl CardView {
    pub fn principle(catalog: &Catalog, record: &PrincipleRecord, state: &CardState) -> Self {
        let cross_refs = record
            .related_patterns
            .iter()
            .map(|r| CrossRefView {
                label: r.target.display_name(),
                anchor: catalog.pattern(r.target).map(|p| p.name.anchor()),
                note: r.note,
            })
            .collect();
        Self {
            kind: CardKind::Principle,
            anchor: record.code.anchor(),
            heading: record.code.as_str(),
            title: record.title,
            description: record.description,
            expanded: state.is_expanded(),
            panels: panels(&record.examples, state),
            cross_refs,
        }
    }

    pub fn pattern(catalog: &Catalog, record: &PatternRecord, state: &CardState) -> Self {
        let cross_refs = record
            .related_principles
            .iter()
            .map(|r| CrossRefView {
                label: r.target.as_str(),
                anchor: catalog.principle(r.target).map(|p| p.code.anchor()),
                note: r.note,
            })
            .collect();
        Self {
            kind: CardKind::Pattern,
            anchor: record.name.anchor(),
            heading: record.name.short_name(),
            title: record.title,
            description: record.description,
            expanded: state.is_expanded(),
            panels: panels(&record.examples, state),
            cross_refs,
        }
    }

    /// Tabs are only offered when there is more than one variant
    pub fn show_tabs(&self) -> bool {
        self.panels.len() > 1
    }

    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.active)
    }

    /// The example text a reader can see right now
    pub fn visible_example(&self) -> Option<&'static str> {
        if self.expanded {
            self.active_panel().map(|p| p.code)
        } else {
            None
        }
    }

    pub fn visible_cross_refs(&self) -> &[CrossRefView] {
        if self.expanded {
            &self.cross_refs
        } else {
            &[]
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_card(&mut out, self);
        out
    }
}

fn panels(examples: &crate::Examples, state: &CardState) -> Vec<Panel> {
    let active = state.active_language();
    examples
        .iter()
        .map(|e| Panel {
            language: e.language,
            code: e.code,
            active: Some(e.language) == active,
        })
        .collect()
}

/// Writes an anchor with supplementary text revealed on hover or focus
pub fn write_tooltip(out: &mut String, anchor_html: &str, note: &str, state: Tooltip) {
    let class = if state.is_visible() {
        "has-tooltip is-visible"
    } else {
        "has-tooltip"
    };
    out.push_str(&format!(
        "<span class=\"{}\" tabindex=\"0\">{}<span class=\"tooltip\" role=\"tooltip\">{}</span></span>",
        class,
        anchor_html,
        text(note)
    ));
}

pub fn write_card(out: &mut String, card: &CardView) {
    out.push_str(&format!(
        "<details class=\"card {}\" id=\"{}\"{}>\n",
        card.kind.class(),
        attr(&card.anchor),
        if card.expanded { " open" } else { "" }
    ));
    out.push_str("<summary>\n");
    out.push_str(&format!("<h3 class=\"card-heading\">{}</h3>\n", text(card.heading)));
    out.push_str(&format!("<h4 class=\"card-title\">{}</h4>\n", text(card.title)));
    out.push_str(&format!(
        "<p class=\"card-description\">{}</p>\n",
        text(card.description)
    ));
    out.push_str("</summary>\n<div class=\"card-body\">\n<h5>Code Example:</h5>\n");

    if card.show_tabs() {
        out.push_str("<div class=\"tabs\" role=\"tablist\">\n");
        for panel in &card.panels {
            out.push_str(&format!(
                "<button type=\"button\" role=\"tab\" class=\"tab\" data-lang=\"{}\" aria-selected=\"{}\">{}</button>\n",
                panel.language.tag(),
                panel.active,
                panel.language
            ));
        }
        out.push_str("</div>\n");
    }
    for panel in &card.panels {
        out.push_str(&format!(
            "<pre class=\"example language-{}\" data-lang=\"{}\"{}><code>{}</code></pre>\n",
            panel.language.tag(),
            panel.language.tag(),
            if panel.active { "" } else { " hidden" },
            text(panel.code)
        ));
    }

    out.push_str(&format!(
        "<h5>{}</h5>\n<ul class=\"cross-refs\">\n",
        card.kind.cross_ref_heading()
    ));
    for r in &card.cross_refs {
        let label = match &r.anchor {
            Some(anchor) => format!("<a href=\"#{}\">{}</a>", attr(anchor), text(r.label)),
            None => format!("<span>{}</span>", text(r.label)),
        };
        out.push_str("<li>");
        match r.note {
            Some(note) => write_tooltip(out, &label, note, Tooltip::new()),
            None => out.push_str(&label),
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n</details>\n");
}

/// Marker of one matrix cell, derived only from the cell variant
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Glyph {
    Placeholder,
    Affirmative,
    AffirmativeWithNote(&'static str),
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Placeholder => "-",
            Self::Affirmative | Self::AffirmativeWithNote(_) => "✓",
        }
    }
}

impl From<RelationshipCell> for Glyph {
    fn from(cell: RelationshipCell) -> Self {
        match cell {
            RelationshipCell::Absent => Self::Placeholder,
            RelationshipCell::PresentUnannotated => Self::Affirmative,
            RelationshipCell::PresentWithNote(note) => Self::AffirmativeWithNote(note),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRowView {
    pub principle: PrincipleCode,
    /// e.g. `Single Responsibility (SRP)`
    pub label: String,
    pub cells: Vec<Glyph>,
}

/// The full grid: every principle against every column, no filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<MatrixRowView>,
}

impl MatrixView {
    pub fn new(index: &RelationshipIndex) -> Self {
        let columns = index.columns().iter().map(|c| c.display_name()).collect();
        let rows = index
            .rows()
            .iter()
            .map(|row| MatrixRowView {
                principle: row.principle,
                label: format!("{} ({})", row.title, row.principle),
                cells: index
                    .row(row.principle)
                    .unwrap_or(&[])
                    .iter()
                    .map(|cell| Glyph::from(*cell))
                    .collect(),
            })
            .collect();
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_matrix(&mut out, self);
        out
    }
}

pub fn write_matrix(out: &mut String, matrix: &MatrixView) {
    out.push_str("<div class=\"matrix-scroll\">\n<table class=\"matrix\">\n<thead>\n<tr>\n");
    out.push_str("<th class=\"matrix-corner\">Principle</th>\n");
    for column in &matrix.columns {
        out.push_str(&format!("<th scope=\"col\">{}</th>\n", text(column)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for (i, row) in matrix.rows.iter().enumerate() {
        let stripe = if i % 2 == 0 { "row-even" } else { "row-odd" };
        out.push_str(&format!(
            "<tr class=\"{}\">\n<th scope=\"row\"><a href=\"#{}\">{}</a></th>\n",
            stripe,
            row.principle.anchor(),
            text(&row.label)
        ));
        for glyph in &row.cells {
            out.push_str("<td>");
            match glyph {
                Glyph::Placeholder => {
                    out.push_str("<span class=\"glyph glyph-none\">-</span>");
                }
                Glyph::Affirmative => {
                    out.push_str("<span class=\"glyph glyph-yes\">✓</span>");
                }
                Glyph::AffirmativeWithNote(note) => {
                    write_tooltip(
                        out,
                        "<span class=\"glyph glyph-yes\">✓</span>",
                        note,
                        Tooltip::new(),
                    );
                }
            }
            out.push_str("</td>\n");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnchorEvent, CrossRef, Example, Examples, PatternCategory, PatternName};

    fn adapter() -> PatternRecord {
        PatternRecord {
            name: PatternName::Adapter,
            title: "Adapter Pattern",
            description: "Wraps an object.",
            category: PatternCategory::Structural,
            summary: "Makes interfaces fit",
            glossary: "Glossary",
            examples: Examples::new(vec![
                Example {
                    language: Language::TypeScript,
                    code: "class Adapter<T> {}",
                },
                Example {
                    language: Language::PHP,
                    code: "<?php class Adapter {}",
                },
            ]),
            related_principles: vec![
                CrossRef::new(PrincipleCode::OCP, "no edits"),
                CrossRef::bare(PrincipleCode::ISP),
            ],
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![PrincipleRecord {
                code: PrincipleCode::OCP,
                title: "Open/Closed Principle",
                description: "Open for extension.",
                summary: "Extend, don't modify",
                examples: Examples::typescript("interface Shape {}"),
                related_patterns: vec![
                    CrossRef::new(PatternName::Adapter, "adapts"),
                    CrossRef::new(PatternName::Facade, "hides"),
                ],
            }],
            vec![adapter()],
        )
        .unwrap()
    }

    #[test]
    fn collapsed_cards_hide_the_body() {
        let record = adapter();
        let view = CardView::pattern(&catalog(), &record, &CardState::new(&record.examples));
        assert!(!view.expanded);
        assert_eq!(view.visible_example(), None);
        assert!(view.visible_cross_refs().is_empty());
        assert!(view.to_html().starts_with("<details class=\"card card-pattern\" id=\"pattern-adapter\">"));
    }

    #[test]
    fn double_toggle_renders_the_same_card() {
        let catalog = catalog();
        let record = adapter();
        let mut state = CardState::new(&record.examples);
        let before = CardView::pattern(&catalog, &record, &state).to_html();
        state.toggle();
        assert_ne!(CardView::pattern(&catalog, &record, &state).to_html(), before);
        state.toggle();
        assert_eq!(CardView::pattern(&catalog, &record, &state).to_html(), before);
    }

    #[test]
    fn example_code_is_escaped() {
        let record = adapter();
        let html = CardView::pattern(&catalog(), &record, &CardState::new(&record.examples)).to_html();
        assert!(html.contains("class Adapter&lt;T&gt; {}"));
        assert!(html.contains("&lt;?php class Adapter {}"));
        assert!(!html.contains("<?php"));
    }

    #[test]
    fn only_the_active_panel_is_shown() {
        let record = adapter();
        let mut state = CardState::new(&record.examples).expanded();
        state.select_language(Language::PHP).unwrap();
        let view = CardView::pattern(&catalog(), &record, &state);
        assert!(view.show_tabs());
        assert_eq!(view.visible_example(), Some("<?php class Adapter {}"));
        let html = view.to_html();
        assert!(html.contains("<pre class=\"example language-php\" data-lang=\"php\"><code>"));
        assert!(html.contains("<pre class=\"example language-typescript\" data-lang=\"typescript\" hidden><code>"));
        assert!(html.contains("aria-selected=\"true\">PHP</button>"));
    }

    #[test]
    fn single_language_cards_have_no_tabs() {
        let catalog = catalog();
        let record = &catalog.list_principles()[0];
        let view = CardView::principle(&catalog, record, &CardState::new(&record.examples));
        assert!(!view.show_tabs());
        assert!(!view.to_html().contains("role=\"tablist\""));
    }

    #[test]
    fn cross_refs_link_only_to_existing_cards() {
        let catalog = catalog();
        let record = &catalog.list_principles()[0];
        let view = CardView::principle(
            &catalog,
            record,
            &CardState::new(&record.examples).expanded(),
        );
        let refs = view.visible_cross_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].anchor.as_deref(), Some("pattern-adapter"));
        assert_eq!(refs[1].label, "Facade");
        assert_eq!(refs[1].anchor, None);
        let html = view.to_html();
        assert!(html.contains("<a href=\"#pattern-adapter\">Adapter</a>"));
        assert!(html.contains("<span>Facade</span><span class=\"tooltip\" role=\"tooltip\">hides</span>"));
    }

    #[test]
    fn bare_cross_refs_have_no_tooltip() {
        let record = adapter();
        let view = CardView::pattern(&catalog(), &record, &CardState::new(&record.examples));
        assert!(view.to_html().contains("<li><span>ISP</span></li>"));
    }

    #[test]
    fn tooltip_markup_follows_state() {
        let mut tip = Tooltip::new();
        let mut hidden = String::new();
        write_tooltip(&mut hidden, "<b>x</b>", "a < b", tip);
        assert_eq!(
            hidden,
            "<span class=\"has-tooltip\" tabindex=\"0\"><b>x</b><span class=\"tooltip\" role=\"tooltip\">a &lt; b</span></span>"
        );
        tip.handle(AnchorEvent::Focus);
        let mut shown = String::new();
        write_tooltip(&mut shown, "<b>x</b>", "a < b", tip);
        assert!(shown.starts_with("<span class=\"has-tooltip is-visible\""));
    }

    #[test]
    fn glyphs_follow_cells() {
        assert_eq!(Glyph::from(RelationshipCell::Absent).symbol(), "-");
        assert_eq!(Glyph::from(RelationshipCell::PresentUnannotated).symbol(), "✓");
        assert_eq!(
            Glyph::from(RelationshipCell::PresentWithNote("n")),
            Glyph::AffirmativeWithNote("n")
        );
    }
}
