//! # A reference page for the SOLID principles
//!
//! The crate holds a fixed catalog of the five SOLID principles and a set of
//! design patterns, reconciles their cross-references into a
//! [`RelationshipIndex`], and renders cards, the relationship matrix and a
//! complete HTML page from them.
//!
//! ```no_run
//! use solid_atlas::{Atlas, PageOptions};
//!
//! let atlas = Atlas::load()?;
//! let cell = atlas.lookup_by_name("SRP", "Observer")?;
//! assert!(cell.is_present());
//! let _html = solid_atlas::compose_page(&atlas, &PageOptions::default());
//! # Ok::<(), solid_atlas::Error>(())
//! ```

mod model;
pub use model::*;
mod error;
pub use error::*;
mod catalog;
pub use catalog::*;
mod index;
pub use index::*;
pub mod parser;
mod state;
pub use state::*;
pub mod render;
pub use render::{CardView, Glyph, MatrixView};
mod page;
pub use page::*;
pub mod data;

/// The catalog together with the relationship index built from it
///
/// Both parts are immutable once loaded; any number of cards and matrix
/// views can be rendered from one atlas.
#[derive(Debug, Clone)]
pub struct Atlas {
    catalog: Catalog,
    index: RelationshipIndex,
}

impl Atlas {
    /// Loads the compiled-in catalog and matrix
    pub fn load() -> LoadResult<Self> {
        let catalog = Catalog::shipped()?;
        Self::from_parts(catalog, &data::matrix(), &data::COLUMNS)
    }

    pub fn from_parts(
        catalog: Catalog,
        table: &MatrixTable,
        columns: &[PatternName],
    ) -> LoadResult<Self> {
        let index = RelationshipIndex::build(&catalog, table, columns)?;
        Ok(Self { catalog, index })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    pub fn list_principles(&self) -> &[PrincipleRecord] {
        self.catalog.list_principles()
    }

    pub fn list_patterns(&self) -> &[PatternRecord] {
        self.catalog.list_patterns()
    }

    pub fn lookup(
        &self,
        principle: PrincipleCode,
        pattern: PatternName,
    ) -> Result<RelationshipCell, Error> {
        self.index.lookup(principle, pattern)
    }

    pub fn lookup_by_name(
        &self,
        principle: &str,
        pattern: &str,
    ) -> Result<RelationshipCell, Error> {
        self.index.lookup_by_name(principle, pattern)
    }

    pub fn discrepancies(&self) -> &[Discrepancy] {
        self.index.discrepancies()
    }

    pub fn matrix_view(&self) -> MatrixView {
        MatrixView::new(&self.index)
    }

    pub fn principle_card(&self, record: &PrincipleRecord, state: &CardState) -> CardView {
        CardView::principle(&self.catalog, record, state)
    }

    pub fn pattern_card(&self, record: &PatternRecord, state: &CardState) -> CardView {
        CardView::pattern(&self.catalog, record, state)
    }
}
