//! # Relationship index
//!
//! The index is reconciled from three authored sources: the cross-references
//! on principle records, the cross-references on pattern records, and the
//! standalone matrix table.
//!
//! - Whether a relationship exists is decided by the matrix table, the only
//!   source that covers every (principle, pattern) pair.
//! - The note of a present cell is taken from the pattern record, then the
//!   principle record, then the matrix table itself.
//! - Wherever the sources disagree a [`Discrepancy`] is recorded and logged.
use displaydoc::Display;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    parser, Catalog, CrossRef, Error, LoadResult, PatternName, PrincipleCode, RelationshipCell,
};

/// A cell of the authored matrix table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mark {
    No,
    Yes,
    Note(&'static str),
}

impl Mark {
    pub fn is_present(self) -> bool {
        !matches!(self, Mark::No)
    }
}

/// A row of the authored matrix table, e.g. `Single Responsibility (SRP)`
#[derive(Debug, Clone)]
pub struct MatrixRow {
    pub label: &'static str,
    /// Cells keyed by column label, e.g. `Dependency Injection`
    pub cells: Vec<(&'static str, Mark)>,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixTable {
    pub rows: Vec<MatrixRow>,
}

/// Which record asserted a relationship
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Side {
    Principle,
    Pattern,
}

/// A disagreement between the relationship sources
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Serialize)]
pub enum Discrepancy {
    /// {declared_by:?} record relates {principle} to {pattern}, but the matrix does not
    NotInMatrix {
        principle: PrincipleCode,
        pattern: PatternName,
        declared_by: Side,
    },
    /// only the {declared_by:?} record relates {principle} to {pattern}
    Asymmetric {
        principle: PrincipleCode,
        pattern: PatternName,
        declared_by: Side,
    },
    /// the matrix relates {principle} to {pattern}, but neither record does
    MatrixOnly {
        principle: PrincipleCode,
        pattern: PatternName,
    },
    /// {declared_by:?} record relates {principle} to {pattern}, which is not a matrix column
    OutsideColumns {
        principle: PrincipleCode,
        pattern: PatternName,
        declared_by: Side,
    },
}

/// Row of the index: the principle and the title from its matrix label
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub principle: PrincipleCode,
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct RelationshipIndex {
    rows: Vec<IndexRow>,
    columns: Vec<PatternName>,
    cells: Vec<RelationshipCell>,
    discrepancies: Vec<Discrepancy>,
}

impl RelationshipIndex {
    /// Reconciles the catalog cross-references with the matrix table
    ///
    /// Rows follow the catalog order, columns follow `columns`.
    pub fn build(
        catalog: &Catalog,
        table: &MatrixTable,
        columns: &[PatternName],
    ) -> LoadResult<Self> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(Error::DuplicateColumn(*column));
            }
        }

        let mut parsed: Vec<(IndexRow, Vec<(PatternName, Mark)>)> = Vec::new();
        for row in &table.rows {
            let (title, principle) = parser::row_label(row.label)?;
            if parsed.iter().any(|(r, _)| r.principle == principle) {
                return Err(Error::DuplicateRow(principle));
            }
            if catalog.principle(principle).is_none() {
                return Err(Error::UnexpectedRow(principle));
            }
            let mut marks: Vec<(PatternName, Mark)> = Vec::with_capacity(row.cells.len());
            for (label, mark) in &row.cells {
                let pattern: PatternName = label.parse()?;
                if marks.iter().any(|(p, _)| *p == pattern) {
                    return Err(Error::DuplicateCell(principle, pattern));
                }
                if !columns.contains(&pattern) {
                    debug!(%principle, %pattern, "matrix cell outside the selected columns");
                }
                marks.push((pattern, *mark));
            }
            parsed.push((IndexRow { principle, title }, marks));
        }

        let mut rows = Vec::with_capacity(parsed.len());
        let mut cells = Vec::with_capacity(parsed.len() * columns.len());
        let mut discrepancies = Vec::new();
        for record in catalog.list_principles() {
            let (row, marks) = parsed
                .iter()
                .find(|(r, _)| r.principle == record.code)
                .ok_or(Error::MissingRow(record.code))?;
            rows.push(*row);
            for &pattern in columns {
                let mark = marks
                    .iter()
                    .find(|(p, _)| *p == pattern)
                    .map_or(Mark::No, |(_, m)| *m);
                let card = catalog.pattern(pattern);
                let from_pattern = card.and_then(|c| c.note_for(record.code));
                let from_principle = record.note_for(pattern);
                let principle = record.code;

                if !mark.is_present() {
                    if from_principle.is_some() {
                        discrepancies.push(Discrepancy::NotInMatrix {
                            principle,
                            pattern,
                            declared_by: Side::Principle,
                        });
                    }
                    if from_pattern.is_some() {
                        discrepancies.push(Discrepancy::NotInMatrix {
                            principle,
                            pattern,
                            declared_by: Side::Pattern,
                        });
                    }
                } else if from_principle.is_none() && from_pattern.is_none() {
                    discrepancies.push(Discrepancy::MatrixOnly { principle, pattern });
                }
                if card.is_some() && from_principle.is_some() != from_pattern.is_some() {
                    let declared_by = if from_principle.is_some() {
                        Side::Principle
                    } else {
                        Side::Pattern
                    };
                    discrepancies.push(Discrepancy::Asymmetric {
                        principle,
                        pattern,
                        declared_by,
                    });
                }

                cells.push(reconcile(mark, from_pattern, from_principle));
            }

            for r in &record.related_patterns {
                if !columns.contains(&r.target) {
                    discrepancies.push(Discrepancy::OutsideColumns {
                        principle: record.code,
                        pattern: r.target,
                        declared_by: Side::Principle,
                    });
                }
            }
        }
        for card in catalog.list_patterns() {
            if columns.contains(&card.name) {
                continue;
            }
            for r in &card.related_principles {
                discrepancies.push(Discrepancy::OutsideColumns {
                    principle: r.target,
                    pattern: card.name,
                    declared_by: Side::Pattern,
                });
            }
        }

        for d in &discrepancies {
            warn!("relationship sources disagree: {}", d);
        }
        debug!(
            rows = rows.len(),
            columns = columns.len(),
            discrepancies = discrepancies.len(),
            "built relationship index"
        );
        Ok(Self {
            rows,
            columns: columns.to_vec(),
            cells,
            discrepancies,
        })
    }

    /// The relationship between `principle` and `pattern`
    ///
    /// Unrelated pairs are `Absent`; a pattern that is not one of the columns
    /// the index was built with is an error.
    pub fn lookup(
        &self,
        principle: PrincipleCode,
        pattern: PatternName,
    ) -> Result<RelationshipCell, Error> {
        let col = self
            .columns
            .iter()
            .position(|c| *c == pattern)
            .ok_or(Error::PatternNotInMatrix(pattern))?;
        let row = self
            .rows
            .iter()
            .position(|r| r.principle == principle)
            .ok_or(Error::PrincipleNotInMatrix(principle))?;
        Ok(self.cells[row * self.columns.len() + col])
    }

    /// Like [`RelationshipIndex::lookup`], parsing both names first
    pub fn lookup_by_name(
        &self,
        principle: &str,
        pattern: &str,
    ) -> Result<RelationshipCell, Error> {
        self.lookup(principle.parse()?, pattern.parse()?)
    }

    pub fn rows(&self) -> &[IndexRow] {
        &self.rows
    }

    pub fn columns(&self) -> &[PatternName] {
        &self.columns
    }

    /// The cells of one row, in column order
    pub fn row(&self, principle: PrincipleCode) -> Option<&[RelationshipCell]> {
        let row = self.rows.iter().position(|r| r.principle == principle)?;
        let width = self.columns.len();
        Some(&self.cells[row * width..(row + 1) * width])
    }

    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }
}

fn reconcile(
    mark: Mark,
    from_pattern: Option<&CrossRef<PrincipleCode>>,
    from_principle: Option<&CrossRef<PatternName>>,
) -> RelationshipCell {
    if !mark.is_present() {
        return RelationshipCell::Absent;
    }
    let matrix_note = match mark {
        Mark::Note(text) => Some(text),
        _ => None,
    };
    from_pattern
        .and_then(|r| r.note)
        .or_else(|| from_principle.and_then(|r| r.note))
        .or(matrix_note)
        .map_or(RelationshipCell::PresentUnannotated, RelationshipCell::PresentWithNote)
}
