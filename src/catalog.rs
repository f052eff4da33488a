//! # Content catalog
//!
//! The fixed set of principle and pattern records. Both lists keep their
//! authored order, which is the order cards and matrix rows are shown in.
use tracing::debug;

use crate::{
    data, Error, Examples, LoadResult, PatternName, PatternRecord, PrincipleCode, PrincipleRecord,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    principles: Vec<PrincipleRecord>,
    patterns: Vec<PatternRecord>,
}

impl Catalog {
    /// Checks the records and wraps them into a catalog
    pub fn new(
        principles: Vec<PrincipleRecord>,
        patterns: Vec<PatternRecord>,
    ) -> LoadResult<Self> {
        for (i, p) in principles.iter().enumerate() {
            if principles[..i].iter().any(|q| q.code == p.code) {
                return Err(Error::DuplicatePrinciple(p.code));
            }
            check_examples(p.code.as_str(), &p.examples)?;
        }
        for (i, p) in patterns.iter().enumerate() {
            if patterns[..i].iter().any(|q| q.name == p.name) {
                return Err(Error::DuplicatePattern(p.name));
            }
            check_examples(p.name.short_name(), &p.examples)?;
        }
        debug!(
            principles = principles.len(),
            patterns = patterns.len(),
            "loaded catalog"
        );
        Ok(Self {
            principles,
            patterns,
        })
    }

    /// The compiled-in content
    pub fn shipped() -> LoadResult<Self> {
        Self::new(data::principles(), data::patterns())
    }

    pub fn list_principles(&self) -> &[PrincipleRecord] {
        &self.principles
    }

    pub fn list_patterns(&self) -> &[PatternRecord] {
        &self.patterns
    }

    pub fn principle(&self, code: PrincipleCode) -> Option<&PrincipleRecord> {
        self.principles.iter().find(|p| p.code == code)
    }

    pub fn pattern(&self, name: PatternName) -> Option<&PatternRecord> {
        self.patterns.iter().find(|p| p.name == name)
    }
}

fn check_examples(record: &str, examples: &Examples) -> LoadResult<()> {
    if examples.is_empty() {
        return Err(Error::MissingExample(record.to_string()));
    }
    if let Some(language) = examples.duplicate_language() {
        return Err(Error::DuplicateLanguage(record.to_string(), language));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CrossRef, Example, Language, PatternCategory};

    fn principle(code: PrincipleCode, related: Vec<CrossRef<PatternName>>) -> PrincipleRecord {
        PrincipleRecord {
            code,
            title: "Title",
            description: "Description",
            summary: "Summary",
            examples: Examples::typescript("class A {}"),
            related_patterns: related,
        }
    }

    fn pattern(name: PatternName, examples: Examples) -> PatternRecord {
        PatternRecord {
            name,
            title: "Title",
            description: "Description",
            category: PatternCategory::Behavioral,
            summary: "Summary",
            glossary: "Glossary",
            examples,
            related_principles: vec![],
        }
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let res = Catalog::new(
            vec![
                principle(PrincipleCode::SRP, vec![]),
                principle(PrincipleCode::SRP, vec![]),
            ],
            vec![],
        );
        assert_eq!(res.unwrap_err(), Error::DuplicatePrinciple(PrincipleCode::SRP));
    }

    #[test]
    fn duplicate_pattern_names_are_rejected() {
        let res = Catalog::new(
            vec![],
            vec![
                pattern(PatternName::Observer, Examples::typescript("a")),
                pattern(PatternName::Observer, Examples::typescript("b")),
            ],
        );
        assert_eq!(res.unwrap_err(), Error::DuplicatePattern(PatternName::Observer));
    }

    #[test]
    fn records_need_an_example() {
        let res = Catalog::new(vec![], vec![pattern(PatternName::Adapter, Examples::new(vec![]))]);
        assert_eq!(res.unwrap_err(), Error::MissingExample("Adapter".to_string()));
    }

    #[test]
    fn languages_are_declared_once() {
        let examples = Examples::new(vec![
            Example {
                language: Language::PHP,
                code: "<?php",
            },
            Example {
                language: Language::PHP,
                code: "<?php",
            },
        ]);
        let res = Catalog::new(vec![], vec![pattern(PatternName::DependencyInjection, examples)]);
        assert_eq!(
            res.unwrap_err(),
            Error::DuplicateLanguage("DI".to_string(), Language::PHP)
        );
    }

    #[test]
    fn lookups_by_key() {
        let catalog = Catalog::new(
            vec![principle(PrincipleCode::ISP, vec![CrossRef::bare(PatternName::Facade)])],
            vec![pattern(PatternName::Strategy, Examples::typescript("s"))],
        )
        .unwrap();
        assert!(catalog.principle(PrincipleCode::ISP).is_some());
        assert!(catalog.principle(PrincipleCode::DIP).is_none());
        assert!(catalog.pattern(PatternName::Strategy).is_some());
        assert!(catalog.pattern(PatternName::Facade).is_none());
    }
}
