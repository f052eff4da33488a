#![allow(clippy::upper_case_acronyms)]
//! # Data definitions for the atlas
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Short code of one of the five SOLID principles
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PrincipleCode {
    /// Single Responsibility Principle
    SRP,
    /// Open/Closed Principle
    OCP,
    /// Liskov Substitution Principle
    LSP,
    /// Interface Segregation Principle
    ISP,
    /// Dependency Inversion Principle
    DIP,
}

impl PrincipleCode {
    pub const ALL: [PrincipleCode; 5] = [Self::SRP, Self::OCP, Self::LSP, Self::ISP, Self::DIP];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SRP => "SRP",
            Self::OCP => "OCP",
            Self::LSP => "LSP",
            Self::ISP => "ISP",
            Self::DIP => "DIP",
        }
    }

    /// Anchor id of the principle card within the page
    pub fn anchor(self) -> String {
        format!("principle-{}", self.as_str().to_ascii_lowercase())
    }
}

impl fmt::Display for PrincipleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPrinciple(s.to_string()))
    }
}

/// Name of a design pattern that may appear in the relationship matrix
///
/// Not every name has a card: `Facade` only shows up as a matrix column and
/// as a cross-reference from principle cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PatternName {
    Factory,
    Strategy,
    Decorator,
    Observer,
    Adapter,
    Facade,
    DependencyInjection,
}

impl PatternName {
    /// All names, in the column order of the shipped matrix
    pub const ALL: [PatternName; 7] = [
        Self::Factory,
        Self::Strategy,
        Self::Decorator,
        Self::Observer,
        Self::Adapter,
        Self::Facade,
        Self::DependencyInjection,
    ];

    /// The short name shown as the card heading
    pub fn short_name(self) -> &'static str {
        match self {
            Self::DependencyInjection => "DI",
            other => other.display_name(),
        }
    }

    /// The name used for matrix columns and cross-references
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Factory => "Factory",
            Self::Strategy => "Strategy",
            Self::Decorator => "Decorator",
            Self::Observer => "Observer",
            Self::Adapter => "Adapter",
            Self::Facade => "Facade",
            Self::DependencyInjection => "Dependency Injection",
        }
    }

    pub fn anchor(self) -> String {
        let slug: String = self
            .display_name()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("pattern-{}", slug.to_ascii_lowercase())
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PatternName {
    type Err = Error;

    /// Accepts the display name, the short name, or the display name without spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| {
                let compact: String = p
                    .display_name()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                p.display_name().eq_ignore_ascii_case(wanted)
                    || p.short_name().eq_ignore_ascii_case(wanted)
                    || compact.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Grouping of a pattern, as used in the glossary
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

impl PatternCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creational => "Creational",
            Self::Structural => "Structural",
            Self::Behavioral => "Behavioral",
        }
    }
}

/// Source language of an example snippet
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    TypeScript,
    PHP,
    Python,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::TypeScript, Self::PHP, Self::Python];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::PHP => "PHP",
            Self::Python => "Python",
        }
    }

    /// Lowercase tag used in element ids and `class="language-*"`
    pub fn tag(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::PHP => "php",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        match wanted.to_ascii_lowercase().as_str() {
            "ts" => return Ok(Self::TypeScript),
            "py" => return Ok(Self::Python),
            _ => {}
        }
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// One example snippet. The code is shown, never run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub language: Language,
    pub code: &'static str,
}

/// The examples of a record, in declared order
///
/// The declared order is the record's list of supported languages; the first
/// entry is the default tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Examples(Vec<Example>);

impl Examples {
    pub fn new(examples: Vec<Example>) -> Self {
        Self(examples)
    }

    /// A record with a single TypeScript example
    pub fn typescript(code: &'static str) -> Self {
        Self(vec![Example {
            language: Language::TypeScript,
            code,
        }])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn languages(&self) -> Vec<Language> {
        self.0.iter().map(|e| e.language).collect()
    }

    pub fn default_language(&self) -> Option<Language> {
        self.0.first().map(|e| e.language)
    }

    pub fn get(&self, language: Language) -> Option<&Example> {
        self.0.iter().find(|e| e.language == language)
    }

    /// The first language that is declared twice, if any
    pub(crate) fn duplicate_language(&self) -> Option<Language> {
        self.0
            .iter()
            .enumerate()
            .find(|(i, e)| self.0[..*i].iter().any(|p| p.language == e.language))
            .map(|(_, e)| e.language)
    }
}

impl<'a> IntoIterator for &'a Examples {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An authored cross-reference from one record to another
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRef<T> {
    pub target: T,
    pub note: Option<&'static str>,
}

impl<T> CrossRef<T> {
    pub const fn new(target: T, note: &'static str) -> Self {
        Self {
            target,
            note: Some(note),
        }
    }

    pub const fn bare(target: T) -> Self {
        Self { target, note: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipleRecord {
    pub code: PrincipleCode,
    pub title: &'static str,
    pub description: &'static str,
    /// One-line explanation used for glossary tooltips
    pub summary: &'static str,
    pub examples: Examples,
    pub related_patterns: Vec<CrossRef<PatternName>>,
}

impl PrincipleRecord {
    pub fn note_for(&self, pattern: PatternName) -> Option<&CrossRef<PatternName>> {
        self.related_patterns.iter().find(|r| r.target == pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRecord {
    pub name: PatternName,
    pub title: &'static str,
    pub description: &'static str,
    pub category: PatternCategory,
    /// One-line explanation used for glossary tooltips
    pub summary: &'static str,
    /// What the pattern is for, e.g. `Creational pattern for object creation`
    pub glossary: &'static str,
    pub examples: Examples,
    pub related_principles: Vec<CrossRef<PrincipleCode>>,
}

impl PatternRecord {
    pub fn note_for(&self, principle: PrincipleCode) -> Option<&CrossRef<PrincipleCode>> {
        self.related_principles
            .iter()
            .find(|r| r.target == principle)
    }
}

/// Relationship between one principle and one pattern
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum RelationshipCell {
    Absent,
    PresentUnannotated,
    PresentWithNote(&'static str),
}

impl RelationshipCell {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::PresentWithNote(text) => Some(*text),
            _ => None,
        }
    }
}
