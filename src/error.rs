//! Error types
use displaydoc::Display;
use nom::error::ErrorKind;
use nom::InputLength;
use thiserror::Error;

use crate::{Language, PatternName, PrincipleCode};

/// Error wrapper when loading or querying the atlas
#[derive(Debug, Error, Display, PartialEq, Eq)]
pub enum Error {
    /// Unknown principle code {0:?}
    UnknownPrinciple(String),
    /// Unknown pattern name {0:?}
    UnknownPattern(String),
    /// Unknown example language {0:?}
    UnknownLanguage(String),
    /// Principle {0} is declared more than once
    DuplicatePrinciple(PrincipleCode),
    /// Pattern {0} is declared more than once
    DuplicatePattern(PatternName),
    /// Record {0} has no example
    MissingExample(String),
    /// Record {0} declares the {1} example more than once
    DuplicateLanguage(String, Language),
    /// Matrix row for {0} appears more than once
    DuplicateRow(PrincipleCode),
    /// Matrix has no row for {0}
    MissingRow(PrincipleCode),
    /// Matrix row {0} is not in the principle catalog
    UnexpectedRow(PrincipleCode),
    /// Matrix row {0} has more than one cell for {1}
    DuplicateCell(PrincipleCode, PatternName),
    /// Column {0} is listed more than once
    DuplicateColumn(PatternName),
    /// Pattern {0} is not a column of the relationship matrix
    PatternNotInMatrix(PatternName),
    /// Principle {0} is not a row of the relationship matrix
    PrincipleNotInMatrix(PrincipleCode),
    /// Language {0} is not declared by this record
    LanguageNotDeclared(Language),
    /// Parsing incomplete
    Incomplete,
    /// Nom parsing error: {0:?} at -{1}
    ParseError(ErrorKind, usize),
    /// Nom parsing failure: {0:?} at -{1}
    ParseFailure(ErrorKind, usize),
}

/// Result when loading the atlas
pub type LoadResult<T> = Result<T, Error>;

impl<I: InputLength> From<nom::Err<nom::error::Error<I>>> for Error {
    fn from(e: nom::Err<nom::error::Error<I>>) -> Error {
        match e {
            // Need to translate the error here, as this lives longer than the input
            nom::Err::Incomplete(_) => Error::Incomplete,
            nom::Err::Error(e) => Error::ParseError(e.code, e.input.input_len()),
            nom::Err::Failure(e) => Error::ParseFailure(e.code, e.input.input_len()),
        }
    }
}
