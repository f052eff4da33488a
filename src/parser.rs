use nom::bytes::complete::{tag, take_till1, take_until};
use nom::character::complete::{alpha1, char, space0};
use nom::combinator::{all_consuming, map_res, rest, verify};
use nom::sequence::{delimited, separated_pair, terminated, tuple};
use nom::IResult;

use crate::{Error, LoadResult, PatternName, PrincipleCode};

/// Parses a matrix row label such as `Single Responsibility (SRP)`
///
/// Returns the title in front of the parenthesis and the short code.
pub fn parse_row_label(input: &str) -> IResult<&str, (&str, PrincipleCode)> {
    let (input, title) = verify(take_until("("), |t: &str| !t.trim().is_empty())(input)?;
    let (input, code) = map_res(delimited(char('('), alpha1, char(')')), str::parse)(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (title.trim_end(), code)))
}

/// Parses a `principle:pattern` pair, e.g. `SRP:Observer` or `dip : DI`
pub fn parse_pair(input: &str) -> IResult<&str, (PrincipleCode, PatternName)> {
    let (input, (code, name)) = separated_pair(
        map_res(terminated(alpha1, space0), str::parse),
        tuple((tag(":"), space0)),
        map_res(verify(rest, |r: &str| !r.trim().is_empty()), str::parse),
    )(input)?;
    Ok((input, (code, name)))
}

/// Splits a comma separated list, e.g. `Factory, Strategy`
pub fn parse_list(input: &str) -> IResult<&str, Vec<&str>> {
    nom::multi::separated_list1(
        tuple((space0, char(','), space0)),
        take_till1(|c: char| c == ','),
    )(input)
}

/// Reads a complete matrix row label
pub fn row_label(label: &'static str) -> LoadResult<(&'static str, PrincipleCode)> {
    let (_, parsed) = all_consuming(parse_row_label)(label)?;
    Ok(parsed)
}

/// Reads a complete `principle:pattern` pair
pub fn pair(input: &str) -> LoadResult<(PrincipleCode, PatternName)> {
    let (_, parsed) = all_consuming(parse_pair)(input)?;
    Ok(parsed)
}

/// Reads a comma separated list of pattern names
pub fn pattern_list(input: &str) -> LoadResult<Vec<PatternName>> {
    let (_, items) = all_consuming(parse_list)(input.trim())?;
    items
        .into_iter()
        .map(str::parse)
        .collect::<Result<Vec<PatternName>, Error>>()
}
