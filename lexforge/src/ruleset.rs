//! Loading `Rule`s from a rule file.
//!
//! Format: one rule per line, `<TOKEN_NAME><whitespace><POSTFIX_REGEX>`,
//! split on the first run of whitespace — the regex itself may contain
//! further whitespace, which the builder ignores. Blank lines and lines
//! whose first non-whitespace character is `#` are skipped. Malformed lines
//! are reported and skipped; loading continues.

use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{not_line_ending, space0, space1};
use nom::combinator::{opt, value};
use nom::sequence::{pair, preceded};
use nom::IResult;
use std::rc::Rc;

/// One named token rule: a kind and the postfix regex that recognizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub token_kind: Rc<str>,
    pub postfix_regex: String,
}

impl Rule {
    pub fn new(token_kind: impl Into<Rc<str>>, postfix_regex: impl Into<String>) -> Self {
        Self {
            token_kind: token_kind.into(),
            postfix_regex: postfix_regex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("line {line}: expected '<TOKEN_NAME> <POSTFIX_REGEX>', found {found:?}")]
    MalformedLine { line: usize, found: String },
}

/// Parse every rule out of `source`, returning the rules that parsed plus a
/// diagnostic for every line that didn't. Loading never aborts on a
/// malformed line; it just skips it and keeps going.
pub fn load(source: &str) -> (Vec<Rule>, Vec<LoadError>) {
    let mut rules = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in source.lines().enumerate() {
        if is_ignored(line) {
            continue;
        }
        match rule_line(line) {
            Ok((_, (token_kind, postfix_regex))) if !postfix_regex.is_empty() => {
                rules.push(Rule::new(token_kind, postfix_regex));
            }
            _ => errors.push(LoadError::MalformedLine {
                line: i + 1,
                found: line.to_string(),
            }),
        }
    }

    (rules, errors)
}

fn is_ignored(input: &str) -> bool {
    matches!(space_comment(input), Ok((rem, _)) if rem.is_empty())
}

fn space_comment(input: &str) -> IResult<&str, ()> {
    value((), pair(space0, opt(comment)))(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(tag("#"), not_line_ending))(input)
}

fn token_name(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// `<TOKEN_NAME><space1><rest of line, trimmed>`.
fn rule_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (rest, name) = preceded(space0, token_name)(input)?;
    let (rest, _) = space1(rest)?;
    Ok(("", (name, rest.trim())))
}
