/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Exemplar character sets.
//!
//! CLDR describes the characters a language is written with as a small
//! Unicode-set expression, e.g. `[a á b c {ch} d-f]`. This module parses that
//! notation and exposes the result as an [`ExemplarSet`], which iterates its
//! members the way a Unicode set does: single code points in ascending order,
//! followed by multi-character strings.

use crate::error::AlphabetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::ModalResult;
use winnow::token::{any, none_of, take};

/// Which exemplar set of a locale to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExemplarKind {
    /// The main, lowercase letters of the language. This is "the alphabet".
    Standard,
    /// Letters seen in loanwords and foreign names.
    Auxiliary,
    /// Uppercase index letters, as used for dictionary headings.
    Index,
    /// Punctuation commonly used with the language.
    Punctuation,
}

impl ExemplarKind {
    pub const ALL: [ExemplarKind; 4] = [
        ExemplarKind::Standard,
        ExemplarKind::Auxiliary,
        ExemplarKind::Index,
        ExemplarKind::Punctuation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExemplarKind::Standard => "Standard",
            ExemplarKind::Auxiliary => "Auxiliary",
            ExemplarKind::Index => "Index",
            ExemplarKind::Punctuation => "Punctuation",
        }
    }
}

impl fmt::Display for ExemplarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExemplarKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExemplarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown exemplar kind: {}", s))
    }
}

/// A set of exemplar characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemplarSet {
    chars: BTreeSet<char>,
    strings: BTreeSet<String>,
}

impl ExemplarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CLDR exemplar notation.
    pub fn parse(input: &str) -> crate::error::Result<Self> {
        let items = delimited(multispace0, parse_set, multispace0)
            .parse(input)
            .map_err(|e| AlphabetError::ExemplarSyntax {
                input: input.to_string(),
                message: e.to_string(),
            })?;

        let mut set = Self::new();
        for item in items {
            match item {
                Item::Char(c) => set.insert_char(c),
                Item::Range(start, end) => {
                    if start > end {
                        return Err(AlphabetError::ExemplarSyntax {
                            input: input.to_string(),
                            message: format!("range {}-{} is reversed", start, end),
                        });
                    }
                    set.insert_range(start, end);
                }
                Item::Str(s) => set.insert_str(&s),
            }
        }
        Ok(set)
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(c);
    }

    pub fn insert_range(&mut self, start: char, end: char) {
        self.chars.extend(start..=end);
    }

    /// Insert a string member. A one-character string is stored as a code point.
    pub fn insert_str(&mut self, s: &str) {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(c), None) => self.insert_char(c),
            _ => {
                self.strings.insert(s.to_string());
            }
        }
    }

    pub fn contains(&self, s: &str) -> bool {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.chars.contains(&c),
            _ => self.strings.contains(s),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.strings.is_empty()
    }

    /// Members in set order: code points ascending, then strings.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.chars
            .iter()
            .map(|c| c.to_string())
            .chain(self.strings.iter().cloned())
    }
}

impl FromStr for ExemplarSet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ExemplarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.chars.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if is_syntax_char(*c) {
                write!(f, "\\")?;
            }
            write!(f, "{}", c)?;
        }
        for (i, s) in self.strings.iter().enumerate() {
            if i > 0 || !self.chars.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "{{{}}}", s)?;
        }
        write!(f, "]")
    }
}

fn is_syntax_char(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}' | '-' | '\\' | ':' | '&' | '$' | '^') || c.is_whitespace()
}

enum Item {
    Char(char),
    Range(char, char),
    Str(String),
}

fn parse_escaped(input: &mut &str) -> ModalResult<char> {
    let _ = '\\'.parse_next(input)?;
    let c = any.parse_next(input)?;
    if c != 'u' {
        return Ok(c);
    }
    let hex = take(4_usize).parse_next(input)?;
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ErrMode::Backtrack(ContextError::default()))
}

fn parse_char(input: &mut &str) -> ModalResult<char> {
    alt((
        parse_escaped,
        none_of(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | '{' | '}' | '-' | '\\')),
    ))
    .parse_next(input)
}

fn parse_string_item(input: &mut &str) -> ModalResult<String> {
    let _ = '{'.parse_next(input)?;
    let s: String = repeat(1.., alt((parse_escaped, none_of(['}', '\\'])))).parse_next(input)?;
    let _ = '}'.parse_next(input)?;
    Ok(s)
}

fn parse_char_or_range(input: &mut &str) -> ModalResult<Item> {
    let start = parse_char.parse_next(input)?;
    let end = opt(preceded('-', parse_char)).parse_next(input)?;
    Ok(match end {
        Some(end) => Item::Range(start, end),
        None => Item::Char(start),
    })
}

fn parse_item(input: &mut &str) -> ModalResult<Item> {
    alt((parse_string_item.map(Item::Str), parse_char_or_range)).parse_next(input)
}

fn parse_set(input: &mut &str) -> ModalResult<Vec<Item>> {
    let _ = '['.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let items: Vec<Item> = repeat(0.., terminated(parse_item, multispace0)).parse_next(input)?;
    let _ = ']'.parse_next(input)?;
    Ok(items)
}
