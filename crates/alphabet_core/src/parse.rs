/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Parser for evaluator input lines.
//!
//! Supports the small subset of the input language needed to drive the
//! builtins: literals, symbols, `f[args]`, `{lists}`, `(grouping)`,
//! `lhs = rhs`, `a == b` and `a; b`.

use crate::expr::Expr;
use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, opt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, none_of, one_of, take_while};

/// Deepest nesting of brackets, calls and chained assignments accepted.
pub const MAX_DEPTH: usize = 128;

/// Parse one input line into an unevaluated expression.
///
/// Blank input parses to [`Expr::Null`].
pub fn parse_input(input: &str) -> Result<Expr, String> {
    if input.trim().is_empty() {
        return Ok(Expr::Null);
    }
    delimited(multispace0, |i: &mut &str| parse_compound(i, 0), multispace0)
        .parse(input)
        .map_err(|e| e.to_string())
}

fn backtrack<T>() -> Result<T, ErrMode<ContextError>> {
    Err(ErrMode::Backtrack(ContextError::default()))
}

/// Fails the whole parse once brackets or assignments nest deeper than
/// [`MAX_DEPTH`].
fn descend(depth: usize) -> Result<usize, ErrMode<ContextError>> {
    if depth >= MAX_DEPTH {
        return Err(ErrMode::Cut(ContextError::default()));
    }
    Ok(depth + 1)
}

fn parse_compound(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let mut parts = vec![parse_set(input, depth)?];
    loop {
        let _ = multispace0.parse_next(input)?;
        if opt(';').parse_next(input)?.is_none() {
            break;
        }
        let _ = multispace0.parse_next(input)?;
        match opt(|i: &mut &str| parse_set(i, depth)).parse_next(input)? {
            Some(expr) => parts.push(expr),
            None => {
                parts.push(Expr::Null);
                break;
            }
        }
    }
    if parts.len() == 1 {
        Ok(parts.remove(0))
    } else {
        Ok(Expr::call("CompoundExpression", parts))
    }
}

fn parse_set(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let lhs = parse_equal(input, depth)?;
    let _ = multispace0.parse_next(input)?;
    if input.starts_with('=') && !input.starts_with("==") {
        let _ = '='.parse_next(input)?;
        let _ = multispace0.parse_next(input)?;
        let rhs = parse_set(input, descend(depth)?)?;
        return Ok(Expr::call("Set", vec![lhs, rhs]));
    }
    Ok(lhs)
}

fn parse_equal(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let mut operands = vec![parse_primary(input, depth)?];
    loop {
        let _ = multispace0.parse_next(input)?;
        if !input.starts_with("==") {
            break;
        }
        let _ = "==".parse_next(input)?;
        let _ = multispace0.parse_next(input)?;
        operands.push(parse_primary(input, depth)?);
    }
    if operands.len() == 1 {
        Ok(operands.remove(0))
    } else {
        Ok(Expr::call("Equal", operands))
    }
}

fn parse_primary(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    alt((
        parse_string.map(Expr::String),
        parse_number,
        |i: &mut &str| parse_list(i, depth),
        |i: &mut &str| parse_group(i, depth),
        |i: &mut &str| parse_symbol_or_call(i, depth),
    ))
    .parse_next(input)
}

fn parse_escape(input: &mut &str) -> Result<char, ErrMode<ContextError>> {
    let _ = '\\'.parse_next(input)?;
    let c = any.parse_next(input)?;
    Ok(match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    })
}

fn parse_string(input: &mut &str) -> Result<String, ErrMode<ContextError>> {
    let _ = '"'.parse_next(input)?;
    let s: String = repeat(0.., alt((parse_escape, none_of(['"', '\\'])))).parse_next(input)?;
    let _ = '"'.parse_next(input)?;
    Ok(s)
}

fn parse_number(input: &mut &str) -> Result<Expr, ErrMode<ContextError>> {
    let sign = opt('-').parse_next(input)?;
    let whole = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let fraction = opt(('.', take_while(0.., |c: char| c.is_ascii_digit()))).parse_next(input)?;

    let mut text = String::new();
    if sign.is_some() {
        text.push('-');
    }
    text.push_str(whole);
    match fraction {
        Some((_, digits)) => {
            text.push('.');
            text.push_str(digits);
            match text.parse::<f64>() {
                Ok(x) => Ok(Expr::Real(x)),
                Err(_) => backtrack(),
            }
        }
        None => match text.parse::<i64>() {
            Ok(n) => Ok(Expr::Integer(n)),
            Err(_) => backtrack(),
        },
    }
}

fn parse_args(
    input: &mut &str,
    close: char,
    depth: usize,
) -> Result<Vec<Expr>, ErrMode<ContextError>> {
    let depth = descend(depth)?;
    let _ = multispace0.parse_next(input)?;
    if input.starts_with(close) {
        let _ = any.parse_next(input)?;
        return Ok(Vec::new());
    }
    let mut args = vec![parse_set(input, depth)?];
    loop {
        let _ = multispace0.parse_next(input)?;
        let c = any.parse_next(input)?;
        if c == close {
            return Ok(args);
        }
        if c != ',' {
            return backtrack();
        }
        let _ = multispace0.parse_next(input)?;
        args.push(parse_set(input, depth)?);
    }
}

fn parse_list(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let _ = '{'.parse_next(input)?;
    Ok(Expr::List(parse_args(input, '}', depth)?))
}

fn parse_group(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let _ = '('.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let inner = parse_compound(input, descend(depth)?)?;
    let _ = multispace0.parse_next(input)?;
    let _ = ')'.parse_next(input)?;
    Ok(inner)
}

fn parse_symbol(input: &mut &str) -> Result<String, ErrMode<ContextError>> {
    let first = one_of(|c: char| c.is_alphabetic() || c == '$').parse_next(input)?;
    let rest = take_while(0.., |c: char| c.is_alphanumeric() || c == '$' || c == '`')
        .parse_next(input)?;
    Ok(format!("{}{}", first, rest))
}

fn parse_symbol_or_call(input: &mut &str, depth: usize) -> Result<Expr, ErrMode<ContextError>> {
    let name = parse_symbol.parse_next(input)?;
    if opt('[').parse_next(input)?.is_some() {
        let args = parse_args(input, ']', depth)?;
        return Ok(Expr::call(name, args));
    }
    Ok(Expr::Symbol(name))
}
