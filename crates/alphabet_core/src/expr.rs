/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Expression values returned by the evaluator.

use std::fmt;

/// A symbolic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The empty result of a statement ending in `;` or a failed lookup.
    Null,
    Integer(i64),
    Real(f64),
    String(String),
    Symbol(String),
    List(Vec<Expr>),
    /// `head[args...]` for any head other than `List`.
    Normal { head: String, args: Vec<Expr> },
}

impl Expr {
    pub fn string(s: impl Into<String>) -> Self {
        Expr::String(s.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn call(head: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Normal {
            head: head.into(),
            args,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Expr::symbol(if value { "True" } else { "False" })
    }

    /// A list of strings.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expr::List(items.into_iter().map(|s| Expr::String(s.into())).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expr::Null)
    }

    /// Atoms and lists of atoms; no symbols or unevaluated calls.
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::Integer(_) | Expr::Real(_) | Expr::String(_) => true,
            Expr::List(items) => items.iter().all(Expr::is_literal),
            Expr::Symbol(name) => name == "True" || name == "False",
            Expr::Null | Expr::Normal { .. } => false,
        }
    }

    /// The expression as it would be typed, with strings quoted.
    pub fn input_form(&self) -> String {
        InputForm(self).to_string()
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::String(s.to_string())
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Integer(n)
    }
}

/// Output form: strings are shown without quotes.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, false)
    }
}

struct InputForm<'a>(&'a Expr);

impl fmt::Display for InputForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.0, true)
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, quoted: bool) -> fmt::Result {
    match expr {
        Expr::Null => write!(f, "Null"),
        Expr::Integer(n) => write!(f, "{}", n),
        Expr::Real(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{}.", x),
        Expr::Real(x) => write!(f, "{}", x),
        Expr::String(s) if quoted => write!(f, "{:?}", s),
        Expr::String(s) => write!(f, "{}", s),
        Expr::Symbol(name) => write!(f, "{}", name),
        Expr::List(items) => {
            write!(f, "{{")?;
            write_args(f, items, quoted)?;
            write!(f, "}}")
        }
        Expr::Normal { head, args } => {
            write!(f, "{}[", head)?;
            write_args(f, args, quoted)?;
            write!(f, "]")
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expr], quoted: bool) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_expr(f, arg, quoted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_form() {
        let expr = Expr::string_list(["a", "ä", "b"]);
        assert_eq!(expr.to_string(), "{a, ä, b}");
        assert_eq!(
            Expr::call("Alphabet", vec![Expr::string("xx")]).to_string(),
            "Alphabet[xx]"
        );
        assert_eq!(Expr::Real(2.0).to_string(), "2.");
        assert_eq!(Expr::Real(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_input_form_quotes_strings() {
        let expr = Expr::call("Alphabet", vec![Expr::string("say \"hi\"")]);
        assert_eq!(expr.input_form(), r#"Alphabet["say \"hi\""]"#);
        assert_eq!(Expr::Integer(42).input_form(), "42");
    }

    #[test]
    fn test_is_literal() {
        assert!(Expr::string_list(["a"]).is_literal());
        assert!(Expr::boolean(true).is_literal());
        assert!(!Expr::symbol("x").is_literal());
        assert!(!Expr::call("f", vec![]).is_literal());
    }
}
