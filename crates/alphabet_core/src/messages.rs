/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! User-visible diagnostic messages.

use crate::expr::Expr;
use serde::Serialize;
use std::fmt;

/// A diagnostic emitted during evaluation, e.g. `Alphabet::nalph`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub symbol: String,
    pub tag: String,
    pub text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}: {}", self.symbol, self.tag, self.text)
    }
}

/// Message template for `symbol::tag`, if one is defined.
pub fn template(symbol: &str, tag: &str) -> Option<&'static str> {
    match (symbol, tag) {
        ("Alphabet", "nalph") => Some("The alphabet `1` is not known or not available."),
        ("Alphabet", "kind") => Some("`1` is not a known exemplar set kind."),
        ("$Language", "notstr") => {
            Some("`1` is not a string. Only strings can be set as the value of $Language.")
        }
        ("Set", "setraw") => Some("Cannot assign to raw object `1`."),
        ("Syntax", "sntx") => Some("Invalid syntax: `1`."),
        _ => None,
    }
}

/// Fill a template's `` `n` `` slots with the input form of `args`.
///
/// An empty slot (` `` `) takes the next unused argument.
pub fn format_template(template: &str, args: &[Expr]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_arg = 0;
    while let Some(start) = rest.find('`') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('`') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let slot = &after[..end];
        let index = if slot.is_empty() {
            next_arg += 1;
            Some(next_arg - 1)
        } else {
            slot.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
        };
        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.input_form()),
            None => {
                out.push('`');
                out.push_str(slot);
                out.push('`');
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

impl Message {
    /// Build the message for `symbol::tag`. Unknown tags render the
    /// arguments alone.
    pub fn new(symbol: &str, tag: &str, args: &[Expr]) -> Self {
        let text = match template(symbol, tag) {
            Some(t) => format_template(t, args),
            None => args
                .iter()
                .map(Expr::input_form)
                .collect::<Vec<_>>()
                .join(", "),
        };
        Self {
            symbol: symbol.to_string(),
            tag: tag.to_string(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nalph_message() {
        let msg = Message::new("Alphabet", "nalph", &[Expr::string("Elvish")]);
        assert_eq!(
            msg.to_string(),
            r#"Alphabet::nalph: The alphabet "Elvish" is not known or not available."#
        );
    }

    #[test]
    fn test_notstr_message() {
        let msg = Message::new("$Language", "notstr", &[Expr::Integer(42)]);
        assert_eq!(
            msg.text,
            "42 is not a string. Only strings can be set as the value of $Language."
        );
    }

    #[test]
    fn test_format_template_slots() {
        let args = [Expr::Integer(1), Expr::Integer(2)];
        assert_eq!(format_template("`2` then `1`", &args), "2 then 1");
        assert_eq!(format_template("`` and ``", &args), "1 and 2");
        assert_eq!(format_template("`3` missing", &args), "`3` missing");
        assert_eq!(format_template("no slots", &args), "no slots");
        assert_eq!(format_template("dangling `", &args), "dangling `");
    }
}
