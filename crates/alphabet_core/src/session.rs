/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Evaluation session.
//!
//! A [`Session`] owns everything an evaluation touches: the symbol table
//! (where `$Language` lives), the alphabet service and the message log.
//! Builtins implemented here:
//!
//! | Input | Result |
//! |-------|--------|
//! | `Alphabet[]` | alphabet of the current `$Language` |
//! | `Alphabet["name"]` | alphabet of a language name or locale identifier |
//! | `Alphabet["name", "kind"]` | another exemplar set (`Index`, `Auxiliary`, ...) |
//! | `$Language = "German"` | set the default language (strings only) |
//! | `a == b` | structural equality of evaluated values |
//! | `Length[list]` | number of elements |

use crate::alphabet::{Alphabet, Alphabets};
use crate::config::{Config, DEFAULT_LANGUAGE};
use crate::error::Result;
use crate::exemplar::ExemplarKind;
use crate::expr::Expr;
use crate::locale::LocaleDatabase;
use crate::messages::Message;
use crate::parse::parse_input;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the default-language variable.
pub const LANGUAGE_SYMBOL: &str = "$Language";

/// Symbol table of own-values.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    own_values: HashMap<String, Expr>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_own_value(&self, name: &str) -> Option<&Expr> {
        self.own_values.get(name)
    }

    pub fn set_own_value(&mut self, name: impl Into<String>, value: Expr) {
        self.own_values.insert(name.into(), value);
    }

    pub fn clear_own_value(&mut self, name: &str) -> Option<Expr> {
        self.own_values.remove(name)
    }
}

/// Drop a context prefix: ``Pymathics`$Language`` names `$Language`.
fn strip_context(name: &str) -> &str {
    name.rsplit('`').next().unwrap_or(name)
}

/// An evaluation context.
#[derive(Debug, Clone)]
pub struct Session {
    definitions: Definitions,
    alphabets: Alphabets,
    messages: Vec<Message>,
}

impl Session {
    /// A session whose `$Language` starts as `"English"`.
    pub fn new(alphabets: Alphabets) -> Self {
        Self::with_default_language(alphabets, DEFAULT_LANGUAGE)
    }

    pub fn with_default_language(alphabets: Alphabets, language: impl Into<String>) -> Self {
        let mut definitions = Definitions::new();
        definitions.set_own_value(LANGUAGE_SYMBOL, Expr::String(language.into()));
        Self {
            definitions,
            alphabets,
            messages: Vec::new(),
        }
    }

    /// A session over the embedded locale database.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Alphabets::embedded()?))
    }

    /// A session set up from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = match &config.locales_dir {
            Some(dir) => LocaleDatabase::from_dir(dir)?,
            None => LocaleDatabase::embedded()?,
        };
        let alphabets = Alphabets::new(Arc::new(db));
        Ok(Self::with_default_language(
            alphabets,
            config.default_language.clone(),
        ))
    }

    pub fn alphabets(&self) -> &Alphabets {
        &self.alphabets
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Current value of `$Language`.
    pub fn language(&self) -> &str {
        self.definitions
            .get_own_value(LANGUAGE_SYMBOL)
            .and_then(Expr::as_str)
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Assign `$Language`.
    ///
    /// Strings are stored. Anything else leaves the value unchanged and emits
    /// `$Language::notstr`. The assigned value is returned either way.
    pub fn set_language(&mut self, value: Expr) -> Expr {
        if value.as_str().is_some() {
            self.definitions
                .set_own_value(LANGUAGE_SYMBOL, value.clone());
        } else {
            self.message(LANGUAGE_SYMBOL, "notstr", std::slice::from_ref(&value));
        }
        value
    }

    /// Alphabet for `name`, or for `$Language` when `name` is `None`.
    ///
    /// Emits `Alphabet::nalph` when nothing matches.
    pub fn alphabet(&mut self, name: Option<&str>) -> Option<Alphabet> {
        self.alphabet_kind(name, ExemplarKind::Standard)
    }

    pub fn alphabet_kind(&mut self, name: Option<&str>, kind: ExemplarKind) -> Option<Alphabet> {
        let name = name.unwrap_or(self.language()).to_string();
        let found = self.alphabets.resolve_kind(&name, kind);
        if found.is_none() {
            self.message("Alphabet", "nalph", &[Expr::String(name)]);
        }
        found
    }

    /// Record a diagnostic.
    pub fn message(&mut self, symbol: &str, tag: &str, args: &[Expr]) {
        let msg = Message::new(symbol, tag, args);
        warn!("{}", msg);
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Remove and return the messages recorded so far.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// Parse and evaluate one line of input.
    ///
    /// Syntax errors emit `Syntax::sntx` and give `$Failed`.
    pub fn evaluate_str(&mut self, input: &str) -> Expr {
        match parse_input(input) {
            Ok(expr) => {
                debug!("evaluating {}", expr.input_form());
                self.evaluate(expr)
            }
            Err(e) => {
                debug!("parse error: {}", e);
                self.message("Syntax", "sntx", &[Expr::string(input.trim())]);
                Expr::symbol("$Failed")
            }
        }
    }

    pub fn evaluate(&mut self, expr: Expr) -> Expr {
        match expr {
            Expr::Symbol(name) => {
                let name = strip_context(&name);
                match self.definitions.get_own_value(name) {
                    Some(value) => value.clone(),
                    None => Expr::symbol(name),
                }
            }
            Expr::List(items) => Expr::List(items.into_iter().map(|e| self.evaluate(e)).collect()),
            Expr::Normal { head, args } => self.evaluate_call(head, args),
            atom => atom,
        }
    }

    fn evaluate_call(&mut self, head: String, args: Vec<Expr>) -> Expr {
        match head.as_str() {
            "Set" => return self.evaluate_set(args),
            "CompoundExpression" => {
                let mut last = Expr::Null;
                for arg in args {
                    last = self.evaluate(arg);
                }
                return last;
            }
            _ => {}
        }

        let args: Vec<Expr> = args.into_iter().map(|e| self.evaluate(e)).collect();
        match head.as_str() {
            "Alphabet" => return self.eval_alphabet(args),
            "Equal" => return eval_equal(args),
            "Length" => {
                if let Some(n) = length_of(&args) {
                    return Expr::Integer(n);
                }
            }
            _ => {}
        }
        Expr::call(head, args)
    }

    fn evaluate_set(&mut self, mut args: Vec<Expr>) -> Expr {
        if args.len() != 2 {
            return Expr::call("Set", args);
        }
        let rhs = args.pop().map(|e| self.evaluate(e)).unwrap_or(Expr::Null);
        let lhs = args.pop().unwrap_or(Expr::Null);
        match lhs {
            Expr::Symbol(name) if strip_context(&name) == LANGUAGE_SYMBOL => {
                self.set_language(rhs)
            }
            Expr::Symbol(name) => {
                self.definitions
                    .set_own_value(strip_context(&name), rhs.clone());
                rhs
            }
            other => {
                self.message("Set", "setraw", &[other]);
                rhs
            }
        }
    }

    fn eval_alphabet(&mut self, args: Vec<Expr>) -> Expr {
        let request = match args.as_slice() {
            [] => Some((None, Ok(ExemplarKind::Standard))),
            [Expr::String(name)] => Some((Some(name.clone()), Ok(ExemplarKind::Standard))),
            [Expr::String(name), Expr::String(kind)] => Some((
                Some(name.clone()),
                kind.parse::<ExemplarKind>().map_err(|_| kind.clone()),
            )),
            _ => None,
        };
        let Some((name, kind)) = request else {
            return Expr::call("Alphabet", args);
        };
        let kind = match kind {
            Ok(kind) => kind,
            Err(unknown) => {
                self.message("Alphabet", "kind", &[Expr::String(unknown)]);
                return Expr::call("Alphabet", args);
            }
        };

        match self.alphabet_kind(name.as_deref(), kind) {
            Some(alphabet) => Expr::string_list(alphabet.letters),
            None => {
                let name = name.unwrap_or_else(|| self.language().to_string());
                let mut unevaluated = vec![Expr::String(name)];
                if kind != ExemplarKind::Standard {
                    unevaluated.push(Expr::string(kind.as_str()));
                }
                Expr::call("Alphabet", unevaluated)
            }
        }
    }
}

fn length_of(args: &[Expr]) -> Option<i64> {
    match args {
        [Expr::List(items)] => Some(items.len() as i64),
        [Expr::Normal { args: inner, .. }] => Some(inner.len() as i64),
        [_] => Some(0),
        _ => None,
    }
}

fn eval_equal(args: Vec<Expr>) -> Expr {
    if args.len() < 2 || !args.iter().all(Expr::is_literal) {
        return Expr::call("Equal", args);
    }
    Expr::boolean(args.windows(2).all(|pair| pair[0] == pair[1]))
}
