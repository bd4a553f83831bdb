/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Human-language alphabets and a settable default language.
//!
//! This crate answers "which letters does this language use?" from a
//! CLDR-derived locale database, and exposes the answer through a small
//! evaluator with two user-facing forms: `Alphabet[...]` and `$Language`.
//!
//! # Example
//!
//! ```rust
//! use alphabet_core::{Expr, Session};
//!
//! let mut session = Session::embedded().unwrap();
//!
//! // By locale identifier or by language name.
//! let es = session.alphabet(Some("es")).unwrap();
//! assert_eq!(es.letters.last().map(String::as_str), Some("ü"));
//!
//! // With no argument, the current $Language is used.
//! session.evaluate_str(r#"$Language = "German""#);
//! assert_eq!(
//!     session.evaluate_str("Alphabet[]"),
//!     session.evaluate_str(r#"Alphabet["German"]"#),
//! );
//!
//! // Only strings can be assigned.
//! assert_eq!(session.evaluate_str("$Language = 1"), Expr::Integer(1));
//! assert_eq!(session.language(), "German");
//! ```

pub mod alphabet;
pub mod config;
pub mod embedded;
pub mod error;
pub mod exemplar;
pub mod expr;
pub mod index;
pub mod locale;
pub mod messages;
pub mod parse;
pub mod session;

pub use alphabet::{Alphabet, Alphabets};
pub use config::Config;
pub use error::{AlphabetError, Result};
pub use exemplar::{ExemplarKind, ExemplarSet};
pub use expr::Expr;
pub use index::LanguageIndex;
pub use locale::{LocaleDatabase, LocaleProvider, LocaleRecord};
pub use messages::Message;
pub use session::{Definitions, Session, LANGUAGE_SYMBOL};
