/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use alphabet_core::{Expr, Session};
use std::path::Path;

// --- Helper Functions ---

/// A session over the embedded locale database.
pub fn embedded_session() -> Session {
    Session::embedded().expect("embedded locales load")
}

/// Evaluate `input` and return the result's letters.
pub fn letters(session: &mut Session, input: &str) -> Vec<String> {
    match session.evaluate_str(input) {
        Expr::List(items) => items
            .into_iter()
            .map(|item| match item {
                Expr::String(s) => s,
                other => panic!("non-string element {other:?}"),
            })
            .collect(),
        other => panic!("{input} did not give a list: {}", other.input_form()),
    }
}

/// Write a locale YAML file into `dir`.
pub fn write_locale(dir: &Path, file: &str, yaml: &str) {
    std::fs::write(dir.join(file), yaml).expect("write locale file");
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
