/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading locale data or configuration.
///
/// Lookup failures are not errors: an unknown alphabet is reported through
/// the session's message log instead.
#[derive(Debug, Error)]
pub enum AlphabetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid exemplar set {input:?}: {message}")]
    ExemplarSyntax { input: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("locale {0} is defined more than once")]
    DuplicateLocale(String),

    #[error("no locale files found in {}", .0.display())]
    EmptyLocaleDir(PathBuf),
}

impl From<toml::de::Error> for AlphabetError {
    fn from(e: toml::de::Error) -> Self {
        AlphabetError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AlphabetError>;
