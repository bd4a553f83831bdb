/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

/// Raw locale format for YAML parsing.
/// One file describes a base language and the regions it is spoken in.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RawLocale {
    /// The base locale identifier (e.g., "en", "es").
    pub locale: String,
    /// Display name of the language, in English.
    pub language: String,
    /// Region codes with their own identifiers (e.g., "NZ" for "en_NZ").
    #[serde(default)]
    pub regions: Vec<String>,
    /// Exemplar sets in CLDR Unicode-set notation.
    pub exemplars: RawExemplars,
}

/// Raw exemplar strings keyed by set kind.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawExemplars {
    pub standard: String,
    #[serde(default)]
    pub auxiliary: Option<String>,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub punctuation: Option<String>,
}
