/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Alphabet resolution.
//!
//! An alphabet request names either a language ("Spanish") or a locale
//! identifier ("es_MX"). Resolution is two steps: look the input up in the
//! [`LanguageIndex`], falling back to the input itself as an identifier; then
//! ask the provider for that locale's exemplar set.

use crate::error::Result;
use crate::exemplar::ExemplarKind;
use crate::index::LanguageIndex;
use crate::locale::{LocaleDatabase, LocaleProvider};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The letters of a locale, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    pub locale: String,
    pub letters: Vec<String>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Alphabet lookup over a locale provider.
#[derive(Clone)]
pub struct Alphabets {
    provider: Arc<dyn LocaleProvider>,
    index: LanguageIndex,
}

impl fmt::Debug for Alphabets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabets")
            .field("locales", &self.provider.available_locales().len())
            .field("index", &self.index)
            .finish()
    }
}

impl Alphabets {
    /// Build the language index for `provider`.
    pub fn new(provider: Arc<dyn LocaleProvider>) -> Self {
        let index = LanguageIndex::build(provider.as_ref());
        Self { provider, index }
    }

    /// Lookup over the embedded locale database.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Arc::new(LocaleDatabase::embedded()?)))
    }

    pub fn provider(&self) -> &dyn LocaleProvider {
        self.provider.as_ref()
    }

    pub fn index(&self) -> &LanguageIndex {
        &self.index
    }

    /// The lowercase alphabet for a language name or locale identifier.
    ///
    /// Returns `None` when the input names no available locale.
    pub fn resolve(&self, input: &str) -> Option<Alphabet> {
        self.resolve_kind(input, ExemplarKind::Standard)
    }

    /// Like [`resolve`](Self::resolve) for any exemplar set kind.
    ///
    /// An available locale with no data for `kind` gives an empty alphabet.
    pub fn resolve_kind(&self, input: &str, kind: ExemplarKind) -> Option<Alphabet> {
        let id = self.index.resolve(input);
        if !self.provider.is_available(id) {
            return None;
        }
        let letters = self
            .provider
            .exemplar_characters(id, kind)
            .map(|set| set.iter().collect())
            .unwrap_or_default();
        Some(Alphabet {
            locale: id.to_string(),
            letters,
        })
    }
}
