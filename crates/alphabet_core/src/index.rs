/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Display-name → locale-identifier index.

use crate::locale::LocaleProvider;
use indexmap::IndexMap;
use tracing::debug;

/// Maps a language's display name (e.g. "Spanish") to a locale identifier.
///
/// Built once from a provider and never mutated. Several locales usually
/// share a display name ("English" for `en`, `en_GB`, `en_NZ`, ...); the
/// locale enumerated last wins.
#[derive(Debug, Clone, Default)]
pub struct LanguageIndex {
    entries: IndexMap<String, String>,
}

impl LanguageIndex {
    pub fn build(provider: &dyn LocaleProvider) -> Self {
        let mut entries = IndexMap::new();
        for (id, record) in provider.available_locales() {
            let name = provider.display_language(record);
            if let Some(previous) = entries.insert(name.to_string(), id.clone()) {
                debug!("display name {:?}: {} replaces {}", name, id, previous);
            }
        }
        debug!("language index built with {} names", entries.len());
        Self { entries }
    }

    /// The identifier for a display name, if indexed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Resolve a language name or identifier to a candidate identifier.
    ///
    /// Names found in the index map to their identifier; anything else is
    /// returned unchanged as a candidate identifier.
    pub fn resolve<'a>(&'a self, input: &'a str) -> &'a str {
        self.get(input).unwrap_or(input)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
