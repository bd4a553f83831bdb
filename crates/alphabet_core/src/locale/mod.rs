/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Locale database.
//!
//! A [`LocaleProvider`] enumerates the available locales, names their
//! language, and answers exemplar-set queries. [`LocaleDatabase`] is the
//! provider backed by CLDR-derived YAML files, either embedded in the binary
//! or read from a directory.

pub mod raw;

use crate::embedded;
use crate::error::{AlphabetError, Result};
use crate::exemplar::{ExemplarKind, ExemplarSet};
pub use raw::{RawExemplars, RawLocale};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// One available locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRecord {
    id: String,
    language: String,
    parent: Option<String>,
    exemplars: HashMap<ExemplarKind, ExemplarSet>,
}

impl LocaleRecord {
    pub fn new(id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            parent: None,
            exemplars: HashMap::new(),
        }
    }

    /// Set the locale this one inherits exemplar data from.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_exemplars(mut self, kind: ExemplarKind, set: ExemplarSet) -> Self {
        self.exemplars.insert(kind, set);
        self
    }

    /// The locale identifier (e.g., "en_NZ").
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display language, in English.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Exemplar data held by this record itself, without inheritance.
    pub fn own_exemplars(&self, kind: ExemplarKind) -> Option<&ExemplarSet> {
        self.exemplars.get(&kind)
    }
}

/// Source of locale names and exemplar data.
pub trait LocaleProvider: Send + Sync {
    /// Every available locale, keyed by identifier.
    fn available_locales(&self) -> &IndexMap<String, LocaleRecord>;

    /// The display language of a locale.
    fn display_language<'a>(&self, record: &'a LocaleRecord) -> &'a str {
        record.language()
    }

    fn is_available(&self, id: &str) -> bool {
        self.available_locales().contains_key(id)
    }

    /// The exemplar set of kind `kind` for locale `id`.
    ///
    /// A locale without its own data for `kind` inherits from its parent.
    /// Returns `None` when `id` is unknown or no locale in the chain has data.
    fn exemplar_characters(&self, id: &str, kind: ExemplarKind) -> Option<ExemplarSet> {
        let locales = self.available_locales();
        let mut current = locales.get(id);
        // Bounded by the number of locales so a parent cycle cannot spin forever.
        for _ in 0..=locales.len() {
            let record = current?;
            if let Some(set) = record.own_exemplars(kind) {
                return Some(set.clone());
            }
            current = record.parent().and_then(|parent| locales.get(parent));
        }
        None
    }
}

/// Locale provider backed by YAML locale files.
#[derive(Debug, Clone, Default)]
pub struct LocaleDatabase {
    locales: IndexMap<String, LocaleRecord>,
}

impl LocaleDatabase {
    /// An empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the locale files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut db = Self::new();
        for id in embedded::EMBEDDED_LOCALE_IDS {
            if let Some(source) = embedded::get_locale_source(id) {
                db.add_yaml_str(source, &format!("embedded:{}.yaml", id))?;
            }
        }
        info!("loaded {} embedded locales", db.locales.len());
        Ok(db)
    }

    /// Load every `*.yaml` file in a directory, in file-name order.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == "yaml" || e == "yml");
            if is_yaml {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(AlphabetError::EmptyLocaleDir(dir.to_path_buf()));
        }

        let mut db = Self::new();
        for path in &paths {
            let yaml = std::fs::read_to_string(path)?;
            db.add_yaml_str(&yaml, &path.display().to_string())?;
        }
        info!("loaded {} locales from {}", db.locales.len(), dir.display());
        Ok(db)
    }

    /// Parse one locale file and add its base locale and regional variants.
    ///
    /// `origin` names the source in error messages.
    pub fn add_yaml_str(&mut self, yaml: &str, origin: &str) -> Result<()> {
        let raw: RawLocale = serde_yaml::from_str(yaml).map_err(|e| AlphabetError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        self.add_raw(raw)
    }

    /// Add a base locale and its regional variants.
    pub fn add_raw(&mut self, raw: RawLocale) -> Result<()> {
        let mut base = LocaleRecord::new(&raw.locale, &raw.language)
            .with_exemplars(ExemplarKind::Standard, ExemplarSet::parse(&raw.exemplars.standard)?);
        let optional = [
            (ExemplarKind::Auxiliary, &raw.exemplars.auxiliary),
            (ExemplarKind::Index, &raw.exemplars.index),
            (ExemplarKind::Punctuation, &raw.exemplars.punctuation),
        ];
        for (kind, source) in optional {
            if let Some(source) = source {
                base = base.with_exemplars(kind, ExemplarSet::parse(source)?);
            }
        }
        self.insert(base)?;

        for region in &raw.regions {
            let id = format!("{}_{}", raw.locale, region);
            self.insert(LocaleRecord::new(id, &raw.language).with_parent(&raw.locale))?;
        }
        debug!(
            "added locale {} ({}) with {} regions",
            raw.locale,
            raw.language,
            raw.regions.len()
        );
        Ok(())
    }

    /// Add a single record. Identifiers must be unique.
    pub fn insert(&mut self, record: LocaleRecord) -> Result<()> {
        if self.locales.contains_key(record.id()) {
            return Err(AlphabetError::DuplicateLocale(record.id().to_string()));
        }
        self.locales.insert(record.id().to_string(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl LocaleProvider for LocaleDatabase {
    fn available_locales(&self) -> &IndexMap<String, LocaleRecord> {
        &self.locales
    }
}
