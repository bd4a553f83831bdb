/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Embedded locale YAML files.
//!
//! These are baked into the binary at compile time via `include_str!`,
//! providing the default locale database when no `locales_dir` is configured.

/// Raw YAML source for an embedded locale by base identifier.
///
/// Returns `None` for locales not bundled with the binary.
pub fn get_locale_source(id: &str) -> Option<&'static str> {
    match id {
        "ar" => Some(include_str!("../../../locales/ar.yaml")),
        "bg" => Some(include_str!("../../../locales/bg.yaml")),
        "ca" => Some(include_str!("../../../locales/ca.yaml")),
        "cs" => Some(include_str!("../../../locales/cs.yaml")),
        "da" => Some(include_str!("../../../locales/da.yaml")),
        "de" => Some(include_str!("../../../locales/de.yaml")),
        "el" => Some(include_str!("../../../locales/el.yaml")),
        "en" => Some(include_str!("../../../locales/en.yaml")),
        "es" => Some(include_str!("../../../locales/es.yaml")),
        "et" => Some(include_str!("../../../locales/et.yaml")),
        "fi" => Some(include_str!("../../../locales/fi.yaml")),
        "fr" => Some(include_str!("../../../locales/fr.yaml")),
        "he" => Some(include_str!("../../../locales/he.yaml")),
        "hr" => Some(include_str!("../../../locales/hr.yaml")),
        "hu" => Some(include_str!("../../../locales/hu.yaml")),
        "id" => Some(include_str!("../../../locales/id.yaml")),
        "is" => Some(include_str!("../../../locales/is.yaml")),
        "it" => Some(include_str!("../../../locales/it.yaml")),
        "ka" => Some(include_str!("../../../locales/ka.yaml")),
        "lt" => Some(include_str!("../../../locales/lt.yaml")),
        "lv" => Some(include_str!("../../../locales/lv.yaml")),
        "nb" => Some(include_str!("../../../locales/nb.yaml")),
        "nl" => Some(include_str!("../../../locales/nl.yaml")),
        "nn" => Some(include_str!("../../../locales/nn.yaml")),
        "pl" => Some(include_str!("../../../locales/pl.yaml")),
        "pt" => Some(include_str!("../../../locales/pt.yaml")),
        "ro" => Some(include_str!("../../../locales/ro.yaml")),
        "ru" => Some(include_str!("../../../locales/ru.yaml")),
        "sk" => Some(include_str!("../../../locales/sk.yaml")),
        "sr" => Some(include_str!("../../../locales/sr.yaml")),
        "sv" => Some(include_str!("../../../locales/sv.yaml")),
        "sw" => Some(include_str!("../../../locales/sw.yaml")),
        "tr" => Some(include_str!("../../../locales/tr.yaml")),
        "uk" => Some(include_str!("../../../locales/uk.yaml")),
        _ => None,
    }
}

/// All embedded base locale identifiers.
pub const EMBEDDED_LOCALE_IDS: &[&str] = &[
    "ar", "bg", "ca", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "he", "hr", "hu", "id",
    "is", "it", "ka", "lt", "lv", "nb", "nl", "nn", "pl", "pt", "ro", "ru", "sk", "sr", "sv", "sw",
    "tr", "uk",
];
