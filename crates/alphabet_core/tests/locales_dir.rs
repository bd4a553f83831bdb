/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use alphabet_core::{AlphabetError, Config, LocaleDatabase, LocaleProvider, Session};

const LATIN: &str = r#"
locale: la
language: Latin
regions: [VA]
exemplars:
  standard: '[a-i k-t v x y z]'
"#;

const ROMAN: &str = r#"
locale: rom
language: Latin
exemplars:
  standard: '[a-d]'
"#;

#[test]
fn test_session_from_locales_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_locale(dir.path(), "la.yaml", LATIN);
    write_locale(dir.path(), "notes.txt", "ignored");

    let config = Config {
        default_language: "Latin".to_string(),
        locales_dir: Some(dir.path().to_path_buf()),
    };
    let mut session = Session::from_config(&config).unwrap();
    assert_eq!(session.language(), "Latin");

    let latin = letters(&mut session, "Alphabet[]");
    assert_eq!(latin.len(), 23);
    assert!(!latin.contains(&"j".to_string()));
    assert!(!latin.contains(&"u".to_string()));
    assert_eq!(latin, letters(&mut session, r#"Alphabet["la_VA"]"#));

    // The embedded database is not consulted.
    assert!(session.alphabet(Some("en")).is_none());
}

#[test]
fn test_display_name_collision_last_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    write_locale(dir.path(), "a-la.yaml", LATIN);
    write_locale(dir.path(), "b-rom.yaml", ROMAN);

    let db = LocaleDatabase::from_dir(dir.path()).unwrap();
    assert_eq!(db.available_locales().len(), 3);

    let mut session = Session::new(alphabet_core::Alphabets::new(std::sync::Arc::new(db)));
    assert_eq!(
        letters(&mut session, r#"Alphabet["Latin"]"#),
        strings(&["a", "b", "c", "d"])
    );
    assert_eq!(session.alphabets().index().get("Latin"), Some("rom"));
}

#[test]
fn test_empty_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LocaleDatabase::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, AlphabetError::EmptyLocaleDir(_)));
}

#[test]
fn test_broken_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    write_locale(dir.path(), "bad.yaml", "locale: x\nlanguage: X\n");
    match LocaleDatabase::from_dir(dir.path()) {
        Err(AlphabetError::Parse { path, .. }) => assert!(path.ends_with("bad.yaml")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_unreadable_dir_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = LocaleDatabase::from_dir(&missing).unwrap_err();
    assert!(matches!(err, AlphabetError::Io(_)));

    // A directory that merely looks like a locale file is not skipped.
    std::fs::create_dir(dir.path().join("sub.yaml")).unwrap();
    write_locale(dir.path(), "la.yaml", LATIN);
    let err = LocaleDatabase::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, AlphabetError::Io(_)));
}
