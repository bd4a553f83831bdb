/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use alphabet_core::{ExemplarKind, Expr, LocaleProvider};

#[test]
fn test_every_available_locale_has_an_alphabet() {
    let mut session = embedded_session();
    let ids: Vec<String> = session
        .alphabets()
        .provider()
        .available_locales()
        .keys()
        .cloned()
        .collect();
    assert!(ids.len() > 100);

    for id in ids {
        let alphabet = session.alphabet(Some(id.as_str()));
        assert!(
            alphabet.as_ref().is_some_and(|a| !a.is_empty()),
            "no alphabet for {id}"
        );
    }
    assert!(session.messages().is_empty());
}

#[test]
fn test_default_language_is_english() {
    let mut session = embedded_session();
    assert_eq!(session.language(), "English");
    let default = letters(&mut session, "Alphabet[]");
    assert_eq!(default, letters(&mut session, r#"Alphabet["English"]"#));
    assert_eq!(
        default,
        strings(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z"
        ])
    );
}

#[test]
fn test_spanish_by_identifier() {
    let mut session = embedded_session();
    assert_eq!(
        letters(&mut session, r#"Alphabet["es"]"#),
        strings(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
            "r", "s", "t", "u", "v", "w", "x", "y", "z", "á", "é", "í", "ñ", "ó", "ú", "ü"
        ])
    );
    assert_eq!(
        letters(&mut session, r#"Alphabet["Spanish"]"#),
        letters(&mut session, r#"Alphabet["es"]"#)
    );
}

#[test]
fn test_ukrainian_by_name() {
    let mut session = embedded_session();
    let ukrainian = letters(&mut session, r#"Alphabet["Ukrainian"]"#);
    assert_eq!(ukrainian, letters(&mut session, r#"Alphabet["uk"]"#));
    assert_eq!(ukrainian.len(), 34);
    assert_eq!(&ukrainian[..3], &strings(&["ʼ", "а", "б"])[..]);
    assert_eq!(ukrainian.last().map(String::as_str), Some("ґ"));
}

#[test]
fn test_regional_variant_matches_base() {
    let mut session = embedded_session();
    assert_eq!(
        session.evaluate_str(r#"Alphabet["en_NZ"] == Alphabet["en"]"#),
        Expr::boolean(true)
    );
    assert_eq!(
        session.evaluate_str(r#"Alphabet["es_419"] == Alphabet["es"]"#),
        Expr::boolean(true)
    );
}

#[test]
fn test_unknown_inputs_emit_nalph() {
    let mut session = embedded_session();
    for input in ["", "Elvish", "english", "en-NZ", "xx_YY"] {
        assert!(session.alphabet(Some(input)).is_none(), "{input:?} resolved");
        let messages = session.take_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].symbol, "Alphabet");
        assert_eq!(messages[0].tag, "nalph");
        assert!(messages[0].text.contains(&format!("{input:?}")));
    }
}

#[test]
fn test_empty_string_evaluates_unevaluated() {
    let mut session = embedded_session();
    assert_eq!(
        session.evaluate_str(r#"Alphabet[""]"#),
        Expr::call("Alphabet", vec![Expr::string("")])
    );
    assert_eq!(
        session.take_messages()[0].to_string(),
        r#"Alphabet::nalph: The alphabet "" is not known or not available."#
    );
}

#[test]
fn test_language_drives_no_argument_form() {
    let mut session = embedded_session();
    session.evaluate_str(r#"old = $Language"#);
    session.evaluate_str(r#"$Language = "German""#);
    assert_eq!(
        letters(&mut session, "Alphabet[]"),
        letters(&mut session, r#"Alphabet["German"]"#)
    );
    assert!(letters(&mut session, "Alphabet[]").contains(&"ß".to_string()));

    session.evaluate_str("$Language = old");
    assert_eq!(session.language(), "English");
}

#[test]
fn test_non_string_language_is_rejected() {
    let mut session = embedded_session();
    session.evaluate_str(r#"$Language = "French""#);
    for input in ["$Language = 42", "$Language = {1, 2}", "$Language = German"] {
        let before = session.language().to_string();
        session.evaluate_str(input);
        assert_eq!(session.language(), before);
        let messages = session.take_messages();
        assert_eq!(messages.len(), 1, "{input}");
        assert_eq!(messages[0].tag, "notstr");
    }
    assert_eq!(session.language(), "French");
}

#[test]
fn test_unresolvable_language_setting() {
    let mut session = embedded_session();
    session.evaluate_str(r#"$Language = "Klingon""#);
    assert!(session.messages().is_empty());
    assert_eq!(
        session.evaluate_str("Alphabet[]"),
        Expr::call("Alphabet", vec![Expr::string("Klingon")])
    );
    assert_eq!(session.take_messages()[0].tag, "nalph");
}

#[test]
fn test_other_exemplar_kinds() {
    let mut session = embedded_session();
    let index = letters(&mut session, r#"Alphabet["German", "Index"]"#);
    assert_eq!(index.first().map(String::as_str), Some("A"));
    assert_eq!(index.len(), 26);

    let punctuation = session
        .alphabets()
        .resolve_kind("en_GB", ExemplarKind::Punctuation)
        .unwrap();
    assert!(punctuation.letters.contains(&"§".to_string()));
    assert!(punctuation.letters.contains(&"'".to_string()));

    // Available locale without data for the kind: empty, not unknown.
    assert_eq!(
        session.evaluate_str(r#"Alphabet["is", "Punctuation"]"#),
        Expr::List(vec![])
    );
    assert!(session.messages().is_empty());
}

#[test]
fn test_multi_character_exemplars_follow_letters() {
    let mut session = embedded_session();
    let czech = letters(&mut session, r#"Alphabet["Czech"]"#);
    assert_eq!(czech.last().map(String::as_str), Some("ch"));
    assert!(czech[..czech.len() - 1].iter().all(|l| l.chars().count() == 1));
}
