use super::{
    absorb_trailing_comma, find_closing_brace, is_locale_id, list_locales, locate, locate_locale,
    locate_section,
};
use crate::error::Error;

const TABLE: &str = r#"export const translations = {
  'en-US': {
    hero: {
      title: 'Fix your CV',
    },
    landing: {
      nav: {
        features: 'Features',
      },
      hero: {
        title: "Don't guess { anymore",
        note: 'it\'s here',
        code: `template ${x}`,
      },
    },
    onboarding: {
      steps: 'Steps',
    },
  },
  'es-ES': {
    landing: {
      nav: {
        features: 'Funciones',
      },
    },
    footer: {
      legal: 'Aviso legal',
    },
  },
};
"#;

const EN_LANDING: &str = r#"landing: {
      nav: {
        features: 'Features',
      },
      hero: {
        title: "Don't guess { anymore",
        note: 'it\'s here',
        code: `template ${x}`,
      },
    }"#;

#[test]
fn test_locale_id_shape() {
    assert!(is_locale_id("en-US"));
    assert!(is_locale_id("pt-BR"));
    assert!(!is_locale_id("en"));
    assert!(!is_locale_id("EN-us"));
    assert!(!is_locale_id("en_US"));
    assert!(!is_locale_id("en-USA"));
}

#[test]
fn test_list_locales_in_document_order() {
    assert_eq!(list_locales(TABLE).unwrap(), vec!["en-US", "es-ES"]);
}

#[test]
fn test_locale_block_ends_at_next_locale() {
    let block = locate_locale(TABLE, "en-US").unwrap();

    assert_eq!(&TABLE[block.start..=block.start], "{");
    assert!(TABLE[block.end..].starts_with("'es-ES'"));
}

#[test]
fn test_last_locale_block_ends_at_table_terminator() {
    let block = locate_locale(TABLE, "es-ES").unwrap();

    assert!(TABLE[block.end..].starts_with("};"));
}

#[test]
fn test_locale_block_runs_to_document_end_without_terminator() {
    let document = "'en-US': { landing: { a: 'x' } }";
    let block = locate_locale(document, "en-US").unwrap();

    assert_eq!(block.start, 9);
    assert_eq!(block.end, document.len());
}

#[test]
fn test_double_quoted_locale_key() {
    let document = r#"{ "fr-FR": { landing: { a: 'x' } } }"#;
    let block = locate_locale(document, "fr-FR").unwrap();

    assert_eq!(&document[block.start..=block.start], "{");
}

#[test]
fn test_missing_locale() {
    match locate_locale(TABLE, "de-DE") {
        Err(Error::LocaleNotFound { locale }) => assert_eq!(locale, "de-DE"),
        other => panic!("expected LocaleNotFound, got {other:?}"),
    }
}

#[test]
fn test_invalid_locale_identifier() {
    assert!(matches!(
        locate_locale(TABLE, "english"),
        Err(Error::InvalidLocale(ref id)) if id == "english"
    ));
}

#[test]
fn test_section_span_coordinates() {
    let (block, span) = locate(TABLE, "en-US", "landing").unwrap();

    assert_eq!(&TABLE[span.key_start..span.body_end], EN_LANDING);
    assert_eq!(&TABLE[span.indent_start..span.key_start], "    ");
    assert_eq!(&TABLE[span.open_brace..=span.open_brace], "{");
    assert_eq!(&TABLE[span.close_brace..span.body_end], "}");
    assert!(span.has_trailing_comma());
    assert_eq!(&TABLE[span.body_end..span.end], ",");
    assert!(block.contains(&span));
}

#[test]
fn test_braces_and_apostrophes_inside_strings_are_ignored() {
    // `"Don't guess { anymore"` holds both an apostrophe and an opening brace.
    let (_, span) = locate(TABLE, "en-US", "landing.hero").unwrap();

    assert!(TABLE[span.key_start..span.body_end].ends_with("code: `template ${x}`,\n      }"));
}

#[test]
fn test_first_occurrence_wins_for_plain_names() {
    let (_, span) = locate(TABLE, "en-US", "hero").unwrap();

    assert_eq!(
        &TABLE[span.key_start..span.body_end],
        "hero: {\n      title: 'Fix your CV',\n    }"
    );
}

#[test]
fn test_dotted_path_descends_into_parent() {
    let (block, span) = locate(TABLE, "en-US", "landing.hero").unwrap();

    assert!(TABLE[span.key_start..].starts_with("hero: {\n        title: \"Don't"));
    assert_eq!(span.path, "landing.hero");
    assert!(block.contains(&span));
}

#[test]
fn test_section_search_is_bounded_by_locale_block() {
    // `footer` only exists in es-ES, after the en-US block.
    match locate(TABLE, "en-US", "footer") {
        Err(Error::SectionNotFound { locale, section }) => {
            assert_eq!(locale, "en-US");
            assert_eq!(section, "footer");
        }
        other => panic!("expected SectionNotFound, got {other:?}"),
    }

    let (block, span) = locate(TABLE, "es-ES", "footer").unwrap();
    assert!(block.contains(&span));
}

#[test]
fn test_section_key_needs_leading_whitespace() {
    let document = "'en-US': { mylanding: { a: 'x' } }";

    assert!(matches!(
        locate(document, "en-US", "landing"),
        Err(Error::SectionNotFound { .. })
    ));
}

#[test]
fn test_empty_path_segment_is_not_found() {
    assert!(matches!(
        locate(TABLE, "en-US", "landing..hero"),
        Err(Error::SectionNotFound { .. })
    ));
    assert!(matches!(
        locate(TABLE, "en-US", ""),
        Err(Error::SectionNotFound { .. })
    ));
}

#[test]
fn test_unterminated_section() {
    let document = "'en-US': {\n  landing: {\n    a: 'x',\n";
    let block = locate_locale(document, "en-US").unwrap();

    match locate_section(document, &block, "landing") {
        Err(Error::UnterminatedSection { open_brace, .. }) => {
            assert_eq!(open_brace, document.find("landing: {").unwrap() + 9);
        }
        other => panic!("expected UnterminatedSection, got {other:?}"),
    }
}

#[test]
fn test_unbalanced_section_does_not_spill_into_next_locale() {
    let document = "'en-US': {\n  landing: {\n    a: 'x',\n  'fr-FR': {\n    b: 'y' } },\n};\n";

    assert!(matches!(
        locate(document, "en-US", "landing"),
        Err(Error::UnterminatedSection { .. })
    ));
}

#[test]
fn test_closing_brace_skips_brace_in_string() {
    let body = "{ a: 'use { here' }";
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(body.len() - 1));

    let body = r#"{ a: "use } here", b: 'x' }"#;
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(body.len() - 1));
}

#[test]
fn test_closing_brace_honours_escapes() {
    let body = r"{ a: 'it\'s { here' }";
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(body.len() - 1));

    // An escaped backslash does not escape the closing quote.
    let body = r"{ a: 'C:\\' }";
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(body.len() - 1));
}

#[test]
fn test_closing_brace_only_active_quote_closes() {
    let body = r#"{ a: "it's", b: 'say "hi" {', c: `x } y` }"#;
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(body.len() - 1));
}

#[test]
fn test_closing_brace_counts_nesting() {
    let body = "{ a: { b: { c: 'd' } } } tail }";
    assert_eq!(find_closing_brace(body, 0, body.len()), Some(23));
}

#[test]
fn test_closing_brace_respects_limit() {
    let body = "{ a: 'x' } }";
    assert_eq!(find_closing_brace(body, 0, 5), None);
    assert_eq!(find_closing_brace("{ a: { b: 'c' }", 0, 15), None);
}

#[test]
fn test_comma_absorbed_across_whitespace() {
    let document = "landing: { a: 'x' }\n    ,\n    other: {}";
    let after_brace = document.find('}').unwrap() + 1;

    let end = absorb_trailing_comma(document, after_brace, document.len());
    assert_eq!(&document[after_brace..end], "\n    ,");
}

#[test]
fn test_comma_absorbed_across_crlf() {
    let document = "a: {}\r\n\t,";
    assert_eq!(absorb_trailing_comma(document, 5, document.len()), document.len());
}

#[test]
fn test_no_comma_stops_after_brace() {
    let document = "landing: { a: 'x' }\n    other: { b: 'y' }";
    let after_brace = document.find('}').unwrap() + 1;

    assert_eq!(
        absorb_trailing_comma(document, after_brace, document.len()),
        after_brace
    );
}

#[test]
fn test_inline_key_indent_stops_at_previous_token() {
    let document = "'en-US': { landing: { a: 'x' }, other: { b: 'y' } }";
    let (_, span) = locate(document, "en-US", "other").unwrap();

    assert_eq!(&document[span.indent_start..span.key_start], " ");
    assert!(!span.has_trailing_comma());
    assert_eq!(&document[span.key_start..span.end], "other: { b: 'y' }");
}
