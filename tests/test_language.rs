use odata_intake::negotiation::language::{LanguageTag, extract_accept_languages};

fn tags(raw: Option<&str>) -> Vec<String> {
    extract_accept_languages(raw)
        .iter()
        .map(|tag| tag.to_string())
        .collect()
}

#[test]
fn test_absent_accept_language() {
    assert!(extract_accept_languages(None).is_empty());
    assert!(extract_accept_languages(Some("")).is_empty());
}

#[test]
fn test_languages_keep_header_order() {
    assert_eq!(tags(Some("en-US, fr;q=0.8, de")), ["en-US", "fr", "de"]);
}

#[test]
fn test_quality_does_not_reorder() {
    assert_eq!(tags(Some("fr;q=0.1,de;q=0.9,en")), ["fr", "de", "en"]);
}

#[test]
fn test_language_fields() {
    let languages = extract_accept_languages(Some("en-gb;q=0.7, *"));

    assert_eq!(languages[0].primary, "en");
    assert_eq!(languages[0].region.as_deref(), Some("GB"));
    assert_eq!(languages[0].quality.thousandths(), 700);

    assert!(languages[1].is_wildcard());
    assert_eq!(languages[1].region, None);
    assert_eq!(languages[1].quality.thousandths(), 1000);
}

#[test]
fn test_malformed_tokens_are_dropped() {
    assert_eq!(
        tags(Some("EN, en-, toolonglanguage, de;q=1.5, fr;q=0, it-IT, es")),
        ["it-IT", "es"]
    );
}

#[test]
fn test_single_whitespace_after_comma_only() {
    // Two spaces leave a leading blank on the token.
    assert_eq!(tags(Some("en,  fr, de")), ["en", "de"]);
}

#[test]
fn test_language_tag_constructors() {
    assert_eq!(LanguageTag::new("en").to_string(), "en");
    assert_eq!(LanguageTag::with_region("pt", "br").to_string(), "pt-BR");
}
