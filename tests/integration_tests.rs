use bibentry::{parser, Error, Record};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_realistic_entry() {
    let raw = r#"@article{smith2024learning,
    author = {Smith, John and Doe, Jane and Johnson, Robert},
    title = {Deep Learning for Natural Language Processing: A Comprehensive Survey},
    journal = {Journal of Machine Learning Research},
    volume = {25},
    number = {3},
    pages = {123--187},
    year = {2024},
    publisher = {MIT Press}
}"#;

    let parsed = bibentry::parse(raw).unwrap();
    assert!(parsed.issues.is_empty());

    let record = &parsed.record;
    assert_eq!(record.entry_type(), "article");
    assert_eq!(record.key(), "smith2024learning");
    assert_eq!(record.fields().len(), 8);
    assert_eq!(
        record.get("author"),
        Some("Smith, John and Doe, Jane and Johnson, Robert")
    );
    assert_eq!(record.get("pages"), Some("123--187"));
    assert_eq!(record.get("publisher"), Some("MIT Press"));
    // Field lookup is case-insensitive.
    assert_eq!(record.get("YEAR"), Some("2024"));
}

#[test]
fn test_comments_and_escaped_percent() {
    let raw = "% This is a comment\n@article{id1234, % yet another comment!\ntitle={Drugs \\% Comments}, % remove this\nauthor={Jurczyk, Thomas},\ndate={20.12.2023}\n}";

    let parsed = bibentry::parse(raw).unwrap();
    assert!(parsed.issues.is_empty());
    assert_eq!(parsed.record.key(), "id1234");
    assert_eq!(parsed.record.get("title"), Some("Drugs \\% Comments"));
    assert_eq!(parsed.record.get("date"), Some("20.12.2023"));
}

#[test]
fn test_inner_braces_preserved_verbatim() {
    let raw = r#"@book{schmidt2024,author = {Schmidt, Anna and Müller, Bernd and {O'Connor}, Claire and García, Diego},language = "Deutsch"}"#;

    let parsed = bibentry::parse(raw).unwrap();
    assert_eq!(
        parsed.record.get("author"),
        Some("Schmidt, Anna and Müller, Bernd and {O'Connor}, Claire and García, Diego")
    );
    assert_eq!(parsed.record.get("language"), Some("Deutsch"));
}

#[test]
fn test_key_position_independent() {
    let first = "@book{muster2024, author = {Max Mustermann}, title = {Einführung}}";
    let middle = "@book{author = {Max Mustermann}, muster2024, title = {Einführung}}";
    let last = "@book{author = {Max Mustermann}, title = {Einführung}, muster2024}";

    for raw in [first, middle, last] {
        let parsed = bibentry::parse(raw).unwrap();
        assert_eq!(parsed.record.key(), "muster2024", "input: {raw}");
    }

    // Only in first position does the key stay out of the field spans; in the
    // other positions the preceding field's value fails softly while the key
    // is still recovered.
    let parsed = bibentry::parse(first).unwrap();
    assert!(parsed.issues.is_empty());
    assert_eq!(parsed.record.get("author"), Some("Max Mustermann"));

    let parsed = bibentry::parse(middle).unwrap();
    assert_eq!(parsed.record.key(), "muster2024");
    assert!(matches!(parsed.issues[0], Error::InvalidFieldDelimiter(_)));
}

#[test]
fn test_component_functions_compose() {
    let raw = "  @article{id1234,\n\tauthor={Jurczyk, Thomas},\n\tdate={20.12.2023}\n\t}";
    let normalized = parser::normalize(raw);

    assert_eq!(
        normalized,
        "@article{id1234,author={Jurczyk, Thomas},date={20.12.2023}}"
    );
    assert_eq!(parser::parse_entry_type(&normalized).unwrap(), "article");
    assert_eq!(parser::parse_key(&normalized).unwrap(), "id1234");

    let fields = parser::parse_fields(&normalized).unwrap();
    assert_eq!(fields["author"], "Jurczyk, Thomas");
    assert_eq!(fields["date"], "20.12.2023");
}

#[test]
fn test_hard_and_soft_failures() {
    // No @ marker: fatal, no record.
    assert!(matches!(
        bibentry::parse("Hey, this is absolutely no valid entry, just text!"),
        Err(Error::MalformedHeader(_))
    ));

    // Bad field wrapping: soft, record survives with the rest.
    let parsed = bibentry::parse("@misc{k2024, title = {T}, year = 2024}").unwrap();
    assert_eq!(parsed.record.entry_type(), "misc");
    assert_eq!(parsed.record.key(), "k2024");
    assert!(matches!(parsed.issues[0], Error::InvalidFieldDelimiter(_)));

    // Strict callers can reject instead.
    assert!(Record::parser()
        .strict(true)
        .parse("@misc{k2024, title = {T}, year = 2024}")
        .is_err());
}

#[test]
fn test_records_are_independent() {
    // Records own their strings and can outlive the raw input.
    let record = {
        let raw = String::from("@article{a1, title = {Borrow check}}");
        bibentry::parse(&raw).unwrap().record
    };
    assert_eq!(record.key(), "a1");
    assert_eq!(record.get("title"), Some("Borrow check"));
}

#[cfg(feature = "serde")]
#[test]
fn test_record_serializes() {
    let parsed = bibentry::parse("@article{a1, title = {T}}").unwrap();
    let json = serde_json::to_value(&parsed.record).unwrap();

    assert_eq!(json["entry_type"], "article");
    assert_eq!(json["key"], "a1");
    assert_eq!(json["fields"]["title"], "T");
}
