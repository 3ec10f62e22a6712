use std::fmt::Write as _;

use ini_sections::{parse, parse_with_options, Document, Entry, ParseOptions, Section};
use rstest::rstest;
use serde_json::{json, Value};

fn parse_value(input: &str, array_sections: &[&str]) -> Value {
    let options = ParseOptions::new().with_array_sections(array_sections.iter().copied());
    parse_with_options(input, &options).to_value()
}

/// Writes a document back as INI text, one header per single section.
fn render(document: &Document) -> String {
    let mut out = String::new();
    for (name, section) in document {
        let entry = section.as_single().expect("render handles single sections");
        if !name.is_empty() {
            let _ = writeln!(out, "[{name}]");
        }
        for (key, value) in entry {
            let _ = writeln!(out, "{key} = {value}");
        }
    }
    out
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("# only a comment")]
#[case("#a\n   \n#b\r\n\t")]
fn blank_and_comment_input_is_empty(#[case] input: &str) {
    assert!(parse(input).is_empty());
}

#[rstest]
#[case("[a]\nx=1\ny=2", &[], json!({"a": {"x": "1", "y": "2"}}))]
#[case("[a]\nx=1\n[a]\ny=2", &[], json!({"a": {"x": "1", "y": "2"}}))]
#[case("[a]\nx=1\n[a]\ny=2", &["a"], json!({"a": [{"x": "1"}, {"y": "2"}]}))]
#[case("k=v1=v2", &[], json!({"": {"k": "v1=v2"}}))]
#[case("onlykey", &[], json!({"": {"onlykey": ""}}))]
fn documented_examples(
    #[case] input: &str,
    #[case] array_sections: &[&str],
    #[case] expected: Value,
) {
    assert_eq!(parse_value(input, array_sections), expected);
}

#[rstest]
#[case("k=v")]
#[case("k = v")]
#[case("  k\t=\tv  ")]
fn whitespace_around_equals_is_insignificant(#[case] line: &str) {
    let doc = parse(line);
    assert_eq!(doc.value("", "k"), Some("v"));
}

#[test]
fn bare_key_value_is_empty_string_not_absent() {
    let doc = parse("[a]\nonlykey");
    let entry = doc.entry("a").expect("section a");
    assert!(entry.contains_key("onlykey"));
    assert_eq!(entry.get("onlykey"), Some(""));
    assert_eq!(doc.to_value()["a"]["onlykey"], Value::String(String::new()));
}

#[test]
fn section_order_is_first_seen() {
    let doc = parse("[b]\nk=1\n[a]\nk=2\n[b]\nj=3");
    let names: Vec<&str> = doc.section_names().collect();
    assert_eq!(names, ["b", "a"]);
    let keys: Vec<&str> = doc
        .entry("b")
        .expect("section b")
        .iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, ["k", "j"]);
}

#[test]
fn array_sections_use_the_sequence_variant() {
    let options = ParseOptions::new().with_array_section("peer");
    let doc = parse_with_options("[peer]\nip=a\n[peer]\nip=b", &options);
    let section = doc.get("peer").expect("peer section");
    assert!(section.is_sequence());
    let ips: Vec<&str> = section
        .entries()
        .iter()
        .filter_map(|entry| entry.get("ip"))
        .collect();
    assert_eq!(ips, ["a", "b"]);
    assert_eq!(doc.value("peer", "ip"), Some("b"));
}

#[test]
fn first_array_header_after_ordinary_section_opens_no_element() {
    let options = ParseOptions::new().with_array_section("peer");
    let doc = parse_with_options("[main]\nk=v\n[peer]\n[peer]\nip=a", &options);
    assert_eq!(
        doc.get("peer"),
        Some(&Section::Sequence(vec![[("ip", "a")]
            .into_iter()
            .collect::<Entry>()]))
    );
}

#[test]
fn each_call_builds_an_independent_document() {
    let options = ParseOptions::new().with_array_section("peer");
    let first = parse_with_options("[peer]\nip=a", &options);
    let second = parse_with_options("[peer]\nip=a", &options);
    assert_eq!(first, second);
    assert_eq!(first.entries("peer").len(), 1);
}

#[rstest]
#[case("[a]\nx=1\ny=2\n[b]\nz=3")]
#[case("root=1\n[a]\nx = a=b\n[c]\nflag")]
#[case("# header\n[db]\nhost = localhost\nport = 5432\n\n[cache]\nttl=60\n")]
fn reparsing_rendered_output_is_stable(#[case] input: &str) {
    let doc = parse(input);
    let rendered = render(&doc);
    assert_eq!(parse(&rendered), doc, "rendered:\n{rendered}");
}
