//! Trace invariants over the fixture corpus and a set of inline snippets
//!
//! For every input that parses, the trace must be balanced, report literals in
//! source order, and account for every token of the source.

use std::fs;
use std::path::Path;

use qmltrace_parser::qml::ast::{NodeRef, Span};
use qmltrace_parser::qml::lexing::{tokenize, Token};
use qmltrace_parser::qml::loader::DocumentLoader;
use qmltrace_parser::qml::parsing::{parse_document, ParseMode, ParseOptions};
use qmltrace_parser::qml::testing::{assert_balanced, assert_source_order};
use qmltrace_parser::qml::trace::{trace, Trace, TraceOptions, TraceRecord};
use rstest::rstest;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

/// Every token is a Literal, except qualified-id dots which show up as Separators
fn assert_every_token_reported(source: &str, records: &[TraceRecord<'_>]) {
    let literals: Vec<Span> = records
        .iter()
        .filter_map(|record| match *record {
            TraceRecord::Literal { text, offset, .. } => Some(Span::new(offset, text.len())),
            _ => None,
        })
        .collect();
    let separators = records
        .iter()
        .filter(|record| matches!(record, TraceRecord::Separator { .. }))
        .count();

    let tokens = tokenize(source);
    let unreported: Vec<(Token, Span)> = tokens
        .iter()
        .copied()
        .filter(|(_, span)| !literals.contains(span))
        .collect();
    assert!(
        unreported.iter().all(|(token, _)| *token == Token::Dot),
        "tokens missing from the trace: {unreported:?}"
    );
    assert_eq!(unreported.len(), separators);
    assert_eq!(literals.len() + separators, tokens.len());
}

#[rstest]
#[case::button("button.qml", true)]
#[case::list_view("list_view.qml", true)]
#[case::utils("utils.js", true)]
// A regular expression literal lexes as several tokens outside the parser
#[case::control_flow("control_flow.js", false)]
fn test_fixture_traces(#[case] name: &str, #[case] check_tokens: bool) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let loader = DocumentLoader::from_path(&path).unwrap();
    let document = loader
        .parse(ParseOptions::default())
        .unwrap_or_else(|err| panic!("{name}: {err}"));
    let records: Vec<_> = trace(loader.source(), Some(&document)).collect();

    assert!(!records.is_empty());
    assert_balanced(&records);
    assert_source_order(&records);
    if check_tokens {
        assert_every_token_reported(loader.source(), &records);
    }
    assert_eq!(fixture(name), loader.source());
}

#[rstest]
#[case::empty_program("", ParseMode::Script)]
#[case::empty_statement(";", ParseMode::Script)]
#[case::labels("a: for (;;) { continue a; }", ParseMode::Script)]
#[case::for_in("for (var k in o) delete o[k];", ParseMode::Script)]
#[case::for_of("for (let x of xs) ++n;", ParseMode::Script)]
#[case::switch_default_middle(
    "switch (v) { case 1: a(); default: b(); case 2: }",
    ParseMode::Script
)]
#[case::try_catch_finally("try { f(); } catch (e) { g(e); } finally { h(); }", ParseMode::Script)]
#[case::conditional_chain("x = a ? b : c ? d : e;", ParseMode::Script)]
#[case::unary_mix("y = -+~!x, typeof z, void 0, i--;", ParseMode::Script)]
#[case::new_forms("new A; new B(1, 2); new C.D().e;", ParseMode::Script)]
#[case::object_literal("o = { a: 1, 'b': [], 2: { c: null } };", ParseMode::Script)]
#[case::function_expression("f = function (a, b = 2) { return a ** b; };", ParseMode::Script)]
#[case::asi("a = 1\nb = 2\nreturn_value()", ParseMode::Script)]
#[case::pragma_and_file_import(
    "pragma Singleton\nimport \"lib\" as Lib\nQtObject {}",
    ParseMode::Qml
)]
#[case::on_binding("Item { NumberAnimation on x { to: 10 } }", ParseMode::Qml)]
#[case::array_binding("Item { data: [ A {}, B {} ] }", ParseMode::Qml)]
#[case::signal_parameters("Item { signal moved(int x, real y); signal done }", ParseMode::Qml)]
#[case::default_property("Item { default property list<Item> kids }", ParseMode::Qml)]
#[case::enum_declaration("Item { enum E { A, B = 3 } }", ParseMode::Qml)]
#[case::function_member("Item { function f() { return 1 } }", ParseMode::Qml)]
#[case::property_object_value("Item { property Item child: Rectangle {} }", ParseMode::Qml)]
#[case::block_binding("Item { x: { var t = 2; return t * 3; } }", ParseMode::Qml)]
#[case::unicode_identifier("var café = 1, naïve = café;", ParseMode::Script)]
#[case::unicode_property_name("Item { property string naïve: \"x\" }", ParseMode::Qml)]
#[case::unicode_line_terminator("x = y\u{2028}z = w\u{2029}", ParseMode::Script)]
fn test_snippet_traces(#[case] source: &str, #[case] mode: ParseMode) {
    let document = parse_document(source, mode, ParseOptions::default())
        .unwrap_or_else(|err| panic!("{source:?}: {err}"));
    let records: Vec<_> = trace(source, Some(&document)).collect();

    assert_balanced(&records);
    assert_source_order(&records);
    assert_every_token_reported(source, &records);
}

#[rstest]
#[case::default_ceiling(TraceOptions::DEFAULT_MAX_DEPTH)]
#[case::shallow(6)]
#[case::root_only(1)]
fn test_ceiling_keeps_traces_balanced(#[case] max_depth: usize) {
    let source = fixture("list_view.qml");
    let document = parse_document(&source, ParseMode::Qml, ParseOptions::default()).unwrap();
    let records: Vec<_> = Trace::new(
        &source,
        Some(NodeRef::from(&document)),
        TraceOptions { max_depth },
    )
    .collect();

    assert_balanced(&records);
    assert_source_order(&records);
    assert!(records.iter().all(|record| record.depth() <= max_depth));
}
