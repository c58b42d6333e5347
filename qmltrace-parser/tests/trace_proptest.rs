//! Property-based tests for the trace engine
//!
//! Sources are generated from a small JavaScript/QML grammar, so they always
//! parse. Whatever their shape, the trace must be balanced, must report literals
//! in source order, and must report each token exactly once.

use qmltrace_parser::qml::ast::NodeRef;
use qmltrace_parser::qml::lexing::tokenize;
use qmltrace_parser::qml::parsing::{parse_document, ParseMode, ParseOptions};
use qmltrace_parser::qml::testing::{assert_balanced, assert_source_order, literal_texts};
use qmltrace_parser::qml::trace::{trace, Trace, TraceOptions, TraceRecord};
use proptest::prelude::*;

/// Identifiers that can never collide with a keyword
fn identifier_strategy() -> impl Strategy<Value = String> {
    "v_[a-z0-9]{0,3}"
}

fn primary_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        "[1-9][0-9]{0,2}",
        "[0-9]\\.[0-9]{1,2}",
        "\"[a-z ]{0,6}\"",
        "'[a-z]{0,4}'",
        Just("this".to_string()),
        Just("null".to_string()),
        Just("true".to_string()),
    ]
}

fn binary_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "**", "==", "!==", "<", ">=", "&&", "||", "??", "&", "|", "^",
        "<<", ">>>", "instanceof", "in",
    ])
}

fn expression_strategy() -> impl Strategy<Value = String> {
    primary_strategy().prop_recursive(6, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("!({e})")),
            inner.clone().prop_map(|e| format!("typeof ({e})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(c, a, b)| format!("({c}) ? {a} : {b}")),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (identifier_strategy(), identifier_strategy())
                .prop_map(|(o, f)| format!("{o}.{f}")),
            (identifier_strategy(), inner.clone()).prop_map(|(o, i)| format!("{o}[{i}]")),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            (identifier_strategy(), inner.clone())
                .prop_map(|(k, v)| format!("({{ {k}: {v} }})")),
            (identifier_strategy(), inner).prop_map(|(target, v)| format!("({target} = {v})")),
        ]
    })
}

fn statement_strategy() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        expression_strategy().prop_map(|e| format!("{e};")),
        (identifier_strategy(), expression_strategy())
            .prop_map(|(name, e)| format!("var {name} = {e};")),
        Just(";".to_string()),
    ];
    simple.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            (expression_strategy(), inner.clone())
                .prop_map(|(c, s)| format!("if ({c}) {s}")),
            (expression_strategy(), inner.clone(), inner.clone())
                .prop_map(|(c, a, b)| format!("if ({c}) {a} else {b}")),
            (expression_strategy(), inner.clone())
                .prop_map(|(c, s)| format!("while ({c}) {s}")),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|body| format!("{{ {} }}", body.join(" "))),
            (identifier_strategy(), prop::collection::vec(inner, 0..3)).prop_map(
                |(name, body)| format!("function {name}() {{ {} }}", body.join("\n"))
            ),
        ]
    })
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 0..5).prop_map(|statements| statements.join("\n"))
}

/// A root object with script bindings and nested objects
fn qml_strategy() -> impl Strategy<Value = String> {
    let binding = (identifier_strategy(), expression_strategy())
        .prop_map(|(name, e)| format!("{name}: {e}"));
    let object = prop::collection::vec(binding, 0..4)
        .prop_map(|bindings| format!("Item {{\n{}\n}}", bindings.join("\n")));
    object.prop_recursive(3, 12, 3, |inner| {
        (
            "[A-Z][a-z]{0,5}",
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(type_name, children)| format!("{type_name} {{ {} }}", children.join("\n")))
    })
}

fn check_trace(source: &str, mode: ParseMode) -> Result<(), TestCaseError> {
    let document = parse_document(source, mode, ParseOptions::default())
        .map_err(|err| TestCaseError::fail(format!("{source:?} failed to parse: {err}")))?;
    let records: Vec<_> = trace(source, Some(&document)).collect();

    assert_balanced(&records);
    assert_source_order(&records);

    // Generated type names have a single segment, so no token becomes a separator
    let tokens: Vec<&str> = tokenize(source)
        .into_iter()
        .filter_map(|(_, span)| span.text(source))
        .collect();
    prop_assert_eq!(literal_texts(&records), tokens);
    Ok(())
}

proptest! {
    #[test]
    fn test_generated_programs_trace_every_token(source in program_strategy()) {
        check_trace(&source, ParseMode::Script)?;
    }

    #[test]
    fn test_generated_documents_trace_every_token(source in qml_strategy()) {
        check_trace(&source, ParseMode::Qml)?;
    }

    #[test]
    fn test_trace_is_idempotent(source in program_strategy()) {
        let document = parse_document(&source, ParseMode::Script, ParseOptions::default()).unwrap();
        let first: Vec<_> = trace(&source, Some(&document)).collect();
        let second: Vec<_> = trace(&source, Some(&document)).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_any_ceiling_stays_balanced(source in program_strategy(), max_depth in 0usize..12) {
        let document = parse_document(&source, ParseMode::Script, ParseOptions::default()).unwrap();
        let records: Vec<_> = Trace::new(
            &source,
            Some(NodeRef::from(&document)),
            TraceOptions { max_depth },
        )
        .collect();

        assert_balanced(&records);
        assert_source_order(&records);
        let truncated = records
            .iter()
            .any(|record| matches!(record, TraceRecord::Truncated { .. }));
        let deepest_node = trace(&source, Some(&document))
            .filter_map(|record| match record {
                TraceRecord::Enter { depth, .. } => Some(depth),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        prop_assert_eq!(truncated, deepest_node >= max_depth);
    }

    #[test]
    fn test_arbitrary_input_never_panics(source in "[ -~\n]{0,64}") {
        for mode in [ParseMode::Qml, ParseMode::Script] {
            if let Ok(document) = parse_document(&source, mode, ParseOptions::default()) {
                let records: Vec<_> = trace(&source, Some(&document)).collect();
                assert_balanced(&records);
                assert_source_order(&records);
            }
        }
    }
}
