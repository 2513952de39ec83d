//! End-to-end tests: load Go sources from disk, locate, classify, extract

mod common;

use common::*;
use gobucket_core::config::LoaderConfig;
use gobucket_core::{
    extract_assignments, ClassificationReport, CorpusLoader, ErrorKind, FunctionLocator,
    GoSyntaxProvider, ParseFunctionsUseCase, StatementKind,
};
use pretty_assertions::assert_eq;

fn loader() -> CorpusLoader<GoSyntaxProvider> {
    CorpusLoader::new(GoSyntaxProvider::new(), LoaderConfig::default())
}

#[test]
fn test_walkthrough_classification_and_extraction() {
    let dir = go_tree(&[("demo/walkthrough.go", WALKTHROUGH_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let results = ParseFunctionsUseCase::default()
        .execute(&corpus, &["walkthrough"])
        .unwrap();
    let parsed = results[0].require().unwrap();
    let c = &parsed.classification;

    assert_eq!(c.len(), 4);
    assert_eq!(texts(c.bucket(StatementKind::Assign)), vec!["x := 1", "y := 2"]);
    assert_eq!(c.bucket(StatementKind::If).len(), 1);
    assert!(texts(c.bucket(StatementKind::If))[0].starts_with("if x > 0 {"));
    // The nested return stays inside the if; only the trailing one is top level
    assert_eq!(texts(c.bucket(StatementKind::Return)), vec!["return y"]);

    let extraction = extract_assignments(c.clone());
    assert_eq!(extraction.rendered, vec!["x := 1", "y := 2"]);

    let remaining: Vec<Option<StatementKind>> = extraction
        .classification
        .master()
        .iter()
        .map(|n| n.kind())
        .collect();
    assert_eq!(remaining, vec![Some(StatementKind::If), Some(StatementKind::Return)]);
    assert_eq!(extraction.classification.bucket(StatementKind::Assign).len(), 2);
}

#[test]
fn test_single_line_body() {
    let source = "package p\n\nfunc f() { x := 1; if x > 0 { return }; y := 2 }\n";
    let dir = go_tree(&[("p.go", source)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let results = ParseFunctionsUseCase::default().execute(&corpus, &["f"]).unwrap();
    let c = &results[0].require().unwrap().classification;

    assert_eq!(c.len(), 3);
    assert_eq!(texts(c.bucket(StatementKind::Assign)), vec!["x := 1", "y := 2"]);
    assert!(c.bucket(StatementKind::Return).is_empty());

    let extraction = extract_assignments(c.clone());
    assert_eq!(extraction.classification.len(), 1);
}

#[test]
fn test_missing_name_does_not_abort_batch() {
    let dir = go_tree(&[("server/server.go", SERVER_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let results = ParseFunctionsUseCase::default()
        .execute(&corpus, &["doesNotExist,Start", "helper"])
        .unwrap();

    let found: Vec<(String, bool)> = results
        .iter()
        .map(|r| (r.name.clone(), r.is_found()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("doesNotExist".to_string(), false),
            ("Start".to_string(), true),
            ("helper".to_string(), true),
        ]
    );
}

#[test]
fn test_method_statements() {
    let dir = go_tree(&[("server/server.go", SERVER_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let results = ParseFunctionsUseCase::default().execute(&corpus, &["Start"]).unwrap();
    let parsed = results[0].require().unwrap();
    assert_eq!(parsed.definition.receiver.as_deref(), Some("Server"));

    let kinds: Vec<Option<StatementKind>> = parsed
        .classification
        .master()
        .iter()
        .map(|n| n.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(StatementKind::Assign),
            Some(StatementKind::IncDec),
            Some(StatementKind::ConcurrentLaunch),
            Some(StatementKind::Deferred),
            Some(StatementKind::Send),
            Some(StatementKind::Range),
            Some(StatementKind::Return),
        ]
    );
}

#[test]
fn test_duplicate_names_use_last_definition() {
    let dir = go_tree(&[("a/server.go", SERVER_GO), ("b/other.go", DUPLICATE_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let all = FunctionLocator::new().locate(&corpus, "helper");
    assert_eq!(all.len(), 2);

    let results = ParseFunctionsUseCase::default().execute(&corpus, &["helper"]).unwrap();
    let parsed = results[0].require().unwrap();
    assert!(parsed.definition.file_path.ends_with("other.go"));
    assert_eq!(parsed.classification.len(), 1);
}

#[test]
fn test_locator_is_deterministic_over_loaded_corpus() {
    let dir = go_tree(&[("server/server.go", SERVER_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();
    let locator = FunctionLocator::new();

    let first = locator.locate(&corpus, "helper");
    let second = locator.locate(&corpus, "helper");
    assert!(std::ptr::eq(first[0], second[0]));
    assert!(std::ptr::eq(&first[0].body[0], &second[0].body[0]));
}

#[test]
fn test_swap_assignment_counts_as_assign() {
    let dir = go_tree(&[("server/server.go", SERVER_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let results = ParseFunctionsUseCase::default().execute(&corpus, &["helper"]).unwrap();
    let c = &results[0].require().unwrap().classification;

    assert_eq!(
        texts(c.bucket(StatementKind::Assign)),
        vec!["a := 1", "b := 2", "a, b = b, a"]
    );
    assert_eq!(c.bucket(StatementKind::Expression).len(), 1);
}

#[test]
fn test_report_after_extraction() {
    let dir = go_tree(&[("demo/walkthrough.go", WALKTHROUGH_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();
    let results = ParseFunctionsUseCase::default()
        .execute(&corpus, &["walkthrough"])
        .unwrap();
    let parsed = results[0].require().unwrap();

    let extraction = extract_assignments(parsed.classification.clone());
    let report = ClassificationReport::build(parsed.definition, &extraction.classification)
        .with_extracted(extraction.rendered);

    assert_eq!(report.statements.len(), 2);
    assert_eq!(report.buckets["assign"].len(), 2);
    assert_eq!(report.line, 3);
    assert!(report.render_text().contains("extracted assignments:"));
}

#[test]
fn test_empty_name_list_is_usage_error() {
    let dir = go_tree(&[("demo/walkthrough.go", WALKTHROUGH_GO)]);
    let corpus = loader().load(&[dir.path()]).unwrap();

    let empty: [&str; 0] = [];
    let err = ParseFunctionsUseCase::default().execute(&corpus, &empty).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Usage);
}

#[test]
fn test_malformed_file_fails_load_unless_allowed() {
    let broken = "package p\n\nfunc broken() {\n\tx := 1\n\t)\n}\n";
    let dir = go_tree(&[("ok/walkthrough.go", WALKTHROUGH_GO), ("bad/broken.go", broken)]);

    let err = loader().load(&[dir.path()]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);

    let config = LoaderConfig {
        allow_malformed: true,
        ..LoaderConfig::default()
    };
    let lenient = CorpusLoader::new(GoSyntaxProvider::new().allow_malformed(true), config);
    let corpus = lenient.load(&[dir.path()]).unwrap();
    assert!(corpus.units().iter().any(|u| u.has_errors()));
    assert_eq!(FunctionLocator::new().locate(&corpus, "walkthrough").len(), 1);

    let results = ParseFunctionsUseCase::default().execute(&corpus, &["broken"]).unwrap();
    let c = &results[0].require().unwrap().classification;
    assert_eq!(c.len(), 2);
    assert_eq!(texts(c.bucket(StatementKind::Malformed)), vec![")"]);
}
