use super::*;
use crate::node::Node;
use crate::test_fixtures::{call, check, function, options, registry};

fn useless(decl: &FunctionDecl) -> Vec<String> {
    useless_throws(&registry(), decl)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_repeated_tag() {
    let decl = FunctionDecl::function("f")
        .with_throws("AppException")
        .with_throws("AppException");
    assert_eq!(useless(&decl), vec!["AppException"]);
}

#[test]
fn test_repeat_with_different_spelling() {
    let decl = FunctionDecl::function("f")
        .with_throws("\\AppException")
        .with_throws("appexception");
    assert_eq!(useless(&decl), vec!["appexception"]);

    let lowercase_first = FunctionDecl::function("f")
        .with_throws("appexception")
        .with_throws("\\AppException");
    assert_eq!(useless(&lowercase_first), vec!["AppException"]);
}

#[test]
fn test_subtype_restated_after_supertype() {
    let decl = FunctionDecl::function("f")
        .with_throws("NotFoundException")
        .with_throws("RuntimeException")
        .with_throws("AppException");
    assert_eq!(useless(&decl), vec!["NotFoundException"]);
}

#[test]
fn test_described_subtype_is_useful() {
    let decl = FunctionDecl::function("f")
        .with_described_throws("NotFoundException", "when the record is missing")
        .with_throws("AppException");
    assert!(useless(&decl).is_empty());

    let blank = FunctionDecl::function("f")
        .with_described_throws("NotFoundException", "   ")
        .with_throws("AppException");
    assert_eq!(useless(&blank), vec!["NotFoundException"]);
}

#[test]
fn test_unrelated_and_unresolved_tags() {
    let decl = FunctionDecl::function("f")
        .with_throws("LogicException")
        .with_throws("RuntimeException")
        .with_throws("GeneratedException")
        .with_throws("OtherGeneratedException");
    assert!(useless(&decl).is_empty());
}

#[test]
fn test_reported_at_function_start() {
    let registry = registry();
    let decl = FunctionDecl::function("f")
        .with_throws("AppException")
        .with_throws("AppException");
    let diagnostics = check(
        &registry,
        options(),
        &[
            function(decl, 5),
            (call("load"), 6),
            (Node::FunctionEnd, 7),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(5, "Useless @throws AppException annotation".to_string())]
    );
}
