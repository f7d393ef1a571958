use super::*;
use crate::context::CheckerOptions;
use crate::node::{CatchClause, FunctionDecl, Node};
use crate::test_fixtures::{call, check, function, options, registry, throw, try_catch};

fn findings(clauses: &[&[&str]]) -> Vec<CatchFinding> {
    let statement = TryStatement {
        catches: clauses
            .iter()
            .enumerate()
            .map(|(index, types)| CatchClause::new(types, index as u32 + 1))
            .collect(),
    };
    structural_catch_findings(&registry(), &statement)
        .into_iter()
        .map(|located| located.finding)
        .collect()
}

fn name(text: &str) -> ClassName {
    ClassName::new(text)
}

#[test]
fn test_subtype_in_union() {
    assert_eq!(
        findings(&[&["LogicException", "InvalidArgumentException"]]),
        vec![CatchFinding::AlreadyCaughtBy {
            ty: name("InvalidArgumentException"),
            by: name("LogicException"),
        }]
    );
    assert_eq!(
        findings(&[&["InvalidArgumentException", "LogicException"]]),
        vec![CatchFinding::AlreadyCaughtBy {
            ty: name("InvalidArgumentException"),
            by: name("LogicException"),
        }]
    );
}

#[test]
fn test_repeated_type_in_union() {
    assert_eq!(
        findings(&[&["AppException", "RuntimeException", "\\appexception"]]),
        vec![CatchFinding::Redundant {
            ty: name("appexception"),
        }]
    );
}

#[test]
fn test_unresolved_union_members_are_skipped() {
    assert!(findings(&[&["Missing", "AppException", "AlsoMissing"]]).is_empty());
}

#[test]
fn test_unreachable_clause() {
    assert_eq!(
        findings(&[&["AppException"], &["NotFoundException"]]),
        vec![CatchFinding::Unreachable {
            ty: name("NotFoundException"),
            by: name("AppException"),
        }]
    );
    assert!(findings(&[&["NotFoundException"], &["AppException"]]).is_empty());
}

#[test]
fn test_unreachable_ignores_unresolved_earlier_clauses() {
    assert_eq!(
        findings(&[&["Missing"], &["Exception"], &["Missing"], &["RuntimeException"]]),
        vec![CatchFinding::Unreachable {
            ty: name("RuntimeException"),
            by: name("Exception"),
        }]
    );
}

#[test]
fn test_unused_catch() {
    let registry = registry();
    let diagnostics = check(
        &registry,
        options(),
        &[
            function(FunctionDecl::function("f"), 1),
            (
                Node::try_start(vec![
                    CatchClause::new(&["NotFoundException"], 5),
                    CatchClause::new(&["LogicException", "TypeError"], 6),
                ]),
                2,
            ),
            (call("parse"), 3),
            (Node::TryBodyEnd, 4),
            (Node::FunctionEnd, 7),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(
            6,
            "LogicException is never thrown in the corresponding try block".to_string()
        )]
    );
}

#[test]
fn test_unused_unchecked_catch_when_enabled() {
    let registry = registry();
    let reporting = CheckerOptions {
        report_unused_catches_of_unchecked_exceptions: true,
        ..options()
    };
    let diagnostics = check(
        &registry,
        reporting,
        &[(try_catch(&["TypeError"], 3), 1), (Node::TryBodyEnd, 2)],
    );
    assert_eq!(
        diagnostics,
        vec![(
            3,
            "TypeError is never thrown in the corresponding try block".to_string()
        )]
    );
}

#[test]
fn test_partial_catch_counts_as_used() {
    let registry = registry();
    let diagnostics = check(
        &registry,
        options(),
        &[
            function(FunctionDecl::function("f").with_throws("AppException"), 1),
            (try_catch(&["NotFoundException"], 4), 2),
            throw("AppException", 3),
            (Node::TryBodyEnd, 4),
            (Node::FunctionEnd, 5),
        ],
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_shadowed_entries_are_not_reported_unused() {
    let registry = registry();
    let diagnostics = check(
        &registry,
        options(),
        &[
            (
                Node::try_start(vec![
                    CatchClause::new(&["AppException"], 3),
                    CatchClause::new(&["NotFoundException"], 4),
                ]),
                1,
            ),
            throw("AppException", 2),
            (Node::TryBodyEnd, 3),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(
            4,
            "NotFoundException is unreachable, superclass AppException has already been caught"
                .to_string()
        )]
    );
}

#[test]
fn test_throws_inside_nested_function_do_not_reach_catch() {
    let registry = registry();
    let diagnostics = check(
        &registry,
        options(),
        &[
            (try_catch(&["AppException"], 6), 1),
            function(FunctionDecl::closure().with_throws("AppException"), 2),
            throw("AppException", 3),
            (Node::FunctionEnd, 4),
            (Node::TryBodyEnd, 5),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(
            6,
            "AppException is never thrown in the corresponding try block".to_string()
        )]
    );
}
