//! End-to-end exception rules, driven through the public node protocol.

use throwck_checker::{
    CatchClause, CheckerOptions, CheckerState, DivisionOp, FunctionDecl, Node, ThrowingConstruct,
};
use throwck_solver::{ClassInfo, ClassRegistry, MethodInfo, Type};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::with_builtins();
    registry
        .add_class(ClassInfo::class("ParentException").extends("RuntimeException"))
        .add_class(ClassInfo::class("ChildException").extends("ParentException"))
        .add_class(ClassInfo::class("FooException").extends("Exception"))
        .add_class(
            ClassInfo::interface("Storage")
                .method(MethodInfo::new("write").abstract_method().throws(["FooException"])),
        )
        .add_class(
            ClassInfo::class("MemoryStorage")
                .implements("Storage")
                .method(MethodInfo::new("write").throws(["FooException"])),
        )
        .add_class(
            ClassInfo::class("Client")
                .method(MethodInfo::new("__construct"))
                .method(MethodInfo::new("send").throws(["ChildException"]))
                .method(MethodInfo::new("close")),
        )
        .add_class(ClassInfo::abstract_class("TestCase"))
        .add_class(
            ClassInfo::class("ClientTest")
                .extends("TestCase")
                .method(MethodInfo::new("testSend"))
                .method(MethodInfo::new("helper")),
        );
    registry
}

fn checked_everything() -> CheckerOptions {
    CheckerOptions::default()
}

fn run(
    registry: &ClassRegistry,
    options: CheckerOptions,
    nodes: &[(Node, u32)],
) -> Vec<(u32, String)> {
    init_tracing();
    let mut state = CheckerState::new(registry, "rules.php", options).expect("valid options");
    state
        .check_nodes(nodes.iter().map(|(node, line)| (node, *line)))
        .expect("well-nested nodes");
    state
        .finish()
        .expect("all frames closed")
        .into_iter()
        .map(|diagnostic| (diagnostic.line, diagnostic.message_text))
        .collect()
}

fn send() -> Node {
    Node::Throwing(ThrowingConstruct::MethodCall {
        receiver: Type::object("Client"),
        method: "send".to_string(),
    })
}

fn divide_by(divisor: Type) -> Node {
    Node::Throwing(ThrowingConstruct::Division {
        op: DivisionOp::Divide,
        divisor,
    })
}

fn messages(diagnostics: &[(u32, String)]) -> Vec<&str> {
    diagnostics.iter().map(|(_, message)| message.as_str()).collect()
}

#[test]
fn test_outer_catch_is_not_a_missing_declaration() {
    let registry = registry();
    let diagnostics = run(
        &registry,
        checked_everything(),
        &[
            (Node::FunctionStart(FunctionDecl::function("deliver")), 1),
            (Node::try_start(vec![CatchClause::new(&["ParentException"], 7)]), 2),
            (Node::try_start(vec![CatchClause::new(&["FooException"], 5)]), 3),
            (send(), 4),
            (Node::TryBodyEnd, 5),
            (Node::TryBodyEnd, 6),
            (Node::FunctionEnd, 8),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(
            5,
            "FooException is never thrown in the corresponding try block".to_string()
        )]
    );
}

#[test]
fn test_unused_declarations_are_exact_and_idempotent() {
    let registry = registry();
    let nodes = [
        (
            Node::FunctionStart(
                FunctionDecl::function("deliver")
                    .with_throws("ParentException")
                    .with_throws("FooException")
                    .with_throws("LogicException"),
            ),
            1,
        ),
        (send(), 2),
        (Node::FunctionEnd, 3),
    ];
    let first = run(&registry, checked_everything(), &nodes);
    assert_eq!(
        first,
        vec![
            (3, "Unused @throws FooException annotation".to_string()),
            (3, "Unused @throws LogicException annotation".to_string()),
        ]
    );
    assert_eq!(run(&registry, checked_everything(), &nodes), first);
}

#[test]
fn test_unused_declaration_of_unchecked_type_is_allowed() {
    let registry = registry();
    let options = CheckerOptions {
        unchecked_exceptions: vec!["LogicException".to_string()],
        ..CheckerOptions::default()
    };
    let diagnostics = run(
        &registry,
        options,
        &[
            (
                Node::FunctionStart(FunctionDecl::function("f").with_throws("LogicException")),
                1,
            ),
            (Node::FunctionEnd, 2),
        ],
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_catch_union_with_subtype_reports_once() {
    let registry = registry();
    let try_with = |types: &[&str]| {
        run(
            &registry,
            checked_everything(),
            &[
                (Node::try_start(vec![CatchClause::new(types, 3)]), 1),
                (send(), 2),
                (Node::TryBodyEnd, 3),
            ],
        )
    };
    assert_eq!(
        try_with(&["ParentException", "ChildException"]),
        vec![(
            3,
            "ChildException is already caught by ParentException".to_string()
        )]
    );
    assert_eq!(
        try_with(&["ChildException", "ParentException"]),
        vec![(
            3,
            "ChildException is already caught by ParentException".to_string()
        )]
    );
    assert_eq!(
        try_with(&["ChildException", "ChildException"]),
        vec![(3, "ChildException is redundant".to_string())]
    );
}

#[test]
fn test_catch_ordering() {
    let registry = registry();
    let try_with = |first: &str, second: &str| {
        run(
            &registry,
            checked_everything(),
            &[
                (
                    Node::try_start(vec![
                        CatchClause::new(&[first], 3),
                        CatchClause::new(&[second], 4),
                    ]),
                    1,
                ),
                (send(), 2),
                (Node::throw_new("ParentException"), 2),
                (Node::TryBodyEnd, 3),
            ],
        )
    };
    assert_eq!(
        try_with("ParentException", "ChildException"),
        vec![(
            4,
            "ChildException is unreachable, superclass ParentException has already been caught"
                .to_string()
        )]
    );
    assert!(try_with("ChildException", "ParentException").is_empty());
}

#[test]
fn test_division_by_statically_known_divisors() {
    let registry = registry();
    let divide = |divisor: Type| {
        run(
            &registry,
            checked_everything(),
            &[
                (Node::FunctionStart(FunctionDecl::function("ratio")), 1),
                (divide_by(divisor), 2),
                (Node::FunctionEnd, 3),
            ],
        )
    };
    let missing = vec![(2, "Missing @throws DivisionByZeroError annotation".to_string())];
    assert_eq!(divide(Type::IntConstant(0)), missing);
    assert_eq!(divide(Type::union_of_ints(&[0, 1, 2])), missing);
    assert!(divide(Type::union_of_ints(&[1, 2])).is_empty());
}

#[test]
fn test_useless_annotations() {
    let registry = registry();
    let diagnostics = run(
        &registry,
        checked_everything(),
        &[
            (
                Node::FunctionStart(
                    FunctionDecl::function("f")
                        .with_throws("FooException")
                        .with_throws("FooException"),
                ),
                1,
            ),
            (Node::throw_new("FooException"), 2),
            (Node::FunctionEnd, 3),
        ],
    );
    assert_eq!(messages(&diagnostics), vec!["Useless @throws FooException annotation"]);

    let diagnostics = run(
        &registry,
        checked_everything(),
        &[
            (
                Node::FunctionStart(
                    FunctionDecl::function("g")
                        .with_throws("ChildException")
                        .with_throws("ParentException"),
                ),
                1,
            ),
            (send(), 2),
            (Node::FunctionEnd, 3),
        ],
    );
    assert_eq!(
        messages(&diagnostics),
        vec!["Useless @throws ChildException annotation"]
    );
}

#[test]
fn test_unused_throws_in_subtypes() {
    let registry = registry();
    let nodes = [
        (
            Node::FunctionStart(
                FunctionDecl::method("MemoryStorage", "write").with_throws("FooException"),
            ),
            1,
        ),
        (Node::FunctionEnd, 2),
    ];
    assert_eq!(
        run(&registry, checked_everything(), &nodes),
        vec![(2, "Unused @throws FooException annotation".to_string())]
    );

    let lenient = CheckerOptions {
        report_unused_checked_throws_in_subtypes: false,
        ..CheckerOptions::default()
    };
    assert!(run(&registry, lenient, &nodes).is_empty());
}

#[test]
fn test_whitelisted_methods() {
    let registry = registry();
    let options = CheckerOptions::from_json(r#"{ "methodWhitelist": { "TestCase": "^test" } }"#)
        .expect("valid configuration");
    let method = |name: &str| {
        run(
            &registry,
            options.clone(),
            &[
                (
                    Node::FunctionStart(
                        FunctionDecl::method("ClientTest", name).with_throws("LogicException"),
                    ),
                    1,
                ),
                (send(), 2),
                (Node::FunctionEnd, 3),
            ],
        )
    };
    assert!(method("testSend").is_empty());
    assert_eq!(
        method("helper"),
        vec![
            (2, "Missing @throws ChildException annotation".to_string()),
            (3, "Unused @throws LogicException annotation".to_string()),
        ]
    );
}

#[test]
fn test_default_declarations_form_the_unused_baseline() {
    let registry = registry();
    let options = CheckerOptions::from_json(
        r#"{ "methodThrowTypeDeclarations": { "Client": { "close": ["FooException"] } } }"#,
    )
    .expect("valid configuration");
    let diagnostics = run(
        &registry,
        options,
        &[
            (
                Node::FunctionStart(
                    FunctionDecl::method("Client", "close").with_throws("FooException"),
                ),
                1,
            ),
            (Node::FunctionEnd, 2),
            (Node::FunctionStart(FunctionDecl::function("shutdown")), 3),
            (
                Node::Throwing(ThrowingConstruct::MethodCall {
                    receiver: Type::object("Client"),
                    method: "close".to_string(),
                }),
                4,
            ),
            (Node::FunctionEnd, 5),
        ],
    );
    assert_eq!(
        diagnostics,
        vec![(4, "Missing @throws FooException annotation".to_string())]
    );
}

#[test]
fn test_default_declarations_match_case_insensitively() {
    let registry = registry();
    let options = CheckerOptions::from_json(
        r#"{ "functionThrowTypeDeclarations": { "shutdown": ["FooException"] } }"#,
    )
    .expect("valid configuration");
    let diagnostics = run(
        &registry,
        options,
        &[
            (
                Node::FunctionStart(FunctionDecl::function("shutdown").with_throws("fooexception")),
                1,
            ),
            (Node::FunctionEnd, 2),
        ],
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_global_scope_throw() {
    let registry = registry();
    let nodes = [(send(), 1)];
    assert!(run(&registry, checked_everything(), &nodes).is_empty());

    let options = CheckerOptions::from_json(r#"{ "reportCheckedThrowsInGlobalScope": true }"#)
        .expect("valid configuration");
    assert_eq!(
        messages(&run(&registry, options, &nodes)),
        vec!["Throwing checked exception ChildException in global scope is prohibited"]
    );
}
