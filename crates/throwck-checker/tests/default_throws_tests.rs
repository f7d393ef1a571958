use super::*;
use throwck_solver::{ClassInfo, ClassRegistry, MethodInfo};

fn defaults() -> (ClassRegistry, DefaultThrowTypes) {
    let mut registry = ClassRegistry::with_builtins();
    registry
        .add_class(ClassInfo::class("DateTime").method(MethodInfo::new("__construct")))
        .add_class(ClassInfo::class("Carbon").extends("DateTime"))
        .add_class(
            ClassInfo::class("FrozenCarbon")
                .extends("Carbon")
                .method(MethodInfo::new("__construct")),
        );
    let options = CheckerOptions::from_json(
        r#"{
            "methodThrowTypeDeclarations": {
                "\\DateTime": { "__construct": ["Exception"] },
                "FrozenCarbon": { "__CONSTRUCT": ["LogicException"] }
            },
            "functionThrowTypeDeclarations": { "\\Random_Int": ["Exception"] }
        }"#,
    )
    .expect("valid configuration");
    (registry, DefaultThrowTypes::from_options(&options))
}

#[test]
fn test_method_entry_applies_to_subclasses() {
    let (registry, defaults) = defaults();
    let expected = Some(TypeSet::from_names(["Exception"]));
    assert_eq!(
        defaults.method_throw_types(&registry, &ClassName::new("DateTime"), "__construct"),
        expected
    );
    assert_eq!(
        defaults.method_throw_types(&registry, &ClassName::new("carbon"), "__Construct"),
        expected
    );
}

#[test]
fn test_closer_entry_wins() {
    let (registry, defaults) = defaults();
    assert_eq!(
        defaults.method_throw_types(&registry, &ClassName::new("FrozenCarbon"), "__construct"),
        Some(TypeSet::from_names(["LogicException"]))
    );
}

#[test]
fn test_unconfigured_method_has_no_defaults() {
    let (registry, defaults) = defaults();
    assert_eq!(
        defaults.method_throw_types(&registry, &ClassName::new("DateTime"), "format"),
        None
    );
    assert_eq!(
        defaults.method_throw_types(&registry, &ClassName::new("Exception"), "__construct"),
        None
    );
}

#[test]
fn test_function_names_are_normalized() {
    let (_, defaults) = defaults();
    assert_eq!(
        defaults.function_throw_types("random_int"),
        Some(TypeSet::from_names(["Exception"]))
    );
    assert_eq!(defaults.function_throw_types("\\RANDOM_INT"), defaults.function_throw_types("random_int"));
    assert_eq!(defaults.function_throw_types("random_bytes"), None);
}
