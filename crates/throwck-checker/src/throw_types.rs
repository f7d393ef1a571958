//! Throw-type inference.
//!
//! Maps one throwing construct, together with the statically known types of
//! its operands, to the exception types it may raise. Unresolved classes,
//! methods and functions contribute nothing of their own; an independent
//! pass is expected to report them. Protocol rules and extensions still
//! apply to calls of unresolved functions.

use crate::default_throws::DefaultThrowTypes;
use crate::extensions::{FunctionCallSite, FunctionThrowTypeExtension};
use crate::node::{DivisionOp, ShiftOp, ThrowingConstruct};
use crate::well_known;
use throwck_solver::{ClassName, Type, TypeHierarchy, TypeSet};
use tracing::debug;

/// Which protocol a value is iterated through.
enum IterationProtocol {
    Iterator,
    Aggregate,
}

pub struct ThrowTypeResolver<'r> {
    hierarchy: &'r dyn TypeHierarchy,
    defaults: &'r DefaultThrowTypes,
    extensions: &'r [Box<dyn FunctionThrowTypeExtension>],
}

impl<'r> ThrowTypeResolver<'r> {
    pub fn new(
        hierarchy: &'r dyn TypeHierarchy,
        defaults: &'r DefaultThrowTypes,
        extensions: &'r [Box<dyn FunctionThrowTypeExtension>],
    ) -> Self {
        Self {
            hierarchy,
            defaults,
            extensions,
        }
    }

    pub fn infer(&self, construct: &ThrowingConstruct) -> TypeSet {
        let types = match construct {
            ThrowingConstruct::Throw { value } => self.thrown_value_types(value),
            ThrowingConstruct::MethodCall { receiver, method } => {
                let mut types = TypeSet::new();
                for class in receiver.class_names() {
                    types.extend_from(&self.call_throw_types(
                        &class,
                        method,
                        well_known::MAGIC_CALL,
                    ));
                }
                types
            }
            ThrowingConstruct::StaticCall { class, method } => {
                self.call_throw_types(class, method, well_known::MAGIC_CALL_STATIC)
            }
            ThrowingConstruct::New { class } => self
                .method_throw_types(class, well_known::CONSTRUCTOR)
                .unwrap_or_default(),
            ThrowingConstruct::Division { op, divisor } => self.division_throw_types(*op, divisor),
            ThrowingConstruct::Shift { op, amount } => self.shift_throw_types(*op, amount),
            ThrowingConstruct::Iteration {
                subject,
                binds_key,
            } => self.iteration_throw_types(subject, *binds_key),
            ThrowingConstruct::FunctionCall { name, args } => {
                self.function_call_throw_types(name, args)
            }
        };
        debug!(?construct, ?types, "inferred throw types");
        types
    }

    fn thrown_value_types(&self, value: &Type) -> TypeSet {
        value
            .class_names()
            .iter()
            .filter_map(|name| self.hierarchy.resolved_name(name))
            .collect()
    }

    /// Resolved names where the hierarchy knows the type, canonical names
    /// otherwise.
    fn normalize(&self, types: &TypeSet) -> TypeSet {
        types
            .iter()
            .map(|ty| self.hierarchy.resolved_name(ty).unwrap_or_else(|| ty.clone()))
            .collect()
    }

    /// Throw types of `class::method`: configured defaults first, then the
    /// method's own annotation. `None` when neither the class nor any
    /// supertype declares the method.
    pub fn method_throw_types(&self, class: &ClassName, method: &str) -> Option<TypeSet> {
        if let Some(types) = self.defaults.method_throw_types(self.hierarchy, class, method) {
            return Some(self.normalize(&types));
        }
        let (_, info) = self.hierarchy.find_method(class, method)?;
        Some(self.normalize(&info.throw_types()))
    }

    fn call_throw_types(&self, class: &ClassName, method: &str, fallback: &str) -> TypeSet {
        self.method_throw_types(class, method)
            .or_else(|| self.method_throw_types(class, fallback))
            .unwrap_or_default()
    }

    fn division_throw_types(&self, op: DivisionOp, divisor: &Type) -> TypeSet {
        let values = divisor.int_values();
        if !values.may_be(0) {
            return TypeSet::new();
        }
        debug!(?op, "divisor may be zero");
        TypeSet::single(self.builtin(well_known::DIVISION_BY_ZERO_ERROR))
    }

    fn shift_throw_types(&self, op: ShiftOp, amount: &Type) -> TypeSet {
        if !amount.int_values().may_be_negative() {
            return TypeSet::new();
        }
        debug!(?op, "shift amount may be negative");
        TypeSet::single(self.builtin(well_known::ARITHMETIC_ERROR))
    }

    fn builtin(&self, name: &str) -> ClassName {
        let name = ClassName::new(name);
        self.hierarchy.resolved_name(&name).unwrap_or(name)
    }

    fn iteration_protocol(&self, class: &ClassName) -> Option<IterationProtocol> {
        let implements = |interface: &str| {
            self.hierarchy
                .is_same_or_subclass_of(class, &ClassName::new(interface))
        };
        if implements(well_known::ITERATOR) {
            Some(IterationProtocol::Iterator)
        } else if implements(well_known::ITERATOR_AGGREGATE) {
            Some(IterationProtocol::Aggregate)
        } else {
            None
        }
    }

    fn iteration_throw_types(&self, subject: &Type, binds_key: bool) -> TypeSet {
        let mut types = TypeSet::new();
        for class in subject.class_names() {
            let methods: &[&str] = match self.iteration_protocol(&class) {
                Some(IterationProtocol::Iterator) if binds_key => &[
                    well_known::ITERATOR_NEXT,
                    well_known::ITERATOR_VALID,
                    well_known::ITERATOR_CURRENT,
                    well_known::ITERATOR_KEY,
                ],
                Some(IterationProtocol::Iterator) => &[
                    well_known::ITERATOR_NEXT,
                    well_known::ITERATOR_VALID,
                    well_known::ITERATOR_CURRENT,
                ],
                Some(IterationProtocol::Aggregate) => &[well_known::GET_ITERATOR],
                None => &[],
            };
            for method in methods {
                if let Some(found) = self.method_throw_types(&class, method) {
                    types.extend_from(&found);
                }
            }
        }
        types
    }

    /// Protocol methods a standard function calls on its first argument.
    fn protocol_throw_types(&self, name: &str, args: &[Type]) -> TypeSet {
        let Some(subject) = args.first() else {
            return TypeSet::new();
        };
        match name {
            "iterator_to_array" => {
                let preserve_keys = !matches!(args.get(1), Some(Type::BoolConstant(false)));
                self.iteration_throw_types(subject, preserve_keys)
            }
            "iterator_count" | "iterator_apply" => self.iteration_throw_types(subject, false),
            "count" => self.implemented_method_throw_types(
                subject,
                well_known::COUNTABLE,
                well_known::COUNT,
            ),
            "json_encode" => self.implemented_method_throw_types(
                subject,
                well_known::JSON_SERIALIZABLE,
                well_known::JSON_SERIALIZE,
            ),
            _ => TypeSet::new(),
        }
    }

    fn implemented_method_throw_types(
        &self,
        subject: &Type,
        interface: &str,
        method: &str,
    ) -> TypeSet {
        let interface = ClassName::new(interface);
        let mut types = TypeSet::new();
        for class in subject.class_names() {
            if self.hierarchy.is_same_or_subclass_of(&class, &interface)
                && let Some(found) = self.method_throw_types(&class, method)
            {
                types.extend_from(&found);
            }
        }
        types
    }

    fn function_call_throw_types(&self, name: &str, args: &[Type]) -> TypeSet {
        let key = name.trim().trim_start_matches('\\').to_ascii_lowercase();

        let declared = match self.defaults.function_throw_types(&key) {
            Some(types) => types,
            None => match self.hierarchy.function(&key) {
                Some(info) => info.throw_types(),
                None => TypeSet::new(),
            },
        };
        let mut types = self.normalize(&declared);

        let call = FunctionCallSite { name: &key, args };
        for extension in self
            .extensions
            .iter()
            .filter(|extension| extension.is_function_supported(&key))
        {
            match extension.throw_types(&call, &types) {
                Ok(refined) => types = self.normalize(&refined),
                Err(unsupported) => {
                    debug!(%unsupported, "falling back to declared throw types");
                }
            }
        }

        types.extend_from(&self.protocol_throw_types(&key, args));
        types
    }
}

#[cfg(test)]
#[path = "../tests/throw_types_tests.rs"]
mod tests;
