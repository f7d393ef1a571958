//! Dynamic throw-type extensions for free functions.
//!
//! Some functions throw depending on their arguments: `intdiv` only when the
//! divisor may be zero, `json_encode` only when asked to. An extension
//! refines the callee's declared throw set from the call's argument types.
//! When it cannot make sense of a call it returns [`UnsupportedCallShape`]
//! and inference falls back to the declared set.

use crate::error::UnsupportedCallShape;
use crate::well_known;
use throwck_solver::{ClassName, Type, TypeSet};

/// A call of a free function as seen by an extension.
#[derive(Clone, Copy, Debug)]
pub struct FunctionCallSite<'c> {
    pub name: &'c str,
    pub args: &'c [Type],
}

impl<'c> FunctionCallSite<'c> {
    fn arg(&self, position: usize) -> Result<&'c Type, UnsupportedCallShape> {
        self.args.get(position).ok_or_else(|| UnsupportedCallShape {
            function: self.name.to_string(),
            position,
        })
    }
}

pub trait FunctionThrowTypeExtension {
    /// `name` is lower-cased and has no leading namespace separator.
    fn is_function_supported(&self, name: &str) -> bool;

    fn throw_types(
        &self,
        call: &FunctionCallSite<'_>,
        declared: &TypeSet,
    ) -> Result<TypeSet, UnsupportedCallShape>;
}

/// `intdiv($dividend, $divisor)`
#[derive(Clone, Copy, Debug, Default)]
pub struct IntdivThrowTypeExtension;

impl FunctionThrowTypeExtension for IntdivThrowTypeExtension {
    fn is_function_supported(&self, name: &str) -> bool {
        name == "intdiv"
    }

    fn throw_types(
        &self,
        call: &FunctionCallSite<'_>,
        declared: &TypeSet,
    ) -> Result<TypeSet, UnsupportedCallShape> {
        let dividend = call.arg(0)?.int_values();
        let divisor = call.arg(1)?.int_values();

        let mut types = declared.clone();
        if divisor.may_be(0) {
            types.insert(ClassName::new(well_known::DIVISION_BY_ZERO_ERROR));
        }
        if divisor.may_be(-1) && dividend.may_be(i64::MIN) {
            types.insert(ClassName::new(well_known::ARITHMETIC_ERROR));
        }
        Ok(types)
    }
}

/// `json_encode($value, $flags)` and `json_decode($json, $assoc, $depth, $flags)`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonThrowOnErrorExtension;

impl JsonThrowOnErrorExtension {
    fn flags_position(name: &str) -> usize {
        if name == "json_decode" { 3 } else { 1 }
    }
}

impl FunctionThrowTypeExtension for JsonThrowOnErrorExtension {
    fn is_function_supported(&self, name: &str) -> bool {
        matches!(name, "json_encode" | "json_decode")
    }

    fn throw_types(
        &self,
        call: &FunctionCallSite<'_>,
        declared: &TypeSet,
    ) -> Result<TypeSet, UnsupportedCallShape> {
        if call.args.is_empty() {
            return Err(UnsupportedCallShape {
                function: call.name.to_string(),
                position: 0,
            });
        }

        let mut types = declared.clone();
        let Some(flags) = call.args.get(Self::flags_position(call.name)) else {
            return Ok(types);
        };

        let flags = flags.int_values();
        let may_throw = flags.residual
            || !flags.ranges.is_empty()
            || flags
                .constants
                .iter()
                .any(|&value| value & well_known::JSON_THROW_ON_ERROR != 0);
        if may_throw {
            types.insert(ClassName::new(well_known::JSON_EXCEPTION));
        }
        Ok(types)
    }
}

/// The extensions every checker starts with.
pub fn builtin_extensions() -> Vec<Box<dyn FunctionThrowTypeExtension>> {
    vec![
        Box::new(IntdivThrowTypeExtension),
        Box::new(JsonThrowOnErrorExtension),
    ]
}

#[cfg(test)]
#[path = "../tests/extensions_tests.rs"]
mod tests;
