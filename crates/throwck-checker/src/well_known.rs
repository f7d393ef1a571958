//! Names of the host's built-in types and methods the checker relies on.

pub const ITERATOR: &str = "Iterator";
pub const ITERATOR_AGGREGATE: &str = "IteratorAggregate";
pub const COUNTABLE: &str = "Countable";
pub const JSON_SERIALIZABLE: &str = "JsonSerializable";

pub const DIVISION_BY_ZERO_ERROR: &str = "DivisionByZeroError";
pub const ARITHMETIC_ERROR: &str = "ArithmeticError";
pub const JSON_EXCEPTION: &str = "JsonException";

pub const CONSTRUCTOR: &str = "__construct";
pub const MAGIC_CALL: &str = "__call";
pub const MAGIC_CALL_STATIC: &str = "__callStatic";

pub const ITERATOR_NEXT: &str = "next";
pub const ITERATOR_VALID: &str = "valid";
pub const ITERATOR_CURRENT: &str = "current";
pub const ITERATOR_KEY: &str = "key";
pub const GET_ITERATOR: &str = "getIterator";
pub const COUNT: &str = "count";
pub const JSON_SERIALIZE: &str = "jsonSerialize";

/// `JSON_THROW_ON_ERROR` flag bit of `json_encode`/`json_decode`.
pub const JSON_THROW_ON_ERROR: i64 = 1 << 22;
