//! Per-type constraint evaluators.
//!
//! Each evaluator takes a value and the resolved constraints of its field and
//! appends its findings to the given node. Absent constraints are handled by
//! the caller, so every evaluator runs against a declared constraint.

mod number;
mod repeated;
mod string;

pub(crate) use number::{evaluate_double, evaluate_int32};
pub(crate) use repeated::evaluate_repeated;
pub(crate) use string::{PatternCache, evaluate_string};
