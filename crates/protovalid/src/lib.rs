//! Field-constraint validation for Protocol Buffer messages.
//!
//! Constraints are declared per field through the `valid.field` option
//! (see [`types`]) and cover numeric ranges, string shape and collection
//! cardinality. Validation walks a message recursively through `prost-reflect`
//! and records every violated constraint as a [`Finding`] in a [`FieldPath`]
//! tree that mirrors the visited fields.
//!
//! # Quick start
//!
//! For one-off validation, use the [`validate`] convenience function:
//!
//! ```rust,no_run
//! use protovalid::validate;
//! # fn example(msg: impl prost_reflect::ReflectMessage) {
//! match validate(&msg) {
//!     Ok(tree) if tree.is_empty() => { /* message is valid */ }
//!     Ok(tree) => println!("{tree}"),
//!     Err(e) => eprintln!("validation failed: {e}"),
//! }
//! # }
//! ```
//!
//! To read constraints from somewhere other than field options, construct a
//! [`Validator`] with a [`ConstraintRegistry`] or a custom [`ConstraintSource`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use protovalid::types::field_constraints::StringConstraints;
//! use protovalid::{ConstraintRegistry, Validator, ValidatorOption};
//! # fn example(msg: impl prost_reflect::ReflectMessage) {
//! let registry = ConstraintRegistry::new().with(
//!     "geo.Poi.name",
//!     StringConstraints { len_lte: 64, ..Default::default() },
//! );
//! let validator = Validator::with_options(&[ValidatorOption::Constraints(Arc::new(registry))]);
//! let tree = validator.validate(&msg).expect("constraints are readable");
//! for (node, finding) in &tree {
//!     println!("{}: {finding}", node.full_name());
//! }
//! # }
//! ```
//!
//! # Findings and errors
//!
//! A violated constraint is never an error: it is a [`Finding`] carrying the
//! severity declared by the constraint. [`Error`] is reserved for failures that
//! stop a validation:
//!
//! | Type | When |
//! |------|------|
//! | [`ContractError`] | A value does not have the shape its descriptor declares |
//! | [`ConstraintError`] | The constraints of a field cannot be read |
//!
//! # Re-exported types
//!
//! The [`types`] module re-exports `protovalid-types` so consumers do not need
//! to depend on it directly.

#![warn(missing_docs)]

mod config;
mod error;
mod finding;
mod path;
mod validator;

#[cfg(test)]
mod fixtures;

/// Re-export of `protovalid-types`, the `valid` constraint messages and the
/// descriptor of `valid/valid.proto`.
pub use protovalid_types as types;

pub use config::{Filter, ValidatorOption};
pub use error::{ConstraintError, ContractError, Error};
pub use finding::Finding;
pub use path::{FieldPath, Iter};
pub use validator::wrapper::{
    WrapperKind, unwrap_double, unwrap_int32, unwrap_int64, unwrap_string,
};
pub use validator::{
    ConstraintRegistry, ConstraintSource, ExtensionConstraints, Validator, validate,
};
