use std::collections::HashMap;

use prost_reflect::FieldDescriptor;

use protovalid_types::field_constraints::{
    DoubleConstraints, Int32Constraints, RepeatedConstraints, StringConstraints, Type,
};
use protovalid_types::{FieldConstraints, FieldConstraintsExt};

use crate::error::ConstraintError;

/// Source of the constraints declared for a field.
///
/// Only [`field_constraints`](Self::field_constraints) must be provided; the
/// typed lookups select the matching variant and report `None` when the field
/// declares no constraint of that kind.
pub trait ConstraintSource: Send + Sync {
    /// Returns all constraints declared for the field, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the declared constraints cannot be read.
    fn field_constraints(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<FieldConstraints>, ConstraintError>;

    /// Constraints for a `double` field.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`field_constraints`](Self::field_constraints).
    fn lookup_double(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<DoubleConstraints>, ConstraintError> {
        Ok(match self.field_constraints(field)?.and_then(|c| c.r#type) {
            Some(Type::Double(c)) => Some(c),
            _ => None,
        })
    }

    /// Constraints for an `int32` field.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`field_constraints`](Self::field_constraints).
    fn lookup_int32(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<Int32Constraints>, ConstraintError> {
        Ok(match self.field_constraints(field)?.and_then(|c| c.r#type) {
            Some(Type::Int32(c)) => Some(c),
            _ => None,
        })
    }

    /// Constraints for a `string` field.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`field_constraints`](Self::field_constraints).
    fn lookup_string(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<StringConstraints>, ConstraintError> {
        Ok(match self.field_constraints(field)?.and_then(|c| c.r#type) {
            Some(Type::String(c)) => Some(c),
            _ => None,
        })
    }

    /// Constraints for a repeated field as a whole.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`field_constraints`](Self::field_constraints).
    fn lookup_repeated(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<RepeatedConstraints>, ConstraintError> {
        Ok(match self.field_constraints(field)?.and_then(|c| c.r#type) {
            Some(Type::Repeated(c)) => Some(c),
            _ => None,
        })
    }
}

/// Reads constraints from the `valid.field` option of each field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionConstraints;

impl ConstraintSource for ExtensionConstraints {
    fn field_constraints(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<FieldConstraints>, ConstraintError> {
        field.field_constraints().map_err(|err| ConstraintError {
            field: field.full_name().to_string(),
            cause: err.to_string(),
        })
    }
}

/// Constraints keyed by the fully qualified field name, e.g.
/// `geo.Coordinate.latitude`.
#[derive(Debug, Clone, Default)]
pub struct ConstraintRegistry {
    fields: HashMap<String, FieldConstraints>,
}

impl ConstraintRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the constraints of a field, replacing earlier ones.
    pub fn insert(&mut self, full_name: impl Into<String>, constraints: impl Into<FieldConstraints>) {
        self.fields.insert(full_name.into(), constraints.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, full_name: impl Into<String>, constraints: impl Into<FieldConstraints>) -> Self {
        self.insert(full_name, constraints);
        self
    }

    /// Number of fields with registered constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no constraints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ConstraintSource for ConstraintRegistry {
    fn field_constraints(
        &self,
        field: &FieldDescriptor,
    ) -> Result<Option<FieldConstraints>, ConstraintError> {
        Ok(self.fields.get(field.full_name()).cloned())
    }
}
