use std::sync::Arc;

use prost_reflect::{DynamicMessage, FieldDescriptor};

use crate::validator::ConstraintSource;

/// Options for configuring the `Validator` at construction time.
#[non_exhaustive]
pub enum ValidatorOption {
    /// Read constraints from the given source instead of the `valid.field`
    /// field option.
    Constraints(Arc<dyn ConstraintSource>),

    /// Also visit fields that are not populated, validating their default
    /// value. Unset singular message fields are still skipped.
    IncludeUnpopulated,

    /// Only visit fields accepted by this filter.
    Filter(Arc<dyn Filter>),
}

/// Controls which fields are visited.
pub trait Filter: Send + Sync {
    /// Returns true if the given field of `message` should be validated.
    /// Rejected fields get no node in the result tree.
    fn should_validate_field(&self, message: &DynamicMessage, field: &FieldDescriptor) -> bool;
}

/// A filter that always validates everything.
pub(crate) struct NopFilter;

impl Filter for NopFilter {
    fn should_validate_field(&self, _message: &DynamicMessage, _field: &FieldDescriptor) -> bool {
        true
    }
}

/// Runtime configuration shared by every walk of a validator.
pub(crate) struct ValidationConfig {
    pub filter: Arc<dyn Filter>,
    pub include_unpopulated: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            filter: Arc::new(NopFilter),
            include_unpopulated: false,
        }
    }
}
