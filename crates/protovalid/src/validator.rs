use prost_reflect::ReflectMessage;
use std::sync::{Arc, LazyLock};

use crate::config::{ValidationConfig, ValidatorOption};
use crate::error::Error;
use crate::path::FieldPath;

mod constraints;
mod lookups;
mod rules;
mod walker;
pub(crate) mod wrapper;

pub use constraints::{ConstraintRegistry, ConstraintSource, ExtensionConstraints};

use rules::PatternCache;
use walker::Walker;

/// Thread-safe validator for Protocol Buffer messages.
///
/// Validates messages against the constraints of their fields and reports
/// every violation as a finding in a [`FieldPath`] tree. Compiled patterns are
/// cached for reuse across calls.
pub struct Validator {
    constraints: Arc<dyn ConstraintSource>,
    config: ValidationConfig,
    patterns: PatternCache,
}

impl Validator {
    /// Create a new `Validator` reading constraints from the `valid.field`
    /// field option.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constraints: Arc::new(ExtensionConstraints),
            config: ValidationConfig::default(),
            patterns: PatternCache::new(),
        }
    }

    /// Create a new `Validator` with the given options.
    #[must_use]
    pub fn with_options(options: &[ValidatorOption]) -> Self {
        let mut validator = Self::new();
        for opt in options {
            match opt {
                ValidatorOption::Constraints(source) => {
                    validator.constraints = Arc::clone(source);
                }
                ValidatorOption::IncludeUnpopulated => validator.config.include_unpopulated = true,
                ValidatorOption::Filter(filter) => validator.config.filter = Arc::clone(filter),
            }
        }
        validator
    }

    /// Validate a message against the constraints of its fields.
    ///
    /// Constraint violations are not errors: they are returned as findings in
    /// the tree, which mirrors the visited fields of `msg`.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the constraints of a field cannot be read or a
    /// value does not have the shape its descriptor declares. The walk stops
    /// at the first such error.
    pub fn validate<M: ReflectMessage>(&self, msg: &M) -> Result<FieldPath, Error> {
        let dynamic = msg.transcode_to_dynamic();
        let descriptor = dynamic.descriptor();
        tracing::debug!(message_type = descriptor.full_name(), "validating message");

        let walker = Walker {
            constraints: self.constraints.as_ref(),
            config: &self.config,
            patterns: &self.patterns,
        };
        let mut root = FieldPath::root();
        if let Err(err) = walker.walk_message(&mut root, &dynamic) {
            tracing::debug!(
                message_type = descriptor.full_name(),
                error = %err,
                "validation aborted"
            );
            return Err(err);
        }

        tracing::debug!(
            message_type = descriptor.full_name(),
            findings = root.finding_count(),
            "validated message"
        );
        Ok(root)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::new);

/// Validate a message using a global `Validator` instance.
///
/// This is a convenience function that uses a shared, lazily-initialized
/// validator reading constraints from the `valid.field` field option.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<M: ReflectMessage>(msg: &M) -> Result<FieldPath, Error> {
    GLOBAL_VALIDATOR.validate(msg)
}
