/// Top-level error type returned by validation.
///
/// Constraint violations are not errors: they are reported as findings in the
/// returned [`FieldPath`](crate::FieldPath). An `Error` means the validation
/// itself could not be carried out.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller broke a contract of the engine, e.g. unwrapped a value that
    /// is not a well-known wrapper message.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The constraint source failed to produce a constraint definition.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// Returned when the engine is used outside of its contract.
#[derive(Debug, thiserror::Error)]
#[error("contract violation: {cause}")]
pub struct ContractError {
    /// Description of the broken contract.
    pub cause: String,
}

impl ContractError {
    pub(crate) fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Returned when the constraints of a field cannot be read.
#[derive(Debug, thiserror::Error)]
#[error("constraint error on {field}: {cause}")]
pub struct ConstraintError {
    /// Fully qualified name of the field whose constraints failed to load.
    pub field: String,
    /// Description of the failure.
    pub cause: String,
}
