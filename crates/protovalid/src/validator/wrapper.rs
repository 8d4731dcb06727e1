use prost_reflect::{DynamicMessage, ReflectMessage, Value};

use crate::error::ContractError;

/// Well-known wrapper messages that box a single scalar `value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// `google.protobuf.DoubleValue`
    Double,
    /// `google.protobuf.Int32Value`
    Int32,
    /// `google.protobuf.Int64Value`
    Int64,
    /// `google.protobuf.StringValue`
    String,
}

impl WrapperKind {
    /// Classifies a message type by its full name; `None` if it is not a
    /// recognized wrapper.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        match full_name {
            "google.protobuf.DoubleValue" => Some(Self::Double),
            "google.protobuf.Int32Value" => Some(Self::Int32),
            "google.protobuf.Int64Value" => Some(Self::Int64),
            "google.protobuf.StringValue" => Some(Self::String),
            _ => None,
        }
    }

    /// Full name of the wrapper message type.
    #[must_use]
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Double => "google.protobuf.DoubleValue",
            Self::Int32 => "google.protobuf.Int32Value",
            Self::Int64 => "google.protobuf.Int64Value",
            Self::String => "google.protobuf.StringValue",
        }
    }
}

/// Returns the payload of a `google.protobuf.DoubleValue`.
///
/// # Errors
///
/// Returns a [`ContractError`] if `value` is not a `google.protobuf.DoubleValue` message.
pub fn unwrap_double(value: &Value) -> Result<f64, ContractError> {
    let payload = payload(value, WrapperKind::Double)?;
    payload
        .as_f64()
        .ok_or_else(|| malformed(WrapperKind::Double, &payload))
}

/// Returns the payload of a `google.protobuf.Int32Value`.
///
/// # Errors
///
/// Returns a [`ContractError`] if `value` is not a `google.protobuf.Int32Value` message.
pub fn unwrap_int32(value: &Value) -> Result<i32, ContractError> {
    let payload = payload(value, WrapperKind::Int32)?;
    payload
        .as_i32()
        .ok_or_else(|| malformed(WrapperKind::Int32, &payload))
}

/// Returns the payload of a `google.protobuf.Int64Value`.
///
/// # Errors
///
/// Returns a [`ContractError`] if `value` is not a `google.protobuf.Int64Value` message.
pub fn unwrap_int64(value: &Value) -> Result<i64, ContractError> {
    let payload = payload(value, WrapperKind::Int64)?;
    payload
        .as_i64()
        .ok_or_else(|| malformed(WrapperKind::Int64, &payload))
}

/// Returns the payload of a `google.protobuf.StringValue`.
///
/// # Errors
///
/// Returns a [`ContractError`] if `value` is not a `google.protobuf.StringValue` message.
pub fn unwrap_string(value: &Value) -> Result<String, ContractError> {
    let payload = payload(value, WrapperKind::String)?;
    payload
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| malformed(WrapperKind::String, &payload))
}

/// Reads the `value` field of a wrapper message, the type default when unset.
fn payload(value: &Value, expected: WrapperKind) -> Result<Value, ContractError> {
    let Some(message) = value.as_message() else {
        return Err(ContractError::new(format!(
            "unsupported value, require {}",
            expected.full_name()
        )));
    };
    if WrapperKind::from_full_name(message.descriptor().full_name()) != Some(expected) {
        return Err(unsupported_message(message, expected));
    }
    message
        .get_field_by_name("value")
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| unsupported_message(message, expected))
}

fn unsupported_message(message: &DynamicMessage, expected: WrapperKind) -> ContractError {
    ContractError::new(format!(
        "unsupported message type {}, require {}",
        message.descriptor().full_name(),
        expected.full_name()
    ))
}

fn malformed(kind: WrapperKind, payload: &Value) -> ContractError {
    ContractError::new(format!(
        "{} carries an unexpected payload {payload:?}",
        kind.full_name()
    ))
}
