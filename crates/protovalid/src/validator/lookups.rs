use prost_reflect::{FieldDescriptor, Kind};

use super::wrapper::WrapperKind;

/// How a single field value (or list element) is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Double,
    Int32,
    String,
    /// One of the boxed scalars validated like its payload.
    Wrapper(WrapperKind),
    /// Any other message, walked recursively.
    Message,
    /// Kinds without constraint support (bool, enum, bytes, maps, other numbers).
    Unsupported,
}

impl ValueKind {
    /// Classifies the values of a field. For repeated fields this is the kind
    /// of each element.
    pub(crate) fn of(field: &FieldDescriptor) -> Self {
        if field.is_map() {
            return Self::Unsupported;
        }
        match field.kind() {
            Kind::Double => Self::Double,
            Kind::Int32 => Self::Int32,
            Kind::String => Self::String,
            Kind::Message(message) => match WrapperKind::from_full_name(message.full_name()) {
                Some(WrapperKind::Int64) | None => Self::Message,
                Some(wrapper) => Self::Wrapper(wrapper),
            },
            _ => Self::Unsupported,
        }
    }
}
