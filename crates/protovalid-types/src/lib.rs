//! Protobuf types for the `valid` field-constraint schema.
//!
//! This crate provides:
//!
//! - The message and enum types of `valid/valid.proto`
//!   (e.g. [`FieldConstraints`], [`Level`]), as `prost` messages.
//! - [`file_descriptor_proto`], the descriptor of `valid/valid.proto`, for
//!   registering the schema in a `prost-reflect` descriptor pool.
//! - [`FieldConstraintsExt`] for reading the `valid.field` option off a
//!   [`FieldDescriptor`].
//!
//! # Usage
//!
//! Most users do not need this crate directly: the `protovalid` crate
//! re-exports it as its `types` module.

#![warn(missing_docs)]

#[allow(
    missing_docs,
    clippy::doc_markdown,
    clippy::must_use_candidate,
    clippy::trivially_copy_pass_by_ref
)]
mod proto;

mod descriptor;

use prost_reflect::FieldDescriptor;

pub use descriptor::{FILE_NAME, file_descriptor_proto};
pub use proto::*;

/// Full name of the `google.protobuf.FieldOptions` extension carrying [`FieldConstraints`].
pub const FIELD_EXTENSION_NAME: &str = "valid.field";

/// Field number of the `valid.field` extension.
pub const FIELD_EXTENSION_NUMBER: u32 = 50001;

macro_rules! impl_from_constraints {
    ($($variant:ident($ty:ident)),* $(,)?) => {
        $(
            impl From<field_constraints::$ty> for FieldConstraints {
                fn from(constraints: field_constraints::$ty) -> Self {
                    Self {
                        r#type: Some(field_constraints::Type::$variant(constraints)),
                    }
                }
            }
        )*
    };
}

impl_from_constraints!(
    Double(DoubleConstraints),
    Int32(Int32Constraints),
    String(StringConstraints),
    Repeated(RepeatedConstraints),
);

/// Extension trait for extracting `valid.field` constraints from a field descriptor.
pub trait FieldConstraintsExt {
    /// Returns the `FieldConstraints` for this field, if any.
    ///
    /// Returns `Ok(None)` when the descriptor pool does not know the
    /// `valid.field` extension or the field does not set it.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension value cannot be transcoded to `FieldConstraints`.
    fn field_constraints(&self) -> anyhow::Result<Option<FieldConstraints>>;
}

impl FieldConstraintsExt for FieldDescriptor {
    fn field_constraints(&self) -> anyhow::Result<Option<FieldConstraints>> {
        let Some(extension) = self
            .parent_pool()
            .get_extension_by_name(FIELD_EXTENSION_NAME)
        else {
            return Ok(None);
        };

        let options = self.options();
        if !options.has_extension(&extension) {
            return Ok(None);
        }
        match options.get_extension(&extension).as_message() {
            Some(c) => Ok(Some(c.transcode_to::<FieldConstraints>()?)),
            None => Ok(None),
        }
    }
}
