use prost_reflect::{DynamicMessage, FieldDescriptor, Kind, ReflectMessage, Value};

use crate::config::ValidationConfig;
use crate::error::{ContractError, Error};
use crate::path::FieldPath;

use super::constraints::ConstraintSource;
use super::lookups::ValueKind;
use super::rules::{
    PatternCache, evaluate_double, evaluate_int32, evaluate_repeated, evaluate_string,
};
use super::wrapper::{WrapperKind, unwrap_double, unwrap_int32, unwrap_string};

/// One recursive traversal of a message, attaching findings to a
/// [`FieldPath`] tree as it goes.
pub(crate) struct Walker<'a> {
    pub constraints: &'a dyn ConstraintSource,
    pub config: &'a ValidationConfig,
    pub patterns: &'a PatternCache,
}

impl Walker<'_> {
    /// Visits the fields of `msg` in declaration order, creating their nodes
    /// under `parent`.
    pub fn walk_message(&self, parent: &mut FieldPath, msg: &DynamicMessage) -> Result<(), Error> {
        for field in msg.descriptor().fields() {
            if !self.should_visit(msg, &field) {
                continue;
            }

            let kind = ValueKind::of(&field);
            let value = msg.get_field(&field);

            if field.is_list() {
                let items = value.as_list().unwrap_or_default();
                let node = parent.get_or_create_child(field.name());
                if let Some(c) = self.constraints.lookup_repeated(&field)? {
                    evaluate_repeated(node, items.len(), &c);
                }
                for (i, item) in items.iter().enumerate() {
                    let node = parent.get_or_create_child(&format!("{}[{i}]", field.name()));
                    self.walk_value(node, &field, kind, item)?;
                }
            } else {
                let node = parent.get_or_create_child(field.name());
                self.walk_value(node, &field, kind, &value)?;
            }
        }
        Ok(())
    }

    fn should_visit(&self, msg: &DynamicMessage, field: &FieldDescriptor) -> bool {
        if !self.config.filter.should_validate_field(msg, field) {
            return false;
        }
        if msg.has_field(field) {
            return true;
        }
        self.config.include_unpopulated
            && (field.is_list() || !matches!(field.kind(), Kind::Message(_)))
    }

    /// Validates a single value (a singular field or one list element) at `node`.
    fn walk_value(
        &self,
        node: &mut FieldPath,
        field: &FieldDescriptor,
        kind: ValueKind,
        value: &Value,
    ) -> Result<(), Error> {
        tracing::trace!(path = node.full_name(), ?kind, "visiting field");

        match kind {
            ValueKind::Double => {
                if let Some(c) = self.constraints.lookup_double(field)? {
                    let v = scalar(value.as_f64(), field)?;
                    evaluate_double(node, v, &c);
                }
            }
            ValueKind::Int32 => {
                if let Some(c) = self.constraints.lookup_int32(field)? {
                    let v = scalar(value.as_i32(), field)?;
                    evaluate_int32(node, v, &c);
                }
            }
            ValueKind::String => {
                if let Some(c) = self.constraints.lookup_string(field)? {
                    let v = scalar(value.as_str(), field)?;
                    evaluate_string(node, v, &c, self.patterns);
                }
            }
            ValueKind::Wrapper(WrapperKind::Double) => {
                if let Some(c) = self.constraints.lookup_double(field)? {
                    evaluate_double(node, unwrap_double(value)?, &c);
                }
            }
            ValueKind::Wrapper(WrapperKind::Int32) => {
                if let Some(c) = self.constraints.lookup_int32(field)? {
                    evaluate_int32(node, unwrap_int32(value)?, &c);
                }
            }
            ValueKind::Wrapper(WrapperKind::String) => {
                if let Some(c) = self.constraints.lookup_string(field)? {
                    evaluate_string(node, &unwrap_string(value)?, &c, self.patterns);
                }
            }
            ValueKind::Wrapper(WrapperKind::Int64) | ValueKind::Message => {
                let msg = scalar(value.as_message(), field)?;
                self.walk_message(node, msg)?;
            }
            ValueKind::Unsupported => {}
        }
        Ok(())
    }
}

fn scalar<T>(value: Option<T>, field: &FieldDescriptor) -> Result<T, ContractError> {
    value.ok_or_else(|| {
        ContractError::new(format!(
            "value of {} does not match its declared kind",
            field.full_name()
        ))
    })
}
