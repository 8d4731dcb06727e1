use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, OneofDescriptorProto,
};

use crate::{FIELD_EXTENSION_NUMBER, Level};

/// Path under which `valid/valid.proto` is registered in a descriptor pool.
pub const FILE_NAME: &str = "valid/valid.proto";

/// Returns the `FileDescriptorProto` of `valid/valid.proto`.
///
/// The file imports `google/protobuf/descriptor.proto`, which must already be
/// present in the pool the descriptor is added to.
#[must_use]
pub fn file_descriptor_proto() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(FILE_NAME.to_string()),
        package: Some("valid".to_string()),
        dependency: vec!["google/protobuf/descriptor.proto".to_string()],
        message_type: vec![field_constraints()],
        enum_type: vec![level()],
        extension: vec![FieldDescriptorProto {
            extendee: Some(".google.protobuf.FieldOptions".to_string()),
            ..message_field(
                "field",
                FIELD_EXTENSION_NUMBER,
                ".valid.FieldConstraints",
                None,
            )
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

fn field_constraints() -> DescriptorProto {
    const PREFIX: &str = ".valid.FieldConstraints";

    DescriptorProto {
        name: Some("FieldConstraints".to_string()),
        field: vec![
            message_field("double", 1, &format!("{PREFIX}.DoubleConstraints"), Some(0)),
            message_field("int32", 2, &format!("{PREFIX}.Int32Constraints"), Some(0)),
            message_field("string", 3, &format!("{PREFIX}.StringConstraints"), Some(0)),
            message_field("repeated", 4, &format!("{PREFIX}.RepeatedConstraints"), Some(0)),
        ],
        nested_type: vec![
            double_constraints(),
            int32_constraints(),
            string_constraints(),
            repeated_constraints(),
        ],
        oneof_decl: vec![oneof("type")],
        ..Default::default()
    }
}

fn double_constraints() -> DescriptorProto {
    DescriptorProto {
        name: Some("DoubleConstraints".to_string()),
        field: vec![
            scalar_field("gte", 1, Type::Double, Some(0)),
            scalar_field("gt", 2, Type::Double, Some(0)),
            scalar_field("lte", 3, Type::Double, Some(1)),
            scalar_field("lt", 4, Type::Double, Some(1)),
            scalar_field("eps", 5, Type::Double, None),
            level_field(6),
            scalar_field("msg", 7, Type::String, None),
        ],
        oneof_decl: vec![oneof("min"), oneof("max")],
        ..Default::default()
    }
}

fn int32_constraints() -> DescriptorProto {
    DescriptorProto {
        name: Some("Int32Constraints".to_string()),
        field: vec![
            scalar_field("gte", 1, Type::Int32, Some(0)),
            scalar_field("gt", 2, Type::Int32, Some(0)),
            scalar_field("lte", 3, Type::Int32, Some(1)),
            scalar_field("lt", 4, Type::Int32, Some(1)),
            scalar_field("eq", 5, Type::Int32, None),
            repeated(scalar_field("in", 6, Type::Int32, None)),
            repeated(scalar_field("not_in", 7, Type::Int32, None)),
            level_field(8),
            scalar_field("msg", 9, Type::String, None),
        ],
        oneof_decl: vec![oneof("min"), oneof("max")],
        ..Default::default()
    }
}

fn string_constraints() -> DescriptorProto {
    DescriptorProto {
        name: Some("StringConstraints".to_string()),
        field: vec![
            scalar_field("empty", 1, Type::Bool, Some(0)),
            scalar_field("not_empty", 2, Type::Bool, Some(0)),
            scalar_field("len_eq", 3, Type::Uint32, None),
            scalar_field("len_gte", 4, Type::Uint32, None),
            scalar_field("len_lte", 5, Type::Uint32, None),
            scalar_field("eq", 6, Type::String, None),
            scalar_field("pattern", 7, Type::String, None),
            level_field(8),
            scalar_field("msg", 9, Type::String, None),
        ],
        oneof_decl: vec![oneof("empty_type")],
        ..Default::default()
    }
}

fn repeated_constraints() -> DescriptorProto {
    DescriptorProto {
        name: Some("RepeatedConstraints".to_string()),
        field: vec![
            scalar_field("empty", 1, Type::Bool, Some(0)),
            scalar_field("not_empty", 2, Type::Bool, Some(0)),
            scalar_field("len_eq", 3, Type::Uint32, None),
            scalar_field("len_gte", 4, Type::Uint32, None),
            scalar_field("len_lte", 5, Type::Uint32, None),
            level_field(6),
            scalar_field("msg", 7, Type::String, None),
        ],
        oneof_decl: vec![oneof("empty_type")],
        ..Default::default()
    }
}

fn level() -> EnumDescriptorProto {
    let values = [Level::Unspecified, Level::Info, Level::Warning, Level::Error];
    EnumDescriptorProto {
        name: Some("Level".to_string()),
        value: values
            .iter()
            .map(|level| EnumValueDescriptorProto {
                name: Some(level.as_str_name().to_string()),
                number: Some(*level as i32),
                options: None,
            })
            .collect(),
        ..Default::default()
    }
}

fn scalar_field(name: &str, number: u32, ty: Type, oneof_index: Option<i32>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: i32::try_from(number).ok(),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        oneof_index,
        ..Default::default()
    }
}

fn message_field(
    name: &str,
    number: u32,
    type_name: &str,
    oneof_index: Option<i32>,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar_field(name, number, Type::Message, oneof_index)
    }
}

fn level_field(number: u32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(".valid.Level".to_string()),
        ..scalar_field("level", number, Type::Enum, None)
    }
}

fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field
    }
}

fn oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        options: None,
    }
}
