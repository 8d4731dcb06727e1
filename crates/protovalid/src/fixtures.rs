//! Descriptor pool shared by the unit tests.
//!
//! `geo.proto` is proto2 so explicitly set defaults count as present:
//!
//! ```proto
//! message Coordinate {
//!   optional double longitude = 1 [(valid.field).double = {gte: -180, lte: 180}];
//!   optional double latitude = 2 [(valid.field).double = {gte: -90, lte: 90}];
//! }
//! message Poi {
//!   optional string name = 1 [(valid.field).string.not_empty = true];
//!   optional Coordinate coordinate = 2;
//! }
//! message Track {
//!   optional string name = 1;
//!   optional google.protobuf.Int32Value width = 2;
//!   optional google.protobuf.DoubleValue weight = 3;
//!   optional google.protobuf.StringValue label = 4;
//!   repeated Coordinate coordinates = 5;
//!   repeated int32 counts = 6;
//!   repeated google.protobuf.DoubleValue ratios = 7;
//!   optional bool visible = 8;
//!   optional google.protobuf.Int64Value serial = 9;
//!   map<string, string> attributes = 10;
//! }
//! ```

use std::sync::LazyLock;

use prost::Message;
use prost::encoding::{WireType, encode_key, encode_varint};
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, Value};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, MessageOptions,
    descriptor_proto::ExtensionRange,
};

use protovalid_types::field_constraints::{
    DoubleConstraints, StringConstraints, double_constraints, string_constraints,
};
use protovalid_types::{FIELD_EXTENSION_NUMBER, FieldConstraints, Level};

static POOL: LazyLock<DescriptorPool> = LazyLock::new(|| {
    DescriptorPool::decode(descriptor_set().as_slice()).expect("fixture descriptors are valid")
});

pub(crate) fn descriptor(full_name: &str) -> MessageDescriptor {
    POOL.get_message_by_name(full_name)
        .unwrap_or_else(|| panic!("fixture message {full_name} exists"))
}

pub(crate) fn message(full_name: &str) -> DynamicMessage {
    DynamicMessage::new(descriptor(full_name))
}

pub(crate) fn double_value(v: f64) -> Value {
    wrapper("google.protobuf.DoubleValue", Value::F64(v))
}

pub(crate) fn int32_value(v: i32) -> Value {
    wrapper("google.protobuf.Int32Value", Value::I32(v))
}

pub(crate) fn int64_value(v: i64) -> Value {
    wrapper("google.protobuf.Int64Value", Value::I64(v))
}

pub(crate) fn string_value(v: &str) -> Value {
    wrapper("google.protobuf.StringValue", Value::String(v.to_string()))
}

/// A `geo.Coordinate` with both fields set.
pub(crate) fn coordinate(longitude: f64, latitude: f64) -> DynamicMessage {
    let mut coordinate = message("geo.Coordinate");
    coordinate.set_field_by_name("longitude", Value::F64(longitude));
    coordinate.set_field_by_name("latitude", Value::F64(latitude));
    coordinate
}

fn wrapper(full_name: &str, payload: Value) -> Value {
    let mut wrapper = message(full_name);
    wrapper.set_field_by_name("value", payload);
    Value::Message(wrapper)
}

fn descriptor_set() -> Vec<u8> {
    let files = [
        descriptor_file(),
        wrappers_file(),
        protovalid_types::file_descriptor_proto().encode_to_vec(),
        geo_file(),
    ];
    let mut set = Vec::new();
    for file in &files {
        length_delimited(1, file, &mut set);
    }
    set
}

/// The parts of `google/protobuf/descriptor.proto` the fixtures rely on.
fn descriptor_file() -> Vec<u8> {
    let extensible = |name: &str, field: Vec<FieldDescriptorProto>| DescriptorProto {
        name: Some(name.to_string()),
        field,
        extension_range: vec![ExtensionRange {
            start: Some(1000),
            end: Some(536_870_912),
            options: None,
        }],
        ..Default::default()
    };
    FileDescriptorProto {
        name: Some("google/protobuf/descriptor.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![
            extensible("FieldOptions", Vec::new()),
            extensible("MessageOptions", vec![scalar("map_entry", 7, Type::Bool)]),
        ],
        syntax: Some("proto2".to_string()),
        ..Default::default()
    }
    .encode_to_vec()
}

fn wrappers_file() -> Vec<u8> {
    let wrapper = |name: &str, ty: Type| DescriptorProto {
        name: Some(name.to_string()),
        field: vec![scalar("value", 1, ty)],
        ..Default::default()
    };
    FileDescriptorProto {
        name: Some("google/protobuf/wrappers.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![
            wrapper("DoubleValue", Type::Double),
            wrapper("Int32Value", Type::Int32),
            wrapper("Int64Value", Type::Int64),
            wrapper("StringValue", Type::String),
            wrapper("BoolValue", Type::Bool),
        ],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
    .encode_to_vec()
}

fn geo_file() -> Vec<u8> {
    let coordinate = message_bytes(
        "Coordinate",
        Vec::new(),
        vec![
            constrained(scalar("longitude", 1, Type::Double), bounds(-180.0, 180.0)),
            constrained(scalar("latitude", 2, Type::Double), bounds(-90.0, 90.0)),
        ],
    );

    let poi = message_bytes(
        "Poi",
        Vec::new(),
        vec![
            constrained(
                scalar("name", 1, Type::String),
                StringConstraints {
                    empty_type: Some(string_constraints::EmptyType::NotEmpty(true)),
                    level: Level::Error as i32,
                    ..Default::default()
                },
            ),
            message_field("coordinate", 2, ".geo.Coordinate").encode_to_vec(),
        ],
    );

    let attributes_entry = DescriptorProto {
        name: Some("AttributesEntry".to_string()),
        field: vec![scalar("key", 1, Type::String), scalar("value", 2, Type::String)],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };
    let track_fields = [
        scalar("name", 1, Type::String),
        message_field("width", 2, ".google.protobuf.Int32Value"),
        message_field("weight", 3, ".google.protobuf.DoubleValue"),
        message_field("label", 4, ".google.protobuf.StringValue"),
        repeated(message_field("coordinates", 5, ".geo.Coordinate")),
        repeated(scalar("counts", 6, Type::Int32)),
        repeated(message_field("ratios", 7, ".google.protobuf.DoubleValue")),
        scalar("visible", 8, Type::Bool),
        message_field("serial", 9, ".google.protobuf.Int64Value"),
        repeated(message_field("attributes", 10, ".geo.Track.AttributesEntry")),
    ];
    let track = message_bytes(
        "Track",
        vec![attributes_entry],
        track_fields.iter().map(Message::encode_to_vec).collect(),
    );

    let mut file = FileDescriptorProto {
        name: Some("geo/geo.proto".to_string()),
        package: Some("geo".to_string()),
        dependency: vec![
            "google/protobuf/wrappers.proto".to_string(),
            protovalid_types::FILE_NAME.to_string(),
        ],
        syntax: Some("proto2".to_string()),
        ..Default::default()
    }
    .encode_to_vec();
    for message in [coordinate, poi, track] {
        length_delimited(4, &message, &mut file);
    }
    file
}

fn bounds(gte: f64, lte: f64) -> DoubleConstraints {
    DoubleConstraints {
        min: Some(double_constraints::Min::Gte(gte)),
        max: Some(double_constraints::Max::Lte(lte)),
        level: Level::Error as i32,
        ..Default::default()
    }
}

/// Encodes a message descriptor whose fields are given pre-encoded, so they
/// may carry extension options.
fn message_bytes(name: &str, nested: Vec<DescriptorProto>, fields: Vec<Vec<u8>>) -> Vec<u8> {
    let mut bytes = DescriptorProto {
        name: Some(name.to_string()),
        nested_type: nested,
        ..Default::default()
    }
    .encode_to_vec();
    for field in &fields {
        length_delimited(2, field, &mut bytes);
    }
    bytes
}

/// Encodes a field with a `valid.field` option.
fn constrained(field: FieldDescriptorProto, constraints: impl Into<FieldConstraints>) -> Vec<u8> {
    let mut options = Vec::new();
    length_delimited(
        FIELD_EXTENSION_NUMBER,
        &constraints.into().encode_to_vec(),
        &mut options,
    );
    let mut bytes = field.encode_to_vec();
    length_delimited(8, &options, &mut bytes);
    bytes
}

fn length_delimited(tag: u32, payload: &[u8], buf: &mut Vec<u8>) {
    encode_key(tag, WireType::LengthDelimited, buf);
    encode_varint(payload.len() as u64, buf);
    buf.extend_from_slice(payload);
}

fn scalar(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, Type::Message)
    }
}

fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field
    }
}

#[test]
fn pool_exposes_geo_messages() {
    let track = descriptor("geo.Track");
    let names: Vec<_> = track.fields().map(|f| f.name().to_string()).collect();
    assert_eq!(
        names,
        [
            "name",
            "width",
            "weight",
            "label",
            "coordinates",
            "counts",
            "ratios",
            "visible",
            "serial",
            "attributes"
        ]
    );
    assert!(
        track
            .get_field_by_name("attributes")
            .is_some_and(|f| f.is_map())
    );
    assert!(
        POOL.get_extension_by_name(protovalid_types::FIELD_EXTENSION_NAME)
            .is_some()
    );
}
