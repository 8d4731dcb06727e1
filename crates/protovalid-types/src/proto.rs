// Message and enum types of `valid/valid.proto`, laid out the way
// `prost-build` emits them.

/// Constraints attached to a single field through the `valid.field` option.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldConstraints {
    #[prost(oneof = "field_constraints::Type", tags = "1, 2, 3, 4")]
    pub r#type: ::core::option::Option<field_constraints::Type>,
}

/// Nested message and enum types in `FieldConstraints`.
pub mod field_constraints {
    /// Constraints for `double` fields and `google.protobuf.DoubleValue`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DoubleConstraints {
        #[prost(double, tag = "5")]
        pub eps: f64,
        #[prost(enumeration = "super::Level", tag = "6")]
        pub level: i32,
        #[prost(string, tag = "7")]
        pub msg: ::prost::alloc::string::String,
        #[prost(oneof = "double_constraints::Min", tags = "1, 2")]
        pub min: ::core::option::Option<double_constraints::Min>,
        #[prost(oneof = "double_constraints::Max", tags = "3, 4")]
        pub max: ::core::option::Option<double_constraints::Max>,
    }

    /// Nested message and enum types in `DoubleConstraints`.
    pub mod double_constraints {
        #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
        pub enum Min {
            #[prost(double, tag = "1")]
            Gte(f64),
            #[prost(double, tag = "2")]
            Gt(f64),
        }

        #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
        pub enum Max {
            #[prost(double, tag = "3")]
            Lte(f64),
            #[prost(double, tag = "4")]
            Lt(f64),
        }
    }

    /// Constraints for `int32` fields and `google.protobuf.Int32Value`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Int32Constraints {
        #[prost(int32, tag = "5")]
        pub eq: i32,
        #[prost(int32, repeated, tag = "6")]
        pub r#in: ::prost::alloc::vec::Vec<i32>,
        #[prost(int32, repeated, tag = "7")]
        pub not_in: ::prost::alloc::vec::Vec<i32>,
        #[prost(enumeration = "super::Level", tag = "8")]
        pub level: i32,
        #[prost(string, tag = "9")]
        pub msg: ::prost::alloc::string::String,
        #[prost(oneof = "int32_constraints::Min", tags = "1, 2")]
        pub min: ::core::option::Option<int32_constraints::Min>,
        #[prost(oneof = "int32_constraints::Max", tags = "3, 4")]
        pub max: ::core::option::Option<int32_constraints::Max>,
    }

    /// Nested message and enum types in `Int32Constraints`.
    pub mod int32_constraints {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Oneof)]
        pub enum Min {
            #[prost(int32, tag = "1")]
            Gte(i32),
            #[prost(int32, tag = "2")]
            Gt(i32),
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Oneof)]
        pub enum Max {
            #[prost(int32, tag = "3")]
            Lte(i32),
            #[prost(int32, tag = "4")]
            Lt(i32),
        }
    }

    /// Constraints for `string` fields and `google.protobuf.StringValue`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct StringConstraints {
        #[prost(uint32, tag = "3")]
        pub len_eq: u32,
        #[prost(uint32, tag = "4")]
        pub len_gte: u32,
        #[prost(uint32, tag = "5")]
        pub len_lte: u32,
        #[prost(string, tag = "6")]
        pub eq: ::prost::alloc::string::String,
        #[prost(string, tag = "7")]
        pub pattern: ::prost::alloc::string::String,
        #[prost(enumeration = "super::Level", tag = "8")]
        pub level: i32,
        #[prost(string, tag = "9")]
        pub msg: ::prost::alloc::string::String,
        #[prost(oneof = "string_constraints::EmptyType", tags = "1, 2")]
        pub empty_type: ::core::option::Option<string_constraints::EmptyType>,
    }

    /// Nested message and enum types in `StringConstraints`.
    pub mod string_constraints {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Oneof)]
        pub enum EmptyType {
            #[prost(bool, tag = "1")]
            Empty(bool),
            #[prost(bool, tag = "2")]
            NotEmpty(bool),
        }
    }

    /// Constraints for repeated fields, applied to the element count.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RepeatedConstraints {
        #[prost(uint32, tag = "3")]
        pub len_eq: u32,
        #[prost(uint32, tag = "4")]
        pub len_gte: u32,
        #[prost(uint32, tag = "5")]
        pub len_lte: u32,
        #[prost(enumeration = "super::Level", tag = "6")]
        pub level: i32,
        #[prost(string, tag = "7")]
        pub msg: ::prost::alloc::string::String,
        #[prost(oneof = "repeated_constraints::EmptyType", tags = "1, 2")]
        pub empty_type: ::core::option::Option<repeated_constraints::EmptyType>,
    }

    /// Nested message and enum types in `RepeatedConstraints`.
    pub mod repeated_constraints {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Oneof)]
        pub enum EmptyType {
            #[prost(bool, tag = "1")]
            Empty(bool),
            #[prost(bool, tag = "2")]
            NotEmpty(bool),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "1")]
        Double(DoubleConstraints),
        #[prost(message, tag = "2")]
        Int32(Int32Constraints),
        #[prost(message, tag = "3")]
        String(StringConstraints),
        #[prost(message, tag = "4")]
        Repeated(RepeatedConstraints),
    }
}

/// Severity attached to a constraint and copied onto every finding it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Level {
    Unspecified = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Level {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "LEVEL_UNSPECIFIED",
            Self::Info => "LEVEL_INFO",
            Self::Warning => "LEVEL_WARNING",
            Self::Error => "LEVEL_ERROR",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "LEVEL_UNSPECIFIED" => Some(Self::Unspecified),
            "LEVEL_INFO" => Some(Self::Info),
            "LEVEL_WARNING" => Some(Self::Warning),
            "LEVEL_ERROR" => Some(Self::Error),
            _ => None,
        }
    }
}
