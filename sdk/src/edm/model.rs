use crate::edm::descriptor::TypeDescriptor;
use crate::edm::primitive::PrimitiveValue;
use std::fmt;

/// Implemented by application types that project into entity records.
///
/// The contract is deliberately small so impls can be written by hand or
/// generated. `field` must answer for every wire name in the type's field
/// table, including fields declared by the immediate parent type; unknown
/// names answer `FieldValue::Null`.
pub trait EdmModel {
    /// Static descriptor for the runtime type.
    fn descriptor(&self) -> &'static TypeDescriptor;

    /// Read the runtime value of one declared field by wire name.
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// Implemented by application enums declared as protocol enum types.
pub trait EdmEnum {
    /// Descriptor with `TypeKind::Enum`.
    fn descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;

    /// Zero-based position among declared variants.
    fn ordinal(&self) -> i32;

    /// Declared variant name, used for diagnostics only.
    fn variant_name(&self) -> &'static str;
}

/// Enum variant captured by ordinal position among declared variants.
///
/// The ordinal is what gets transmitted; the name travels along purely for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub ordinal: i32,
    pub name: &'static str,
}

impl EnumValue {
    pub fn new(ordinal: i32, name: &'static str) -> Self {
        Self { ordinal, name }
    }

    pub fn of<T: EdmEnum>(value: &T) -> Self {
        Self::new(value.ordinal(), value.variant_name())
    }
}

/// Runtime value of one field as handed to the projection engine.
///
/// The variants mirror the declarable shapes so the engine can check a value
/// against its declaration instead of downcasting.
pub enum FieldValue<'a> {
    /// Unset optional value; also the answer for unknown field names.
    Null,
    Primitive(PrimitiveValue),
    Enum(EnumValue),
    PrimitiveList(Vec<PrimitiveValue>),
    EnumList(Vec<EnumValue>),
    Complex(&'a dyn EdmModel),
    ComplexList(Vec<&'a dyn EdmModel>),
    Entity(&'a dyn EdmModel),
    EntityList(Vec<&'a dyn EdmModel>),
}

impl FieldValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Shape label used in mismatch diagnostics.
    pub(crate) fn shape_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Primitive(_) => "primitive",
            Self::Enum(_) => "enum",
            Self::PrimitiveList(_) => "primitive collection",
            Self::EnumList(_) => "enum collection",
            Self::Complex(_) => "complex",
            Self::ComplexList(_) => "complex collection",
            Self::Entity(_) => "entity",
            Self::EntityList(_) => "entity collection",
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(value) => f.debug_tuple("Primitive").field(value).finish(),
            Self::Enum(value) => f.debug_tuple("Enum").field(value).finish(),
            other => f.write_str(other.shape_name()),
        }
    }
}
