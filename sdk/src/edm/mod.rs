//! Static type metadata and the value model applications project from.

pub mod context;
pub mod descriptor;
pub mod model;
pub mod primitive;

pub use context::{EdmContext, EdmContextBuilder, EdmContextBuilderError};
pub use descriptor::{
    DescriptorRef, FieldDescriptor, FieldKind, FieldShape, TypeDescriptor, TypeKind, TypeRef,
};
pub use model::{EdmEnum, EdmModel, EnumValue, FieldValue};
pub use primitive::{EdmPrimitive, PrimitiveType, PrimitiveValue};
