//! OData entity projection for plain Rust objects.
//!
//! Application types describe themselves through [`TypeDescriptor`] statics
//! and the [`EdmModel`] trait; [`EntityBuilder`] turns any such object into
//! a wire-ready [`EntityRecord`] with typed properties, a formatted entity
//! id, and navigation links resolved on demand through [`ExpandOption`].
//! [`EntityService`] ties a model context to registered read operations.

pub mod edm;
pub mod entity;
pub mod error;
pub mod expand;
pub mod operations;
pub mod service;
pub mod testing;

// Re-export the model-facing types
pub use edm::{
    DescriptorRef, EdmContext, EdmContextBuilder, EdmEnum, EdmModel, EdmPrimitive, EnumValue,
    FieldDescriptor, FieldKind, FieldShape, FieldValue, PrimitiveType, PrimitiveValue,
    TypeDescriptor, TypeKind, TypeRef,
};

// Re-export the projection pipeline
pub use entity::{
    Classification, ComplexValue, EntityBuilder, EntityRecord, InlineContent, NavigationLink,
    Property, PropertyValue, ValueCategory,
};

pub use error::{ODataError, ODataResult, StatusCode};
pub use expand::{ExpandItem, ExpandOption, ExpandSegment, SegmentKind};
pub use operations::{CustomOperation, EntityOperation, OperationRegistry, ParameterMap};
pub use service::EntityService;
