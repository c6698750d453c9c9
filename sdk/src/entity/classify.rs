use crate::edm::context::EdmContext;
use crate::edm::descriptor::{FieldDescriptor, FieldKind, FieldShape, TypeDescriptor, TypeKind, TypeRef};
use crate::error::{ODataError, ODataResult};

/// Representation strategy for one field. Exactly one category applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCategory {
    Primitive,
    Enum,
    CollectionPrimitive,
    CollectionEnum,
    CollectionComplex,
    Complex,
    Navigation,
}

/// Category plus the wire type name that a property in that category emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: ValueCategory,
    pub wire_type: Option<String>,
}

impl Classification {
    fn new(category: ValueCategory, wire_type: Option<String>) -> Self {
        Self { category, wire_type }
    }
}

fn collection_of(inner: &str) -> String {
    format!("Collection({inner})")
}

/// Decide how one declared field of `owner` is represented.
///
/// Total over well-declared fields; any other declaration is a configuration
/// error naming the offending field. Navigation fields short-circuit before
/// the type chain runs.
///
/// Collection element types are qualified with the CONTEXT namespace, while
/// single complex types carry their declaring namespace. Bare enum
/// properties emit no wire type at all; enum collections do.
pub fn classify(
    owner: &TypeDescriptor,
    field: &FieldDescriptor,
    ctx: &EdmContext,
) -> ODataResult<Classification> {
    if field.kind == FieldKind::Navigation {
        return Ok(Classification::new(ValueCategory::Navigation, None));
    }

    let unrecognized =
        || ODataError::unrecognized_type(owner.name, field.name, field.ty.display_name());

    match (field.shape, field.ty) {
        (FieldShape::Single, TypeRef::Primitive(p)) => Ok(Classification::new(
            ValueCategory::Primitive,
            Some(p.wire_name().to_string()),
        )),
        (FieldShape::Single, TypeRef::Declared(r)) => {
            let declared = r.get();
            match declared.kind {
                TypeKind::Enum => Ok(Classification::new(ValueCategory::Enum, None)),
                TypeKind::Complex => Ok(Classification::new(
                    ValueCategory::Complex,
                    Some(declared.qualified_name()),
                )),
                TypeKind::Entity { .. } => Err(unrecognized()),
            }
        }
        (FieldShape::Collection, TypeRef::Primitive(p)) => Ok(Classification::new(
            ValueCategory::CollectionPrimitive,
            Some(collection_of(p.wire_name())),
        )),
        (FieldShape::Collection, TypeRef::Declared(r)) => {
            let declared = r.get();
            match declared.kind {
                TypeKind::Enum => Ok(Classification::new(
                    ValueCategory::CollectionEnum,
                    Some(collection_of(&ctx.qualify(declared.name))),
                )),
                TypeKind::Complex => Ok(Classification::new(
                    ValueCategory::CollectionComplex,
                    Some(collection_of(&ctx.qualify(declared.name))),
                )),
                TypeKind::Entity { .. } => Err(unrecognized()),
            }
        }
        (_, TypeRef::Unsupported(_)) => Err(unrecognized()),
    }
}
