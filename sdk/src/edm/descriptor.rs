use crate::edm::primitive::PrimitiveType;
use dashmap::DashMap;
use std::fmt;
use std::sync::LazyLock;

/// How a type participates in the entity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Addressable type with identity, exposed through an entity set.
    Entity {
        entity_set: &'static str,
        /// Key field wire names, in declaration order.
        keys: &'static [&'static str],
    },
    /// Embeddable value type with no identity.
    Complex,
    /// Closed set of named variants, transmitted by ordinal.
    Enum,
}

/// Lazy handle to a type descriptor.
///
/// Descriptors reference each other through a function pointer so that
/// mutually-recursive types (Order -> OrderItem -> Order) can both be
/// declared as plain statics.
#[derive(Clone, Copy)]
pub struct DescriptorRef(pub fn() -> &'static TypeDescriptor);

impl DescriptorRef {
    pub fn get(&self) -> &'static TypeDescriptor {
        (self.0)()
    }
}

impl fmt::Debug for DescriptorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescriptorRef")
            .field(&self.get().qualified_name())
            .finish()
    }
}

impl PartialEq for DescriptorRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.get(), other.get())
    }
}

impl Eq for DescriptorRef {}

/// Whether a field projects as a property or as a navigation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Property,
    Navigation,
}

/// Declared container of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Single,
    Collection,
}

/// Statically-declared type of a field, or of a collection's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Declared(DescriptorRef),
    /// Declared with a type the protocol cannot carry. Kept so that
    /// classification can fail with the offending type name.
    Unsupported(&'static str),
}

impl TypeRef {
    /// Human-readable type name for diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            Self::Primitive(p) => p.wire_name().to_string(),
            Self::Declared(r) => r.get().qualified_name(),
            Self::Unsupported(name) => (*name).to_string(),
        }
    }
}

/// Static metadata for one field. The wire name already has any declared
/// override applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub shape: FieldShape,
    pub ty: TypeRef,
}

/// Static metadata for one application type.
///
/// One descriptor exists per type, declared as a `static` and handed out by
/// reference; the engine never builds descriptors at run time.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub namespace: &'static str,
    pub kind: TypeKind,
    /// Own declared fields, in declaration order.
    pub fields: &'static [FieldDescriptor],
    /// Immediate parent type whose own fields are merged after this type's.
    /// Only one level is collected; grandparent fields never appear.
    pub parent: Option<DescriptorRef>,
}

static FIELD_TABLES: LazyLock<DashMap<usize, &'static [FieldDescriptor], ahash::RandomState>> =
    LazyLock::new(|| DashMap::with_hasher(ahash::RandomState::new()));

impl TypeDescriptor {
    /// Fully-scoped protocol type identifier, `<namespace>.<name>`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    pub fn is_entity_type(&self) -> bool {
        matches!(self.kind, TypeKind::Entity { .. })
    }

    pub fn is_complex_type(&self) -> bool {
        matches!(self.kind, TypeKind::Complex)
    }

    pub fn is_enum_type(&self) -> bool {
        matches!(self.kind, TypeKind::Enum)
    }

    /// Entity-set name, for entity types.
    pub fn entity_set(&self) -> Option<&'static str> {
        match self.kind {
            TypeKind::Entity { entity_set, .. } => Some(entity_set),
            _ => None,
        }
    }

    /// Declared key field names, empty for non-entity types.
    pub fn keys(&self) -> &'static [&'static str] {
        match self.kind {
            TypeKind::Entity { keys, .. } => keys,
            _ => &[],
        }
    }

    /// Own fields followed by the immediate parent's own fields.
    ///
    /// The merged table is memoized per type; concurrent first calls may
    /// race but settle on one table. Types without a parent return their
    /// field slice directly.
    pub fn field_table(&'static self) -> &'static [FieldDescriptor] {
        let Some(parent) = self.parent else {
            return self.fields;
        };
        let key = self as *const Self as usize;
        if let Some(table) = FIELD_TABLES.get(&key) {
            return *table;
        }
        *FIELD_TABLES.entry(key).or_insert_with(|| {
            let parent = parent.get();
            let mut merged = Vec::with_capacity(self.fields.len() + parent.fields.len());
            merged.extend_from_slice(self.fields);
            merged.extend_from_slice(parent.fields);
            Box::leak(merged.into_boxed_slice())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GRANDPARENT: TypeDescriptor = TypeDescriptor {
        name: "Root",
        namespace: "Test",
        kind: TypeKind::Complex,
        fields: &[FieldDescriptor {
            name: "rootOnly",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        }],
        parent: None,
    };

    static PARENT: TypeDescriptor = TypeDescriptor {
        name: "Base",
        namespace: "Test",
        kind: TypeKind::Complex,
        fields: &[FieldDescriptor {
            name: "createdAt",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::DateTimeOffset),
        }],
        parent: Some(DescriptorRef(|| &GRANDPARENT)),
    };

    static CHILD: TypeDescriptor = TypeDescriptor {
        name: "Child",
        namespace: "Test",
        kind: TypeKind::Entity {
            entity_set: "Children",
            keys: &["id"],
        },
        fields: &[
            FieldDescriptor {
                name: "id",
                kind: FieldKind::Property,
                shape: FieldShape::Single,
                ty: TypeRef::Primitive(PrimitiveType::Int32),
            },
            FieldDescriptor {
                name: "label",
                kind: FieldKind::Property,
                shape: FieldShape::Single,
                ty: TypeRef::Primitive(PrimitiveType::String),
            },
        ],
        parent: Some(DescriptorRef(|| &PARENT)),
    };

    #[test]
    fn qualified_name_joins_namespace_and_name() {
        assert_eq!(CHILD.qualified_name(), "Test.Child");
    }

    #[test]
    fn field_table_appends_parent_fields_after_own() {
        let names: Vec<&str> = CHILD.field_table().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "label", "createdAt"]);
    }

    #[test]
    fn field_table_stops_at_one_level() {
        assert!(CHILD.field_table().iter().all(|f| f.name != "rootOnly"));
    }

    #[test]
    fn field_table_is_memoized() {
        let first = CHILD.field_table();
        let second = CHILD.field_table();
        assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    }

    #[test]
    fn parentless_types_reuse_their_field_slice() {
        assert!(std::ptr::eq(
            GRANDPARENT.field_table().as_ptr(),
            GRANDPARENT.fields.as_ptr()
        ));
    }

    #[test]
    fn kind_accessors_follow_the_declaration() {
        assert!(CHILD.is_entity_type());
        assert_eq!(CHILD.entity_set(), Some("Children"));
        assert_eq!(CHILD.keys(), &["id"]);
        assert!(PARENT.is_complex_type());
        assert!(PARENT.keys().is_empty());
    }
}
