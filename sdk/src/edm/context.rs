use crate::edm::descriptor::{DescriptorRef, TypeDescriptor};
use derive_builder::Builder;

/// Schema metadata for one service: the namespace qualifying type names, the
/// container name, and every declared type.
///
/// Built once at startup and shared by reference; the engine never mutates
/// it.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct EdmContext {
    namespace: String,
    container: String,
    /// Registered type descriptors, in registration order.
    #[builder(setter(each(name = "register")), default)]
    types: Vec<DescriptorRef>,
}

impl EdmContext {
    pub fn builder() -> EdmContextBuilder {
        EdmContextBuilder::default()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn types(&self) -> &[DescriptorRef] {
        &self.types
    }

    /// Qualify a bare type name with this context's namespace.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.namespace, name)
    }

    /// Look up a registered entity type by name.
    pub fn entity_type(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.find(|d| d.is_entity_type() && d.name == name)
    }

    /// Look up a registered complex type by name.
    pub fn complex_type(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.find(|d| d.is_complex_type() && d.name == name)
    }

    /// Look up a registered enum type by name.
    pub fn enum_type(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.find(|d| d.is_enum_type() && d.name == name)
    }

    /// Look up the entity type exposed through an entity set.
    pub fn type_for_entity_set(&self, entity_set: &str) -> Option<&'static TypeDescriptor> {
        self.find(|d| d.entity_set() == Some(entity_set))
    }

    fn find(&self, pred: impl Fn(&'static TypeDescriptor) -> bool) -> Option<&'static TypeDescriptor> {
        self.types.iter().map(DescriptorRef::get).find(|d| pred(d))
    }
}

impl EdmContextBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(namespace) = &self.namespace {
            if namespace.trim().is_empty() {
                return Err("namespace must not be empty".into());
            }
        }
        if let Some(container) = &self.container {
            if container.trim().is_empty() {
                return Err("container must not be empty".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::descriptor::{FieldDescriptor, FieldKind, FieldShape, TypeKind, TypeRef};
    use crate::edm::primitive::PrimitiveType;

    static NOTE: TypeDescriptor = TypeDescriptor {
        name: "Note",
        namespace: "Test",
        kind: TypeKind::Entity {
            entity_set: "Notes",
            keys: &["id"],
        },
        fields: &[FieldDescriptor {
            name: "id",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Int32),
        }],
        parent: None,
    };

    static TAG: TypeDescriptor = TypeDescriptor {
        name: "Tag",
        namespace: "Test",
        kind: TypeKind::Complex,
        fields: &[],
        parent: None,
    };

    fn context() -> EdmContext {
        EdmContext::builder()
            .namespace("Test")
            .container("Container")
            .register(DescriptorRef(|| &NOTE))
            .register(DescriptorRef(|| &TAG))
            .build()
            .unwrap()
    }

    #[test]
    fn lookups_route_by_kind() {
        let ctx = context();
        assert_eq!(ctx.entity_type("Note").map(|d| d.name), Some("Note"));
        assert!(ctx.entity_type("Tag").is_none());
        assert_eq!(ctx.complex_type("Tag").map(|d| d.name), Some("Tag"));
        assert_eq!(ctx.type_for_entity_set("Notes").map(|d| d.name), Some("Note"));
        assert!(ctx.enum_type("Note").is_none());
    }

    #[test]
    fn qualify_prefixes_the_namespace() {
        assert_eq!(context().qualify("Note"), "Test.Note");
    }

    #[test]
    fn empty_namespace_fails_validation() {
        let err = EdmContext::builder()
            .namespace("  ")
            .container("Container")
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn missing_fields_fail_the_build() {
        assert!(EdmContext::builder().namespace("Test").build().is_err());
    }
}
