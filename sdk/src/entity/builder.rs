use crate::edm::context::EdmContext;
use crate::edm::descriptor::{FieldDescriptor, FieldKind, FieldShape, TypeDescriptor, TypeKind};
use crate::edm::model::{EdmModel, FieldValue};
use crate::entity::classify::{Classification, ValueCategory, classify};
use crate::entity::key::format_entity_id;
use crate::entity::record::{
    ComplexValue, EntityRecord, InlineContent, NavigationLink, Property, PropertyValue,
};
use crate::error::{ODataError, ODataResult};
use crate::expand::ExpandOption;
use tracing::{debug, error};

/// Projects application objects into entity records.
///
/// Stateless apart from the borrowed context; one instance serves any number
/// of threads. Projection never mutates the source object, and the same
/// object with the same expand option always yields a structurally identical
/// record.
pub struct EntityBuilder<'a> {
    ctx: &'a EdmContext,
}

impl<'a> EntityBuilder<'a> {
    pub fn new(ctx: &'a EdmContext) -> Self {
        Self { ctx }
    }

    /// Project one object, materializing the navigation edges `expand` asks
    /// for.
    pub fn build(
        &self,
        object: &dyn EdmModel,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<EntityRecord> {
        let descriptor = object.descriptor();
        check_markers(descriptor)?;

        let fields = descriptor.field_table();
        debug!("Projecting '{}' with {} fields", descriptor.name, fields.len());

        let mut properties = Vec::with_capacity(fields.len());
        let mut navigation_links = Vec::new();
        for field in fields {
            match field.kind {
                FieldKind::Property => {
                    properties.push(self.build_property(descriptor, field, object, expand)?);
                }
                FieldKind::Navigation => {
                    if let Some(link) = self.resolve_link(descriptor, field, object, expand) {
                        navigation_links.push(link);
                    }
                }
            }
        }

        let id = match descriptor.kind {
            TypeKind::Entity { entity_set, keys } => {
                if keys.is_empty() {
                    return Err(ODataError::missing_keys(descriptor.name));
                }
                format_entity_id(keys, &properties)
                    .map(|fragment| format!("{entity_set}{fragment}"))
            }
            _ => None,
        };

        Ok(EntityRecord {
            type_name: descriptor.qualified_name(),
            id,
            properties,
            navigation_links,
        })
    }

    fn build_property(
        &self,
        owner: &'static TypeDescriptor,
        field: &FieldDescriptor,
        object: &dyn EdmModel,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<Property> {
        let Classification { category, wire_type } = classify(owner, field, self.ctx)?;
        let value = self.coerce(owner, field, category, object.field(field.name), expand)?;
        Ok(Property {
            name: field.name.to_string(),
            ty: wire_type,
            category,
            value,
        })
    }

    fn coerce(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        category: ValueCategory,
        value: FieldValue<'_>,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<PropertyValue> {
        Ok(match (category, value) {
            // A null value keeps the property, with its declared wire type.
            (_, FieldValue::Null) => PropertyValue::Null,
            (ValueCategory::Primitive, FieldValue::Primitive(v)) => PropertyValue::Primitive(v),
            (ValueCategory::Enum, FieldValue::Enum(e)) => PropertyValue::Enum(e.ordinal),
            (ValueCategory::CollectionPrimitive, FieldValue::PrimitiveList(values)) => {
                PropertyValue::Collection(values.into_iter().map(PropertyValue::Primitive).collect())
            }
            (ValueCategory::CollectionEnum, FieldValue::EnumList(values)) => PropertyValue::Collection(
                values.into_iter().map(|e| PropertyValue::Enum(e.ordinal)).collect(),
            ),
            (ValueCategory::CollectionComplex, FieldValue::ComplexList(elements)) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(PropertyValue::Complex(self.build_complex(element, expand)?));
                }
                PropertyValue::Collection(items)
            }
            (ValueCategory::Complex, FieldValue::Complex(nested)) => {
                PropertyValue::Complex(self.build_complex(nested, expand)?)
            }
            (category, value) => {
                return Err(ODataError::value_mismatch(
                    owner.name,
                    field.name,
                    declared_label(category),
                    value.shape_name(),
                ));
            }
        })
    }

    // Nested complex objects recurse with the SAME expand option; their
    // properties flatten into one value and any links they resolved are
    // discarded.
    fn build_complex(
        &self,
        object: &dyn EdmModel,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<ComplexValue> {
        let record = self.build(object, expand)?;
        Ok(ComplexValue {
            properties: record.properties,
        })
    }

    /// Decide whether one navigation edge materializes, and build its inline
    /// records when it does.
    ///
    /// Any failure inside the edge is logged and degrades to "no link"; a
    /// broken related object never aborts the containing entity.
    fn resolve_link(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        object: &dyn EdmModel,
        expand: Option<&ExpandOption>,
    ) -> Option<NavigationLink> {
        let expand = expand?;
        if expand.is_empty() {
            return None;
        }
        // First matching item wins; later duplicates are ignored.
        let item = expand
            .items()
            .iter()
            .find(|item| item.matches_navigation(field.name))?;

        match self.expand_edge(owner, field, object, item.nested()) {
            Ok(link) => link,
            Err(e) => {
                error!(
                    "Expansion of '{}' on '{}' failed, dropping the link: {}",
                    field.name, owner.name, e
                );
                None
            }
        }
    }

    fn expand_edge(
        &self,
        owner: &TypeDescriptor,
        field: &FieldDescriptor,
        object: &dyn EdmModel,
        nested: Option<&ExpandOption>,
    ) -> ODataResult<Option<NavigationLink>> {
        match (field.shape, object.field(field.name)) {
            // A requested edge with no value produces no link, for both
            // shapes.
            (_, FieldValue::Null) => Ok(None),
            (FieldShape::Collection, FieldValue::EntityList(elements)) => {
                let mut records = Vec::with_capacity(elements.len());
                for element in elements {
                    records.push(self.build(element, nested)?);
                }
                // An empty collection still links, unlike a null to-one.
                Ok(Some(NavigationLink {
                    title: field.name.to_string(),
                    ty: None,
                    inline: InlineContent::Collection(records),
                }))
            }
            (FieldShape::Single, FieldValue::Entity(related)) => {
                let record = self.build(related, nested)?;
                Ok(Some(NavigationLink {
                    title: field.name.to_string(),
                    ty: Some(record.type_name.clone()),
                    inline: InlineContent::Entity(record),
                }))
            }
            (shape, other) => Err(ODataError::value_mismatch(
                owner.name,
                field.name,
                match shape {
                    FieldShape::Single => "entity",
                    FieldShape::Collection => "entity collection",
                },
                other.shape_name(),
            )),
        }
    }
}

// Gate on how the type is declared before reading any field.
fn check_markers(descriptor: &TypeDescriptor) -> ODataResult<()> {
    match descriptor.kind {
        TypeKind::Enum => Err(ODataError::missing_type_marker(descriptor.name)),
        TypeKind::Entity { entity_set, .. } => {
            if descriptor.name.trim().is_empty() {
                return Err(ODataError::empty_name(descriptor.name, "entity type"));
            }
            if entity_set.trim().is_empty() {
                return Err(ODataError::missing_entity_set(descriptor.name));
            }
            Ok(())
        }
        TypeKind::Complex => {
            if descriptor.name.trim().is_empty() {
                return Err(ODataError::empty_name(descriptor.name, "complex type"));
            }
            Ok(())
        }
    }
}

fn declared_label(category: ValueCategory) -> &'static str {
    match category {
        ValueCategory::Primitive => "primitive",
        ValueCategory::Enum => "enum",
        ValueCategory::CollectionPrimitive => "primitive collection",
        ValueCategory::CollectionEnum => "enum collection",
        ValueCategory::CollectionComplex => "complex collection",
        ValueCategory::Complex => "complex",
        ValueCategory::Navigation => "navigation",
    }
}
