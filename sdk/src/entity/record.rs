use crate::edm::primitive::PrimitiveValue;
use crate::entity::classify::ValueCategory;
use serde::Serialize;

/// One projected property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    /// Wire type name. Absent for bare enum-typed properties.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Classification outcome, kept for downstream dispatch. Not wired.
    #[serde(skip)]
    pub category: ValueCategory,
    pub value: PropertyValue,
}

/// Value payload of a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Primitive(PrimitiveValue),
    /// Enum variant ordinal.
    Enum(i32),
    Collection(Vec<PropertyValue>),
    Complex(ComplexValue),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Self::Primitive(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[PropertyValue]> {
        match self {
            Self::Collection(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexValue> {
        match self {
            Self::Complex(value) => Some(value),
            _ => None,
        }
    }
}

/// Properties of a nested complex object, flattened into one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexValue {
    pub properties: Vec<Property>,
}

impl ComplexValue {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Named edge to inlined related records, materialized only on request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationLink {
    pub title: String,
    /// Qualified type name copied from the built record; to-one links only.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    pub inline: InlineContent,
}

/// What a navigation link carries inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InlineContent {
    Entity(EntityRecord),
    Collection(Vec<EntityRecord>),
}

impl InlineContent {
    pub fn as_entity(&self) -> Option<&EntityRecord> {
        match self {
            Self::Entity(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[EntityRecord]> {
        match self {
            Self::Collection(records) => Some(records),
            _ => None,
        }
    }
}

/// Output of projecting one object: ordered properties, navigation links,
/// qualified type name, and an identifier for entity types whose keys
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub properties: Vec<Property>,
    #[serde(rename = "navigationLinks", skip_serializing_if = "Vec::is_empty")]
    pub navigation_links: Vec<NavigationLink>,
}

impl EntityRecord {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn navigation(&self, title: &str) -> Option<&NavigationLink> {
        self.navigation_links.iter().find(|l| l.title == title)
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }
}
