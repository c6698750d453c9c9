//! Catalog model: descriptors and projection impls for products and their
//! suppliers.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use odata_sdk::{
    DescriptorRef, EdmContext, EdmEnum, EdmModel, EdmPrimitive, EnumValue, FieldDescriptor,
    FieldKind, FieldShape, FieldValue, PrimitiveType, TypeDescriptor, TypeKind, TypeRef,
};
use serde::Serialize;

/// Parent type declaring the audit column shared by every catalog record.
pub static CATALOG_RECORD: TypeDescriptor = TypeDescriptor {
    name: "CatalogRecord",
    namespace: "Catalog",
    kind: TypeKind::Complex,
    fields: &[FieldDescriptor {
        name: "updatedAt",
        kind: FieldKind::Property,
        shape: FieldShape::Single,
        ty: TypeRef::Primitive(PrimitiveType::DateTimeOffset),
    }],
    parent: None,
};

pub static AVAILABILITY: TypeDescriptor = TypeDescriptor {
    name: "Availability",
    namespace: "Catalog",
    kind: TypeKind::Enum,
    fields: &[],
    parent: None,
};

pub static DIMENSIONS: TypeDescriptor = TypeDescriptor {
    name: "Dimensions",
    namespace: "Catalog",
    kind: TypeKind::Complex,
    fields: &[
        FieldDescriptor {
            name: "width",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Double),
        },
        FieldDescriptor {
            name: "height",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Double),
        },
        FieldDescriptor {
            name: "depth",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Double),
        },
        FieldDescriptor {
            name: "unit",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
    ],
    parent: None,
};

pub static SUPPLIER: TypeDescriptor = TypeDescriptor {
    name: "Supplier",
    namespace: "Catalog",
    kind: TypeKind::Entity {
        entity_set: "Suppliers",
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
            name: "name",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "country",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
    ],
    parent: None,
};

pub static PRODUCT: TypeDescriptor = TypeDescriptor {
    name: "Product",
    namespace: "Catalog",
    kind: TypeKind::Entity {
        entity_set: "Products",
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
            name: "name",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "price",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Decimal),
        },
        FieldDescriptor {
            name: "availability",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &AVAILABILITY)),
        },
        FieldDescriptor {
            name: "tags",
            kind: FieldKind::Property,
            shape: FieldShape::Collection,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "dimensions",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &DIMENSIONS)),
        },
        FieldDescriptor {
            name: "supplier",
            kind: FieldKind::Navigation,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &SUPPLIER)),
        },
        FieldDescriptor {
            name: "accessories",
            kind: FieldKind::Navigation,
            shape: FieldShape::Collection,
            ty: TypeRef::Declared(DescriptorRef(|| &PRODUCT)),
        },
    ],
    parent: Some(DescriptorRef(|| &CATALOG_RECORD)),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    InStock,
    Backordered,
    Discontinued,
}

impl EdmEnum for Availability {
    fn descriptor() -> &'static TypeDescriptor {
        &AVAILABILITY
    }

    fn ordinal(&self) -> i32 {
        *self as i32
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Availability::InStock => "InStock",
            Availability::Backordered => "Backordered",
            Availability::Discontinued => "Discontinued",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into))]
pub struct Dimensions {
    width: f64,
    height: f64,
    depth: f64,
    unit: String,
}

impl EdmModel for Dimensions {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &DIMENSIONS
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "width" => FieldValue::Primitive(self.width.into_edm()),
            "height" => FieldValue::Primitive(self.height.into_edm()),
            "depth" => FieldValue::Primitive(self.depth.into_edm()),
            "unit" => FieldValue::Primitive(self.unit.as_str().into_edm()),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into))]
pub struct Supplier {
    id: i32,
    name: String,
    country: String,
}

impl Supplier {
    pub fn id(&self) -> i32 {
        self.id
    }
}

impl EdmModel for Supplier {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &SUPPLIER
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "name" => FieldValue::Primitive(self.name.as_str().into_edm()),
            "country" => FieldValue::Primitive(self.country.as_str().into_edm()),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
#[builder(setter(into))]
pub struct Product {
    id: i32,
    name: String,
    price: BigDecimal,
    availability: Availability,
    #[builder(default)]
    tags: Vec<String>,
    #[builder(default)]
    dimensions: Option<Dimensions>,
    #[builder(default)]
    supplier: Option<Supplier>,
    #[builder(default)]
    accessories: Vec<Product>,
    #[serde(rename = "updatedAt")]
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EdmModel for Product {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &PRODUCT
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "name" => FieldValue::Primitive(self.name.as_str().into_edm()),
            "price" => FieldValue::Primitive(self.price.clone().into_edm()),
            "availability" => FieldValue::Enum(EnumValue::of(&self.availability)),
            "tags" => FieldValue::PrimitiveList(
                self.tags.iter().map(|t| t.as_str().into_edm()).collect(),
            ),
            "dimensions" => match &self.dimensions {
                Some(d) => FieldValue::Complex(d),
                None => FieldValue::Null,
            },
            "supplier" => match &self.supplier {
                Some(s) => FieldValue::Entity(s),
                None => FieldValue::Null,
            },
            "accessories" => FieldValue::EntityList(
                self.accessories.iter().map(|p| p as &dyn EdmModel).collect(),
            ),
            "updatedAt" => FieldValue::Primitive(self.updated_at.into_edm()),
            _ => FieldValue::Null,
        }
    }
}

/// Context with every catalog type registered.
pub fn catalog_context() -> EdmContext {
    EdmContext::builder()
        .namespace("Catalog")
        .container("CatalogContainer")
        .register(DescriptorRef(|| &PRODUCT))
        .register(DescriptorRef(|| &SUPPLIER))
        .register(DescriptorRef(|| &DIMENSIONS))
        .register(DescriptorRef(|| &AVAILABILITY))
        .build()
        .expect("catalog model is well-formed")
}
