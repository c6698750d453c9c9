//! A small commerce model with hand-written descriptors and model impls.
//!
//! Doubles as the reference for what generated or hand-written application
//! code looks like: one descriptor static per type, camelCase wire names,
//! parent fields merged through the descriptor rather than the struct.

use crate::edm::context::EdmContext;
use crate::edm::descriptor::{
    DescriptorRef, FieldDescriptor, FieldKind, FieldShape, TypeDescriptor, TypeKind, TypeRef,
};
use crate::edm::model::{EdmEnum, EdmModel, EnumValue, FieldValue};
use crate::edm::primitive::{EdmPrimitive, PrimitiveType};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Shared parent type declaring the audit column every record carries.
pub static AUDITED_RECORD: TypeDescriptor = TypeDescriptor {
    name: "AuditedRecord",
    namespace: "Commerce",
    kind: TypeKind::Complex,
    fields: &[FieldDescriptor {
        name: "createdAt",
        kind: FieldKind::Property,
        shape: FieldShape::Single,
        ty: TypeRef::Primitive(PrimitiveType::DateTimeOffset),
    }],
    parent: None,
};

pub static ORDER_STATUS: TypeDescriptor = TypeDescriptor {
    name: "OrderStatus",
    namespace: "Commerce",
    kind: TypeKind::Enum,
    fields: &[],
    parent: None,
};

pub static ADDRESS: TypeDescriptor = TypeDescriptor {
    name: "Address",
    namespace: "Commerce",
    kind: TypeKind::Complex,
    fields: &[
        FieldDescriptor {
            name: "street",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "city",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
    ],
    parent: None,
};

pub static ORDER_ITEM: TypeDescriptor = TypeDescriptor {
    name: "OrderItem",
    namespace: "Commerce",
    kind: TypeKind::Entity {
        entity_set: "OrderItems",
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
            name: "sku",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "quantity",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Int32),
        },
    ],
    parent: None,
};

pub static CUSTOMER: TypeDescriptor = TypeDescriptor {
    name: "Customer",
    namespace: "Commerce",
    kind: TypeKind::Entity {
        entity_set: "Customers",
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
    ],
    parent: Some(DescriptorRef(|| &AUDITED_RECORD)),
};

pub static ORDER: TypeDescriptor = TypeDescriptor {
    name: "Order",
    namespace: "Commerce",
    kind: TypeKind::Entity {
        entity_set: "Orders",
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
            name: "total",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Double),
        },
        FieldDescriptor {
            name: "status",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &ORDER_STATUS)),
        },
        FieldDescriptor {
            name: "placedOn",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Primitive(PrimitiveType::Date),
        },
        FieldDescriptor {
            name: "tags",
            kind: FieldKind::Property,
            shape: FieldShape::Collection,
            ty: TypeRef::Primitive(PrimitiveType::String),
        },
        FieldDescriptor {
            name: "shipTo",
            kind: FieldKind::Property,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &ADDRESS)),
        },
        FieldDescriptor {
            name: "items",
            kind: FieldKind::Navigation,
            shape: FieldShape::Collection,
            ty: TypeRef::Declared(DescriptorRef(|| &ORDER_ITEM)),
        },
        FieldDescriptor {
            name: "customer",
            kind: FieldKind::Navigation,
            shape: FieldShape::Single,
            ty: TypeRef::Declared(DescriptorRef(|| &CUSTOMER)),
        },
    ],
    parent: Some(DescriptorRef(|| &AUDITED_RECORD)),
};

pub static SHIPMENT: TypeDescriptor = TypeDescriptor {
    name: "Shipment",
    namespace: "Commerce",
    kind: TypeKind::Entity {
        entity_set: "Shipments",
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
            name: "stops",
            kind: FieldKind::Property,
            shape: FieldShape::Collection,
            ty: TypeRef::Declared(DescriptorRef(|| &ADDRESS)),
        },
        FieldDescriptor {
            name: "history",
            kind: FieldKind::Property,
            shape: FieldShape::Collection,
            ty: TypeRef::Declared(DescriptorRef(|| &ORDER_STATUS)),
        },
    ],
    parent: None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl EdmEnum for OrderStatus {
    fn descriptor() -> &'static TypeDescriptor {
        &ORDER_STATUS
    }

    fn ordinal(&self) -> i32 {
        *self as i32
    }

    fn variant_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl EdmModel for Address {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &ADDRESS
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "street" => FieldValue::Primitive(self.street.as_str().into_edm()),
            "city" => FieldValue::Primitive(self.city.as_str().into_edm()),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub sku: String,
    pub quantity: i32,
}

impl EdmModel for OrderItem {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &ORDER_ITEM
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "sku" => FieldValue::Primitive(self.sku.as_str().into_edm()),
            "quantity" => FieldValue::Primitive(self.quantity.into_edm()),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    // Declared by the parent type, stored inline.
    pub created_at: DateTime<Utc>,
}

impl EdmModel for Customer {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &CUSTOMER
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "name" => FieldValue::Primitive(self.name.as_str().into_edm()),
            "createdAt" => FieldValue::Primitive(self.created_at.into_edm()),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_on: NaiveDate,
    pub tags: Vec<String>,
    pub ship_to: Option<Address>,
    /// `None` is a null navigation; `Some(vec![])` is an empty one.
    pub items: Option<Vec<OrderItem>>,
    pub customer: Option<Customer>,
    pub created_at: DateTime<Utc>,
}

impl EdmModel for Order {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &ORDER
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "total" => FieldValue::Primitive(self.total.into_edm()),
            "status" => FieldValue::Enum(EnumValue::of(&self.status)),
            "placedOn" => FieldValue::Primitive(self.placed_on.into_edm()),
            "tags" => FieldValue::PrimitiveList(
                self.tags.iter().map(|t| t.as_str().into_edm()).collect(),
            ),
            "shipTo" => match &self.ship_to {
                Some(address) => FieldValue::Complex(address),
                None => FieldValue::Null,
            },
            "items" => match &self.items {
                Some(items) => {
                    FieldValue::EntityList(items.iter().map(|i| i as &dyn EdmModel).collect())
                }
                None => FieldValue::Null,
            },
            "customer" => match &self.customer {
                Some(customer) => FieldValue::Entity(customer),
                None => FieldValue::Null,
            },
            "createdAt" => FieldValue::Primitive(self.created_at.into_edm()),
            _ => FieldValue::Null,
        }
    }
}

/// Declared-collection properties in both flavors, complex and enum.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub id: i32,
    pub stops: Vec<Address>,
    pub history: Vec<OrderStatus>,
}

impl EdmModel for Shipment {
    fn descriptor(&self) -> &'static TypeDescriptor {
        &SHIPMENT
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Primitive(self.id.into_edm()),
            "stops" => {
                FieldValue::ComplexList(self.stops.iter().map(|s| s as &dyn EdmModel).collect())
            }
            "history" => FieldValue::EnumList(self.history.iter().map(EnumValue::of).collect()),
            _ => FieldValue::Null,
        }
    }
}

/// Context with every fixture type registered under the `Commerce`
/// namespace.
pub fn commerce_context() -> EdmContext {
    EdmContext::builder()
        .namespace("Commerce")
        .container("CommerceContainer")
        .register(DescriptorRef(|| &ORDER))
        .register(DescriptorRef(|| &ORDER_ITEM))
        .register(DescriptorRef(|| &CUSTOMER))
        .register(DescriptorRef(|| &SHIPMENT))
        .register(DescriptorRef(|| &ADDRESS))
        .register(DescriptorRef(|| &ORDER_STATUS))
        .build()
        .expect("fixture context is well-formed")
}

fn audit_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 30, 8, 0, 0).unwrap()
}

pub fn sample_customer() -> Customer {
    Customer {
        id: 7,
        name: "Ada Brook".to_string(),
        created_at: audit_time(),
    }
}

/// Order 42 with two items, a customer, and every property populated.
pub fn sample_order() -> Order {
    Order {
        id: 42,
        total: 19.99,
        status: OrderStatus::Shipped,
        placed_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        tags: vec!["rush".to_string(), "gift".to_string()],
        ship_to: Some(Address {
            street: "1 Dock Rd".to_string(),
            city: "Hamburg".to_string(),
        }),
        items: Some(vec![
            OrderItem {
                id: 1,
                sku: "SKU-11".to_string(),
                quantity: 2,
            },
            OrderItem {
                id: 2,
                sku: "SKU-37".to_string(),
                quantity: 1,
            },
        ]),
        customer: Some(sample_customer()),
        created_at: audit_time(),
    }
}

/// Shipment 5 with two stops and a two-step status history.
pub fn sample_shipment() -> Shipment {
    Shipment {
        id: 5,
        stops: vec![
            Address {
                street: "1 Dock Rd".to_string(),
                city: "Hamburg".to_string(),
            },
            Address {
                street: "2 Quay St".to_string(),
                city: "Bremen".to_string(),
            },
        ],
        history: vec![OrderStatus::Pending, OrderStatus::Delivered],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::builder::EntityBuilder;

    #[test]
    fn the_fixture_model_projects_cleanly() {
        let ctx = commerce_context();
        let record = EntityBuilder::new(&ctx).build(&sample_order(), None).unwrap();
        assert_eq!(
            record.property_names(),
            vec!["id", "total", "status", "placedOn", "tags", "shipTo", "createdAt"]
        );
        assert_eq!(record.id.as_deref(), Some("Orders(42)"));
    }

    #[test]
    fn context_registers_every_type() {
        let ctx = commerce_context();
        assert_eq!(ctx.types().len(), 6);
        assert!(ctx.entity_type("Order").is_some());
        assert!(ctx.entity_type("Shipment").is_some());
        assert!(ctx.enum_type("OrderStatus").is_some());
        assert!(ctx.complex_type("Address").is_some());
    }
}
