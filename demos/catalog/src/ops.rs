//! In-memory read operations backing the demo service.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use odata_sdk::{
    CustomOperation, EdmModel, EntityOperation, ODataResult, OperationRegistry, ParameterMap,
};

use crate::model::{
    Availability, DimensionsBuilder, Product, ProductBuilder, Supplier, SupplierBuilder,
};

fn demo_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 14, 9, 30, 0).unwrap()
}

fn nordic_components() -> Supplier {
    SupplierBuilder::default()
        .id(9)
        .name("Nordic Components")
        .country("NO")
        .build()
        .expect("demo supplier")
}

fn keycap_set() -> Product {
    ProductBuilder::default()
        .id(2)
        .name("Keycap Set")
        .price("35.50".parse::<bigdecimal::BigDecimal>().expect("price literal"))
        .availability(Availability::Backordered)
        .updated_at(demo_time())
        .build()
        .expect("demo product")
}

fn wrist_rest() -> Product {
    ProductBuilder::default()
        .id(3)
        .name("Walnut Wrist Rest")
        .price("19.00".parse::<bigdecimal::BigDecimal>().expect("price literal"))
        .availability(Availability::InStock)
        .updated_at(demo_time())
        .build()
        .expect("demo product")
}

fn keyboard() -> Product {
    ProductBuilder::default()
        .id(1)
        .name("Mechanical Keyboard")
        .price("129.90".parse::<bigdecimal::BigDecimal>().expect("price literal"))
        .availability(Availability::InStock)
        .tags(vec!["peripherals".to_string(), "mechanical".to_string()])
        .dimensions(Some(
            DimensionsBuilder::default()
                .width(36.0)
                .height(14.0)
                .depth(4.0)
                .unit("cm")
                .build()
                .expect("demo dimensions"),
        ))
        .supplier(Some(nordic_components()))
        .accessories(vec![keycap_set(), wrist_rest()])
        .updated_at(demo_time())
        .build()
        .expect("demo product")
}

/// Products served straight from memory.
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn with_demo_data() -> Self {
        Self {
            products: vec![keyboard(), keycap_set(), wrist_rest()],
        }
    }
}

impl EntityOperation for ProductCatalog {
    fn entity_set(&self) -> &str {
        "Products"
    }

    fn read(&self, key: &str) -> Option<Box<dyn EdmModel>> {
        self.products
            .iter()
            .find(|p| p.id().to_string() == key)
            .map(|p| Box::new(p.clone()) as Box<dyn EdmModel>)
    }

    fn read_all(&self) -> Vec<Box<dyn EdmModel>> {
        self.products
            .iter()
            .map(|p| Box::new(p.clone()) as Box<dyn EdmModel>)
            .collect()
    }
}

/// Suppliers served straight from memory.
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    pub fn with_demo_data() -> Self {
        Self {
            suppliers: vec![nordic_components()],
        }
    }
}

impl EntityOperation for SupplierDirectory {
    fn entity_set(&self) -> &str {
        "Suppliers"
    }

    fn read(&self, key: &str) -> Option<Box<dyn EdmModel>> {
        self.suppliers
            .iter()
            .find(|s| s.id().to_string() == key)
            .map(|s| Box::new(s.clone()) as Box<dyn EdmModel>)
    }

    fn read_all(&self) -> Vec<Box<dyn EdmModel>> {
        self.suppliers
            .iter()
            .map(|s| Box::new(s.clone()) as Box<dyn EdmModel>)
            .collect()
    }
}

/// Unbound function returning the current flagship product.
pub struct FeaturedProduct;

impl CustomOperation for FeaturedProduct {
    fn name(&self) -> &str {
        "featuredProduct"
    }

    fn invoke(&self, _params: &ParameterMap) -> ODataResult<Option<Box<dyn EdmModel>>> {
        Ok(Some(Box::new(keyboard())))
    }
}

/// Registry with the demo operations wired up.
pub fn catalog_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();
    registry.register_entity(Arc::new(ProductCatalog::with_demo_data()));
    registry.register_entity(Arc::new(SupplierDirectory::with_demo_data()));
    registry.register_function(Arc::new(FeaturedProduct));
    registry
}
