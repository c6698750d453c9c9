//! Product catalog service built on the odata-sdk projection engine.

pub mod model;
pub mod ops;

pub use model::{Availability, Dimensions, Product, Supplier, catalog_context};
pub use ops::{FeaturedProduct, ProductCatalog, SupplierDirectory, catalog_registry};
