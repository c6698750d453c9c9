//! The projection engine: field classification, record assembly, and
//! identifier formatting.

pub mod builder;
pub mod classify;
pub mod key;
pub mod record;

pub use builder::EntityBuilder;
pub use classify::{Classification, ValueCategory, classify};
pub use key::format_entity_id;
pub use record::{
    ComplexValue, EntityRecord, InlineContent, NavigationLink, Property, PropertyValue,
};
