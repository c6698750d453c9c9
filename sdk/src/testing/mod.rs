//! Testing utilities for projection and service code
//!
//! Everything here works without a real data source:
//!
//! - [`MemoryOperation`]: a vec-backed entity operation usable wherever a
//!   registry expects one
//! - [`fixtures`]: a small commerce model with hand-written descriptors,
//!   shared by the crate's own tests and usable as a reference for writing
//!   model impls

pub mod fixtures;

use crate::edm::model::EdmModel;
use crate::operations::EntityOperation;

/// Vec-backed entity operation for tests and demos.
///
/// Key extraction is a plain function pointer so the operation stays
/// `Send + Sync` without any locking.
pub struct MemoryOperation<T>
where
    T: EdmModel + Clone + Send + Sync + 'static,
{
    entity_set: String,
    items: Vec<T>,
    key_of: fn(&T) -> String,
}

impl<T> MemoryOperation<T>
where
    T: EdmModel + Clone + Send + Sync + 'static,
{
    pub fn new(entity_set: impl Into<String>, items: Vec<T>, key_of: fn(&T) -> String) -> Self {
        Self {
            entity_set: entity_set.into(),
            items,
            key_of,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> EntityOperation for MemoryOperation<T>
where
    T: EdmModel + Clone + Send + Sync + 'static,
{
    fn entity_set(&self) -> &str {
        &self.entity_set
    }

    fn read(&self, key: &str) -> Option<Box<dyn EdmModel>> {
        self.items
            .iter()
            .find(|item| (self.key_of)(item) == key)
            .map(|item| Box::new(item.clone()) as Box<dyn EdmModel>)
    }

    fn read_all(&self) -> Vec<Box<dyn EdmModel>> {
        self.items
            .iter()
            .map(|item| Box::new(item.clone()) as Box<dyn EdmModel>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{sample_order, Order};
    use super::*;

    fn operation() -> MemoryOperation<Order> {
        MemoryOperation::new("Orders", vec![sample_order()], |order| order.id.to_string())
    }

    #[test]
    fn reads_by_extracted_key() {
        let op = operation();
        assert_eq!(op.entity_set(), "Orders");
        assert!(op.read("42").is_some());
        assert!(op.read("41").is_none());
        assert_eq!(op.read_all().len(), 1);
    }
}
