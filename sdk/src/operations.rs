use crate::edm::model::EdmModel;
use crate::edm::primitive::PrimitiveValue;
use crate::error::ODataResult;
use ahash::AHashMap;
use std::sync::Arc;

/// Named arguments passed to a custom operation.
pub type ParameterMap = AHashMap<String, PrimitiveValue>;

/// Supplies source objects for one entity set.
pub trait EntityOperation: Send + Sync {
    /// Entity set this operation serves.
    fn entity_set(&self) -> &str;

    /// Fetch one object by key literal, as it appears inside the identifier
    /// parentheses (`42`, `'DE'`, `major=1,minor=2`).
    fn read(&self, key: &str) -> Option<Box<dyn EdmModel>>;

    /// Fetch the full collection.
    fn read_all(&self) -> Vec<Box<dyn EdmModel>>;
}

/// An unbound operation exposed by the service under its own name.
pub trait CustomOperation: Send + Sync {
    /// Name the operation is addressed by.
    fn name(&self) -> &str;

    /// Run the operation; `None` means it produced no payload.
    fn invoke(&self, params: &ParameterMap) -> ODataResult<Option<Box<dyn EdmModel>>>;
}

/// Explicit registries for entity and custom operations.
///
/// Built once at startup and handed to the service; nothing here is global
/// or lazily discovered.
#[derive(Default, Clone)]
pub struct OperationRegistry {
    entity_ops: AHashMap<String, Arc<dyn EntityOperation>>,
    functions: AHashMap<String, Arc<dyn CustomOperation>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity operation under the set it serves. Re-registering
    /// a set replaces the earlier operation.
    pub fn register_entity(&mut self, op: Arc<dyn EntityOperation>) {
        self.entity_ops.insert(op.entity_set().to_string(), op);
    }

    /// Register a custom operation under its declared name.
    pub fn register_function(&mut self, op: Arc<dyn CustomOperation>) {
        self.functions.insert(op.name().to_string(), op);
    }

    pub fn entity(&self, entity_set: &str) -> Option<Arc<dyn EntityOperation>> {
        self.entity_ops.get(entity_set).cloned()
    }

    pub fn function(&self, name: &str) -> Option<Arc<dyn CustomOperation>> {
        self.functions.get(name).cloned()
    }

    /// Total number of registered operations
    pub fn len(&self) -> usize {
        self.entity_ops.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_ops.is_empty() && self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::descriptor::{
        FieldDescriptor, FieldKind, FieldShape, TypeDescriptor, TypeKind, TypeRef,
    };
    use crate::edm::model::FieldValue;
    use crate::edm::primitive::{EdmPrimitive, PrimitiveType};

    static ITEM: TypeDescriptor = TypeDescriptor {
        name: "Item",
        namespace: "Test",
        kind: TypeKind::Entity {
            entity_set: "Items",
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

    #[derive(Clone)]
    struct Item {
        id: i32,
    }

    impl EdmModel for Item {
        fn descriptor(&self) -> &'static TypeDescriptor {
            &ITEM
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "id" => FieldValue::Primitive(self.id.into_edm()),
                _ => FieldValue::Null,
            }
        }
    }

    struct ItemOperation {
        items: Vec<Item>,
    }

    impl EntityOperation for ItemOperation {
        fn entity_set(&self) -> &str {
            "Items"
        }

        fn read(&self, key: &str) -> Option<Box<dyn EdmModel>> {
            self.items
                .iter()
                .find(|item| item.id.to_string() == key)
                .map(|item| Box::new(item.clone()) as Box<dyn EdmModel>)
        }

        fn read_all(&self) -> Vec<Box<dyn EdmModel>> {
            self.items
                .iter()
                .map(|item| Box::new(item.clone()) as Box<dyn EdmModel>)
                .collect()
        }
    }

    struct Ping;

    impl CustomOperation for Ping {
        fn name(&self) -> &str {
            "ping"
        }

        fn invoke(&self, params: &ParameterMap) -> ODataResult<Option<Box<dyn EdmModel>>> {
            let id = match params.get("id") {
                Some(PrimitiveValue::Int32(id)) => *id,
                _ => 0,
            };
            Ok(Some(Box::new(Item { id })))
        }
    }

    #[test]
    fn test_register_and_read() {
        let mut registry = OperationRegistry::new();
        registry.register_entity(Arc::new(ItemOperation {
            items: vec![Item { id: 1 }, Item { id: 2 }],
        }));

        let op = registry.entity("Items").unwrap();
        assert!(op.read("2").is_some());
        assert!(op.read("9").is_none());
        assert_eq!(op.read_all().len(), 2);
        assert!(registry.entity("Orders").is_none());
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut registry = OperationRegistry::new();
        registry.register_entity(Arc::new(ItemOperation {
            items: vec![Item { id: 1 }],
        }));
        registry.register_entity(Arc::new(ItemOperation { items: vec![] }));

        assert_eq!(registry.len(), 1);
        assert!(registry.entity("Items").unwrap().read("1").is_none());
    }

    #[test]
    fn test_functions_found_by_name() {
        let mut registry = OperationRegistry::new();
        assert!(registry.is_empty());
        registry.register_function(Arc::new(Ping));

        let op = registry.function("ping").unwrap();
        let mut params = ParameterMap::default();
        params.insert("id".to_string(), PrimitiveValue::Int32(7));
        let result = op.invoke(&params).unwrap();
        assert!(result.is_some());
        assert!(registry.function("pong").is_none());
        assert_eq!(registry.len(), 1);
    }
}
