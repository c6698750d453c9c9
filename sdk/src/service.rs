use crate::edm::context::EdmContext;
use crate::entity::builder::EntityBuilder;
use crate::entity::record::EntityRecord;
use crate::error::{ODataError, ODataResult};
use crate::expand::ExpandOption;
use crate::operations::{OperationRegistry, ParameterMap};
use tracing::debug;

/// Request-level entry point: routes entity-set reads and function calls
/// through the registries and projects the results.
///
/// Owns the schema context and the registries; transports hold one service
/// and call it from any thread.
pub struct EntityService {
    context: EdmContext,
    registry: OperationRegistry,
}

impl EntityService {
    pub fn new(context: EdmContext, registry: OperationRegistry) -> Self {
        Self { context, registry }
    }

    pub fn context(&self) -> &EdmContext {
        &self.context
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Read one entity by key literal and project it.
    ///
    /// `Ok(None)` when the set is known but holds no such object; an unknown
    /// set is an error.
    pub fn read_entity(
        &self,
        entity_set: &str,
        key: &str,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<Option<EntityRecord>> {
        let op = self
            .registry
            .entity(entity_set)
            .ok_or_else(|| ODataError::unknown_entity_set(entity_set))?;
        debug!("Reading '{}' from entity set '{}'", key, entity_set);
        match op.read(key) {
            Some(object) => {
                let record = EntityBuilder::new(&self.context).build(object.as_ref(), expand)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Read and project a whole entity set.
    pub fn read_collection(
        &self,
        entity_set: &str,
        expand: Option<&ExpandOption>,
    ) -> ODataResult<Vec<EntityRecord>> {
        let op = self
            .registry
            .entity(entity_set)
            .ok_or_else(|| ODataError::unknown_entity_set(entity_set))?;
        let builder = EntityBuilder::new(&self.context);
        let objects = op.read_all();
        debug!("Reading {} objects from entity set '{}'", objects.len(), entity_set);
        let mut records = Vec::with_capacity(objects.len());
        for object in &objects {
            records.push(builder.build(object.as_ref(), expand)?);
        }
        Ok(records)
    }

    /// Invoke a registered custom operation and project its payload.
    ///
    /// The payload projects without expansion; callers wanting inline edges
    /// read the entity back through its set.
    pub fn invoke_function(
        &self,
        name: &str,
        params: &ParameterMap,
    ) -> ODataResult<Option<EntityRecord>> {
        let op = self
            .registry
            .function(name)
            .ok_or_else(|| ODataError::unknown_function(name))?;
        match op.invoke(params)? {
            Some(object) => {
                let record = EntityBuilder::new(&self.context).build(object.as_ref(), None)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::model::EdmModel;
    use crate::error::StatusCode;
    use crate::operations::CustomOperation;
    use crate::testing::MemoryOperation;
    use crate::testing::fixtures::{commerce_context, sample_order};
    use std::sync::Arc;

    fn service() -> EntityService {
        let mut registry = OperationRegistry::new();
        registry.register_entity(Arc::new(MemoryOperation::new(
            "Orders",
            vec![sample_order()],
            |order| order.id.to_string(),
        )));
        EntityService::new(commerce_context(), registry)
    }

    #[test]
    fn reads_and_projects_one_entity() {
        let record = service().read_entity("Orders", "42", None).unwrap().unwrap();
        assert_eq!(record.id.as_deref(), Some("Orders(42)"));
        assert_eq!(record.type_name, "Commerce.Order");
        assert!(record.navigation_links.is_empty());
    }

    #[test]
    fn missing_objects_are_none_not_errors() {
        assert!(service().read_entity("Orders", "404", None).unwrap().is_none());
    }

    #[test]
    fn unknown_sets_fail_with_not_found() {
        let err = service().read_entity("Invoices", "1", None).unwrap_err();
        assert!(matches!(err, ODataError::UnknownEntitySet { .. }));
        assert_eq!(err.status(), StatusCode::NotFound);
    }

    #[test]
    fn collections_project_every_object() {
        let records = service().read_collection("Orders", None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("Orders(42)"));
    }

    #[test]
    fn expand_flows_through_the_service() {
        let expand = ExpandOption::edge("items");
        let record = service()
            .read_entity("Orders", "42", Some(&expand))
            .unwrap()
            .unwrap();
        let link = record.navigation("items").unwrap();
        assert_eq!(link.inline.as_collection().unwrap().len(), 2);
    }

    #[test]
    fn functions_project_their_payload() {
        struct LatestOrder;

        impl CustomOperation for LatestOrder {
            fn name(&self) -> &str {
                "latestOrder"
            }

            fn invoke(&self, _params: &ParameterMap) -> ODataResult<Option<Box<dyn EdmModel>>> {
                Ok(Some(Box::new(sample_order())))
            }
        }

        let mut registry = OperationRegistry::new();
        registry.register_function(Arc::new(LatestOrder));
        let service = EntityService::new(commerce_context(), registry);

        let record = service
            .invoke_function("latestOrder", &ParameterMap::default())
            .unwrap()
            .unwrap();
        assert_eq!(record.id.as_deref(), Some("Orders(42)"));

        let err = service
            .invoke_function("nothing", &ParameterMap::default())
            .unwrap_err();
        assert!(matches!(err, ODataError::UnknownFunction { .. }));
    }
}
