//! Service-level checks over the demo catalog.

use catalog::{catalog_context, catalog_registry};
use odata_sdk::{EntityService, ExpandItem, ExpandOption, ParameterMap};

fn service() -> EntityService {
    EntityService::new(catalog_context(), catalog_registry())
}

#[test]
fn the_flagship_projects_with_both_navigations() {
    let expand = ExpandOption::new(vec![
        ExpandItem::navigation("supplier"),
        ExpandItem::navigation("accessories"),
    ]);
    let record = service()
        .read_entity("Products", "1", Some(&expand))
        .unwrap()
        .expect("product 1 exists");

    assert_eq!(record.type_name, "Catalog.Product");
    assert_eq!(record.id.as_deref(), Some("Products(1)"));
    assert_eq!(
        record.property_names(),
        vec!["id", "name", "price", "availability", "tags", "dimensions", "updatedAt"]
    );
    assert_eq!(
        record.property("price").unwrap().ty.as_deref(),
        Some("Edm.Decimal")
    );
    assert_eq!(record.property("availability").unwrap().ty, None);

    let supplier = record.navigation("supplier").unwrap();
    assert_eq!(supplier.ty.as_deref(), Some("Catalog.Supplier"));
    assert_eq!(
        supplier.inline.as_entity().unwrap().id.as_deref(),
        Some("Suppliers(9)")
    );

    let accessories = record.navigation("accessories").unwrap();
    assert_eq!(accessories.inline.as_collection().map(<[_]>::len), Some(2));
}

#[test]
fn nested_expands_flow_through_entity_reads() {
    let expand = ExpandOption::new(vec![
        ExpandItem::navigation("accessories").with_nested(ExpandOption::edge("accessories")),
    ]);
    let record = service()
        .read_entity("Products", "1", Some(&expand))
        .unwrap()
        .expect("product 1 exists");

    let accessories = record.navigation("accessories").unwrap();
    let inline = accessories.inline.as_collection().unwrap();
    assert_eq!(inline.len(), 2);
    for nested in inline {
        // Accessories have none of their own, so the inner link inlines an
        // empty collection instead of going absent.
        let inner = nested.navigation("accessories").unwrap();
        assert_eq!(inner.inline.as_collection().map(<[_]>::len), Some(0));
        assert!(nested.navigation("supplier").is_none());
    }
}

#[test]
fn unexpanded_reads_carry_no_links() {
    let record = service()
        .read_entity("Products", "2", None)
        .unwrap()
        .expect("product 2 exists");
    assert!(record.navigation_links.is_empty());
    assert_eq!(record.id.as_deref(), Some("Products(2)"));
}

#[test]
fn the_collection_covers_every_product() {
    let records = service().read_collection("Products", None).unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn the_featured_function_answers_with_a_record() {
    let record = service()
        .invoke_function("featuredProduct", &ParameterMap::new())
        .unwrap()
        .expect("function returns a product");
    assert_eq!(record.id.as_deref(), Some("Products(1)"));
}
