use anyhow::Result;
use catalog::{catalog_context, catalog_registry};
use odata_sdk::{EntityService, ExpandItem, ExpandOption, ParameterMap};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let service = EntityService::new(catalog_context(), catalog_registry());

    // One product, with both navigations expanded.
    let expand = ExpandOption::new(vec![
        ExpandItem::navigation("supplier"),
        ExpandItem::navigation("accessories"),
    ]);
    let flagship = service
        .read_entity("Products", "1", Some(&expand))?
        .expect("demo data always has product 1");
    println!("{}", serde_json::to_string_pretty(&flagship)?);

    // The whole set, links left unexpanded.
    let products = service.read_collection("Products", None)?;
    println!("{} products in the catalog", products.len());

    let featured = service
        .invoke_function("featuredProduct", &ParameterMap::new())?
        .expect("featuredProduct always answers");
    println!(
        "featured: {}",
        featured.id.as_deref().unwrap_or("<no id>")
    );

    Ok(())
}
