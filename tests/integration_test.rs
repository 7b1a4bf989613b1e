use actor_framework::ActorClient;
use inventory_trac::clients::DeleteOutcome;
use inventory_trac::config::Config;
use inventory_trac::lifecycle::InventorySystem;
use inventory_trac::model::{DraftField, Product, ProductDraft, ProductId};
use inventory_trac::product_actor::{ProductError, ValidationError};

async fn ids(system: &InventorySystem, query: &str) -> Vec<u64> {
    system
        .product_client
        .search(query.to_string())
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id.0)
        .collect()
}

#[tokio::test]
async fn test_full_inventory_session() {
    let system = InventorySystem::start(Config::default()).await.unwrap();
    let client = &system.product_client;
    assert_eq!(client.list().await.unwrap().len(), 5);

    // Add with an empty quantity
    let id = client
        .add_product(ProductDraft::new("6", "Mouse", "19.99"))
        .await
        .unwrap();
    assert_eq!(id, ProductId(6));
    let products = client.list().await.unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[5], Product::new(6, "Mouse", "", 19.99, 0));

    assert_eq!(ids(&system, "laptop").await, [2, 5]);

    // Declined delete leaves everything in place
    let outcome = client.delete_product(ProductId(2), &mut false).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(client.list().await.unwrap().len(), 6);

    let outcome = client.delete_product(ProductId(2), &mut true).await.unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(ref p) if p.name == "Laptop"));
    assert_eq!(ids(&system, "").await, [1, 3, 4, 5, 6]);

    // Update keeps the position, the id and the size; every other field is replaced
    let update = ProductDraft::new("1", "Smartphone", "599.99")
        .with_description("A flagship phone")
        .with_quantity("40")
        .update();
    let updated = client
        .update_product(ProductId(1), update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        updated,
        Product::new(1, "Smartphone", "A flagship phone", 599.99, 40)
    );
    let products = client.list().await.unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(products[0], updated);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_refused_adds_leave_registry_unchanged() {
    let system = InventorySystem::start(Config::default()).await.unwrap();
    let client = &system.product_client;
    let before = client.list().await.unwrap();

    let duplicate = client
        .add_product(ProductDraft::new("3", "Chair", "40"))
        .await;
    assert_eq!(
        duplicate,
        Err(ProductError::Validation(ValidationError::DuplicateId(
            "3".to_string()
        )))
    );

    // Leading zeros name the same id
    let duplicate = client
        .add_product(ProductDraft::new("003", "Chair", "40"))
        .await;
    assert!(matches!(
        duplicate,
        Err(ProductError::Validation(ValidationError::DuplicateId(_)))
    ));

    let missing = client
        .add_product(ProductDraft::new("7", "", "").with_quantity("3"))
        .await;
    assert_eq!(
        missing,
        Err(ProductError::Validation(ValidationError::MissingFields(
            vec![DraftField::Name, DraftField::Price]
        )))
    );

    let bad_price = client
        .add_product(ProductDraft::new("7", "Chair", "cheap"))
        .await;
    assert!(matches!(
        bad_price,
        Err(ProductError::Validation(ValidationError::InvalidNumber {
            field: DraftField::Price,
            ..
        }))
    ));

    assert_eq!(client.list().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_text_fields_are_stored_as_typed() {
    let system = InventorySystem::start(Config::default()).await.unwrap();
    let client = &system.product_client;

    // Whitespace is an entry, not a blank
    client
        .add_product(ProductDraft::new("6", "   ", "1"))
        .await
        .unwrap();
    client
        .add_product(ProductDraft::new("7", "  Mouse  ", "1").with_description(" wired "))
        .await
        .unwrap();

    let products = client.list().await.unwrap();
    assert_eq!(products.len(), 7);
    assert_eq!(products[5].name, "   ");
    assert_eq!(products[6], Product::new(7, "  Mouse  ", " wired ", 1.0, 0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_ids_are_no_ops() {
    let system = InventorySystem::start(Config::default()).await.unwrap();
    let client = &system.product_client;
    let before = client.list().await.unwrap();

    let update = ProductDraft::new("99", "Ghost", "1").update();
    assert_eq!(client.update_product(ProductId(99), update).await, Ok(None));
    assert_eq!(
        client.delete_product(ProductId(99), &mut true).await,
        Ok(DeleteOutcome::NotFound)
    );

    assert_eq!(client.list().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_matches_text_case_insensitively_and_ids_as_digits() {
    let system = InventorySystem::start(Config::default()).await.unwrap();

    assert_eq!(ids(&system, "LAPTOP").await, [2, 5]);
    assert_eq!(ids(&system, "ballpoint").await, [4]);
    assert_eq!(ids(&system, "3").await, [3]);
    assert_eq!(ids(&system, "").await, [1, 2, 3, 4, 5]);
    assert!(ids(&system, "zebra").await.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_discards_changes() {
    let system = InventorySystem::start(Config::default()).await.unwrap();
    system
        .product_client
        .add_product(ProductDraft::new("6", "Mouse", "19.99"))
        .await
        .unwrap();
    system
        .product_client
        .delete_product(ProductId(1), &mut true)
        .await
        .unwrap();

    let system = system.reload().await.unwrap();
    assert_eq!(ids(&system, "").await, [1, 2, 3, 4, 5]);

    system.shutdown().await.unwrap();
}
