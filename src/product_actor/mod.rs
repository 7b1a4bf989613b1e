//! # Product Actor
//!
//! The product registry: one [`ResourceActor`] that exclusively owns the ordered collection of
//! products and applies add, update, delete and search requests one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]:
//!   validation, numeric coercion and the search predicate
//! - [`error`] - [`ValidationError`] and [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use inventory_trac::clients::DeleteOutcome;
//! use inventory_trac::product_actor;
//! use inventory_trac::model::ProductDraft;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.add_product(ProductDraft::new("6", "Mouse", "19.99")).await?;
//!     let mouse = client.get(id).await?.expect("just added");
//!     assert_eq!(mouse.quantity, 0);
//!
//!     // Declining the confirmation leaves the registry alone
//!     assert_eq!(client.delete_product(id, &mut false).await?, DeleteOutcome::Declined);
//!     assert_eq!(client.list().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
