//! # Actor Framework
//!
//! This crate provides the building blocks for owning a collection of stateful resources inside
//! a single Tokio task. It implements a **Resource-Oriented Architecture (ROA)** pattern on top
//! of the **Actor Model**: one actor per resource type, a uniform CRUD + search surface, and
//! message passing instead of shared memory.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic: validation, updates, search predicate
//! 2. **Storage Layer** ([`EntityStore`]) - Insertion-ordered collection with unique ids
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and exclusive ownership of the store
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! You write the business logic **once** in the entity trait, and the framework handles
//! the async message passing, error propagation and state ownership.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     isbn: u64,
//!     title: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("title must not be empty")]
//! struct EmptyTitle;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u64;
//!     type Create = (u64, String);
//!     type Update = String;
//!     type Query = String;
//!     type Context = ();
//!     type Error = EmptyTitle;
//!
//!     fn id(&self) -> &u64 { &self.isbn }
//!
//!     fn from_create_params((isbn, title): (u64, String)) -> Result<Self, Self::Error> {
//!         if title.is_empty() {
//!             return Err(EmptyTitle);
//!         }
//!         Ok(Self { isbn, title })
//!     }
//!
//!     fn matches(&self, query: &String) -> bool {
//!         self.title.to_lowercase().contains(&query.to_lowercase())
//!     }
//!
//!     async fn on_update(&mut self, title: String, _ctx: &()) -> Result<(), Self::Error> {
//!         self.title = title;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     client.create((42, "Dune".into())).await.unwrap();
//!     assert!(client.create((42, "Emma".into())).await.is_err()); // duplicate id
//!     assert!(client.create((7, String::new())).await.is_err()); // rejected by the entity
//!
//!     let hits = client.search("dU".into()).await.unwrap();
//!     assert_eq!(hits.len(), 1);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - Dropping every client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! The [`mock`] module hands out clients answered from canned expectations, so client logic
//! can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
