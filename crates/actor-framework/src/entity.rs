//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by the
//! generic `ResourceActor`. It names the identifier, the create/update payloads, the search query
//! and the error type, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Caller-assigned identity
//! Entities carry their own identifier. The actor never invents ids: it reads
//! [`ActorEntity::id`] from the freshly built entity and refuses the insert when the
//! store already holds that id.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// The `Context` type is injected into every hook when the actor starts running,
/// so dependencies can be bound late (passed to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The unvalidated payload a new instance is built from.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The search criteria understood by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every operation of the entity rather than one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Validate the payload and construct the full entity.
    /// This is called synchronously before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this instance belongs in the result of a search.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request targets this instance.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
