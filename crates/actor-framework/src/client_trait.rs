//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default read methods
//! (`get`, `list`, `search`) built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct User { id: u32, name: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct UserError(String);
///
/// #[async_trait]
/// impl ActorEntity for User {
///     type Id = u32;
///     type Create = (u32, String);
///     type Update = String;
///     type Query = String;
///     type Context = ();
///     type Error = UserError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params((id, name): (u32, String)) -> Result<Self, Self::Error> {
///         Ok(Self { id, name })
///     }
///     fn matches(&self, query: &String) -> bool { self.name.contains(query.as_str()) }
///     async fn on_update(&mut self, name: String, _: &()) -> Result<(), Self::Error> {
///         self.name = name;
///         Ok(())
///     }
/// }
///
/// struct UserClient {
///     inner: ResourceClient<User>,
/// }
///
/// #[async_trait]
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///
///     fn inner(&self) -> &ResourceClient<User> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         UserError(e.to_string())
///     }
/// }
///
/// async fn usage(client: UserClient) {
///     // get(), list() and search() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.search("Al".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Every entity matching `query`, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().search(query).await.map_err(Self::map_error)
    }
}
