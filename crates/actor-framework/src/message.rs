//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to the standard lifecycle operations on a resource, plus two
/// read-only projections over the whole collection:
///
/// - **Create**: Uses [`ActorEntity::Create`] to build and append a new resource.
/// - **Get (Read)**: Fetches the current state of one resource by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
///   Answers `None` when nothing carries the ID.
/// - **Delete**: Removes a resource. Answers the removed resource, or `None`.
/// - **Search**: Every resource accepted by [`ActorEntity::matches`], in insertion order.
/// - **List**: Every resource, in insertion order.
///
/// The enum is generic over `T: ActorEntity`, so a `Product` payload can only ever
/// reach a `Product` actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Search {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
