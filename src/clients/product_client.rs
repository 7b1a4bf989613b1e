//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the registry operations; `get`, `list`
//! and `search` come from [`ActorClient`].
use crate::clients::Confirm;
use crate::model::{Product, ProductDraft, ProductId, ProductUpdate};
use crate::product_actor::{ProductError, ValidationError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// The question asked before a product is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// What a delete request came to.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The operator said no; nothing was sent to the registry.
    Declined,
    /// No product carries the id; the registry is unchanged.
    NotFound,
    /// The product was removed.
    Deleted(Product),
}

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Recovers the [`ValidationError`] an entity refusal travels in.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::AlreadyExists(id) => ValidationError::DuplicateId(id).into(),
            FrameworkError::EntityError(inner) => match inner.downcast::<ValidationError>() {
                Ok(validation) => (*validation).into(),
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Validates the candidate and appends it to the registry.
    ///
    /// Fails with [`ValidationError::MissingFields`], [`ValidationError::InvalidNumber`] or
    /// [`ValidationError::DuplicateId`]; the registry is unchanged in each case.
    #[instrument(skip(self))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Replaces every field but the id. `None` when nothing carries `id`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Asks `confirm`, and only on a yes removes the product.
    #[instrument(skip(self, confirm))]
    pub async fn delete_product<C: Confirm + ?Sized>(
        &self,
        id: ProductId,
        confirm: &mut C,
    ) -> Result<DeleteOutcome, ProductError> {
        if !confirm.confirm(DELETE_PROMPT).await {
            info!("Delete declined");
            return Ok(DeleteOutcome::Declined);
        }
        debug!("Sending request");
        let removed = self.inner.delete(id).await.map_err(Self::map_error)?;
        Ok(removed.map_or(DeleteOutcome::NotFound, DeleteOutcome::Deleted))
    }
}
