//! The transient UI state: staged buffer, add/edit mode and the live search query.
//!
//! A `Session` holds no products. Every operation that reads or changes the registry goes
//! through the [`ProductClient`] it is handed.

use crate::clients::{Confirm, DeleteOutcome, ProductClient};
use crate::model::{DraftField, Product, ProductDraft, ProductId};
use actor_framework::ActorClient;
use tracing::debug;

use super::ConsoleError;

/// Whether `save` inserts the buffer or writes it over an existing product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Adding,
    Editing(ProductId),
}

/// What a successful `save` did.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Added(ProductId),
    Updated(Product),
    /// The product under edit no longer exists; nothing changed.
    Vanished(ProductId),
}

#[derive(Debug, Default)]
pub struct Session {
    draft: ProductDraft,
    mode: Mode,
    query: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Writes one input of the staged buffer. The id input is locked while editing.
    pub fn stage(&mut self, field: DraftField, value: impl Into<String>) -> Result<(), ConsoleError> {
        if field == DraftField::Id && matches!(self.mode, Mode::Editing(_)) {
            return Err(ConsoleError::IdLocked);
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Empties the buffer and returns to adding mode.
    pub fn cancel(&mut self) {
        self.draft = ProductDraft::default();
        self.mode = Mode::Adding;
    }

    /// Forgets everything, query included, as after a reload.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copies an existing product into the buffer and switches to editing it.
    ///
    /// Returns `false`, leaving the session untouched, when no product carries `id`.
    pub async fn begin_edit(
        &mut self,
        client: &ProductClient,
        id: ProductId,
    ) -> Result<bool, ConsoleError> {
        let Some(product) = client.get(id).await? else {
            return Ok(false);
        };
        self.draft = ProductDraft::from_product(&product);
        self.mode = Mode::Editing(id);
        debug!(%id, "Editing");
        Ok(true)
    }

    /// Adds or updates from the buffer, depending on the mode.
    ///
    /// On success the buffer is emptied and the session is back in adding mode. On a
    /// refusal the buffer is kept so it can be corrected.
    pub async fn save(&mut self, client: &ProductClient) -> Result<Saved, ConsoleError> {
        let saved = match self.mode {
            Mode::Adding => Saved::Added(client.add_product(self.draft.clone()).await?),
            Mode::Editing(id) => match client.update_product(id, self.draft.update()).await? {
                Some(product) => Saved::Updated(product),
                None => Saved::Vanished(id),
            },
        };
        self.cancel();
        Ok(saved)
    }

    /// Deletes after asking `confirm`.
    pub async fn delete<C: Confirm + ?Sized>(
        &self,
        client: &ProductClient,
        id: ProductId,
        confirm: &mut C,
    ) -> Result<DeleteOutcome, ConsoleError> {
        Ok(client.delete_product(id, confirm).await?)
    }

    /// The products the table shows: everything matching the current query, in order.
    pub async fn view(&self, client: &ProductClient) -> Result<Vec<Product>, ConsoleError> {
        Ok(client.search(self.query.clone()).await?)
    }
}
