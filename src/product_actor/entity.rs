//! ActorEntity trait implementation for the Product domain type.
//!
//! This is the one place where the text inputs of a [`ProductDraft`] or [`ProductUpdate`]
//! become typed fields. Coercion rules:
//!
//! - `id`: decimal integer; required on insert.
//! - `price`: finite, non-negative decimal; required on insert, coerced to `0` on update.
//! - `quantity`: any finite number, truncated and clamped to the `u32` range; anything
//!   else becomes `0`.
//! - `name`, `description`: stored exactly as typed.

use crate::model::{DraftField, Product, ProductDraft, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

use super::error::ValidationError;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductUpdate;
    type Query = String;
    type Context = ();
    type Error = ValidationError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Validates a candidate record and normalizes it.
    ///
    /// The uniqueness of the id is checked by the actor against its store, after this.
    fn from_create_params(draft: ProductDraft) -> Result<Self, ValidationError> {
        let missing = draft.missing_required();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let id = draft
            .id
            .parse::<ProductId>()
            .map_err(|_| invalid(DraftField::Id, &draft.id))?;
        let price =
            parse_price(&draft.price).ok_or_else(|| invalid(DraftField::Price, &draft.price))?;

        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            price,
            quantity: coerce_quantity(&draft.quantity),
        })
    }

    /// Case-insensitive substring match on name or description, or a plain substring
    /// match on the decimal id. The empty query matches every product.
    fn matches(&self, query: &String) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.id.to_string().contains(query.as_str())
    }

    /// Replaces every field but the id. Never fails.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ValidationError> {
        self.name = update.name;
        self.description = update.description;
        self.price = parse_price(&update.price).unwrap_or(0.0);
        self.quantity = coerce_quantity(&update.quantity);
        Ok(())
    }
}

fn invalid(field: DraftField, value: &str) -> ValidationError {
    ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn coerce_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(quantity) if quantity.is_finite() => {
            quantity.trunc().clamp(0.0, u32::MAX as f64) as u32
        }
        _ => 0,
    }
}
