//! The product record and its text-based inputs.
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for Products.
///
/// Displays as the bare decimal number, which is also what searches match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation payload ([`ProductDraft`])
/// - Update payload ([`ProductUpdate`])
/// - The search predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, chosen by the operator
    /// * `name` - Product name
    /// * `description` - Free text, may be empty
    /// * `price` - Unit price
    /// * `quantity` - Available stock quantity
    pub fn new(
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }
}

/// One of the five inputs of the staged buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Id,
    Name,
    Description,
    Price,
    Quantity,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Id,
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
        DraftField::Quantity,
    ];

    /// Fields an insert cannot do without.
    pub const REQUIRED: [DraftField; 3] = [DraftField::Id, DraftField::Name, DraftField::Price];

    /// Human-facing label, as shown in forms and messages.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Id => "ID",
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Quantity => "Quantity",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A field name that none of the buffer inputs answers to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0} (expected id, name, description, price or quantity)")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The staged buffer: a candidate record as typed, every field still raw text.
///
/// Used as the creation payload; [`ProductDraft::update`] derives the update payload
/// from the same buffer while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl ProductDraft {
    /// A draft with the three required inputs filled in.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Copies a stored record back into text inputs, as when entering edit mode.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Id => &self.id,
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Id => &mut self.id,
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
            DraftField::Quantity => &mut self.quantity,
        };
        *slot = value.into();
    }

    /// Required fields left empty, in form order. Whitespace counts as an entry.
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    /// Everything but the identity, for the update path.
    pub fn update(&self) -> ProductUpdate {
        ProductUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            quantity: self.quantity.clone(),
        }
    }
}

/// Replacement values for an existing product, as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}
