#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Inventory Trac
//!
//! > **A single-operator product inventory, held in memory by one actor.**
//!
//! The registry is an ordered list of products with caller-chosen ids. It lives for the
//! lifetime of the process: nothing is persisted, and a reload starts over from a
//! five-product seed catalog.
//!
//! ## 🏗️ Design
//!
//! The registry is a [`ResourceActor`](actor_framework::ResourceActor) from the
//! `actor-framework` crate. It runs in its own Tokio task and is the only owner of the
//! product list, so every add, update, delete and search is applied atomically and in the
//! order it was sent.
//!
//! - **Validation** happens inside the actor, in the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Product`](model::Product). A refused record never touches the registry.
//! - **Confirmation** of deletes is a seam: the [`Confirm`](clients::Confirm) trait lets the
//!   console prompt, and lets tests answer with a plain `bool`.
//! - **UI state** (staged form, edit mode, search query) lives in the
//!   [`Session`](console::Session), outside the actor.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product), its id, and the raw-text [`ProductDraft`](model::ProductDraft)
//! the form stages.
//!
//! ### 2. The Registry ([`product_actor`])
//! Validation, numeric coercion, the search predicate and the error types.
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) wraps the generic `ResourceClient` and maps
//! framework errors back to domain errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem): start, seed, reload and shutdown.
//!
//! ### 5. The Screen ([`console`])
//! A line-oriented console with a live-filtered table and an add/edit form.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Interactive console
//! cargo run
//!
//! # One-shot search, as JSON
//! cargo run -- --search laptop --format json
//!
//! # Debug logs on stderr
//! RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
