//! Type-safe clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient).

pub mod confirm;
pub mod product_client;

pub use confirm::*;
pub use product_client::*;
