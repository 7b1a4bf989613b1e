//! Runtime settings for an [`InventorySystem`](crate::lifecycle::InventorySystem).
//!
//! Built from the command line in `main`; log filtering is configured separately through
//! `RUST_LOG`.

/// Default capacity of the product actor's request channel.
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Requests that may queue before senders wait.
    pub capacity: usize,
    /// Whether a fresh registry (at start and on reload) holds the example catalog.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: true,
        }
    }
}
