//! # System Lifecycle
//!
//! Starting, seeding, reloading and stopping the product registry.
//!
//! ## The InventorySystem Pattern
//!
//! ```rust,ignore
//! // 1. Create the actor, 2. spawn its loop, 3. seed it through the client
//! let system = InventorySystem::start(Config::default()).await?;
//!
//! // Discard everything and begin again from the seed catalog
//! let system = system.reload().await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - Drains remaining messages, logs the final size
//! 4. **Await completion** - The join handle reports a panicked actor as an error
//!
//! The system owns the only [`ProductClient`](crate::clients::ProductClient); callers borrow it.
//! A clone kept alive elsewhere would hold the actor open and stall shutdown.

pub mod inventory_system;
pub mod seed;

pub use inventory_system::*;
