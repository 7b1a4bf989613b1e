//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); every actor
//! event already carries an `entity_type` field. Output goes to stderr so it never
//! interleaves with tables printed on stdout.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, Update, Delete, Search, List
//! - **Client Calls**: One span per client method (`#[instrument]`)
//! - **Rejections**: Validation failures and duplicate ids, with the offending id
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations
//! RUST_LOG=info inventory-trac
//!
//! # Full payloads and every read
//! RUST_LOG=debug inventory-trac
//! ```
//!
//! With `RUST_LOG=debug` a rejected insert reads:
//!
//! ```text
//! DEBUG add_product: Sending request
//! DEBUG Create entity_type="Product" params=ProductDraft { id: "2", name: "Tablet", .. }
//!  WARN Create rejected, id already exists entity_type="Product" id=2
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"warn"`) applies.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
