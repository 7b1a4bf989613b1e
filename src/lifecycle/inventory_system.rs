use crate::clients::ProductClient;
use crate::config::Config;
use crate::product_actor::{self, ProductError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, info};

use super::seed;

/// Errors raised while bringing the system up or down.
#[derive(Debug, Error)]
pub enum SystemError {
    /// A seed record was refused by the registry.
    #[error("Seeding failed: {0}")]
    Seed(#[from] ProductError),

    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The runtime orchestrator for the product registry.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Seeding**: Filling a fresh registry with the example catalog
/// - **Reload**: Discarding all state, as if the process had restarted
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    config: Config,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns the product actor and, unless disabled, seeds it.
    pub async fn start(config: Config) -> Result<Self, SystemError> {
        let (product_actor, product_client) = product_actor::new(config.capacity);
        let handle = tokio::spawn(product_actor.run(()));

        let system = Self {
            product_client,
            config,
            handle,
        };

        if system.config.seed {
            for draft in seed::catalog() {
                system.product_client.add_product(draft).await?;
            }
        }

        info!(seeded = system.config.seed, "Inventory system started");
        Ok(system)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops every piece of state and starts over from the seed catalog.
    pub async fn reload(self) -> Result<Self, SystemError> {
        info!("Reloading system...");
        let config = self.config.clone();
        self.shutdown().await?;
        Self::start(config).await
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor drains what is left and exits.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::ActorClient;

    #[tokio::test]
    async fn test_start_seeds_the_catalog_in_order() {
        let system = InventorySystem::start(Config::default()).await.unwrap();

        let names: Vec<String> = system
            .product_client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Phone", "Laptop", "Table", "Pen", "Asus Laptop"]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unseeded_start_is_empty() {
        let config = Config {
            seed: false,
            ..Config::default()
        };
        let system = InventorySystem::start(config).await.unwrap();
        assert!(system.product_client.list().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }
}
