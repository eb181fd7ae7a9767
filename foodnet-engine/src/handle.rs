use crate::{error::Result, network::Network};
use foodnet_structs::{config::NetworkConfig, core::NodeDefinition};
use parking_lot::RwLock;
use std::{ops::Deref, sync::Arc};
use tracing::debug;

/// Shared, immutable snapshot of a built network. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct NetworkHandle(Arc<Network>);

impl NetworkHandle {
    pub fn new(network: Network) -> Self {
        Self(Arc::new(network))
    }

    pub fn build(
        definitions: Vec<NodeDefinition>,
        config: &NetworkConfig,
        rng_seed: Option<[u8; 32]>,
    ) -> Result<Self> {
        let network = match rng_seed {
            Some(seed) => Network::from_seed(definitions, config, seed)?,
            None => Network::from_entropy(definitions, config)?,
        };
        Ok(Self::new(network))
    }

    pub fn same_snapshot(&self, other: &NetworkHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for NetworkHandle {
    type Target = Network;

    fn deref(&self) -> &Network {
        &self.0
    }
}

/// Holds the current snapshot for a service layer.
///
/// Readers take a handle and keep using it for the whole call. A rebuild constructs
/// the new network without holding the lock and only takes the write lock to swap it in.
#[derive(Debug)]
pub struct NetworkSlot {
    config: NetworkConfig,
    current: RwLock<NetworkHandle>,
}

impl NetworkSlot {
    pub fn new(handle: NetworkHandle, config: NetworkConfig) -> Self {
        Self {
            config,
            current: RwLock::new(handle),
        }
    }

    pub fn snapshot(&self) -> NetworkHandle {
        self.current.read().clone()
    }

    /// Builds a fresh snapshot and swaps it in. On error the current snapshot is kept.
    pub fn rebuild(
        &self,
        definitions: Vec<NodeDefinition>,
        rng_seed: Option<[u8; 32]>,
    ) -> Result<NetworkHandle> {
        let handle = NetworkHandle::build(definitions, &self.config, rng_seed)?;
        self.replace(handle.clone());
        debug!("network snapshot replaced");
        Ok(handle)
    }

    /// Swaps in `handle`, returning the snapshot it replaced.
    pub fn replace(&self, handle: NetworkHandle) -> NetworkHandle {
        std::mem::replace(&mut *self.current.write(), handle)
    }
}
