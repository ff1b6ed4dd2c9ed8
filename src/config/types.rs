//! Runtime configuration for the catalog server.

use std::time::Duration;

/// Number of generated records each collection starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedCounts {
    pub products: usize,
    pub users: usize,
    pub categories: usize,
    pub brands: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            products: 5,
            users: 10,
            categories: 6,
            brands: 5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Artificial pause before the product listing resolves.
    pub product_list_delay: Duration,
    /// Fixed seed for generated data; `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Reject create/update bodies that break per-record rules (422).
    pub strict_validation: bool,
    pub body_limit: usize,
    pub seed_counts: SeedCounts,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            product_list_delay: Duration::ZERO,
            seed: None,
            strict_validation: false,
            body_limit: 1024 * 1024,
            seed_counts: SeedCounts::default(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
