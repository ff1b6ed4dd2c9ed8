//! Shared application state: one store per resource, built once at startup.

use crate::config::ServerConfig;
use crate::model::{Brand, Category, Movie, Product, Record, User};
use crate::seed::Faker;
use crate::store::ResourceStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ResourceStore<Product>>,
    pub users: Arc<ResourceStore<User>>,
    pub categories: Arc<ResourceStore<Category>>,
    pub brands: Arc<ResourceStore<Brand>>,
    pub movies: Arc<ResourceStore<Movie>>,
    pub strict_validation: bool,
}

impl AppState {
    /// Build and seed every collection from `config`.
    pub fn new(config: &ServerConfig) -> Self {
        let mut faker = Faker::from_seed(config.seed);
        let counts = &config.seed_counts;
        let state = Self {
            products: Arc::new(ResourceStore::seeded(
                counts.products,
                faker.fork(),
                config.product_list_delay,
            )),
            users: Arc::new(ResourceStore::seeded(counts.users, faker.fork(), Duration::ZERO)),
            categories: Arc::new(ResourceStore::seeded(
                counts.categories,
                faker.fork(),
                Duration::ZERO,
            )),
            brands: Arc::new(ResourceStore::seeded(counts.brands, faker.fork(), Duration::ZERO)),
            movies: Arc::new(ResourceStore::with_records(
                Movie::fixtures(),
                faker.fork(),
                Duration::ZERO,
            )),
            strict_validation: config.strict_validation,
        };
        tracing::info!(
            products = counts.products,
            users = counts.users,
            categories = counts.categories,
            brands = counts.brands,
            movies = crate::model::movie::FIXTURE_COUNT,
            "collections seeded"
        );
        state
    }

    /// Adapter-side handle for one collection.
    pub fn resource<R: Record>(&self, store: &Arc<ResourceStore<R>>) -> Resource<R> {
        Resource {
            store: store.clone(),
            strict_validation: self.strict_validation,
        }
    }
}

/// What a resource's routes need: its store and the validation switch.
pub struct Resource<R> {
    pub store: Arc<ResourceStore<R>>,
    pub strict_validation: bool,
}

impl<R> Clone for Resource<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            strict_validation: self.strict_validation,
        }
    }
}
