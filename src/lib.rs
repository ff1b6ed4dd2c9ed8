//! Catalog API: in-memory REST collections for products, users, categories, brands and movies.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fallback;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{load_from_env, ServerConfig, SeedCounts};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Brand, Category, IdStrategy, Movie, Product, Record, User};
pub use routes::{api_routes, app, common_routes, with_middleware};
pub use seed::Faker;
pub use state::{AppState, Resource};
pub use store::ResourceStore;
