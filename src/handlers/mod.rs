//! HTTP handlers for resource CRUD and product lookups.

pub mod product;
pub mod resource;
