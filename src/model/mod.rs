//! Record types stored by the resource collections.

pub mod brand;
pub mod category;
pub mod movie;
pub mod product;
pub mod user;

pub use brand::Brand;
pub use category::Category;
pub use movie::Movie;
pub use product::Product;
pub use user::User;

use crate::seed::Faker;
use crate::validation::FieldRules;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;

/// How a collection assigns ids to new records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdStrategy {
    /// Random UUID v4 strings.
    Uuid,
    /// Decimal strings from a counter that never goes backwards ("1", "2", ...).
    Sequential,
}

/// One entity kind held by a [`ResourceStore`](crate::store::ResourceStore).
///
/// The JSON form of a record is its wire form and also the basis for
/// shallow-merge updates, so every non-id field should tolerate being absent.
pub trait Record:
    Clone + Debug + Serialize + DeserializeOwned + ToSchema + Send + Sync + 'static
{
    /// Singular display name, used in messages ("Product not found").
    const KIND: &'static str;
    /// Path segment under `/api/v1`.
    const PATH: &'static str;
    /// OpenAPI tag.
    const TAG: &'static str;
    const ID_STRATEGY: IdStrategy;
    /// Rules applied when strict validation is enabled.
    const RULES: FieldRules = &[];

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Build a placeholder record for seeding. The id is assigned by the store.
    fn generate(faker: &mut Faker) -> Self;

    /// Fill fields the caller left unset on create.
    fn fill_defaults(&mut self, _faker: &mut Faker) {}

    /// Value of a foreign-key-style field, if this record kind has one by that name.
    fn foreign_key(&self, _field: &str) -> Option<&str> {
        None
    }
}
