use super::{IdStrategy, Record};
use crate::seed::Faker;
use crate::validation::{FieldRules, ValidationRule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Generated at random when omitted on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Record for Category {
    const KIND: &'static str = "Category";
    const PATH: &'static str = "categories";
    const TAG: &'static str = "Categories";
    const ID_STRATEGY: IdStrategy = IdStrategy::Uuid;
    const RULES: FieldRules = &[
        ("categoryName", ValidationRule::required().min_length(1)),
        ("description", ValidationRule::required()),
        ("active", ValidationRule::required()),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn generate(faker: &mut Faker) -> Self {
        Self {
            id: String::new(),
            category_name: Some(faker.department()),
            description: Some(faker.sentence()),
            active: Some(faker.boolean()),
        }
    }

    fn fill_defaults(&mut self, faker: &mut Faker) {
        if self.active.is_none() {
            self.active = Some(faker.boolean());
        }
    }
}
