use super::{IdStrategy, Record};
use crate::seed::Faker;
use crate::validation::{FieldRules, ValidationRule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Stored and returned as plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Record for User {
    const KIND: &'static str = "User";
    const PATH: &'static str = "users";
    const TAG: &'static str = "Users";
    const ID_STRATEGY: IdStrategy = IdStrategy::Uuid;
    const RULES: FieldRules = &[
        ("name", ValidationRule::required().min_length(1)),
        ("username", ValidationRule::required().min_length(3)),
        ("password", ValidationRule::required().min_length(8)),
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
            name: Some(faker.full_name()),
            username: Some(faker.username()),
            password: Some(faker.password()),
        }
    }
}
