use super::{IdStrategy, Record};
use crate::seed::Faker;
use crate::validation::{FieldRules, ValidationRule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Generated at random when omitted on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Record for Brand {
    const KIND: &'static str = "Brand";
    const PATH: &'static str = "brands";
    const TAG: &'static str = "Brands";
    const ID_STRATEGY: IdStrategy = IdStrategy::Uuid;
    const RULES: FieldRules = &[
        ("brandName", ValidationRule::required().min_length(1)),
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
            brand_name: Some(faker.company_name()),
            description: Some(faker.catch_phrase()),
            active: Some(faker.boolean()),
        }
    }

    fn fill_defaults(&mut self, faker: &mut Faker) {
        if self.active.is_none() {
            self.active = Some(faker.boolean());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_active_survives_defaults() {
        let mut faker = Faker::seeded(5);
        for _ in 0..20 {
            let mut brand = Brand {
                active: Some(false),
                ..Default::default()
            };
            brand.fill_defaults(&mut faker);
            assert_eq!(brand.active, Some(false));
        }
    }

    #[test]
    fn missing_active_gets_filled() {
        let mut faker = Faker::seeded(5);
        let mut brand = Brand::default();
        brand.fill_defaults(&mut faker);
        assert!(brand.active.is_some());
    }
}
