use super::{IdStrategy, Record};
use crate::seed::Faker;
use crate::validation::{FieldRules, ValidationRule};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

pub const CATEGORY_ID: &str = "categoryId";
pub const BRAND_ID: &str = "brandId";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    /// Opaque reference to a category id; not checked against the categories collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Opaque reference to a brand id; not checked against the brands collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Whole prices are written as JSON integers, so a posted `10` reads back as `10`.
fn serialize_price<S: Serializer>(price: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match price {
        Some(p) if p.fract() == 0.0 && p.abs() < EXACT_INTEGER_LIMIT => {
            serializer.serialize_i64(*p as i64)
        }
        Some(p) => serializer.serialize_f64(*p),
        None => serializer.serialize_none(),
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";
    const PATH: &'static str = "products";
    const TAG: &'static str = "Products";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;
    const RULES: FieldRules = &[
        ("productName", ValidationRule::required().min_length(1)),
        ("price", ValidationRule::required().minimum(0.0)),
        ("stock", ValidationRule::optional().minimum(0.0)),
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
            image: Some(faker.image_url()),
            product_name: Some(faker.product_name()),
            description: Some(faker.product_description()),
            price: Some(faker.price()),
            stock: Some(i64::from(faker.stock())),
            category_id: Some(faker.uuid()),
            brand_id: Some(faker.uuid()),
            active: None,
        }
    }

    fn foreign_key(&self, field: &str) -> Option<&str> {
        match field {
            CATEGORY_ID => self.category_id.as_deref(),
            BRAND_ID => self.brand_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_and_skips_unset_fields() {
        let product = Product {
            id: "1".into(),
            product_name: Some("Lamp".into()),
            category_id: Some("c1".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&product).unwrap();
        assert_eq!(v, json!({ "id": "1", "productName": "Lamp", "categoryId": "c1" }));
    }

    #[test]
    fn whole_prices_stay_integers_on_the_wire() {
        let whole: Product = serde_json::from_value(json!({ "price": 10 })).unwrap();
        assert_eq!(serde_json::to_value(&whole).unwrap()["price"], json!(10));
        assert_eq!(serde_json::to_string(&whole).unwrap(), r#"{"id":"","price":10}"#);

        let fractional: Product = serde_json::from_value(json!({ "price": 10.5 })).unwrap();
        assert_eq!(serde_json::to_value(&fractional).unwrap()["price"], json!(10.5));
    }

    #[test]
    fn seeded_prices_are_whole_numbers() {
        let product = Product::generate(&mut Faker::seeded(5));
        let v = serde_json::to_value(&product).unwrap();
        assert!(v["price"].is_u64());
    }

    #[test]
    fn foreign_keys_resolve_by_wire_name() {
        let product = Product {
            category_id: Some("c1".into()),
            brand_id: Some("b1".into()),
            ..Default::default()
        };
        assert_eq!(product.foreign_key(CATEGORY_ID), Some("c1"));
        assert_eq!(product.foreign_key(BRAND_ID), Some("b1"));
        assert_eq!(product.foreign_key("stock"), None);
    }
}
