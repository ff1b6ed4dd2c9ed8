//! Opt-in request validation from per-record rules.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Constraints for one field. Unset constraints are not checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub minimum: Option<f64>,
}

impl ValidationRule {
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            minimum: None,
        }
    }

    pub const fn optional() -> Self {
        Self {
            required: false,
            min_length: None,
            minimum: None,
        }
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn minimum(mut self, n: f64) -> Self {
        self.minimum = Some(n);
        self
    }
}

pub type FieldRules = &'static [(&'static str, ValidationRule)];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. All required fields must be present and non-null.
    pub fn validate(body: &Map<String, Value>, rules: FieldRules) -> Result<(), AppError> {
        for (field, rule) in rules {
            let val = body.get(*field);
            if rule.required && val.map_or(true, Value::is_null) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
            if let Some(v) = val {
                validate_field(field, v, rule)?;
            }
        }
        Ok(())
    }

    /// Validate only the fields present in body (for PATCH). Required fields may not be nulled out.
    pub fn validate_partial(body: &Map<String, Value>, rules: FieldRules) -> Result<(), AppError> {
        for (field, v) in body {
            if let Some((_, rule)) = rules.iter().find(|(name, _)| *name == field.as_str()) {
                if rule.required && v.is_null() {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
                validate_field(field, v, rule)?;
            }
        }
        Ok(())
    }
}

fn validate_field(field: &str, v: &Value, rule: &ValidationRule) -> Result<(), AppError> {
    if v.is_null() {
        return Ok(());
    }
    if let Some(min) = rule.min_length {
        if let Some(s) = v.as_str() {
            if s.trim().chars().count() < min {
                return Err(AppError::Validation(format!(
                    "{} must be at least {} characters",
                    field, min
                )));
            }
        }
    }
    if let Some(min) = rule.minimum {
        if let Some(n) = v.as_f64() {
            if n < min {
                return Err(AppError::Validation(format!("{} must be at least {}", field, min)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: FieldRules = &[
        ("brandName", ValidationRule::required().min_length(1)),
        ("active", ValidationRule::required()),
        ("price", ValidationRule::optional().minimum(0.0)),
    ];

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = RequestValidator::validate(&obj(json!({ "brandName": "Acme" })), RULES).unwrap_err();
        assert_eq!(err.to_string(), "active is required");
    }

    #[test]
    fn blank_string_fails_min_length() {
        let body = obj(json!({ "brandName": "  ", "active": true }));
        assert!(RequestValidator::validate(&body, RULES).is_err());
    }

    #[test]
    fn negative_number_fails_minimum() {
        let body = obj(json!({ "brandName": "Acme", "active": true, "price": -1 }));
        let err = RequestValidator::validate(&body, RULES).unwrap_err();
        assert_eq!(err.to_string(), "price must be at least 0");
    }

    #[test]
    fn partial_ignores_absent_required_fields() {
        assert!(RequestValidator::validate_partial(&obj(json!({ "price": 3 })), RULES).is_ok());
        assert!(RequestValidator::validate_partial(&obj(json!({ "active": null })), RULES).is_err());
    }
}
