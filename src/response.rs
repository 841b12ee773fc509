use mealwise_shared::Error;
use serde::Serialize;
use serde_json::Value;

/// JSON envelope printed for every command.
///
/// `{ "success": true, "data": ... }` or
/// `{ "success": false, "message": ..., "errors": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Envelope {
    pub fn data(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: vec![],
        }
    }

    pub fn error(error: &Error) -> Self {
        let (message, errors) = match error {
            Error::Validate(_) => ("Validation Error".to_owned(), error.messages()),
            Error::Unknown(_) => ("Internal server error".to_owned(), vec![]),
            other => (other.to_string(), vec![]),
        };

        Self {
            success: false,
            data: None,
            message: Some(message),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(Envelope::data(serde_json::json!({"id": "r1"}))).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": {"id": "r1"}}));
    }

    #[test]
    fn test_validation_envelope_lists_messages() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "servings",
            ValidationError::new("range").with_message("Servings must be at least 1".into()),
        );
        errors.add(
            "name",
            ValidationError::new("length").with_message("Recipe name is required".into()),
        );

        let json = serde_json::to_value(Envelope::error(&Error::Validate(errors))).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation Error");
        assert_eq!(
            json["errors"],
            serde_json::json!(["Recipe name is required", "Servings must be at least 1"])
        );
    }

    #[test]
    fn test_not_found_envelope() {
        let json =
            serde_json::to_value(Envelope::error(&Error::NotFound("recipe".to_owned()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "recipe not found"})
        );
    }
}
