use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten `validator` errors into one human-readable line per failed rule,
/// sorted by field name so responses are stable.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut messages = Vec::new();
    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(format!("{} is invalid", field)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                messages.extend(validation_messages(nested));
            }
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    messages.extend(validation_messages(nested));
                }
            }
        }
    }
    messages
}

/// Join all validation messages into the single message carried by
/// `AppError::Validation`.
pub fn validation_message(errors: &ValidationErrors) -> String {
    validation_messages(errors).join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(
            required(message = "score is required"),
            range(min = 1, max = 5, message = "score must be between 1 and 5")
        )]
        score: Option<i32>,
        #[validate(length(min = 1))]
        label: String,
    }

    #[test]
    fn test_messages_are_sorted_by_field() {
        let sample = Sample {
            score: Some(9),
            label: String::new(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            validation_messages(&errors),
            vec![
                "label is invalid".to_string(),
                "score must be between 1 and 5".to_string()
            ]
        );
    }

    #[test]
    fn test_missing_required_field() {
        let sample = Sample {
            score: None,
            label: "ok".to_string(),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(validation_message(&errors), "score is required");
    }
}
