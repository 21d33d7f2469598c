//! Helpers for turning `validator` results into envelope messages.

use url::Url;
use validator::{ValidationError, ValidationErrors};

/// Validates a destination URL field.
///
/// An empty value fails with code `required`. Anything that does not parse
/// as an absolute URL with a host fails with code `url`, as does a value
/// containing control characters: the URL parser strips tabs and newlines,
/// but the raw value must still be a valid `Location` header.
pub fn validate_destination(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("url"));
    }

    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(ValidationError::new("url")),
    }
}

/// Renders every field error as a `Field ...` message, joined with `, `.
///
/// Messages are sorted so the output is stable regardless of map order.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| describe_field_error(&field, err))
                .collect::<Vec<_>>()
        })
        .collect();

    messages.sort();
    messages.join(", ")
}

fn describe_field_error(field: &str, err: &ValidationError) -> String {
    let name = field.to_ascii_uppercase();

    match err.code.as_ref() {
        "required" => format!("Field '{name}' is required"),
        "url" => format!("Field {name} is not a valid URL"),
        _ => format!("Field {name} is not valid"),
    }
}
