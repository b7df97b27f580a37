//! 请求校验
//!
//! One schema covers both resources: an optional `id` that must be exactly
//! 36 characters and an optional `name` of at least 3. Absent fields are not
//! checked. Only the first violation is reported, `id` before `name`.

use validator::{Validate, ValidationErrors};

use super::error::CoreError;

const NAME_REQUIRED_MESSAGE: &str = "\"name\" is required";

#[derive(Debug, Default, Validate)]
struct EntitySchema {
    #[validate(length(equal = 36, message = "\"id\" length must be 36 characters long"))]
    id: Option<String>,
    #[validate(length(min = 3, message = "\"name\" length must be at least 3 characters long"))]
    name: Option<String>,
}

/// 校验路径中的 id
pub fn check_id(id: &str) -> Result<(), CoreError> {
    run(EntitySchema {
        id: Some(id.to_string()),
        ..Default::default()
    })
}

/// 校验请求体中的 name
pub fn check_name(name: Option<&str>) -> Result<(), CoreError> {
    let name = name.ok_or_else(|| CoreError::bad_request(NAME_REQUIRED_MESSAGE))?;
    run(EntitySchema {
        name: Some(name.to_string()),
        ..Default::default()
    })
}

/// 同时校验 id 和 name
pub fn check_id_and_name(id: &str, name: Option<&str>) -> Result<(), CoreError> {
    run(EntitySchema {
        id: Some(id.to_string()),
        name: name.map(str::to_string),
    })?;
    if name.is_none() {
        return Err(CoreError::bad_request(NAME_REQUIRED_MESSAGE));
    }
    Ok(())
}

fn run(schema: EntitySchema) -> Result<(), CoreError> {
    schema.validate().map_err(first_failure)
}

fn first_failure(errors: ValidationErrors) -> CoreError {
    let message = ["id", "name"]
        .iter()
        .find_map(|field| message_for(&errors, field))
        .unwrap_or_else(|| errors.to_string());
    CoreError::BadRequest(message)
}

fn message_for(errors: &ValidationErrors, field: &str) -> Option<String> {
    let fields = errors.field_errors();
    let failures = fields
        .iter()
        .find(|(name, _)| AsRef::<str>::as_ref(*name) == field)
        .map(|(_, failures)| *failures)?;

    failures
        .iter()
        .find_map(|failure| failure.message.as_ref().map(|m| m.to_string()))
}
