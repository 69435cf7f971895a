use super::error::ApiError;
use super::protocol::ContactPayload;
use crate::contacts::Contact;

/// Which id rules apply to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationGroup {
    /// `id` must be absent.
    Create,
    /// `id` must be present.
    Update,
}

/// Checks a payload against `group` and turns it into a contact.
///
/// All violations are collected so the client sees every problem at once.
pub fn validate(payload: ContactPayload, group: ValidationGroup) -> Result<Contact, ApiError> {
    let mut errors = Vec::new();

    match (group, payload.id) {
        (ValidationGroup::Create, Some(_)) => errors.push("id should be empty".to_string()),
        (ValidationGroup::Update, None) => errors.push("id should not be empty".to_string()),
        _ => {}
    }
    if is_blank(payload.name.as_deref()) {
        errors.push("name must not be blank".to_string());
    }
    if is_blank(payload.phone_number.as_deref()) {
        errors.push("phoneNumber must not be blank".to_string());
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(Contact {
        id: payload.id,
        name: payload.name.unwrap_or_default(),
        phone_number: payload.phone_number.unwrap_or_default(),
    })
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
