//! Shape validation for registration input.

use super::errors::{RegistrationError, RegistrationResult};

/// Longest accepted player name, in characters
pub const MAX_PLAYER_NAME_CHARS: usize = 100;

/// Validate a candidate player name and return it trimmed
///
/// # Errors
///
/// [`RegistrationError::MalformedInput`] if the name is blank, too long or
/// contains control characters.
pub fn validate_player_name(name: &str) -> RegistrationResult<&str> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(RegistrationError::MalformedInput(
            "name must not be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_PLAYER_NAME_CHARS {
        return Err(RegistrationError::MalformedInput(format!(
            "name must be at most {MAX_PLAYER_NAME_CHARS} characters"
        )));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(RegistrationError::MalformedInput(
            "name must not contain control characters".to_string(),
        ));
    }

    Ok(trimmed)
}
