use std::collections::HashMap;

pub const TEXT_MIN_LEN: usize = 10;
pub const TEXT_MAX_LEN: usize = 300;

pub struct ValidationOutcome {
    pub errors: HashMap<String, String>,
    pub is_valid: bool,
}

/// Validate the text field shared by post-creation and comment payloads.
///
/// A missing text is normalized to the empty string before the checks run.
/// For empty text both checks fire and the "required" message, inserted
/// last, is the one that sticks.
pub fn validate_post_input(text: Option<&str>) -> ValidationOutcome {
    let mut errors = HashMap::new();
    let text = text.unwrap_or("");

    let length = text.chars().count();
    if length < TEXT_MIN_LEN || length > TEXT_MAX_LEN {
        errors.insert(
            "text".to_string(),
            "post length must be between 10 and 300".to_string(),
        );
    }
    if text.is_empty() {
        errors.insert("text".to_string(), "text field is required".to_string());
    }

    let is_valid = errors.is_empty();
    ValidationOutcome { errors, is_valid }
}
