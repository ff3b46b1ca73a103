//! Field limits and validation for log entries and tasks.
//!
//! Handlers call these before any insert; repositories assume input has
//! already passed.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a log entry category in characters.
pub const MAX_CATEGORY_LENGTH: usize = 50;

/// Maximum length of a task description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a log entry category: non-blank and within the length limit.
pub fn validate_category(category: &str) -> Result<(), String> {
    if category.trim().is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    if category.chars().count() > MAX_CATEGORY_LENGTH {
        return Err(format!(
            "Category exceeds maximum length of {MAX_CATEGORY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a log entry outcome: must be non-blank.
pub fn validate_outcome(outcome: &str) -> Result<(), String> {
    if outcome.trim().is_empty() {
        return Err("Outcome cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a task description: non-blank and within the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}
