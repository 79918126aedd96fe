//! Input validation helpers built on the `validator` derive

use validator::Validate;

use crate::error::{Error, Result};

/// Run the derived validation rules for `value`, mapping failures to [`Error::Validation`]
pub fn ensure_valid<T: Validate>(value: &T) -> Result<()> {
    value
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))
}
