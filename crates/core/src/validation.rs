//! Input validation for the public flow: national id normalization and
//! length rules, and the companion count range.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Upper bound for additional people on a single response.
pub const MAX_COMPANIONS: i64 = 10;

/// Strip everything that is not a digit. Input fields apply this before
/// validation so separators and stray spaces do not reject an entry.
pub fn normalize_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Length bounds for a national id. Deployments with other id schemes
/// override the bounds via env.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRules {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for IdRules {
    fn default() -> Self {
        Self {
            min_len: 10,
            max_len: 11,
        }
    }
}

impl IdRules {
    /// Validate an id entry: length bounds first, then digits only. Returns
    /// the trimmed entry, or the user-facing message on violation.
    pub fn validate(&self, raw: &str) -> Result<String, CoreError> {
        let entry = raw.trim();
        if entry.len() < self.min_len || entry.len() > self.max_len {
            return Err(CoreError::Validation(format!(
                "La cédula debe tener entre {} y {} dígitos",
                self.min_len, self.max_len
            )));
        }
        if !DIGITS_RE.is_match(entry) {
            return Err(CoreError::Validation(
                "La cédula solo debe contener números".to_string(),
            ));
        }
        Ok(entry.to_string())
    }
}

/// Parse a companion count entry. Empty input counts as zero; anything else
/// must be an integer within `0..=MAX_COMPANIONS`.
pub fn validate_companions(raw: &str) -> Result<i64, CoreError> {
    let trimmed = raw.trim();
    let count = if trimmed.is_empty() {
        0
    } else {
        trimmed.parse::<i64>().map_err(|_| {
            CoreError::Validation(
                "El número de personas adicionales debe estar entre 0 y 10".to_string(),
            )
        })?
    };
    if !(0..=MAX_COMPANIONS).contains(&count) {
        return Err(CoreError::Validation(
            "El número de personas adicionales debe estar entre 0 y 10".to_string(),
        ));
    }
    Ok(count)
}
