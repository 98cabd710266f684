//! Field-level validation rules.
//!
//! # Responsibility
//! - Provide the small rule checks the input form composes.
//!
//! # Invariants
//! - String checks operate on trimmed values.
//! - An unset bound never fails a check.

/// Declarative rules for one string field.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl StringRules {
    /// Returns whether `value` satisfies every set rule.
    pub fn check(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return false;
        }
        if let Some(min) = self.min_length {
            if trimmed.chars().count() < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return false;
            }
        }
        true
    }
}

/// Declarative bounds for one numeric field.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRules {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl NumberRules {
    /// Returns whether `value` lies within the set bounds (inclusive).
    pub fn check(&self, value: i64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}
