use serde::Serialize;
use utoipa::ToSchema;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collects field errors while an input is checked so that every failure is
/// reported at once instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    /// A string that must be present and at least `min_len` characters long.
    /// Returns an empty placeholder when rejected.
    pub fn required(
        &mut self,
        field: &str,
        value: Option<String>,
        min_len: usize,
        message: &str,
    ) -> String {
        match value {
            Some(v) if v.chars().count() >= min_len => v,
            Some(_) => {
                self.push(field, message);
                String::new()
            }
            None => {
                self.push(field, "Required");
                String::new()
            }
        }
    }

    /// Like `required`, but whitespace-only input counts as empty.
    pub fn required_text(&mut self, field: &str, value: Option<String>, message: &str) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            Some(_) => {
                self.push(field, message);
                String::new()
            }
            None => {
                self.push(field, "Required");
                String::new()
            }
        }
    }

    /// A string that may be absent but, if present, must meet `min_len`.
    pub fn optional(
        &mut self,
        field: &str,
        value: Option<String>,
        min_len: usize,
        message: &str,
    ) -> Option<String> {
        match value {
            Some(v) if v.chars().count() < min_len => {
                self.push(field, message);
                None
            }
            other => other,
        }
    }

    /// A list that must be present with at least `min_items` entries.
    pub fn required_list(
        &mut self,
        field: &str,
        value: Option<Vec<String>>,
        min_items: usize,
        message: &str,
    ) -> Vec<String> {
        match value {
            Some(items) if items.len() >= min_items => items,
            Some(_) => {
                self.push(field, message);
                Vec::new()
            }
            None => {
                self.push(field, "Required");
                Vec::new()
            }
        }
    }

    /// A list that may be absent but, if present, must hold `min_items`.
    pub fn optional_list(
        &mut self,
        field: &str,
        value: Option<Vec<String>>,
        min_items: usize,
        message: &str,
    ) -> Option<Vec<String>> {
        match value {
            Some(items) if items.len() < min_items => {
                self.push(field, message);
                None
            }
            other => other,
        }
    }

    pub fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}
