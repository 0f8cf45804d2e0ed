// src/form/errors.rs
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::models::Field;

/// Current message per field, including the synthetic `apiError` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBag {
    messages: BTreeMap<Field, String>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.messages.remove(&field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<&ValidationErrors> for ErrorBag {
    fn from(errors: &ValidationErrors) -> Self {
        let mut bag = ErrorBag::new();
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = Field::from_name(name) else {
                continue;
            };
            // first failing rule wins, like a form library reports it
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                bag.set(field, message);
            }
        }
        bag
    }
}
