use std::collections::{HashMap, HashSet};

/// Validation state of a form: which fields the user has touched and the
/// current error per field.
///
/// Errors for untouched fields are held back so a fresh form starts clean;
/// submitting touches every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFeedback {
    touched: HashSet<String>,
    errors: HashMap<String, String>,
}

impl FormFeedback {
    /// Record an edit to `field` and replace the error map with `errors`.
    pub fn edit(&mut self, field: &str, errors: HashMap<String, String>) {
        self.touched.insert(field.to_string());
        self.errors = errors;
    }

    /// Touch every field in `fields` and replace the error map.
    pub fn submit(&mut self, fields: &[&str], errors: HashMap<String, String>) {
        self.touched
            .extend(fields.iter().map(|field| field.to_string()));
        self.errors = errors;
    }

    /// Errors reported by the server after a submit.
    pub fn merge_server_errors(&mut self, errors: HashMap<String, String>) {
        self.touched.extend(errors.keys().cloned());
        self.errors.extend(errors);
    }

    /// Error to show under `field`, if any.
    pub fn error(&self, field: &str) -> Option<String> {
        if self.touched.contains(field) {
            self.errors.get(field).cloned()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
