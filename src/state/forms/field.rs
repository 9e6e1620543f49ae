//! Form field value objects

use super::step::{StepId, StepKind};
use super::validation::ValidationError;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Index into the option list; `None` is the placeholder
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

/// Represents a single step's field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub step: StepId,
    pub value: FieldValue,
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Create an empty field for a step
    pub fn for_step(step: StepId) -> Self {
        let value = match step.kind() {
            StepKind::Text => FieldValue::Text(String::new()),
            StepKind::Select(options) => FieldValue::Choice {
                options,
                selected: None,
            },
        };
        Self {
            step,
            value,
            error: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.step.name()
    }

    pub fn label(&self) -> &'static str {
        self.step.label()
    }

    pub fn placeholder(&self) -> &'static str {
        self.step.placeholder()
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Get the current value as text (empty for an unselected choice)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().trim().is_empty()
    }

    /// Run the step's validator, recording the outcome on the field
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = self.step.validate(self.as_text());
        self.error = result.err();
        result
    }

    /// Set the text value, or pick the matching option for select fields
    #[cfg(test)]
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value.to_string(),
            FieldValue::Choice { options, selected } => {
                *selected = options.iter().position(|o| *o == value);
            }
        }
        self.error = None;
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
            self.error = None;
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
            self.error = None;
        }
    }

    /// Move the selection down, wrapping through the placeholder
    pub fn select_next(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None if !options.is_empty() => Some(0),
                Some(i) if i + 1 < options.len() => Some(i + 1),
                _ => None,
            };
            self.error = None;
        }
    }

    /// Move the selection up, wrapping through the placeholder
    pub fn select_prev(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = match *selected {
                None => options.len().checked_sub(1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            };
            self.error = None;
        }
    }

    /// Clear the field value and error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
        self.error = None;
    }
}
