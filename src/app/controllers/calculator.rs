//! The calculator form as plain data.
//!
//! `AppState` copies widget values into a [`CalculatorForm`], runs an action on
//! it and copies the fields back. No FLTK types appear here, so the whole
//! Calculate/Clear flow is covered by unit tests.

use crate::app::domain::area::{AreaError, AreaResult, NumericField};

/// Shown in the result label before the first calculation and after Clear.
pub const RESULT_PLACEHOLDER: &str = "\u{2014}";

/// Entries of the editable unit box. Any other typed text is accepted too.
pub const UNIT_CHOICES: [&str; 6] = ["", "m", "cm", "mm", "in", "ft"];

pub const LENGTH_LABEL: &str = "Length";
pub const WIDTH_LABEL: &str = "Width";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    pub length: String,
    pub width: String,
    pub unit: String,
    pub result: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            length: String::new(),
            width: String::new(),
            unit: String::new(),
            result: RESULT_PLACEHOLDER.to_string(),
        }
    }
}

impl CalculatorForm {
    pub fn length_field(&self) -> NumericField {
        NumericField::new(self.length.as_str(), LENGTH_LABEL)
    }

    pub fn width_field(&self) -> NumericField {
        NumericField::new(self.width.as_str(), WIDTH_LABEL)
    }

    /// Compute the area from the current text and store the rendered result.
    ///
    /// On error nothing changes, so the user can fix the input and retry.
    pub fn calculate(&mut self) -> Result<AreaResult, AreaError> {
        let result = AreaResult::from_fields(&self.length_field(), &self.width_field(), &self.unit)?;
        self.result = result.display();
        Ok(result)
    }

    /// Empty both numeric fields and reset the result. The unit is kept.
    pub fn clear(&mut self) {
        self.length.clear();
        self.width.clear();
        self.result = RESULT_PLACEHOLDER.to_string();
    }
}
