//! Area engine: input validation, rectangle area and result formatting.
//!
//! Everything here is pure. The UI reads raw text out of its widgets, hands
//! it to these functions and renders whatever comes back.

use thiserror::Error;

/// Why a raw input could not become an area.
///
/// Each variant carries the complete message shown to the user, already
/// naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AreaError {
    #[error("{0}")]
    EmptyInput(String),

    #[error("{0}")]
    InvalidNumber(String),

    #[error("{0}")]
    NotPositive(String),
}

impl AreaError {
    /// The user-facing message, identical to `to_string()`.
    pub fn message(&self) -> &str {
        match self {
            Self::EmptyInput(msg) | Self::InvalidNumber(msg) | Self::NotPositive(msg) => msg,
        }
    }
}

/// Raw text typed into a numeric field, paired with the label used in errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    pub raw_text: String,
    pub label: String,
}

impl NumericField {
    pub fn new(raw_text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            label: label.into(),
        }
    }

    /// Parse into a strictly positive value.
    pub fn parse(&self) -> Result<f64, AreaError> {
        parse_positive_number(&self.raw_text, &self.label)
    }
}

/// A computed area with its optional display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaResult {
    pub area: f64,
    pub unit: Option<String>,
}

impl AreaResult {
    /// Validate both fields, multiply, and attach the unit when it is not blank.
    pub fn from_fields(
        length: &NumericField,
        width: &NumericField,
        unit: &str,
    ) -> Result<Self, AreaError> {
        let length = length.parse()?;
        let width = width.parse()?;
        let area = compute_area(length, width)?;

        let unit = unit.trim();
        Ok(Self {
            area,
            unit: (!unit.is_empty()).then(|| unit.to_string()),
        })
    }

    pub fn display(&self) -> String {
        format_result(self.area, self.unit.as_deref().unwrap_or(""))
    }
}

/// Parse `raw_text` as a number strictly greater than zero.
///
/// Surrounding whitespace is ignored. `nan` and infinities are reported as
/// invalid numbers, so a NaN can never reach [`compute_area`].
pub fn parse_positive_number(raw_text: &str, field_label: &str) -> Result<f64, AreaError> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(AreaError::EmptyInput(format!("{} is required.", field_label)));
    }

    let value = match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(AreaError::InvalidNumber(format!(
                "{} must be a valid number.",
                field_label
            )));
        }
    };

    if value <= 0.0 {
        return Err(AreaError::NotPositive(format!("{} must be > 0.", field_label)));
    }

    Ok(value)
}

/// Area of a `length` x `width` rectangle.
///
/// Callers that did not go through [`parse_positive_number`] get the same
/// guard here: both sides must be strictly positive, and so must the product.
pub fn compute_area(length: f64, width: f64) -> Result<f64, AreaError> {
    // `!(x > 0.0)` also catches NaN
    if !(length > 0.0) || !(width > 0.0) {
        return Err(AreaError::NotPositive(
            "Length and width must be positive numbers.".to_string(),
        ));
    }
    let area = length * width;
    // Tiny sides can underflow to zero
    if area <= 0.0 {
        return Err(AreaError::NotPositive(
            "Area is too small to represent; it must be > 0.".to_string(),
        ));
    }
    Ok(area)
}

/// Render an area for the result label, e.g. `12.0 m²` or `6.25`.
///
/// Uses the round-trippable `{:?}` rendering, which keeps the trailing `.0`
/// on integral values.
pub fn format_result(area: f64, unit: &str) -> String {
    let unit = unit.trim();
    if unit.is_empty() {
        format!("{:?}", area)
    } else {
        format!("{:?} {}\u{00b2}", area, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 8] = [0.001, 0.1, 1.0, 2.5, 3.0, 7.25, 1234.5678, 1e6];

    #[test]
    fn test_compute_area_is_exact_product() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(compute_area(a, b).unwrap(), a * b);
            }
        }
    }

    #[test]
    fn test_compute_area_is_commutative() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(compute_area(a, b).unwrap(), compute_area(b, a).unwrap());
            }
        }
    }

    #[test]
    fn test_compute_area_rejects_non_positive() {
        for (l, w) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 2.0), (2.0, -0.5), (-3.0, -3.0), (-0.0, 4.0)] {
            let err = compute_area(l, w).unwrap_err();
            assert!(matches!(err, AreaError::NotPositive(_)), "({}, {})", l, w);
        }
    }

    #[test]
    fn test_compute_area_rejects_nan() {
        assert!(matches!(compute_area(f64::NAN, 2.0), Err(AreaError::NotPositive(_))));
        assert!(matches!(compute_area(2.0, f64::NAN), Err(AreaError::NotPositive(_))));
    }

    #[test]
    fn test_compute_area_rejects_underflow_to_zero() {
        let err = compute_area(1e-200, 1e-200).unwrap_err();
        assert!(matches!(err, AreaError::NotPositive(_)));
        assert!(matches!(compute_area(5e-324, 0.5), Err(AreaError::NotPositive(_))));

        // Subnormal but non-zero products still count
        assert_eq!(compute_area(1e-160, 1e-160).unwrap(), 1e-160 * 1e-160);
    }

    #[test]
    fn test_area_result_never_zero_from_tiny_fields() {
        let err = AreaResult::from_fields(
            &NumericField::new("1e-200", "Length"),
            &NumericField::new("1e-200", "Width"),
            "m",
        )
        .unwrap_err();
        assert!(matches!(err, AreaError::NotPositive(_)));
    }

    #[test]
    fn test_compute_area_overflow_is_infinite() {
        assert_eq!(compute_area(1e200, 1e200).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_parse_empty() {
        let err = parse_positive_number("", "Length").unwrap_err();
        assert!(matches!(err, AreaError::EmptyInput(_)));
        assert_eq!(err.to_string(), "Length is required.");

        let err = parse_positive_number("   \t ", "Width").unwrap_err();
        assert_eq!(err, AreaError::EmptyInput("Width is required.".to_string()));
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_positive_number("abc", "Width").unwrap_err();
        assert!(matches!(err, AreaError::InvalidNumber(_)));
        assert_eq!(err.to_string(), "Width must be a valid number.");

        for text in ["1.2.3", "4,5", "--1", "12m"] {
            assert!(matches!(
                parse_positive_number(text, "Width"),
                Err(AreaError::InvalidNumber(_))
            ), "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let err = parse_positive_number(text, "Length").unwrap_err();
            assert_eq!(err.message(), "Length must be a valid number.", "{}", text);
        }
    }

    #[test]
    fn test_parse_not_positive() {
        let err = parse_positive_number("-3", "Length").unwrap_err();
        assert!(matches!(err, AreaError::NotPositive(_)));
        assert_eq!(err.to_string(), "Length must be > 0.");

        assert!(matches!(parse_positive_number("0", "Length"), Err(AreaError::NotPositive(_))));
        assert!(matches!(parse_positive_number("0.0", "Length"), Err(AreaError::NotPositive(_))));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_positive_number("  4.5 ", "Width").unwrap(), 4.5);
        assert_eq!(parse_positive_number("\t7\n", "Width").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_accepts_decimal_forms() {
        assert_eq!(parse_positive_number("+2", "Length").unwrap(), 2.0);
        assert_eq!(parse_positive_number(".5", "Length").unwrap(), 0.5);
        assert_eq!(parse_positive_number("1e3", "Length").unwrap(), 1000.0);
    }

    #[test]
    fn test_numeric_field_parse() {
        let field = NumericField::new(" 3 ", "Length");
        assert_eq!(field.parse().unwrap(), 3.0);

        let field = NumericField::new("x", "Width");
        assert_eq!(field.parse().unwrap_err().message(), "Width must be a valid number.");
    }

    #[test]
    fn test_format_result_with_unit() {
        assert_eq!(format_result(12.0, "m"), "12.0 m\u{00b2}");
        assert_eq!(format_result(12.0, "m"), "12.0 m²");
        assert_eq!(format_result(0.5, "  ft "), "0.5 ft²");
    }

    #[test]
    fn test_format_result_without_unit() {
        assert_eq!(format_result(6.25, ""), "6.25");
        assert_eq!(format_result(20.0, "   "), "20.0");
    }

    #[test]
    fn test_format_result_keeps_float_precision() {
        assert_eq!(format_result(0.1 + 0.2, ""), "0.30000000000000004");
    }

    #[test]
    fn test_area_result_from_fields() {
        let result = AreaResult::from_fields(
            &NumericField::new("5", "Length"),
            &NumericField::new("4", "Width"),
            " cm ",
        )
        .unwrap();
        assert_eq!(result.area, 20.0);
        assert_eq!(result.unit.as_deref(), Some("cm"));
        assert_eq!(result.display(), "20.0 cm²");

        let result = AreaResult::from_fields(
            &NumericField::new("2.5", "Length"),
            &NumericField::new("2.5", "Width"),
            "",
        )
        .unwrap();
        assert_eq!(result.unit, None);
        assert_eq!(result.display(), "6.25");
    }

    #[test]
    fn test_area_result_reports_first_bad_field() {
        let err = AreaResult::from_fields(
            &NumericField::new("", "Length"),
            &NumericField::new("abc", "Width"),
            "m",
        )
        .unwrap_err();
        assert_eq!(err.message(), "Length is required.");
    }
}
