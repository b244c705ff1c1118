//! Angle/radius input form.

use crate::error::{PlotterError, Result};

/// Which text field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Angle (θ), required.
    Angle,
    /// Radius (r), optional.
    Radius,
}

impl Field {
    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Angle => "Enter Angle (θ)",
            Field::Radius => "Enter Radius (r) - Optional",
        }
    }
}

/// Raw text held by the two form fields.
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    angle: String,
    radius: String,
}

impl InputForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Angle => &self.angle,
            Field::Radius => &self.radius,
        }
    }

    fn buffer_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Angle => &mut self.angle,
            Field::Radius => &mut self.radius,
        }
    }

    /// Append a character to a field.
    ///
    /// Only characters a numeric input box would take are accepted; anything
    /// else is dropped and `false` is returned.
    pub fn input(&mut self, field: Field, c: char) -> bool {
        if !is_numeric_char(c) {
            return false;
        }
        self.buffer_mut(field).push(c);
        true
    }

    /// Remove the last character of a field.
    pub fn backspace(&mut self, field: Field) {
        self.buffer_mut(field).pop();
    }

    /// Clear both fields.
    pub fn clear(&mut self) {
        self.angle.clear();
        self.radius.clear();
    }

    /// Parse the fields into `(angle, radius)`.
    ///
    /// The angle must be a finite number. An empty radius, or one that is
    /// not a number, yields `default_radius`.
    pub fn parse(&self, default_radius: f64) -> Result<(f64, f64)> {
        let angle =
            parse_number(&self.angle).ok_or_else(|| PlotterError::invalid_angle(&self.angle))?;
        let radius = parse_number(&self.radius).unwrap_or(default_radius);
        Ok((angle, radius))
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Parse trimmed text as a finite `f64`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
