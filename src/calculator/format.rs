//! Number formatting for the calculator display.
//!
//! Values above a magnitude threshold are shown in scientific style, all
//! others in grouped decimal style. Both styles are limited to a fixed number
//! of fraction digits with trailing zeros trimmed.

/// Fraction digits shown by default.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 8;

/// Values strictly above this use scientific style.
pub const DEFAULT_SCIENTIFIC_THRESHOLD: f64 = 1_000_000_000.0;

/// Largest fraction digit count accepted; f64 carries no more precision.
pub const MAX_FRACTION_DIGITS_LIMIT: usize = 15;

/// Why a value could not be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value is infinite")]
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatStyle {
    Decimal,
    Scientific,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberFormatter {
    max_fraction_digits: usize,
    scientific_threshold: f64,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_SCIENTIFIC_THRESHOLD)
    }
}

impl NumberFormatter {
    pub fn new(max_fraction_digits: usize, scientific_threshold: f64) -> Self {
        Self {
            max_fraction_digits: max_fraction_digits.min(MAX_FRACTION_DIGITS_LIMIT),
            scientific_threshold,
        }
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub fn scientific_threshold(&self) -> f64 {
        self.scientific_threshold
    }

    /// Pick the style for a value.
    ///
    /// Only large positive values switch to scientific style; large negative
    /// values stay in decimal style.
    pub fn style_for(&self, value: f64) -> FormatStyle {
        if value > self.scientific_threshold {
            FormatStyle::Scientific
        } else {
            FormatStyle::Decimal
        }
    }

    /// Format a value for display.
    pub fn format(&self, value: f64) -> Result<String, FormatError> {
        if value.is_nan() {
            return Err(FormatError::NotANumber);
        }
        if value.is_infinite() {
            return Err(FormatError::Infinite);
        }

        Ok(match self.style_for(value) {
            FormatStyle::Decimal => self.format_decimal(value),
            FormatStyle::Scientific => self.format_scientific(value),
        })
    }

    fn format_decimal(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = trim_fraction(&formatted);

        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", trimmed),
        };

        match unsigned.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
            }
            None => format!("{}{}", sign, group_thousands(unsigned)),
        }
    }

    fn format_scientific(&self, value: f64) -> String {
        let formatted = format!("{:.*e}", self.max_fraction_digits, value);

        match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!("{}E{}", trim_fraction(mantissa), exponent),
            None => formatted,
        }
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
