//! # BUILT-IN FIELD VALIDATORS
//!
//! **CRITICAL**: Two composable strategies implementing [`FieldValidator`].
//! **MANDATE**: Binary values are decoded to text before checking.

use super::{ErrorKind, FieldContext, FieldValidator, ValidationResult};
use crate::types::FieldValue;

// ================================================================================================
// SET MEMBERSHIP - Accepts only listed strings
// ================================================================================================

/// **SET MEMBERSHIP VALIDATOR**
///
/// **PURPOSE**: Accepts a value only when it is exactly one of the listed
/// strings. Non-text values never match.
#[derive(Debug, Clone)]
pub struct OneOf {
    accepted: Vec<String>,
}

impl OneOf {
    /// **CONSTRUCTOR**
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Rendered as `[a,b,c]` in the `Should Be:` clause.
    fn describe(&self) -> String {
        format!("[{}]", self.accepted.join(","))
    }
}

impl FieldValidator for OneOf {
    fn validate(&self, field: &FieldContext<'_>, value: &FieldValue) -> ValidationResult {
        let candidate = value.decoded_text();
        let is_member = candidate
            .as_deref()
            .is_some_and(|text| self.accepted.iter().any(|accepted| accepted == text));

        if is_member {
            return Ok(());
        }
        Err(field.reject(
            ErrorKind::NotInArray,
            Some(&*value.to_text()),
            Some(self.describe().as_str()),
        ))
    }
}

// ================================================================================================
// NUMERIC RANGE - Integer parsing with inclusive bounds
// ================================================================================================

/// **NUMERIC RANGE VALIDATOR**
///
/// **PURPOSE**: Parses the value as an integer (see [`parse_int`]) and checks
/// it against inclusive bounds.
///
/// Unless [`NumberRange::strict`] is set, a parsed `0` is rejected like a
/// parse failure and bounds of `0` are never enforced.
#[derive(Debug, Clone, Default)]
pub struct NumberRange {
    min: Option<i64>,
    max: Option<i64>,
    radix: Option<u32>,
    strict: bool,
}

impl NumberRange {
    /// **CONSTRUCTOR** - any non-zero integer
    pub fn new() -> Self {
        Self::default()
    }

    /// **CONSTRUCTOR WITH BOTH BOUNDS**
    pub fn between(min: i64, max: i64) -> Self {
        Self::new().min(min).max(max)
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Radix handed to [`parse_int`]. `0` means auto-detect.
    ///
    /// A radix outside `2..=36` parses nothing, so every input is rejected
    /// as `Validation failed ... Should Be: number`. Options documents refuse
    /// such a radix up front with `INVALID_RADIX`.
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = Some(radix);
        self
    }

    /// Treat zero as an ordinary integer: a parsed `0` passes the parse check
    /// and bounds of `0` are enforced.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn enforced(&self, bound: Option<i64>) -> Option<i64> {
        bound.filter(|bound| self.strict || *bound != 0)
    }
}

impl FieldValidator for NumberRange {
    fn validate(&self, field: &FieldContext<'_>, value: &FieldValue) -> ValidationResult {
        let parsed = parse_int(&value.to_text(), self.radix);
        let Some(number) = parsed.filter(|number| self.strict || *number != 0) else {
            return Err(field.reject(ErrorKind::ValidationFailed, None, Some("number")));
        };

        if let Some(min) = self.enforced(self.min) {
            if min > number {
                return Err(field.reject(
                    ErrorKind::NumberMin,
                    Some(number.to_string().as_str()),
                    Some(min.to_string().as_str()),
                ));
            }
        }
        if let Some(max) = self.enforced(self.max) {
            if max < number {
                return Err(field.reject(
                    ErrorKind::NumberMax,
                    Some(number.to_string().as_str()),
                    Some(max.to_string().as_str()),
                ));
            }
        }
        Ok(())
    }
}

/// **LENIENT INTEGER PARSER**
///
/// Skips leading whitespace, accepts one sign, honours a `0x`/`0X` prefix when
/// `radix` is `None`, `0` or `16`, then reads the longest run of digits valid
/// in the radix. Trailing garbage is ignored (`"12px"` parses as `12`).
///
/// **RETURNS**: `None` when no digit was read, the radix is outside `2..=36`,
/// or the value overflows `i64`.
pub fn parse_int(input: &str, radix: Option<u32>) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut radix = radix.unwrap_or(0);
    let mut digits = unsigned;
    if radix == 0 || radix == 16 {
        if let Some(hex) = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
        {
            digits = hex;
            radix = 16;
        }
    }
    if radix == 0 {
        radix = 10;
    }
    if !(2..=36).contains(&radix) {
        return None;
    }

    let mut magnitude: i64 = 0;
    let mut read_any = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        magnitude = magnitude
            .checked_mul(i64::from(radix))?
            .checked_add(i64::from(digit))?;
        read_any = true;
    }

    if !read_any {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================
