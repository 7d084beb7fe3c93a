//! Normalisation of textual leaves into booleans, null, and numbers.
//!
//! Environment variables and command-line flags arrive as text. When
//! [`crate::MergeOptions::convert`] is set the engine passes incoming strings
//! through [`coerce_text`] so `"true"` or `"8080"` land in the merged value
//! with their natural types.

use std::num::FpCategory;

use serde_json::Number;

use crate::MergeValue;

/// Widest decimal point position printed without an exponent.
const MAX_PLAIN_POINT: i32 = 21;
/// Narrowest decimal point position printed without an exponent.
const MIN_PLAIN_POINT: i32 = -5;

/// Convert `text` into a typed leaf when it spells one exactly.
///
/// `"true"`, `"false"`, and `"null"` map to their literals. Anything else is
/// parsed as a number and accepted only when rendering that number back to
/// text reproduces `text` exactly, which rejects partial parses such as
/// `"3abc"` and lossy spellings such as `"1.0"`, `"007"`, or `"1e3"`.
/// Very large and very small magnitudes are printed with an exponent, so
/// `"1e-7"` and `"1e+21"` convert while `"0.0000001"` stays text. Returns
/// `None` when the text should stay a string.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeValue, coerce_text};
/// use serde_json::json;
///
/// assert_eq!(coerce_text("true"), Some(MergeValue::Bool(true)));
/// assert_eq!(coerce_text("42"), Some(MergeValue::from(json!(42))));
/// assert_eq!(coerce_text("0.5"), Some(MergeValue::from(json!(0.5))));
/// assert_eq!(coerce_text("1e-7"), Some(MergeValue::from(json!(1e-7))));
/// assert_eq!(coerce_text("1.0"), None);
/// assert_eq!(coerce_text("x"), None);
/// ```
#[must_use]
pub fn coerce_text(text: &str) -> Option<MergeValue> {
    match text {
        "true" => Some(MergeValue::Bool(true)),
        "false" => Some(MergeValue::Bool(false)),
        "null" => Some(MergeValue::Null),
        _ => coerce_number(text),
    }
}

fn coerce_number(text: &str) -> Option<MergeValue> {
    let parsed: f64 = text.parse().ok()?;
    if render_number(parsed)? != text {
        return None;
    }
    let number = text
        .parse::<i64>()
        .map(Number::from)
        .ok()
        .or_else(|| Number::from_f64(parsed))?;
    Some(MergeValue::Number(number))
}

/// Render a number the way a JSON-producing runtime prints it.
///
/// Uses the shortest digit string that round-trips. Returns `None` for
/// non-finite values.
fn render_number(number: f64) -> Option<String> {
    match number.classify() {
        FpCategory::Nan | FpCategory::Infinite => None,
        FpCategory::Zero => Some(String::from("0")),
        FpCategory::Subnormal | FpCategory::Normal => {
            let scientific = format!("{:e}", number.abs());
            let (mantissa, exponent) = scientific.split_once('e')?;
            let point = exponent.parse::<i32>().ok()?.checked_add(1)?;
            let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
            let sign = if number.is_sign_negative() { "-" } else { "" };
            Some(format!("{sign}{}", layout_digits(&digits, point)?))
        }
    }
}

/// Place the decimal point `point` positions into `digits`.
///
/// Falls back to `d.ddde±x` notation outside the plain range.
fn layout_digits(digits: &str, point: i32) -> Option<String> {
    let count = i32::try_from(digits.len()).ok()?;
    let text = if (count..=MAX_PLAIN_POINT).contains(&point) {
        let zeros = usize::try_from(point - count).ok()?;
        format!("{digits}{}", "0".repeat(zeros))
    } else if (1..=MAX_PLAIN_POINT).contains(&point) {
        let (whole, fraction) = digits.split_at_checked(usize::try_from(point).ok()?)?;
        format!("{whole}.{fraction}")
    } else if (MIN_PLAIN_POINT..=0).contains(&point) {
        let zeros = usize::try_from(point.unsigned_abs()).ok()?;
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at_checked(1)?;
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exponent.unsigned_abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    };
    Some(text)
}
