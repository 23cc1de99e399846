use serde::Serialize;

use super::fuel::{EmissionFactors, FuelType};
use crate::config::Config;

pub const CONSERVATION_TIP: &str =
    "💡 Tip: Drive less, switch to renewable sources and save energy!";

/// Estimated monthly emissions for one set of form inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Total emissions (kg CO₂/month), already rounded to two decimals
    pub total_kg: f64,

    /// Whether the rounded total is above the reference goal
    pub exceeds_goal: bool,
}

/// Text blocks to render for an estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessages {
    pub result: String,
    pub warning: Option<String>,
    pub tip: Option<&'static str>,
}

impl EstimateResult {
    /// Builds a result from an unrounded total. The goal check uses the rounded value.
    pub fn from_total(total: f64) -> Self {
        let total_kg = round2(total);
        Self {
            total_kg,
            exceeds_goal: total_kg > Config::REFERENCE_GOAL_KG,
        }
    }

    /// Returns the total as fixed-point text, e.g. `"146.00"`
    pub fn formatted(&self) -> String {
        format!("{:.*}", Config::DISPLAY_DECIMALS, self.total_kg)
    }

    /// Returns the result line, plus the warning and tip when over the goal
    pub fn messages(&self) -> DisplayMessages {
        let result = format!(
            "🌍 Estimated emission: {} kg of CO₂ per month.",
            self.formatted()
        );

        if self.exceeds_goal {
            DisplayMessages {
                result,
                warning: Some(format!(
                    "❕ Your emission is above the average of {:.0} kg.",
                    Config::REFERENCE_GOAL_KG
                )),
                tip: Some(CONSERVATION_TIP),
            }
        } else {
            DisplayMessages {
                result,
                warning: None,
                tip: None,
            }
        }
    }
}

/// Estimates monthly emissions from raw form text and the selected fuel.
///
/// Text that does not start with a number counts as zero, so this never fails.
pub fn compute(car_km_text: &str, electricity_text: &str, fuel: FuelType) -> EstimateResult {
    estimate(car_km_text, electricity_text, fuel.emission_factor())
}

/// Same as [`compute`], but takes the fuel as a raw key. Unknown keys use the gasoline factor.
pub fn compute_with_key(car_km_text: &str, electricity_text: &str, fuel_key: &str) -> EstimateResult {
    estimate(
        car_km_text,
        electricity_text,
        EmissionFactors::STANDARD.factor_for_key(fuel_key),
    )
}

fn estimate(car_km_text: &str, electricity_text: &str, car_factor: f64) -> EstimateResult {
    let total = parse_amount(car_km_text) * car_factor
        + parse_amount(electricity_text) * Config::ELECTRICITY_FACTOR;

    EstimateResult::from_total(total)
}

/// Fractional digits needed to print any `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds to two decimal places the way fixed-point formatting does.
///
/// The exact binary value is rounded, with exact ties going away from zero,
/// so 0.045 (stored as 0.04499…) gives 0.04 while 0.125 gives 0.13.
/// Negative zero comes back as positive zero.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(fraction.bytes().take(2)).collect();
    digits.resize(int_part.len() + 2, b'0');

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        increment_digits(&mut digits);
    }

    let mut text: String = digits.iter().map(|&d| char::from(d)).collect();
    text.insert(text.len() - 2, '.');

    let rounded = text.parse::<f64>().unwrap_or(value.abs());
    if value < 0.0 { -rounded } else { rounded }
}

/// Adds one to the last place of an ASCII digit string, carrying leftwards
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Parses the leading number of a text field, returning 0 when there is none.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12 km"` reads as 12 and `"1,5"` as 1. Non-finite values read as 0.
pub fn parse_amount(text: &str) -> f64 {
    leading_number(text)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one mantissa digit
fn leading_number(text: &str) -> &str {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
