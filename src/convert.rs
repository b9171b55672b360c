use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::problem::NormalizedItem;
use crate::models::SelectedItem;

/// Kilograms → integer grams. Three decimals of precision.
pub const WEIGHT_SCALE: u64 = 1000;

/// Largest scaled weight accepted (item or capacity). Keeps every sum well
/// inside `u64` and below the value-DP sentinel.
pub const MAX_SCALED_WEIGHT: u64 = i32::MAX as u64;

pub const WEIGHT_SCALING_DESCRIPTION: &str = "1kg = 1000g (scale=1000)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    TooSmall,
    TooLarge,
}

/// Scale a kilogram quantity to integer grams, rounding half away from zero.
///
/// Rounding works on the decimal the caller wrote (the shortest text that
/// round-trips the `f64`), so `0.5005` becomes 501 g rather than following the
/// binary product down to 500.
pub fn scale_weight(weight_kg: f64) -> Result<u64, ScaleError> {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return Err(ScaleError::TooSmall);
    }
    // a gram of slack; the exact bound is checked on the decimal below
    if weight_kg > (MAX_SCALED_WEIGHT + 1) as f64 / WEIGHT_SCALE as f64 {
        return Err(ScaleError::TooLarge);
    }

    // only values far below a gram have more digits than Decimal holds
    let decimal = Decimal::from_str(&weight_kg.to_string()).map_err(|_| ScaleError::TooSmall)?;
    let grams = (decimal * Decimal::from(WEIGHT_SCALE))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    if grams < Decimal::ONE {
        return Err(ScaleError::TooSmall);
    }
    if grams > Decimal::from(MAX_SCALED_WEIGHT) {
        return Err(ScaleError::TooLarge);
    }

    grams.to_u64().ok_or(ScaleError::TooLarge)
}

/// Convert grams back to kilograms, rounded to 3 decimals.
pub fn unscale_weight(scaled: u64) -> f64 {
    round_to_millis(scaled as f64 / WEIGHT_SCALE as f64)
}

fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl From<&NormalizedItem> for SelectedItem {
    fn from(item: &NormalizedItem) -> Self {
        SelectedItem {
            id: item.id.clone(),
            label: item.label.clone(),
            weight_kg: item.weight_kg,
            value: item.value,
        }
    }
}
