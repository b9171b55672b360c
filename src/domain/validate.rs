use thiserror::Error;

use crate::convert::{scale_weight, ScaleError};
use crate::domain::problem::{NormalizedItem, NormalizedProblem};
use crate::models::OptimizationRequest;

/// Structural problems with a request. The `Display` text is the note
/// returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Validation: minValue must be > 0.")]
    NonPositiveMinValue,
    #[error("Validation: maxWeightKg must be > 0.")]
    NonPositiveMaxWeight,
    #[error("Validation: the items list is required and must not be empty.")]
    NoItems,
    #[error("Validation: the item at index {index} must have weightKg > 0.")]
    NonPositiveWeight { index: usize },
    #[error("Validation: the item at index {index} must have value >= 0.")]
    NegativeValue { index: usize },
    #[error("Validation: the item at index {index} has a weightKg too small to scale.")]
    WeightTooSmall { index: usize },
    #[error("Validation: the item at index {index} has a weightKg too large to scale.")]
    WeightTooLarge { index: usize },
    #[error("Validation: maxWeightKg is too small to scale.")]
    CapacityTooSmall,
    #[error("Validation: maxWeightKg is too large to scale.")]
    CapacityTooLarge,
}

/// Validate a request and convert it into integer form.
///
/// Checks run in a fixed order and stop at the first failure: target,
/// capacity, item list, then each item in list order, then the scaled
/// capacity.
pub fn normalize(request: &OptimizationRequest) -> Result<NormalizedProblem, ValidationError> {
    if request.min_value <= 0 {
        return Err(ValidationError::NonPositiveMinValue);
    }

    // written as a negation so NaN is rejected too
    if !(request.max_weight_kg > 0.0) {
        return Err(ValidationError::NonPositiveMaxWeight);
    }

    if request.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let mut items = Vec::with_capacity(request.items.len());
    for (index, raw) in request.items.iter().enumerate() {
        if !(raw.weight_kg > 0.0) {
            return Err(ValidationError::NonPositiveWeight { index });
        }
        if raw.value < 0 {
            return Err(ValidationError::NegativeValue { index });
        }

        let scaled_weight = scale_weight(raw.weight_kg).map_err(|e| match e {
            ScaleError::TooSmall => ValidationError::WeightTooSmall { index },
            ScaleError::TooLarge => ValidationError::WeightTooLarge { index },
        })?;

        let id = raw.id.clone().unwrap_or_else(|| format!("E{}", index + 1));
        let label = raw
            .label
            .clone()
            .or_else(|| raw.id.clone())
            .unwrap_or_else(|| format!("Elemento {}", index + 1));

        items.push(NormalizedItem {
            position: index,
            id,
            label,
            scaled_weight,
            weight_kg: raw.weight_kg,
            value: raw.value as u64,
        });
    }

    let capacity = scale_weight(request.max_weight_kg).map_err(|e| match e {
        ScaleError::TooSmall => ValidationError::CapacityTooSmall,
        ScaleError::TooLarge => ValidationError::CapacityTooLarge,
    })?;

    Ok(NormalizedProblem {
        items,
        target_value: request.min_value as u64,
        capacity,
    })
}
