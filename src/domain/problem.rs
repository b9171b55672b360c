/// Item after validation and scaling. Immutable for the rest of the call.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    /// 0-based position in the request's item list.
    pub position: usize,
    pub id: String,
    pub label: String,
    /// Weight in grams, always > 0.
    pub scaled_weight: u64,
    /// Weight as supplied, returned untouched in the response.
    pub weight_kg: f64,
    pub value: u64,
}

/// A validated problem: every weight is an integer in the same scale as the
/// capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProblem {
    pub items: Vec<NormalizedItem>,
    pub target_value: u64,
    /// Capacity in grams, always > 0.
    pub capacity: u64,
}

impl NormalizedProblem {
    /// Sum of all item values; the size of the value-indexed DP axis.
    pub fn total_value(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.value))
    }

    /// Total (scaled weight, value) of a selection of item indices.
    pub fn totals(&self, selected: &[usize]) -> (u64, u64) {
        selected.iter().fold((0u64, 0u64), |(weight, value), &i| {
            let item = &self.items[i];
            (
                weight + item.scaled_weight,
                value.saturating_add(item.value),
            )
        })
    }
}
