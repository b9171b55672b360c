use serde::{Deserialize, Serialize};

use crate::convert::WEIGHT_SCALING_DESCRIPTION;

// ---------- API (wire) types: owned & serde-friendly ----------

/// One candidate item as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Caller-side identifier ("E1"). Assigned from the position when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub weight_kg: f64,
    /// Calories. Signed so that negative input reaches validation instead of
    /// failing deserialization.
    #[serde(default)]
    pub value: i64,
}

impl RawItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, weight_kg: f64, value: i64) -> Self {
        RawItem {
            id: Some(id.into()),
            label: Some(label.into()),
            weight_kg,
            value,
        }
    }

    pub fn anonymous(weight_kg: f64, value: i64) -> Self {
        RawItem {
            id: None,
            label: None,
            weight_kg,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    #[serde(default)]
    pub min_value: i64,
    #[serde(default)]
    pub max_weight_kg: f64,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

// ---------- API response types ----------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    pub id: String,
    pub label: String,
    pub weight_kg: f64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResponse {
    pub feasible: bool,
    /// Rounded to 3 decimals.
    pub total_weight_kg: f64,
    pub total_value: u64,
    pub selected_items: Vec<SelectedItem>,
    /// Which solver path produced the answer.
    pub strategy: String,
    pub weight_scaling: String,
    pub notes: Vec<String>,
}

impl OptimizationResponse {
    /// Empty, infeasible response carrying only the scaling description.
    pub fn new() -> Self {
        OptimizationResponse {
            feasible: false,
            total_weight_kg: 0.0,
            total_value: 0,
            selected_items: Vec::new(),
            strategy: String::new(),
            weight_scaling: WEIGHT_SCALING_DESCRIPTION.to_string(),
            notes: Vec::new(),
        }
    }
}

impl Default for OptimizationResponse {
    fn default() -> Self {
        Self::new()
    }
}
