//! Turns task text into recommendations.
//!
//! Every function here takes the validated [`Rules`](crate::rules::Rules)
//! explicitly and is pure: same input and rules, same result.

pub mod compare;
pub mod explain;
pub mod recommend;

use serde::Serialize;

pub use compare::compare_all_ais;
pub use explain::generate_detailed_explanation;
pub use recommend::analyze_task;

/// Outcome of one analysis. Serializes with the keys presentation layers
/// already consume (`recommendedAI`, `alternativeScore`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "recommendedAI")]
    pub recommended_ai: String,
    pub score: u32,
    pub justification: String,
    pub alternative: String,
    pub alternative_score: u32,
    pub category_matched: String,
    /// Ranked per-model scores, only in comparative mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_scores: Option<Vec<ModelScore>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore {
    pub ai: String,
    pub score: u32,
    pub reason: String,
}
