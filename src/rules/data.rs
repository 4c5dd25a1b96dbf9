use serde::{Deserialize, Serialize};

/// Raw rules payload as it appears on disk. Nothing here is validated yet;
/// see [`super::Rules::from_file`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesFile {
    pub schema_version: u32,
    pub categories: Vec<Category>,
    pub ais: Vec<AiModel>,
    #[serde(default)]
    pub fallback: Fallback,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub sample_tasks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(rename = "bestAI")]
    pub best_ai: String,
    pub score: u8,
    pub justification: String,
    pub alternative: String,
    pub alternative_score: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

/// Recommendation returned when no category overlaps the input at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallback {
    #[serde(rename = "recommendedAI")]
    pub recommended_ai: String,
    pub score: u8,
    pub alternative: String,
    pub alternative_score: u8,
    pub justification: String,
    pub category: String,
}

impl Default for Fallback {
    fn default() -> Self {
        Self {
            recommended_ai: "ChatGPT".to_string(),
            score: 75,
            alternative: "Claude".to_string(),
            alternative_score: 70,
            justification: "Recomendação genérica: ChatGPT é versátil para tarefas diversas"
                .to_string(),
            category: "Genérico".to_string(),
        }
    }
}

/// Fixed labels surfaced in results that don't come from a category.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    #[serde(default = "default_comparative_label")]
    pub comparative: String,
    #[serde(default = "default_general_capability_label")]
    pub general_capability: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            comparative: default_comparative_label(),
            general_capability: default_general_capability_label(),
        }
    }
}

fn default_comparative_label() -> String {
    "Análise comparativa".to_string()
}

fn default_general_capability_label() -> String {
    "Capacidade geral".to_string()
}

/// Weight applied to a category's alternative model in comparative mode,
/// relative to its primary model. At 0.5 the alternative accrues
/// `alternativeScore * (match / 20)` against the primary's `score * (match / 10)`.
pub const DEFAULT_ALTERNATIVE_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Weights {
    #[serde(default = "default_alternative_weight")]
    pub alternative: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            alternative: default_alternative_weight(),
        }
    }
}

fn default_alternative_weight() -> f64 {
    DEFAULT_ALTERNATIVE_WEIGHT
}
