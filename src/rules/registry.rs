use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::data::{AiModel, Category, Fallback, Labels, RulesFile};
use crate::normalize::normalize;

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;
pub const MAX_SCORE: u8 = 100;
const MIN_MODELS: usize = 2;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color pattern"));

#[derive(Debug, Error, PartialEq)]
pub enum RulesError {
    #[error("unsupported rules schema version {found} (expected {expected})", expected = SUPPORTED_SCHEMA_VERSION)]
    UnsupportedSchema { found: u32 },
    #[error("at least {min} models are required, found {found}", min = MIN_MODELS)]
    TooFewModels { found: usize },
    #[error("duplicate model name '{0}'")]
    DuplicateModel(String),
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),
    #[error("category '{0}' has no keywords")]
    NoKeywords(String),
    #[error("category '{category}' has a blank keyword at position {index}")]
    BlankKeyword { category: String, index: usize },
    #[error("{context} score {score} is outside 0..={max}", max = MAX_SCORE)]
    ScoreOutOfRange { context: String, score: u8 },
    #[error("{context} references unknown model '{model}'")]
    UnknownModel { context: String, model: String },
    #[error("model '{model}' has invalid color '{color}' (expected #rrggbb)")]
    InvalidColor { model: String, color: String },
    #[error("alternative weight {0} must be within (0, 1]")]
    InvalidWeight(f64),
}

/// A display color parsed from `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn parse(hex: &str) -> Option<Self> {
        if !HEX_COLOR.is_match(hex) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(1)?, channel(3)?, channel(5)?))
    }
}

/// Validated, read-only rules: categories in configured order, models in
/// registry order, and a name index joining the two.
#[derive(Debug, Clone)]
pub struct Rules {
    categories: Vec<Category>,
    models: Vec<AiModel>,
    colors: Vec<Rgb>,
    model_index: HashMap<String, usize>,
    fallback: Fallback,
    labels: Labels,
    alternative_weight: f64,
    sample_tasks: Vec<String>,
}

impl Rules {
    pub fn from_file(file: RulesFile) -> Result<Self, RulesError> {
        if file.schema_version != SUPPORTED_SCHEMA_VERSION {
            return Err(RulesError::UnsupportedSchema {
                found: file.schema_version,
            });
        }

        if file.ais.len() < MIN_MODELS {
            return Err(RulesError::TooFewModels {
                found: file.ais.len(),
            });
        }

        let mut model_index = HashMap::with_capacity(file.ais.len());
        let mut colors = Vec::with_capacity(file.ais.len());
        for (i, model) in file.ais.iter().enumerate() {
            if model_index.insert(model.name.clone(), i).is_some() {
                return Err(RulesError::DuplicateModel(model.name.clone()));
            }
            let rgb = Rgb::parse(&model.color).ok_or_else(|| RulesError::InvalidColor {
                model: model.name.clone(),
                color: model.color.clone(),
            })?;
            colors.push(rgb);
        }

        let known = |context: String, model: &str| -> Result<(), RulesError> {
            if model_index.contains_key(model) {
                Ok(())
            } else {
                Err(RulesError::UnknownModel {
                    context,
                    model: model.to_string(),
                })
            }
        };

        let mut category_ids = HashSet::new();
        for category in &file.categories {
            if !category_ids.insert(category.id.clone()) {
                return Err(RulesError::DuplicateCategory(category.id.clone()));
            }
            if category.keywords.is_empty() {
                return Err(RulesError::NoKeywords(category.id.clone()));
            }
            // A blank keyword is a substring of every input and would match everything.
            if let Some(index) = category
                .keywords
                .iter()
                .position(|k| normalize(k).trim().is_empty())
            {
                return Err(RulesError::BlankKeyword {
                    category: category.id.clone(),
                    index,
                });
            }
            check_score(format!("category '{}'", category.id), category.score)?;
            check_score(
                format!("category '{}' alternative", category.id),
                category.alternative_score,
            )?;
            known(format!("category '{}'", category.id), &category.best_ai)?;
            known(
                format!("category '{}' alternative", category.id),
                &category.alternative,
            )?;
        }

        let fallback = &file.fallback;
        check_score("fallback".to_string(), fallback.score)?;
        check_score("fallback alternative".to_string(), fallback.alternative_score)?;
        known("fallback".to_string(), &fallback.recommended_ai)?;
        known("fallback alternative".to_string(), &fallback.alternative)?;

        let weight = file.weights.alternative;
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(RulesError::InvalidWeight(weight));
        }

        Ok(Self {
            categories: file.categories,
            models: file.ais,
            colors,
            model_index,
            fallback: file.fallback,
            labels: file.labels,
            alternative_weight: weight,
            sample_tasks: file.sample_tasks,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The model registry, in configured order.
    pub fn models(&self) -> &[AiModel] {
        &self.models
    }

    pub fn model(&self, name: &str) -> Option<&AiModel> {
        self.model_index.get(name).map(|&i| &self.models[i])
    }

    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.model_index.get(name).map(|&i| self.colors[i])
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn alternative_weight(&self) -> f64 {
        self.alternative_weight
    }

    pub fn sample_tasks(&self) -> &[String] {
        &self.sample_tasks
    }

    /// Registered model names closest to `name`, best first.
    pub fn suggest_model(&self, name: &str) -> Vec<&str> {
        let wanted = normalize(name);
        let mut scored: Vec<(f64, &str)> = self
            .models
            .iter()
            .map(|m| (strsim::jaro_winkler(&wanted, &normalize(&m.name)), m.name.as_str()))
            .filter(|(similarity, _)| *similarity >= 0.75)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().map(|(_, name)| name).collect()
    }
}

fn check_score(context: String, score: u8) -> Result<(), RulesError> {
    if score > MAX_SCORE {
        return Err(RulesError::ScoreOutOfRange { context, score });
    }
    Ok(())
}
