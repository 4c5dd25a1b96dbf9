use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use serde::Serialize;

use super::render;
use crate::normalize::normalize;
use crate::rules::{AiModel, Rules};

#[derive(Serialize)]
struct ModelDetail<'a> {
    #[serde(flatten)]
    model: &'a AiModel,
    best_for: Vec<&'a str>,
    alternative_for: Vec<&'a str>,
}

/// List the model registry.
pub fn list(rules: &Rules, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rules.models())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["ID", "Name", "Color", "Description"]);

    for model in rules.models() {
        table.add_row(vec![
            model.id.clone(),
            model.name.clone(),
            model.color.clone(),
            model.description.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Find a model by exact name, then by id or folded name.
pub fn find<'a>(rules: &'a Rules, name: &str) -> Option<&'a AiModel> {
    rules.model(name).or_else(|| {
        let wanted = normalize(name);
        rules
            .models()
            .iter()
            .find(|m| normalize(&m.name) == wanted || normalize(&m.id) == wanted)
    })
}

pub fn show(rules: &Rules, name: &str, json: bool) -> Result<()> {
    let Some(model) = find(rules, name) else {
        let suggestions = rules.suggest_model(name);
        if suggestions.is_empty() {
            bail!("Model '{}' not found", name);
        }
        bail!(
            "Model '{}' not found. Did you mean: {}?",
            name,
            suggestions.join(", ")
        );
    };

    let detail = ModelDetail {
        model,
        best_for: rules
            .categories()
            .iter()
            .filter(|c| c.best_ai == model.name)
            .map(|c| c.name.as_str())
            .collect(),
        alternative_for: rules
            .categories()
            .iter()
            .filter(|c| c.alternative == model.name)
            .map(|c| c.name.as_str())
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print_detail(rules, &detail);
    }

    Ok(())
}

fn print_detail(rules: &Rules, d: &ModelDetail) {
    println!("{}", render::model_style(rules, &d.model.name).apply_to(&d.model.name));
    println!("{}", "=".repeat(d.model.name.chars().count()));
    println!();
    println!("ID:          {}", d.model.id);
    println!("Color:       {}", d.model.color);
    println!();
    println!("{}", textwrap::fill(&d.model.description, 80));
    println!();

    println!("Best for");
    println!("--------");
    if d.best_for.is_empty() {
        println!("-");
    }
    for name in &d.best_for {
        println!("- {}", name);
    }
    println!();

    println!("Alternative for");
    println!("---------------");
    if d.alternative_for.is_empty() {
        println!("-");
    }
    for name in &d.alternative_for {
        println!("- {}", name);
    }
}
