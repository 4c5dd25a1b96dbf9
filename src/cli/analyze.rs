use anyhow::{bail, Result};
use serde::Serialize;

use super::render;
use crate::analysis::{analyze_task, compare_all_ais, generate_detailed_explanation, AnalysisResult};
use crate::config::{Config, Mode};
use crate::rules::Rules;

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

/// Join the positional words of a task, refusing blank input.
pub fn task_text(words: &[String]) -> Result<String> {
    let task = words.join(" ");
    if task.trim().is_empty() {
        bail!("Task description is empty");
    }
    Ok(task)
}

pub fn run(rules: &Rules, config: &Config, task: &str, mode: Mode, json: bool, explain: bool) -> Result<()> {
    let result = match mode {
        Mode::Analyze => analyze_task(rules, task),
        Mode::Compare => compare_all_ais(rules, task),
    };
    let explanation = explain.then(|| generate_detailed_explanation(rules, &result, task));

    if json {
        let output = Output {
            result: &result,
            explanation,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    render::print_result(rules, &result, &config.display);
    if let Some(text) = explanation {
        println!();
        render::print_explanation(rules, &result, &text, &config.display);
    }

    Ok(())
}

/// Print only the detailed report for `task`.
pub fn explain(rules: &Rules, config: &Config, task: &str, mode: Mode) -> Result<()> {
    let result = match mode {
        Mode::Analyze => analyze_task(rules, task),
        Mode::Compare => compare_all_ais(rules, task),
    };
    let text = generate_detailed_explanation(rules, &result, task);
    render::print_explanation(rules, &result, &text, &config.display);
    Ok(())
}
