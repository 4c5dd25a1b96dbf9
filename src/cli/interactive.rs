use anyhow::{bail, Result};
use console::{Style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Select};

use super::render;
use crate::analysis::{analyze_task, compare_all_ais, generate_detailed_explanation};
use crate::config::{Config, Mode};
use crate::rules::Rules;

const OWN_TASK: &str = "Describe my own task...";
const MODES: [&str; 2] = ["Best match for the task", "Compare all models"];

fn theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: Style::new().for_stderr().bold(),
        ..ColorfulTheme::default()
    }
}

fn mode_index(mode: Mode) -> usize {
    match mode {
        Mode::Analyze => 0,
        Mode::Compare => 1,
    }
}

/// Prompt for a task and mode, then show the recommendation.
pub fn run(rules: &Rules, config: &Config) -> Result<()> {
    if !Term::stderr().is_term() {
        bail!("No task given. Pass one, e.g. `qualia analyze \"resumir um PDF\"`");
    }

    let theme = theme();

    let mut items = vec![OWN_TASK];
    items.extend(rules.sample_tasks().iter().map(String::as_str));

    let picked = FuzzySelect::with_theme(&theme)
        .with_prompt("Pick a sample task or describe your own")
        .items(&items)
        .default(0)
        .interact()?;

    let task = if picked == 0 {
        Input::<String>::with_theme(&theme)
            .with_prompt("Task")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("describe the task in a few words")
                } else {
                    Ok(())
                }
            })
            .interact_text()?
    } else {
        items[picked].to_string()
    };

    let mode = Select::with_theme(&theme)
        .with_prompt("Mode")
        .items(&MODES)
        .default(mode_index(config.display.default_mode))
        .interact()?;

    let result = if mode == mode_index(Mode::Compare) {
        compare_all_ais(rules, &task)
    } else {
        analyze_task(rules, &task)
    };

    println!();
    render::print_result(rules, &result, &config.display);
    println!();

    if Confirm::with_theme(&theme)
        .with_prompt("Explain why?")
        .default(false)
        .interact()?
    {
        let text = generate_detailed_explanation(rules, &result, &task);
        println!();
        render::print_explanation(rules, &result, &text, &config.display);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_index_matches_menu() {
        assert_eq!(MODES[mode_index(Mode::Analyze)], "Best match for the task");
        assert_eq!(MODES[mode_index(Mode::Compare)], "Compare all models");
    }
}
