use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use crate::rules::Rules;

pub fn list(rules: &Rules, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rules.categories())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Best", "Alternative", "Keywords"]);

    for c in rules.categories() {
        table.add_row(vec![
            c.id.clone(),
            c.name.clone(),
            format!("{} ({})", c.best_ai, c.score),
            format!("{} ({})", c.alternative, c.alternative_score),
            c.keywords.join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn samples(rules: &Rules, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rules.sample_tasks())?);
        return Ok(());
    }

    if rules.sample_tasks().is_empty() {
        println!("No sample tasks configured");
        return Ok(());
    }

    for (i, task) in rules.sample_tasks().iter().enumerate() {
        println!("{:>2}. {}", i + 1, task);
    }
    Ok(())
}
