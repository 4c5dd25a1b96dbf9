use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use console::Style;
use termimad::MadSkin;
use unicode_width::UnicodeWidthStr;

use crate::analysis::AnalysisResult;
use crate::config::DisplayConfig;
use crate::rules::{Rgb, Rules};

const BAR_WIDTH: usize = 20;

/// Score coloring of the result card: 90+ green, 80+ blue, 70+ yellow.
pub fn score_style(score: u32) -> Style {
    match score {
        90.. => Style::new().green().bold(),
        80..=89 => Style::new().blue().bold(),
        70..=79 => Style::new().yellow().bold(),
        _ => Style::new().dim(),
    }
}

/// Nearest xterm-256 cube color for a registry color.
pub fn ansi256(Rgb(r, g, b): Rgb) -> u8 {
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

pub fn model_style(rules: &Rules, name: &str) -> Style {
    match rules.color(name) {
        Some(rgb) => Style::new().color256(ansi256(rgb)).bold(),
        None => Style::new().bold(),
    }
}

/// Horizontal bar for a 0-100 score; larger values are clamped.
pub fn score_bar(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Right-pad to a display width, counting wide characters correctly.
pub fn pad(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

pub fn print_result(rules: &Rules, result: &AnalysisResult, display: &DisplayConfig) {
    let label_width = "Recommended".width().max("Alternative".width());

    println!(
        "{}  {}  {}",
        pad("Recommended", label_width),
        model_style(rules, &result.recommended_ai).apply_to(&result.recommended_ai),
        score_style(result.score).apply_to(format!("{}/100", result.score)),
    );
    println!("{}  {}", pad("", label_width), score_bar(result.score, BAR_WIDTH));
    println!();
    println!("{}", textwrap::fill(&result.justification, display.wrap_width));
    println!();
    println!("Category: {}", result.category_matched);
    println!();

    println!(
        "{}  {}  {}",
        pad("Alternative", label_width),
        model_style(rules, &result.alternative).apply_to(&result.alternative),
        score_style(result.alternative_score).apply_to(format!("{}/100", result.alternative_score)),
    );
    println!(
        "{}  {}",
        pad("", label_width),
        score_bar(result.alternative_score, BAR_WIDTH)
    );
    if let Some(model) = rules.model(&result.alternative) {
        println!("{}", textwrap::fill(&model.description, display.wrap_width));
    }

    if let Some(all) = &result.all_scores {
        println!();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Model", "Score", "", "Reason"]);

        for (rank, entry) in all.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                entry.ai.clone(),
                entry.score.to_string(),
                score_bar(entry.score, BAR_WIDTH / 2),
                entry.reason.clone(),
            ]);
        }

        println!("{table}");
    }
}

/// Print an explanation, rendered through termimad unless disabled.
pub fn print_explanation(rules: &Rules, result: &AnalysisResult, text: &str, display: &DisplayConfig) {
    if !display.markdown {
        println!("{}", text);
        return;
    }

    let mut skin = MadSkin::default();
    if let Some(Rgb(r, g, b)) = rules.color(&result.recommended_ai) {
        skin.bold.set_fg(termimad::rgb(r, g, b));
    }
    skin.print_text(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_proportions() {
        assert_eq!(score_bar(0, 10), "░".repeat(10));
        assert_eq!(score_bar(100, 10), "█".repeat(10));
        assert_eq!(score_bar(50, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
        // comparative scores can exceed 100
        assert_eq!(score_bar(547, 10), "█".repeat(10));
        assert_eq!(score_bar(95, 20).chars().count(), 20);
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_ansi256() {
        assert_eq!(ansi256(Rgb(0, 0, 0)), 16);
        assert_eq!(ansi256(Rgb(255, 255, 255)), 231);
        assert_eq!(ansi256(Rgb(255, 0, 0)), 196);
        // #10a37f -> levels (0, 3, 2)
        assert_eq!(ansi256(Rgb(0x10, 0xa3, 0x7f)), 16 + 18 + 2);
    }

    fn same(a: Style, b: Style) -> bool {
        format!("{:?}", a) == format!("{:?}", b)
    }

    #[test]
    fn test_score_style_thresholds() {
        let green = || Style::new().green().bold();
        let blue = || Style::new().blue().bold();
        let yellow = || Style::new().yellow().bold();
        assert!(same(score_style(100), green()));
        assert!(same(score_style(90), green()));
        assert!(same(score_style(89), blue()));
        assert!(same(score_style(80), blue()));
        assert!(same(score_style(79), yellow()));
        assert!(same(score_style(70), yellow()));
        assert!(same(score_style(69), Style::new().dim()));
        assert!(same(score_style(0), Style::new().dim()));
    }
}
