use std::fmt::Write;

use super::AnalysisResult;
use crate::rules::{AiModel, Rules};

/// Render a report explaining `result` for `user_input`.
///
/// The output uses a small markdown subset (`#`/`##`/`###` headings, `- `
/// bullets, whole-line `**bold**`, blank-line paragraphs) so presentation
/// layers can format it line by line. Sections that reference a model or
/// category missing from the rules are left out; comparative results never
/// name a real category, so they have no strengths section.
pub fn generate_detailed_explanation(
    rules: &Rules,
    result: &AnalysisResult,
    user_input: &str,
) -> String {
    let recommended = rules.model(&result.recommended_ai);
    let alternative = rules.model(&result.alternative);

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, rules, result, user_input, recommended, alternative);
    out
}

fn write_report(
    out: &mut String,
    rules: &Rules,
    result: &AnalysisResult,
    user_input: &str,
    recommended: Option<&AiModel>,
    alternative: Option<&AiModel>,
) -> std::fmt::Result {
    writeln!(out, "# Análise detalhada da recomendação\n")?;
    writeln!(out, "## Tarefa analisada\n\"{}\"\n", user_input)?;
    writeln!(out, "## Categoria identificada\n{}\n", result.category_matched)?;
    writeln!(
        out,
        "## IA Recomendada: {} ({}/100)\n",
        result.recommended_ai, result.score
    )?;

    if let Some(model) = recommended {
        writeln!(out, "**{}**\n", model.description)?;
    }

    writeln!(out, "### Porquê {}?", result.recommended_ai)?;
    writeln!(out, "{}\n", result.justification)?;

    if let Some(category) = rules.category_by_name(&result.category_matched) {
        writeln!(out, "### Pontos fortes para esta tarefa:")?;
        writeln!(out, "- Especialização em: {}", category.name)?;
        writeln!(out, "- Score de adequação: {}/100\n", category.score)?;
    }

    writeln!(
        out,
        "## Alternativa: {} ({}/100)\n",
        result.alternative, result.alternative_score
    )?;

    if let Some(model) = alternative {
        writeln!(out, "**{}**\n", model.description)?;
    }

    writeln!(
        out,
        "{} também é uma boa opção, especialmente se já estiveres familiarizado com esta ferramenta.\n",
        result.alternative
    )?;

    writeln!(out, "## Conclusão")?;
    write!(
        out,
        "Para a tarefa \"{}\", recomendamos **{}** pela sua capacidade superior nesta área específica.",
        user_input, result.recommended_ai
    )
}
