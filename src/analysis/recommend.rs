use tracing::debug;

use super::AnalysisResult;
use crate::matcher::score_categories;
use crate::rules::Rules;

/// Recommend the model of the best matching category.
///
/// The category's pre-authored recommendation is returned verbatim. Ties go
/// to the category listed first. With no lexical overlap at all the generic
/// fallback from the rules is returned.
pub fn analyze_task(rules: &Rules, user_input: &str) -> AnalysisResult {
    let mut best = None;
    for (category, score) in score_categories(user_input, rules.categories()) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((category, score)),
        }
    }

    match best {
        Some((category, score)) if score > 0 => {
            debug!(category = %category.id, score, "best category");
            AnalysisResult {
                recommended_ai: category.best_ai.clone(),
                score: category.score.into(),
                justification: category.justification.clone(),
                alternative: category.alternative.clone(),
                alternative_score: category.alternative_score.into(),
                category_matched: category.name.clone(),
                all_scores: None,
            }
        }
        _ => {
            debug!("no category matched, using fallback");
            let fallback = rules.fallback();
            AnalysisResult {
                recommended_ai: fallback.recommended_ai.clone(),
                score: fallback.score.into(),
                justification: fallback.justification.clone(),
                alternative: fallback.alternative.clone(),
                alternative_score: fallback.alternative_score.into(),
                category_matched: fallback.category.clone(),
                all_scores: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::load_rules;
    use crate::rules::registry::fixtures::{category, rules};

    const MODELS: &[&str] = &["ChatGPT", "Claude", "Gemini", "Perplexity"];

    fn generic() -> AnalysisResult {
        AnalysisResult {
            recommended_ai: "ChatGPT".into(),
            score: 75,
            justification: "Recomendação genérica: ChatGPT é versátil para tarefas diversas"
                .into(),
            alternative: "Claude".into(),
            alternative_score: 70,
            category_matched: "Genérico".into(),
            all_scores: None,
        }
    }

    #[test]
    fn test_returns_category_recommendation_verbatim() {
        let mut writing = category("escrita", &["artigo", "escrever artigo"], "ChatGPT", "Claude");
        writing.score = 95;
        writing.alternative_score = 88;
        let rules = rules(
            MODELS,
            vec![category("resumo", &["resumir"], "Claude", "Gemini"), writing],
        );

        let result = analyze_task(&rules, "escrever um artigo técnico sobre IA");
        assert_eq!(result.recommended_ai, "ChatGPT");
        assert_eq!(result.score, 95);
        assert_eq!(result.justification, "ChatGPT fits escrita");
        assert_eq!(result.alternative, "Claude");
        assert_eq!(result.alternative_score, 88);
        assert_eq!(result.category_matched, "Category escrita");
        assert!(result.all_scores.is_none());
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let rules = load_rules().unwrap();
        assert_eq!(analyze_task(&rules, ""), generic());
    }

    #[test]
    fn test_no_overlap_returns_fallback() {
        let rules = load_rules().unwrap();
        assert_eq!(analyze_task(&rules, "zzz qqq"), generic());
    }

    #[test]
    fn test_no_categories_returns_fallback() {
        let rules = rules(MODELS, vec![]);
        let result = analyze_task(&rules, "escrever um artigo");
        assert_eq!(result.recommended_ai, "ChatGPT");
        assert_eq!(result.category_matched, "Genérico");
    }

    #[test]
    fn test_highest_score_wins() {
        let rules = rules(
            MODELS,
            vec![
                category("a", &["resumo"], "Claude", "Gemini"),
                category("b", &["resumo", "pdf"], "Gemini", "Claude"),
            ],
        );
        let result = analyze_task(&rules, "resumo de um pdf");
        assert_eq!(result.category_matched, "Category b");
        assert_eq!(result.recommended_ai, "Gemini");
    }

    #[test]
    fn test_ties_go_to_first_category() {
        let rules = rules(
            MODELS,
            vec![
                category("first", &["pesquisa"], "Perplexity", "Gemini"),
                category("second", &["pesquisa"], "Gemini", "Perplexity"),
            ],
        );
        let result = analyze_task(&rules, "uma pesquisa");
        assert_eq!(result.category_matched, "Category first");
        assert_eq!(result.recommended_ai, "Perplexity");
    }

    #[test]
    fn test_embedded_rules_scenarios() {
        let rules = load_rules().unwrap();

        let result = analyze_task(&rules, "escrever um artigo técnico sobre IA");
        assert_eq!(result.recommended_ai, "ChatGPT");
        assert_eq!(result.category_matched, "Escrita de conteúdo");

        let result = analyze_task(&rules, "Resumir um documento PDF de 100 páginas");
        assert_eq!(result.recommended_ai, "Claude");

        let result = analyze_task(&rules, "Pesquisar informação atual sobre IA");
        assert_eq!(result.recommended_ai, "Perplexity");

        let result = analyze_task(&rules, "Criar automação para Gmail");
        assert_eq!(result.recommended_ai, "Gemini");
    }

    #[test]
    fn test_deterministic() {
        let rules = load_rules().unwrap();
        let input = "Desenvolver uma aplicação web em Python";
        let first = analyze_task(&rules, input);
        assert_eq!(analyze_task(&rules, input), first);
    }
}
