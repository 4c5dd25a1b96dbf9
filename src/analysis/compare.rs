use tracing::debug;

use super::{AnalysisResult, ModelScore};
use crate::matcher::{score_categories, PHRASE_POINTS};
use crate::rules::Rules;

#[derive(Debug, Default)]
struct Accumulator<'a> {
    total: f64,
    count: u32,
    reasons: Vec<&'a str>,
}

/// Rank every registered model for `user_input`.
///
/// Each matching category credits its primary model with
/// `score * (match / 10)` and its alternative with the same expression on
/// `alternativeScore`, scaled by the rules' alternative weight. A model's
/// final score is the rounded mean of its credits. Ties keep registry order.
pub fn compare_all_ais(rules: &Rules, user_input: &str) -> AnalysisResult {
    let models = rules.models();
    let mut accumulators: Vec<Accumulator> = models.iter().map(|_| Accumulator::default()).collect();
    let index_of = |name: &str| models.iter().position(|m| m.name == name);
    let weight = rules.alternative_weight();

    for (category, match_score) in score_categories(user_input, rules.categories()) {
        if match_score == 0 {
            continue;
        }
        let factor = f64::from(match_score) / f64::from(PHRASE_POINTS);

        if let Some(i) = index_of(&category.best_ai) {
            let acc = &mut accumulators[i];
            acc.total += f64::from(category.score) * factor;
            acc.count += 1;
            acc.reasons.push(&category.justification);
        }

        if let Some(i) = index_of(&category.alternative) {
            let acc = &mut accumulators[i];
            acc.total += f64::from(category.alternative_score) * factor * weight;
            acc.count += 1;
        }
    }

    let general = rules.labels().general_capability.as_str();
    let mut all_scores: Vec<ModelScore> = models
        .iter()
        .zip(&accumulators)
        .map(|(model, acc)| ModelScore {
            ai: model.name.clone(),
            score: mean_score(acc),
            reason: acc.reasons.first().copied().unwrap_or(general).to_string(),
        })
        .collect();

    // stable: equal scores keep registry order
    all_scores.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(?all_scores, "comparative ranking");

    // Rules guarantee at least two models.
    let (best, second) = (&all_scores[0], &all_scores[1]);
    AnalysisResult {
        recommended_ai: best.ai.clone(),
        score: best.score,
        justification: best.reason.clone(),
        alternative: second.ai.clone(),
        alternative_score: second.score,
        category_matched: rules.labels().comparative.clone(),
        all_scores: Some(all_scores),
    }
}

fn mean_score(acc: &Accumulator) -> u32 {
    if acc.count == 0 {
        return 0;
    }
    (acc.total / f64::from(acc.count)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::load_rules;
    use crate::rules::registry::fixtures::{category, rules};
    use crate::rules::DEFAULT_ALTERNATIVE_WEIGHT;

    const MODELS: &[&str] = &["ChatGPT", "Claude", "Gemini", "Perplexity"];

    fn assert_ranked(result: &AnalysisResult) {
        let all = result.all_scores.as_ref().expect("comparative result has scores");
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(result.recommended_ai, all[0].ai);
        assert_eq!(result.score, all[0].score);
        assert_eq!(result.alternative, all[1].ai);
        assert_eq!(result.alternative_score, all[1].score);
    }

    #[test]
    fn test_primary_and_alternative_credits() {
        // match 13 -> factor 1.3
        // Claude: 90 * 1.3 = 117; Gemini: 80 * 1.3 * 0.5 = 52
        let rules = rules(MODELS, vec![category("doc", &["resumo"], "Claude", "Gemini")]);
        let result = compare_all_ais(&rules, "um resumo");
        assert_ranked(&result);

        let all = result.all_scores.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!((all[0].ai.as_str(), all[0].score), ("Claude", 117));
        assert_eq!(all[0].reason, "Claude fits doc");
        assert_eq!((all[1].ai.as_str(), all[1].score), ("Gemini", 52));
        assert_eq!(all[1].reason, "Capacidade geral");
        assert_eq!((all[2].ai.as_str(), all[2].score), ("ChatGPT", 0));
        assert_eq!((all[3].ai.as_str(), all[3].score), ("Perplexity", 0));
        assert_eq!(result.category_matched, "Análise comparativa");
        assert_eq!(result.justification, "Claude fits doc");
    }

    #[test]
    fn test_scores_are_averaged_over_contributions() {
        // Claude: primary in "a" (90 * 1.3 = 117) and alternative in "b"
        // (80 * 1.3 * 0.5 = 52), mean 84.5 -> 85
        let rules = rules(
            MODELS,
            vec![
                category("a", &["resumo"], "Claude", "Gemini"),
                category("b", &["resumo"], "ChatGPT", "Claude"),
            ],
        );
        let result = compare_all_ais(&rules, "resumo");
        let all = result.all_scores.unwrap();
        let claude = all.iter().find(|s| s.ai == "Claude").unwrap();
        assert_eq!(claude.score, 85);
        assert_eq!(claude.reason, "Claude fits a");
    }

    #[test]
    fn test_first_justification_is_kept() {
        let rules = rules(
            MODELS,
            vec![
                category("a", &["resumo"], "Claude", "Gemini"),
                category("b", &["resumo"], "Claude", "Gemini"),
            ],
        );
        let result = compare_all_ais(&rules, "resumo");
        assert_eq!(result.justification, "Claude fits a");
    }

    #[test]
    fn test_default_weight_is_half_rate() {
        assert_eq!(DEFAULT_ALTERNATIVE_WEIGHT, 0.5);
        for match_score in [3u32, 13, 19, 39, 57, 101] {
            let factor = f64::from(match_score) / 10.0;
            let weighted = 87.0 * factor * DEFAULT_ALTERNATIVE_WEIGHT;
            let half_rate = 87.0 * (f64::from(match_score) / 20.0);
            assert_eq!(weighted, half_rate);
        }
    }

    #[test]
    fn test_custom_alternative_weight() {
        let mut file = crate::rules::registry::fixtures::rules_file(
            MODELS,
            vec![category("doc", &["resumo"], "Claude", "Gemini")],
        );
        file.weights.alternative = 1.0;
        let rules = Rules::from_file(file).unwrap();
        let all = compare_all_ais(&rules, "resumo").all_scores.unwrap();
        let gemini = all.iter().find(|s| s.ai == "Gemini").unwrap();
        // 80 * 1.3
        assert_eq!(gemini.score, 104);
    }

    #[test]
    fn test_ties_keep_registry_order() {
        let rules = rules(MODELS, vec![category("a", &["resumo"], "Claude", "Gemini")]);
        let all = compare_all_ais(&rules, "nada a ver").all_scores.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.ai.as_str()).collect();
        assert_eq!(names, MODELS);
    }

    #[test]
    fn test_two_models_no_match() {
        let rules = rules(
            &["ChatGPT", "Claude"],
            vec![category("a", &["resumo"], "Claude", "ChatGPT")],
        );
        let result = compare_all_ais(&rules, "");
        assert_ranked(&result);
        let all = result.all_scores.unwrap();
        assert_eq!(all.len(), 2);
        for entry in &all {
            assert_eq!(entry.score, 0);
            assert_eq!(entry.reason, "Capacidade geral");
        }
        assert_eq!(result.recommended_ai, "ChatGPT");
        assert_eq!(result.alternative, "Claude");
    }

    #[test]
    fn test_embedded_rules_ranking() {
        let rules = load_rules().unwrap();
        for task in rules.sample_tasks() {
            let result = compare_all_ais(&rules, task);
            assert_ranked(&result);
            assert_eq!(result.all_scores.as_ref().unwrap().len(), rules.models().len());
        }

        let result = compare_all_ais(&rules, "Pesquisar informação atual sobre IA");
        assert_eq!(result.recommended_ai, "Perplexity");
    }

    #[test]
    fn test_deterministic() {
        let rules = load_rules().unwrap();
        let input = "Analisar dados de vendas em Excel";
        assert_eq!(compare_all_ais(&rules, input), compare_all_ais(&rules, input));
    }
}
