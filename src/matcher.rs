use tracing::debug;

use crate::normalize::normalize;
use crate::rules::Category;

/// Points for a keyword phrase found verbatim in the input.
pub const PHRASE_POINTS: u32 = 10;
/// Points for each word of a phrase (longer than [`MIN_WORD_LEN`]) found in the input.
pub const WORD_POINTS: u32 = 3;
/// Per-phrase bonus once more than one phrase of a category matched.
pub const MULTI_MATCH_POINTS: u32 = 5;
/// Words of this length or shorter never score on their own.
pub const MIN_WORD_LEN: usize = 3;

/// Lexical overlap between `input` and one category. Zero means no overlap.
///
/// Matching is plain substring containment on normalized text, not token
/// matching: "artigos" contains "artigo", "programador" contains "programa".
pub fn match_score(input: &str, category: &Category) -> u32 {
    let normalized_input = normalize(input);
    let mut score = 0;
    let mut matched_keywords = 0;

    for keyword in &category.keywords {
        let keyword = normalize(keyword);

        if normalized_input.contains(keyword.as_str()) {
            score += PHRASE_POINTS;
            matched_keywords += 1;
        }

        // Word hits are counted on top of a phrase hit, not instead of it.
        for word in keyword.split(' ') {
            if word.chars().count() > MIN_WORD_LEN && normalized_input.contains(word) {
                score += WORD_POINTS;
            }
        }
    }

    if matched_keywords > 1 {
        score += MULTI_MATCH_POINTS * matched_keywords;
    }

    if score > 0 {
        debug!(category = %category.id, score, matched_keywords, "category matched");
    }

    score
}

/// Scores every category against `input`, in configured order.
pub fn score_categories<'a>(input: &str, categories: &'a [Category]) -> Vec<(&'a Category, u32)> {
    categories
        .iter()
        .map(|c| (c, match_score(input, c)))
        .collect()
}
