use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: lowercase, decompose (NFD) and drop the
/// combining diacritical marks block, so "Técnico" and "tecnico" compare equal.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
