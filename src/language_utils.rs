use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// DeepL expects uppercase ISO 639-1 codes ("EN", "JA"); callers may pass
/// either 2-letter or 3-letter codes in any case.

/// Validate a language code and normalize it to the uppercase ISO 639-1
/// form the DeepL API expects
pub fn to_deepl_code(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    let part1 = language
        .to_639_1()
        .ok_or_else(|| anyhow!("No ISO 639-1 code for language: {}", language.to_name()))?;

    Ok(part1.to_uppercase())
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (to_deepl_code(code1), to_deepl_code(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    Ok(language.to_name().to_string())
}
