//! Localized prompt strings for the interactive menu.
//!
//! The annotation core never touches these; the locale is purely a
//! presentation concern, resolved once at startup.

use serde::Deserialize;

const EN: &str = include_str!("../locales/en.json");
const JA: &str = include_str!("../locales/ja.json");
const ZH: &str = include_str!("../locales/zh.json");

/// The prompt set shown by the interactive menu, in one language.
#[derive(Debug, Clone, Deserialize)]
pub struct Prompts {
    pub choose_annotation: String,
    pub hiragana: String,
    pub katakana: String,
    pub input_choice: String,
    pub invalid_choice: String,
    pub start_clipboard: String,
    pub empty_clipboard: String,
    pub annotated_text: String,
    pub copied_clipboard: String,
}

impl Prompts {
    /// Loads the prompt set for the given language code.
    /// Unknown codes fall back to English.
    pub fn for_locale(lang: &str) -> Self {
        let raw = match lang {
            "ja" => JA,
            "zh" => ZH,
            _ => EN,
        };
        serde_json::from_str(raw).expect("embedded locale files are valid")
    }
}

/// Returns the language code from the `LANG` environment variable,
/// defaulting to English when it is unset.
pub fn locale_from_env() -> String {
    std::env::var("LANG")
        .map(|lang| language_code(&lang).to_string())
        .unwrap_or_else(|_| "en".to_string())
}

// "ja_JP.UTF-8" -> "ja"
fn language_code(lang: &str) -> &str {
    lang.split(['_', '.']).next().unwrap_or(lang)
}
