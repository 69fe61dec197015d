//! Character classification and kana conversion helpers.

// the hiragana and katakana blocks share the same layout at a fixed offset
const KANA_TABLE_DISTANCE: u32 = 96;

/// Returns whether the character is a kanji.
/// Covers the CJK Unified Ideographs block and Extension A.
pub fn is_kanji(c: char) -> bool {
    (0x4E00..=0x9FFF).contains(&(c as u32)) || (0x3400..=0x4DBF).contains(&(c as u32))
}

/// Returns whether the text contains at least one kanji.
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// Converts every katakana character in the text to its hiragana equivalent.
/// Characters outside ァ..=ン pass through unchanged, so the conversion is
/// idempotent on text that is already hiragana.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if ('ァ'..='ン').contains(&c) {
                char::from_u32(c as u32 - KANA_TABLE_DISTANCE).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_kanji() {
        assert!(is_kanji('猫'));
        assert!(is_kanji('一'));
        // Extension A
        assert!(is_kanji('\u{3400}'));
        assert!(is_kanji('\u{4DBF}'));
        // block boundaries
        assert!(is_kanji('\u{4E00}'));
        assert!(is_kanji('\u{9FFF}'));
        assert!(!is_kanji('\u{33FF}'));
        assert!(!is_kanji('\u{4DC0}'));
        assert!(!is_kanji('ね'));
        assert!(!is_kanji('ネ'));
        assert!(!is_kanji('a'));
        // the iteration mark is not a kanji by itself
        assert!(!is_kanji('々'));
    }

    #[test]
    fn finds_kanji_in_text() {
        assert!(contains_kanji("食べる"));
        assert!(!contains_kanji("たべる"));
        assert!(!contains_kanji(""));
    }

    #[test]
    fn converts_katakana() {
        assert_eq!(katakana_to_hiragana("ネコ"), "ねこ");
        assert_eq!(katakana_to_hiragana("ワガハイ"), "わがはい");
        // block boundaries
        assert_eq!(katakana_to_hiragana("ァ"), "ぁ");
        assert_eq!(katakana_to_hiragana("ン"), "ん");
    }

    #[test]
    fn leaves_other_text_alone() {
        // the prolonged sound mark is outside the convertible range
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
        assert_eq!(katakana_to_hiragana("ねこ"), "ねこ");
        assert_eq!(katakana_to_hiragana("猫abc123"), "猫abc123");
        assert_eq!(katakana_to_hiragana(""), "");
    }

    #[test]
    fn converts_idempotently() {
        let converted = katakana_to_hiragana("ネコとねこと猫");
        assert_eq!(katakana_to_hiragana(&converted), converted);
    }
}
