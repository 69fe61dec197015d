//! Maps tokenized text to text annotated with readings.

use crate::tokenize::{Tokenize, TokenizeError};
use crate::utils;
use std::fmt::Display;

/// The kana script used to render readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KanaStyle {
    #[default]
    Hiragana,
    Katakana,
}

/// A single rendered segment of an annotated line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotatedSegment {
    /// The token's surface form, exactly as it appeared in the input.
    pub surface: String,
    /// The reading rendered after the surface, when the segment is annotated.
    pub reading: Option<String>,
}

/// Prints the segment as `surface(reading)`, or just the surface when unannotated.
impl Display for AnnotatedSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.surface)?;
        if let Some(reading) = &self.reading {
            write!(f, "({reading})")?;
        }
        Ok(())
    }
}

/// One line of annotated text, with the segments in token order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotatedLine {
    pub segments: Vec<AnnotatedSegment>,
}

/// Concatenates the segments without separators.
impl Display for AnnotatedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Annotates kanji words in text with their readings.
pub struct Annotator<T> {
    tokenizer: T,
}

impl<T: Tokenize> Annotator<T> {
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Annotates a single line of text.
    ///
    /// A token is annotated when its reading differs from its surface and the
    /// surface contains at least one kanji; every other token is emitted
    /// unchanged. With [`KanaStyle::Hiragana`] the readings are converted from
    /// the tagger's katakana, with [`KanaStyle::Katakana`] they are left as
    /// produced.
    pub fn annotate_line(
        &self,
        line: &str,
        style: KanaStyle,
    ) -> Result<AnnotatedLine, TokenizeError> {
        // no need to invoke the tagger for empty lines
        if line.is_empty() {
            return Ok(AnnotatedLine { segments: vec![] });
        }

        let tokens = self.tokenizer.tokenize(line)?;
        let mut segments = Vec::with_capacity(tokens.len());
        for token in tokens {
            let reading = token.reading.map(|reading| match style {
                KanaStyle::Hiragana => utils::katakana_to_hiragana(&reading),
                KanaStyle::Katakana => reading,
            });
            let surface = token.surface;
            let reading =
                reading.filter(|reading| *reading != surface && utils::contains_kanji(&surface));
            segments.push(AnnotatedSegment { surface, reading });
        }
        Ok(AnnotatedLine { segments })
    }

    /// Annotates multi-line text, preserving the line structure.
    ///
    /// The input is trimmed as a whole and each line is annotated
    /// independently, so the output has exactly as many lines as the trimmed
    /// input and in the same order.
    ///
    /// Annotating the output again treats the parenthesized readings as
    /// ordinary text, so the operation is not idempotent.
    pub fn annotate(&self, text: &str, style: KanaStyle) -> Result<String, TokenizeError> {
        let mut lines = Vec::new();
        for line in text.trim().split('\n') {
            lines.push(self.annotate_line(line, style)?.to_string());
        }
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokenize::Token;
    use std::collections::HashMap;

    // stands in for the tagger with a fixed line -> tokens table
    struct StubTokenizer {
        lines: HashMap<&'static str, Vec<Token>>,
    }

    impl StubTokenizer {
        fn new(lines: &[(&'static str, &[(&str, Option<&str>)])]) -> Self {
            let lines = lines
                .iter()
                .map(|(line, tokens)| {
                    let tokens = tokens
                        .iter()
                        .map(|(surface, reading)| Token {
                            surface: surface.to_string(),
                            reading: reading.map(str::to_string),
                        })
                        .collect();
                    (*line, tokens)
                })
                .collect();
            Self { lines }
        }
    }

    impl Tokenize for StubTokenizer {
        fn tokenize(&self, line: &str) -> Result<Vec<Token>, TokenizeError> {
            Ok(self.lines.get(line).cloned().unwrap_or_default())
        }
    }

    fn annotator() -> Annotator<StubTokenizer> {
        Annotator::new(StubTokenizer::new(&[
            ("猫", &[("猫", Some("ネコ"))]),
            ("これ", &[("これ", Some("コレ"))]),
            (
                "日本語を勉強する",
                &[
                    ("日本語", Some("ニホンゴ")),
                    ("を", Some("ヲ")),
                    ("勉強", Some("ベンキョウ")),
                    ("する", Some("スル")),
                ],
            ),
            ("ｘｙｚ", &[("ｘｙｚ", None)]),
        ]))
    }

    #[test]
    fn annotates_kanji_words() {
        let line = annotator().annotate_line("猫", KanaStyle::Hiragana).unwrap();
        assert_eq!(line.to_string(), "猫(ねこ)");
    }

    #[test]
    fn leaves_kana_words_bare() {
        // the reading differs only in script, and there is no kanji to annotate
        let line = annotator()
            .annotate_line("これ", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(line.to_string(), "これ");
    }

    #[test]
    fn annotates_empty_line_to_empty() {
        let line = annotator().annotate_line("", KanaStyle::Hiragana).unwrap();
        assert_eq!(line.to_string(), "");
        let line = annotator().annotate_line("", KanaStyle::Katakana).unwrap();
        assert_eq!(line.to_string(), "");
    }

    #[test]
    fn annotates_mixed_sentence() {
        let line = annotator()
            .annotate_line("日本語を勉強する", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(line.to_string(), "日本語(にほんご)を勉強(べんきょう)する");
    }

    #[test]
    fn keeps_katakana_readings_with_katakana_style() {
        let line = annotator().annotate_line("猫", KanaStyle::Katakana).unwrap();
        assert_eq!(line.to_string(), "猫(ネコ)");
    }

    #[test]
    fn style_changes_only_the_reading_script() {
        let annotator = annotator();
        let hiragana = annotator
            .annotate_line("日本語を勉強する", KanaStyle::Hiragana)
            .unwrap();
        let katakana = annotator
            .annotate_line("日本語を勉強する", KanaStyle::Katakana)
            .unwrap();
        assert_eq!(hiragana.segments.len(), katakana.segments.len());
        for (h, k) in hiragana.segments.iter().zip(&katakana.segments) {
            assert_eq!(h.surface, k.surface);
            assert_eq!(h.reading.is_some(), k.reading.is_some());
            if let (Some(h), Some(k)) = (&h.reading, &k.reading) {
                assert_eq!(h, &crate::utils::katakana_to_hiragana(k));
            }
        }
    }

    #[test]
    fn emits_tokens_without_readings_bare() {
        let line = annotator()
            .annotate_line("ｘｙｚ", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(line.to_string(), "ｘｙｚ");
    }

    #[test]
    fn annotates_lines_independently() {
        let text = annotator()
            .annotate("猫\nこれ", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(text, "猫(ねこ)\nこれ");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let text = annotator()
            .annotate("\n猫\nこれ\n\n", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(text, "猫(ねこ)\nこれ");
    }

    #[test]
    fn preserves_interior_empty_lines() {
        let text = annotator()
            .annotate("猫\n\nこれ", KanaStyle::Hiragana)
            .unwrap();
        assert_eq!(text, "猫(ねこ)\n\nこれ");
    }

    #[test]
    fn skips_annotation_when_surface_equals_reading() {
        // a kanji surface whose reading field repeats the surface stays bare
        let annotator = Annotator::new(StubTokenizer::new(&[("一", &[("一", Some("一"))])]));
        let line = annotator.annotate_line("一", KanaStyle::Hiragana).unwrap();
        assert_eq!(line.to_string(), "一");
    }
}
