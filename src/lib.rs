#![doc = include_str!("../README.md")]

mod annotate;
mod tokenize;
mod utils;

pub use self::annotate::{AnnotatedLine, AnnotatedSegment, Annotator, KanaStyle};
#[cfg(feature = "vibrato")]
pub use self::tokenize::VibratoTokenizer;
pub use self::tokenize::{parse_tagger_output, MecabTokenizer, Token, Tokenize, TokenizeError};
pub use self::utils::{contains_kanji, is_kanji, katakana_to_hiragana};
