//! The morphological tagger boundary.
//!
//! The annotator only needs one capability from the tagger: given a line of
//! text, produce an ordered list of tokens with their surface forms and
//! readings. Anything that can do that is substitutable via [`Tokenize`],
//! whether it runs in process or as an external program.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::debug;

/// A single token produced by the morphological tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The original substring, exactly as it appears in the input.
    pub surface: String,
    /// The tagger's canonical reading for the surface, typically in katakana.
    /// `None` when the tagger offers no usable reading, such as for unknown words.
    pub reading: Option<String>,
}

/// A morphological tagger that splits one line of text into tokens.
pub trait Tokenize {
    /// Tokenizes a single line of text.
    /// The token order matches the order of the corresponding substrings in the line.
    fn tokenize(&self, line: &str) -> Result<Vec<Token>, TokenizeError>;
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("failed to launch tagger `{program}`: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("tagger i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("tagger `{program}` exited with {status}")]
    Tagger { program: String, status: ExitStatus },
    #[cfg(feature = "vibrato")]
    #[error("failed to load tokenizer dictionary: {0}")]
    Dictionary(#[from] vibrato::errors::VibratoError),
}

/// Parses the line-structured output of a MeCab-compatible tagger into tokens.
///
/// Each record is `surface<TAB>features`, with the features comma-delimited
/// and the canonical reading in the first field. The trailing `EOS` and empty
/// records are end-of-input sentinels and are stripped. A `*` or empty
/// reading field marks a token without a reading, such as an unknown word.
///
/// A record without a feature column re-emits the last successfully parsed
/// surface as a bare token instead of failing the whole line.
pub fn parse_tagger_output(output: &str) -> Vec<Token> {
    let mut records: Vec<&str> = output.split('\n').collect();
    while let Some(last) = records.last() {
        // terminal entries that carry no surface/reading pair are sentinels
        if last.is_empty() || *last == "EOS" {
            records.pop();
        } else {
            break;
        }
    }

    let mut tokens = Vec::with_capacity(records.len());
    let mut last_surface = String::new();
    for record in records {
        match record.split_once('\t') {
            Some((surface, features)) => {
                last_surface = surface.to_string();
                let reading = features
                    .split(',')
                    .next()
                    .filter(|reading| !reading.is_empty() && *reading != "*")
                    .map(str::to_string);
                tokens.push(Token {
                    surface: surface.to_string(),
                    reading,
                });
            }
            None => {
                // malformed record, fall back to repeating the last surface
                tokens.push(Token {
                    surface: last_surface.clone(),
                    reading: None,
                });
            }
        }
    }
    tokens
}

/// Tokenizes by running a MeCab-compatible tagger as a subprocess.
///
/// The tagger binary and its dictionary are checked once at construction so
/// that a broken installation fails at startup rather than mid-annotation.
#[derive(Debug, Clone)]
pub struct MecabTokenizer {
    program: PathBuf,
}

impl MecabTokenizer {
    /// Creates a tokenizer backed by `mecab` on the `PATH`.
    pub fn new() -> Result<Self, TokenizeError> {
        Self::with_program("mecab")
    }

    /// Creates a tokenizer backed by the given tagger binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Result<Self, TokenizeError> {
        let tokenizer = Self {
            program: program.into(),
        };
        // probe with empty input to catch a missing binary or dictionary early
        tokenizer.run("")?;
        Ok(tokenizer)
    }

    fn run(&self, line: &str) -> Result<String, TokenizeError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| TokenizeError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(line.as_bytes())?;
            stdin.write_all(b"\n")?;
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(TokenizeError::Tagger {
                program: self.program.display().to_string(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Tokenize for MecabTokenizer {
    fn tokenize(&self, line: &str) -> Result<Vec<Token>, TokenizeError> {
        let output = self.run(line)?;
        let tokens = parse_tagger_output(&output);
        debug!(tokens = tokens.len(), "tagged line");
        Ok(tokens)
    }
}

/// Tokenizes in process with the `vibrato` crate and a compiled dictionary.
///
/// The reading is taken from a feature column of the dictionary; the default
/// index 7 matches the IPADIC feature layout.
#[cfg(feature = "vibrato")]
pub struct VibratoTokenizer {
    tokenizer: vibrato::Tokenizer,
    reading_field: usize,
}

#[cfg(feature = "vibrato")]
impl VibratoTokenizer {
    /// Loads a compiled dictionary from the given path.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, TokenizeError> {
        let reader = std::fs::File::open(path)?;
        let dict = vibrato::Dictionary::read(reader)?;
        Ok(Self {
            tokenizer: vibrato::Tokenizer::new(dict),
            reading_field: 7,
        })
    }

    /// Sets the index of the feature column that carries the reading.
    pub fn reading_field(mut self, index: usize) -> Self {
        self.reading_field = index;
        self
    }
}

#[cfg(feature = "vibrato")]
impl Tokenize for VibratoTokenizer {
    fn tokenize(&self, line: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(line);
        worker.tokenize();
        let mut tokens = Vec::with_capacity(worker.num_tokens());
        for i in 0..worker.num_tokens() {
            let token = worker.token(i);
            let reading = token
                .feature()
                .split(',')
                .nth(self.reading_field)
                .filter(|reading| !reading.is_empty() && *reading != "*")
                .map(str::to_string);
            tokens.push(Token {
                surface: token.surface().to_string(),
                reading,
            });
        }
        debug!(tokens = tokens.len(), "tokenized line");
        Ok(tokens)
    }
}
