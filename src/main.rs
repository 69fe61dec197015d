//! Annotates Japanese text on the clipboard with furigana readings.

mod app;
mod clipboard;
mod lang;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use furiclip::{Annotator, KanaStyle, MecabTokenizer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "furiclip", version, about)]
struct Args {
    /// Kana style for the readings, skipping the interactive menu
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Prompt language (en, ja or zh); defaults to the LANG environment variable
    #[arg(long)]
    lang: Option<String>,

    /// Annotate the clipboard once and exit instead of looping
    #[arg(long)]
    once: bool,

    /// MeCab-compatible tagger binary used for tokenization
    #[arg(long, default_value = "mecab")]
    tagger: String,

    /// Compiled tokenizer dictionary, used instead of the external tagger
    #[cfg(feature = "vibrato")]
    #[arg(long)]
    dict: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Hiragana,
    Katakana,
}

impl From<StyleArg> for KanaStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Hiragana => KanaStyle::Hiragana,
            StyleArg::Katakana => KanaStyle::Katakana,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "furiclip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let locale = args.lang.unwrap_or_else(lang::locale_from_env);
    let prompts = lang::Prompts::for_locale(&locale);
    let options = app::Options {
        style: args.style.map(KanaStyle::from),
        once: args.once,
    };

    #[cfg(feature = "vibrato")]
    if let Some(dict) = &args.dict {
        let tokenizer = furiclip::VibratoTokenizer::from_path(dict)
            .context("failed to load the tokenizer dictionary")?;
        return app::run(Annotator::new(tokenizer), &prompts, options);
    }

    let tokenizer = MecabTokenizer::with_program(&args.tagger)
        .context("the morphological tagger is unavailable")?;
    app::run(Annotator::new(tokenizer), &prompts, options)
}
