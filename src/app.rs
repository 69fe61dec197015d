//! The interactive clipboard annotation loop.

use crate::clipboard::Clipboard;
use crate::lang::Prompts;
use anyhow::Context;
use furiclip::{Annotator, KanaStyle, Tokenize};
use std::io::{self, BufRead, Write};

pub struct Options {
    /// Kana style fixed on the command line, skipping the menu.
    pub style: Option<KanaStyle>,
    /// Annotate the clipboard once and exit instead of looping.
    pub once: bool,
}

pub fn run<T: Tokenize>(
    annotator: Annotator<T>,
    prompts: &Prompts,
    options: Options,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut clipboard = Clipboard::new().context("failed to open the clipboard")?;

    let style = match options.style {
        Some(style) => style,
        None if options.once => KanaStyle::default(),
        None => choose_style(&mut input, prompts)?,
    };

    if options.once {
        return annotate_clipboard(&annotator, &mut clipboard, prompts, style);
    }

    loop {
        print!("\n{}", prompts.start_clipboard);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed
            break;
        }
        if line.trim() == "e" {
            break;
        }
        annotate_clipboard(&annotator, &mut clipboard, prompts, style)?;
    }
    Ok(())
}

fn choose_style(input: &mut impl BufRead, prompts: &Prompts) -> anyhow::Result<KanaStyle> {
    println!("{}", prompts.choose_annotation);
    println!("1. {}", prompts.hiragana);
    println!("2. {}", prompts.katakana);
    print!("{}", prompts.input_choice);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(match style_from_choice(line.trim()) {
        Some(style) => style,
        None => {
            println!("{}", prompts.invalid_choice);
            KanaStyle::Hiragana
        }
    })
}

fn style_from_choice(choice: &str) -> Option<KanaStyle> {
    match choice {
        "1" => Some(KanaStyle::Hiragana),
        "2" => Some(KanaStyle::Katakana),
        _ => None,
    }
}

fn annotate_clipboard<T: Tokenize>(
    annotator: &Annotator<T>,
    clipboard: &mut Clipboard,
    prompts: &Prompts,
    style: KanaStyle,
) -> anyhow::Result<()> {
    let Some(text) = clipboard.read() else {
        println!("{}", prompts.empty_clipboard);
        return Ok(());
    };

    let annotated = annotator.annotate(&text, style)?;
    println!("\n{}", prompts.annotated_text);
    println!("{annotated}");

    clipboard
        .write(annotated)
        .context("failed to write to the clipboard")?;
    println!("\n{}", prompts.copied_clipboard);
    Ok(())
}
