// 音節注釈
//
// 書き出す書式（1 要素 1 行）:
//
//   (空行)   詩節の始まり
//   +        詩行の始まり
//   -        語の始まり
//   語       注釈者が音節ごとに改行を入れる
//
// 詩節の頭には番号だけの詩行 "+ - N." を置き、読み戻しの際はこの並びを区切りとして潰す

use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::{
    corpus::{CorpusSource, CorpusWriter, PoemFiles},
    poem::Poem,
    segmentation::segment,
    utility::{normalize_line_endings, remove_punctuations},
};

pub const PARAGRAPH_START: &str = "\n";
pub const VERSE_START: &str = "+";
pub const WORD_START: &str = "-";
pub const SYLLABLE_SEPARATOR: &str = "+";

// 読み戻し時に詩節の区切りへ置き換える文字
const PARAGRAPH_SEPARATOR: char = '*';

pub type Word = Vec<String>;
pub type Verse = Vec<Word>;
pub type Paragraph = Vec<Verse>;

// 区切りに使う文字は語から取り除く
fn clean_word(word: &str) -> String {
    remove_punctuations(word)
        .replace(['+', PARAGRAPH_SEPARATOR], "")
        .trim()
        .to_owned()
}

pub fn presyllabify(text: &str) -> String {
    let mut elements = Vec::new();

    for stanza in segment(text) {
        let verses: Vec<Vec<String>> = stanza
            .verses()
            .map(|verse| {
                verse
                    .split_whitespace()
                    .map(clean_word)
                    .filter(|word| !word.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();

        if verses.is_empty() {
            debug!("stanza {} has no verse, skipped", stanza.number);
            continue;
        }

        elements.push(PARAGRAPH_START.to_owned());

        elements.push(VERSE_START.to_owned());
        elements.push(WORD_START.to_owned());
        elements.push(format!("{}.", stanza.number));

        for words in verses {
            elements.push(VERSE_START.to_owned());
            for word in words {
                elements.push(WORD_START.to_owned());
                elements.push(word);
            }
        }
    }

    elements.join("\n")
}

pub fn read_annotated_text(text: &str) -> Vec<Paragraph> {
    // "+ - N + -" 番号だけの詩行と次の詩行の頭。
    // 詩節の頭（文頭、空行かコメント行の直後）にあるものだけを区切りとみなす
    static REGEX_PARAGRAPH_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)(?:\A|^(?:#[^\n]*)?\n)\+\n-\n[0-9]+\.?\n\+\n-").unwrap()
    });

    let text = normalize_line_endings(text);
    let text = REGEX_PARAGRAPH_SEPARATOR.replace_all(&text, PARAGRAPH_SEPARATOR.to_string());

    text.split(PARAGRAPH_SEPARATOR)
        .filter(|paragraph| !paragraph.trim().is_empty() && !paragraph.starts_with('#'))
        .map(|paragraph| {
            paragraph
                .split(VERSE_START)
                // NBSP のみの詩行も空とみなす (trim が扱う)
                .filter(|verse| !verse.trim().is_empty())
                .map(read_verse)
                .filter(|verse| !verse.is_empty())
                .collect::<Paragraph>()
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

fn read_verse(verse: &str) -> Verse {
    verse
        .trim()
        .split(WORD_START)
        .filter(|word| !word.is_empty())
        .map(|word| {
            remove_punctuations(word)
                .trim()
                .split('\n')
                .map(|syllable| syllable.trim())
                .filter(|syllable| !syllable.is_empty())
                .map(|syllable| syllable.to_owned())
                .collect::<Word>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

// "語形/音節+音節" の書式にする
pub fn transform(paragraphs: &[Paragraph]) -> String {
    let mut text = String::new();
    for paragraph in paragraphs {
        text.push('\n');
        for verse in paragraph {
            text.push('\n');
            for syllables in verse {
                text.push_str(&syllables.concat());
                text.push('/');
                text.push_str(&syllables.join(SYLLABLE_SEPARATOR));
                text.push(' ');
            }
        }
    }
    text
}

pub fn presyllabify_poem(
    source: &mut dyn CorpusSource,
    writer: &CorpusWriter,
    poem: Poem,
    file_name: &str,
) -> Result<PathBuf> {
    let files = PoemFiles::of(poem);
    let text = source
        .read_text(&files.source(file_name))
        .with_context(|| format!("Failed to load source text of {}", poem))?;

    let path = writer.write(&files.test_pre_syllabified(file_name), &presyllabify(&text))?;
    info!("pre-syllabified text of {} written to {}", poem, path.display());
    Ok(path)
}

pub fn read_annotated_file(source: &mut dyn CorpusSource, path: &str) -> Result<Vec<Paragraph>> {
    let text = source
        .read_text(path)
        .with_context(|| format!("Failed to load syllable annotation {}", path))?;
    let paragraphs = read_annotated_text(&text);
    debug!("{} paragraphs read from {}", paragraphs.len(), path);
    Ok(paragraphs)
}

pub fn transform_file(
    source: &mut dyn CorpusSource,
    writer: &CorpusWriter,
    src: &str,
    dst: &str,
) -> Result<PathBuf> {
    let paragraphs = read_annotated_file(source, src)?;
    let path = writer.write(dst, &transform(&paragraphs))?;
    info!("syllabified text written to {}", path.display());
    Ok(path)
}

pub fn transform_poem(
    source: &mut dyn CorpusSource,
    writer: &CorpusWriter,
    poem: Poem,
) -> Result<PathBuf> {
    let files = PoemFiles::of(poem);
    transform_file(source, writer, &files.syllabified_annotated(), &files.syllabified())
}
