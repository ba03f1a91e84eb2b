use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    annotation::{encode_line, encode_stanzas, LINE_TOKEN, VERSE_TYPE_TOKEN},
    corpus::{CorpusSource, CorpusWriter, PoemFiles},
    poem::Poem,
    segmentation::split_lines,
    tokenizer::Tokenizer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmatizationPreprocess {
    // test_lemmatized_*
    Test,
    // tei_lemmatized_*, 詩節ごと
    TeiOnlyPoem,
    // tei_lemmatized_*, 行ごと
    Tei,
    // scansion/test_scansion_*
    Scansion,
}

pub fn preprocess(tokenizer: &dyn Tokenizer, text: &str) -> String {
    encode_stanzas(tokenizer, text, None)
}

pub fn preprocess_for_tei_only_poem(tokenizer: &dyn Tokenizer, text: &str) -> String {
    encode_stanzas(tokenizer, text, Some(LINE_TOKEN))
}

// 詩節番号による分割をしない（散文の混じるテキスト向け）
pub fn preprocess_for_tei(tokenizer: &dyn Tokenizer, text: &str) -> String {
    split_lines(text)
        .iter()
        .map(|line| encode_line(tokenizer, line, Some(LINE_TOKEN)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn preprocess_for_scansion(tokenizer: &dyn Tokenizer, text: &str) -> String {
    encode_stanzas(tokenizer, text, Some(VERSE_TYPE_TOKEN))
}

pub fn preprocess_poem(
    source: &mut dyn CorpusSource,
    writer: &CorpusWriter,
    tokenizer: &dyn Tokenizer,
    poem: Poem,
    file_name: &str,
    variant: LemmatizationPreprocess,
) -> Result<PathBuf> {
    let files = PoemFiles::of(poem);
    let text = source
        .read_text(&files.source(file_name))
        .with_context(|| format!("Failed to load source text of {}", poem))?;

    let (output, destination) = match variant {
        LemmatizationPreprocess::Test => (preprocess(tokenizer, &text), files.test_lemmatized(file_name)),
        LemmatizationPreprocess::TeiOnlyPoem => (
            preprocess_for_tei_only_poem(tokenizer, &text),
            files.tei_lemmatized(file_name),
        ),
        LemmatizationPreprocess::Tei => (
            preprocess_for_tei(tokenizer, &text),
            files.tei_lemmatized(file_name),
        ),
        LemmatizationPreprocess::Scansion => (
            preprocess_for_scansion(tokenizer, &text),
            files.test_scansion(file_name),
        ),
    };

    let path = writer.write(&destination, &output)?;
    info!("{:?} preprocessing of {} written to {}", variant, poem, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::OldNorseWordTokenizer;

    const TEXT: &str = "# Reginsmál\n1.\nSá er flýtr\nfyr flaumi,\n2.\nAndvari ek heiti,\n";

    #[test]
    fn test_variant_has_bare_tokens() {
        assert_eq!(
            preprocess(&OldNorseWordTokenizer, TEXT),
            "1/\nSá/ er/ flýtr/\nfyr/ flaumi/ ,/\n2/\nAndvari/ ek/ heiti/ ,/"
        );
    }

    #[test]
    fn tei_only_poem_variant_closes_every_line() {
        assert_eq!(
            preprocess_for_tei_only_poem(&OldNorseWordTokenizer, TEXT),
            "1/ LINE/\nSá/ er/ flýtr/ LINE/\nfyr/ flaumi/ ,/ LINE/\n2/ LINE/\nAndvari/ ek/ heiti/ ,/ LINE/"
        );
    }

    #[test]
    fn tei_variant_ignores_stanzas() {
        assert_eq!(
            preprocess_for_tei(&OldNorseWordTokenizer, TEXT),
            "1./ LINE/\nSá/ er/ flýtr/ LINE/\nfyr/ flaumi/ ,/ LINE/\n2./ LINE/\nAndvari/ ek/ heiti/ ,/ LINE/"
        );
    }

    #[test]
    fn scansion_variant_leaves_verse_type_slot() {
        let output = preprocess_for_scansion(&OldNorseWordTokenizer, TEXT);
        assert!(output.lines().all(|line| line.ends_with(" VERSE_TYPE/")));
        assert_eq!(output.lines().count(), 5);
    }
}
