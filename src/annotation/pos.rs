use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    annotation::encode_stanzas,
    corpus::{CorpusSource, CorpusWriter, PoemFiles},
    poem::Poem,
    tokenizer::Tokenizer,
};

// 品詞の注釈待ちテキスト（書式は lemmatization::preprocess と同じ）
pub fn preprocess(tokenizer: &dyn Tokenizer, text: &str) -> String {
    encode_stanzas(tokenizer, text, None)
}

pub fn preprocess_poem(
    source: &mut dyn CorpusSource,
    writer: &CorpusWriter,
    tokenizer: &dyn Tokenizer,
    poem: Poem,
    file_name: &str,
) -> Result<PathBuf> {
    let files = PoemFiles::of(poem);
    let text = source
        .read_text(&files.source(file_name))
        .with_context(|| format!("Failed to load source text of {}", poem))?;

    let path = writer.write(&files.test_pos_tagged(file_name), &preprocess(tokenizer, &text))?;
    info!("POS preprocessing of {} written to {}", poem, path.display());
    Ok(path)
}
