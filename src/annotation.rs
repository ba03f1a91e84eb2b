// 注釈用テキストの書き出しと読み戻し
//
// 語は "語形/タグ" で表し、空のタグ ("語形/") は人手による注釈待ちを意味する

pub mod lemmatization;
pub mod pos;
pub mod syllabification;
pub mod tagged;
pub mod tei;

use crate::{segmentation::segment, tokenizer::Tokenizer};

pub const TAG_SEPARATOR: char = '/';

// 詩行の終わり
pub const LINE_TOKEN: &str = "LINE";

// 韻律の種類（計算はせず、置き場所だけ用意する）
pub const VERSE_TYPE_TOKEN: &str = "VERSE_TYPE";

pub fn encode_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}{}", token.as_ref(), TAG_SEPARATOR))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn encode_line(tokenizer: &dyn Tokenizer, line: &str, marker: Option<&str>) -> String {
    let mut tokens = tokenizer.tokenize(line);
    if let Some(marker) = marker {
        tokens.push(marker.to_owned());
    }
    encode_tokens(&tokens)
}

// 詩節ごとに "番号の行 + 詩行" を書き出す
pub fn encode_stanzas(tokenizer: &dyn Tokenizer, text: &str, marker: Option<&str>) -> String {
    segment(text)
        .iter()
        .map(|stanza| {
            let number = stanza.number.to_string();
            std::iter::once(number.as_str())
                .chain(stanza.verses())
                .map(|line| encode_line(tokenizer, line, marker))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
