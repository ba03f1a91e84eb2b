// 生テキストを 詩節 (stanza) → 詩行 (verse) に分割する
//
// 詩節は "1." のような番号で始まる。番号の数字そのものではなく出現順で番号を振り直す

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static REGEX_STANZA_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,2}\.").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StanzaMarker {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stanza {
    pub number: usize,
    pub marker: StanzaMarker,
    pub body: String,
}

impl Stanza {
    // 空行は詩行に数えない
    pub fn verses(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n').filter(|line| !line.trim().is_empty())
    }
}

// Drops empty lines and lines starting with `#`.
pub fn strip_comment_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn find_stanza_markers(text: &str) -> Vec<StanzaMarker> {
    REGEX_STANZA_MARKER
        .find_iter(text)
        .map(|m| StanzaMarker {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_owned(),
        })
        .collect()
}

// 最初の番号より前のテキストは捨てる
// 最後の詩節はテキストの終わりまで
pub fn split_stanzas(text: &str) -> Vec<Stanza> {
    let markers = find_stanza_markers(text);

    let mut stanzas = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        stanzas.push(Stanza {
            number: i + 1,
            marker: marker.clone(),
            body: text[marker.end..end].to_owned(),
        });
    }

    stanzas
}

// Comment stripping followed by stanza splitting.
pub fn segment(text: &str) -> Vec<Stanza> {
    split_stanzas(&strip_comment_lines(text))
}

// 詩節に分けずに行ごとに扱う場合
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_owned())
        .collect()
}
