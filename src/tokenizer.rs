use once_cell::sync::Lazy;
use regex::Regex;

// 語の分割は外部の部品として差し替えられるようにしておく
pub trait Tokenizer {
    fn tokenize(&self, line: &str) -> Vec<String>;
}

const DETACHED_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '«', '»', '"', '(', ')'];

// Whitespace tokenizer that detaches punctuation into tokens of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldNorseWordTokenizer;

impl Tokenizer for OldNorseWordTokenizer {
    fn tokenize(&self, line: &str) -> Vec<String> {
        static REGEX_STANZA_NUMBER: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[0-9]{1,2}\.$").unwrap());

        let mut tokens = Vec::new();

        for chunk in line.split_whitespace() {
            if REGEX_STANZA_NUMBER.is_match(chunk) {
                tokens.push(chunk.to_owned());
                continue;
            }

            let mut buffer = String::new();
            for c in chunk.chars() {
                if DETACHED_PUNCTUATION.contains(&c) {
                    if !buffer.is_empty() {
                        tokens.push(std::mem::take(&mut buffer));
                    }
                    tokens.push(c.to_string());
                } else {
                    buffer.push(c);
                }
            }

            if !buffer.is_empty() {
                tokens.push(buffer);
            }
        }

        tokens
    }
}
