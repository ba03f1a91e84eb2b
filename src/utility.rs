use once_cell::sync::Lazy;
use regex::Regex;

static REGEX_LEADING_STANZA_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.").unwrap());
static REGEX_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\-:?;.,]").unwrap());
static REGEX_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

// 単独のトークンになったときに語として扱わない記号
const PUNCTUATION_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '-', '–', '—', '(', ')', '[', ']', '"', '\'', '«', '»', '„', '“',
    '”', '‘', '’', '…', '¿', '¡', '/',
];

// Orthographic simplification used before syllable annotation.
// A text that starts with a stanza number ("12.") keeps its punctuation.
pub fn remove_punctuations(text: &str) -> String {
    let mut res = text.to_owned();
    if !REGEX_LEADING_STANZA_NUMBER.is_match(text) {
        res = REGEX_PUNCTUATION.replace_all(&res, "").into_owned();
    }
    res = res.replace('z', "s");
    res = res.replace('x', "ks");
    REGEX_SPACES.replace_all(&res, " ").into_owned()
}

pub fn is_fake_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| PUNCTUATION_CHARS.contains(&c))
}

// 改行は CR+LF, CR, LF が混在しうる
pub fn normalize_line_endings(text: &str) -> String {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());
    REGEX_NEW_LINE.replace_all(text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_punctuation_from_plain_text() {
        assert_eq!(remove_punctuations("helgar kindir,"), "helgar kindir");
        assert_eq!(remove_punctuations("meiri  ok minni;"), "meiri ok minni");
    }

    #[test]
    fn keeps_punctuation_after_stanza_number() {
        assert_eq!(remove_punctuations("1. Hljóðs bið ek,"), "1. Hljóðs bið ek,");
    }

    #[test]
    fn simplifies_orthography() {
        assert_eq!(remove_punctuations("Ásgarz"), "Ásgars");
        assert_eq!(remove_punctuations("øx"), "øks");
    }

    #[test]
    fn detects_fake_punctuation() {
        assert!(is_fake_punctuation(","));
        assert!(is_fake_punctuation("..."));
        assert!(is_fake_punctuation("«"));
        assert!(!is_fake_punctuation(""));
        assert!(!is_fake_punctuation("ok,"));
    }

    #[test]
    fn normalizes_mixed_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }
}
