// Menota 方式の TEI
//
//   <lg>     詩節
//   <l>      詩行
//   <w>      語 (facs, dipl, norm の 3 層。いずれも同じ語形を入れる)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    annotation::{tagged::TaggedWord, LINE_TOKEN},
    utility::is_fake_punctuation,
};

pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn render_word(word: &TaggedWord) -> String {
    let form = escape_xml(&word.form);
    let lemma = escape_xml(&word.tag().unwrap_or_default().to_lowercase());
    format!(
        "<w me:msa=\"\" lemma=\"{lemma}\">\n\
         \t<me:facs>{form}</me:facs>\n\
         \t<me:dipl>{form}</me:dipl>\n\
         \t<me:norm>{form}</me:norm>\n\
         </w>"
    )
}

#[derive(Default)]
struct TeiBuilder {
    elements: Vec<String>,
    group_open: bool,
    line_open: bool,
}

impl TeiBuilder {
    fn close_line(&mut self) {
        if self.line_open {
            self.elements.push("</l>".to_owned());
            self.line_open = false;
        }
    }

    fn close_group(&mut self) {
        self.close_line();
        if self.group_open {
            self.elements.push("</lg>".to_owned());
            self.group_open = false;
        }
    }

    // 空の <lg>, <l> は作らない
    fn push_word(&mut self, word: &TaggedWord) {
        if !self.group_open {
            self.elements.push("<lg>".to_owned());
            self.group_open = true;
        }
        if !self.line_open {
            self.elements.push("<l>".to_owned());
            self.line_open = true;
        }
        self.elements.push(render_word(word));
    }

    fn finish(mut self) -> String {
        self.close_group();
        self.elements.join("\n")
    }
}

pub fn render_tei<'a>(words: impl IntoIterator<Item = &'a TaggedWord>) -> String {
    // 詩節番号
    static REGEX_STANZA_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,2}").unwrap());

    let mut builder = TeiBuilder::default();

    for word in words {
        if REGEX_STANZA_NUMBER.is_match(&word.form) {
            builder.close_group();
        } else if is_fake_punctuation(&word.form) {
            continue;
        } else if word.form == LINE_TOKEN {
            builder.close_line();
        } else {
            builder.push_word(word);
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::tagged::TaggedCorpus;

    #[test]
    fn renders_stanzas_and_lines() {
        let corpus = TaggedCorpus::parse("1/ LINE/\nSá/SÁ er/ER LINE/\nflýtr/FLJÓTA ,/ LINE/\n2/ LINE/\nAndvari/ANDVARI LINE/");
        let tei = render_tei(corpus.tagged_words());

        assert_eq!(tei.matches("<lg>").count(), 2);
        assert_eq!(tei.matches("</lg>").count(), 2);
        assert_eq!(tei.matches("<l>").count(), 3);
        assert_eq!(tei.matches("<w ").count(), 4);
        assert!(tei.starts_with("<lg>\n<l>\n<w me:msa=\"\" lemma=\"sá\">\n\t<me:facs>Sá</me:facs>"));
        assert!(tei.ends_with("</w>\n</l>\n</lg>"));
        assert!(!tei.contains("<me:facs>,</me:facs>"));
    }

    #[test]
    fn escapes_markup_characters() {
        let word = TaggedWord::parse("a<b/x&y");
        let tei = render_tei([&word]);
        assert!(tei.contains("lemma=\"x&amp;y\""));
        assert!(tei.contains("<me:norm>a&lt;b</me:norm>"));
    }

    #[test]
    fn untagged_word_has_empty_lemma() {
        let word = TaggedWord::parse("ok");
        assert!(render_tei([&word]).contains("lemma=\"\""));
    }
}
