// "語形/タグ" 形式のテキストの読み込み
//
// 段落は空行、文は改行、語は空白で区切られる

use serde::Serialize;

use crate::{annotation::TAG_SEPARATOR, utility::normalize_line_endings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedWord {
    pub form: String,
    pub tag: Option<String>,
}

impl TaggedWord {
    // 区切りは最後の '/'
    pub fn parse(token: &str) -> Self {
        match token.rsplit_once(TAG_SEPARATOR) {
            Some((form, tag)) => TaggedWord {
                form: form.to_owned(),
                tag: Some(tag.to_owned()),
            },
            None => TaggedWord {
                form: token.to_owned(),
                tag: None,
            },
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

pub type TaggedSentence = Vec<TaggedWord>;
pub type TaggedParagraph = Vec<TaggedSentence>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaggedCorpus {
    paragraphs: Vec<TaggedParagraph>,
}

impl TaggedCorpus {
    pub fn parse(text: &str) -> Self {
        let text = normalize_line_endings(text);

        let mut paragraphs = Vec::new();
        let mut paragraph: TaggedParagraph = Vec::new();

        for line in text.split('\n') {
            if line.trim().is_empty() {
                if !paragraph.is_empty() {
                    paragraphs.push(std::mem::take(&mut paragraph));
                }
                continue;
            }

            paragraph.push(line.split_whitespace().map(TaggedWord::parse).collect());
        }

        if !paragraph.is_empty() {
            paragraphs.push(paragraph);
        }

        TaggedCorpus { paragraphs }
    }

    pub fn tagged_paras(&self) -> &[TaggedParagraph] {
        &self.paragraphs
    }

    pub fn tagged_sents(&self) -> impl Iterator<Item = &TaggedSentence> {
        self.paragraphs.iter().flatten()
    }

    pub fn tagged_words(&self) -> impl Iterator<Item = &TaggedWord> {
        self.tagged_sents().flatten()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tagged_words().map(|word| word.form.as_str())
    }
}
