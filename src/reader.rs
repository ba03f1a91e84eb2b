// 注釈済みテキストの読み出し

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::{
    annotation::{
        syllabification::SYLLABLE_SEPARATOR,
        tagged::{TaggedCorpus, TaggedWord},
        tei::render_tei,
    },
    corpus::{CorpusSource, PoemFiles},
    poem::Poem,
};

fn load(source: &mut dyn CorpusSource, path: &str) -> Result<TaggedCorpus> {
    let text = source
        .read_text(path)
        .with_context(|| format!("Failed to load annotated text {}", path))?;
    let corpus = TaggedCorpus::parse(&text);
    debug!("{} words read from {}", corpus.tagged_words().count(), path);
    Ok(corpus)
}

// 注釈の済んでいない語（空のタグ）は数えない
fn annotated_tags(corpus: &TaggedCorpus) -> impl Iterator<Item = &str> {
    corpus
        .tagged_words()
        .filter_map(TaggedWord::tag)
        .filter(|tag| !tag.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LemmatizationVariant {
    // lemmatized.txt
    Annotated,
    // tei_lemmatized_complete.txt
    Tei,
    // test_lemmatized_complete.txt
    Test,
}

impl LemmatizationVariant {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "annotated" => Ok(Self::Annotated),
            "tei" => Ok(Self::Tei),
            "test" => Ok(Self::Test),
            name => bail!("Unknown lemmatization variant: {}", name),
        }
    }

    fn path(&self, files: &PoemFiles) -> String {
        match self {
            Self::Annotated => files.lemmatized(),
            Self::Tei => files.tei_lemmatized("complete.txt"),
            Self::Test => files.test_lemmatized("complete.txt"),
        }
    }
}

pub struct LemmatizationReader {
    corpus: TaggedCorpus,
}

impl LemmatizationReader {
    pub fn open(source: &mut dyn CorpusSource, poem: Poem, variant: LemmatizationVariant) -> Result<Self> {
        let path = variant.path(&PoemFiles::of(poem));
        Ok(Self {
            corpus: load(source, &path)?,
        })
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            corpus: TaggedCorpus::parse(text),
        }
    }

    pub fn corpus(&self) -> &TaggedCorpus {
        &self.corpus
    }

    pub fn lemmas_set(&self) -> BTreeSet<String> {
        annotated_tags(&self.corpus).map(|tag| tag.to_owned()).collect()
    }

    pub fn sorted_lemmas(&self) -> Vec<String> {
        self.lemmas_set().into_iter().collect()
    }

    // Word forms annotated with `lemma`, in text order.
    pub fn present_forms(&self, lemma: &str) -> Vec<String> {
        self.corpus
            .tagged_words()
            .filter(|word| word.tag() == Some(lemma))
            .map(|word| word.form.clone())
            .collect()
    }

    pub fn lemma_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in annotated_tags(&self.corpus) {
            *counts.entry(tag.to_owned()).or_insert(0) += 1;
        }
        counts
    }

    pub fn tei_text(&self) -> String {
        render_tei(self.corpus.tagged_words())
    }
}

pub struct PosTaggedReader {
    corpus: TaggedCorpus,
}

impl PosTaggedReader {
    pub fn open(source: &mut dyn CorpusSource, poem: Poem) -> Result<Self> {
        Ok(Self {
            corpus: load(source, &PoemFiles::of(poem).pos_tagged())?,
        })
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            corpus: TaggedCorpus::parse(text),
        }
    }

    pub fn pos_tagset(&self) -> BTreeSet<String> {
        annotated_tags(&self.corpus).map(|tag| tag.to_owned()).collect()
    }
}

pub struct SyllabifiedReader {
    corpus: TaggedCorpus,
}

impl SyllabifiedReader {
    pub fn open(source: &mut dyn CorpusSource, poem: Poem) -> Result<Self> {
        Ok(Self {
            corpus: load(source, &PoemFiles::of(poem).syllabified())?,
        })
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            corpus: TaggedCorpus::parse(text),
        }
    }

    fn syllables(&self) -> impl Iterator<Item = &str> {
        annotated_tags(&self.corpus)
            .flat_map(|tag| tag.split(SYLLABLE_SEPARATOR))
            .filter(|syllable| !syllable.is_empty())
    }

    pub fn syllable_set(&self) -> BTreeSet<String> {
        self.syllables().map(|syllable| syllable.to_owned()).collect()
    }

    // 音節ごとの出現回数
    pub fn syllable_counter(&self) -> BTreeMap<String, usize> {
        let mut counter = BTreeMap::new();
        for syllable in self.syllables() {
            *counter.entry(syllable.to_owned()).or_insert(0) += 1;
        }
        counter
    }
}
