// 語彙・音節などの一覧を CSV / JSON で書き出す

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    annotation::syllabification::Paragraph,
    reader::{LemmatizationReader, PosTaggedReader, SyllabifiedReader},
};

#[derive(Debug, Serialize)]
struct CountRecord<'a> {
    key: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FormRecord<'a> {
    lemma: &'a str,
    form: &'a str,
    count: usize,
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().context("Failed to flush CSV")?;
    String::from_utf8(bytes).context("CSV is not UTF-8")
}

fn counts_csv(key_name: &str, counts: &BTreeMap<String, usize>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record([key_name, "count"])?;
    for (key, &count) in counts {
        writer.serialize(CountRecord { key, count })?;
    }
    into_string(writer)
}

pub fn lemma_inventory_csv(reader: &LemmatizationReader) -> Result<String> {
    counts_csv("lemma", &reader.lemma_counts())
}

// 見出し語ごとの語形と出現回数
pub fn lemma_forms_csv(reader: &LemmatizationReader) -> Result<String> {
    let mut forms = BTreeMap::<(String, String), usize>::new();
    for word in reader.corpus().tagged_words() {
        if let Some(lemma) = word.tag().filter(|tag| !tag.is_empty()) {
            *forms.entry((lemma.to_owned(), word.form.clone())).or_insert(0) += 1;
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for ((lemma, form), &count) in &forms {
        writer.serialize(FormRecord { lemma, form, count })?;
    }
    into_string(writer)
}

fn set_csv(column: &str, values: &BTreeSet<String>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([column])?;
    for value in values {
        writer.write_record([value])?;
    }
    into_string(writer)
}

pub fn pos_tagset_csv(reader: &PosTaggedReader) -> Result<String> {
    set_csv("tag", &reader.pos_tagset())
}

pub fn syllable_counts_csv(reader: &SyllabifiedReader) -> Result<String> {
    counts_csv("syllable", &reader.syllable_counter())
}

pub fn paragraphs_json(paragraphs: &[Paragraph]) -> Result<String> {
    serde_json::to_string_pretty(paragraphs).context("Failed to serialize paragraphs")
}
