use std::{fs, path::PathBuf};

use anyhow::Result;

use eddas::{
    annotation::{
        lemmatization::{self, LemmatizationPreprocess},
        pos, syllabification,
    },
    corpus::{CorpusWriter, DirectoryCorpus, PoemFiles, DEFAULT_SOURCE_FILE},
    html,
    poem::Poem,
    reader::{LemmatizationReader, LemmatizationVariant, PosTaggedReader, SyllabifiedReader},
    segmentation::segment,
    tokenizer::OldNorseWordTokenizer,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("corpus")
}

fn fixture_corpus() -> Result<DirectoryCorpus> {
    DirectoryCorpus::new(fixture_dir())
}

fn word(syllables: &[&str]) -> Vec<String> {
    syllables.iter().map(|s| s.to_string()).collect()
}

#[test]
fn lemmatization_preprocess_writes_test_file() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());

    let path = lemmatization::preprocess_poem(
        &mut source,
        &writer,
        &OldNorseWordTokenizer,
        Poem::Voluspa,
        DEFAULT_SOURCE_FILE,
        LemmatizationPreprocess::Test,
    )?;

    assert_eq!(
        path,
        out.path()
            .join("Sæmundar-Edda/Völuspá/txt_files/lemmatization/test_lemmatized_complete.txt")
    );

    let text = fs::read_to_string(&path)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 27);
    assert_eq!(lines[0], "1/");
    assert_eq!(lines[1], "Hljóðs/ bið/ ek/ allar/");
    assert_eq!(lines[5], "viltu/ at/ ek/ ,/ Valföðr/ ,/");
    assert_eq!(lines[9], "2/");
    assert_eq!(lines[18], "3/");
    Ok(())
}

#[test]
fn scansion_and_tei_variants_write_their_files() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());
    let files = PoemFiles::of(Poem::Voluspa);

    for variant in [LemmatizationPreprocess::Scansion, LemmatizationPreprocess::TeiOnlyPoem] {
        lemmatization::preprocess_poem(
            &mut source,
            &writer,
            &OldNorseWordTokenizer,
            Poem::Voluspa,
            DEFAULT_SOURCE_FILE,
            variant,
        )?;
    }

    let scansion = fs::read_to_string(out.path().join(files.test_scansion(DEFAULT_SOURCE_FILE)))?;
    assert!(scansion.lines().all(|line| line.ends_with(" VERSE_TYPE/")));

    let tei = fs::read_to_string(out.path().join(files.tei_lemmatized(DEFAULT_SOURCE_FILE)))?;
    assert!(tei.lines().all(|line| line.ends_with(" LINE/")));
    assert_eq!(tei.lines().next(), Some("1/ LINE/"));
    Ok(())
}

#[test]
fn pos_preprocess_writes_into_pos_directory() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());

    let path = pos::preprocess_poem(
        &mut source,
        &writer,
        &OldNorseWordTokenizer,
        Poem::Voluspa,
        DEFAULT_SOURCE_FILE,
    )?;

    assert!(path.ends_with("pos/test_pos_tagged_complete.txt"));
    assert!(fs::read_to_string(path)?.starts_with("1/\nHljóðs/ bið/ ek/ allar/\nhelgar/ kindir/ ,/"));
    Ok(())
}

#[test]
fn presyllabified_poem_reads_back_stanza_by_stanza() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());

    syllabification::presyllabify_poem(&mut source, &writer, Poem::Voluspa, DEFAULT_SOURCE_FILE)?;

    let mut written = DirectoryCorpus::new(out.path())?;
    let paragraphs = syllabification::read_annotated_file(
        &mut written,
        &PoemFiles::of(Poem::Voluspa).test_pre_syllabified(DEFAULT_SOURCE_FILE),
    )?;

    assert_eq!(paragraphs.len(), 3);
    assert!(paragraphs.iter().all(|paragraph| paragraph.len() == 8));
    assert_eq!(
        paragraphs[0][4],
        vec![word(&["viltu"]), word(&["at"]), word(&["ek"]), word(&["Valföðr"])]
    );
    assert_eq!(paragraphs[2][7], vec![word(&["en"]), word(&["gras"]), word(&["hvergi"])]);
    Ok(())
}

#[test]
fn reads_syllable_annotation() -> Result<()> {
    let mut source = fixture_corpus()?;
    let paragraphs = syllabification::read_annotated_file(
        &mut source,
        &PoemFiles::of(Poem::Voluspa).syllabified_annotated(),
    )?;

    assert_eq!(paragraphs.len(), 2);
    assert_eq!(
        paragraphs[0][0],
        vec![word(&["Hljóðs"]), word(&["bið"]), word(&["ek"]), word(&["al", "lar"])]
    );
    assert_eq!(paragraphs[0][1][1], word(&["kin", "dir"]));
    assert_eq!(paragraphs[0][3][1], word(&["Heim", "dal", "lar"]));
    assert_eq!(paragraphs[1][1][2], word(&["bor", "na"]));
    Ok(())
}

#[test]
fn syllabified_poem_feeds_syllable_reader() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());

    syllabification::transform_poem(&mut source, &writer, Poem::Voluspa)?;

    let mut written = DirectoryCorpus::new(out.path())?;
    let reader = SyllabifiedReader::open(&mut written, Poem::Voluspa)?;

    let syllables = reader.syllable_set();
    assert!(syllables.contains("dal"));
    assert!(syllables.contains("Hljóðs"));
    assert!(!syllables.iter().any(|s| s.contains(',') || s.contains(';')));

    let counter = reader.syllable_counter();
    assert_eq!(counter["lar"], 2);
    assert_eq!(counter["na"], 2);
    Ok(())
}

#[test]
fn lemmatization_reader_accessors() -> Result<()> {
    let mut source = fixture_corpus()?;
    let reader = LemmatizationReader::open(&mut source, Poem::Voluspa, LemmatizationVariant::Annotated)?;

    let lemmas = reader.sorted_lemmas();
    assert_eq!(lemmas.first().map(String::as_str), Some("allr"));
    assert!(lemmas.contains(&"heimdallr".to_owned()));
    assert_eq!(reader.present_forms("ek"), vec!["ek", "Ek"]);

    let tei = reader.tei_text();
    assert_eq!(tei.matches("<lg>").count(), 2);
    assert_eq!(tei.matches("<l>").count(), 6);
    assert!(tei.contains("lemma=\"heimdallr\""));
    Ok(())
}

#[test]
fn pos_reader_collects_tagset() -> Result<()> {
    let mut source = fixture_corpus()?;
    let reader = PosTaggedReader::open(&mut source, Poem::Voluspa)?;

    let tags: Vec<_> = reader.pos_tagset().into_iter().collect();
    assert_eq!(tags, vec!["a", "n", "pro", "v"]);
    Ok(())
}

#[test]
fn missing_annotation_is_an_error() -> Result<()> {
    let mut source = fixture_corpus()?;
    assert!(LemmatizationReader::open(&mut source, Poem::Havamal, LemmatizationVariant::Annotated).is_err());
    Ok(())
}

#[test]
fn html_source_is_converted_to_text() -> Result<()> {
    let mut source = fixture_corpus()?;
    let out = tempfile::tempdir()?;
    let writer = CorpusWriter::new(out.path());

    let path = html::convert_poem(&mut source, &writer, Poem::Havamal)?;
    let text = fs::read_to_string(path.expect("Hávamál has complete.html"))?;

    assert!(text.contains("Gáttir allar,"));
    assert!(!text.contains("Hávamál"));

    let stanzas = segment(&text);
    assert_eq!(stanzas.len(), 2);
    assert_eq!(stanzas[0].verses().count(), 3);

    assert!(html::convert_poem(&mut source, &writer, Poem::Voluspa)?.is_none());
    Ok(())
}
