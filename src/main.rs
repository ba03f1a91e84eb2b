use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use eddas::{
    annotation::{
        lemmatization::{self, LemmatizationPreprocess},
        pos, syllabification,
    },
    corpus::{
        open_corpus, resolve_corpus_path, CorpusSource, CorpusWriter, PoemFiles,
        DEFAULT_SOURCE_FILE,
    },
    html, inventory,
    poem::Poem,
    reader::{LemmatizationReader, LemmatizationVariant, PosTaggedReader, SyllabifiedReader},
    tokenizer::OldNorseWordTokenizer,
};

const USAGE: &str = "Usage: eddas COMMAND [options] [POEM...]

Commands:
    html-to-txt          complete.html -> complete.txt
    lemmatize            text awaiting lemma annotation
    pos                  text awaiting POS annotation
    presyllabify         text awaiting syllable annotation
    syllabify            syllable annotation -> syllabified.txt
    transform SRC DST    syllable annotation file -> tagged syllable file
    tei POEM             lemmatized text as TEI
    lemmas POEM          lemma inventory (CSV)
    forms POEM LEMMA     forms of a lemma
    pos-tags POEM        POS tagset (CSV)
    syllables POEM       syllable counts (CSV)
    export-json POEM     parsed syllable annotation (JSON)";

struct Args {
    command: String,
    operands: Vec<String>,
    corpus_path: PathBuf,
    output_path: Option<String>,
    source_file: String,
    preprocess: LemmatizationPreprocess,
    variant: LemmatizationVariant,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("c", "corpus", "corpus directory or zip archive", "PATH");
    opts.optopt("o", "output", "output directory", "PATH");
    opts.optopt("s", "source", "source file in txt_files", "FILE");
    opts.optopt("", "variant", "lemmatized file to read: annotated, tei, test", "NAME");
    opts.optflag("", "tei", "lemmatize: one unit per line, closed by LINE");
    opts.optflag("", "tei-poem", "lemmatize: stanzas, every line closed by LINE");
    opts.optflag("", "scansion", "lemmatize: stanzas, every line closed by VERSE_TYPE");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") || matches.free.is_empty() {
        println!("{}", opts.usage(USAGE));
        std::process::exit(0);
    }

    let preprocess = match (
        matches.opt_present("tei"),
        matches.opt_present("tei-poem"),
        matches.opt_present("scansion"),
    ) {
        (false, false, false) => LemmatizationPreprocess::Test,
        (true, false, false) => LemmatizationPreprocess::Tei,
        (false, true, false) => LemmatizationPreprocess::TeiOnlyPoem,
        (false, false, true) => LemmatizationPreprocess::Scansion,
        _ => bail!("--tei, --tei-poem and --scansion are exclusive"),
    };

    let variant = match matches.opt_str("variant") {
        Some(name) => LemmatizationVariant::of(&name)?,
        None => LemmatizationVariant::Annotated,
    };

    let corpus_path = resolve_corpus_path(matches.opt_str("c").as_deref())?;
    let output_path = matches.opt_str("o");
    let source_file = matches
        .opt_str("s")
        .unwrap_or_else(|| DEFAULT_SOURCE_FILE.to_owned());

    let mut free = matches.free.into_iter();
    let command = free.next().context("command is required")?;

    Ok(Args {
        command,
        operands: free.collect(),
        corpus_path,
        output_path,
        source_file,
        preprocess,
        variant,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = get_args()?;

    let mut source = open_corpus(&args.corpus_path)
        .with_context(|| format!("Failed to open corpus: {}", args.corpus_path.display()))?;
    info!("using corpus at {}", args.corpus_path.display());

    match args.command.as_str() {
        "html-to-txt" | "lemmatize" | "pos" | "presyllabify" | "syllabify" => {
            let writer = create_writer(&args)?;
            run_for_poems(&args, source.as_mut(), &writer)?;
        }

        "transform" => {
            ensure!(args.operands.len() == 2, "transform requires SRC and DST");
            let writer = create_writer(&args)?;
            syllabification::transform_file(
                source.as_mut(),
                &writer,
                &args.operands[0],
                &args.operands[1],
            )?;
        }

        "tei" => {
            let poem = single_poem(&args.operands)?;
            let reader = LemmatizationReader::open(source.as_mut(), poem, args.variant)?;
            println!("{}", reader.tei_text());
        }

        "lemmas" => {
            let poem = single_poem(&args.operands)?;
            let reader = LemmatizationReader::open(source.as_mut(), poem, args.variant)?;
            print!("{}", inventory::lemma_inventory_csv(&reader)?);
        }

        "forms" => {
            ensure!(args.operands.len() == 2, "forms requires POEM and LEMMA");
            let poem: Poem = args.operands[0].parse()?;
            let reader = LemmatizationReader::open(source.as_mut(), poem, args.variant)?;
            for form in reader.present_forms(&args.operands[1]) {
                println!("{}", form);
            }
        }

        "pos-tags" => {
            let poem = single_poem(&args.operands)?;
            let reader = PosTaggedReader::open(source.as_mut(), poem)?;
            print!("{}", inventory::pos_tagset_csv(&reader)?);
        }

        "syllables" => {
            let poem = single_poem(&args.operands)?;
            let reader = SyllabifiedReader::open(source.as_mut(), poem)?;
            print!("{}", inventory::syllable_counts_csv(&reader)?);
        }

        "export-json" => {
            let poem = single_poem(&args.operands)?;
            let paragraphs = syllabification::read_annotated_file(
                source.as_mut(),
                &PoemFiles::of(poem).syllabified_annotated(),
            )?;
            println!("{}", inventory::paragraphs_json(&paragraphs)?);
        }

        command => bail!("Unknown command: {}\n\n{}", command, USAGE),
    }

    Ok(())
}

// zip のコーパスには書き込めない
fn create_writer(args: &Args) -> Result<CorpusWriter> {
    if let Some(output_path) = &args.output_path {
        return Ok(CorpusWriter::new(output_path));
    }

    ensure!(
        args.corpus_path.is_dir(),
        "--output is required when the corpus is an archive"
    );
    Ok(CorpusWriter::new(&args.corpus_path))
}

fn single_poem(operands: &[String]) -> Result<Poem> {
    ensure!(operands.len() == 1, "exactly one poem is required");
    operands[0].parse()
}

fn run_for_poems(args: &Args, source: &mut dyn CorpusSource, writer: &CorpusWriter) -> Result<()> {
    // 指定がなければ全部。その場合は元の文書がないものを飛ばす
    let explicit = !args.operands.is_empty();
    let poems = if explicit {
        args.operands
            .iter()
            .map(|title| title.parse())
            .collect::<Result<Vec<Poem>>>()?
    } else {
        Poem::ALL.to_vec()
    };

    let tokenizer = OldNorseWordTokenizer;

    let pb = create_progress_bar(poems.len() as u64);
    for poem in poems.into_iter().progress_with(pb) {
        let files = PoemFiles::of(poem);
        let required = match args.command.as_str() {
            "html-to-txt" => files.html_source(),
            "syllabify" => files.syllabified_annotated(),
            _ => files.source(&args.source_file),
        };

        if !source.exists(&required) {
            ensure!(!explicit, "{} is not found", required);
            warn!("{} is not found, skipped", required);
            continue;
        }

        match args.command.as_str() {
            "html-to-txt" => {
                html::convert_poem(source, writer, poem)?;
            }
            "lemmatize" => {
                lemmatization::preprocess_poem(
                    source,
                    writer,
                    &tokenizer,
                    poem,
                    &args.source_file,
                    args.preprocess,
                )?;
            }
            "pos" => {
                pos::preprocess_poem(source, writer, &tokenizer, poem, &args.source_file)?;
            }
            "presyllabify" => {
                syllabification::presyllabify_poem(source, writer, poem, &args.source_file)?;
            }
            "syllabify" => {
                syllabification::transform_poem(source, writer, poem)?;
            }
            command => bail!("Unknown command: {}", command),
        }
    }

    info!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
