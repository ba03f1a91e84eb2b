// コーパスの配置:
//
//   <root>/Sæmundar-Edda/<title>/txt_files/complete.txt
//   <root>/Sæmundar-Edda/<title>/txt_files/{lemmatization,pos,syllabified,scansion}/...
//
// コーパスの取得そのものは扱わない（ディレクトリか zip が既にあるものとする）

pub mod archive;

use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::{poem::Poem, utility::normalize_line_endings};

pub use self::archive::ZipCorpus;

pub const CORPUS_PATH_ENV: &str = "EDDAS_CORPUS_PATH";
pub const DEFAULT_SOURCE_FILE: &str = "complete.txt";

// Read access to the corpus, addressed by `/`-separated paths relative to its root.
pub trait CorpusSource {
    fn exists(&mut self, path: &str) -> bool;

    fn read_bytes(&mut self, path: &str) -> Result<Vec<u8>>;

    fn read_text(&mut self, path: &str) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        decode_text(&bytes).with_context(|| format!("Failed to decode {}", path))
    }
}

// UTF-8 (BOM 付きも可) のみを受け付ける
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    ensure!(!had_errors, "Invalid UTF-8 sequence");
    Ok(normalize_line_endings(&text))
}

pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure!(root.is_dir(), "Corpus directory not found: {}", root.display());
        Ok(Self { root })
    }
}

impl CorpusSource for DirectoryCorpus {
    fn exists(&mut self, path: &str) -> bool {
        self.root.join(path).is_file()
    }

    fn read_bytes(&mut self, path: &str) -> Result<Vec<u8>> {
        let path = self.root.join(path);
        fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

// ディレクトリか .zip かで開き方を変える
pub fn open_corpus(path: &Path) -> Result<Box<dyn CorpusSource>> {
    ensure!(path.exists(), "File not found: {}", path.display());

    if path.is_dir() {
        debug!("opening corpus directory {}", path.display());
        return Ok(Box::new(DirectoryCorpus::new(path)?));
    }

    debug!("opening corpus archive {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(ZipCorpus::new(file)?))
}

// `-c` > `$EDDAS_CORPUS_PATH` > `~/cltk_data/old_norse/text/old_norse_texts_heimskringla`
pub fn resolve_corpus_path(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(PathBuf::from(path));
    }

    if let Ok(path) = env::var(CORPUS_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().context("Cannot determine home directory")?;
    Ok(home
        .join("cltk_data")
        .join("old_norse")
        .join("text")
        .join("old_norse_texts_heimskringla"))
}

// 生成物の書き出し先
pub struct CorpusWriter {
    root: PathBuf,
}

impl CorpusWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn write(&self, path: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("wrote {}", path.display());

        Ok(path)
    }
}

// Where each annotation file of a poem lives, relative to the corpus root.
pub struct PoemFiles {
    dir: String,
}

impl PoemFiles {
    pub fn of(poem: Poem) -> Self {
        Self {
            dir: poem.txt_files_dir(),
        }
    }

    pub fn source(&self, file_name: &str) -> String {
        format!("{}/{}", self.dir, file_name)
    }

    pub fn html_source(&self) -> String {
        format!("{}/complete.html", self.dir)
    }

    pub fn test_lemmatized(&self, file_name: &str) -> String {
        format!("{}/lemmatization/test_lemmatized_{}", self.dir, file_name)
    }

    pub fn tei_lemmatized(&self, file_name: &str) -> String {
        format!("{}/lemmatization/tei_lemmatized_{}", self.dir, file_name)
    }

    pub fn lemmatized(&self) -> String {
        format!("{}/lemmatization/lemmatized.txt", self.dir)
    }

    pub fn test_scansion(&self, file_name: &str) -> String {
        format!("{}/scansion/test_scansion_{}", self.dir, file_name)
    }

    pub fn test_pos_tagged(&self, file_name: &str) -> String {
        format!("{}/pos/test_pos_tagged_{}", self.dir, file_name)
    }

    pub fn pos_tagged(&self) -> String {
        format!("{}/pos/pos_tagged.txt", self.dir)
    }

    pub fn test_pre_syllabified(&self, file_name: &str) -> String {
        format!("{}/test_pre_syl_{}", self.dir, file_name)
    }

    pub fn syllabified_annotated(&self) -> String {
        format!("{}/syllabified/syllabified_text_complete.txt", self.dir)
    }

    pub fn syllabified(&self) -> String {
        format!("{}/syllabified/syllabified.txt", self.dir)
    }
}
