use std::io::{self, Read};

use anyhow::{Context, Result};
use zip::ZipArchive;

use crate::corpus::CorpusSource;

// リポジトリのアーカイブは "<repo>-<branch>/" 以下に全体が入っていることがある
pub struct ZipCorpus<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + io::Seek> ZipCorpus<R> {
    pub fn new(reader: R) -> Result<ZipCorpus<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open corpus archive")?;
        Ok(ZipCorpus { archive })
    }

    fn resolve(&self, path: &str) -> Option<String> {
        let suffix = format!("/{}", path);
        self.archive
            .file_names()
            .find(|name| *name == path || name.ends_with(&suffix))
            .map(|name| name.to_owned())
    }
}

impl<R: Read + io::Seek> CorpusSource for ZipCorpus<R> {
    fn exists(&mut self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    fn read_bytes(&mut self, path: &str) -> Result<Vec<u8>> {
        let name = self
            .resolve(path)
            .with_context(|| format!("{} is not found in corpus archive", path))?;

        let mut file = self
            .archive
            .by_name(&name)
            .with_context(|| format!("Failed to open {}", name))?;

        let mut data = Vec::<u8>::new();
        file.read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", name))?;

        Ok(data)
    }
}
