//! Corpus loading
//!
//! Discovers source files under a set of directories and parses them into
//! a `Corpus`. Any directory that cannot be walked, and any file that cannot
//! be read or parsed, fails the whole load.

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use walkdir::{DirEntry, WalkDir};

use crate::config::LoaderConfig;
use crate::features::parsing::domain::{Corpus, SourceUnit};
use crate::features::parsing::ports::SyntaxProvider;
use crate::shared::models::{BucketError, Result};

/// Loads a corpus with a given syntax provider
pub struct CorpusLoader<P: SyntaxProvider> {
    provider: P,
    config: LoaderConfig,
}

impl<P: SyntaxProvider> CorpusLoader<P> {
    pub fn new(provider: P, config: LoaderConfig) -> Self {
        Self { provider, config }
    }

    /// Discover and parse every source file beneath `dirs`
    pub fn load<D: AsRef<Path>>(&self, dirs: &[D]) -> Result<Corpus> {
        let files = self.discover_files(dirs)?;
        tracing::debug!("Discovered {} {} files", files.len(), self.provider.language_name());

        let units = self.parse_files(&files)?;
        let corpus = Corpus::from_units(units);
        tracing::info!(
            "Loaded corpus: {} units, {} functions",
            corpus.len(),
            corpus.function_count()
        );
        Ok(corpus)
    }

    /// Parse in-memory `(path, source)` pairs into a corpus
    pub fn load_sources(&self, files: &[(String, String)]) -> Result<Corpus> {
        let units = files
            .iter()
            .enumerate()
            .map(|(id, (path, source))| self.provider.parse(source, path, id as u32))
            .collect::<Result<Vec<_>>>()?;
        Ok(Corpus::from_units(units))
    }

    /// Recursively collect matching files, sorted within each directory.
    ///
    /// Files reachable from several of `dirs` are kept once, at their
    /// first position.
    pub fn discover_files<D: AsRef<Path>>(&self, dirs: &[D]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut seen = FxHashSet::default();

        for dir in dirs {
            let root = absolute(dir.as_ref())?;

            for entry in WalkDir::new(&root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| self.keep_entry(e))
            {
                let entry = entry?;
                if entry.file_type().is_file() && self.wants_file(entry.path()) {
                    let path = entry.into_path();
                    if seen.insert(path.clone()) {
                        files.push(path);
                    }
                }
            }
        }

        Ok(files)
    }

    /// Unit ids follow discovery order, so results do not depend on scheduling
    fn parse_files(&self, files: &[PathBuf]) -> Result<Vec<SourceUnit>> {
        let jobs: Vec<(u32, &PathBuf)> = files
            .iter()
            .enumerate()
            .map(|(id, path)| (id as u32, path))
            .collect();

        #[cfg(feature = "parallel")]
        let units = jobs
            .par_iter()
            .map(|(id, path)| self.parse_file(*id, path))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let units = jobs
            .iter()
            .map(|(id, path)| self.parse_file(*id, path))
            .collect::<Result<Vec<_>>>()?;

        Ok(units)
    }

    fn parse_file(&self, unit_id: u32, path: &Path) -> Result<SourceUnit> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BucketError::io(format!("Failed to read source: {}", e))
                .with_file(path_str.clone())
                .with_source(e)
        })?;
        self.provider.parse(&content, &path_str, unit_id)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if self.config.skip_hidden && name.starts_with('.') {
            return false;
        }
        !self.config.skip_dirs.iter().any(|skip| skip.as_str() == name)
    }

    fn wants_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.config.extensions.iter().any(|e| e == ext) && self.provider.supports_extension(ext)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
