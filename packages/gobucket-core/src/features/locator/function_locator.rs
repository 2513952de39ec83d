//! Function locator
//!
//! Matching is by exact, case-sensitive name over every top-level function
//! and method of every unit. Receivers are not used to disambiguate.

use super::name_list::validate_names;
use crate::features::parsing::domain::{Corpus, FunctionDefinition};
use crate::shared::models::{BucketError, Result};

/// Outcome of looking up one requested name
#[derive(Debug, Clone)]
pub struct FunctionLookup<'a> {
    pub name: String,
    /// Every matching definition, in corpus order
    pub matches: Vec<&'a FunctionDefinition>,
}

impl<'a> FunctionLookup<'a> {
    /// The definition used for this name: the last match in corpus order
    pub fn definition(&self) -> Option<&'a FunctionDefinition> {
        self.matches.last().copied()
    }

    pub fn is_found(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Like [`definition`](Self::definition), but a miss is a lookup error
    pub fn require(&self) -> Result<&'a FunctionDefinition> {
        self.definition()
            .ok_or_else(|| BucketError::lookup(format!("function `{}` not found", self.name)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FunctionLocator {
    verbose: bool,
}

impl FunctionLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report each match on stderr as it is found
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Find every definition named `name`
    pub fn locate<'a>(&self, corpus: &'a Corpus, name: &str) -> Vec<&'a FunctionDefinition> {
        let mut matches = Vec::new();
        for function in corpus.functions().filter(|f| f.name == name) {
            if self.verbose {
                eprintln!("[+] Found function `{}` in `{}`..", function.name, function.file_path);
            }
            tracing::debug!(
                "Located {} at {}:{}",
                function.qualified_name(),
                function.file_path,
                function.span.start_line
            );
            matches.push(function);
        }
        matches
    }

    /// One lookup per already-validated name, in request order
    pub fn locate_all<'a>(&self, corpus: &'a Corpus, names: &[String]) -> Vec<FunctionLookup<'a>> {
        names
            .iter()
            .map(|name| FunctionLookup {
                name: name.clone(),
                matches: self.locate(corpus, name),
            })
            .collect()
    }

    /// Validate raw comma-separated groups, then look every name up
    pub fn find_functions<'a, S: AsRef<str>>(
        &self,
        corpus: &'a Corpus,
        groups: &[S],
    ) -> Result<Vec<FunctionLookup<'a>>> {
        let names = validate_names(groups)?;
        Ok(self.locate_all(corpus, &names))
    }
}
