//! Parse functions use case
//!
//! validate names → locate → classify, one result per requested name.

use crate::features::classification::{classify_function, Classification};
use crate::features::locator::FunctionLocator;
use crate::features::parsing::domain::{Corpus, FunctionDefinition};
use crate::shared::models::{BucketError, Result};

/// A located function together with its classification
#[derive(Debug, Clone)]
pub struct ParsedFunction<'a> {
    pub definition: &'a FunctionDefinition,
    pub classification: Classification<'a>,
}

/// Result for one requested name
#[derive(Debug, Clone)]
pub struct FunctionStatements<'a> {
    pub name: String,
    /// `None` when no function of that name exists
    pub parsed: Option<ParsedFunction<'a>>,
}

impl<'a> FunctionStatements<'a> {
    pub fn is_found(&self) -> bool {
        self.parsed.is_some()
    }

    /// Access the parsed function; a miss is a lookup error
    pub fn require(&self) -> Result<&ParsedFunction<'a>> {
        self.parsed
            .as_ref()
            .ok_or_else(|| BucketError::lookup(format!("function `{}` not found", self.name)))
    }
}

pub struct ParseFunctionsUseCase {
    locator: FunctionLocator,
}

impl ParseFunctionsUseCase {
    pub fn new(locator: FunctionLocator) -> Self {
        Self { locator }
    }

    /// Execute for raw comma-separated name groups
    ///
    /// Fails only when no names remain after validation. Missing functions
    /// are kept as `None` entries in request order.
    pub fn execute<'a, S: AsRef<str>>(
        &self,
        corpus: &'a Corpus,
        groups: &[S],
    ) -> Result<Vec<FunctionStatements<'a>>> {
        let lookups = self.locator.find_functions(corpus, groups)?;

        let results = lookups
            .into_iter()
            .map(|lookup| {
                let parsed = match lookup.definition() {
                    Some(definition) => {
                        if lookup.matches.len() > 1 {
                            tracing::info!(
                                "{} definitions named `{}`; using {}",
                                lookup.matches.len(),
                                lookup.name,
                                definition.file_path
                            );
                        }
                        Some(ParsedFunction {
                            definition,
                            classification: classify_function(definition),
                        })
                    }
                    None => {
                        tracing::warn!("Function `{}` not found", lookup.name);
                        None
                    }
                };
                FunctionStatements {
                    name: lookup.name,
                    parsed,
                }
            })
            .collect();

        Ok(results)
    }
}

impl Default for ParseFunctionsUseCase {
    fn default() -> Self {
        Self::new(FunctionLocator::new())
    }
}
