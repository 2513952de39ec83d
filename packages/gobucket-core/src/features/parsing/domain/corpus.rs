//! Parsed source units and the corpus that owns them

use super::function::FunctionDefinition;
use crate::shared::models::Span;

/// Syntax problem reported by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub message: String,
    pub span: Span,
}

/// One parsed source file
#[derive(Debug)]
pub struct SourceUnit {
    /// Position of this unit in its corpus (stamped into every `StmtId`)
    pub id: u32,
    pub path: String,
    pub package: Option<String>,
    /// Top-level function and method declarations, in source order
    pub functions: Vec<FunctionDefinition>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl SourceUnit {
    pub fn new(id: u32, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            package: None,
            functions: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_functions(mut self, functions: Vec<FunctionDefinition>) -> Self {
        self.functions = functions;
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// All source units under consideration for function lookup
#[derive(Debug, Default)]
pub struct Corpus {
    units: Vec<SourceUnit>,
}

impl Corpus {
    pub fn from_units(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Every function definition, unit by unit in source order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.units.iter().flat_map(|unit| unit.functions.iter())
    }

    pub fn function_count(&self) -> usize {
        self.units.iter().map(|unit| unit.functions.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
