/*
 * gobucket - Go statement classification
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, BucketError)
 * - features/    : Vertical slices (parsing → locator → classification)
 * - usecases/    : Whole-list pipeline (validate → locate → classify)
 * - config/      : YAML tool configuration
 *
 * Parsing runs in parallel per file; everything after loading is a pure,
 * single-threaded pass over borrowed statement nodes.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Usecase layer (ParseFunctionsUseCase)
pub mod usecases;

/// Configuration system
pub mod config;

/// Tracing subscriber setup
pub mod logging;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use features::classification::{
    classify, classify_function, extract_assignments, AssignmentExtraction, Classification,
    ClassificationReport,
};
pub use features::locator::{validate_names, FunctionLocator, FunctionLookup};
pub use features::parsing::{
    Corpus, CorpusLoader, FunctionDefinition, GoSyntaxProvider, SourceUnit, StatementKind,
    StatementNode, StmtId, SyntaxProvider,
};
pub use shared::models::{BucketError, ErrorKind, Result};
pub use usecases::{FunctionStatements, ParseFunctionsUseCase, ParsedFunction};
