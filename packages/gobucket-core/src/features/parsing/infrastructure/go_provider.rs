//! Go syntax provider
//!
//! This is where the tree-sitter dependency lives. Function bodies are
//! flattened into their direct statements; nested statements stay inside
//! the text of their enclosing statement.

use tree_sitter::{Node as TSNode, Parser as TSParser, Tree};

use crate::features::parsing::domain::{
    FunctionDefinition, ParseDiagnostic, Signature, SourceUnit, StatementKind, StatementNode,
    StmtId,
};
use crate::features::parsing::ports::SyntaxProvider;
use crate::shared::models::{BucketError, Result, Span};

/// Tree-sitter based Go parser
#[derive(Debug, Clone, Default)]
pub struct GoSyntaxProvider {
    /// Keep units with syntax errors instead of failing the parse
    allow_malformed: bool,
}

impl GoSyntaxProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_malformed(mut self, allow: bool) -> Self {
        self.allow_malformed = allow;
        self
    }

    /// Map a statement node to its kind
    ///
    /// Returns `None` for tree-sitter kinds that are not statements.
    pub fn discover_kind(node: &TSNode) -> Option<StatementKind> {
        if node.is_error() {
            return Some(StatementKind::Malformed);
        }

        let kind = match node.kind() {
            "short_var_declaration" | "assignment_statement" => StatementKind::Assign,
            "expression_statement" => StatementKind::Expression,
            "if_statement" => StatementKind::If,
            "var_declaration" | "const_declaration" | "type_declaration" => {
                StatementKind::Declaration
            }
            "empty_statement" => StatementKind::Empty,
            "labeled_statement" => StatementKind::Labeled,
            "send_statement" => StatementKind::Send,
            "inc_statement" | "dec_statement" => StatementKind::IncDec,
            "go_statement" => StatementKind::ConcurrentLaunch,
            "defer_statement" => StatementKind::Deferred,
            "return_statement" => StatementKind::Return,
            "break_statement" | "continue_statement" | "goto_statement"
            | "fallthrough_statement" => StatementKind::Branch,
            "block" => StatementKind::Block,
            "expression_switch_statement" => StatementKind::Switch,
            "type_switch_statement" => StatementKind::TypeSwitch,
            "communication_case" => StatementKind::CommClause,
            "select_statement" => StatementKind::Select,
            "for_statement" => {
                if has_child_of_kind(node, "range_clause") {
                    StatementKind::Range
                } else {
                    StatementKind::For
                }
            }
            _ => return None,
        };
        Some(kind)
    }

    /// Convert a tree-sitter tree to a source unit
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str, unit_id: u32) -> SourceUnit {
        let root = tree.root_node();
        let mut unit = SourceUnit::new(unit_id, file_path);
        let mut ordinal = 0u32;

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => unit.package = package_name(&child, source),
                "function_declaration" | "method_declaration" => {
                    if let Some(function) =
                        self.extract_function(&child, source, file_path, unit_id, &mut ordinal)
                    {
                        unit.functions.push(function);
                    }
                }
                _ => {}
            }
        }

        collect_diagnostics(&root, &mut unit.diagnostics);
        unit
    }

    /// Extract a function or method declaration
    fn extract_function(
        &self,
        node: &TSNode,
        source: &str,
        file_path: &str,
        unit_id: u32,
        ordinal: &mut u32,
    ) -> Option<FunctionDefinition> {
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default();

        if name.is_empty() {
            return None;
        }

        let parameters = node
            .child_by_field_name("parameters")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_else(|| "()".to_string());
        let mut signature = Signature::new(parameters);
        if let Some(type_params) = node.child_by_field_name("type_parameters") {
            signature = signature.with_type_parameters(node_text(&type_params, source));
        }
        if let Some(result) = node.child_by_field_name("result") {
            signature = signature.with_result(node_text(&result, source));
        }

        let mut function = FunctionDefinition::new(name, file_path)
            .with_signature(signature)
            .with_span(span_of(node));

        if node.kind() == "method_declaration" {
            if let Some(receiver) = node
                .child_by_field_name("receiver")
                .and_then(|r| receiver_type(&r, source))
            {
                function = function.with_receiver(receiver);
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            let mut statements = Vec::new();
            for stmt in body_statements(&body) {
                let id = StmtId::new(unit_id, *ordinal);
                *ordinal += 1;
                statements.push(convert_statement(&stmt, source, id));
            }
            function = function.with_body(statements);
        }

        Some(function)
    }
}

impl SyntaxProvider for GoSyntaxProvider {
    fn parse(&self, source: &str, file_path: &str, unit_id: u32) -> Result<SourceUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| BucketError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| BucketError::parse("Failed to parse source code").with_file(file_path))?;

        let unit = self.convert_tree(&tree, source, file_path, unit_id);

        if !self.allow_malformed {
            if let Some(first) = unit.diagnostics.first() {
                return Err(BucketError::parse(format!(
                    "{} syntax error(s), first: {}",
                    unit.diagnostics.len(),
                    first.message
                ))
                .with_file(file_path)
                .with_line(first.span.start_line));
            }
        }

        Ok(unit)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}

fn convert_statement(node: &TSNode, source: &str, id: StmtId) -> StatementNode {
    StatementNode::new(id, GoSyntaxProvider::discover_kind(node), node_text(node, source))
        .with_raw_kind(node.kind())
        .with_span(span_of(node))
}

/// Direct statements of a block, comments skipped
///
/// Tree-sitter marks recovered `ERROR` nodes as extras too; those are kept
/// so they classify as malformed statements.
fn body_statements<'t>(block: &TSNode<'t>) -> Vec<TSNode<'t>> {
    let mut statements = Vec::new();
    let mut cursor = block.walk();
    for child in block.named_children(&mut cursor) {
        if child.is_extra() && !child.is_error() {
            continue;
        }
        // Newer grammars wrap block contents in a statement_list
        if child.kind() == "statement_list" {
            statements.extend(body_statements(&child));
        } else {
            statements.push(child);
        }
    }
    statements
}

fn receiver_type(receiver: &TSNode, source: &str) -> Option<String> {
    let mut cursor = receiver.walk();
    let found = receiver
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "parameter_declaration")
        .find_map(|child| child.child_by_field_name("type"))
        .map(|type_node| {
            node_text(&type_node, source)
                .trim_matches(|c| c == '*' || c == '(' || c == ')')
                .to_string()
        });
    found.filter(|name| !name.is_empty())
}

fn package_name(clause: &TSNode, source: &str) -> Option<String> {
    let mut cursor = clause.walk();
    let name = clause
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")
        .map(|child| node_text(&child, source).to_string());
    name
}

fn has_child_of_kind(node: &TSNode, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).any(|c| c.kind() == kind);
    found
}

/// Collect syntax errors, descending only into subtrees that contain one
fn collect_diagnostics(node: &TSNode, diagnostics: &mut Vec<ParseDiagnostic>) {
    if node.is_error() {
        diagnostics.push(ParseDiagnostic {
            message: "syntax error".to_string(),
            span: span_of(node),
        });
    } else if node.is_missing() {
        diagnostics.push(ParseDiagnostic {
            message: format!("missing {}", node.kind()),
            span: span_of(node),
        });
    }

    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_diagnostics(&child, diagnostics);
    }
}

fn node_text<'s>(node: &TSNode, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

fn span_of(node: &TSNode) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}
