//! Serializable classification report

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use super::domain::Classification;
use crate::features::parsing::domain::{FunctionDefinition, StatementKind, StatementNode};
use crate::shared::models::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    /// `go/ast` node type name, absent for unrecognized statements
    pub kind: Option<&'static str>,
    pub line: u32,
    pub text: String,
}

impl StatementEntry {
    fn from_node(node: &StatementNode) -> Self {
        Self {
            kind: node.kind().map(|k| k.go_type_name()),
            line: node.span.start_line,
            text: node.render(),
        }
    }
}

/// Output view of one classified function
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub function: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    pub file: String,
    pub line: u32,
    /// Master listing in current program order
    pub statements: Vec<StatementEntry>,
    /// Bucket texts keyed by kind; every kind is present
    pub buckets: BTreeMap<&'static str, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_assignments: Option<Vec<String>>,
}

impl ClassificationReport {
    pub fn build(function: &FunctionDefinition, classification: &Classification<'_>) -> Self {
        let statements = classification
            .master()
            .iter()
            .map(|node| StatementEntry::from_node(node))
            .collect();

        let buckets: BTreeMap<&'static str, Vec<String>> = classification
            .buckets()
            .map(|(kind, nodes)| {
                let texts = nodes.iter().map(|n| n.render()).collect::<Vec<_>>();
                (kind.as_str(), texts)
            })
            .collect();

        Self {
            function: function.name.clone(),
            receiver: function.receiver.clone(),
            file: function.file_path.clone(),
            line: function.span.start_line,
            statements,
            buckets,
            extracted_assignments: None,
        }
    }

    pub fn with_extracted(mut self, rendered: Vec<String>) -> Self {
        self.extracted_assignments = Some(rendered);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable rendering; empty buckets are omitted
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let name = match &self.receiver {
            Some(receiver) => format!("{}.{}", receiver, self.function),
            None => self.function.clone(),
        };
        let _ = writeln!(out, "func {} ({}:{})", name, self.file, self.line);

        if let Some(extracted) = &self.extracted_assignments {
            let _ = writeln!(out, "  extracted assignments:");
            for text in extracted {
                let _ = writeln!(out, "    {}", text);
            }
        }

        let _ = writeln!(out, "  statements ({}):", self.statements.len());
        for entry in &self.statements {
            let kind = entry.kind.unwrap_or("?");
            let _ = writeln!(out, "    {:>4}  {:<15} {}", entry.line, kind, first_line(&entry.text));
        }

        for kind in StatementKind::ALL {
            match self.buckets.get(kind.as_str()) {
                Some(texts) if !texts.is_empty() => {
                    let _ = writeln!(out, "  {} ({}):", kind.go_type_name(), texts.len());
                    for text in texts {
                        let _ = writeln!(out, "    {}", first_line(text));
                    }
                }
                _ => {}
            }
        }
        out
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::classification::{classify, extract_assignments};
    use crate::features::parsing::domain::StmtId;

    fn function() -> FunctionDefinition {
        FunctionDefinition::new("run", "main.go").with_body(vec![
            StatementNode::new(StmtId::new(0, 0), Some(StatementKind::Assign), "x := 1"),
            StatementNode::new(
                StmtId::new(0, 1),
                Some(StatementKind::If),
                "if x > 0 {\n\treturn\n}",
            ),
        ])
    }

    #[test]
    fn test_report_lists_every_bucket() {
        let function = function();
        let report = ClassificationReport::build(&function, &classify(&function.body));

        assert_eq!(report.buckets.len(), StatementKind::COUNT);
        assert_eq!(report.buckets["assign"], vec!["x := 1"]);
        assert!(report.buckets["select"].is_empty());
        assert_eq!(report.statements[1].kind, Some("IfStmt"));
    }

    #[test]
    fn test_json_includes_extracted_assignments() {
        let function = function();
        let extraction = extract_assignments(classify(&function.body));
        let report = ClassificationReport::build(&function, &extraction.classification)
            .with_extracted(extraction.rendered);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["function"], "run");
        assert_eq!(json["extracted_assignments"][0], "x := 1");
        assert_eq!(json["statements"].as_array().unwrap().len(), 1);
        assert!(json.get("receiver").is_none());
    }

    #[test]
    fn test_text_rendering() {
        let function = function();
        let text = ClassificationReport::build(&function, &classify(&function.body)).render_text();

        assert!(text.starts_with("func run (main.go:0)"));
        assert!(text.contains("AssignStmt (1):"));
        assert!(text.contains("if x > 0 {"));
        assert!(!text.contains("SelectStmt"));
    }
}
