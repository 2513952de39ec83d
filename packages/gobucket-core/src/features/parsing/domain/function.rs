//! Function definitions found in a source unit

use super::statement::StatementNode;
use crate::shared::models::Span;

/// Parameter/result signature, kept as source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub type_parameters: Option<String>,
    pub parameters: String,
    pub result: Option<String>,
}

impl Signature {
    pub fn new(parameters: impl Into<String>) -> Self {
        Self {
            type_parameters: None,
            parameters: parameters.into(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: impl Into<String>) -> Self {
        self.type_parameters = Some(type_parameters.into());
        self
    }
}

/// A top-level function or method declaration
#[derive(Debug)]
pub struct FunctionDefinition {
    pub name: String,

    /// Receiver type for methods (`*T` and `T` both reported as `T`)
    pub receiver: Option<String>,

    pub signature: Signature,

    /// Direct statements of the body, in source order
    pub body: Vec<StatementNode>,

    /// False for declarations without a body (e.g. assembly stubs)
    pub has_body: bool,

    /// Path of the containing source unit
    pub file_path: String,

    pub span: Span,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            signature: Signature::default(),
            body: Vec::new(),
            has_body: false,
            file_path: file_path.into(),
            span: Span::zero(),
        }
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_body(mut self, body: Vec<StatementNode>) -> Self {
        self.body = body;
        self.has_body = true;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }

    /// `Receiver.name` for methods, `name` otherwise
    pub fn qualified_name(&self) -> String {
        match &self.receiver {
            Some(receiver) => format!("{}.{}", receiver, self.name),
            None => self.name.clone(),
        }
    }
}
