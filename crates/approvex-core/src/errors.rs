use thiserror::Error;

/// Result type alias using AxError
pub type Result<T> = std::result::Result<T, AxError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the ApproveX system. Each kind maps to a stable error code that can be
/// used for programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxErrorKind {
    // Input validation
    InvalidInput,
    /// A field path expression is syntactically malformed
    InvalidPath,
    /// Document bytes could not be parsed into a JSON tree
    InvalidDocument,

    // Reference resolution
    /// An approved reference exists but cannot be interpreted as canonical text
    ReferenceCorrupt,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl AxErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AxErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            AxErrorKind::InvalidPath => "ERR_INVALID_PATH",
            AxErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            AxErrorKind::ReferenceCorrupt => "ERR_REFERENCE_CORRUPT",
            AxErrorKind::Io => "ERR_IO",
            AxErrorKind::Serialization => "ERR_SERIALIZATION",
            AxErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct AxError {
    kind: AxErrorKind,
    op: Option<String>,
    name: Option<String>,
    doc_id: Option<String>,
    path: Option<String>,
    message: String,
}

impl AxError {
    /// Create a new error with the specified kind
    pub fn new(kind: AxErrorKind) -> Self {
        Self {
            kind,
            op: None,
            name: None,
            doc_id: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add comparison name context
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add document ID context
    pub fn with_doc_id(mut self, id: impl Into<String>) -> Self {
        self.doc_id = Some(id.into());
        self
    }

    /// Add field path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> AxErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the comparison name context, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the document ID context, if any
    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    /// Get the field path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.name {
            write!(f, " (name: {})", name)?;
        }
        if let Some(doc_id) = &self.doc_id {
            write!(f, " (doc_id: {})", doc_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for AxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Syntax failures raised while parsing field path expressions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path expression is empty or whitespace-only
    #[error("path expression is empty")]
    Empty,

    /// A dot-separated segment is empty (leading, trailing, or doubled dot)
    #[error("path expression '{expr}' has an empty segment at position {index}")]
    EmptySegment { expr: String, index: usize },
}

/// Conversion from PathError to AxError
impl From<PathError> for AxError {
    fn from(err: PathError) -> Self {
        let base = AxError::new(AxErrorKind::InvalidPath).with_message(err.to_string());
        match err {
            PathError::Empty => base,
            PathError::EmptySegment { expr, .. } => base.with_path(expr),
        }
    }
}

/// Conversion from serde_json::Error to AxError
impl From<serde_json::Error> for AxError {
    fn from(err: serde_json::Error) -> Self {
        AxError::new(AxErrorKind::Serialization).with_message(err.to_string())
    }
}
