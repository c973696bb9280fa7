//! Structured error types shared across votechart crates.
//!
//! Rendering itself never fails. These errors cover the fallible edges around
//! it: loading configuration, decoding similarity payloads and writing output.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ChartError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, field names, offending values).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Records the file the error relates to under the `path` key.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display().to_string())
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for votechart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ChartError {
    /// Invalid or unreadable chart configuration.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Similarity payloads that cannot be decoded.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Serialization of chart output.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem and stream failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ChartError {
    /// Wraps a filesystem or stream failure on `path`.
    pub fn io(code: &str, path: &Path, err: &std::io::Error) -> Self {
        ChartError::Io(ErrorInfo::new(code, err.to_string()).with_path(path))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ChartError::Config(info)
            | ChartError::Input(info)
            | ChartError::Serde(info)
            | ChartError::Io(info) => info,
        }
    }

    /// Attaches `path` to the payload, keeping the error family.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            ChartError::Config(info) => ChartError::Config(info.with_path(path)),
            ChartError::Input(info) => ChartError::Input(info.with_path(path)),
            ChartError::Serde(info) => ChartError::Serde(info.with_path(path)),
            ChartError::Io(info) => ChartError::Io(info.with_path(path)),
        }
    }
}
