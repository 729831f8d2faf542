use std::path::PathBuf;
use thiserror::Error;

/// Enhanced error with file location context
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    pub snippet: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            file_path: None,
            snippet: None,
        }
    }

    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = Some(snippet);
        self
    }
}

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Package manager error: {0}")]
    PackageManager(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    #[allow(dead_code)] // Future error handling
    Config(String),

    #[error("setup aborted, existing project left untouched")]
    Aborted,

    #[error("{0}")]
    #[allow(dead_code)] // Generic error variant for future use
    Other(String),
}

impl KataError {
    /// Create a simple manifest error without context
    pub fn manifest(message: String) -> Self {
        Self::Manifest {
            message,
            context: None,
        }
    }

    /// Create a manifest error with context
    pub fn manifest_with_context(message: String, context: ErrorContext) -> Self {
        Self::Manifest {
            message,
            context: Some(context),
        }
    }

    /// Create a package manager error
    pub fn package_manager(message: String) -> Self {
        Self::PackageManager(message)
    }

    /// Format error with enhanced context display
    pub fn format_detailed(&self) -> String {
        match self {
            KataError::Manifest { message, context } => {
                self.format_error_with_context("Manifest Error", message, context)
            }
            _ => self.to_string(),
        }
    }

    fn format_error_with_context(
        &self,
        error_type: &str,
        message: &str,
        context: &Option<ErrorContext>,
    ) -> String {
        let mut output = format!("❌ {}: {}", error_type, message);

        if let Some(ctx) = context {
            if let Some(ref file_path) = ctx.file_path {
                output.push_str(&format!("\n📁 File: {}", file_path.display()));
            }

            if let Some(ref snippet) = ctx.snippet {
                output.push_str(&format!("\n📝 Content:\n{}", snippet));
            }
        }

        output
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

impl From<serde_json::Error> for KataError {
    fn from(err: serde_json::Error) -> Self {
        KataError::manifest(format!("JSON error: {}", err))
    }
}

impl From<dialoguer::Error> for KataError {
    fn from(err: dialoguer::Error) -> Self {
        KataError::Prompt(err.to_string())
    }
}

impl From<anyhow::Error> for KataError {
    fn from(err: anyhow::Error) -> Self {
        KataError::package_manager(err.to_string())
    }
}
