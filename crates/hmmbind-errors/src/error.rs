//! Binding error types.

use serde::Serialize;

use crate::status;

/// Errors raised by bindings when a native call fails.
///
/// Rendering is deferred: an [`Unexpected`](BindingError::Unexpected) error only
/// stores the raw code and resolves its description when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingError {
    /// A native call returned a non-success status the caller did not expect.
    #[error("{function} failed with error {code}: {}", describe(.code))]
    Unexpected {
        /// Raw status code returned by the native call.
        code: i32,
        /// Name of the native function that failed.
        function: String,
    },

    /// A native structure could not be allocated.
    #[error("could not allocate {ctype}")]
    Allocation {
        /// Name of the native type whose allocation failed.
        ctype: String,
    },

    /// Generic failure inside the native library.
    #[error("{message}")]
    Easel { message: String },
}

fn describe(code: &i32) -> &'static str {
    status::lookup(*code)
}

/// Discriminant of a [`BindingError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unexpected,
    Allocation,
    Easel,
}

impl BindingError {
    /// Unexpected non-success `code` returned by the native `function`.
    pub fn unexpected(code: i32, function: impl Into<String>) -> Self {
        Self::Unexpected {
            code,
            function: function.into(),
        }
    }

    /// Allocation failure for the native type `ctype`.
    pub fn allocation(ctype: impl Into<String>) -> Self {
        Self::Allocation {
            ctype: ctype.into(),
        }
    }

    /// Generic native library failure.
    pub fn easel(message: impl Into<String>) -> Self {
        Self::Easel {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unexpected { .. } => ErrorKind::Unexpected,
            Self::Allocation { .. } => ErrorKind::Allocation,
            Self::Easel { .. } => ErrorKind::Easel,
        }
    }

    /// Raw status code, for unexpected-status errors.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Unexpected { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Typed status, when the code is one the native library defines.
    pub fn status(&self) -> Option<status::Status> {
        self.code().and_then(status::Status::from_code)
    }

    /// Name of the failing native function.
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::Unexpected { function, .. } => Some(function),
            _ => None,
        }
    }

    /// Name of the native type that could not be allocated.
    pub fn ctype(&self) -> Option<&str> {
        match self {
            Self::Allocation { ctype } => Some(ctype),
            _ => None,
        }
    }

    /// Diagnostic message of a generic library failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Easel { message } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unexpected => write!(f, "unexpected"),
            Self::Allocation => write!(f, "allocation"),
            Self::Easel => write!(f, "easel"),
        }
    }
}

/// Result type alias for native binding calls.
pub type Result<T> = std::result::Result<T, BindingError>;
