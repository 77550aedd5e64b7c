//! Error types for the libclang wrappers.

use std::ffi::NulError;
use std::fmt;
use std::os::raw::{c_int, c_uint};
use std::path::PathBuf;

use thiserror::Error;

use crate::ffi;

/// `CXErrorCode` as returned by the `*2` family of translation unit constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Failure,
    Crashed,
    InvalidArguments,
    AstReadError,
    Unknown(i32),
}

impl ErrorCode {
    /// Returns `None` for `CXError_Success`.
    pub(crate) fn from_raw(code: c_int) -> Option<Self> {
        match code {
            ffi::CXError_Success => None,
            ffi::CXError_Failure => Some(Self::Failure),
            ffi::CXError_Crashed => Some(Self::Crashed),
            ffi::CXError_InvalidArguments => Some(Self::InvalidArguments),
            ffi::CXError_ASTReadError => Some(Self::AstReadError),
            other => Some(Self::Unknown(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => f.write_str("failure"),
            Self::Crashed => f.write_str("libclang crashed"),
            Self::InvalidArguments => f.write_str("invalid arguments"),
            Self::AstReadError => f.write_str("AST deserialization error"),
            Self::Unknown(code) => write!(f, "unknown error code {code}"),
        }
    }
}

/// `CXSaveError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SaveError {
    #[error("unknown error while saving")]
    Unknown,
    #[error("translation unit has errors")]
    TranslationErrors,
    #[error("invalid translation unit")]
    InvalidTu,
}

impl SaveError {
    pub(crate) fn from_raw(code: c_int) -> Option<Self> {
        match code {
            ffi::CXSaveError_None => None,
            ffi::CXSaveError_TranslationErrors => Some(Self::TranslationErrors),
            ffi::CXSaveError_InvalidTU => Some(Self::InvalidTu),
            _ => Some(Self::Unknown),
        }
    }
}

/// `CXCompilationDatabase_Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CompilationDatabaseError {
    #[error("cannot load database")]
    CanNotLoadDatabase,
    #[error("unknown compilation database error {0}")]
    Unknown(u32),
}

impl CompilationDatabaseError {
    pub(crate) fn from_raw(code: c_uint) -> Option<Self> {
        match code {
            ffi::CXCompilationDatabase_NoError => None,
            ffi::CXCompilationDatabase_CanNotLoadDatabase => Some(Self::CanNotLoadDatabase),
            other => Some(Self::Unknown(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClangError {
    #[error("failed to parse '{}': {code}", filename.display())]
    Parse { filename: PathBuf, code: ErrorCode },

    #[error("failed to reparse translation unit (status {status})")]
    Reparse { status: i32 },

    #[error("failed to save translation unit: {0}")]
    Save(#[from] SaveError),

    #[error("failed to load compilation database from '{}': {source}", path.display())]
    CompilationDatabase {
        path: PathBuf,
        #[source]
        source: CompilationDatabaseError,
    },

    #[error("code completion failed at {filename}:{line}:{column}")]
    CompletionFailed { filename: String, line: u32, column: u32 },

    #[error("could not compute unique id of '{file}'")]
    FileUniqueId { file: String },

    #[error("string contains an interior NUL byte")]
    InteriorNul(#[from] NulError),
}

pub type Result<T> = std::result::Result<T, ClangError>;
