pub mod availability;
pub mod comment;
pub mod compilation_db;
pub mod completion;
pub mod cursor;
pub mod cursor_kind;
mod cxstring;
pub mod diagnostic;
pub mod dump;
pub mod error;
pub mod ffi;
pub mod index;
pub mod module;
pub mod project;
pub mod source;
pub mod token;
pub mod translation_unit;
pub mod types;
pub mod unsaved;

#[cfg(feature = "node")]
pub mod bridge;

// Re-export selected API for consumers
pub use availability::{AvailabilityKind, CursorAvailability, PlatformAvailability, Version};
pub use comment::{Comment, CommentInlineCommandRenderKind, CommentKind, CommentParamPassDirection};
pub use compilation_db::{CompilationDatabase, CompileCommand, CompileCommands};
pub use completion::{
    CodeCompleteFlags, CodeCompleteResults, CompletionChunk, CompletionChunkKind, CompletionContext,
    CompletionResult, CompletionString,
};
pub use cursor::{AccessSpecifier, ChildVisit, Cursor, CursorSet, LanguageKind, LinkageKind, NameRefFlags};
pub use cursor_kind::CursorKind;
pub use diagnostic::{Diagnostic, DiagnosticDisplayOptions, DiagnosticOption, DiagnosticSeverity, FixIt};
pub use dump::{parse_file, traverse_ast, AstNode, DumpOptions, DumpReport, DumpRequest, SpanJson, Visitor};
pub use error::{ClangError, CompilationDatabaseError, ErrorCode, Result, SaveError};
pub use index::{Index, IndexOptions};
pub use module::Module;
pub use project::{dump_paths, find_all_source_files};
pub use source::{File, FileUniqueId, Location, PresumedLocation, SourceLocation, SourceRange};
pub use token::{Token, TokenKind, Tokens};
pub use translation_unit::{IncludeVisit, TranslationUnit, TranslationUnitFlags, VisitResult};
pub use types::{CallingConv, RefQualifierKind, Type, TypeKind, TypeLayoutError};
pub use unsaved::UnsavedFiles;

/// Version string of the loaded libclang, e.g. `clang version 17.0.6`.
pub fn clang_version() -> String {
    cxstring::take(unsafe { ffi::clang_getClangVersion() })
}
