use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::path::{Path, PathBuf};
use std::ptr;

use serde::Deserialize;
use tracing::debug;

use crate::cxstring;
use crate::error::{ClangError, ErrorCode, Result};
use crate::ffi;
use crate::translation_unit::{TranslationUnit, TranslationUnitFlags};
use crate::unsaved::UnsavedFiles;

/// Settings for [`Index::with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Skip declarations coming from precompiled headers when enumerating
    /// translation unit children.
    pub exclude_declarations_from_pch: bool,
    /// Let libclang print diagnostics to stderr as it parses.
    pub display_diagnostics: bool,
}

/// A set of translation units that would typically be linked together into
/// an executable or library.
///
/// Translation units borrow the index they were created from, so the index
/// is disposed only after all of them.
pub struct Index {
    ptr: ffi::CXIndex,
}

impl Index {
    pub fn new(exclude_declarations_from_pch: bool, display_diagnostics: bool) -> Self {
        let ptr = unsafe {
            ffi::clang_createIndex(exclude_declarations_from_pch as c_int, display_diagnostics as c_int)
        };
        debug!(exclude_declarations_from_pch, display_diagnostics, "created index");
        Index { ptr }
    }

    pub fn with_options(options: &IndexOptions) -> Self {
        Self::new(options.exclude_declarations_from_pch, options.display_diagnostics)
    }

    /// Parses a source file (plus any unsaved buffers) into a translation unit.
    ///
    /// `source_filename` may be `None` when the file to parse is named among
    /// `args` instead.
    pub fn parse(
        &self,
        source_filename: Option<&str>,
        args: &[&str],
        unsaved: &UnsavedFiles,
        flags: TranslationUnitFlags,
    ) -> Result<TranslationUnit<'_>> {
        let filename = source_filename.map(CString::new).transpose()?;
        let display = PathBuf::from(source_filename.unwrap_or_default());
        self.parse_native(filename, display, args, unsaved, flags)
    }

    /// Like [`parse`](Self::parse) for a file on disk. The path reaches
    /// libclang unchanged, even when it is not valid UTF-8.
    pub fn parse_path(
        &self,
        path: &Path,
        args: &[&str],
        unsaved: &UnsavedFiles,
        flags: TranslationUnitFlags,
    ) -> Result<TranslationUnit<'_>> {
        let filename = cxstring::path_to_cstring(path)?;
        self.parse_native(Some(filename), path.to_path_buf(), args, unsaved, flags)
    }

    fn parse_native(
        &self,
        filename: Option<CString>,
        display: PathBuf,
        args: &[&str],
        unsaved: &UnsavedFiles,
        flags: TranslationUnitFlags,
    ) -> Result<TranslationUnit<'_>> {
        let args = CommandLine::new(args)?;
        let mut unsaved = unsaved.to_native()?;

        let mut tu = ptr::null_mut();
        let code = unsafe {
            ffi::clang_parseTranslationUnit2(
                self.ptr,
                filename.as_ref().map_or(ptr::null(), |f| f.as_ptr()),
                args.as_ptr(),
                args.len(),
                unsaved.as_mut_ptr(),
                unsaved.len(),
                flags.bits(),
                &mut tu,
            )
        };
        if let Some(code) = ErrorCode::from_raw(code) {
            let shown = display.display();
            debug!(file = %shown, %code, "parse failed");
            return Err(ClangError::Parse { filename: display, code });
        }
        let shown = display.display();
        debug!(file = %shown, "parsed translation unit");
        self.wrap(tu, display)
    }

    /// Loads a translation unit from an AST file written by
    /// [`TranslationUnit::save`] or `clang -emit-ast`.
    pub fn create_translation_unit(&self, ast_file: impl AsRef<Path>) -> Result<TranslationUnit<'_>> {
        let path = ast_file.as_ref();
        let c_path = cxstring::path_to_cstring(path)?;
        let mut tu = ptr::null_mut();
        let code = unsafe { ffi::clang_createTranslationUnit2(self.ptr, c_path.as_ptr(), &mut tu) };
        if let Some(code) = ErrorCode::from_raw(code) {
            return Err(ClangError::Parse { filename: path.to_path_buf(), code });
        }
        debug!(file = %path.display(), "loaded AST file");
        self.wrap(tu, path.to_path_buf())
    }

    /// Older entry point equivalent to [`parse`](Self::parse) with
    /// detailed preprocessing records; libclang reports no error code here.
    pub fn create_translation_unit_from_source_file(
        &self,
        source_filename: Option<&str>,
        args: &[&str],
        unsaved: &UnsavedFiles,
    ) -> Result<TranslationUnit<'_>> {
        let filename = source_filename.map(CString::new).transpose()?;
        let args = CommandLine::new(args)?;
        let mut unsaved = unsaved.to_native()?;
        let tu = unsafe {
            ffi::clang_createTranslationUnitFromSourceFile(
                self.ptr,
                filename.as_ref().map_or(ptr::null(), |f| f.as_ptr()),
                args.len(),
                args.as_ptr(),
                unsaved.len(),
                unsaved.as_mut_ptr(),
            )
        };
        self.wrap(tu, PathBuf::from(source_filename.unwrap_or_default()))
    }

    fn wrap(&self, tu: ffi::CXTranslationUnit, filename: PathBuf) -> Result<TranslationUnit<'_>> {
        if tu.is_null() {
            return Err(ClangError::Parse { filename, code: ErrorCode::Failure });
        }
        Ok(TranslationUnit { ptr: tu, _index: PhantomData })
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { ffi::clang_disposeIndex(self.ptr) }
        }
    }
}

/// NUL-terminated argument vector.
struct CommandLine {
    _owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CommandLine {
    fn new(args: &[&str]) -> Result<Self> {
        let owned = args.iter().map(|a| CString::new(*a)).collect::<std::result::Result<Vec<_>, _>>()?;
        let ptrs = owned.iter().map(|a| a.as_ptr()).collect();
        Ok(CommandLine { _owned: owned, ptrs })
    }

    fn as_ptr(&self) -> *const *const c_char {
        if self.ptrs.is_empty() {
            ptr::null()
        } else {
            self.ptrs.as_ptr()
        }
    }

    fn len(&self) -> c_int {
        self.ptrs.len() as c_int
    }
}
