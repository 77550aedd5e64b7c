use std::any::Any;
use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_uint, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::ptr;

use bitflags::bitflags;
use tracing::{debug, warn};

use crate::completion::{CodeCompleteFlags, CodeCompleteResults};
use crate::cursor::Cursor;
use crate::cxstring;
use crate::diagnostic::Diagnostic;
use crate::error::{ClangError, Result, SaveError};
use crate::ffi;
use crate::index::Index;
use crate::module::Module;
use crate::source::{File, SourceLocation, SourceRange};
use crate::token::Tokens;
use crate::unsaved::UnsavedFiles;

bitflags! {
    /// `CXTranslationUnit_Flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TranslationUnitFlags: u32 {
        const NONE = 0x0;
        const DETAILED_PREPROCESSING_RECORD = 0x01;
        const INCOMPLETE = 0x02;
        const PRECOMPILED_PREAMBLE = 0x04;
        const CACHE_COMPLETION_RESULTS = 0x08;
        const FOR_SERIALIZATION = 0x10;
        const CXX_CHAINED_PCH = 0x20;
        const SKIP_FUNCTION_BODIES = 0x40;
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION = 0x80;
        const CREATE_PREAMBLE_ON_FIRST_PARSE = 0x100;
        const KEEP_GOING = 0x200;
        const SINGLE_FILE_PARSE = 0x400;
        const LIMIT_SKIP_FUNCTION_BODIES_TO_PREAMBLE = 0x800;
        const INCLUDE_ATTRIBUTED_TYPES = 0x1000;
        const VISIT_IMPLICIT_ATTRIBUTES = 0x2000;
        const IGNORE_NON_ERRORS_FROM_INCLUDED_FILES = 0x4000;
        const RETAIN_EXCLUDED_CONDITIONAL_BLOCKS = 0x8000;
    }
}

impl TranslationUnitFlags {
    /// The flags libclang recommends for translation units that will be
    /// reparsed and queried for completions.
    pub fn default_editing() -> Self {
        Self::from_bits_retain(unsafe { ffi::clang_defaultEditingTranslationUnitOptions() })
    }
}

/// `CXResult`, the outcome of [`TranslationUnit::find_includes_in_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitResult {
    Success,
    Invalid,
    VisitBreak,
}

impl VisitResult {
    fn from_raw(raw: ffi::CXResult) -> Self {
        match raw {
            ffi::CXResult_Success => Self::Success,
            ffi::CXResult_VisitBreak => Self::VisitBreak,
            _ => Self::Invalid,
        }
    }
}

/// What an include visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeVisit {
    Break,
    Continue,
}

/// A single parsed source file together with everything it includes.
pub struct TranslationUnit<'i> {
    pub(crate) ptr: ffi::CXTranslationUnit,
    pub(crate) _index: PhantomData<&'i Index>,
}

impl<'i> TranslationUnit<'i> {
    /// The original source file name.
    pub fn spelling(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getTranslationUnitSpelling(self.ptr) })
    }

    /// The cursor representing the translation unit itself; the root of
    /// every traversal.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::from_raw(unsafe { ffi::clang_getTranslationUnitCursor(self.ptr) }, self)
    }

    /// The most specific cursor covering `location`.
    pub fn cursor_at<'tu>(&'tu self, location: SourceLocation<'tu>) -> Cursor<'tu> {
        Cursor::from_raw(unsafe { ffi::clang_getCursor(self.ptr, location.raw) }, self)
    }

    /// Looks up a file that is part of this translation unit.
    pub fn file(&self, name: impl AsRef<Path>) -> Result<Option<File<'_>>> {
        let name = cxstring::path_to_cstring(name.as_ref())?;
        Ok(File::from_raw(unsafe { ffi::clang_getFile(self.ptr, name.as_ptr()) }))
    }

    pub fn is_file_multiple_include_guarded(&self, file: File<'_>) -> bool {
        unsafe { ffi::clang_isFileMultipleIncludeGuarded(self.ptr, file.raw) != 0 }
    }

    pub fn location<'tu>(&'tu self, file: File<'tu>, line: u32, column: u32) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getLocation(self.ptr, file.raw, line, column) })
    }

    pub fn location_for_offset<'tu>(&'tu self, file: File<'tu>, offset: u32) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getLocationForOffset(self.ptr, file.raw, offset) })
    }

    pub fn num_diagnostics(&self) -> u32 {
        unsafe { ffi::clang_getNumDiagnostics(self.ptr) }
    }

    /// Diagnostics produced by the last parse or reparse.
    pub fn diagnostics(&self) -> Vec<Diagnostic<'_>> {
        (0..self.num_diagnostics())
            .filter_map(|i| Diagnostic::from_raw(unsafe { ffi::clang_getDiagnostic(self.ptr, i) }))
            .collect()
    }

    /// Reparses the source files against the current contents of `unsaved`.
    ///
    /// Cursors and other handles into the old AST are invalidated, hence the
    /// exclusive borrow.
    pub fn reparse(&mut self, unsaved: &UnsavedFiles, options: u32) -> Result<()> {
        let mut native = unsaved.to_native()?;
        let status =
            unsafe { ffi::clang_reparseTranslationUnit(self.ptr, native.len(), native.as_mut_ptr(), options) };
        if status != 0 {
            warn!(status, "reparse failed");
            return Err(ClangError::Reparse { status });
        }
        debug!(unsaved = unsaved.len(), "reparsed translation unit");
        Ok(())
    }

    pub fn default_reparse_options(&self) -> u32 {
        unsafe { ffi::clang_defaultReparseOptions(self.ptr) }
    }

    /// Writes the AST to `path` so it can be reloaded with
    /// [`Index::create_translation_unit`].
    pub fn save(&self, path: impl AsRef<Path>, options: u32) -> Result<()> {
        let path = path.as_ref();
        let c_path = cxstring::path_to_cstring(path)?;
        let code = unsafe { ffi::clang_saveTranslationUnit(self.ptr, c_path.as_ptr(), options) };
        if let Some(err) = SaveError::from_raw(code) {
            warn!(file = %path.display(), %err, "save failed");
            return Err(err.into());
        }
        debug!(file = %path.display(), "saved translation unit");
        Ok(())
    }

    pub fn default_save_options(&self) -> u32 {
        unsafe { ffi::clang_defaultSaveOptions(self.ptr) }
    }

    /// Runs code completion at `line`:`column` (1-based) in `filename`.
    pub fn complete_at(
        &self,
        filename: &str,
        line: u32,
        column: u32,
        unsaved: &UnsavedFiles,
        flags: CodeCompleteFlags,
    ) -> Result<CodeCompleteResults<'_>> {
        let c_filename = CString::new(filename)?;
        let mut native = unsaved.to_native()?;
        let raw = unsafe {
            ffi::clang_codeCompleteAt(
                self.ptr,
                c_filename.as_ptr(),
                line,
                column,
                native.as_mut_ptr(),
                native.len(),
                flags.bits(),
            )
        };
        CodeCompleteResults::from_raw(raw).ok_or_else(|| ClangError::CompletionFailed {
            filename: filename.to_string(),
            line,
            column,
        })
    }

    /// Lexes the tokens covered by `range`.
    pub fn tokenize<'tu>(&'tu self, range: SourceRange<'tu>) -> Tokens<'tu> {
        let mut tokens = ptr::null_mut();
        let mut count: c_uint = 0;
        unsafe { ffi::clang_tokenize(self.ptr, range.raw, &mut tokens, &mut count) };
        Tokens::from_raw(self, tokens, count)
    }

    pub fn num_top_level_headers(&self, module: Module<'_>) -> u32 {
        unsafe { ffi::clang_Module_getNumTopLevelHeaders(self.ptr, module.raw) }
    }

    pub fn top_level_header(&self, module: Module<'_>, index: u32) -> Option<File<'_>> {
        File::from_raw(unsafe { ffi::clang_Module_getTopLevelHeader(self.ptr, module.raw, index) })
    }

    /// Calls `visitor` for every `#include` directive found in `file`.
    pub fn find_includes_in_file<'tu, F>(&'tu self, file: File<'tu>, visitor: F) -> VisitResult
    where
        F: FnMut(Cursor<'tu>, SourceRange<'tu>) -> IncludeVisit,
    {
        let mut state = IncludeState { tu: self, visitor, panic: None };
        let raw_visitor = ffi::CXCursorAndRangeVisitor {
            context: &mut state as *mut IncludeState<'tu, F> as *mut c_void,
            visit: include_trampoline::<F>,
        };
        let result = unsafe { ffi::clang_findIncludesInFile(self.ptr, file.raw, raw_visitor) };
        if let Some(payload) = state.panic.take() {
            panic::resume_unwind(payload);
        }
        VisitResult::from_raw(result)
    }
}

impl Drop for TranslationUnit<'_> {
    fn drop(&mut self) {
        unsafe { ffi::clang_disposeTranslationUnit(self.ptr) }
    }
}

impl std::fmt::Debug for TranslationUnit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TranslationUnit").field(&self.spelling()).finish()
    }
}

struct IncludeState<'tu, F> {
    tu: &'tu TranslationUnit<'tu>,
    visitor: F,
    panic: Option<Box<dyn Any + Send>>,
}

extern "C" fn include_trampoline<'tu, F>(
    context: *mut c_void,
    cursor: ffi::CXCursor,
    range: ffi::CXSourceRange,
) -> ffi::CXVisitorResult
where
    F: FnMut(Cursor<'tu>, SourceRange<'tu>) -> IncludeVisit,
{
    let state = unsafe { &mut *(context as *mut IncludeState<'tu, F>) };
    let tu = state.tu;
    let visitor = &mut state.visitor;
    match panic::catch_unwind(AssertUnwindSafe(|| {
        visitor(Cursor::from_raw(cursor, tu), SourceRange::from_raw(range))
    })) {
        Ok(IncludeVisit::Continue) => ffi::CXVisit_Continue,
        Ok(IncludeVisit::Break) => ffi::CXVisit_Break,
        Err(payload) => {
            warn!("include visitor panicked, stopping traversal");
            state.panic = Some(payload);
            ffi::CXVisit_Break
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::ChildVisit;
    use crate::cursor_kind::CursorKind;

    fn names(tu: &TranslationUnit<'_>) -> Vec<String> {
        tu.cursor().children().iter().map(|c| c.spelling()).collect()
    }

    #[test]
    fn reparse_picks_up_new_contents() {
        let index = Index::new(false, false);
        let mut unsaved = UnsavedFiles::new();
        unsaved.insert("hello.cpp", "int world();");
        let mut tu = index.parse(Some("hello.cpp"), &[], &unsaved, TranslationUnitFlags::NONE).unwrap();
        assert_eq!(names(&tu), ["world"]);

        unsaved.insert("hello.cpp", "int world2();");
        let options = tu.default_reparse_options();
        tu.reparse(&unsaved, options).unwrap();
        assert_eq!(names(&tu), ["world2"]);
    }

    #[test]
    fn save_and_reload_ast() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("saved.c");
        std::fs::write(&source, "int saved_value = 3;\n").unwrap();
        let ast = dir.path().join("saved.ast");
        let source = source.to_str().unwrap();

        let index = Index::new(false, false);
        {
            let tu = index.parse(Some(source), &[], &UnsavedFiles::new(), TranslationUnitFlags::NONE).unwrap();
            tu.save(&ast, tu.default_save_options()).unwrap();
        }
        let tu = index.create_translation_unit(&ast).unwrap();
        assert_eq!(tu.spelling(), source);
        assert_eq!(names(&tu), ["saved_value"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_reach_libclang_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(OsStr::from_bytes(b"src-\xff.c"));
        std::fs::write(&source, "int latin1_value;\n").unwrap();
        let ast = dir.path().join(OsStr::from_bytes(b"out-\xfe.ast"));

        let index = Index::new(false, false);
        {
            let tu = index
                .parse_path(&source, &[], &UnsavedFiles::new(), TranslationUnitFlags::NONE)
                .unwrap();
            assert!(tu.file(&source).unwrap().is_some());
            tu.save(&ast, tu.default_save_options()).unwrap();
        }
        assert!(ast.is_file());
        assert!(!dir.path().join("out-\u{FFFD}.ast").exists());

        let tu = index.create_translation_unit(&ast).unwrap();
        assert_eq!(names(&tu), ["latin1_value"]);
    }

    #[test]
    fn include_guards_are_detected() {
        let dir = tempfile::tempdir().unwrap();
        let guarded = dir.path().join("guarded.h");
        std::fs::write(&guarded, "#ifndef GUARDED_H\n#define GUARDED_H\nint guarded;\n#endif\n").unwrap();
        let plain = dir.path().join("plain.h");
        std::fs::write(&plain, "int plain;\n").unwrap();
        let main = dir.path().join("main.c");
        std::fs::write(&main, "#include \"guarded.h\"\n#include \"plain.h\"\n").unwrap();

        let index = Index::new(false, false);
        let tu = index.parse_path(&main, &[], &UnsavedFiles::new(), TranslationUnitFlags::NONE).unwrap();
        let guarded = tu.file(&guarded).unwrap().expect("guarded.h is included");
        let plain = tu.file(&plain).unwrap().expect("plain.h is included");
        assert!(tu.is_file_multiple_include_guarded(guarded));
        assert!(!tu.is_file_multiple_include_guarded(plain));
    }

    #[test]
    fn visit_results_map_from_raw() {
        assert_eq!(VisitResult::from_raw(0), VisitResult::Success);
        assert_eq!(VisitResult::from_raw(1), VisitResult::Invalid);
        assert_eq!(VisitResult::from_raw(2), VisitResult::VisitBreak);
    }

    #[test]
    fn loading_a_missing_ast_fails() {
        let dir = tempfile::tempdir().unwrap();
        let index = Index::new(false, false);
        let err = index.create_translation_unit(dir.path().join("absent.ast")).unwrap_err();
        assert!(matches!(err, ClangError::Parse { .. }));
    }

    #[test]
    fn locations_round_trip_through_files() {
        let index = Index::new(false, false);
        let source = "int first;\nint second;\n";
        let unsaved: UnsavedFiles = [("loc.c", source)].into_iter().collect();
        let tu = index.parse(Some("loc.c"), &[], &unsaved, TranslationUnitFlags::NONE).unwrap();

        let file = tu.file("loc.c").unwrap().expect("main file is known");
        assert_eq!(file.name(), "loc.c");
        assert!(tu.file("other.c").unwrap().is_none());

        let loc = tu.location(file, 2, 5);
        let cursor = tu.cursor_at(loc);
        assert_eq!(cursor.kind(), CursorKind::VAR_DECL);
        assert_eq!(cursor.spelling(), "second");

        let by_offset = tu.location_for_offset(file, 15);
        assert_eq!(by_offset, loc);
        let decomposed = by_offset.spelling_location();
        assert_eq!((decomposed.line, decomposed.column, decomposed.offset), (2, 5, 15));
        assert_eq!(decomposed.file.map(|f| f.name()).as_deref(), Some("loc.c"));
        assert_eq!(decomposed.file, Some(file));
        assert!(loc.is_from_main_file());
    }

    #[test]
    fn includes_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.h"), "#define A 1\n").unwrap();
        std::fs::write(dir.path().join("b.h"), "#define B 2\n").unwrap();
        let main = dir.path().join("main.c");
        std::fs::write(&main, "#include \"a.h\"\n#include \"b.h\"\nint main(void) { return A + B; }\n").unwrap();
        let main = main.to_str().unwrap();

        let index = Index::new(false, false);
        let tu = index
            .parse(Some(main), &[], &UnsavedFiles::new(), TranslationUnitFlags::DETAILED_PREPROCESSING_RECORD)
            .unwrap();
        let file = tu.file(main).unwrap().expect("main file is known");

        let mut seen = Vec::new();
        let result = tu.find_includes_in_file(file, |cursor, _| {
            seen.push(cursor.included_file().map(|f| f.name()).unwrap_or_default());
            IncludeVisit::Continue
        });
        assert_eq!(result, VisitResult::Success);
        assert_eq!(seen.len(), 2);
        assert!(seen[0].ends_with("a.h"), "{seen:?}");
        assert!(seen[1].ends_with("b.h"), "{seen:?}");

        let mut count = 0;
        let result = tu.find_includes_in_file(file, |_, _| {
            count += 1;
            IncludeVisit::Break
        });
        assert_eq!(result, VisitResult::VisitBreak);
        assert_eq!(count, 1);

        let mut kinds = Vec::new();
        tu.cursor().visit_children(|cursor, _| {
            kinds.push(cursor.kind());
            ChildVisit::Continue
        });
        assert!(kinds.contains(&CursorKind::INCLUSION_DIRECTIVE));
    }

    #[test]
    fn editing_flags_are_reported_by_libclang() {
        let flags = TranslationUnitFlags::default_editing();
        assert!(flags.contains(TranslationUnitFlags::PRECOMPILED_PREAMBLE));
    }
}
