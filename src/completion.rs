//! Code completion results.

use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::slice;

use bitflags::bitflags;

use crate::availability::AvailabilityKind;
use crate::cursor_kind::CursorKind;
use crate::cxstring;
use crate::diagnostic::Diagnostic;
use crate::ffi;

bitflags! {
    /// `CXCodeComplete_Flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CodeCompleteFlags: u32 {
        const INCLUDE_MACROS = 0x01;
        const INCLUDE_CODE_PATTERNS = 0x02;
        const INCLUDE_BRIEF_COMMENTS = 0x04;
        const SKIP_PREAMBLE = 0x08;
        const INCLUDE_COMPLETIONS_WITH_FIX_ITS = 0x10;
    }
}

impl Default for CodeCompleteFlags {
    fn default() -> Self {
        Self::from_bits_retain(unsafe { ffi::clang_defaultCodeCompleteOptions() })
    }
}

bitflags! {
    /// `CXCompletionContext`: which kinds of completions make sense at the
    /// completion point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CompletionContext: u64 {
        const ANY_TYPE = 1 << 0;
        const ANY_VALUE = 1 << 1;
        const OBJC_OBJECT_VALUE = 1 << 2;
        const OBJC_SELECTOR_VALUE = 1 << 3;
        const CXX_CLASS_TYPE_VALUE = 1 << 4;
        const DOT_MEMBER_ACCESS = 1 << 5;
        const ARROW_MEMBER_ACCESS = 1 << 6;
        const OBJC_PROPERTY_ACCESS = 1 << 7;
        const ENUM_TAG = 1 << 8;
        const UNION_TAG = 1 << 9;
        const STRUCT_TAG = 1 << 10;
        const CLASS_TAG = 1 << 11;
        const NAMESPACE = 1 << 12;
        const NESTED_NAME_SPECIFIER = 1 << 13;
        const OBJC_INTERFACE = 1 << 14;
        const OBJC_PROTOCOL = 1 << 15;
        const OBJC_CATEGORY = 1 << 16;
        const OBJC_INSTANCE_MESSAGE = 1 << 17;
        const OBJC_CLASS_MESSAGE = 1 << 18;
        const OBJC_SELECTOR_NAME = 1 << 19;
        const MACRO_NAME = 1 << 20;
        const NATURAL_LANGUAGE = 1 << 21;
        const INCLUDED_FILE = 1 << 22;
        const UNKNOWN = (1 << 23) - 1;
    }
}

/// `CXCompletionChunkKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionChunkKind {
    Optional,
    TypedText,
    Text,
    Placeholder,
    Informative,
    CurrentParameter,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftAngle,
    RightAngle,
    Comma,
    ResultType,
    Colon,
    SemiColon,
    Equal,
    HorizontalSpace,
    VerticalSpace,
}

impl CompletionChunkKind {
    fn from_raw(raw: c_uint) -> Option<Self> {
        use CompletionChunkKind::*;
        const ALL: [CompletionChunkKind; 21] = [
            Optional,
            TypedText,
            Text,
            Placeholder,
            Informative,
            CurrentParameter,
            LeftParen,
            RightParen,
            LeftBracket,
            RightBracket,
            LeftBrace,
            RightBrace,
            LeftAngle,
            RightAngle,
            Comma,
            ResultType,
            Colon,
            SemiColon,
            Equal,
            HorizontalSpace,
            VerticalSpace,
        ];
        ALL.get(raw as usize).copied()
    }
}

impl fmt::Display for CompletionChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A semantic string describing one completion.
#[derive(Clone, Copy)]
pub struct CompletionString<'a> {
    raw: ffi::CXCompletionString,
    _owner: PhantomData<&'a ()>,
}

impl<'a> CompletionString<'a> {
    pub(crate) fn from_raw(raw: ffi::CXCompletionString) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(CompletionString { raw, _owner: PhantomData })
        }
    }

    /// Lower values are more likely to be what the user wants.
    pub fn priority(&self) -> u32 {
        unsafe { ffi::clang_getCompletionPriority(self.raw) }
    }

    pub fn availability(&self) -> AvailabilityKind {
        AvailabilityKind::from_raw(unsafe { ffi::clang_getCompletionAvailability(self.raw) })
    }

    pub fn annotations(&self) -> Vec<String> {
        let n = unsafe { ffi::clang_getCompletionNumAnnotations(self.raw) };
        (0..n)
            .map(|i| cxstring::take(unsafe { ffi::clang_getCompletionAnnotation(self.raw, i) }))
            .collect()
    }

    /// Name of the semantic parent of the completed entity, if any.
    pub fn parent(&self) -> Option<String> {
        cxstring::take_non_empty(unsafe { ffi::clang_getCompletionParent(self.raw, std::ptr::null_mut()) })
    }

    pub fn brief_comment(&self) -> Option<String> {
        cxstring::take_non_empty(unsafe { ffi::clang_getCompletionBriefComment(self.raw) })
    }

    pub fn chunks(&self) -> Vec<CompletionChunk<'a>> {
        let n = unsafe { ffi::clang_getNumCompletionChunks(self.raw) };
        (0..n).map(|index| CompletionChunk { owner: *self, index }).collect()
    }

    /// The text that would be inserted, i.e. the typed-text chunk.
    pub fn typed_text(&self) -> Option<String> {
        self.chunks()
            .into_iter()
            .find(|c| c.kind() == Some(CompletionChunkKind::TypedText))
            .map(|c| c.text())
    }
}

impl fmt::Debug for CompletionString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionString")
            .field("priority", &self.priority())
            .field("chunks", &self.chunks())
            .finish()
    }
}

/// One piece of a [`CompletionString`].
#[derive(Clone, Copy)]
pub struct CompletionChunk<'a> {
    owner: CompletionString<'a>,
    index: c_uint,
}

impl<'a> CompletionChunk<'a> {
    pub fn kind(&self) -> Option<CompletionChunkKind> {
        CompletionChunkKind::from_raw(unsafe { ffi::clang_getCompletionChunkKind(self.owner.raw, self.index) })
    }

    pub fn text(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getCompletionChunkText(self.owner.raw, self.index) })
    }

    /// The nested completion string of an optional chunk.
    pub fn completion_string(&self) -> Option<CompletionString<'a>> {
        CompletionString::from_raw(unsafe {
            ffi::clang_getCompletionChunkCompletionString(self.owner.raw, self.index)
        })
    }
}

impl fmt::Display for CompletionChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind} {}", self.text()),
            None => write!(f, "? {}", self.text()),
        }
    }
}

impl fmt::Debug for CompletionChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// One entry of a [`CodeCompleteResults`].
#[derive(Debug, Clone, Copy)]
pub struct CompletionResult<'a> {
    pub cursor_kind: CursorKind,
    pub completion_string: Option<CompletionString<'a>>,
}

/// Results of [`TranslationUnit::complete_at`](crate::TranslationUnit::complete_at),
/// disposed on drop.
pub struct CodeCompleteResults<'tu> {
    ptr: *mut ffi::CXCodeCompleteResults,
    _tu: PhantomData<&'tu ()>,
}

impl<'tu> CodeCompleteResults<'tu> {
    pub(crate) fn from_raw(ptr: *mut ffi::CXCodeCompleteResults) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(CodeCompleteResults { ptr, _tu: PhantomData })
        }
    }

    fn raw_results(&self) -> &[ffi::CXCompletionResult] {
        let block = unsafe { &*self.ptr };
        if block.Results.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(block.Results, block.NumResults as usize) }
    }

    pub fn len(&self) -> usize {
        self.raw_results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn results(&self) -> Vec<CompletionResult<'_>> {
        self.raw_results()
            .iter()
            .map(|r| CompletionResult {
                cursor_kind: CursorKind(r.CursorKind),
                completion_string: CompletionString::from_raw(r.CompletionString),
            })
            .collect()
    }

    /// Sorts the results alphabetically, in place.
    pub fn sort(&mut self) {
        let block = unsafe { &mut *self.ptr };
        if !block.Results.is_null() {
            unsafe { ffi::clang_sortCodeCompletionResults(block.Results, block.NumResults) };
        }
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic<'_>> {
        let n = unsafe { ffi::clang_codeCompleteGetNumDiagnostics(self.ptr) };
        (0..n)
            .filter_map(|i| Diagnostic::from_raw(unsafe { ffi::clang_codeCompleteGetDiagnostic(self.ptr, i) }))
            .collect()
    }

    pub fn contexts(&self) -> CompletionContext {
        CompletionContext::from_bits_retain(unsafe { ffi::clang_codeCompleteGetContexts(self.ptr) })
    }
}

impl Drop for CodeCompleteResults<'_> {
    fn drop(&mut self) {
        unsafe { ffi::clang_disposeCodeCompleteResults(self.ptr) }
    }
}

impl fmt::Debug for CodeCompleteResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeCompleteResults").field("len", &self.len()).finish()
    }
}
