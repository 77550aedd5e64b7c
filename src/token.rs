use std::fmt;
use std::os::raw::c_uint;
use std::ptr;
use std::slice;

use crate::cursor::Cursor;
use crate::cxstring;
use crate::ffi;
use crate::source::{SourceLocation, SourceRange};
use crate::translation_unit::TranslationUnit;

/// `CXTokenKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Punctuation,
    Keyword,
    Identifier,
    Literal,
    Comment,
}

impl TryFrom<u32> for TokenKind {
    type Error = u32;

    fn try_from(raw: u32) -> Result<Self, u32> {
        match raw {
            0 => Ok(Self::Punctuation),
            1 => Ok(Self::Keyword),
            2 => Ok(Self::Identifier),
            3 => Ok(Self::Literal),
            4 => Ok(Self::Comment),
            other => Err(other),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Punctuation => "Punctuation",
            Self::Keyword => "Keyword",
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
            Self::Comment => "Comment",
        };
        f.write_str(s)
    }
}

/// A single preprocessing token.
#[derive(Clone, Copy)]
pub struct Token<'tu> {
    raw: ffi::CXToken,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Token<'tu> {
    /// `None` for kinds this crate does not know about.
    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::try_from(unsafe { ffi::clang_getTokenKind(self.raw) }).ok()
    }

    pub fn spelling(&self) -> String {
        cxstring::take(unsafe { ffi::clang_getTokenSpelling(self.tu.ptr, self.raw) })
    }

    pub fn location(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { ffi::clang_getTokenLocation(self.tu.ptr, self.raw) })
    }

    pub fn extent(&self) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { ffi::clang_getTokenExtent(self.tu.ptr, self.raw) })
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token").field("kind", &self.kind()).field("spelling", &self.spelling()).finish()
    }
}

/// Tokens produced by [`TranslationUnit::tokenize`], released with
/// `clang_disposeTokens` on drop.
pub struct Tokens<'tu> {
    ptr: *mut ffi::CXToken,
    len: c_uint,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Tokens<'tu> {
    pub(crate) fn from_raw(tu: &'tu TranslationUnit<'tu>, ptr: *mut ffi::CXToken, len: c_uint) -> Self {
        let len = if ptr.is_null() { 0 } else { len };
        Tokens { ptr, len, tu }
    }

    fn raw(&self) -> &[ffi::CXToken] {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.ptr, self.len as usize) }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<Token<'tu>> {
        self.raw().get(index).map(|raw| Token { raw: *raw, tu: self.tu })
    }

    pub fn iter(&self) -> impl Iterator<Item = Token<'tu>> + '_ {
        let tu = self.tu;
        self.raw().iter().map(move |raw| Token { raw: *raw, tu })
    }

    /// The closest cursor for each token, in token order.
    pub fn annotate(&self) -> Vec<Cursor<'tu>> {
        let mut tokens = self.raw().to_vec();
        let mut cursors = vec![unsafe { ffi::clang_getNullCursor() }; tokens.len()];
        if !tokens.is_empty() {
            unsafe {
                ffi::clang_annotateTokens(self.tu.ptr, tokens.as_mut_ptr(), self.len, cursors.as_mut_ptr())
            };
        }
        cursors.into_iter().map(|raw| Cursor::from_raw(raw, self.tu)).collect()
    }
}

impl Drop for Tokens<'_> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { ffi::clang_disposeTokens(self.tu.ptr, self.ptr, self.len) };
            self.ptr = ptr::null_mut();
        }
    }
}

impl fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
